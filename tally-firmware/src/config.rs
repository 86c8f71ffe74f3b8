//! Build-time configuration
//!
//! The tunables come from tally.toml through build.rs. They were checked at
//! compile time already; the boot check here guards against the core's
//! rules drifting from the build script's.

use defmt::*;
use tally_core::config::Tunables;

include!(concat!(env!("OUT_DIR"), "/tunables.rs"));

/// Compiled tunables, or the defaults if they fail validation
pub fn load_tunables() -> Tunables {
    match TUNABLES.validate() {
        Ok(()) => TUNABLES,
        Err(e) => {
            error!("Compiled tunables rejected: {:?}", e);
            error!("Using default tunables");
            Tunables::DEFAULT
        }
    }
}

//! Activity-based power management
//!
//! The display dims after a stretch without accepted presses and goes dark,
//! with the processor asleep, after a longer one.

pub mod activity;
pub mod policy;

pub use activity::ActivityClock;
pub use policy::{PowerPolicy, PowerState, DEFAULT_DIM_THRESHOLD, DEFAULT_OFF_THRESHOLD};

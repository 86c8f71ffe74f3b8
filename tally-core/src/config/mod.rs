//! Configuration types
//!
//! Timing tunables and the compile-time board pin maps.

pub mod board;
pub mod timing;

pub use board::*;
pub use timing::*;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce length of zero samples
    ZeroDebounce,
    /// Dim threshold not below the off threshold
    ThresholdOrder,
    /// Digit illumination time of zero
    ZeroOnTime,
    /// The same GPIO assigned to two lines
    PinConflict { port: Port, pin: u8 },
    /// Pin number outside the port
    PinOutOfRange { port: Port, pin: u8 },
}

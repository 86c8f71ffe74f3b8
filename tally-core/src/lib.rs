//! Board-agnostic core logic for the two-digit counter firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Raw button sample decoding
//! - Debounced up/down counter (0-99, saturating)
//! - Activity clock and power policy (normal, dimmed, off)
//! - Seven-segment digit table and color rule
//! - Tunables and board pin maps
//! - Display driver trait

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod count;
pub mod counter;
pub mod input;
pub mod power;
pub mod segments;
pub mod traits;

pub use count::{Color, Count};
pub use counter::{CounterEvent, DebouncedCounter, Sample, Step};
pub use input::{Buttons, RawInput};
pub use power::{ActivityClock, PowerPolicy, PowerState};

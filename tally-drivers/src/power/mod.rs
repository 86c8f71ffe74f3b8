//! Sleep and wake handling

pub mod sleep;

pub use sleep::{sleep_until_pressed, WakeSource};

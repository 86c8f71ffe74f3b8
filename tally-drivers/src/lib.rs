//! Hardware driver implementations
//!
//! This crate provides the pieces between the core logic and the pins:
//!
//! - Multiplexed seven-segment display over `tally-hal` output pins
//! - Timed renderer (full brightness, dimmed, lamp test)
//! - Blank-and-sleep sequence with wake on button press
//! - [`panel::Panel`], one control loop iteration

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod panel;
pub mod power;

#[cfg(test)]
pub(crate) mod mock;

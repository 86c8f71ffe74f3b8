//! Tally Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. The counter logic and display drivers only ever
//! see these traits, so they run unchanged on the host under test.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tally-firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tally-drivers (display, sleep, panel)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tally-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  tally-hal-   │
//!             │   stm32f0     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`power::LowPower`] - Deep sleep arming, scoped by [`power::SleepGuard`]

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod power;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use power::{LowPower, SleepGuard};

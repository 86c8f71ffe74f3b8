//! STM32F0-specific HAL for the Tally firmware
//!
//! This crate provides STM32F0 implementations of the `tally-hal` traits on
//! top of embassy-stm32. It supports:
//!
//! - STM32F042K6 (counter board)
//! - STM32F042F6
//!
//! # Features
//!
//! - `stm32f042k6` / `stm32f042f6` - Select the chip
//! - `defmt` - Enable defmt logging inside embassy-stm32

#![no_std]

pub mod gpio;
pub mod power;

pub use gpio::{Button, Line};
pub use power::StopMode;

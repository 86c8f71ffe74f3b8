//! STOP mode control for STM32F0
//!
//! With SLEEPDEEP set and PWR_CR.PDDS left clear, the executor's idle
//! `wfe` puts the chip in STOP mode. The button EXTI lines stay active and
//! resume the core. On wake the system clock is HSI, which is what the
//! firmware runs on anyway.

use cortex_m::peripheral::SCB;

/// Deep sleep control backed by the Cortex-M system control block
pub struct StopMode {
    scb: SCB,
    armed: bool,
}

impl StopMode {
    /// Take ownership of the SCB for sleep control
    pub fn new(scb: SCB) -> Self {
        Self { scb, armed: false }
    }
}

impl tally_hal::LowPower for StopMode {
    fn arm(&mut self) {
        self.scb.set_sleepdeep();
        self.armed = true;
    }

    fn disarm(&mut self) {
        self.scb.clear_sleepdeep();
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

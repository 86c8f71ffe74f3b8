//! GPIO wrappers for STM32F0
//!
//! Adapts embassy-stm32 pins to the `tally-hal` GPIO traits.

use core::convert::Infallible;

use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::Output;
use embedded_hal::digital::ErrorType;
use embedded_hal_async::digital::Wait;

/// Push-pull output line (segment, decimal point or cathode)
pub struct Line<'d> {
    pin: Output<'d>,
}

impl<'d> Line<'d> {
    /// Wrap a configured output pin
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl tally_hal::OutputPin for Line<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Pulled-up push button with an EXTI wake line
///
/// Reads levels for the per-iteration sample and doubles as the wake
/// source while the core is stopped.
pub struct Button<'d> {
    pin: ExtiInput<'d>,
}

impl<'d> Button<'d> {
    /// Wrap an EXTI-capable input
    pub fn new(pin: ExtiInput<'d>) -> Self {
        Self { pin }
    }
}

impl tally_hal::InputPin for Button<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl ErrorType for Button<'_> {
    type Error = Infallible;
}

impl Wait for Button<'_> {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_high().await;
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_low().await;
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_rising_edge().await;
        Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_falling_edge().await;
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        self.pin.wait_for_any_edge().await;
        Ok(())
    }
}


//! Persistence-of-vision renderer
//!
//! One call to [`Renderer::render`] is one refresh cycle: the units digit,
//! then the tens digit, each lit for `digit_on_us`. A value below ten still
//! spends the tens slot dark so every cycle takes the same time and single
//! digits do not look brighter than double ones.
//!
//! Dimming keeps the peak current and stretches the dark time: each slot is
//! followed by an extra `dim_off_us`.

use embedded_hal::delay::DelayNs;
use tally_core::config::Tunables;
use tally_core::count::{Color, Count};
use tally_core::power::PowerState;
use tally_core::segments::Segments;
use tally_core::traits::{DigitPosition, SegmentDisplay};

/// Multiplex timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Renderer {
    digit_on_us: u32,
    dim_off_us: u32,
}

impl Renderer {
    pub fn new(digit_on_us: u32, dim_off_us: u32) -> Self {
        Self {
            digit_on_us,
            dim_off_us,
        }
    }

    pub fn from_tunables(tunables: &Tunables) -> Self {
        Self::new(tunables.digit_on_us, tunables.dim_off_us)
    }

    /// Draw one refresh cycle
    ///
    /// `PowerState::Off` only blanks; sleeping is up to the caller.
    pub fn render<D, T>(
        &self,
        display: &mut D,
        delay: &mut T,
        count: Count,
        color: Color,
        power: PowerState,
    ) where
        D: SegmentDisplay,
        T: DelayNs,
    {
        let dimmed = match power {
            PowerState::Normal => false,
            PowerState::Dimmed => true,
            PowerState::Off => {
                display.blank();
                return;
            }
        };

        self.slot(display, delay, DigitPosition::Units, count.units(), color, dimmed);

        if count.has_tens() {
            self.slot(display, delay, DigitPosition::Tens, count.tens(), color, dimmed);
        } else {
            // Compensate for the dark tens digit
            delay.delay_us(self.digit_on_us);
            if dimmed {
                delay.delay_us(self.dim_off_us);
            }
        }
    }

    fn slot<D, T>(
        &self,
        display: &mut D,
        delay: &mut T,
        position: DigitPosition,
        digit: u8,
        color: Color,
        dimmed: bool,
    ) where
        D: SegmentDisplay,
        T: DelayNs,
    {
        display.show(position, Segments::digit(digit), color);
        delay.delay_us(self.digit_on_us);
        display.blank();
        if dimmed {
            delay.delay_us(self.dim_off_us);
        }
    }

    /// Length of one refresh cycle in `power` (µs), whatever the digit count
    pub fn cycle_us(&self, power: PowerState) -> u32 {
        match power {
            PowerState::Normal => 2 * self.digit_on_us,
            PowerState::Dimmed => 2 * (self.digit_on_us + self.dim_off_us),
            PowerState::Off => 0,
        }
    }

    /// Boot lamp test: digits 0 to 9 in red, each refreshed for `hold_ms`
    pub fn lamp_test<D, T>(&self, display: &mut D, delay: &mut T, hold_ms: u32)
    where
        D: SegmentDisplay,
        T: DelayNs,
    {
        let cycle_us = u64::from(self.cycle_us(PowerState::Normal).max(1));
        let cycles = (u64::from(hold_ms) * 1000 / cycle_us).max(1);

        for digit in 0..10 {
            let count = Count::new(digit);
            for _ in 0..cycles {
                self.render(display, delay, count, Color::Red, PowerState::Normal);
            }
        }
        display.blank();
    }
}

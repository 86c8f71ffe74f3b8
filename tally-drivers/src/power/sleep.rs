//! Sleep until a button is pressed
//!
//! The wake interrupts carry no data. Waking is modelled as awaiting a low
//! level on either button line while deep sleep is armed; the executor stops
//! the core in between. Once awake the press is still bouncing, so the caller
//! is held for the settle time before the counter samples again.

use embassy_futures::select::{select, Either};
use embedded_hal::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use tally_hal::{LowPower, SleepGuard};

/// Which line ended the sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeSource {
    Up,
    Down,
}

/// Arm deep sleep, wait for a press on either button, then settle
///
/// Deep sleep is disarmed again before the settle delay starts, whichever
/// way the wait ends.
pub async fn sleep_until_pressed<P, B, T>(
    power: &mut P,
    up: &mut B,
    down: &mut B,
    delay: &mut T,
    settle_ms: u32,
) -> WakeSource
where
    P: LowPower,
    B: Wait,
    T: DelayNs,
{
    let source = {
        let _guard = SleepGuard::arm(power);
        // A failed wait still means the line fired; either way we are awake
        match select(up.wait_for_low(), down.wait_for_low()).await {
            Either::First(_) => WakeSource::Up,
            Either::Second(_) => WakeSource::Down,
        }
    };

    delay.delay_ms(settle_ms);
    source
}

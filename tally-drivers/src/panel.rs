//! Control loop body
//!
//! One [`Panel::step`] is one pass of the firmware's forever loop:
//!
//! 1. Sample both button lines
//! 2. Feed the debounced counter
//! 3. Restart the activity clock on an accepted press, or blank and sleep
//!    on the power-off gesture
//! 4. Count the iteration and pick the power state
//! 5. Draw one refresh cycle, or blank and sleep when the state is Off
//!
//! Counter, clock and display are only touched from here. The wake
//! interrupts do not share any of it.

use embedded_hal::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use tally_core::config::Tunables;
use tally_core::count::{Color, Count};
use tally_core::counter::{CounterEvent, DebouncedCounter};
use tally_core::input::RawInput;
use tally_core::power::{ActivityClock, PowerPolicy, PowerState};
use tally_core::traits::SegmentDisplay;
use tally_hal::{InputPin, LowPower};

use crate::display::Renderer;
use crate::power::{sleep_until_pressed, WakeSource};

/// What happened during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    pub count: Count,
    pub color: Color,
    pub power: PowerState,
    pub event: Option<CounterEvent>,
    /// Set when the step slept; names the button that woke it
    pub wake: Option<WakeSource>,
}

/// Counter panel: buttons in, multiplexed digits out
pub struct Panel<D, B, P, T> {
    display: D,
    up: B,
    down: B,
    power: P,
    delay: T,
    counter: DebouncedCounter,
    clock: ActivityClock,
    policy: PowerPolicy,
    renderer: Renderer,
    tunables: Tunables,
}

impl<D, B, P, T> Panel<D, B, P, T>
where
    D: SegmentDisplay,
    B: InputPin + Wait,
    P: LowPower,
    T: DelayNs,
{
    /// Create a panel at count zero with the display dark
    pub fn new(mut display: D, up: B, down: B, power: P, delay: T, tunables: Tunables) -> Self {
        display.blank();
        Self {
            display,
            up,
            down,
            power,
            delay,
            counter: DebouncedCounter::new(tunables.debounce_samples),
            clock: ActivityClock::new(),
            policy: tunables.power_policy(),
            renderer: Renderer::from_tunables(&tunables),
            tunables,
        }
    }

    /// Sample the two button lines
    pub fn read_input(&self) -> RawInput {
        RawInput::from_levels(self.up.is_high(), self.down.is_high())
    }

    /// Run the boot lamp test if enabled
    pub fn lamp_test(&mut self) {
        if self.tunables.self_test_hold_ms > 0 {
            self.renderer.lamp_test(
                &mut self.display,
                &mut self.delay,
                self.tunables.self_test_hold_ms,
            );
        }
    }

    /// One loop iteration
    pub async fn step(&mut self) -> StepReport {
        let raw = self.read_input();
        let sample = self.counter.sample(raw);
        let mut wake = None;

        match sample.event {
            Some(CounterEvent::Accepted { .. }) => self.clock.reset(),
            Some(CounterEvent::PowerOffGesture) => wake = Some(self.blank_and_sleep().await),
            None => {}
        }

        let color = sample.count.color();
        self.clock.tick();
        let power = self.policy.state(&self.clock);

        if power == PowerState::Off {
            wake = Some(self.blank_and_sleep().await);
        } else {
            self.renderer
                .render(&mut self.display, &mut self.delay, sample.count, color, power);
        }

        StepReport {
            count: sample.count,
            color,
            power,
            event: sample.event,
            wake,
        }
    }

    async fn blank_and_sleep(&mut self) -> WakeSource {
        self.display.blank();
        self.clock.reset();
        sleep_until_pressed(
            &mut self.power,
            &mut self.up,
            &mut self.down,
            &mut self.delay,
            self.tunables.wake_settle_ms,
        )
        .await
    }

    pub fn count(&self) -> Count {
        self.counter.count()
    }

    pub fn counter(&self) -> &DebouncedCounter {
        &self.counter
    }

    pub fn clock(&self) -> &ActivityClock {
        &self.clock
    }
}

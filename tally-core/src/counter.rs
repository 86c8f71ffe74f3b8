//! Debounced up/down counter
//!
//! Converts one raw button sample per loop iteration into a stable count.
//! A press is accepted once the same non-idle sample has been seen
//! `debounce_samples` times in a row. After that the counter ignores the
//! input until it returns to idle, so holding a button never auto-repeats.
//!
//! Releasing the last button while the count sits at zero is the manual
//! power-off gesture.

use crate::count::Count;
use crate::input::{Buttons, RawInput};

/// Consecutive identical samples needed to accept a press
pub const DEFAULT_DEBOUNCE_SAMPLES: u16 = 200;

/// Direction applied by an accepted press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Up,
    Down,
    /// Both buttons were held; the press is absorbed
    None,
}

/// Something the caller has to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterEvent {
    /// A press survived debouncing; the activity clock must restart.
    ///
    /// `changed` is false when the step hit a bound or was a double press.
    Accepted { step: Step, changed: bool },
    /// Buttons released with the count at zero after a registered press
    PowerOffGesture,
}

/// Result of one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Count after this sample
    pub count: Count,
    /// Event raised by this sample, if any
    pub event: Option<CounterEvent>,
}

/// Debounce state machine and the count it guards
#[derive(Debug, Clone)]
pub struct DebouncedCounter {
    /// Reload value for `countdown`
    debounce_samples: u16,
    /// Identical samples still required before a press is accepted
    countdown: u16,
    /// Previous sample, `None` before the first one
    last_sample: Option<RawInput>,
    count: Count,
    /// A press has been counted and the buttons have not been released yet
    pending_release: bool,
}

impl Default for DebouncedCounter {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_SAMPLES)
    }
}

impl DebouncedCounter {
    /// Create a counter at zero
    ///
    /// A `debounce_samples` of zero is treated as one.
    pub fn new(debounce_samples: u16) -> Self {
        let debounce_samples = debounce_samples.max(1);
        Self {
            debounce_samples,
            countdown: debounce_samples,
            last_sample: None,
            count: Count::ZERO,
            pending_release: false,
        }
    }

    /// Feed one raw sample
    pub fn sample(&mut self, raw: RawInput) -> Sample {
        let mut event = None;

        if raw.is_idle() {
            if self.count == Count::ZERO && self.pending_release {
                event = Some(CounterEvent::PowerOffGesture);
            }
            self.countdown = self.debounce_samples;
            self.pending_release = false;
        } else if self.last_sample == Some(raw) && !self.pending_release {
            self.countdown -= 1;
            if self.countdown == 0 {
                self.countdown = self.debounce_samples;
                self.pending_release = true;
                event = Some(self.apply(raw.buttons()));
            }
        } else {
            // Bounce, or the accepted press is still held
            self.countdown = self.debounce_samples;
        }

        self.last_sample = Some(raw);
        Sample {
            count: self.count,
            event,
        }
    }

    fn apply(&mut self, buttons: Buttons) -> CounterEvent {
        let previous = self.count;
        let step = match buttons {
            Buttons::Up => {
                self.count = self.count.incremented();
                Step::Up
            }
            Buttons::Down => {
                self.count = self.count.decremented();
                Step::Down
            }
            Buttons::Both | Buttons::Released => Step::None,
        };
        CounterEvent::Accepted {
            step,
            changed: self.count != previous,
        }
    }

    /// Current stable count
    pub fn count(&self) -> Count {
        self.count
    }

    /// Samples still required before the current input is accepted
    pub fn countdown(&self) -> u16 {
        self.countdown
    }

    /// Configured debounce length
    pub fn debounce_samples(&self) -> u16 {
        self.debounce_samples
    }

    /// Whether a counted press is waiting for release
    pub fn pending_release(&self) -> bool {
        self.pending_release
    }
}

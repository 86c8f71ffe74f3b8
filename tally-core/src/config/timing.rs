//! Timing and threshold tunables
//!
//! Every fixed delay and threshold of the counter lives here. Real-time
//! values are in wall-clock units and go through a delay provider, so they
//! hold regardless of the core clock.

use super::ConfigError;
use crate::counter::DEFAULT_DEBOUNCE_SAMPLES;
use crate::power::{PowerPolicy, DEFAULT_DIM_THRESHOLD, DEFAULT_OFF_THRESHOLD};

/// Digit illumination time per multiplex slot (µs)
pub const DEFAULT_DIGIT_ON_US: u32 = 50;
/// Extra dark time after each slot when dimmed (µs)
pub const DEFAULT_DIM_OFF_US: u32 = 200;
/// Settle time after waking, lets the waking press stop bouncing (ms)
pub const DEFAULT_WAKE_SETTLE_MS: u32 = 500;

/// Counter tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tunables {
    /// Identical samples needed to accept a press
    pub debounce_samples: u16,
    /// Idle iterations before dimming
    pub dim_threshold: u32,
    /// Idle iterations before blanking and sleeping
    pub off_threshold: u32,
    /// Digit on-time per slot (µs)
    pub digit_on_us: u32,
    /// Extra off-time per slot when dimmed (µs)
    pub dim_off_us: u32,
    /// Delay after wake before sampling again (ms)
    pub wake_settle_ms: u32,
    /// Hold time per digit of the boot lamp test (ms), 0 disables it
    pub self_test_hold_ms: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Tunables {
    /// Factory defaults
    pub const DEFAULT: Self = Self {
        debounce_samples: DEFAULT_DEBOUNCE_SAMPLES,
        dim_threshold: DEFAULT_DIM_THRESHOLD,
        off_threshold: DEFAULT_OFF_THRESHOLD,
        digit_on_us: DEFAULT_DIGIT_ON_US,
        dim_off_us: DEFAULT_DIM_OFF_US,
        wake_settle_ms: DEFAULT_WAKE_SETTLE_MS,
        self_test_hold_ms: 0,
    };

    /// Check value ranges and ordering
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_samples == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.dim_threshold >= self.off_threshold {
            return Err(ConfigError::ThresholdOrder);
        }
        if self.digit_on_us == 0 {
            return Err(ConfigError::ZeroOnTime);
        }
        Ok(())
    }

    /// Power policy built from the thresholds
    pub fn power_policy(&self) -> PowerPolicy {
        PowerPolicy::new(self.dim_threshold, self.off_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tunables = Tunables::default();
        assert_eq!(tunables.validate(), Ok(()));
        assert_eq!(tunables.debounce_samples, 200);
        assert_eq!(tunables.dim_threshold, 100_000);
        assert_eq!(tunables.off_threshold, 300_000);
    }

    #[test]
    fn test_rejects_bad_values() {
        let zero_debounce = Tunables {
            debounce_samples: 0,
            ..Tunables::DEFAULT
        };
        assert_eq!(zero_debounce.validate(), Err(ConfigError::ZeroDebounce));

        let inverted = Tunables {
            dim_threshold: 10,
            off_threshold: 10,
            ..Tunables::DEFAULT
        };
        assert_eq!(inverted.validate(), Err(ConfigError::ThresholdOrder));

        let dark = Tunables {
            digit_on_us: 0,
            ..Tunables::DEFAULT
        };
        assert_eq!(dark.validate(), Err(ConfigError::ZeroOnTime));
    }

    #[test]
    fn test_power_policy_uses_thresholds() {
        let tunables = Tunables {
            dim_threshold: 7,
            off_threshold: 9,
            ..Tunables::DEFAULT
        };
        let policy = tunables.power_policy();
        assert_eq!(policy.dim_threshold(), 7);
        assert_eq!(policy.off_threshold(), 9);
    }
}

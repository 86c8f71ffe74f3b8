//! Power state selection

use super::activity::ActivityClock;

/// Idle iterations before the display dims
pub const DEFAULT_DIM_THRESHOLD: u32 = 100_000;
/// Idle iterations before the display blanks and the core sleeps
pub const DEFAULT_OFF_THRESHOLD: u32 = 300_000;

/// Display power state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Full brightness
    Normal,
    /// Reduced duty cycle
    Dimmed,
    /// Display blank, processor asleep until a button is pressed
    Off,
}

/// Maps idle time to a power state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerPolicy {
    dim_threshold: u32,
    off_threshold: u32,
}

impl Default for PowerPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DIM_THRESHOLD, DEFAULT_OFF_THRESHOLD)
    }
}

impl PowerPolicy {
    /// Create a policy from the two thresholds
    ///
    /// Thresholds must satisfy `dim < off`; see
    /// [`Tunables::validate`](crate::config::Tunables::validate).
    pub const fn new(dim_threshold: u32, off_threshold: u32) -> Self {
        Self {
            dim_threshold,
            off_threshold,
        }
    }

    /// Power state for the given idle clock
    pub fn state(&self, clock: &ActivityClock) -> PowerState {
        self.state_at(clock.iterations())
    }

    /// Power state after `iterations` idle iterations
    pub fn state_at(&self, iterations: u32) -> PowerState {
        if iterations >= self.off_threshold {
            PowerState::Off
        } else if iterations >= self.dim_threshold {
            PowerState::Dimmed
        } else {
            PowerState::Normal
        }
    }

    pub fn dim_threshold(&self) -> u32 {
        self.dim_threshold
    }

    pub fn off_threshold(&self) -> u32 {
        self.off_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        let policy = PowerPolicy::default();
        let expected = [
            (0, PowerState::Normal),
            (DEFAULT_DIM_THRESHOLD - 1, PowerState::Normal),
            (DEFAULT_DIM_THRESHOLD, PowerState::Dimmed),
            (DEFAULT_OFF_THRESHOLD - 1, PowerState::Dimmed),
            (DEFAULT_OFF_THRESHOLD, PowerState::Off),
        ];

        for (iterations, state) in expected {
            assert_eq!(policy.state_at(iterations), state, "at {}", iterations);
        }
    }

    #[test]
    fn test_state_follows_clock() {
        let policy = PowerPolicy::new(3, 5);
        let mut clock = ActivityClock::new();
        let mut seen = [PowerState::Off; 6];
        for slot in seen.iter_mut() {
            *slot = policy.state(&clock);
            clock.tick();
        }
        assert_eq!(
            seen,
            [
                PowerState::Normal,
                PowerState::Normal,
                PowerState::Normal,
                PowerState::Dimmed,
                PowerState::Dimmed,
                PowerState::Off,
            ]
        );
    }
}

//! Loop iterations since the last user activity

/// Idle clock measured in loop iterations
///
/// Restarted by an accepted press and whenever the display is blanked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivityClock {
    iterations: u32,
}

impl ActivityClock {
    /// Create a clock at zero
    pub const fn new() -> Self {
        Self { iterations: 0 }
    }

    /// Count one loop iteration
    pub fn tick(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    /// Restart from zero
    pub fn reset(&mut self) {
        self.iterations = 0;
    }

    /// Iterations since the last reset
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_and_reset() {
        let mut clock = ActivityClock::new();
        for _ in 0..10 {
            clock.tick();
        }
        assert_eq!(clock.iterations(), 10);
        clock.reset();
        assert_eq!(clock.iterations(), 0);
    }

    #[test]
    fn test_tick_saturates() {
        let mut clock = ActivityClock {
            iterations: u32::MAX,
        };
        clock.tick();
        assert_eq!(clock.iterations(), u32::MAX);
    }
}

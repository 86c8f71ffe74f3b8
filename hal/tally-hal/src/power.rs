//! Low-power control
//!
//! The counter spends most of its idle life with the display dark and the
//! core stopped. Entering that state is split in two halves: arming deep
//! sleep before the wait, and disarming it afterwards. [`SleepGuard`] ties
//! the second half to scope exit so no return path can leave the core armed.

/// Chip-level deep sleep control
pub trait LowPower {
    /// Arm deep sleep and the button wake sources
    ///
    /// After this call the next idle wait of the core stops the clocks
    /// until a wake source fires.
    fn arm(&mut self);

    /// Return to normal run mode and mask the wake sources again
    fn disarm(&mut self);

    /// Whether deep sleep is currently armed
    fn is_armed(&self) -> bool;
}

/// Scoped deep sleep acquisition
///
/// Arms on construction, disarms on drop.
pub struct SleepGuard<'a, P: LowPower> {
    power: &'a mut P,
}

impl<'a, P: LowPower> SleepGuard<'a, P> {
    /// Arm deep sleep for the lifetime of the guard
    pub fn arm(power: &'a mut P) -> Self {
        power.arm();
        Self { power }
    }

    /// Check that the underlying control is still armed
    pub fn is_armed(&self) -> bool {
        self.power.is_armed()
    }
}

impl<P: LowPower> Drop for SleepGuard<'_, P> {
    fn drop(&mut self) {
        self.power.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPower {
        armed: bool,
        arms: u32,
        disarms: u32,
    }

    impl LowPower for MockPower {
        fn arm(&mut self) {
            self.armed = true;
            self.arms += 1;
        }

        fn disarm(&mut self) {
            self.armed = false;
            self.disarms += 1;
        }

        fn is_armed(&self) -> bool {
            self.armed
        }
    }

    #[test]
    fn test_guard_disarms_on_scope_exit() {
        let mut power = MockPower::default();
        {
            let guard = SleepGuard::arm(&mut power);
            assert!(guard.is_armed());
        }
        assert!(!power.armed);
        assert_eq!(power.arms, 1);
        assert_eq!(power.disarms, 1);
    }

    #[test]
    fn test_guard_disarms_on_early_return() {
        fn wake_immediately(power: &mut MockPower, bounced: bool) -> bool {
            let _guard = SleepGuard::arm(power);
            if bounced {
                return false;
            }
            true
        }

        let mut power = MockPower::default();
        assert!(!wake_immediately(&mut power, true));
        assert!(!power.armed);
        assert!(wake_immediately(&mut power, false));
        assert!(!power.armed);
        assert_eq!(power.disarms, 2);
    }
}

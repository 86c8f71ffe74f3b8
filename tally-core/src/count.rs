//! Displayed count and its color

/// Counter value, always within `0..=Count::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Count(u8);

impl Count {
    /// Largest value two digits can show
    pub const MAX: u8 = 99;
    /// Zero
    pub const ZERO: Self = Self(0);

    /// Create a count, clamping to [`Count::MAX`]
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Numeric value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// One more, saturating at 99
    pub const fn incremented(self) -> Self {
        if self.0 >= Self::MAX {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    /// One less, saturating at 0
    pub const fn decremented(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Least significant decimal digit
    pub const fn units(self) -> u8 {
        self.0 % 10
    }

    /// Most significant decimal digit
    pub const fn tens(self) -> u8 {
        self.0 / 10
    }

    /// Whether the tens digit is lit
    pub const fn has_tens(self) -> bool {
        self.0 >= 10
    }

    /// Display color for this value
    pub const fn color(self) -> Color {
        Color::for_count(self)
    }
}

impl From<Count> for u8 {
    fn from(count: Count) -> Self {
        count.0
    }
}

/// LED color of both digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Green,
}

impl Color {
    /// Green at exactly one, red for every other value.
    pub const fn for_count(count: Count) -> Self {
        if count.0 == 1 {
            Color::Green
        } else {
            Color::Red
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        assert_eq!(Count::new(42).value(), 42);
        assert_eq!(Count::new(99).value(), 99);
        assert_eq!(Count::new(200).value(), 99);
    }

    #[test]
    fn test_saturating_steps() {
        assert_eq!(Count::ZERO.decremented(), Count::ZERO);
        assert_eq!(Count::new(99).incremented().value(), 99);
        assert_eq!(Count::new(41).incremented().value(), 42);
        assert_eq!(Count::new(41).decremented().value(), 40);
    }

    #[test]
    fn test_digits() {
        let count = Count::new(57);
        assert_eq!(count.units(), 7);
        assert_eq!(count.tens(), 5);
        assert!(count.has_tens());
        assert!(!Count::new(9).has_tens());
        assert!(Count::new(10).has_tens());
    }

    #[test]
    fn test_color_rule() {
        assert_eq!(Count::new(0).color(), Color::Red);
        assert_eq!(Count::new(1).color(), Color::Green);
        assert_eq!(Count::new(2).color(), Color::Red);
        assert_eq!(Count::new(11).color(), Color::Red);
    }
}

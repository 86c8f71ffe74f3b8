//! Raw button samples
//!
//! Both buttons are wired to pulled-up, active-low lines. One sample packs
//! the two line levels into the low two bits: bit 0 is the up line, bit 1 the
//! down line. A set bit means the line is high, i.e. the button is released.

/// Bit of the up line in a raw sample
pub const UP_LINE: u8 = 1 << 0;
/// Bit of the down line in a raw sample
pub const DOWN_LINE: u8 = 1 << 1;
/// Both line bits
pub const LINE_MASK: u8 = UP_LINE | DOWN_LINE;

/// One 2-bit sample of the button lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawInput(u8);

/// Decoded view of a raw sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Buttons {
    /// Neither button pressed (idle)
    Released,
    /// Only the up button pressed
    Up,
    /// Only the down button pressed
    Down,
    /// Both buttons pressed at once
    Both,
}

impl RawInput {
    /// Both lines high, nothing pressed
    pub const IDLE: Self = Self(LINE_MASK);
    /// Up button held: up line pulled low, down line high
    pub const UP: Self = Self(DOWN_LINE);
    /// Down button held: down line pulled low, up line high
    pub const DOWN: Self = Self(UP_LINE);
    /// Both buttons held
    pub const BOTH: Self = Self(0);

    /// Build a sample from raw bits; anything above bit 1 is ignored
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & LINE_MASK)
    }

    /// Build a sample from the two line levels (true = high)
    pub const fn from_levels(up_high: bool, down_high: bool) -> Self {
        let mut bits = 0;
        if up_high {
            bits |= UP_LINE;
        }
        if down_high {
            bits |= DOWN_LINE;
        }
        Self(bits)
    }

    /// Raw bits of the sample
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether this is the idle (nothing pressed) value
    pub const fn is_idle(self) -> bool {
        self.0 == LINE_MASK
    }

    /// Which buttons are held in this sample
    pub const fn buttons(self) -> Buttons {
        match (self.0 & UP_LINE != 0, self.0 & DOWN_LINE != 0) {
            (true, true) => Buttons::Released,
            (false, true) => Buttons::Up,
            (true, false) => Buttons::Down,
            (false, false) => Buttons::Both,
        }
    }
}

impl Default for RawInput {
    fn default() -> Self {
        Self::IDLE
    }
}

impl From<Buttons> for RawInput {
    fn from(buttons: Buttons) -> Self {
        match buttons {
            Buttons::Released => Self::IDLE,
            Buttons::Up => Self::UP,
            Buttons::Down => Self::DOWN,
            Buttons::Both => Self::BOTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_low_decoding() {
        assert_eq!(RawInput::from_levels(true, true).buttons(), Buttons::Released);
        assert_eq!(RawInput::from_levels(false, true).buttons(), Buttons::Up);
        assert_eq!(RawInput::from_levels(true, false).buttons(), Buttons::Down);
        assert_eq!(RawInput::from_levels(false, false).buttons(), Buttons::Both);
    }

    #[test]
    fn test_idle_is_both_lines_high() {
        assert!(RawInput::IDLE.is_idle());
        assert_eq!(RawInput::IDLE.bits(), 0b11);
        assert!(!RawInput::BOTH.is_idle());
        assert_eq!(RawInput::default(), RawInput::IDLE);
    }

    #[test]
    fn test_from_bits_masks_upper_bits() {
        assert_eq!(RawInput::from_bits(0xFF), RawInput::IDLE);
        assert_eq!(RawInput::from_bits(0b1110), RawInput::UP);
    }

    #[test]
    fn test_buttons_round_trip_constants() {
        for buttons in [Buttons::Released, Buttons::Up, Buttons::Down, Buttons::Both] {
            assert_eq!(RawInput::from(buttons).buttons(), buttons);
        }
    }
}

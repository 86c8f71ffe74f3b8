//! Seven-segment digit table
//!
//! ```text
//!    aaa
//!   f   b
//!   f   b
//!    ggg
//!   e   c
//!   e   c
//!    ddd
//! ```

/// One segment line of a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    /// All segments in line order
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of lit segments, bit 0 = A through bit 6 = G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(u8);

impl Segments {
    pub const NONE: Self = Self(0);

    const A: u8 = Segment::A.bit();
    const B: u8 = Segment::B.bit();
    const C: u8 = Segment::C.bit();
    const D: u8 = Segment::D.bit();
    const E: u8 = Segment::E.bit();
    const F: u8 = Segment::F.bit();
    const G: u8 = Segment::G.bit();

    /// Lookup table for the decimal digits
    pub const DIGITS: [Segments; 10] = [
        Self(Self::A | Self::B | Self::C | Self::D | Self::E | Self::F),
        Self(Self::B | Self::C),
        Self(Self::A | Self::B | Self::D | Self::E | Self::G),
        Self(Self::A | Self::B | Self::C | Self::D | Self::G),
        Self(Self::B | Self::C | Self::F | Self::G),
        Self(Self::A | Self::C | Self::D | Self::F | Self::G),
        Self(Self::A | Self::C | Self::D | Self::E | Self::F | Self::G),
        Self(Self::A | Self::B | Self::C),
        Self(Self::A | Self::B | Self::C | Self::D | Self::E | Self::F | Self::G),
        Self(Self::A | Self::B | Self::C | Self::D | Self::F | Self::G),
    ];

    /// Segments for a decimal digit; anything above 9 is blank
    pub const fn digit(value: u8) -> Self {
        if value < 10 {
            Self::DIGITS[value as usize]
        } else {
            Self::NONE
        }
    }

    /// Build from raw bits, bit 0 = A; bit 7 is ignored
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x7F)
    }

    /// Whether a segment is lit
    pub const fn contains(self, segment: Segment) -> bool {
        self.0 & segment.bit() != 0
    }

    /// Number of lit segments
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_counts() {
        let lit: [u32; 10] = [6, 2, 5, 5, 4, 5, 6, 3, 7, 6];
        for (digit, expected) in lit.iter().enumerate() {
            assert_eq!(Segments::digit(digit as u8).count(), *expected, "digit {}", digit);
        }
    }

    #[test]
    fn test_specific_shapes() {
        let one = Segments::digit(1);
        assert!(one.contains(Segment::B) && one.contains(Segment::C));
        assert!(!one.contains(Segment::A));

        let zero = Segments::digit(0);
        assert!(!zero.contains(Segment::G));

        let seven = Segments::digit(7);
        assert!(seven.contains(Segment::A));
        assert!(!seven.contains(Segment::F));
    }

    #[test]
    fn test_out_of_range_is_blank() {
        assert_eq!(Segments::digit(10), Segments::NONE);
    }

    #[test]
    fn test_digits_are_distinct() {
        for a in 0..10 {
            for b in (a + 1)..10 {
                assert_ne!(Segments::digit(a), Segments::digit(b));
            }
        }
    }
}

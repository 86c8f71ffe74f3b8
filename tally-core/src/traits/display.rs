//! Display driver trait for the two-digit LED panel

use crate::count::Color;
use crate::segments::Segments;

/// Which of the two digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    Units,
    Tens,
}

/// Trait for a multiplexed two-digit, two-color segment display
///
/// Only one digit is lit at a time. Timing is the caller's business: the
/// driver switches lines and returns immediately.
pub trait SegmentDisplay {
    /// Light one digit with the given segments in the given color
    ///
    /// Any previously lit digit is turned off first.
    fn show(&mut self, position: DigitPosition, segments: Segments, color: Color);

    /// Turn every digit off
    fn blank(&mut self);
}

//! Multiplexed two-digit LED driver
//!
//! Seven segment lines are shared by both digits. Four select lines (units
//! and tens, each red and green) pick which digit lights and in which color.
//! All lines are active high.

use tally_core::config::Cathodes;
use tally_core::count::Color;
use tally_core::segments::{Segment, Segments};
use tally_core::traits::{DigitPosition, SegmentDisplay};
use tally_hal::OutputPin;

/// Segment display over plain GPIO lines
pub struct MultiplexedDisplay<O> {
    segments: [O; 7],
    decimal_point: Option<O>,
    cathodes: Cathodes<O>,
}

impl<O: OutputPin> MultiplexedDisplay<O> {
    /// Create the driver and switch everything off
    pub fn new(segments: [O; 7], decimal_point: Option<O>, cathodes: Cathodes<O>) -> Self {
        let mut display = Self {
            segments,
            decimal_point,
            cathodes,
        };
        display.blank();
        for line in display.segments.iter_mut() {
            line.set_low();
        }
        if let Some(dp) = display.decimal_point.as_mut() {
            dp.set_low();
        }
        display
    }

    fn select_line(&mut self, position: DigitPosition, color: Color) -> &mut O {
        match (position, color) {
            (DigitPosition::Units, Color::Red) => &mut self.cathodes.units_red,
            (DigitPosition::Units, Color::Green) => &mut self.cathodes.units_green,
            (DigitPosition::Tens, Color::Red) => &mut self.cathodes.tens_red,
            (DigitPosition::Tens, Color::Green) => &mut self.cathodes.tens_green,
        }
    }
}

impl<O: OutputPin> SegmentDisplay for MultiplexedDisplay<O> {
    fn show(&mut self, position: DigitPosition, segments: Segments, color: Color) {
        // Never drive new segments into a lit digit
        self.blank();
        for (line, segment) in self.segments.iter_mut().zip(Segment::ALL) {
            line.set_state(segments.contains(segment));
        }
        self.select_line(position, color).set_high();
    }

    fn blank(&mut self) {
        for line in self.cathodes.as_array_mut() {
            line.set_low();
        }
    }
}

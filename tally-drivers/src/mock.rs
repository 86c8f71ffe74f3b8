//! Test doubles shared by the driver tests
//!
//! Display and delay write into one timeline so tests can check the
//! interleaving of light and dark intervals.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::ErrorType;
use embedded_hal_async::digital::Wait;
use tally_core::count::Color;
use tally_core::segments::Segments;
use tally_core::traits::{DigitPosition, SegmentDisplay};
use tally_hal::{InputPin, LowPower, OutputPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Show(DigitPosition, Segments, Color),
    Blank,
    DelayUs(u32),
    Arm,
    Disarm,
}

pub type Timeline = Rc<RefCell<Vec<Op>>>;

pub fn timeline() -> Timeline {
    Rc::new(RefCell::new(Vec::new()))
}

/// Sum of all delays in a slice of the timeline
pub fn delayed_us(ops: &[Op]) -> u64 {
    ops.iter()
        .map(|op| match op {
            Op::DelayUs(us) => *us as u64,
            _ => 0,
        })
        .sum()
}

pub struct MockDisplay {
    pub log: Timeline,
}

impl SegmentDisplay for MockDisplay {
    fn show(&mut self, position: DigitPosition, segments: Segments, color: Color) {
        self.log.borrow_mut().push(Op::Show(position, segments, color));
    }

    fn blank(&mut self) {
        self.log.borrow_mut().push(Op::Blank);
    }
}

pub struct MockDelay {
    pub log: Timeline,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Op::DelayUs(ns / 1000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Op::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Op::DelayUs(ms * 1000));
    }
}

pub struct MockPower {
    pub log: Timeline,
    pub armed: bool,
}

impl LowPower for MockPower {
    fn arm(&mut self) {
        self.armed = true;
        self.log.borrow_mut().push(Op::Arm);
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.log.borrow_mut().push(Op::Disarm);
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Button whose level the test controls from outside
#[derive(Clone)]
pub struct MockButton {
    pub high: Rc<Cell<bool>>,
    /// Whether this button is the one that fires while asleep
    pub wakes: Rc<Cell<bool>>,
}

impl MockButton {
    pub fn released() -> Self {
        Self {
            high: Rc::new(Cell::new(true)),
            wakes: Rc::new(Cell::new(false)),
        }
    }

    pub fn press(&self) {
        self.high.set(false);
    }

    pub fn release(&self) {
        self.high.set(true);
    }
}

impl InputPin for MockButton {
    fn is_high(&self) -> bool {
        self.high.get()
    }
}

impl ErrorType for MockButton {
    type Error = Infallible;
}

impl MockButton {
    async fn fire_or_hang(&self) -> Result<(), Infallible> {
        if self.wakes.get() {
            Ok(())
        } else {
            core::future::pending().await
        }
    }
}

impl Wait for MockButton {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        self.fire_or_hang().await
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        self.fire_or_hang().await
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.fire_or_hang().await
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        self.fire_or_hang().await
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        self.fire_or_hang().await
    }
}

/// Output line that only remembers its level
#[derive(Debug, Default)]
pub struct MockLine {
    pub high: bool,
    pub writes: u32,
}

impl OutputPin for MockLine {
    fn set_high(&mut self) {
        self.high = true;
        self.writes += 1;
    }

    fn set_low(&mut self) {
        self.high = false;
        self.writes += 1;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

//! Board pin assignment
//!
//! The `breadboard` feature selects the prototype layout, otherwise the PCB
//! layout is used. The pin choices here must match
//! [`BoardVariant::pin_map`], which is what gets logged and validated.

use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::Peripherals;
use tally_core::config::{BoardVariant, Cathodes};
use tally_hal_stm32f0::{Button, Line};

use crate::Irqs;

/// Layout this firmware was built for
pub const BOARD: BoardVariant = BoardVariant::from_breadboard_flag(cfg!(feature = "breadboard"));

/// Every configured line of the board
pub struct BoardPins {
    pub segments: [Line<'static>; 7],
    pub decimal_point: Option<Line<'static>>,
    pub cathodes: Cathodes<Line<'static>>,
    pub up: Button<'static>,
    pub down: Button<'static>,
}

fn line(pin: Output<'static>) -> Line<'static> {
    Line::new(pin)
}

/// Breadboard prototype: segments on PA0-PA5 and PB0, no decimal point
#[cfg(feature = "breadboard")]
pub fn take_pins(p: Peripherals) -> BoardPins {
    BoardPins {
        segments: [
            line(Output::new(p.PA0, Level::Low, Speed::Low)),
            line(Output::new(p.PA1, Level::Low, Speed::Low)),
            line(Output::new(p.PA2, Level::Low, Speed::Low)),
            line(Output::new(p.PA3, Level::Low, Speed::Low)),
            line(Output::new(p.PA4, Level::Low, Speed::Low)),
            line(Output::new(p.PA5, Level::Low, Speed::Low)),
            line(Output::new(p.PB0, Level::Low, Speed::Low)),
        ],
        decimal_point: None,
        cathodes: Cathodes {
            units_red: line(Output::new(p.PA9, Level::Low, Speed::Low)),
            units_green: line(Output::new(p.PA7, Level::Low, Speed::Low)),
            tens_red: line(Output::new(p.PA10, Level::Low, Speed::Low)),
            tens_green: line(Output::new(p.PA8, Level::Low, Speed::Low)),
        },
        up: Button::new(ExtiInput::new(p.PB3, p.EXTI3, Pull::Up, Irqs)),
        down: Button::new(ExtiInput::new(p.PB4, p.EXTI4, Pull::Up, Irqs)),
    }
}

/// Production PCB: decimal point on PA3, red cathodes swapped
#[cfg(not(feature = "breadboard"))]
pub fn take_pins(p: Peripherals) -> BoardPins {
    BoardPins {
        segments: [
            line(Output::new(p.PB1, Level::Low, Speed::Low)),
            line(Output::new(p.PA0, Level::Low, Speed::Low)),
            line(Output::new(p.PA1, Level::Low, Speed::Low)),
            line(Output::new(p.PA4, Level::Low, Speed::Low)),
            line(Output::new(p.PA5, Level::Low, Speed::Low)),
            line(Output::new(p.PA2, Level::Low, Speed::Low)),
            line(Output::new(p.PB0, Level::Low, Speed::Low)),
        ],
        decimal_point: Some(line(Output::new(p.PA3, Level::Low, Speed::Low))),
        cathodes: Cathodes {
            units_red: line(Output::new(p.PA10, Level::Low, Speed::Low)),
            units_green: line(Output::new(p.PA7, Level::Low, Speed::Low)),
            tens_red: line(Output::new(p.PA9, Level::Low, Speed::Low)),
            tens_green: line(Output::new(p.PA8, Level::Low, Speed::Low)),
        },
        up: Button::new(ExtiInput::new(p.PB3, p.EXTI3, Pull::Up, Irqs)),
        down: Button::new(ExtiInput::new(p.PB4, p.EXTI4, Pull::Up, Irqs)),
    }
}

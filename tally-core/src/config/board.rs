//! Board pin maps
//!
//! Two physical layouts exist: the breadboard prototype and the PCB. They
//! differ in where the segment lines land and in the red cathode order; only
//! the PCB routes the decimal point. The variant is fixed at build time.

use super::ConfigError;

/// GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    F,
}

impl Port {
    const fn index(self) -> usize {
        match self {
            Port::A => 0,
            Port::B => 1,
            Port::C => 2,
            Port::D => 3,
            Port::F => 4,
        }
    }
}

/// Pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO port
    pub port: Port,
    /// Pin number within the port (0-15)
    pub pin: u8,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }
}

/// The four digit-select lines, one per digit and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cathodes<T> {
    pub units_red: T,
    pub units_green: T,
    pub tens_red: T,
    pub tens_green: T,
}

impl<T> Cathodes<T> {
    /// All four lines, units first
    pub fn as_array(&self) -> [&T; 4] {
        [
            &self.units_red,
            &self.units_green,
            &self.tens_red,
            &self.tens_green,
        ]
    }

    /// Mutable access to all four lines, units first
    pub fn as_array_mut(&mut self) -> [&mut T; 4] {
        [
            &mut self.units_red,
            &mut self.units_green,
            &mut self.tens_red,
            &mut self.tens_green,
        ]
    }
}

/// Every line the counter uses on one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// Segment lines A through G
    pub segments: [PinConfig; 7],
    /// Decimal point line, held off
    pub decimal_point: Option<PinConfig>,
    /// Digit/color select lines
    pub cathodes: Cathodes<PinConfig>,
    /// Up button (active low, pulled up)
    pub up: PinConfig,
    /// Down button (active low, pulled up)
    pub down: PinConfig,
}

/// Tracks claimed pins, one 16-bit mask per port
struct PinAllocator {
    allocated: [u16; 5],
}

impl PinAllocator {
    fn new() -> Self {
        Self { allocated: [0; 5] }
    }

    fn allocate(&mut self, pin: PinConfig) -> Result<(), ConfigError> {
        if pin.pin > 15 {
            return Err(ConfigError::PinOutOfRange {
                port: pin.port,
                pin: pin.pin,
            });
        }
        let mask = 1u16 << pin.pin;
        let slot = &mut self.allocated[pin.port.index()];
        if *slot & mask != 0 {
            return Err(ConfigError::PinConflict {
                port: pin.port,
                pin: pin.pin,
            });
        }
        *slot |= mask;
        Ok(())
    }
}

impl PinMap {
    /// Check that no GPIO is used twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut allocator = PinAllocator::new();

        for pin in self.segments {
            allocator.allocate(pin)?;
        }
        if let Some(dp) = self.decimal_point {
            allocator.allocate(dp)?;
        }
        for pin in self.cathodes.as_array() {
            allocator.allocate(*pin)?;
        }
        allocator.allocate(self.up)?;
        allocator.allocate(self.down)?;

        Ok(())
    }
}

/// Board layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardVariant {
    /// Breadboard prototype
    Breadboard,
    /// Production PCB, with decimal point
    Pcb,
}

const fn pa(pin: u8) -> PinConfig {
    PinConfig::new(Port::A, pin)
}

const fn pb(pin: u8) -> PinConfig {
    PinConfig::new(Port::B, pin)
}

const BREADBOARD_PINS: PinMap = PinMap {
    segments: [pa(0), pa(1), pa(2), pa(3), pa(4), pa(5), pb(0)],
    decimal_point: None,
    cathodes: Cathodes {
        units_red: pa(9),
        units_green: pa(7),
        tens_red: pa(10),
        tens_green: pa(8),
    },
    up: pb(3),
    down: pb(4),
};

const PCB_PINS: PinMap = PinMap {
    segments: [pb(1), pa(0), pa(1), pa(4), pa(5), pa(2), pb(0)],
    decimal_point: Some(pa(3)),
    cathodes: Cathodes {
        units_red: pa(10),
        units_green: pa(7),
        tens_red: pa(9),
        tens_green: pa(8),
    },
    up: pb(3),
    down: pb(4),
};

impl BoardVariant {
    /// Select the variant from the build-time breadboard switch
    pub const fn from_breadboard_flag(breadboard: bool) -> Self {
        if breadboard {
            BoardVariant::Breadboard
        } else {
            BoardVariant::Pcb
        }
    }

    /// Pin map of this layout
    pub const fn pin_map(self) -> &'static PinMap {
        match self {
            BoardVariant::Breadboard => &BREADBOARD_PINS,
            BoardVariant::Pcb => &PCB_PINS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BoardVariant::Breadboard => "breadboard",
            BoardVariant::Pcb => "pcb",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_layouts_are_conflict_free() {
        for variant in [BoardVariant::Breadboard, BoardVariant::Pcb] {
            assert_eq!(variant.pin_map().validate(), Ok(()), "{}", variant.name());
        }
    }

    #[test]
    fn test_only_pcb_has_decimal_point() {
        assert!(BoardVariant::Breadboard.pin_map().decimal_point.is_none());
        assert!(BoardVariant::Pcb.pin_map().decimal_point.is_some());
    }

    #[test]
    fn test_red_cathodes_swap_between_layouts() {
        let breadboard = BoardVariant::Breadboard.pin_map().cathodes;
        let pcb = BoardVariant::Pcb.pin_map().cathodes;
        assert_eq!(breadboard.units_red, pcb.tens_red);
        assert_eq!(breadboard.tens_red, pcb.units_red);
    }

    #[test]
    fn test_flag_selects_variant() {
        assert_eq!(BoardVariant::from_breadboard_flag(true), BoardVariant::Breadboard);
        assert_eq!(BoardVariant::from_breadboard_flag(false), BoardVariant::Pcb);
    }

    #[test]
    fn test_duplicate_pin_is_rejected() {
        let mut map = *BoardVariant::Pcb.pin_map();
        map.down = map.segments[2];
        assert_eq!(
            map.validate(),
            Err(ConfigError::PinConflict {
                port: Port::A,
                pin: 1
            })
        );
    }

    #[test]
    fn test_out_of_range_pin_is_rejected() {
        let mut map = *BoardVariant::Breadboard.pin_map();
        map.up = PinConfig::new(Port::B, 16);
        assert_eq!(
            map.validate(),
            Err(ConfigError::PinOutOfRange {
                port: Port::B,
                pin: 16
            })
        );
    }
}

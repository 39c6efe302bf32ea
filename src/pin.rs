//! Declarative pin configuration records.
//!
//! A configuration set is an ordered slice of [`PinConfig`] values, normally
//! emitted by an offline configuration tool and stored in a `static`. The
//! engine in [`crate::port`] consumes the slice read-only; nothing here
//! touches hardware.

use bitflags::bitflags;

/// Identifier of one GPIO port block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PortId {
    /// Port A
    A = 0,
    /// Port B
    B = 1,
    /// Port C. Pins 0 to 3 carry the JTAG/SWD interface and are never
    /// reprogrammed by the engine.
    C = 2,
    /// Port D
    D = 3,
    /// Port E
    E = 4,
    /// Port F
    F = 5,
}

impl PortId {
    /// Position of this port in the clock-gate register and the base-address
    /// table.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Converts the numeric port id used by configuration generators.
    pub const fn from_index(index: u8) -> Option<PortId> {
        match index {
            0 => Some(PortId::A),
            1 => Some(PortId::B),
            2 => Some(PortId::C),
            3 => Some(PortId::D),
            4 => Some(PortId::E),
            5 => Some(PortId::F),
            _ => None,
        }
    }
}

/// Signal direction of a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// High-impedance input.
    Input,
    /// Driven output.
    Output,
}

/// Internal resistor applied to an input pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bias {
    /// Neither resistor; the pin floats.
    None,
    /// Weak pull-up.
    PullUp,
    /// Weak pull-down.
    PullDown,
}

/// Logic level driven on an output pin right after configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Logic low.
    Low,
    /// Logic high.
    High,
}

/// Alternate hardware function, routed through the 4-bit per-pin field of
/// the port-control register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AltFunc {
    /// Alternate function 1.
    Af1 = 1,
    /// Alternate function 2.
    Af2 = 2,
    /// Alternate function 3.
    Af3 = 3,
    /// Alternate function 4.
    Af4 = 4,
    /// Alternate function 5.
    Af5 = 5,
    /// Alternate function 6.
    Af6 = 6,
    /// Alternate function 7.
    Af7 = 7,
    /// Alternate function 8.
    Af8 = 8,
    /// Alternate function 9.
    Af9 = 9,
    /// Alternate function 10.
    Af10 = 10,
    /// Alternate function 11.
    Af11 = 11,
    /// Alternate function 12.
    Af12 = 12,
    /// Alternate function 13.
    Af13 = 13,
    /// Alternate function 14.
    Af14 = 14,
}

impl AltFunc {
    /// Value written into the pin's port-control nibble.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Converts a raw selector in `1..=14`.
    pub const fn from_value(value: u8) -> Option<AltFunc> {
        match value {
            1 => Some(AltFunc::Af1),
            2 => Some(AltFunc::Af2),
            3 => Some(AltFunc::Af3),
            4 => Some(AltFunc::Af4),
            5 => Some(AltFunc::Af5),
            6 => Some(AltFunc::Af6),
            7 => Some(AltFunc::Af7),
            8 => Some(AltFunc::Af8),
            9 => Some(AltFunc::Af9),
            10 => Some(AltFunc::Af10),
            11 => Some(AltFunc::Af11),
            12 => Some(AltFunc::Af12),
            13 => Some(AltFunc::Af13),
            14 => Some(AltFunc::Af14),
            _ => None,
        }
    }
}

/// Electrical/functional mode of a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinMode {
    /// Plain digital I/O, selector 0.
    Dio,
    /// Alternate hardware function, selectors 1 to 14.
    Alt(AltFunc),
    /// Analog function, selector 15. Disconnects the digital buffer.
    Analog,
}

impl PinMode {
    /// Converts the raw 4-bit mode selector; `None` above 15.
    pub const fn from_selector(selector: u8) -> Option<PinMode> {
        match selector {
            0 => Some(PinMode::Dio),
            15 => Some(PinMode::Analog),
            _ => match AltFunc::from_value(selector) {
                Some(f) => Some(PinMode::Alt(f)),
                None => None,
            },
        }
    }

    /// Raw 4-bit selector for this mode.
    pub const fn selector(self) -> u8 {
        match self {
            PinMode::Dio => 0,
            PinMode::Alt(f) => f.value(),
            PinMode::Analog => 15,
        }
    }
}

bitflags! {
    /// Runtime mutability permissions of one pin.
    ///
    /// Both flags are fixed when the descriptor is authored. A pin with no
    /// flags set can only be reconfigured by re-running initialization.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Access: u8 {
        /// The pin's direction may be changed at runtime.
        const DIRECTION = 1 << 0;
        /// The pin's mode may be changed at runtime.
        const MODE = 1 << 1;
    }
}

/// Desired configuration of one physical pin.
///
/// `(port, pin)` pairs must be unique within a configuration set; uniqueness
/// is an authoring contract the engine does not check. `pin` must be below 8:
/// the constructors assert it so misauthored `static` tables fail at compile
/// time, and the engine debug-asserts it before writing to hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinConfig {
    /// Owning port block.
    pub port: PortId,
    /// Pin position within the port, 0 to 7.
    pub pin: u8,
    /// Signal direction.
    pub direction: Direction,
    /// Input resistor; meaningful only when `direction` is `Input`.
    pub bias: Bias,
    /// Initial output level; meaningful only when `direction` is `Output`.
    pub level: Level,
    /// Electrical/functional mode.
    pub mode: PinMode,
    /// Runtime mutability permissions.
    pub access: Access,
}

impl PinConfig {
    /// Digital output descriptor driving `level` after initialization.
    pub const fn output(port: PortId, pin: u8, level: Level) -> PinConfig {
        assert!(pin < 8);
        PinConfig {
            port,
            pin,
            direction: Direction::Output,
            bias: Bias::None,
            level,
            mode: PinMode::Dio,
            access: Access::empty(),
        }
    }

    /// Digital input descriptor with the given resistor bias.
    pub const fn input(port: PortId, pin: u8, bias: Bias) -> PinConfig {
        assert!(pin < 8);
        PinConfig {
            port,
            pin,
            direction: Direction::Input,
            bias,
            level: Level::Low,
            mode: PinMode::Dio,
            access: Access::empty(),
        }
    }

    /// Analog pin descriptor. The digital buffer is disconnected, so
    /// direction and bias are idle defaults.
    pub const fn analog(port: PortId, pin: u8) -> PinConfig {
        assert!(pin < 8);
        PinConfig {
            port,
            pin,
            direction: Direction::Input,
            bias: Bias::None,
            level: Level::Low,
            mode: PinMode::Analog,
            access: Access::empty(),
        }
    }

    /// Alternate-function descriptor; the owning peripheral drives the pin.
    pub const fn alternate(port: PortId, pin: u8, func: AltFunc) -> PinConfig {
        assert!(pin < 8);
        PinConfig {
            port,
            pin,
            direction: Direction::Input,
            bias: Bias::None,
            level: Level::Low,
            mode: PinMode::Alt(func),
            access: Access::empty(),
        }
    }

    /// Grants runtime mutability permissions on an otherwise fixed pin.
    pub const fn with_access(mut self, access: Access) -> PinConfig {
        self.access = access;
        self
    }
}

//! Table-driven GPIO pin configuration for the TI TM4C123x family, covering
//! the six ports (A to F) of the TM4C123GH6PM. Register addresses and bit
//! layouts follow the [`data sheet`].
//!
//! A static table of [`pin::PinConfig`] descriptors is applied in one pass
//! by [`port::Port::init`], which gates port clocks, runs the NMI/JTAG
//! write-protection policy, and programs mode, direction, resistor bias, and
//! initial output level for every pin. Afterwards individual pins can be
//! re-programmed through the permission-gated runtime entry points, and
//! [`port::Port::refresh_port_direction`] restores direction bits after a
//! low-power cycle. The crate performs no pin I/O of its own; it only
//! establishes and refreshes configuration.
//!
//! [`data sheet`]: https://www.ti.com/lit/ds/symlink/tm4c123gh6pm.pdf
//!
//! # Example
//!
//! ```no_run
//! use tm4c123x_port::mmio::Mmio;
//! use tm4c123x_port::pin::{Access, Bias, Level, PinConfig, PortId};
//! use tm4c123x_port::port::Port;
//!
//! static PINS: [PinConfig; 2] = [
//!     PinConfig::output(PortId::F, 1, Level::High),
//!     PinConfig::input(PortId::F, 4, Bias::PullUp).with_access(Access::DIRECTION),
//! ];
//!
//! let mmio = Mmio::take().unwrap();
//! let mut port = Port::new(mmio);
//! port.init(&PINS).unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

pub mod diag;
pub mod mmio;
pub mod pin;
pub mod port;

mod hw_traits;

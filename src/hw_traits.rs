pub mod gpio;
pub mod sysctl;

use crate::pin::PortId;

/// Maps a port identifier to the register windows controlling it.
///
/// `Mmio` implements this over the real register map; tests substitute
/// recording fakes.
pub trait PortMap {
    type Gpio: gpio::GpioPeriph;
    type Sysctl: sysctl::SysctlPeriph;

    fn port(&self, id: PortId) -> &Self::Gpio;
    fn sysctl(&self) -> &Self::Sysctl;
}

impl<M: PortMap> PortMap for &M {
    type Gpio = M::Gpio;
    type Sysctl = M::Sysctl;

    fn port(&self, id: PortId) -> &M::Gpio {
        (**self).port(id)
    }

    fn sysctl(&self) -> &M::Sysctl {
        (**self).sysctl()
    }
}

//! Memory-mapped register access for the TM4C123x GPIO blocks.
//!
//! Addresses and offsets follow the TM4C123GH6PM data sheet. Register
//! windows are only obtainable through [`Mmio::take`] (or, unsafely,
//! [`Mmio::steal`]), so holding one is proof of exclusive configuration
//! access and the volatile accessors themselves stay safe to call.

use core::ptr;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::hw_traits::gpio::GpioPeriph;
use crate::hw_traits::sysctl::SysctlPeriph;
use crate::hw_traits::PortMap;
use crate::pin::PortId;

const PORT_BASES: [usize; 6] = [
    0x4000_4000, // A
    0x4000_5000, // B
    0x4000_6000, // C
    0x4000_7000, // D
    0x4002_4000, // E
    0x4002_5000, // F
];
const SYSCTL_BASE: usize = 0x400F_E000;

// GPIO register offsets. DATA is the all-bits word of the masked alias
// region 0x000..=0x3FC.
const DATA: usize = 0x3FC;
const DIR: usize = 0x400;
const AFSEL: usize = 0x420;
const PUR: usize = 0x510;
const PDR: usize = 0x514;
const DEN: usize = 0x51C;
const LOCK: usize = 0x520;
const CR: usize = 0x524;
const AMSEL: usize = 0x528;
const PCTL: usize = 0x52C;

const RCGC2: usize = 0x108;

/// Register window of one GPIO port.
pub struct GpioRegs {
    base: usize,
}

impl GpioRegs {
    #[inline(always)]
    fn rd(&self, offset: usize) -> u32 {
        unsafe { ptr::read_volatile((self.base + offset) as *const u32) }
    }

    #[inline(always)]
    fn wr(&self, offset: usize, value: u32) {
        unsafe { ptr::write_volatile((self.base + offset) as *mut u32, value) }
    }
}

macro_rules! rmw_methods {
    ($offset:ident, $set:ident, $clear:ident) => {
        #[inline(always)]
        fn $set(&self, bits: u32) {
            self.wr($offset, self.rd($offset) | bits);
        }

        #[inline(always)]
        fn $clear(&self, bits: u32) {
            self.wr($offset, self.rd($offset) & !bits);
        }
    };
}

impl GpioPeriph for GpioRegs {
    rmw_methods!(DATA, data_set, data_clear);
    rmw_methods!(DIR, dir_set, dir_clear);
    rmw_methods!(AFSEL, afsel_set, afsel_clear);
    rmw_methods!(PUR, pur_set, pur_clear);
    rmw_methods!(PDR, pdr_set, pdr_clear);
    rmw_methods!(DEN, den_set, den_clear);
    rmw_methods!(AMSEL, amsel_set, amsel_clear);
    rmw_methods!(PCTL, pctl_set, pctl_clear);

    #[inline(always)]
    fn lock_wr(&self, value: u32) {
        self.wr(LOCK, value);
    }

    #[inline(always)]
    fn cr_set(&self, bits: u32) {
        self.wr(CR, self.rd(CR) | bits);
    }
}

/// Register window of the system-control block.
pub struct SysctlRegs {
    base: usize,
}

impl SysctlRegs {
    #[inline(always)]
    fn rd(&self, offset: usize) -> u32 {
        unsafe { ptr::read_volatile((self.base + offset) as *const u32) }
    }

    #[inline(always)]
    fn wr(&self, offset: usize, value: u32) {
        unsafe { ptr::write_volatile((self.base + offset) as *mut u32, value) }
    }
}

impl SysctlPeriph for SysctlRegs {
    #[inline(always)]
    fn rcgc2_rd(&self) -> u32 {
        self.rd(RCGC2)
    }

    #[inline(always)]
    fn rcgc2_set(&self, bits: u32) {
        self.wr(RCGC2, self.rd(RCGC2) | bits);
    }
}

static MMIO_TAKEN: AtomicBool = AtomicBool::new(false);

/// The real register map, handed out at most once.
pub struct Mmio {
    ports: [GpioRegs; 6],
    sysctl: SysctlRegs,
}

impl Mmio {
    /// Takes the register map. Returns `None` after the first call.
    pub fn take() -> Option<Mmio> {
        if MMIO_TAKEN.swap(true, Ordering::SeqCst) {
            None
        } else {
            Some(unsafe { Mmio::steal() })
        }
    }

    /// Unchecked version of [`Mmio::take`]. The caller must ensure any
    /// previously taken map no longer configures the hardware.
    pub unsafe fn steal() -> Mmio {
        Mmio {
            ports: [
                GpioRegs { base: PORT_BASES[0] },
                GpioRegs { base: PORT_BASES[1] },
                GpioRegs { base: PORT_BASES[2] },
                GpioRegs { base: PORT_BASES[3] },
                GpioRegs { base: PORT_BASES[4] },
                GpioRegs { base: PORT_BASES[5] },
            ],
            sysctl: SysctlRegs { base: SYSCTL_BASE },
        }
    }
}

impl PortMap for Mmio {
    type Gpio = GpioRegs;
    type Sysctl = SysctlRegs;

    fn port(&self, id: PortId) -> &GpioRegs {
        &self.ports[id.index() as usize]
    }

    fn sysctl(&self) -> &SysctlRegs {
        &self.sysctl
    }
}

//! Pin-table configuration engine.
//!
//! [`Port`] applies an ordered slice of [`PinConfig`] descriptors to the GPIO
//! blocks in a single pass: for each descriptor it gates the owning port's
//! clock on first use, runs the write-protection policy, programs the signal
//! mode, then programs direction, resistor bias, and initial output level.
//! After initialization the narrower entry points re-program a single pin's
//! direction or mode, gated by the descriptor's [`Access`] flags, and
//! [`Port::refresh_port_direction`] restores every direction bit after an
//! event (such as a low-power cycle) that may have reset them.
//!
//! Failed precondition checks are mirrored to the [`crate::diag`] hook and
//! returned as [`Error`] values; the hardware is never touched on a rejected
//! call.
//!
//! All mutating operations take `&mut self`, so concurrent calls targeting
//! the same engine must be serialized by the caller, matching the bare-metal
//! execution model this engine is written for.

use crate::diag::{self, ErrorReport, ServiceId};
use crate::hw_traits::gpio::GpioPeriph;
use crate::hw_traits::sysctl::SysctlPeriph;
use crate::hw_traits::PortMap;
use crate::pin::{Access, Bias, Direction, Level, PinConfig, PinMode, PortId};

/// Vendor identifier carried in version info and error reports.
pub const VENDOR_ID: u16 = 1000;
/// Module identifier carried in version info and error reports.
pub const MODULE_ID: u16 = 121;
/// Instance identifier carried in error reports.
pub const INSTANCE_ID: u8 = 0;

const SW_MAJOR: u8 = 1;
const SW_MINOR: u8 = 0;
const SW_PATCH: u8 = 0;

/// Magic value accepted by the GPIO lock register.
const LOCK_KEY: u32 = 0x4C4F_434B;

/// Version record filled by [`Port::version_info`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionInfo {
    /// Vendor identifier.
    pub vendor_id: u16,
    /// Module identifier.
    pub module_id: u16,
    /// Major version of this engine.
    pub sw_major: u8,
    /// Minor version of this engine.
    pub sw_minor: u8,
    /// Patch version of this engine.
    pub sw_patch: u8,
}

/// Rejection reasons of the engine's entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Operation invoked before a successful [`Port::init`].
    NotInitialized,
    /// [`Port::init`] was handed an empty configuration set.
    InvalidConfig,
    /// Pin index outside the configured table.
    InvalidPin,
    /// Mode selector above 15.
    InvalidMode,
    /// The descriptor does not permit direction changes.
    DirectionNotChangeable,
    /// The descriptor does not permit mode changes.
    ModeNotChangeable,
}

impl Error {
    /// Numeric code used in [`crate::diag::ErrorReport`].
    ///
    /// Code `0x10` is reserved for an absent version-info destination, a
    /// condition this interface cannot express.
    pub const fn code(self) -> u8 {
        match self {
            Error::InvalidPin => 0x0A,
            Error::DirectionNotChangeable => 0x0B,
            Error::InvalidConfig => 0x0C,
            Error::InvalidMode => 0x0D,
            Error::ModeNotChangeable => 0x0E,
            Error::NotInitialized => 0x0F,
        }
    }
}

/// Selects which value the single-pin mutation calls program.
///
/// The configuration tables this engine descends from treated the stored
/// descriptor as authoritative: `set_pin_direction` and `set_pin_mode`
/// validated the caller's argument but re-programmed the table value.
/// `FromTable` reproduces that behavior and is the default; `FromCaller`
/// programs the caller's argument instead. The stored table is never
/// modified under either policy, so [`Port::refresh_port_direction`] always
/// restores the table state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MutationPolicy {
    /// Program the statically configured value; the argument only selects
    /// the pin checks.
    #[default]
    FromTable,
    /// Program the caller-supplied value.
    FromCaller,
}

/// Write-protection handling for one pin, decided before any register write.
enum UnlockPolicy {
    /// Freely writable.
    None,
    /// Commit-protected; unlock and commit first.
    Commit,
    /// Never written.
    Skip,
}

impl UnlockPolicy {
    fn classify(port: PortId, pin: u8) -> UnlockPolicy {
        match (port, pin) {
            // PD7 and PF0 can carry NMI signals and power up locked.
            (PortId::D, 7) | (PortId::F, 0) => UnlockPolicy::Commit,
            // PC0-PC3 carry JTAG/SWD; reprogramming them can permanently
            // cut off the debug interface.
            (PortId::C, 0..=3) => UnlockPolicy::Skip,
            _ => UnlockPolicy::None,
        }
    }
}

/// Runs the write-protection policy for `cfg` and returns whether the pin
/// may be programmed at all.
fn unlock<G: GpioPeriph>(regs: &G, cfg: &PinConfig) -> bool {
    // The programming shifts assume the 0..=7 range the constructors check;
    // descriptors built by hand can sidestep that check.
    debug_assert!(cfg.pin < 8);
    match UnlockPolicy::classify(cfg.port, cfg.pin) {
        UnlockPolicy::Skip => false,
        UnlockPolicy::Commit => {
            regs.lock_wr(LOCK_KEY);
            regs.cr_set(1 << cfg.pin);
            true
        }
        UnlockPolicy::None => true,
    }
}

fn program_mode<G: GpioPeriph>(regs: &G, pin: u8, mode: PinMode) {
    let bit = 1u32 << pin;
    let shift = u32::from(pin) * 4;
    match mode {
        PinMode::Dio => {
            regs.amsel_clear(bit);
            regs.afsel_clear(bit);
            regs.pctl_clear(0xF << shift);
            // Enable the digital buffer only once the routing above is
            // clean.
            regs.den_set(bit);
        }
        PinMode::Analog => {
            regs.amsel_set(bit);
            regs.den_clear(bit);
        }
        PinMode::Alt(func) => {
            regs.amsel_clear(bit);
            regs.afsel_set(bit);
            regs.pctl_clear(0xF << shift);
            regs.pctl_set(u32::from(func.value()) << shift);
            // The digital buffer is left as previously established.
        }
    }
}

fn program_direction<G: GpioPeriph>(regs: &G, cfg: &PinConfig, direction: Direction) {
    let bit = 1u32 << cfg.pin;
    match direction {
        Direction::Output => {
            regs.dir_set(bit);
            match cfg.level {
                Level::High => regs.data_set(bit),
                Level::Low => regs.data_clear(bit),
            }
        }
        Direction::Input => {
            regs.dir_clear(bit);
            match cfg.bias {
                Bias::PullUp => regs.pur_set(bit),
                Bias::PullDown => regs.pdr_set(bit),
                Bias::None => {
                    regs.pur_clear(bit);
                    regs.pdr_clear(bit);
                }
            }
        }
    }
}

/// Pin configuration engine over a register map `M`.
///
/// The engine starts out uninitialized; [`Port::init`] applies a
/// configuration set and retains a reference to it for the runtime entry
/// points. Re-initialization is allowed and simply re-applies the table.
pub struct Port<'a, M: PortMap> {
    map: M,
    pins: Option<&'a [PinConfig]>,
    policy: MutationPolicy,
}

impl<'a, M: PortMap> Port<'a, M> {
    /// Creates an uninitialized engine with the default
    /// [`MutationPolicy::FromTable`].
    pub fn new(map: M) -> Port<'a, M> {
        Port {
            map,
            pins: None,
            policy: MutationPolicy::FromTable,
        }
    }

    /// Creates an uninitialized engine with an explicit mutation policy.
    pub fn with_policy(map: M, policy: MutationPolicy) -> Port<'a, M> {
        Port {
            map,
            pins: None,
            policy,
        }
    }

    /// Applies the whole configuration set and retains it for the runtime
    /// entry points.
    ///
    /// Each port's clock is gated on on first use within the pass, followed
    /// by the settle read the hardware requires. Write-protected NMI pins
    /// are unlocked and committed before any other write; the JTAG pins of
    /// port C are never written, whatever their descriptors say.
    pub fn init(&mut self, pins: &'a [PinConfig]) -> Result<(), Error> {
        if pins.is_empty() {
            return Err(self.fail(ServiceId::Init, Error::InvalidConfig));
        }

        let mut clocked = 0u32;
        for cfg in pins {
            let clock_bit = 1u32 << cfg.port.index();
            if clocked & clock_bit == 0 {
                let sysctl = self.map.sysctl();
                sysctl.rcgc2_set(clock_bit);
                // Settle read; the clock must be running before the port
                // registers are touched.
                let _ = sysctl.rcgc2_rd();
                clocked |= clock_bit;
            }

            let regs = self.map.port(cfg.port);
            if !unlock(regs, cfg) {
                continue;
            }
            program_mode(regs, cfg.pin, cfg.mode);
            program_direction(regs, cfg, cfg.direction);
        }
        self.pins = Some(pins);
        Ok(())
    }

    /// Re-programs direction, bias, and level of the pin at table index
    /// `pin`.
    ///
    /// Requires the descriptor's [`Access::DIRECTION`] permission. Which
    /// direction value is programmed depends on the engine's
    /// [`MutationPolicy`]; the stored table is not modified either way.
    pub fn set_pin_direction(&mut self, pin: usize, direction: Direction) -> Result<(), Error> {
        let cfg = self.lookup(ServiceId::SetPinDirection, pin)?;
        if !cfg.access.contains(Access::DIRECTION) {
            return Err(self.fail(
                ServiceId::SetPinDirection,
                Error::DirectionNotChangeable,
            ));
        }

        let direction = match self.policy {
            MutationPolicy::FromTable => cfg.direction,
            MutationPolicy::FromCaller => direction,
        };
        let regs = self.map.port(cfg.port);
        if unlock(regs, cfg) {
            program_direction(regs, cfg, direction);
        }
        Ok(())
    }

    /// Re-applies the direction bit of every configured pin from the table.
    ///
    /// Bias and output level are left alone. Intended to restore the
    /// direction registers after an external event that may have reset
    /// them.
    pub fn refresh_port_direction(&mut self) -> Result<(), Error> {
        let pins = match self.pins {
            Some(pins) => pins,
            None => {
                return Err(self.fail(ServiceId::RefreshPortDirection, Error::NotInitialized))
            }
        };

        for cfg in pins {
            let regs = self.map.port(cfg.port);
            if !unlock(regs, cfg) {
                continue;
            }
            let bit = 1u32 << cfg.pin;
            match cfg.direction {
                Direction::Output => regs.dir_set(bit),
                Direction::Input => regs.dir_clear(bit),
            }
        }
        Ok(())
    }

    /// Re-programs the mode of the pin at table index `pin`.
    ///
    /// `mode` is the raw 4-bit selector; values above 15 are rejected before
    /// the permission check. Requires [`Access::MODE`]. Which mode is
    /// programmed depends on the engine's [`MutationPolicy`].
    pub fn set_pin_mode(&mut self, pin: usize, mode: u8) -> Result<(), Error> {
        let cfg = self.lookup(ServiceId::SetPinMode, pin)?;
        let requested = match PinMode::from_selector(mode) {
            Some(mode) => mode,
            None => return Err(self.fail(ServiceId::SetPinMode, Error::InvalidMode)),
        };
        if !cfg.access.contains(Access::MODE) {
            return Err(self.fail(ServiceId::SetPinMode, Error::ModeNotChangeable));
        }

        let mode = match self.policy {
            MutationPolicy::FromTable => cfg.mode,
            MutationPolicy::FromCaller => requested,
        };
        let regs = self.map.port(cfg.port);
        if unlock(regs, cfg) {
            program_mode(regs, cfg.pin, mode);
        }
        Ok(())
    }

    /// Version information of this engine.
    pub fn version_info(&self) -> Result<VersionInfo, Error> {
        if self.pins.is_none() {
            return Err(self.fail(ServiceId::GetVersionInfo, Error::NotInitialized));
        }
        Ok(VersionInfo {
            vendor_id: VENDOR_ID,
            module_id: MODULE_ID,
            sw_major: SW_MAJOR,
            sw_minor: SW_MINOR,
            sw_patch: SW_PATCH,
        })
    }

    fn lookup(&self, service: ServiceId, pin: usize) -> Result<&'a PinConfig, Error> {
        let pins = match self.pins {
            Some(pins) => pins,
            None => return Err(self.fail(service, Error::NotInitialized)),
        };
        match pins.get(pin) {
            Some(cfg) => Ok(cfg),
            None => Err(self.fail(service, Error::InvalidPin)),
        }
    }

    fn fail(&self, service: ServiceId, error: Error) -> Error {
        diag::report(ErrorReport {
            module_id: MODULE_ID,
            instance_id: INSTANCE_ID,
            service,
            code: error.code(),
        });
        error
    }
}

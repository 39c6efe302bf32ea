//! Error reporting hook.
//!
//! Failed precondition checks in [`crate::port`] are mirrored to an optional
//! caller-installed hook before the operation returns its error, matching the
//! fire-and-forget development-error services common on automotive and
//! safety-minded platforms. The hook never influences control flow; the
//! engine skips the hardware effect and returns normally whether or not a
//! hook is installed.

use core::cell::Cell;

use critical_section::Mutex;

/// Engine entry point named in an [`ErrorReport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ServiceId {
    /// Table initialization.
    Init = 0x00,
    /// Single-pin direction change.
    SetPinDirection = 0x01,
    /// Whole-table direction refresh.
    RefreshPortDirection = 0x02,
    /// Version information query.
    GetVersionInfo = 0x03,
    /// Single-pin mode change.
    SetPinMode = 0x04,
}

/// One record handed to the error hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorReport {
    /// Identifier of the reporting module.
    pub module_id: u16,
    /// Instance of the module; always 0 here.
    pub instance_id: u8,
    /// Entry point that rejected the call.
    pub service: ServiceId,
    /// Numeric error code, see [`crate::port::Error::code`].
    pub code: u8,
}

/// Receiver for error reports. Runs in the caller's context and must not
/// call back into the engine.
pub type ErrorHook = fn(ErrorReport);

static ERROR_HOOK: Mutex<Cell<Option<ErrorHook>>> = Mutex::new(Cell::new(None));

/// Installs `hook`, replacing any previous one.
pub fn set_error_hook(hook: ErrorHook) {
    critical_section::with(|cs| ERROR_HOOK.borrow(cs).set(Some(hook)));
}

/// Removes the installed hook, if any.
pub fn clear_error_hook() {
    critical_section::with(|cs| ERROR_HOOK.borrow(cs).set(None));
}

pub(crate) fn report(report: ErrorReport) {
    let hook = critical_section::with(|cs| ERROR_HOOK.borrow(cs).get());
    if let Some(hook) = hook {
        hook(report);
    }
}

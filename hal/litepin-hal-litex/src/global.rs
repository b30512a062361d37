//! Process-wide pin controller
//!
//! The script runtime constructs pin objects without any context, so the
//! controller lives in a static. Every access runs inside a critical
//! section, which keeps the register read-modify-write sequences from
//! interleaving if pins are also touched from interrupt handlers.

use core::cell::RefCell;
use core::fmt;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use litepin_core::PinController;

use crate::platform::{platform_gpio, PlatformGpio};

/// Errors from the global controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlobalError {
    /// A controller is already installed
    AlreadyInstalled,
    /// No controller installed yet
    NotInstalled,
    /// Re-entrant access from inside `with_controller`
    Busy,
}

impl fmt::Display for GlobalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlobalError::AlreadyInstalled => f.write_str("pin controller already installed"),
            GlobalError::NotInstalled => f.write_str("pin controller not installed"),
            GlobalError::Busy => f.write_str("pin controller busy"),
        }
    }
}

type Slot = RefCell<Option<PinController<PlatformGpio>>>;

static CONTROLLER: Mutex<CriticalSectionRawMutex, Slot> = Mutex::new(RefCell::new(None));

/// Install the controller over a register backend
pub fn install(regs: PlatformGpio) -> Result<(), GlobalError> {
    CONTROLLER.lock(|slot| {
        let mut slot = slot.try_borrow_mut().map_err(|_| GlobalError::Busy)?;
        if slot.is_some() {
            return Err(GlobalError::AlreadyInstalled);
        }
        *slot = Some(PinController::new(regs));

        #[cfg(feature = "defmt")]
        defmt::info!("pin controller installed (gpio present: {})", crate::GPIO_PRESENT);

        Ok(())
    })
}

/// Install the controller over this build's register backend
///
/// The backend is only created when no controller exists, so the CSR block
/// never has two owners.
pub fn install_platform() -> Result<(), GlobalError> {
    CONTROLLER.lock(|slot| {
        let mut slot = slot.try_borrow_mut().map_err(|_| GlobalError::Busy)?;
        if slot.is_some() {
            return Err(GlobalError::AlreadyInstalled);
        }
        *slot = Some(PinController::new(platform_gpio()));

        #[cfg(feature = "defmt")]
        defmt::info!("pin controller installed (gpio present: {})", crate::GPIO_PRESENT);

        Ok(())
    })
}

/// Run `f` with exclusive access to the controller
pub fn with_controller<T>(
    f: impl FnOnce(&mut PinController<PlatformGpio>) -> T,
) -> Result<T, GlobalError> {
    CONTROLLER.lock(|slot| {
        let mut slot = slot.try_borrow_mut().map_err(|_| GlobalError::Busy)?;
        let ctrl = slot.as_mut().ok_or(GlobalError::NotInstalled)?;
        Ok(f(ctrl))
    })
}

/// Remove the installed controller
pub fn remove() -> Result<PinController<PlatformGpio>, GlobalError> {
    CONTROLLER.lock(|slot| {
        let mut slot = slot.try_borrow_mut().map_err(|_| GlobalError::Busy)?;
        slot.take().ok_or(GlobalError::NotInstalled)
    })
}

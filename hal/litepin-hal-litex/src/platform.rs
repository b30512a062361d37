//! Build-time backend selection
//!
//! With the `csr-gpio` feature the platform backend is the CSR block at
//! `LITEPIN_CSR_GPIO_BASE`; without it every pin operation goes to the
//! stub. The choice is made once, when the crate is built.

#[cfg(feature = "csr-gpio")]
use crate::csr::{parse_base_address, CsrGpio};

#[cfg(not(feature = "csr-gpio"))]
use litepin_hal::NoGpio;

/// Whether the gateware has a GPIO block
pub const GPIO_PRESENT: bool = cfg!(feature = "csr-gpio");

/// Register backend of this build
#[cfg(feature = "csr-gpio")]
pub type PlatformGpio = CsrGpio;

/// Register backend of this build
#[cfg(not(feature = "csr-gpio"))]
pub type PlatformGpio = NoGpio;

/// GPIO CSR base address from the generated `csr.h`
#[cfg(feature = "csr-gpio")]
pub const CSR_GPIO_BASE: usize = match option_env!("LITEPIN_CSR_GPIO_BASE") {
    Some(s) => match parse_base_address(s) {
        Some(base) => base,
        None => panic!("LITEPIN_CSR_GPIO_BASE is not a valid address"),
    },
    None => panic!("csr-gpio builds require LITEPIN_CSR_GPIO_BASE"),
};

/// Create the register backend of this build
///
/// Only one backend may exist at a time; [`crate::global::install_platform`]
/// is the usual caller.
#[cfg(feature = "csr-gpio")]
pub(crate) fn platform_gpio() -> PlatformGpio {
    // SAFETY: CSR_GPIO_BASE comes from the gateware's CSR map; exclusivity
    // is the caller's obligation
    unsafe { CsrGpio::new(CSR_GPIO_BASE) }
}

#[cfg(not(feature = "csr-gpio"))]
pub(crate) fn platform_gpio() -> PlatformGpio {
    NoGpio::new()
}

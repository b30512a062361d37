//! LiteX-specific HAL for litepin
//!
//! This crate provides the pieces that depend on the SoC:
//! - Volatile access to the `GPIOTristate` CSR block
//! - Build-time selection between the CSR backend and the stub
//! - The process-wide pin controller shared by the script runtime
//!
//! # Features
//!
//! - `csr-gpio` - The gateware contains a GPIO block. The CSR base address
//!   is taken from `LITEPIN_CSR_GPIO_BASE` (as found in the generated
//!   `csr.h`) when the crate is built.
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod csr;
pub mod global;
pub mod platform;

pub use csr::CsrGpio;
pub use global::{install, install_platform, remove, with_controller, GlobalError};
pub use platform::{PlatformGpio, GPIO_PRESENT};

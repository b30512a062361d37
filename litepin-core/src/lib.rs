//! Board-agnostic GPIO pin control for LiteX soft-SoCs
//!
//! This crate contains everything that does not depend on how the GPIO
//! registers are reached:
//!
//! - Pin identifiers, modes and the fixed descriptor table
//! - The pin controller (direction, output level, input sampling)
//! - `embedded-hal` digital traits for borrowed pin handles
//! - Board pin configuration types and parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod pin;

pub use controller::{Pin, PinController};
pub use pin::{PinDescriptor, PinError, PinId, PinMode, DESCRIBE_LEN};

// Register traits live in the HAL crate; re-exported so callers need one import
pub use litepin_hal::{GpioRegisters, MemoryGpio, NoGpio, PIN_COUNT};

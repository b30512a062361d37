//! litepin Hardware Abstraction Layer
//!
//! This crate defines the register-level interface that the pin controller
//! is written against. Platform crates provide the real memory-mapped
//! implementation; this crate ships the backends that need no hardware.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Script glue (litepin-script)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Pin controller (litepin-core)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  litepin-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┼───────────┐
//!         ▼           ▼           ▼
//! ┌─────────────┐ ┌────────┐ ┌───────────┐
//! │ litepin-hal-│ │ NoGpio │ │MemoryGpio │
//! │   litex     │ │ (stub) │ │  (host)   │
//! └─────────────┘ └────────┘ └───────────┘
//! ```
//!
//! # Traits
//!
//! - [`regs::GpioRegisters`] - OE / OUT / IN register access

#![no_std]
#![deny(unsafe_code)]

pub mod memory;
pub mod regs;
pub mod stub;

// Re-export key types at crate root for convenience
pub use memory::MemoryGpio;
pub use regs::{bit, GpioRegisters, PIN_COUNT};
pub use stub::NoGpio;

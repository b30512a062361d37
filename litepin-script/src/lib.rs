//! Script runtime bindings for litepin
//!
//! Maps the calls of a script-level `pin` type onto a [`PinController`]:
//!
//! ```text
//! p = pin(3, mode=1)   ->  pin::make_new
//! p.init(mode=0)       ->  pin::call_method(.., "init", ..)
//! p.value()            ->  pin::call_method(.., "value", ..)
//! p.high() / p.low()   ->  pin::call_method(.., "high" | "low", ..)
//! print(p)             ->  pin::print
//! ```
//!
//! The embedding runtime converts its own objects to [`ScriptValue`]s,
//! supplies the controller (usually `litepin_hal_litex::with_controller`)
//! and raises [`ScriptError`]s through its exception mechanism.
//!
//! [`PinController`]: litepin_core::PinController

#![no_std]
#![deny(unsafe_code)]

pub mod args;
pub mod error;
pub mod pin;
pub mod value;

pub use args::{ArgSpec, Args};
pub use error::ScriptError;
pub use value::ScriptValue;

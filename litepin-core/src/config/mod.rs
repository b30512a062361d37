//! Board GPIO configuration
//!
//! Describes how the pins of a board start up: direction, initial output
//! level and a human label. Loaded from a TOML subset or, with the `serde`
//! feature, from postcard-serialized binary data.

pub mod parse;
pub mod types;

pub use parse::{parse_config, parse_pin_string, ParseError};
pub use types::*;

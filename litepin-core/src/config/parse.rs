//! Minimal TOML parser for board GPIO configuration
//!
//! Handles only the subset needed to describe pins. It does NOT support the
//! full TOML spec.
//!
//! Supported features:
//! - `[pin.gpioN]` section headers, one per configured pin
//! - `mode = "in" | "out"` (or `0` / `1`)
//! - `level = "low" | "high"` (or `false` / `true`)
//! - `label = "name"`
//! - Comments (`# ...`), including trailing comments
//!
//! Example:
//!
//! ```text
//! [pin.gpio3]
//! mode = "out"
//! level = "low"   # off at boot
//! label = "led"
//! ```

use core::fmt;

use heapless::String;
use litepin_hal::PIN_COUNT;

use super::types::{GpioConfig, Level, PinSetup, MAX_LABEL_LEN};
use crate::pin::{PinId, PinMode};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header, or a key outside any section
    InvalidSection,
    /// Invalid pin string in a section header
    InvalidPin,
    /// Same pin configured twice
    DuplicatePin,
    /// Line is not `key = value`
    InvalidLine,
    /// Key not recognized in a pin section
    UnknownKey,
    /// Invalid value type or content
    InvalidValue,
    /// Label longer than [`MAX_LABEL_LEN`]
    LabelTooLong,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::InvalidSection => "invalid section",
            ParseError::InvalidPin => "invalid pin",
            ParseError::DuplicatePin => "pin configured twice",
            ParseError::InvalidLine => "expected key = value",
            ParseError::UnknownKey => "unknown key",
            ParseError::InvalidValue => "invalid value",
            ParseError::LabelTooLong => "label too long",
        };
        f.write_str(msg)
    }
}

/// Parse a pin string from config
///
/// Supports the format `"gpioN"` with N in 0-7.
pub fn parse_pin_string(s: &str) -> Option<PinId> {
    let num_str = s.trim().strip_prefix("gpio")?;
    if num_str.is_empty() || !num_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let pin: u32 = num_str.parse().ok()?;
    PinId::new(pin).ok()
}

/// Parse TOML configuration into a [`GpioConfig`]
pub fn parse_config(input: &str) -> Result<GpioConfig, ParseError> {
    let mut config = GpioConfig::new();
    let mut seen = [false; PIN_COUNT];
    let mut current: Option<PinId> = None;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let header = header.strip_suffix(']').ok_or(ParseError::InvalidSection)?;
            let pin = parse_section_header(header.trim())?;
            if seen[pin.index() as usize] {
                return Err(ParseError::DuplicatePin);
            }
            seen[pin.index() as usize] = true;
            current = Some(pin);
            continue;
        }

        let pin = current.ok_or(ParseError::InvalidSection)?;
        let (key, value) = line.split_once('=').ok_or(ParseError::InvalidLine)?;
        apply_key(config.pin_mut(pin), key.trim(), value.trim())?;
    }

    #[cfg(feature = "defmt")]
    for pin in PinId::all().filter(|pin| seen[pin.index() as usize]) {
        let setup = config.pin(pin);
        if !setup.mode.is_output() && setup.level.is_some() {
            defmt::warn!("gpio{=u8}: level ignored on input pin", pin.index());
        }
        defmt::debug!("gpio{=u8}: mode={} level={}", pin.index(), setup.mode, setup.level);
    }

    Ok(config)
}

/// Parse `pin.gpioN`
fn parse_section_header(header: &str) -> Result<PinId, ParseError> {
    let name = header
        .strip_prefix("pin.")
        .ok_or(ParseError::InvalidSection)?;
    parse_pin_string(name).ok_or(ParseError::InvalidPin)
}

fn apply_key(setup: &mut PinSetup, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "mode" => setup.mode = parse_mode(value)?,
        "level" => setup.level = Some(parse_level(value)?),
        "label" => setup.label = Some(parse_label(value)?),
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn parse_mode(value: &str) -> Result<PinMode, ParseError> {
    match unquote(value) {
        Some("in") | Some("input") => Ok(PinMode::Input),
        Some("out") | Some("output") => Ok(PinMode::Output),
        Some(_) => Err(ParseError::InvalidValue),
        None => match value {
            "0" => Ok(PinMode::Input),
            "1" => Ok(PinMode::Output),
            _ => Err(ParseError::InvalidValue),
        },
    }
}

fn parse_level(value: &str) -> Result<Level, ParseError> {
    match unquote(value) {
        Some("low") => Ok(Level::Low),
        Some("high") => Ok(Level::High),
        Some(_) => Err(ParseError::InvalidValue),
        None => match value {
            "false" | "0" => Ok(Level::Low),
            "true" | "1" => Ok(Level::High),
            _ => Err(ParseError::InvalidValue),
        },
    }
}

fn parse_label(value: &str) -> Result<String<MAX_LABEL_LEN>, ParseError> {
    let s = unquote(value).ok_or(ParseError::InvalidValue)?;
    String::try_from(s).map_err(|_| ParseError::LabelTooLong)
}

/// Contents of a `"..."` string, or None for a bare value
fn unquote(value: &str) -> Option<&str> {
    value.strip_prefix('"')?.strip_suffix('"')
}

/// Cut a trailing `#` comment that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

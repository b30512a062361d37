//! Pin identifiers, modes and descriptors

use core::fmt;

use litepin_hal::{bit, PIN_COUNT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity of a rendered pin description, e.g. `PIN(7, mode=OUT)`
pub const DESCRIBE_LEN: usize = 24;

/// Errors raised when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin index outside the GPIO block (0-7 valid)
    InvalidPin,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::InvalidPin => f.write_str("Invalid PIN"),
        }
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PinMode {
    /// High impedance, level sampled through IN
    #[default]
    Input = 0,
    /// Driven from OUT
    Output = 1,
}

impl PinMode {
    /// Narrow a raw mode number
    ///
    /// Only the output constant (1) selects [`PinMode::Output`]. Every other
    /// value, including out-of-range ones, is treated as an input.
    pub const fn from_raw(raw: i64) -> Self {
        if raw == PinMode::Output as i64 {
            PinMode::Output
        } else {
            PinMode::Input
        }
    }

    /// Short name used in pin descriptions
    pub const fn label(self) -> &'static str {
        match self {
            PinMode::Input => "IN",
            PinMode::Output => "OUT",
        }
    }

    pub const fn is_output(self) -> bool {
        matches!(self, PinMode::Output)
    }
}

/// Validated pin index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(u8);

impl PinId {
    /// Validate a pin index
    pub const fn new(index: u32) -> Result<Self, PinError> {
        if index < PIN_COUNT as u32 {
            Ok(Self(index as u8))
        } else {
            Err(PinError::InvalidPin)
        }
    }

    /// Pin index in the GPIO block
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Register bit belonging to this pin
    pub const fn mask(self) -> u8 {
        bit(self.0)
    }

    /// Every pin of the block, lowest index first
    pub fn all() -> impl Iterator<Item = PinId> {
        (0..PIN_COUNT as u8).map(PinId)
    }
}

impl TryFrom<u32> for PinId {
    type Error = PinError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl TryFrom<i64> for PinId {
    type Error = PinError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        u32::try_from(index)
            .map_err(|_| PinError::InvalidPin)
            .and_then(Self::new)
    }
}

/// Software record of a pin
///
/// The controller owns exactly one descriptor per pin for its whole
/// lifetime; callers only ever see references into that table.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinDescriptor {
    id: PinId,
    mode: PinMode,
    /// Mode number as configured; only 0 prints as `IN`
    raw_mode: i64,
}

impl PinDescriptor {
    pub(crate) const fn new(index: u8) -> Self {
        Self {
            id: PinId(index),
            mode: PinMode::Input,
            raw_mode: PinMode::Input as i64,
        }
    }

    pub const fn id(&self) -> PinId {
        self.id
    }

    pub const fn index(&self) -> u8 {
        self.id.0
    }

    /// Mode last set through configuration
    pub const fn mode(&self) -> PinMode {
        self.mode
    }

    /// Mode number last configured
    ///
    /// Differs from `mode() as i64` only after a raw configuration with a
    /// number other than 0 or 1.
    pub const fn raw_mode(&self) -> i64 {
        self.raw_mode
    }

    /// Mode name shown in descriptions
    ///
    /// Any nonzero mode number reads as `OUT`, even when it left the pin
    /// an input.
    pub const fn mode_label(&self) -> &'static str {
        if self.raw_mode == PinMode::Input as i64 {
            PinMode::Input.label()
        } else {
            PinMode::Output.label()
        }
    }

    pub(crate) fn set_mode(&mut self, mode: PinMode) {
        self.mode = mode;
        self.raw_mode = mode as i64;
    }

    pub(crate) fn set_raw_mode(&mut self, raw: i64) {
        self.mode = PinMode::from_raw(raw);
        self.raw_mode = raw;
    }
}

impl fmt::Display for PinDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PIN({}, mode={})", self.id.0, self.mode_label())
    }
}

//! Configuration type definitions

use core::fmt;

use heapless::String;
use litepin_hal::PIN_COUNT;

use crate::pin::{PinId, PinMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 16;

/// Upper bound of a serialized [`GpioConfig`]
pub const MAX_CONFIG_SIZE: usize = 256;

/// Output level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Startup setup of one pin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinSetup {
    /// Direction
    pub mode: PinMode,
    /// Level driven before the pin is switched to output (outputs only)
    pub level: Option<Level>,
    /// Display label
    pub label: Option<String<MAX_LABEL_LEN>>,
}

/// Configuration persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Serialize => f.write_str("config serialization failed"),
            ConfigError::Deserialize => f.write_str("config deserialization failed"),
        }
    }
}

/// Board GPIO configuration
///
/// The default leaves every pin an unlabeled input, matching the state of
/// the hardware out of reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpioConfig {
    /// Per-pin setup, indexed by pin number
    pub pins: [PinSetup; PIN_COUNT],
}

impl GpioConfig {
    /// Create a configuration with all pins as inputs
    pub fn new() -> Self {
        Self::default()
    }

    /// Setup for a pin
    pub fn pin(&self, pin: PinId) -> &PinSetup {
        &self.pins[pin.index() as usize]
    }

    /// Mutable setup for a pin
    pub fn pin_mut(&mut self, pin: PinId) -> &mut PinSetup {
        &mut self.pins[pin.index() as usize]
    }

    /// Label of a pin, if one is configured
    pub fn label(&self, pin: PinId) -> Option<&str> {
        self.pin(pin).label.as_deref()
    }

    /// Find the pin carrying a label
    ///
    /// Returns the lowest-numbered match.
    pub fn find(&self, label: &str) -> Option<PinId> {
        PinId::all().find(|&pin| self.label(pin) == Some(label))
    }

    /// Serialize to postcard binary
    ///
    /// Returns the used prefix of `buf`.
    #[cfg(feature = "serde")]
    pub fn to_bytes<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize from postcard binary
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }
}

//! Errors raised into the script runtime

use core::fmt;

use litepin_core::PinError;

/// Script-level exception
///
/// Each variant names the exception type the runtime should raise; the
/// payload is the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScriptError {
    /// Argument of the right type with an unacceptable value
    ValueError(&'static str),
    /// Wrong number, name or type of arguments
    TypeError(&'static str),
    /// Unknown method name
    AttributeError(&'static str),
}

impl ScriptError {
    /// Exception type name
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptError::ValueError(_) => "ValueError",
            ScriptError::TypeError(_) => "TypeError",
            ScriptError::AttributeError(_) => "AttributeError",
        }
    }

    /// Exception message
    pub fn message(&self) -> &'static str {
        match *self {
            ScriptError::ValueError(msg)
            | ScriptError::TypeError(msg)
            | ScriptError::AttributeError(msg) => msg,
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl From<PinError> for ScriptError {
    fn from(e: PinError) -> Self {
        match e {
            PinError::InvalidPin => ScriptError::ValueError("Invalid PIN"),
        }
    }
}

//! Values exchanged with the script runtime

/// A script-level value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScriptValue<'a> {
    None,
    Bool(bool),
    Int(i64),
    Str(&'a str),
}

impl ScriptValue<'_> {
    /// Integer conversion; booleans count as 0 / 1
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            ScriptValue::Int(i) => Some(i),
            ScriptValue::Bool(b) => Some(i64::from(b)),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::None => "NoneType",
            ScriptValue::Bool(_) => "bool",
            ScriptValue::Int(_) => "int",
            ScriptValue::Str(_) => "str",
        }
    }
}

impl From<bool> for ScriptValue<'_> {
    fn from(b: bool) -> Self {
        ScriptValue::Bool(b)
    }
}

impl From<i64> for ScriptValue<'_> {
    fn from(i: i64) -> Self {
        ScriptValue::Int(i)
    }
}

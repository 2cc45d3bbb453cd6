//! Value types for game options

use crate::{Error, Result};
use std::fmt;

/// The declared type of a game option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Boolean,
    Integer,
    Float,
    String,
    /// Integer-valued, rendered as hexadecimal
    Color,
}

impl OptionKind {
    /// Get the type name of this kind
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionKind::Boolean => "boolean",
            OptionKind::Integer => "integer",
            OptionKind::Float => "float",
            OptionKind::String => "string",
            OptionKind::Color => "color",
        }
    }

    /// Whether integer accessors apply to this kind
    pub fn is_integral(&self) -> bool {
        matches!(self, OptionKind::Integer | OptionKind::Color)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A game option value
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Boolean(bool),
    Integer(i32),
    Float(f32),
    String(String),
    /// Packed color, stored as a signed 32-bit integer
    Color(i32),
}

impl OptionValue {
    /// Get the kind of this value
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Boolean(_) => OptionKind::Boolean,
            OptionValue::Integer(_) => OptionKind::Integer,
            OptionValue::Float(_) => OptionKind::Float,
            OptionValue::String(_) => OptionKind::String,
            OptionValue::Color(_) => OptionKind::Color,
        }
    }

    fn mismatch(&self, expected: OptionKind) -> Error {
        Error::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            OptionValue::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(OptionKind::Boolean)),
        }
    }

    /// Try to get as i32 (integers and colors)
    pub fn as_i32(&self) -> Result<i32> {
        match self {
            OptionValue::Integer(i) | OptionValue::Color(i) => Ok(*i),
            _ => Err(self.mismatch(OptionKind::Integer)),
        }
    }

    /// Try to get as f32
    pub fn as_f32(&self) -> Result<f32> {
        match self {
            OptionValue::Float(f) => Ok(*f),
            _ => Err(self.mismatch(OptionKind::Float)),
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Result<&str> {
        match self {
            OptionValue::String(s) => Ok(s.as_str()),
            _ => Err(self.mismatch(OptionKind::String)),
        }
    }

    /// Reshape a stored value to `kind`.
    ///
    /// Integers and colors share a representation, and integer storage may
    /// back a float option. Any other pairing means the storage holds the
    /// wrong kind of value.
    pub fn coerce(self, kind: OptionKind) -> Result<Self> {
        match (kind, self) {
            (OptionKind::Color, OptionValue::Integer(i) | OptionValue::Color(i)) => {
                Ok(OptionValue::Color(i))
            }
            (OptionKind::Integer, OptionValue::Integer(i) | OptionValue::Color(i)) => {
                Ok(OptionValue::Integer(i))
            }
            (OptionKind::Float, OptionValue::Integer(i)) => Ok(OptionValue::Float(i as f32)),
            (kind, value) if value.kind() == kind => Ok(value),
            (kind, value) => Err(Error::ReadFailed(format!(
                "storage holds a {} for a {} option",
                value.kind(),
                kind
            ))),
        }
    }

    /// Parse `text` as a value of `kind`.
    ///
    /// Booleans accept `true`/`1` (any case) and treat everything else as
    /// false. Strings are rejected: option strings cannot be set from text.
    pub fn parse(kind: OptionKind, text: &str) -> Result<Self> {
        match kind {
            OptionKind::Boolean => Ok(OptionValue::Boolean(
                text.eq_ignore_ascii_case("true") || text == "1",
            )),
            OptionKind::Integer => {
                let value = parse_int(text)?;
                i32::try_from(value)
                    .map(OptionValue::Integer)
                    .map_err(|_| Error::OutOfRange(format!("{} does not fit an integer", text)))
            }
            OptionKind::Color => {
                let value = parse_int(text)?;
                if value < i64::from(i32::MIN) || value > i64::from(u32::MAX) {
                    return Err(Error::OutOfRange(format!(
                        "{} does not fit a color",
                        text
                    )));
                }
                // Values above i32::MAX wrap, so 0xff00ff00 keeps its bit pattern
                Ok(OptionValue::Color(value as u32 as i32))
            }
            OptionKind::Float => Ok(OptionValue::Float(text.trim().parse::<f32>()?)),
            OptionKind::String => Err(Error::Unsupported(
                "string options cannot be set from text".to_string(),
            )),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Boolean(b) => write!(f, "{}", b),
            OptionValue::Integer(i) => write!(f, "{}", i),
            OptionValue::Float(v) => write!(f, "{:.6}", v),
            OptionValue::String(s) => write!(f, "\"{}\"", s),
            OptionValue::Color(c) => write!(f, "0x{:x}", c),
        }
    }
}

/// Parse an integer with its base taken from the prefix: `0x` hexadecimal,
/// a leading `0` octal, decimal otherwise.
fn parse_int(text: &str) -> Result<i64> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (radix, digits) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };

    // from_str_radix would accept a second sign after the prefix
    if digits.starts_with('+') || digits.starts_with('-') {
        return Err(Error::InvalidInteger(text.to_string()));
    }

    let magnitude = i64::from_str_radix(digits, radix)?;
    Ok(if negative { -magnitude } else { magnitude })
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Boolean(b)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        OptionValue::Integer(i)
    }
}

impl From<f32> for OptionValue {
    fn from(f: f32) -> Self {
        OptionValue::Float(f)
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::String(s)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

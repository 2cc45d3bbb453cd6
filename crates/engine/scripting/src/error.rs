//! Error types for the game options registry

use crate::OptionKind;
use thiserror::Error;

/// Result type for option operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing game options
#[derive(Error, Debug)]
pub enum Error {
    /// No option matches the requested key
    #[error("Option not found: {0}")]
    NotFound(String),

    /// The operation's value kind differs from the option's declared kind
    #[error("Type error: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: OptionKind,
        actual: OptionKind,
    },

    /// Text could not be parsed as an integer
    #[error("Invalid integer: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// Text could not be parsed as a float
    #[error("Invalid float: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer text with a stray sign or prefix
    #[error("Invalid integer: {0}")]
    InvalidInteger(String),

    /// Parsed integer does not fit the option's storage
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Backing storage rejected the write (usually an unwired option)
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Backing storage could not be read
    #[error("Read failed: {0}")]
    ReadFailed(String),

    /// The operation is not supported for this kind of option
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// KDL parsing error
    #[error("KDL parse error: {0}")]
    KdlParse(#[from] kdl::KdlError),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Registry setting has the wrong shape
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

impl Error {
    /// True for failures caused by asking an option for the wrong kind of value
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. } | Error::Unsupported(_))
    }
}

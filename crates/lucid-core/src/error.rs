//! Error types for lucid-core

use thiserror::Error;

/// Raised when a stored mapping cannot be rebuilt into a valid record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Type error in {field}: expected {expected}, got {got}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    #[error("Invalid {field} code: {code}")]
    InvalidCode { field: &'static str, code: i64 },

    #[error("Value out of range for {field}: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("Corrupt stored data: {0}")]
    Corrupt(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DecodeError>;

//! Error types for persistence operations.

use lucid_core::DecodeError;
use thiserror::Error;

/// Errors that can occur while saving or loading.
#[derive(Debug, Error)]
pub enum Error {
    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored data could not be rebuilt into a model.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Store configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] ron::error::SpannedError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, Error>;

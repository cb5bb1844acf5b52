//! Error type shared by storage, configuration and the CLI layer.
//!
//! Validation failures are not errors here: they travel as `FieldErrors`
//! inside the form state and are rendered next to the offending field.

use std::io;
use thiserror::Error;

/// Errors raised by the environment around the form engine
#[derive(Debug, Error)]
pub enum EntryFormError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown form field '{0}'")]
    UnknownField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage backend unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<io::Error> for EntryFormError {
    fn from(err: io::Error) -> Self {
        EntryFormError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for EntryFormError {
    fn from(err: serde_json::Error) -> Self {
        EntryFormError::SerializationError(err.to_string())
    }
}

pub type EntryFormResult<T> = Result<T, EntryFormError>;

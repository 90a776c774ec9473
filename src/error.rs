//! Error types for the orthos library.
//!
//! All errors are represented by the [`OrthosError`] enum. The core never
//! produces a recoverable error of its own: an unknown query word is a
//! normal classification, not a failure. What remains is the input layer
//! (I/O, a malformed dictionary-size line) and output serialization.

use std::io;

use thiserror::Error;

/// The main error type for orthos operations.
#[derive(Error, Debug)]
pub enum OrthosError {
    /// I/O errors (reading dictionaries and query streams).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed input, e.g. a dictionary-size line that is not a number.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Dictionary-related errors.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid operation.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OrthosError.
pub type Result<T> = std::result::Result<T, OrthosError>;

impl OrthosError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        OrthosError::Parse(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        OrthosError::Dictionary(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        OrthosError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OrthosError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = OrthosError::parse("bad dictionary size");
        assert_eq!(error.to_string(), "Parse error: bad dictionary size");

        let error = OrthosError::dictionary("word list unreadable");
        assert_eq!(error.to_string(), "Dictionary error: word list unreadable");

        let error = OrthosError::other("something else");
        assert_eq!(error.to_string(), "Error: something else");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let orthos_error = OrthosError::from(io_error);

        match orthos_error {
            OrthosError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}

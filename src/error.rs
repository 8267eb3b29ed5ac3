//! Custom error types for listkeeper
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for listkeeper operations
#[derive(Error, Debug)]
pub enum KeeperError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input (empty text, bad amount)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A 1-based position outside the displayed list
    #[error("Invalid number {index}: choose between 1 and {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl KeeperError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidIndex { .. })
    }
}

impl From<std::io::Error> for KeeperError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KeeperError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for listkeeper operations
pub type KeeperResult<T> = Result<T, KeeperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KeeperError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_index_display() {
        let err = KeeperError::InvalidIndex { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Invalid number 4: choose between 1 and 2");
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KeeperError = io_err.into();
        assert!(matches!(err, KeeperError::Io(_)));
        assert!(!err.is_validation());
    }
}

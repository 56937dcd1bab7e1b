//! Custom error types for kakeibo
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for kakeibo operations
#[derive(Error, Debug)]
pub enum KakeiboError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// An entered amount is not a positive whole number
    #[error("Invalid amount '{0}': expected a positive whole number")]
    InvalidAmount(String),

    /// An amount was confirmed while no category was selected
    #[error("No category is selected")]
    NoSelection,

    /// A category was selected while another amount entry was still pending
    #[error("An amount entry for '{0}' is already pending")]
    EntryPending(String),
}

impl KakeiboError {
    /// Create an invalid-amount error from the raw input
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount(input.into())
    }

    /// Check if this is an invalid-amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for KakeiboError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KakeiboError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for kakeibo operations
pub type KakeiboResult<T> = Result<T, KakeiboError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KakeiboError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = KakeiboError::invalid_amount("-5");
        assert_eq!(
            err.to_string(),
            "Invalid amount '-5': expected a positive whole number"
        );
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_entry_pending_error() {
        let err = KakeiboError::EntryPending("食費".into());
        assert_eq!(
            err.to_string(),
            "An amount entry for '食費' is already pending"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let kakeibo_err: KakeiboError = io_err.into();
        assert!(matches!(kakeibo_err, KakeiboError::Io(_)));
    }
}

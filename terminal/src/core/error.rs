//! # Common Error Types
//!
//! Consolidated error handling for the wallet terminal.
//!
//! ## Error Categories
//!
//! - **Storage**: durable key-value storage I/O (read, write, remove)
//! - **Serialization**: malformed JSON, either in storage or in a response body
//! - **Api**: market data requests (network, timeout, non-2xx status)
//! - **Clipboard**: the system clipboard refused a write
//! - **Config**: invalid configuration values
//! - **Validation**: records that parse but break a data invariant
//!
//! None of these is fatal. Callers degrade instead of propagating to the UI:
//! storage and serialization errors during restore mean "no session", API
//! errors keep the last price snapshot, clipboard errors become a toast.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Durable storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored or received data is not valid JSON for the expected shape.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Market data request failed.
    ///
    /// Covers connection failures, timeouts, non-success HTTP status codes,
    /// and responses missing a tracked asset.
    #[error("API error: {0}")]
    Api(String),

    /// Writing to the clipboard failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Configuration value out of range or unreadable.
    #[error("Config error: {0}")]
    Config(String),

    /// Data parsed but violates an invariant (e.g. seed phrase length).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Api(format!("Request timed out: {}", err))
        } else if err.is_decode() {
            AppError::Serialization(format!("Failed to parse response: {}", err))
        } else {
            AppError::Api(format!("Network error: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(AppError::Api("timeout".into()).to_string(), "API error: timeout");
        assert_eq!(
            AppError::Validation("expected 12 words".into()).to_string(),
            "Validation error: expected 12 words"
        );
        assert_eq!(AppError::Clipboard("denied".into()).to_string(), "Clipboard error: denied");
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        assert!(matches!(AppError::from(io), AppError::Storage(_)));
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Serialization(_)));
    }
}

//! Store error types.

use std::path::PathBuf;

use billbook_shared::AppError;
use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data directory could not be created.
    #[error("cannot create data directory {path}: {source}")]
    CreateDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a key failed.
    #[error("I/O error on key '{key}': {source}")]
    Io {
        /// Storage key.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be decoded, or a value could not be encoded.
    #[error("invalid JSON for key '{key}': {source}")]
    Json {
        /// Storage key.
        key: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// Keys must be plain file stems.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

impl StoreError {
    /// Create an I/O error for `key`.
    #[must_use]
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    /// Create a JSON error for `key`.
    #[must_use]
    pub fn json(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            key: key.into(),
            source,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_to_storage_error() {
        let err = StoreError::InvalidKey("../etc".to_string());
        let app: AppError = err.into();
        assert_eq!(app.error_code(), "STORAGE_ERROR");
        assert!(app.to_string().contains("../etc"));
    }
}

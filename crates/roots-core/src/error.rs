//! Error types for the roots catalog.
//!
//! Lookups that find nothing are not errors: they return `None`. The variants
//! here cover the few genuine failures: asking for a default from an empty
//! registry, loading a malformed seed, or a registrar rejecting an authority.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the roots catalog.
#[derive(Debug, Error)]
pub enum RootsError {
    #[error("No default root available: registry is empty")]
    NoDefaultAvailable,

    // Seed loading errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Provider registration errors
    #[error("Failed to register authority {authority}: {message}")]
    Registration { authority: String, message: String },
}

/// Result type alias for roots operations.
pub type Result<T> = std::result::Result<T, RootsError>;

impl From<std::io::Error> for RootsError {
    fn from(err: std::io::Error) -> Self {
        RootsError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for RootsError {
    fn from(err: serde_json::Error) -> Self {
        RootsError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl RootsError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        RootsError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RootsError::NoDefaultAvailable.to_string(),
            "No default root available: registry is empty"
        );

        let err = RootsError::Validation {
            field: "authority".into(),
            message: "must not be empty".into(),
        };
        assert_eq!(
            err.to_string(),
            "Validation error for authority: must not be empty"
        );
    }

    #[test]
    fn test_io_with_path_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = RootsError::io_with_path(io, "/tmp/roots.json");
        match err {
            RootsError::Io { path, source, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/roots.json")));
                assert!(source.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

//! Error types for IndustryKB.
//!
//! Library crates use [`IndustryKbError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all IndustryKB operations.
#[derive(Debug, thiserror::Error)]
pub enum IndustryKbError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The indexed page source could not be reached or queried.
    ///
    /// Fatal: aborts the run before any artifact is written.
    #[error("page source unavailable: {0}")]
    SourceUnavailable(String),

    /// An artifact could not be persisted to its destination.
    ///
    /// Reported per-artifact; a failure on one artifact never cancels
    /// the attempt on its sibling.
    #[error("write failure at {path:?}: {source}")]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Document encoding/decoding error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (schema mismatch, invalid format, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, IndustryKbError>;

impl IndustryKbError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a source-unavailable error from any displayable message.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a failed artifact write with its destination path.
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = IndustryKbError::config("missing output directory");
        assert_eq!(err.to_string(), "config error: missing output directory");

        let err = IndustryKbError::source("database locked");
        assert!(err.to_string().contains("page source unavailable"));
        assert!(err.to_string().contains("database locked"));
    }

    #[test]
    fn write_failure_carries_path() {
        let err = IndustryKbError::write_failure(
            "/tmp/out/kb.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("kb.json"));
        assert!(msg.contains("denied"));
    }
}

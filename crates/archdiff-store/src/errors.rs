//! Error handling for archdiff-store
//!
//! Wraps archdiff-core ExError with store-specific helpers

use archdiff_core::errors::{ArchDiffError, ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an unreadable document error
pub fn document_unreadable(path: &Path, err: std::io::Error) -> ExError {
    ArchDiffError::DocumentUnreadable {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
    .into()
}

/// Create a malformed document error
pub fn document_malformed(path: &Path, err: serde_json::Error) -> ExError {
    ArchDiffError::DocumentMalformed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
    .into()
}

/// Create a report export error
pub fn export_failed(path: &Path, reason: impl std::fmt::Display) -> ExError {
    ArchDiffError::ExportFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Create a report import error
pub fn import_failed(path: &Path, reason: impl std::fmt::Display) -> ExError {
    ArchDiffError::ImportFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

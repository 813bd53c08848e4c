//! Domain error types for patch operations.
//!
//! A missing marker is fatal: the splice must locate both boundaries before
//! any text is produced, so the target file is never written on failure.

use thiserror::Error;

/// Errors raised while locating a splice range inside a source file.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("could not locate block to replace: no line contains start marker `{marker}`")]
    StartMarkerNotFound { marker: String },

    #[error(
        "could not locate block to replace: no line from the start marker on matches end marker `{marker}`"
    )]
    EndMarkerNotFound { marker: String },

    #[error("patch operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

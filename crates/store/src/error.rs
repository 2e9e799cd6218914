use std::path::PathBuf;

use crate::core::BoardError;
use crate::format::FORMAT_VERSION;

/// Errors that can occur while saving or loading a board.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported save format version {0} (expected {expected})", expected = FORMAT_VERSION)]
    UnsupportedVersion(u32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

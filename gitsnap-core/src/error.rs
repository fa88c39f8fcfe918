//! Error types for gitsnap

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for gitsnap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for gitsnap operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A git invocation exited non-zero
    #[error("git {args} failed: {stderr}")]
    Command {
        /// The arguments git was invoked with
        args: String,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The snapshot file does not exist
    #[error("snapshot file not found: {0}")]
    SnapshotMissing(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

//! Error types for CTL transform discovery and classification.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for CTL operations.
pub type CtlResult<T> = Result<T, CtlError>;

/// Errors from CTL transform discovery and classification.
#[derive(Debug, Error)]
pub enum CtlError {
    /// IO failure reading a CTL file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid glob pattern while scanning a transform tree.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A CTL file that does not sit under a recognized family directory.
    #[error("no recognized transform family for {path}")]
    UnknownFamily {
        /// Path of the offending file.
        path: PathBuf,
    },
}

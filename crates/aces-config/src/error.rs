//! Error types for config assembly and writing.

use thiserror::Error;

/// Result alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from config assembly, validation and writing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO failure writing a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation found errors in an assembled config.
    #[error("config validation failed: {details}")]
    Validation {
        /// The collected error messages, one per line.
        details: String,
    },
}

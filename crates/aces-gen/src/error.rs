//! Error types for config generation.

use thiserror::Error;

/// Result alias for generation operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors from the config generation pipeline.
#[derive(Debug, Error)]
pub enum GenError {
    /// IO failure reading settings or transforms.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed settings file.
    #[error("settings error: {0}")]
    Settings(#[from] serde_yaml::Error),

    /// Invalid include/exclude filter pattern.
    #[error("invalid filter pattern: {0}")]
    Filter(#[from] glob::PatternError),

    /// CTL discovery or classification failure.
    #[error(transparent)]
    Ctl(#[from] aces_ctl::CtlError),

    /// Conversion graph failure.
    #[error(transparent)]
    Graph(#[from] aces_graph::GraphError),

    /// Config assembly or writing failure.
    #[error(transparent)]
    Config(#[from] aces_config::ConfigError),
}

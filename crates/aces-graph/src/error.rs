//! Error types for conversion graph operations.

use thiserror::Error;

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors from conversion graph construction and queries.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A node id that is not present in the graph.
    #[error("unknown graph node: {id}")]
    UnknownNode {
        /// The offending node id.
        id: String,
    },
}

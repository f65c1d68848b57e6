//! Colorspace conversion graph over *aces-dev* CTL transforms.
//!
//! Every CTL transform that implements a colorspace conversion becomes a
//! directed edge between two colorspace nodes. The graph answers shortest
//! path queries between colorspaces, which downstream code turns into
//! OpenColorIO transform chains:
//!
//! - **Construction**: [`build_conversion_graph`] folds classified
//!   transforms into a [`ConversionGraph`]
//! - **Queries**: [`ConversionGraph::conversion_path`] resolves the ordered
//!   edge list between two nodes, [`resolve_reference_path`] anchors one end
//!   at the scene reference colorspace
//!
//! # Example
//!
//! ```
//! use aces_ctl::{CtlTransform, TransformFamily, REFERENCE_COLORSPACE};
//! use aces_graph::build_conversion_graph;
//!
//! # fn main() -> aces_graph::GraphResult<()> {
//! let transforms = vec![
//!     CtlTransform::builder("ACEScg_to_ACES", TransformFamily::Csc)
//!         .source("ACEScg")
//!         .target(REFERENCE_COLORSPACE)
//!         .build(),
//! ];
//! let graph = build_conversion_graph(&transforms)?;
//! let path = graph.conversion_path("csc/ACEScg", REFERENCE_COLORSPACE)?;
//! assert_eq!(path, Some(vec![("csc/ACEScg", "ACES2065-1")]));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod build;
mod error;
mod graph;
mod node;
mod path;

// Re-exports
pub use build::build_conversion_graph;
pub use error::{GraphError, GraphResult};
pub use graph::ConversionGraph;
pub use node::{node_leaf, Node, NodeBuilder, NODE_NAME_SEPARATOR};
pub use path::{resolve_reference_path, PathDirection};

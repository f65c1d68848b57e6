//! *aces-dev* reference config generation for OpenColorIO.
//!
//! Derives a complete OpenColorIO configuration from the *aces-dev* CTL
//! transform tree, using the conversion graph as the single source of
//! truth:
//!
//! - **Chains**: [`node_to_transform`] resolves a node's shortest path to
//!   the reference colorspace and folds it into builtin, file or group
//!   transforms
//! - **Names**: [`beautify_colorspace_name`], [`beautify_view_name`] and
//!   [`beautify_display_name`] rewrite CTL naming into presentation names
//! - **Classification**: [`classify_nodes`] partitions graph nodes into
//!   family ordered colorspace entries and seeds the display views
//! - **Views**: [`organize_views`] sorts the view table and pins the
//!   default display
//! - **Pipeline**: [`generate_config_aces`] runs discovery to config
//!   writing per [`GenerateSettings`]
//!
//! Styles OpenColorIO has no builtin transform for are emitted as
//! placeholder file transforms carrying the style name, which keeps the
//! mapping onto the CTL tree exact.
//!
//! # Example
//!
//! ```
//! use aces_ctl::{CtlTransform, TransformFamily, REFERENCE_COLORSPACE};
//! use aces_gen::{generate_from_graph, GenerateSettings};
//! use aces_graph::build_conversion_graph;
//!
//! # fn main() -> aces_gen::GenResult<()> {
//! let transforms = vec![
//!     CtlTransform::builder("ACEScg_to_ACES", TransformFamily::Csc)
//!         .source("ACEScg")
//!         .target(REFERENCE_COLORSPACE)
//!         .build(),
//! ];
//! let graph = build_conversion_graph(&transforms)?;
//! let generated = generate_from_graph(&graph, &GenerateSettings::default())?;
//! assert!(generated.config.to_yaml().contains("CSC - ACEScg"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod beautify;
mod chain;
mod classify;
mod error;
mod generate;
mod settings;
mod views;

// Re-exports
pub use beautify::{
    beautify_colorspace_name, beautify_display_name, beautify_name, beautify_view_name,
    colorspace_name_rules, display_name_rules, view_name_rules, SubstitutionRule,
};
pub use chain::{
    edge_transform_style, node_to_transform, style_transform, BuiltinResolver, TransformResolver,
    BUILTIN_TRANSFORM_NAME_SEPARATOR,
};
pub use classify::{
    classify_nodes, node_description, node_to_colorspace, ClassifiedNodes, DescriptionStyle,
    CLASSIFIED_FAMILIES, COLORSPACE_NAME_SEPARATOR,
};
pub use error::{GenError, GenResult};
pub use generate::{
    generate_config_aces, generate_from_graph, GeneratedConfig, RAW_COLORSPACE_NAME,
};
pub use settings::GenerateSettings;
pub use views::{organize_views, OrganizedViews, DEFAULT_DISPLAY};

//! Conversion chain building.
//!
//! Every edge of the conversion graph carries an implicit transform style
//! named after its endpoints, e.g. the edge from `csc/ACEScg` to
//! `ACES2065-1` is the style `ACEScg_to_ACES2065-1`. Chain building walks
//! a node's path to the reference and turns each edge into a concrete
//! [`Transform`]:
//!
//! - styles a [`TransformResolver`] recognises become
//!   [`BuiltinTransform`](aces_config::BuiltinTransform)s
//! - unknown styles become placeholder
//!   [`FileTransform`](aces_config::FileTransform)s and log a warning
//! - multi-edge paths collapse into a single
//!   [`GroupTransform`](aces_config::GroupTransform)
//!
//! A node with no path to the reference yields `None`, the reference
//! itself yields `None` as well since no conversion is required.

use aces_config::{is_builtin_style, Transform};
use aces_graph::{node_leaf, resolve_reference_path, ConversionGraph, GraphResult, PathDirection};
use tracing::{debug, warn};

/// Separator joining the endpoints of an edge into a transform style.
pub const BUILTIN_TRANSFORM_NAME_SEPARATOR: &str = "_to_";

/// Maps a transform style name to a concrete transform.
pub trait TransformResolver {
    /// Returns the transform for `style`, or `None` when the style is not
    /// recognised.
    fn resolve(&self, style: &str) -> Option<Transform>;
}

/// Resolves styles against the builtin transform registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinResolver;

impl TransformResolver for BuiltinResolver {
    fn resolve(&self, style: &str) -> Option<Transform> {
        is_builtin_style(style).then(|| Transform::builtin(style))
    }
}

/// The transform style named by an edge between two nodes.
///
/// Node identifiers carry a family prefix (`csc/ACEScg`), styles use the
/// bare colorspace leaves (`ACEScg_to_ACES2065-1`).
pub fn edge_transform_style(source_id: &str, target_id: &str) -> String {
    format!(
        "{}{}{}",
        node_leaf(source_id),
        BUILTIN_TRANSFORM_NAME_SEPARATOR,
        node_leaf(target_id)
    )
}

/// Turns a style into a transform, falling back to a placeholder
/// [`FileTransform`](aces_config::FileTransform) for unknown styles.
pub fn style_transform(style: &str, resolver: &dyn TransformResolver) -> Transform {
    match resolver.resolve(style) {
        Some(transform) => transform,
        None => {
            warn!(
                style = %style,
                "Style is not a known builtin transform, using a placeholder FileTransform instead"
            );
            Transform::file(style)
        }
    }
}

/// Builds the transform chain converting `node` to or from the scene
/// reference.
///
/// Returns `Ok(None)` when the graph holds no path in the requested
/// direction, or when `node` is the reference itself.
pub fn node_to_transform(
    graph: &ConversionGraph,
    node: &str,
    direction: PathDirection,
    resolver: &dyn TransformResolver,
) -> GraphResult<Option<Transform>> {
    let Some(edges) = resolve_reference_path(graph, node, direction)? else {
        debug!(
            node = %node,
            reference = %graph.scene_reference(),
            "No conversion path to reference"
        );
        return Ok(None);
    };
    if edges.is_empty() {
        return Ok(None);
    }

    debug!(
        node = %node,
        direction = ?direction,
        path = %verbose_path(&edges),
        "Building conversion chain"
    );

    let mut transforms: Vec<Transform> = edges
        .iter()
        .map(|(source, target)| style_transform(&edge_transform_style(source, target), resolver))
        .collect();

    if transforms.len() == 1 {
        Ok(transforms.pop())
    } else {
        Ok(Some(Transform::group(transforms)))
    }
}

fn verbose_path(edges: &[(&str, &str)]) -> String {
    let mut ids: Vec<&str> = Vec::with_capacity(edges.len() + 1);
    for (source, target) in edges {
        for id in [*source, *target] {
            if ids.last() != Some(&id) {
                ids.push(id);
            }
        }
    }
    ids.join(" --> ")
}

//! Conversion graph construction from classified CTL transforms.

use aces_ctl::CtlTransform;
use tracing::debug;

use crate::error::GraphResult;
use crate::graph::ConversionGraph;
use crate::node::{Node, NODE_NAME_SEPARATOR};

/// Fold classified CTL transforms into a conversion graph.
///
/// Every transform with a complete conversion pair contributes one directed
/// edge. Endpoint nodes are created on demand and carry the family qualified
/// id `family/name`, except for the reference colorspaces which keep their
/// bare names. The transform itself is attached to each non reference
/// endpoint so that classification can later recover descriptions from it.
///
/// Transforms are processed in the given order, which makes the resulting
/// node ordering, and therefore every downstream query, deterministic.
pub fn build_conversion_graph(transforms: &[CtlTransform]) -> GraphResult<ConversionGraph> {
    let mut graph = ConversionGraph::new();
    for transform in transforms {
        let Some((source, target)) = transform.conversion() else {
            debug!(name = %transform.name(), "Skipping CTL transform without conversion endpoints");
            continue;
        };
        let source_id = node_id(&graph, source, transform);
        let target_id = node_id(&graph, target, transform);

        for id in [&source_id, &target_id] {
            if !graph.contains(id) {
                graph.add_node(
                    Node::builder(id.clone(), transform.family())
                        .genus(transform.genus())
                        .build(),
                );
            }
            if !is_reference(&graph, id) {
                graph.attach_transform(id, transform.clone())?;
            }
        }
        graph.add_edge(&source_id, &target_id)?;
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Built conversion graph"
    );
    Ok(graph)
}

/// Graph id for a conversion endpoint.
///
/// Reference colorspaces keep their bare names, everything else is
/// qualified by the family of the transform that introduces it.
fn node_id(graph: &ConversionGraph, colorspace: &str, transform: &CtlTransform) -> String {
    if colorspace == graph.scene_reference() || colorspace == graph.display_reference() {
        colorspace.to_string()
    } else {
        format!(
            "{}{}{}",
            transform.family(),
            NODE_NAME_SEPARATOR,
            colorspace
        )
    }
}

fn is_reference(graph: &ConversionGraph, id: &str) -> bool {
    id == graph.scene_reference() || id == graph.display_reference()
}

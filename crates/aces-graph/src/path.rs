//! Shortest path queries over the conversion graph.

use petgraph::algo::astar;

use crate::error::{GraphError, GraphResult};
use crate::graph::ConversionGraph;

/// Direction of a reference path query.
///
/// Both directions are fresh directed queries against the same graph. The
/// reverse direction searches from the reference outwards rather than
/// reversing a forward result, so it only succeeds when reverse edges
/// actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDirection {
    /// From the node to the scene reference colorspace.
    Forward,
    /// From the scene reference colorspace to the node.
    Reverse,
}

impl ConversionGraph {
    /// Shortest conversion path between two nodes, as an ordered edge list.
    ///
    /// Returns `Ok(None)` when no path exists and `Ok(Some(vec![]))` when
    /// source and target are the same node. Ties between equal length paths
    /// resolve deterministically for a given construction order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] when either endpoint is not in
    /// the graph.
    pub fn conversion_path<'a>(
        &'a self,
        source: &str,
        target: &str,
    ) -> GraphResult<Option<Vec<(&'a str, &'a str)>>> {
        let start = self.index_of(source).ok_or_else(|| GraphError::UnknownNode {
            id: source.to_string(),
        })?;
        let goal = self.index_of(target).ok_or_else(|| GraphError::UnknownNode {
            id: target.to_string(),
        })?;

        let Some((_, indices)) = astar(
            self.digraph(),
            start,
            |node| node == goal,
            |_| 1u32,
            |_| 0u32,
        ) else {
            return Ok(None);
        };

        let ids: Vec<&str> = indices
            .iter()
            .map(|&index| self.digraph()[index].id())
            .collect();
        Ok(Some(ids.windows(2).map(|w| (w[0], w[1])).collect()))
    }
}

/// Shortest path between a node and the scene reference colorspace.
///
/// [`PathDirection::Forward`] resolves node to reference,
/// [`PathDirection::Reverse`] resolves reference to node.
pub fn resolve_reference_path<'a>(
    graph: &'a ConversionGraph,
    node: &str,
    direction: PathDirection,
) -> GraphResult<Option<Vec<(&'a str, &'a str)>>> {
    match direction {
        PathDirection::Forward => graph.conversion_path(node, graph.scene_reference()),
        PathDirection::Reverse => graph.conversion_path(graph.scene_reference(), node),
    }
}

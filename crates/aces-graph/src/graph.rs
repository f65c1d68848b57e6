//! The conversion graph container.

use std::collections::HashMap;

use aces_ctl::{
    CtlTransform, TransformFamily, OUTPUT_ENCODING_COLORSPACE, REFERENCE_COLORSPACE,
};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::{GraphError, GraphResult};
use crate::node::Node;

/// A directed graph of colorspace conversions.
///
/// Nodes are colorspaces, edges are CTL transforms converting from their
/// source node to their target node. The two ACES reference colorspaces are
/// created up front and are always present.
#[derive(Debug, Clone)]
pub struct ConversionGraph {
    graph: DiGraph<Node, ()>,
    indices: HashMap<String, NodeIndex>,
    scene_reference: String,
    display_reference: String,
}

impl ConversionGraph {
    /// Create a graph holding only the two reference colorspace nodes.
    pub fn new() -> Self {
        let mut graph = Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
            scene_reference: REFERENCE_COLORSPACE.to_string(),
            display_reference: OUTPUT_ENCODING_COLORSPACE.to_string(),
        };
        graph.add_node(
            Node::builder(REFERENCE_COLORSPACE, TransformFamily::Csc)
                .genus("reference")
                .build(),
        );
        graph.add_node(
            Node::builder(OUTPUT_ENCODING_COLORSPACE, TransformFamily::Output)
                .genus("reference")
                .build(),
        );
        graph
    }

    /// Id of the scene-referred reference colorspace node.
    #[inline]
    pub fn scene_reference(&self) -> &str {
        &self.scene_reference
    }

    /// Id of the display-referred output encoding colorspace node.
    #[inline]
    pub fn display_reference(&self) -> &str {
        &self.display_reference
    }

    /// Add a node, keeping the existing one when the id is already present.
    pub fn add_node(&mut self, node: Node) {
        if self.indices.contains_key(node.id()) {
            return;
        }
        let id = node.id().to_string();
        let index = self.graph.add_node(node);
        self.indices.insert(id, index);
    }

    /// Add a directed edge between two existing nodes.
    ///
    /// Duplicate edges collapse silently, a conversion implemented by several
    /// CTL files is still a single edge.
    pub fn add_edge(&mut self, source: &str, target: &str) -> GraphResult<()> {
        let source_index = self.index_of(source).ok_or_else(|| GraphError::UnknownNode {
            id: source.to_string(),
        })?;
        let target_index = self.index_of(target).ok_or_else(|| GraphError::UnknownNode {
            id: target.to_string(),
        })?;
        if self.graph.find_edge(source_index, target_index).is_none() {
            self.graph.add_edge(source_index, target_index, ());
        }
        Ok(())
    }

    /// Attach a CTL transform to an existing node.
    pub fn attach_transform(&mut self, id: &str, transform: CtlTransform) -> GraphResult<()> {
        let index = self.index_of(id).ok_or_else(|| GraphError::UnknownNode {
            id: id.to_string(),
        })?;
        if let Some(node) = self.graph.node_weight_mut(index) {
            node.push_transform(transform);
        }
        Ok(())
    }

    /// Whether a node id is present.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.indices.contains_key(id)
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).and_then(|index| self.graph.node_weight(index))
    }

    /// Iterate nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Nodes matching a predicate, in insertion order.
    pub fn filter_nodes<P>(&self, predicate: P) -> Vec<&Node>
    where
        P: Fn(&Node) -> bool,
    {
        self.nodes().filter(|n| predicate(n)).collect()
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.indices.get(id).copied()
    }

    pub(crate) fn digraph(&self) -> &DiGraph<Node, ()> {
        &self.graph
    }
}

impl Default for ConversionGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_preexist() {
        let graph = ConversionGraph::new();
        assert!(graph.contains("ACES2065-1"));
        assert!(graph.contains("OCES"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut graph = ConversionGraph::new();
        graph.add_node(
            Node::builder("csc/ACEScg", TransformFamily::Csc)
                .genus("first")
                .build(),
        );
        graph.add_node(
            Node::builder("csc/ACEScg", TransformFamily::Csc)
                .genus("second")
                .build(),
        );
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.node("csc/ACEScg").map(|n| n.genus()), Some("first"));
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let mut graph = ConversionGraph::new();
        graph.add_node(Node::new("csc/ACEScg", TransformFamily::Csc));
        graph.add_edge("csc/ACEScg", "ACES2065-1").expect("edge");
        graph.add_edge("csc/ACEScg", "ACES2065-1").expect("edge");
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_edge_requires_known_nodes() {
        let mut graph = ConversionGraph::new();
        let result = graph.add_edge("csc/Missing", "ACES2065-1");
        assert!(matches!(result, Err(GraphError::UnknownNode { id }) if id == "csc/Missing"));
    }

    #[test]
    fn test_attach_transform() {
        let mut graph = ConversionGraph::new();
        graph.add_node(Node::new("csc/ACEScg", TransformFamily::Csc));
        let transform = CtlTransform::new("ACEScg_to_ACES", TransformFamily::Csc);
        graph.attach_transform("csc/ACEScg", transform).expect("attach");
        assert_eq!(
            graph.node("csc/ACEScg").map(|n| n.transforms().len()),
            Some(1)
        );
    }

    #[test]
    fn test_filter_nodes() {
        let mut graph = ConversionGraph::new();
        graph.add_node(Node::new("csc/ACEScg", TransformFamily::Csc));
        graph.add_node(Node::new("input/Camera", TransformFamily::Input));
        let csc = graph.filter_nodes(|n| n.family() == TransformFamily::Csc);
        assert_eq!(csc.len(), 2);
    }
}

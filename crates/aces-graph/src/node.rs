//! Conversion graph nodes.

use aces_ctl::{CtlTransform, TransformFamily, UNDEFINED_GENUS};

/// Separator between the family qualifier and the leaf name in a node id,
/// e.g. `csc/ACEScg`.
pub const NODE_NAME_SEPARATOR: &str = "/";

/// Leaf name of a node id, the part after the last separator.
///
/// Reference colorspaces carry bare ids, so their leaf is the id itself.
pub fn node_leaf(id: &str) -> &str {
    id.rsplit(NODE_NAME_SEPARATOR).next().unwrap_or(id)
}

/// A colorspace node in the conversion graph.
///
/// Each node carries the CTL transforms attached to it, i.e. every non
/// reference transform whose conversion starts or ends at this colorspace.
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    family: TransformFamily,
    genus: String,
    transforms: Vec<CtlTransform>,
}

impl Node {
    /// Create a node with the given id and family and no attached transforms.
    pub fn new(id: impl Into<String>, family: TransformFamily) -> Self {
        Self {
            id: id.into(),
            family,
            genus: UNDEFINED_GENUS.to_string(),
            transforms: Vec::new(),
        }
    }

    /// Create a builder for a node with the given id and family.
    pub fn builder(id: impl Into<String>, family: TransformFamily) -> NodeBuilder {
        NodeBuilder {
            inner: Self::new(id, family),
        }
    }

    /// Node id, unique within a graph.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Family of the transforms this node was created from.
    #[inline]
    pub fn family(&self) -> TransformFamily {
        self.family
    }

    /// Genus of the transforms this node was created from.
    #[inline]
    pub fn genus(&self) -> &str {
        &self.genus
    }

    /// CTL transforms attached to this node, in attachment order.
    #[inline]
    pub fn transforms(&self) -> &[CtlTransform] {
        &self.transforms
    }

    /// The first attached CTL transform.
    #[inline]
    pub fn primary_transform(&self) -> Option<&CtlTransform> {
        self.transforms.first()
    }

    /// Leaf name of this node.
    #[inline]
    pub fn leaf(&self) -> &str {
        node_leaf(&self.id)
    }

    pub(crate) fn push_transform(&mut self, transform: CtlTransform) {
        self.transforms.push(transform);
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Builder for [`Node`].
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    inner: Node,
}

impl NodeBuilder {
    /// Set the genus.
    pub fn genus(mut self, genus: impl Into<String>) -> Self {
        self.inner.genus = genus.into();
        self
    }

    /// Attach a CTL transform.
    pub fn transform(mut self, transform: CtlTransform) -> Self {
        self.inner.transforms.push(transform);
        self
    }

    /// Finish building.
    pub fn build(self) -> Node {
        self.inner
    }
}

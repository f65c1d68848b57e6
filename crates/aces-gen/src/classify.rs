//! Node classification into colorspace entries.
//!
//! Classification walks the conversion graph family by family and turns
//! every reachable node into an OpenColorIO [`ColorSpace`]:
//!
//! - the name joins a family label and the beautified node leaf, e.g.
//!   `Output - Rec. 709 (100 nits) dim`
//! - both reference chains are built through
//!   [`node_to_transform`](crate::chain::node_to_transform), nodes with no
//!   chain in either direction are dropped
//! - descriptions aggregate the CTL header metadata of the attached
//!   transforms, controlled by [`DescriptionStyle`]
//! - output nodes additionally seed one display view each
//!
//! Family iteration order is fixed, so classification output order only
//! depends on graph construction order.

use std::collections::HashMap;

use aces_config::{ColorSpace, Family, ViewEntry};
use aces_ctl::{CtlTransform, TransformFamily};
use aces_graph::{ConversionGraph, Node, PathDirection};
use serde::Deserialize;
use tracing::debug;

use crate::beautify::{beautify_colorspace_name, beautify_display_name, beautify_view_name};
use crate::chain::{node_to_transform, TransformResolver};
use crate::error::GenResult;

/// Separator joining the family label and the beautified leaf name.
pub const COLORSPACE_NAME_SEPARATOR: &str = " - ";

/// Families whose nodes become colorspace entries, in classification order.
pub const CLASSIFIED_FAMILIES: [TransformFamily; 4] = [
    TransformFamily::Csc,
    TransformFamily::Input,
    TransformFamily::Look,
    TransformFamily::Output,
];

/// How colorspace descriptions aggregate CTL header metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionStyle {
    /// ACEStransformID of the primary transform.
    Short,
    /// Description and ACEStransformID of the primary transform.
    Long,
    /// ACEStransformIDs of all attached transforms.
    ShortUnion,
    /// Descriptions and ACEStransformIDs of all attached transforms.
    #[default]
    LongUnion,
}

impl DescriptionStyle {
    /// Parse a style name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "short" => Some(Self::Short),
            "long" => Some(Self::Long),
            "short_union" => Some(Self::ShortUnion),
            "long_union" => Some(Self::LongUnion),
            _ => None,
        }
    }

    /// Canonical style name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
            Self::ShortUnion => "short_union",
            Self::LongUnion => "long_union",
        }
    }

    fn is_long(self) -> bool {
        matches!(self, Self::Long | Self::LongUnion)
    }

    fn is_union(self) -> bool {
        matches!(self, Self::ShortUnion | Self::LongUnion)
    }
}

impl std::fmt::Display for DescriptionStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification output.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedNodes {
    /// Colorspace entries in family partition order.
    pub colorspaces: Vec<ColorSpace>,
    /// One view seed per output colorspace, in colorspace order.
    pub view_seeds: Vec<ViewEntry>,
    /// Primary CTL transform per colorspace name, populated on request.
    pub transform_index: HashMap<String, CtlTransform>,
}

/// Config family label for a transform family.
fn family_label(family: TransformFamily) -> Family {
    match family {
        TransformFamily::Csc => Family::Csc,
        TransformFamily::Input => Family::Input,
        TransformFamily::Look => Family::Look,
        TransformFamily::Output => Family::Output,
        TransformFamily::Rrt | TransformFamily::Utility => Family::Utility,
    }
}

/// Description block of one CTL transform.
fn transform_description_block(transform: &CtlTransform, long: bool) -> String {
    let mut parts: Vec<String> = Vec::new();
    if long && !transform.description().is_empty() {
        parts.push(transform.description().to_string());
    }
    if let Some(id) = transform.aces_transform_id() {
        parts.push(format!("ACEStransformID: {id}"));
    }
    parts.join("\n")
}

/// Aggregated description of a node per the requested style.
pub fn node_description(node: &Node, style: DescriptionStyle) -> String {
    let transforms: Vec<&CtlTransform> = if style.is_union() {
        node.transforms().iter().collect()
    } else {
        node.primary_transform().into_iter().collect()
    };
    transforms
        .iter()
        .map(|transform| transform_description_block(transform, style.is_long()))
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Colorspace entry for a single node.
///
/// Returns `Ok(None)` when the node has no conversion chain to the
/// reference in either direction.
pub fn node_to_colorspace(
    graph: &ConversionGraph,
    node: &Node,
    describe: DescriptionStyle,
    resolver: &dyn TransformResolver,
) -> GenResult<Option<ColorSpace>> {
    let to_reference = node_to_transform(graph, node.id(), PathDirection::Forward, resolver)?;
    let from_reference = node_to_transform(graph, node.id(), PathDirection::Reverse, resolver)?;
    if to_reference.is_none() && from_reference.is_none() {
        debug!(
            node = %node.id(),
            "Dropping node with no conversion path in either direction"
        );
        return Ok(None);
    }

    let family = family_label(node.family());
    let name = format!(
        "{}{}{}",
        family.as_str(),
        COLORSPACE_NAME_SEPARATOR,
        beautify_colorspace_name(node.leaf())
    );

    let mut builder = ColorSpace::builder(name)
        .family(family)
        .description(node_description(node, describe));
    if let Some(transform) = to_reference {
        builder = builder.to_reference(transform);
    }
    if let Some(transform) = from_reference {
        builder = builder.from_reference(transform);
    }
    Ok(Some(builder.build()))
}

/// Classifies every reachable node of the graph into colorspace entries.
///
/// With `additional_data` set, the primary CTL transform of every entry is
/// also indexed by colorspace name for downstream consumers.
pub fn classify_nodes(
    graph: &ConversionGraph,
    describe: DescriptionStyle,
    resolver: &dyn TransformResolver,
    additional_data: bool,
) -> GenResult<ClassifiedNodes> {
    let mut classified = ClassifiedNodes::default();
    for family in CLASSIFIED_FAMILIES {
        for node in graph.filter_nodes(|node| node.family() == family) {
            if node.id() == graph.scene_reference() || node.id() == graph.display_reference() {
                continue;
            }
            let Some(colorspace) = node_to_colorspace(graph, node, describe, resolver)? else {
                continue;
            };
            if family == TransformFamily::Output {
                classified.view_seeds.push(ViewEntry::new(
                    beautify_display_name(node.genus()),
                    beautify_view_name(colorspace.name()),
                    colorspace.name(),
                ));
            }
            if additional_data {
                if let Some(primary) = node.primary_transform() {
                    classified
                        .transform_index
                        .insert(colorspace.name().to_string(), primary.clone());
                }
            }
            classified.colorspaces.push(colorspace);
        }
    }
    debug!(
        colorspaces = classified.colorspaces.len(),
        views = classified.view_seeds.len(),
        "Classified conversion graph nodes"
    );
    Ok(classified)
}

#[cfg(test)]
mod tests {
    use aces_config::Transform;
    use aces_ctl::REFERENCE_COLORSPACE;
    use aces_graph::build_conversion_graph;

    use super::*;
    use crate::chain::BuiltinResolver;

    fn sample_transforms() -> Vec<CtlTransform> {
        vec![
            CtlTransform::builder("ACEScg_to_ACES", TransformFamily::Csc)
                .source("ACEScg")
                .target(REFERENCE_COLORSPACE)
                .aces_transform_id("urn:ampas:aces:transformId:v1.5:ACEScsc.Academy.ACEScg_to_ACES.a1.0.3")
                .description("ACEScg to ACES2065-1.")
                .build(),
            CtlTransform::builder("ACES_to_ACEScg", TransformFamily::Csc)
                .source(REFERENCE_COLORSPACE)
                .target("ACEScg")
                .aces_transform_id("urn:ampas:aces:transformId:v1.5:ACEScsc.Academy.ACES_to_ACEScg.a1.0.3")
                .build(),
            CtlTransform::builder("sony_SLog3_SGamut3", TransformFamily::Input)
                .genus("sony")
                .source("sony_SLog3_SGamut3")
                .target(REFERENCE_COLORSPACE)
                .build(),
            CtlTransform::builder("ACES_0_1_1", TransformFamily::Look)
                .source(REFERENCE_COLORSPACE)
                .target("ACES_0_1_1")
                .build(),
            CtlTransform::builder("RRT", TransformFamily::Rrt)
                .source(REFERENCE_COLORSPACE)
                .target("OCES")
                .build(),
            CtlTransform::builder("InvRRT", TransformFamily::Rrt)
                .source("OCES")
                .target(REFERENCE_COLORSPACE)
                .build(),
            CtlTransform::builder("Rec709_100nits_dim", TransformFamily::Output)
                .genus("rec709")
                .source("OCES")
                .target("Rec709_100nits_dim")
                .build(),
            CtlTransform::builder("InvODT.Rec709_100nits_dim", TransformFamily::Output)
                .genus("rec709")
                .source("Rec709_100nits_dim")
                .target("OCES")
                .build(),
        ]
    }

    fn classified() -> ClassifiedNodes {
        let graph = build_conversion_graph(&sample_transforms()).expect("graph");
        classify_nodes(&graph, DescriptionStyle::LongUnion, &BuiltinResolver, true)
            .expect("classification")
    }

    #[test]
    fn test_names_join_family_and_beautified_leaf() {
        let classified = classified();
        let names: Vec<&str> = classified
            .colorspaces
            .iter()
            .map(|cs| cs.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "CSC - ACEScg",
                "Input - sony SLog3 SGamut3",
                "Look - ACES 0.1.1",
                "Output - Rec. 709 (100 nits) dim",
            ]
        );
    }

    #[test]
    fn test_chain_directions() {
        let classified = classified();
        let acescg = &classified.colorspaces[0];
        assert!(acescg.to_reference().is_some());
        assert!(acescg.from_reference().is_some());

        // Input transforms only convert towards the reference.
        let slog = &classified.colorspaces[1];
        assert!(slog.to_reference().is_some());
        assert!(slog.from_reference().is_none());

        // Look transforms only convert away from the reference.
        let look = &classified.colorspaces[2];
        assert!(look.to_reference().is_none());
        assert!(look.from_reference().is_some());
    }

    #[test]
    fn test_output_chain_spans_oces() {
        let classified = classified();
        let output = &classified.colorspaces[3];
        match output.to_reference() {
            Some(Transform::Group(group)) => {
                assert_eq!(group.transforms.len(), 2);
                assert_eq!(
                    group.transforms[0],
                    Transform::file("Rec709_100nits_dim_to_OCES")
                );
                assert_eq!(group.transforms[1], Transform::file("OCES_to_ACES2065-1"));
            }
            other => panic!("expected a group transform, got {other:?}"),
        }
    }

    #[test]
    fn test_output_nodes_seed_views() {
        let classified = classified();
        assert_eq!(classified.view_seeds.len(), 1);
        let seed = &classified.view_seeds[0];
        assert_eq!(seed.display, "Rec.709");
        assert_eq!(seed.view, "Rec. 709");
        assert_eq!(seed.colorspace, "Output - Rec. 709 (100 nits) dim");
    }

    #[test]
    fn test_transform_index() {
        let classified = classified();
        let primary = classified
            .transform_index
            .get("CSC - ACEScg")
            .expect("indexed transform");
        assert_eq!(primary.name(), "ACEScg_to_ACES");
    }

    #[test]
    fn test_unreachable_nodes_drop() {
        let mut transforms = sample_transforms();
        transforms.push(
            CtlTransform::builder("A_to_B", TransformFamily::Csc)
                .source("A")
                .target("B")
                .build(),
        );
        let graph = build_conversion_graph(&transforms).expect("graph");
        let classified =
            classify_nodes(&graph, DescriptionStyle::LongUnion, &BuiltinResolver, false)
                .expect("classification");
        let names: Vec<&str> = classified.colorspaces.iter().map(|cs| cs.name()).collect();
        assert!(!names.contains(&"CSC - A"));
        assert!(!names.contains(&"CSC - B"));
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_description_styles() {
        let classified = classified();
        let acescg = &classified.colorspaces[0];
        // Long union carries both directions, description first.
        assert_eq!(
            acescg.description(),
            "ACEScg to ACES2065-1.\n\
             ACEStransformID: urn:ampas:aces:transformId:v1.5:ACEScsc.Academy.ACEScg_to_ACES.a1.0.3\n\
             \n\
             ACEStransformID: urn:ampas:aces:transformId:v1.5:ACEScsc.Academy.ACES_to_ACEScg.a1.0.3"
        );

        let graph = build_conversion_graph(&sample_transforms()).expect("graph");
        let node = graph.node("csc/ACEScg").expect("node");
        assert_eq!(
            node_description(node, DescriptionStyle::Short),
            "ACEStransformID: urn:ampas:aces:transformId:v1.5:ACEScsc.Academy.ACEScg_to_ACES.a1.0.3"
        );
        assert_eq!(
            node_description(node, DescriptionStyle::Long),
            "ACEScg to ACES2065-1.\n\
             ACEStransformID: urn:ampas:aces:transformId:v1.5:ACEScsc.Academy.ACEScg_to_ACES.a1.0.3"
        );
    }

    #[test]
    fn test_description_style_parse() {
        assert_eq!(DescriptionStyle::parse("short"), Some(DescriptionStyle::Short));
        assert_eq!(
            DescriptionStyle::parse("LONG_UNION"),
            Some(DescriptionStyle::LongUnion)
        );
        assert_eq!(DescriptionStyle::parse("verbose"), None);
        assert_eq!(DescriptionStyle::default().as_str(), "long_union");
    }
}

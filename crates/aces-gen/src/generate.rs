//! Reference config generation.
//!
//! The full pipeline, driven entirely from the conversion graph:
//!
//! 1. discover and classify the CTL transform tree
//! 2. filter transforms against the settings patterns
//! 3. build the conversion graph
//! 4. classify nodes into colorspaces and organize the view table
//! 5. assemble and optionally validate and write the config
//!
//! The generated config maps one to one onto the CTL transform tree. Styles
//! without a builtin counterpart are emitted as placeholder file transforms,
//! so the output documents the mapping rather than being directly usable.

use std::collections::HashMap;

use aces_config::{
    generate_config, names, ColorSpace, Config, ConfigData, Family, FileRule, Roles,
};
use aces_ctl::{
    classify_ctl_transforms, discover_ctl_transforms, filter_ctl_transforms, CtlTransform,
    OUTPUT_ENCODING_COLORSPACE, REFERENCE_COLORSPACE,
};
use aces_graph::{build_conversion_graph, ConversionGraph, PathDirection};
use tracing::debug;

use crate::chain::{node_to_transform, BuiltinResolver, TransformResolver};
use crate::classify::{classify_nodes, ClassifiedNodes, COLORSPACE_NAME_SEPARATOR};
use crate::error::GenResult;
use crate::settings::GenerateSettings;
use crate::views::organize_views;

/// Name of the data colorspace backing the per display raw view.
pub const RAW_COLORSPACE_NAME: &str = "Utility - Raw";

/// Colorspace bound to the scene linear role and the default file rule.
const WORKING_COLORSPACE_NAME: &str = "CSC - ACEScg";

/// A generated config with its assembly data.
#[derive(Debug, Clone)]
pub struct GeneratedConfig {
    /// The assembled config.
    pub config: Config,
    /// The data it was assembled from.
    pub data: ConfigData,
    /// Primary CTL transform per colorspace name, empty unless
    /// [`GenerateSettings::additional_data`] is set.
    pub transform_index: HashMap<String, CtlTransform>,
}

fn reference_colorspace_name(colorspace: &str) -> String {
    format!("CSC{COLORSPACE_NAME_SEPARATOR}{colorspace}")
}

/// Assembles the config data for a conversion graph.
fn assemble(
    graph: &ConversionGraph,
    settings: &GenerateSettings,
    resolver: &dyn TransformResolver,
) -> GenResult<(ConfigData, HashMap<String, CtlTransform>)> {
    let classified: ClassifiedNodes =
        classify_nodes(graph, settings.describe, resolver, settings.additional_data)?;
    let organized = organize_views(&classified.view_seeds, RAW_COLORSPACE_NAME);

    let scene_reference = ColorSpace::builder(reference_colorspace_name(REFERENCE_COLORSPACE))
        .family(Family::Aces)
        .description("The \"Academy Color Encoding System\" reference colorspace.")
        .build();

    let mut display_reference =
        ColorSpace::builder(reference_colorspace_name(OUTPUT_ENCODING_COLORSPACE))
            .family(Family::Aces)
            .description("The \"Output Color Encoding Specification\" colorspace.");
    if let Some(transform) = node_to_transform(
        graph,
        graph.display_reference(),
        PathDirection::Reverse,
        resolver,
    )? {
        display_reference = display_reference.from_reference(transform);
    }

    let raw = ColorSpace::builder(RAW_COLORSPACE_NAME)
        .family(Family::Utility)
        .description("The utility \"Raw\" colorspace.")
        .is_data(true)
        .build();

    let mut colorspaces = vec![scene_reference, display_reference.build(), raw];
    colorspaces.extend(classified.colorspaces);

    let mut roles = Roles::new();
    roles.define(names::SCENE_LINEAR, WORKING_COLORSPACE_NAME);

    let data = ConfigData {
        description: "The \"Academy Color Encoding System\" reference config.".to_string(),
        roles,
        colorspaces,
        views: organized.views,
        active_displays: organized.displays,
        active_views: organized.active_views,
        file_rules: vec![FileRule::default_rule(WORKING_COLORSPACE_NAME)],
        profile_version: 2,
    };
    Ok((data, classified.transform_index))
}

/// Generates a config from an already built conversion graph.
///
/// The config stays in memory, [`GenerateSettings::output`] is ignored.
pub fn generate_from_graph(
    graph: &ConversionGraph,
    settings: &GenerateSettings,
) -> GenResult<GeneratedConfig> {
    let resolver = BuiltinResolver;
    let (data, transform_index) = assemble(graph, settings, &resolver)?;
    let config = generate_config(&data, None, settings.validate)?;
    Ok(GeneratedConfig {
        config,
        data,
        transform_index,
    })
}

/// Generates the *aces-dev* reference config per the given settings.
///
/// Discovers the CTL transform tree under
/// [`GenerateSettings::transforms_dir`], derives the config and writes it to
/// [`GenerateSettings::output`] when set.
pub fn generate_config_aces(settings: &GenerateSettings) -> GenResult<GeneratedConfig> {
    let paths = discover_ctl_transforms(&settings.transforms_dir)?;
    let transforms = classify_ctl_transforms(&paths, &settings.transforms_dir)?;
    let transforms = filter_settings_patterns(transforms, settings)?;
    let graph = build_conversion_graph(&transforms)?;

    let resolver = BuiltinResolver;
    let (data, transform_index) = assemble(&graph, settings, &resolver)?;
    let config = generate_config(&data, settings.output.as_deref(), settings.validate)?;
    Ok(GeneratedConfig {
        config,
        data,
        transform_index,
    })
}

/// Filters classified transforms against the settings glob patterns.
fn filter_settings_patterns(
    transforms: Vec<CtlTransform>,
    settings: &GenerateSettings,
) -> GenResult<Vec<CtlTransform>> {
    if settings.include.is_empty() && settings.exclude.is_empty() {
        return Ok(transforms);
    }
    let include = compile_patterns(&settings.include)?;
    let exclude = compile_patterns(&settings.exclude)?;

    let before = transforms.len();
    let filtered = filter_ctl_transforms(transforms, |transform| {
        let path = transform.path().to_string_lossy();
        let included =
            include.is_empty() || include.iter().any(|pattern| pattern.matches(&path));
        let excluded = exclude.iter().any(|pattern| pattern.matches(&path));
        included && !excluded
    });
    debug!(
        before,
        after = filtered.len(),
        "Filtered CTL transforms against settings patterns"
    );
    Ok(filtered)
}

fn compile_patterns(patterns: &[String]) -> GenResult<Vec<glob::Pattern>> {
    patterns
        .iter()
        .map(|pattern| Ok(glob::Pattern::new(pattern)?))
        .collect()
}

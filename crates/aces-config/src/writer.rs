//! OCIO flavoured YAML writing.
//!
//! OpenColorIO is particular about the YAML it reads back: tagged nodes for
//! transforms and views, flow maps for single transforms, block literals for
//! multi line descriptions. The writer here produces that dialect directly
//! and deterministically, the same config always writes byte identical
//! output.
//!
//! # Format
//!
//! ```text
//! ocio_profile_version: 2
//!
//! description: The "Academy Color Encoding System" reference config.
//! search_path: ""
//! strictparsing: true
//!
//! roles:
//!   scene_linear: CSC - ACEScg
//!
//! displays:
//!   sRGB:
//!     - !<View> {name: Output, colorspace: Output - sRGB}
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::colorspace::{ColorSpace, Family};
use crate::config::{Config, FileRule};
use crate::error::ConfigResult;
use crate::transform::{GroupTransform, Transform, TransformDirection};

/// Writes a config to a file as OCIO flavoured YAML.
pub fn write_config<P: AsRef<Path>>(path: P, config: &Config) -> ConfigResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    writer.write_all(config_to_yaml(config).as_bytes())?;
    Ok(())
}

/// Renders a config as OCIO flavoured YAML.
pub fn config_to_yaml(config: &Config) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!(
        "ocio_profile_version: {}",
        config.version().as_profile_version()
    ));

    let mut head: Vec<String> = Vec::new();
    if !config.description().is_empty() {
        head.extend(key_scalar_lines(0, "description", config.description()));
    }
    head.push(format!("search_path: {}", scalar(config.search_path())));
    head.push("strictparsing: true".to_string());
    sections.push(head.join("\n"));

    if !config.roles().is_empty() {
        let mut lines = vec!["roles:".to_string()];
        for (role, colorspace) in config.roles().iter() {
            lines.push(format!("  {}: {}", role, scalar(colorspace)));
        }
        sections.push(lines.join("\n"));
    }

    if !config.file_rules().is_empty() {
        let mut lines = vec!["file_rules:".to_string()];
        for rule in config.file_rules() {
            lines.push(format!("  - !<Rule> {{{}}}", rule_entries(rule)));
        }
        sections.push(lines.join("\n"));
    }

    if !config.displays().is_empty() {
        let mut lines = vec!["displays:".to_string()];
        for display in config.displays().displays() {
            lines.push(format!("  {}:", scalar(display.name())));
            for view in display.views() {
                lines.push(format!(
                    "    - !<View> {{name: {}, colorspace: {}}}",
                    scalar(view.name()),
                    scalar(view.colorspace())
                ));
            }
        }
        sections.push(lines.join("\n"));
    }

    if !config.active_displays().is_empty() || !config.active_views().is_empty() {
        let mut lines = Vec::new();
        if !config.active_displays().is_empty() {
            lines.push(format!(
                "active_displays: [{}]",
                flow_list(config.active_displays())
            ));
        }
        if !config.active_views().is_empty() {
            lines.push(format!(
                "active_views: [{}]",
                flow_list(config.active_views())
            ));
        }
        sections.push(lines.join("\n"));
    }

    if !config.colorspaces().is_empty() {
        let mut lines = vec!["colorspaces:".to_string()];
        for (i, colorspace) in config.colorspaces().iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            colorspace_lines(&mut lines, colorspace);
        }
        sections.push(lines.join("\n"));
    }

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

/// Lines of a single `!<ColorSpace>` list entry.
fn colorspace_lines(lines: &mut Vec<String>, colorspace: &ColorSpace) {
    lines.push("  - !<ColorSpace>".to_string());
    lines.push(format!("    name: {}", scalar(colorspace.name())));
    if colorspace.family() != Family::Other {
        lines.push(format!("    family: {}", scalar(colorspace.family().as_str())));
    }
    if !colorspace.description().is_empty() {
        lines.extend(key_scalar_lines(4, "description", colorspace.description()));
    }
    if colorspace.is_data() {
        lines.push("    isdata: true".to_string());
    }
    if let Some(transform) = colorspace.to_reference() {
        transform_key_lines(lines, 4, "to_reference", transform);
    }
    if let Some(transform) = colorspace.from_reference() {
        transform_key_lines(lines, 4, "from_reference", transform);
    }
}

/// Lines for a `key: <transform>` entry.
///
/// Single transforms render as a flow map on the key line, groups as a
/// block with one child per line.
fn transform_key_lines(lines: &mut Vec<String>, indent: usize, key: &str, transform: &Transform) {
    match transform {
        Transform::Group(group) => {
            lines.push(format!("{}{}: !<GroupTransform>", pad(indent), key));
            group_body_lines(lines, indent + 2, group);
        }
        other => lines.push(format!("{}{}: {}", pad(indent), key, flow_transform(other))),
    }
}

/// Lines for the `children:` body of a group transform.
fn group_body_lines(lines: &mut Vec<String>, indent: usize, group: &GroupTransform) {
    lines.push(format!("{}children:", pad(indent)));
    for child in &group.transforms {
        match child {
            Transform::Group(inner) => {
                lines.push(format!("{}- !<GroupTransform>", pad(indent + 2)));
                group_body_lines(lines, indent + 4, inner);
            }
            other => lines.push(format!("{}- {}", pad(indent + 2), flow_transform(other))),
        }
    }
    if group.direction == TransformDirection::Inverse {
        lines.push(format!("{}direction: inverse", pad(indent)));
    }
}

/// A transform as a tagged flow map.
fn flow_transform(transform: &Transform) -> String {
    match transform {
        Transform::Builtin(t) => format!(
            "!<BuiltinTransform> {{style: {}{}}}",
            scalar(&t.style),
            direction_suffix(t.direction)
        ),
        Transform::File(t) => format!(
            "!<FileTransform> {{src: {}{}}}",
            scalar(&t.src),
            direction_suffix(t.direction)
        ),
        Transform::Group(group) => {
            let children: Vec<String> = group.transforms.iter().map(flow_transform).collect();
            format!(
                "!<GroupTransform> {{children: [{}]{}}}",
                children.join(", "),
                direction_suffix(group.direction)
            )
        }
    }
}

fn direction_suffix(direction: TransformDirection) -> &'static str {
    match direction {
        TransformDirection::Forward => "",
        TransformDirection::Inverse => ", direction: inverse",
    }
}

fn pad(indent: usize) -> String {
    " ".repeat(indent)
}

/// Flow map entries of a `!<Rule>` tag.
fn rule_entries(rule: &FileRule) -> String {
    let mut entries = vec![format!("name: {}", scalar(&rule.name))];
    if let Some(pattern) = &rule.pattern {
        entries.push(format!("pattern: {}", scalar(pattern)));
    }
    if let Some(extension) = &rule.extension {
        entries.push(format!("extension: {}", scalar(extension)));
    }
    entries.push(format!("colorspace: {}", scalar(&rule.colorspace)));
    entries.join(", ")
}

/// Items of a flow list.
fn flow_list(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| scalar(v)).collect();
    items.join(", ")
}

/// Lines for a `key: value` pair, switching to a block literal for
/// multi line values.
fn key_scalar_lines(indent: usize, key: &str, value: &str) -> Vec<String> {
    if value.contains('\n') {
        let mut lines = vec![format!("{}{}: |", pad(indent), key)];
        for line in value.lines() {
            if line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("{}{}", pad(indent + 2), line));
            }
        }
        lines
    } else {
        vec![format!("{}{}: {}", pad(indent), key, scalar(value))]
    }
}

/// A scalar value, double quoted when plain YAML would misread it.
fn scalar(value: &str) -> String {
    if needs_quoting(value) {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

fn needs_quoting(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    if value.starts_with(char::is_whitespace) || value.ends_with(char::is_whitespace) {
        return true;
    }
    if value.starts_with(['!', '&', '*', '?', '|', '>', '%', '@', '`', '"', '\'']) {
        return true;
    }
    if value == "-" || value.starts_with("- ") {
        return true;
    }
    if value
        .chars()
        .any(|c| matches!(c, ':' | '#' | '{' | '}' | '[' | ']' | ',' | '\t'))
    {
        return true;
    }
    let lowered = value.to_ascii_lowercase();
    if matches!(
        lowered.as_str(),
        "true" | "false" | "null" | "~" | "yes" | "no" | "on" | "off"
    ) {
        return true;
    }
    value.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{Display, View};

    fn sample_config() -> Config {
        let mut config = Config::new();
        config.set_description("The \"Academy Color Encoding System\" reference config.");
        config.set_role("scene_linear", "CSC - ACEScg");
        config.add_file_rule(FileRule::default_rule("CSC - ACEScg"));

        let mut display = Display::new("sRGB");
        display.add_view(View::new("Output", "Output - sRGB"));
        display.add_view(View::new("Raw", "Utility - Raw"));
        config.displays_mut().add_display(display);
        config.set_active_displays(vec!["sRGB".to_string()]);
        config.set_active_views(vec!["Output".to_string(), "Raw".to_string()]);

        config.add_colorspace(
            ColorSpace::builder("CSC - ACEScg")
                .family(Family::Csc)
                .description("ACES Color Space Conversion - ACEScg to ACES\nACEStransformID: ACEScsc.Academy.ACEScg_to_ACES.a1.0.3")
                .to_reference(Transform::builtin("ACEScg_to_ACES2065-1"))
                .from_reference(Transform::group(vec![
                    Transform::file("ACES2065-1_to_ACEScg"),
                ]))
                .build(),
        );
        config.add_colorspace(
            ColorSpace::builder("Utility - Raw")
                .family(Family::Utility)
                .description("The utility \"Raw\" colorspace.")
                .is_data(true)
                .build(),
        );
        config
    }

    #[test]
    fn test_header_and_sections() {
        let yaml = sample_config().to_yaml();
        assert!(yaml.starts_with("ocio_profile_version: 2\n\n"));
        assert!(yaml.contains(
            "description: The \"Academy Color Encoding System\" reference config.\n"
        ));
        assert!(yaml.contains("search_path: \"\"\n"));
        assert!(yaml.contains("strictparsing: true\n"));
        assert!(yaml.contains("roles:\n  scene_linear: CSC - ACEScg\n"));
        assert!(yaml.contains(
            "file_rules:\n  - !<Rule> {name: Default, colorspace: CSC - ACEScg}\n"
        ));
        assert!(yaml.contains(
            "displays:\n  sRGB:\n    - !<View> {name: Output, colorspace: Output - sRGB}\n    - !<View> {name: Raw, colorspace: Utility - Raw}\n"
        ));
        assert!(yaml.contains("active_displays: [sRGB]\n"));
        assert!(yaml.contains("active_views: [Output, Raw]\n"));
        assert!(yaml.ends_with('\n'));
    }

    #[test]
    fn test_colorspace_blocks() {
        let yaml = sample_config().to_yaml();
        assert!(yaml.contains("colorspaces:\n  - !<ColorSpace>\n    name: CSC - ACEScg\n    family: CSC\n"));
        // Multi line description switches to a block literal.
        assert!(yaml.contains(
            "    description: |\n      ACES Color Space Conversion - ACEScg to ACES\n      ACEStransformID: ACEScsc.Academy.ACEScg_to_ACES.a1.0.3\n"
        ));
        assert!(yaml.contains(
            "    to_reference: !<BuiltinTransform> {style: ACEScg_to_ACES2065-1}\n"
        ));
        assert!(yaml.contains(
            "    from_reference: !<GroupTransform>\n      children:\n        - !<FileTransform> {src: ACES2065-1_to_ACEScg}\n"
        ));
        assert!(yaml.contains("    isdata: true\n"));
        // Blank line between colorspace entries.
        assert!(yaml.contains("}\n\n  - !<ColorSpace>\n    name: Utility - Raw\n"));
    }

    #[test]
    fn test_inverse_direction() {
        let mut config = Config::new();
        config.add_colorspace(
            ColorSpace::builder("Test")
                .to_reference(Transform::builtin("ACEScg_to_ACES2065-1").inverse())
                .build(),
        );
        let yaml = config.to_yaml();
        assert!(yaml.contains(
            "to_reference: !<BuiltinTransform> {style: ACEScg_to_ACES2065-1, direction: inverse}\n"
        ));
    }

    #[test]
    fn test_scalar_quoting() {
        assert_eq!(scalar("CSC - ACEScg"), "CSC - ACEScg");
        assert_eq!(scalar("Rec.709"), "Rec.709");
        assert_eq!(scalar("P3-D60 (48 nits)"), "P3-D60 (48 nits)");
        assert_eq!(scalar(""), "\"\"");
        assert_eq!(scalar("a: b"), "\"a: b\"");
        assert_eq!(scalar("yes"), "\"yes\"");
        assert_eq!(scalar("1.5"), "\"1.5\"");
        assert_eq!(scalar("- entry"), "\"- entry\"");
        assert_eq!(scalar("has \"quotes\" inside"), "has \"quotes\" inside");
        assert_eq!(scalar("!tag"), "\"!tag\"");
    }

    #[test]
    fn test_output_is_deterministic() {
        let first = sample_config().to_yaml();
        let second = sample_config().to_yaml();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.ocio");
        write_config(&path, &sample_config()).expect("write");
        let written = std::fs::read_to_string(&path).expect("read");
        assert_eq!(written, sample_config().to_yaml());
    }
}

//! Config assembly from plain data.

use std::path::Path;

use tracing::{info, warn};

use crate::config::{Config, ConfigVersion};
use crate::data::ConfigData;
use crate::display::View;
use crate::error::{ConfigError, ConfigResult};
use crate::validate::{self, Severity};

/// Assembles a [`Config`] from a [`ConfigData`] record.
///
/// Displays are created in the order they first appear in `data.views`, and
/// views keep their given order within each display. When `validate` is set,
/// warnings are logged and errors abort with
/// [`ConfigError::Validation`]. When `path` is given, the config is written
/// there after validation.
pub fn generate_config(
    data: &ConfigData,
    path: Option<&Path>,
    validate: bool,
) -> ConfigResult<Config> {
    let config = config_from_data(data);

    if validate {
        let issues = validate::check(&config);
        for issue in &issues {
            if issue.severity == Severity::Warning {
                warn!(category = ?issue.category, "{}", issue.message);
            }
        }
        if validate::has_errors(&issues) {
            let details: Vec<&str> = issues
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .map(|i| i.message.as_str())
                .collect();
            return Err(ConfigError::Validation {
                details: details.join("\n"),
            });
        }
    }

    if let Some(path) = path {
        config.to_file(path)?;
        info!(path = %path.display(), "Wrote OpenColorIO config");
    }

    Ok(config)
}

fn config_from_data(data: &ConfigData) -> Config {
    let mut config = Config::new();
    config.set_description(data.description.clone());
    config.set_version(ConfigVersion::from_profile_version(data.profile_version));

    for (role, colorspace) in data.roles.iter() {
        config.set_role(role, colorspace);
    }
    for colorspace in &data.colorspaces {
        config.add_colorspace(colorspace.clone());
    }
    for entry in &data.views {
        config
            .displays_mut()
            .ensure_display(&entry.display)
            .add_view(View::new(&entry.view, &entry.colorspace));
    }
    config.set_active_displays(data.active_displays.clone());
    config.set_active_views(data.active_views.clone());
    for rule in &data.file_rules {
        config.add_file_rule(rule.clone());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorspace::ColorSpace;
    use crate::config::FileRule;
    use crate::data::ViewEntry;

    fn sample_data() -> ConfigData {
        let mut data = ConfigData {
            description: "Test config".to_string(),
            ..ConfigData::default()
        };
        data.roles.define("scene_linear", "CSC - ACEScg");
        data.colorspaces.push(ColorSpace::new("CSC - ACEScg"));
        data.colorspaces.push(ColorSpace::new("Output - sRGB"));
        data.colorspaces.push(ColorSpace::new("Utility - Raw"));
        data.views.push(ViewEntry::new("sRGB", "Output", "Output - sRGB"));
        data.views.push(ViewEntry::new("sRGB", "Raw", "Utility - Raw"));
        data.active_displays.push("sRGB".to_string());
        data.active_views.push("Output".to_string());
        data.active_views.push("Raw".to_string());
        data.file_rules.push(FileRule::default_rule("CSC - ACEScg"));
        data
    }

    #[test]
    fn test_assembles_displays_in_view_order() {
        let mut data = sample_data();
        data.colorspaces.push(ColorSpace::new("Output - Rec. 709"));
        data.views.insert(
            0,
            ViewEntry::new("Rec.709", "Output", "Output - Rec. 709"),
        );
        data.active_displays.push("Rec.709".to_string());
        let config = generate_config(&data, None, true).expect("config");
        let names: Vec<&str> = config
            .displays()
            .displays()
            .iter()
            .map(|d| d.name())
            .collect();
        assert_eq!(names, vec!["Rec.709", "sRGB"]);
    }

    #[test]
    fn test_validation_failure() {
        let mut data = sample_data();
        data.roles.define("color_timing", "CSC - Missing");
        let result = generate_config(&data, None, true);
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_validation_can_be_skipped() {
        let mut data = sample_data();
        data.roles.define("color_timing", "CSC - Missing");
        assert!(generate_config(&data, None, false).is_ok());
    }

    #[test]
    fn test_writes_when_path_given() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.ocio");
        let config = generate_config(&sample_data(), Some(&path), true).expect("config");
        let written = std::fs::read_to_string(&path).expect("read");
        assert_eq!(written, config.to_yaml());
    }

    #[test]
    fn test_version_from_data() {
        let mut data = sample_data();
        data.profile_version = 1;
        let config = generate_config(&data, None, false).expect("config");
        assert_eq!(config.version(), ConfigVersion::V1);
    }
}

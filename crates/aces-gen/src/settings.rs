//! Generation settings.
//!
//! Settings drive [`generate_config_aces`](crate::generate_config_aces) and
//! deserialize from a YAML file:
//!
//! ```yaml
//! transforms_dir: /path/to/aces-dev/transforms/ctl
//! output: config-aces-reference.ocio
//! describe: long_union
//! include:
//!   - "**/csc/**"
//! exclude:
//!   - "**/vendor_supplied/**"
//! ```
//!
//! Every field has a default, unknown fields are rejected.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::classify::DescriptionStyle;
use crate::error::GenResult;

/// Settings for a config generation run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateSettings {
    /// Root directory of the CTL transform tree.
    pub transforms_dir: PathBuf,
    /// Config file to write, generation stays in memory when unset.
    pub output: Option<PathBuf>,
    /// Whether to validate the assembled config.
    pub validate: bool,
    /// Colorspace description style.
    pub describe: DescriptionStyle,
    /// Whether to index the primary CTL transform per colorspace.
    pub additional_data: bool,
    /// Glob patterns CTL transform paths must match, empty matches all.
    pub include: Vec<String>,
    /// Glob patterns excluding CTL transform paths, wins over `include`.
    pub exclude: Vec<String>,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            transforms_dir: PathBuf::new(),
            output: None,
            validate: true,
            describe: DescriptionStyle::default(),
            additional_data: false,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl GenerateSettings {
    /// Reads settings from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GenerateSettings::default();
        assert!(settings.transforms_dir.as_os_str().is_empty());
        assert!(settings.output.is_none());
        assert!(settings.validate);
        assert_eq!(settings.describe, DescriptionStyle::LongUnion);
        assert!(!settings.additional_data);
    }

    #[test]
    fn test_from_yaml() {
        let settings: GenerateSettings = serde_yaml::from_str(
            "transforms_dir: /data/ctl\n\
             output: config.ocio\n\
             validate: false\n\
             describe: short_union\n\
             include:\n\
             \x20 - \"**/csc/**\"\n\
             exclude:\n\
             \x20 - \"**/vendor_supplied/**\"\n",
        )
        .expect("settings parse");
        assert_eq!(settings.transforms_dir, PathBuf::from("/data/ctl"));
        assert_eq!(settings.output, Some(PathBuf::from("config.ocio")));
        assert!(!settings.validate);
        assert_eq!(settings.describe, DescriptionStyle::ShortUnion);
        assert_eq!(settings.include, vec!["**/csc/**"]);
        assert_eq!(settings.exclude, vec!["**/vendor_supplied/**"]);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings: GenerateSettings =
            serde_yaml::from_str("transforms_dir: /data/ctl\n").expect("settings parse");
        assert!(settings.validate);
        assert_eq!(settings.describe, DescriptionStyle::LongUnion);
        assert!(settings.include.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<GenerateSettings, _> =
            serde_yaml::from_str("transform_dir: /data/ctl\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "transforms_dir: /data/ctl").expect("write");
        writeln!(file, "describe: short").expect("write");
        let settings = GenerateSettings::from_file(file.path()).expect("settings");
        assert_eq!(settings.transforms_dir, PathBuf::from("/data/ctl"));
        assert_eq!(settings.describe, DescriptionStyle::Short);
    }

    #[test]
    fn test_missing_file_errors() {
        let result = GenerateSettings::from_file("/no/such/settings.yaml");
        assert!(result.is_err());
    }
}

//! OpenColorIO configuration container.

use std::path::Path;

use crate::colorspace::ColorSpace;
use crate::display::DisplayManager;
use crate::error::ConfigResult;
use crate::role::Roles;
use crate::writer;

/// Config format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigVersion {
    /// OCIO v1.x.
    V1,
    /// OCIO v2.x.
    #[default]
    V2,
}

impl ConfigVersion {
    /// The `ocio_profile_version` value for this version.
    #[inline]
    pub fn as_profile_version(&self) -> u32 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    /// Version from an `ocio_profile_version` value.
    pub fn from_profile_version(version: u32) -> Self {
        if version >= 2 {
            Self::V2
        } else {
            Self::V1
        }
    }
}

/// File rule for automatic color space assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRule {
    /// Rule name.
    pub name: String,
    /// File pattern (glob), absent on the fallback rule.
    pub pattern: Option<String>,
    /// Extension filter, absent on the fallback rule.
    pub extension: Option<String>,
    /// Assigned color space.
    pub colorspace: String,
}

impl FileRule {
    /// The fallback `Default` rule, matching every file.
    pub fn default_rule(colorspace: impl Into<String>) -> Self {
        Self {
            name: "Default".to_string(),
            pattern: None,
            extension: None,
            colorspace: colorspace.into(),
        }
    }
}

/// An OpenColorIO configuration.
///
/// Holds the color spaces, roles, displays and file rules that config
/// generation produces, and writes itself as OCIO flavoured YAML.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Config description.
    description: String,
    /// Config version (1 or 2).
    version: ConfigVersion,
    /// Search path for LUT files.
    search_path: String,
    /// All color spaces.
    colorspaces: Vec<ColorSpace>,
    /// Role mappings.
    roles: Roles,
    /// Display/view configuration.
    displays: DisplayManager,
    /// Active displays (subset to show in UI, first is the default).
    active_displays: Vec<String>,
    /// Active views (subset to show in UI, first is the default).
    active_views: Vec<String>,
    /// File rules for automatic color space detection.
    file_rules: Vec<FileRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self {
            description: String::new(),
            version: ConfigVersion::default(),
            search_path: String::new(),
            colorspaces: Vec::new(),
            roles: Roles::new(),
            displays: DisplayManager::new(),
            active_displays: Vec::new(),
            active_views: Vec::new(),
            file_rules: Vec::new(),
        }
    }

    /// Returns the config description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sets the config description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Returns the config version.
    #[inline]
    pub fn version(&self) -> ConfigVersion {
        self.version
    }

    /// Sets the config version.
    pub fn set_version(&mut self, version: ConfigVersion) {
        self.version = version;
    }

    /// Returns the search path.
    #[inline]
    pub fn search_path(&self) -> &str {
        &self.search_path
    }

    /// Sets the search path.
    pub fn set_search_path(&mut self, search_path: impl Into<String>) {
        self.search_path = search_path.into();
    }

    /// Looks up a color space by name or role.
    pub fn colorspace(&self, name: &str) -> Option<&ColorSpace> {
        // Check roles first
        if let Some(cs_name) = self.roles.get(name) {
            return self.colorspaces.iter().find(|cs| cs.matches_name(cs_name));
        }
        self.colorspaces.iter().find(|cs| cs.matches_name(name))
    }

    /// Returns all color spaces, in config order.
    #[inline]
    pub fn colorspaces(&self) -> &[ColorSpace] {
        &self.colorspaces
    }

    /// Returns color space names.
    pub fn colorspace_names(&self) -> impl Iterator<Item = &str> {
        self.colorspaces.iter().map(|cs| cs.name())
    }

    /// Adds a color space to the config.
    pub fn add_colorspace(&mut self, cs: ColorSpace) {
        self.colorspaces.push(cs);
    }

    /// Returns the role mappings.
    #[inline]
    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    /// Sets a role mapping.
    pub fn set_role(&mut self, role: impl Into<String>, colorspace: impl Into<String>) {
        self.roles.define(role, colorspace);
    }

    /// Returns the display configuration.
    #[inline]
    pub fn displays(&self) -> &DisplayManager {
        &self.displays
    }

    /// Returns the display configuration for mutation.
    #[inline]
    pub fn displays_mut(&mut self) -> &mut DisplayManager {
        &mut self.displays
    }

    /// Returns the active display names.
    #[inline]
    pub fn active_displays(&self) -> &[String] {
        &self.active_displays
    }

    /// Sets the active display names.
    pub fn set_active_displays(&mut self, displays: Vec<String>) {
        self.active_displays = displays;
    }

    /// Returns the active view names.
    #[inline]
    pub fn active_views(&self) -> &[String] {
        &self.active_views
    }

    /// Sets the active view names.
    pub fn set_active_views(&mut self, views: Vec<String>) {
        self.active_views = views;
    }

    /// Returns the file rules.
    #[inline]
    pub fn file_rules(&self) -> &[FileRule] {
        &self.file_rules
    }

    /// Adds a file rule.
    pub fn add_file_rule(&mut self, rule: FileRule) {
        self.file_rules.push(rule);
    }

    /// Writes the config as OCIO flavoured YAML.
    pub fn to_yaml(&self) -> String {
        writer::config_to_yaml(self)
    }

    /// Writes the config to a file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        writer::write_config(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_roundtrip() {
        assert_eq!(ConfigVersion::V2.as_profile_version(), 2);
        assert_eq!(ConfigVersion::from_profile_version(1), ConfigVersion::V1);
        assert_eq!(ConfigVersion::from_profile_version(2), ConfigVersion::V2);
        assert_eq!(ConfigVersion::from_profile_version(3), ConfigVersion::V2);
    }

    #[test]
    fn test_colorspace_lookup_via_role() {
        let mut config = Config::new();
        config.add_colorspace(ColorSpace::new("CSC - ACEScg"));
        config.set_role("scene_linear", "CSC - ACEScg");
        assert!(config.colorspace("CSC - ACEScg").is_some());
        assert!(config.colorspace("scene_linear").is_some());
        assert!(config.colorspace("color_timing").is_none());
    }

    #[test]
    fn test_default_rule() {
        let rule = FileRule::default_rule("CSC - ACEScg");
        assert_eq!(rule.name, "Default");
        assert_eq!(rule.pattern, None);
        assert_eq!(rule.colorspace, "CSC - ACEScg");
    }
}

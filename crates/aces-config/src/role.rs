//! Standard color space roles.
//!
//! Roles provide a consistent way to reference color spaces by their purpose
//! rather than their specific name. This enables config portability.
//!
//! Generated configs define `scene_linear` and leave the rest to the user.

use std::collections::BTreeMap;

/// Standard OCIO role names.
pub mod names {
    /// Scene-referred linear reference (required).
    pub const REFERENCE: &str = "reference";
    /// Default input color space.
    pub const DEFAULT: &str = "default";
    /// Non-color data (normals, masks).
    pub const DATA: &str = "data";
    /// Scene-referred linear working space.
    pub const SCENE_LINEAR: &str = "scene_linear";
    /// Rendering calculations space.
    pub const RENDERING: &str = "rendering";
    /// Compositing log space.
    pub const COMPOSITING_LOG: &str = "compositing_log";
    /// Color grading space.
    pub const COLOR_TIMING: &str = "color_timing";
    /// Texture painting space.
    pub const TEXTURE_PAINT: &str = "texture_paint";
    /// Matte painting space.
    pub const MATTE_PAINT: &str = "matte_paint";
    /// Color picker display space.
    pub const COLOR_PICKING: &str = "color_picking";
}

/// Role to color space mapping.
///
/// The mapping is kept sorted by role name so that iteration, and therefore
/// config output, is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roles {
    /// Role name -> color space name mapping.
    mapping: BTreeMap<String, String>,
}

impl Roles {
    /// Creates an empty roles mapping.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a role mapping.
    ///
    /// # Arguments
    ///
    /// * `role` - Role name (e.g., "scene_linear")
    /// * `colorspace` - Color space name this role maps to
    #[inline]
    pub fn define(&mut self, role: impl Into<String>, colorspace: impl Into<String>) {
        self.mapping.insert(role.into(), colorspace.into());
    }

    /// Gets the color space name for a role.
    ///
    /// Returns `None` if the role is not defined.
    #[inline]
    pub fn get(&self, role: &str) -> Option<&str> {
        self.mapping.get(role).map(String::as_str)
    }

    /// Checks if a role is defined.
    #[inline]
    pub fn contains(&self, role: &str) -> bool {
        self.mapping.contains_key(role)
    }

    /// Returns all defined roles, sorted by role name.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mapping.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of defined roles.
    #[inline]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Checks if no roles are defined.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Gets the scene-linear working color space name.
    #[inline]
    pub fn scene_linear(&self) -> Option<&str> {
        self.get(names::SCENE_LINEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get() {
        let mut roles = Roles::new();
        roles.define(names::SCENE_LINEAR, "CSC - ACEScg");
        assert_eq!(roles.get("scene_linear"), Some("CSC - ACEScg"));
        assert_eq!(roles.scene_linear(), Some("CSC - ACEScg"));
        assert!(roles.contains("scene_linear"));
        assert_eq!(roles.get("color_timing"), None);
    }

    #[test]
    fn test_iter_sorted() {
        let mut roles = Roles::new();
        roles.define("scene_linear", "a");
        roles.define("color_timing", "b");
        roles.define("data", "c");
        let names: Vec<&str> = roles.iter().map(|(role, _)| role).collect();
        assert_eq!(names, vec!["color_timing", "data", "scene_linear"]);
    }
}

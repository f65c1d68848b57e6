//! Plain data form of a configuration.
//!
//! [`ConfigData`] is the record config generation fills in before assembly.
//! It keeps everything as ordered plain values so that generators can build
//! and inspect it without touching [`Config`](crate::Config) internals.

use crate::colorspace::ColorSpace;
use crate::config::FileRule;
use crate::role::Roles;

/// A single display/view/colorspace binding.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEntry {
    /// Display name.
    pub display: String,
    /// View name.
    pub view: String,
    /// Color space the view renders through.
    pub colorspace: String,
}

impl ViewEntry {
    /// Creates a view entry.
    pub fn new(
        display: impl Into<String>,
        view: impl Into<String>,
        colorspace: impl Into<String>,
    ) -> Self {
        Self {
            display: display.into(),
            view: view.into(),
            colorspace: colorspace.into(),
        }
    }
}

/// Data to assemble a [`Config`](crate::Config) from.
///
/// Field order is meaningful: color spaces and views are written in the
/// order they appear here, and the active lists keep their given order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigData {
    /// Config description.
    pub description: String,
    /// Role mappings.
    pub roles: Roles,
    /// Color spaces, in config order.
    pub colorspaces: Vec<ColorSpace>,
    /// Display/view bindings, in config order.
    pub views: Vec<ViewEntry>,
    /// Active display names, first is the default.
    pub active_displays: Vec<String>,
    /// Active view names, first is the default.
    pub active_views: Vec<String>,
    /// File rules.
    pub file_rules: Vec<FileRule>,
    /// OCIO profile version.
    pub profile_version: u32,
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            description: String::new(),
            roles: Roles::new(),
            colorspaces: Vec::new(),
            views: Vec::new(),
            active_displays: Vec::new(),
            active_views: Vec::new(),
            file_rules: Vec::new(),
            profile_version: 2,
        }
    }
}

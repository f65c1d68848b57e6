//! View and display organization.
//!
//! Classification seeds one view per output colorspace. Organization turns
//! those seeds into the final view table of a config:
//!
//! - views sort by display name, then view name
//! - the display list is the sorted set of seeded displays, with the
//!   default display pinned first when present
//! - every display gains a trailing view rendering through the raw
//!   colorspace
//! - the active view list keeps the first occurrence of every view name
//!
//! Both lists feed [`ConfigData`](aces_config::ConfigData) untouched, so
//! organization fully determines the emitted order.

use std::collections::BTreeSet;

use aces_config::ViewEntry;

use crate::beautify::beautify_view_name;

/// Display pinned to the front of the display list when present.
pub const DEFAULT_DISPLAY: &str = "sRGB";

/// The organized view table of a config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizedViews {
    /// Display/view bindings, in emission order.
    pub views: Vec<ViewEntry>,
    /// Display names, default display first.
    pub displays: Vec<String>,
    /// View names, deduplicated in first occurrence order.
    pub active_views: Vec<String>,
}

/// Organizes view seeds into the final view table.
///
/// `raw_colorspace_name` names the data colorspace backing the trailing
/// per display view.
pub fn organize_views(seeds: &[ViewEntry], raw_colorspace_name: &str) -> OrganizedViews {
    let mut views = seeds.to_vec();
    views.sort_by(|a, b| a.display.cmp(&b.display).then_with(|| a.view.cmp(&b.view)));

    let unique: BTreeSet<&str> = views.iter().map(|entry| entry.display.as_str()).collect();
    let mut displays: Vec<String> = unique.into_iter().map(String::from).collect();
    if let Some(position) = displays.iter().position(|name| name == DEFAULT_DISPLAY) {
        let default = displays.remove(position);
        displays.insert(0, default);
    }

    let raw_view = beautify_view_name(raw_colorspace_name);
    for display in &displays {
        views.push(ViewEntry::new(display, &raw_view, raw_colorspace_name));
    }

    let mut active_views: Vec<String> = Vec::new();
    for entry in &views {
        if !active_views.iter().any(|name| name == &entry.view) {
            active_views.push(entry.view.clone());
        }
    }

    OrganizedViews {
        views,
        displays,
        active_views,
    }
}

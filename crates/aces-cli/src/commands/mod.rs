//! CLI command implementations

pub mod generate;
pub mod path;
pub mod transforms;

use std::path::Path;

use aces_ctl::{classify_ctl_transforms, discover_ctl_transforms, CtlTransform};
use anyhow::{Context, Result};
use tracing::debug;

/// Discover and classify the CTL transform tree under `root`.
pub fn load_ctl_transforms(root: &Path) -> Result<Vec<CtlTransform>> {
    let paths = discover_ctl_transforms(root)
        .with_context(|| format!("Failed to discover CTL transforms under: {}", root.display()))?;
    let transforms = classify_ctl_transforms(&paths, root)
        .with_context(|| format!("Failed to classify CTL transforms under: {}", root.display()))?;
    debug!(count = transforms.len(), root = %root.display(), "Loaded CTL transforms");
    Ok(transforms)
}

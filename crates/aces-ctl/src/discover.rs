//! CTL transform tree discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CtlError, CtlResult};
use crate::parse::classify_ctl_transform;
use crate::transform::CtlTransform;

/// Discover every `.ctl` file under a transform tree root.
///
/// Paths are returned sorted so that repeated runs over the same tree
/// produce identical output.
pub fn discover_ctl_transforms(root: &Path) -> CtlResult<Vec<PathBuf>> {
    let pattern = root.join("**").join("*.ctl");
    let mut paths: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(Result::ok)
        .collect();
    paths.sort();
    debug!(root = %root.display(), count = paths.len(), "Discovered CTL transforms");
    Ok(paths)
}

/// Classify a set of discovered CTL files.
///
/// Files outside the recognized family directories are skipped. IO failures
/// are propagated.
pub fn classify_ctl_transforms(paths: &[PathBuf], root: &Path) -> CtlResult<Vec<CtlTransform>> {
    let mut transforms = Vec::with_capacity(paths.len());
    for path in paths {
        match classify_ctl_transform(path, root) {
            Ok(transform) => transforms.push(transform),
            Err(CtlError::UnknownFamily { path }) => {
                debug!(path = %path.display(), "Skipping CTL file outside known family directories");
            }
            Err(error) => return Err(error),
        }
    }
    Ok(transforms)
}

/// Narrow a set of classified transforms with a predicate.
pub fn filter_ctl_transforms<P>(transforms: Vec<CtlTransform>, predicate: P) -> Vec<CtlTransform>
where
    P: Fn(&CtlTransform) -> bool,
{
    transforms.into_iter().filter(|t| predicate(t)).collect()
}

//! Classified CTL transform records.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::family::TransformFamily;
use crate::UNDEFINED_GENUS;

/// A classified *aces-dev* CTL transform.
///
/// Instances are normally produced by
/// [`classify_ctl_transform`](crate::classify_ctl_transform), but can also be
/// built programmatically for synthetic graphs:
///
/// ```
/// use aces_ctl::{CtlTransform, TransformFamily, REFERENCE_COLORSPACE};
///
/// let transform = CtlTransform::builder("ACEScg_to_ACES", TransformFamily::Csc)
///     .source("ACEScg")
///     .target(REFERENCE_COLORSPACE)
///     .build();
/// assert_eq!(transform.conversion(), Some(("ACEScg", "ACES2065-1")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtlTransform {
    path: PathBuf,
    family: TransformFamily,
    genus: String,
    name: String,
    source: Option<String>,
    target: Option<String>,
    aces_transform_id: Option<String>,
    user_name: Option<String>,
    description: String,
}

impl CtlTransform {
    /// Create a transform with the given name and family and empty metadata.
    pub fn new(name: impl Into<String>, family: TransformFamily) -> Self {
        Self {
            path: PathBuf::new(),
            family,
            genus: UNDEFINED_GENUS.to_string(),
            name: name.into(),
            source: None,
            target: None,
            aces_transform_id: None,
            user_name: None,
            description: String::new(),
        }
    }

    /// Create a builder for a transform with the given name and family.
    pub fn builder(name: impl Into<String>, family: TransformFamily) -> CtlTransformBuilder {
        CtlTransformBuilder {
            inner: Self::new(name, family),
        }
    }

    /// Path of the `.ctl` file this transform was classified from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Transform family.
    #[inline]
    pub fn family(&self) -> TransformFamily {
        self.family
    }

    /// Genus, the sub-directory chain between the family directory and the
    /// file itself.
    #[inline]
    pub fn genus(&self) -> &str {
        &self.genus
    }

    /// Parsed transform name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source colorspace of the conversion this transform implements.
    #[inline]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Target colorspace of the conversion this transform implements.
    #[inline]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// `ACEStransformID` header value.
    #[inline]
    pub fn aces_transform_id(&self) -> Option<&str> {
        self.aces_transform_id.as_deref()
    }

    /// `ACESuserName` header value.
    #[inline]
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Leading comment block of the CTL file, stripped of metadata tags.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Source and target colorspaces, when both are known.
    ///
    /// Transforms without a complete conversion pair (library and utility
    /// code) yield `None` and take no part in conversion graphs.
    pub fn conversion(&self) -> Option<(&str, &str)> {
        match (self.source.as_deref(), self.target.as_deref()) {
            (Some(source), Some(target)) => Some((source, target)),
            _ => None,
        }
    }
}

impl std::fmt::Display for CtlTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.family)
    }
}

/// Builder for [`CtlTransform`].
#[derive(Debug, Clone)]
pub struct CtlTransformBuilder {
    inner: CtlTransform,
}

impl CtlTransformBuilder {
    /// Set the originating file path.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.inner.path = path.into();
        self
    }

    /// Set the genus.
    pub fn genus(mut self, genus: impl Into<String>) -> Self {
        self.inner.genus = genus.into();
        self
    }

    /// Set the source colorspace.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.inner.source = Some(source.into());
        self
    }

    /// Set the target colorspace.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.inner.target = Some(target.into());
        self
    }

    /// Set the `ACEStransformID` value.
    pub fn aces_transform_id(mut self, id: impl Into<String>) -> Self {
        self.inner.aces_transform_id = Some(id.into());
        self
    }

    /// Set the `ACESuserName` value.
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.inner.user_name = Some(user_name.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    /// Finish building.
    pub fn build(self) -> CtlTransform {
        self.inner
    }
}

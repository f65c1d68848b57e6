//! Color space definition and properties.
//!
//! A color space here defines:
//! - How to convert to/from the scene-referred reference space
//! - Categorization for UI grouping (family)
//! - Metadata (description, data flag)
//!
//! # Example
//!
//! ```
//! use aces_config::{ColorSpace, Family, Transform};
//!
//! let cs = ColorSpace::builder("CSC - ACEScg")
//!     .family(Family::Csc)
//!     .description("The ACEScg colorspace.")
//!     .to_reference(Transform::builtin("ACEScg_to_ACES2065-1"))
//!     .build();
//!
//! assert_eq!(cs.name(), "CSC - ACEScg");
//! assert_eq!(cs.family(), Family::Csc);
//! ```

use crate::transform::Transform;

/// Color space family/category.
///
/// Groups related color spaces for UI organization. The string form doubles
/// as the name prefix of generated colorspaces, e.g. `CSC - ACEScg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Family {
    /// ACES reference spaces.
    Aces,
    /// Colorspace conversion spaces.
    Csc,
    /// Input/camera spaces.
    Input,
    /// Look spaces.
    Look,
    /// Output/delivery spaces.
    Output,
    /// Utility spaces.
    Utility,
    /// Custom/uncategorized.
    #[default]
    Other,
}

impl Family {
    /// Parses family from config string.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "aces" => Self::Aces,
            "csc" => Self::Csc,
            "input" | "camera" => Self::Input,
            "look" => Self::Look,
            "output" | "delivery" => Self::Output,
            "utility" | "utilities" => Self::Utility,
            _ => Self::Other,
        }
    }

    /// Returns display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aces => "ACES",
            Self::Csc => "CSC",
            Self::Input => "Input",
            Self::Look => "Look",
            Self::Output => "Output",
            Self::Utility => "Utility",
            Self::Other => "",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Color space definition.
///
/// Represents a named color space with transforms to/from reference space.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpace {
    /// Unique name.
    name: String,
    /// Human-readable description.
    description: String,
    /// Family/category.
    family: Family,
    /// Whether this is for non-color data.
    is_data: bool,
    /// Transform from this space to reference.
    to_reference: Option<Transform>,
    /// Transform from reference to this space.
    from_reference: Option<Transform>,
}

impl ColorSpace {
    /// Creates a new color space with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            family: Family::default(),
            is_data: false,
            to_reference: None,
            from_reference: None,
        }
    }

    /// Creates a builder for constructing color spaces.
    #[inline]
    pub fn builder(name: impl Into<String>) -> ColorSpaceBuilder {
        ColorSpaceBuilder::new(name)
    }

    /// Returns the color space name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the family/category.
    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Checks if this is a data (non-color) space.
    #[inline]
    pub fn is_data(&self) -> bool {
        self.is_data
    }

    /// Returns the transform to reference space.
    #[inline]
    pub fn to_reference(&self) -> Option<&Transform> {
        self.to_reference.as_ref()
    }

    /// Returns the transform from reference space.
    #[inline]
    pub fn from_reference(&self) -> Option<&Transform> {
        self.from_reference.as_ref()
    }

    /// Checks if a name matches (case-insensitive).
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Builder for constructing color spaces.
#[derive(Debug)]
pub struct ColorSpaceBuilder {
    inner: ColorSpace,
}

impl ColorSpaceBuilder {
    /// Creates a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: ColorSpace::new(name),
        }
    }

    /// Sets the description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.inner.description = desc.into();
        self
    }

    /// Sets the family.
    pub fn family(mut self, family: Family) -> Self {
        self.inner.family = family;
        self
    }

    /// Marks this as a data (non-color) space.
    pub fn is_data(mut self, is_data: bool) -> Self {
        self.inner.is_data = is_data;
        self
    }

    /// Sets the transform to reference space.
    pub fn to_reference(mut self, transform: Transform) -> Self {
        self.inner.to_reference = Some(transform);
        self
    }

    /// Sets the transform from reference space.
    pub fn from_reference(mut self, transform: Transform) -> Self {
        self.inner.from_reference = Some(transform);
        self
    }

    /// Builds the color space.
    pub fn build(self) -> ColorSpace {
        self.inner
    }
}

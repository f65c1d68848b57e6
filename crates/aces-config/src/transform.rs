//! Transform definitions for colorspace conversions.
//!
//! Config generation only ever emits three transform kinds:
//! - `BuiltinTransform` for conversions OpenColorIO implements natively
//! - `FileTransform` as a named placeholder for conversions it does not
//! - `GroupTransform` to chain several conversions
//!
//! Transforms can be chained via [`GroupTransform`].

/// Transform application direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformDirection {
    /// Forward transform.
    #[default]
    Forward,
    /// Inverse transform.
    Inverse,
}

impl TransformDirection {
    /// Returns the opposite direction.
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }
}

/// Color transform definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Builtin transform by style name (OCIO v2).
    Builtin(BuiltinTransform),

    /// File based transform, used as a named placeholder.
    File(FileTransform),

    /// Group of chained transforms.
    Group(GroupTransform),
}

impl Transform {
    /// Creates a builtin transform.
    pub fn builtin(style: impl Into<String>) -> Self {
        Self::Builtin(BuiltinTransform {
            style: style.into(),
            direction: TransformDirection::Forward,
        })
    }

    /// Creates a file transform.
    pub fn file(src: impl Into<String>) -> Self {
        Self::File(FileTransform {
            src: src.into(),
            direction: TransformDirection::Forward,
        })
    }

    /// Creates a group transform.
    pub fn group(transforms: Vec<Transform>) -> Self {
        Self::Group(GroupTransform {
            transforms,
            direction: TransformDirection::Forward,
        })
    }

    /// Returns the inverse of this transform.
    pub fn inverse(self) -> Self {
        match self {
            Self::Builtin(mut t) => {
                t.direction = t.direction.inverse();
                Self::Builtin(t)
            }
            Self::File(mut t) => {
                t.direction = t.direction.inverse();
                Self::File(t)
            }
            Self::Group(mut t) => {
                t.direction = t.direction.inverse();
                t.transforms.reverse();
                Self::Group(t)
            }
        }
    }
}

/// Builtin transform by style name (OCIO v2).
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltinTransform {
    /// Builtin style name (e.g., "ACEScct_to_ACES2065-1").
    pub style: String,
    /// Direction.
    pub direction: TransformDirection,
}

/// File based transform.
///
/// Generation emits these as placeholders, with the missing builtin style
/// name standing in for the source path.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTransform {
    /// Source file reference.
    pub src: String,
    /// Direction.
    pub direction: TransformDirection,
}

/// Group of chained transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTransform {
    /// Ordered list of transforms.
    pub transforms: Vec<Transform>,
    /// Direction (affects iteration order).
    pub direction: TransformDirection,
}

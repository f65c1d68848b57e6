//! Discovery and classification of *aces-dev* CTL transforms.
//!
//! The `aces-ctl` crate walks an *aces-dev* `transforms/ctl` directory tree,
//! classifies every `.ctl` file it finds and exposes the result as
//! [`CtlTransform`] records:
//!
//! - **Discovery**: [`discover_ctl_transforms`] globs the tree in sorted order
//! - **Classification**: [`classify_ctl_transform`] derives the transform
//!   family, genus, name and conversion endpoints from the file path, and the
//!   ACES metadata from the file header
//! - **Filtering**: [`filter_ctl_transforms`] narrows a discovered set with an
//!   arbitrary predicate
//!
//! # Example
//!
//! ```no_run
//! use aces_ctl::{classify_ctl_transforms, discover_ctl_transforms};
//!
//! # fn main() -> aces_ctl::CtlResult<()> {
//! let root = std::path::Path::new("aces-dev/transforms/ctl");
//! let paths = discover_ctl_transforms(root)?;
//! let transforms = classify_ctl_transforms(&paths, root)?;
//! for transform in &transforms {
//!     println!("{} [{}]", transform.name(), transform.family());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod discover;
mod error;
mod family;
mod parse;
mod transform;

// Re-exports
pub use discover::{classify_ctl_transforms, discover_ctl_transforms, filter_ctl_transforms};
pub use error::{CtlError, CtlResult};
pub use family::TransformFamily;
pub use parse::classify_ctl_transform;
pub use transform::{CtlTransform, CtlTransformBuilder};

/// Name of the scene-referred ACES reference colorspace.
pub const REFERENCE_COLORSPACE: &str = "ACES2065-1";

/// Name of the display-referred output encoding colorspace.
pub const OUTPUT_ENCODING_COLORSPACE: &str = "OCES";

/// Genus assigned to transforms that sit directly in their family directory.
pub const UNDEFINED_GENUS: &str = "undefined";

//! OpenColorIO configuration model and YAML writer.
//!
//! The `aces-config` crate models the subset of an OpenColorIO v2
//! configuration that config generation needs, and writes it as OCIO
//! flavoured YAML:
//!
//! - **Model**: [`Config`], [`ColorSpace`], [`Transform`], [`Display`],
//!   [`Roles`] and [`FileRule`]
//! - **Assembly**: [`generate_config`] turns a plain [`ConfigData`] record
//!   into a validated [`Config`]
//! - **Validation**: [`validate::check`] reports structural issues without
//!   aborting on the first one
//! - **Writing**: [`write_config`] and [`config_to_yaml`] produce
//!   deterministic, byte stable output
//!
//! # Example
//!
//! ```
//! use aces_config::{ColorSpace, ConfigData, generate_config};
//!
//! # fn main() -> aces_config::ConfigResult<()> {
//! let mut data = ConfigData {
//!     description: "Example config".to_string(),
//!     ..ConfigData::default()
//! };
//! data.colorspaces.push(ColorSpace::new("Raw"));
//! let config = generate_config(&data, None, true)?;
//! assert_eq!(config.colorspaces().len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builtins;
mod colorspace;
mod config;
mod data;
mod display;
mod error;
mod generate;
mod role;
mod transform;
pub mod validate;
mod writer;

// Re-exports
pub use builtins::{builtin_transform_styles, is_builtin_style};
pub use colorspace::{ColorSpace, ColorSpaceBuilder, Family};
pub use config::{Config, ConfigVersion, FileRule};
pub use data::{ConfigData, ViewEntry};
pub use display::{Display, DisplayManager, View};
pub use error::{ConfigError, ConfigResult};
pub use generate::generate_config;
pub use role::{names, Roles};
pub use transform::{
    BuiltinTransform, FileTransform, GroupTransform, Transform, TransformDirection,
};
pub use writer::{config_to_yaml, write_config};

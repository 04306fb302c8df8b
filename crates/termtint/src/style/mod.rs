//! Color primitives and named color tables.
//!
//! - [`color`]: [`Rgb`], [`Layer`] and [`ColorSpec`], the values the emitter formats
//! - [`predefined`]: the read-only table of named codes compiled into the crate
//! - [`registry`]: [`CustomColors`], the user-named code registry
//! - [`error`]: [`ColorError`]

mod color;
mod error;
pub mod predefined;
mod registry;

pub use color::{ColorSpec, Layer, Rgb};
pub use error::ColorError;
pub use predefined::{apply_styles, predefined, predefined_names, style_text};
pub use registry::{CustomColors, Resolution};

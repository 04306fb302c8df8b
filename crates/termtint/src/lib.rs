//! # termtint - ANSI Colors, Themes and Custom Styles for Terminal Output
//!
//! `termtint` writes styled text to terminals by emitting ANSI escape
//! sequences into any [`std::io::Write`] sink.
//!
//! ## Core Concepts
//!
//! - [`Emitter`]: writes SGR sequences, gated by a shared enable flag
//! - [`format_escape`]: the pure formatter for 24-bit and 256-color codes
//! - [`CustomColors`]: user-named escape codes
//! - [`ColorMapping`]: per-character, key and value coloring of text
//! - [`ThemeManager`]: named color mappings, one active, saved to and loaded from disk
//! - [`Tint`]: the composition root owning one of each
//!
//! ## Quick Start
//!
//! ```rust
//! use termtint::{Layer, MapTarget, Rgb, Tint};
//!
//! let mut tint = Tint::new();
//!
//! // Extended colors
//! let mut out = Vec::new();
//! tint.emitter().write_rgb(&mut out, Layer::Foreground, Rgb(255, 165, 0)).unwrap();
//! tint.emitter().write_indexed(&mut out, Layer::Background, 34).unwrap();
//! assert_eq!(out, b"\x1b[38;2;255;165;0m\x1b[48;5;34m");
//!
//! // Named colors
//! tint.colors_mut().set_predefined("error", "bold_red").unwrap();
//! out.clear();
//! tint.custom_color(&mut out, "error", "").unwrap();
//! assert_eq!(out, b"\x1b[1;31m");
//!
//! // Themes
//! tint.themes().insert("bracket", "[]", "\x1b[38;5;34m", MapTarget::Chars);
//! assert_eq!(
//!     tint.apply_theme("[x]"),
//!     "\x1b[38;5;34m[\x1b[0mx\x1b[38;5;34m]\x1b[0m"
//! );
//! ```
//!
//! ## Disabling Color
//!
//! Everything that writes escape codes goes through an [`Emitter`]. Disabling
//! it turns every write into a no-op, so output degrades to plain text:
//!
//! ```rust
//! use termtint::{Rgb, Tint};
//!
//! let tint = Tint::with_color(false);
//! assert_eq!(tint.gradient("plain", Rgb(255, 0, 0), Rgb(0, 0, 255)), "plain");
//! ```
//!
//! Theme application has its own switch,
//! [`ThemeManager::disable_colormap`].
//!
//! ## Logging
//!
//! The crate reports through `tracing`. [`log::init_logging`] installs a
//! subscriber printing `[LEVEL] message` lines with colored level labels.

pub mod ansi;
mod error;
pub mod gradient;
pub mod log;
pub mod output;
pub mod style;
pub mod theme;
mod tint;

pub use ansi::{escape_visible, format_escape, rgb_bg_code, rgb_code, Emitter, RESET};
pub use error::{FormatError, ThemeError};
pub use output::{format_to_string, write_formatted, FormatSelector, OutputFormat};
pub use style::{
    apply_styles, predefined, predefined_names, style_text, ColorError, ColorSpec, CustomColors,
    Layer, Resolution, Rgb,
};
pub use theme::{ColorMapping, MapTarget, ThemeManager, DEFAULT_THEME};
pub use tint::Tint;

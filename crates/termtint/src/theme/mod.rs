//! Themes: named color mappings with one active at a time.
//!
//! - [`ColorMapping`]: the character, key and value tables and the `apply` scan
//! - [`ThemeManager`]: owns every theme, tracks the active one, saves and loads
//! - [`file`]: the `char:code` line format used by save and load
//!
//! ```rust
//! use termtint::{MapTarget, ThemeManager};
//!
//! let themes = ThemeManager::new();
//! themes.insert("bracket", "[]", "\x1b[38;5;34m", MapTarget::Chars);
//! assert_eq!(
//!     themes.apply("[x]"),
//!     "\x1b[38;5;34m[\x1b[0mx\x1b[38;5;34m]\x1b[0m"
//! );
//! ```

mod colormap;
pub mod file;
mod manager;

pub use colormap::{ColorMapping, MapTarget};
pub use manager::{ThemeManager, DEFAULT_THEME};

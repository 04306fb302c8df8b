//! User-named colors.
//!
//! [`CustomColors`] maps names chosen by the application ("error", "banner",
//! "muted") to escape codes. Every entry is stored as a plain string:
//!
//! - [`set`](CustomColors::set) stores a literal code
//! - [`set_with`](CustomColors::set_with) runs a writer closure once and stores what it wrote
//! - [`set_rgb`](CustomColors::set_rgb) formats a 24-bit color
//! - [`set_predefined`](CustomColors::set_predefined) copies from the predefined table
//!
//! Re-registering a name overwrites the previous code.
//!
//! The registry has no internal locking. Mutation takes `&mut self`; callers
//! sharing one registry across threads wrap it themselves.
//!
//! ```rust
//! use termtint::{CustomColors, Resolution};
//!
//! let mut colors = CustomColors::new();
//! colors.set("error", "\x1b[38;5;196m");
//!
//! let mut out = Vec::new();
//! assert_eq!(colors.write(&mut out, "error", "").unwrap(), Resolution::Custom);
//! assert_eq!(out, b"\x1b[38;5;196m");
//!
//! out.clear();
//! assert_eq!(colors.write(&mut out, "missing", "").unwrap(), Resolution::Missing);
//! assert!(out.is_empty());
//! ```

use std::collections::HashMap;
use std::io::{self, Write};

use super::color::{ColorSpec, Layer, Rgb};
use super::error::ColorError;
use super::predefined::predefined;
use crate::ansi::{escape_visible, format_escape, Emitter};

/// Which code a [`CustomColors::write`] call used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The registered code for the name.
    Custom,
    /// The caller's fallback code; the name was not registered.
    Fallback,
    /// Neither a registered code nor a fallback was available.
    Missing,
}

/// Registry of user-named escape codes.
#[derive(Debug, Clone, Default)]
pub struct CustomColors {
    emitter: Emitter,
    colors: HashMap<String, String>,
}

impl CustomColors {
    /// Creates an empty registry writing through a fresh, enabled emitter.
    pub fn new() -> Self {
        Self::with_emitter(Emitter::new())
    }

    /// Creates an empty registry writing through `emitter`.
    pub fn with_emitter(emitter: Emitter) -> Self {
        Self {
            emitter,
            colors: HashMap::new(),
        }
    }

    /// Registers `code` under `name`, replacing any previous entry.
    pub fn set(&mut self, name: impl Into<String>, code: impl Into<String>) {
        self.colors.insert(name.into(), code.into());
    }

    /// Registers whatever `write_code` writes.
    ///
    /// The closure runs exactly once, against a scratch buffer, and its output
    /// is stored as a static code. Later lookups never call it again.
    pub fn set_with<F>(&mut self, name: impl Into<String>, write_code: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut scratch: Vec<u8> = Vec::new();
        write_code(&mut scratch)?;
        let code = String::from_utf8(scratch)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.set(name, code);
        Ok(())
    }

    /// Registers a 24-bit color on the given layer.
    pub fn set_rgb(&mut self, name: impl Into<String>, layer: Layer, rgb: Rgb) {
        self.set(name, format_escape(layer, ColorSpec::Rgb(rgb)));
    }

    /// Copies a predefined code under a new name.
    ///
    /// When `predefined_name` is unknown the registry is left untouched.
    pub fn set_predefined(
        &mut self,
        name: impl Into<String>,
        predefined_name: &str,
    ) -> Result<(), ColorError> {
        match predefined(predefined_name) {
            Some(code) => {
                self.set(name, code);
                Ok(())
            }
            None => {
                tracing::warn!(color = %predefined_name, "predefined color not found");
                Err(ColorError::NotFound(predefined_name.to_string()))
            }
        }
    }

    /// Returns the stored code for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Writes the code registered for `name`.
    ///
    /// Falls back to `default_code` when the name is unknown and the fallback
    /// is non-empty. With neither available the miss is reported and nothing
    /// is written.
    pub fn write<W: Write + ?Sized>(
        &self,
        out: &mut W,
        name: &str,
        default_code: &str,
    ) -> io::Result<Resolution> {
        if let Some(code) = self.colors.get(name) {
            self.emitter.write_code(out, code)?;
            return Ok(Resolution::Custom);
        }
        if !default_code.is_empty() {
            self.emitter.write_code(out, default_code)?;
            return Ok(Resolution::Fallback);
        }
        tracing::warn!(error = %ColorError::NotFound(name.to_string()), "custom color lookup failed");
        Ok(Resolution::Missing)
    }

    /// Removes `name`. Unknown names are ignored.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.colors.remove(name)
    }

    /// Registered names, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.colors.keys().cloned().collect();
        names.sort();
        names
    }

    /// Describes one entry with its code made printable.
    pub fn inspect(&self, name: &str) -> String {
        match self.colors.get(name) {
            Some(code) => format!("{}: {}", name, escape_visible(code)),
            None => format!("{} not found in custom colors.", name),
        }
    }

    /// Removes every entry.
    pub fn reset(&mut self) {
        self.colors.clear();
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The emitter used by [`write`](CustomColors::write).
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }
}

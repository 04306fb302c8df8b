//! Color values understood by the escape emitter.
//!
//! Two color forms are supported:
//!
//! - 24-bit true color: [`Rgb`], written as `ESC[38;2;r;g;bm`
//! - 8-bit palette index: `0` through `255`, written as `ESC[38;5;nm`
//!
//! Either form can target the foreground or the background [`Layer`].
//!
//! # Example
//!
//! ```rust
//! use termtint::{ColorSpec, Layer, Rgb};
//!
//! let orange = Rgb::from_hex("#ffa500").unwrap();
//! assert_eq!(orange, Rgb(255, 165, 0));
//!
//! let spec = ColorSpec::from(orange);
//! assert_eq!(termtint::format_escape(Layer::Foreground, spec), "\x1b[38;2;255;165;0m");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::ColorError;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#rrggbb` or `#rgb` (the `#` is optional, digits are case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || ColorError::InvalidHex(s.to_string());

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            // #rgb -> #rrggbb
            3 => {
                let mut c = [0u8; 3];
                for (i, slot) in c.iter_mut().enumerate() {
                    *slot = u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid())? * 17;
                }
                Ok(Rgb(c[0], c[1], c[2]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(Rgb(r, g, b))
            }
            _ => Err(invalid()),
        }
    }

    /// Returns the red, green and blue channels as a tuple.
    pub fn channels(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Which half of the cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Text color (SGR 38).
    Foreground,
    /// Cell background (SGR 48).
    Background,
}

impl Layer {
    /// The SGR selector for extended colors on this layer.
    pub fn sgr(self) -> &'static str {
        match self {
            Layer::Foreground => "38",
            Layer::Background => "48",
        }
    }
}

/// An extended color: either true color or an 8-bit palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// 24-bit color.
    Rgb(Rgb),
    /// 256-color palette index.
    Indexed(u8),
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        ColorSpec::Rgb(rgb)
    }
}

impl From<u8> for ColorSpec {
    fn from(index: u8) -> Self {
        ColorSpec::Indexed(index)
    }
}

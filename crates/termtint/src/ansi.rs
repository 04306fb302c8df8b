//! Escape sequence emission.
//!
//! Everything that reaches the terminal as an SGR sequence is produced here.
//! [`format_escape`] is the single pure formatter for extended colors; the
//! [`Emitter`] writes sequences into any [`std::io::Write`] sink and is gated by
//! an enable flag shared between all clones of the same emitter.
//!
//! While an emitter is disabled its write methods return immediately without
//! touching the sink.
//!
//! ```rust
//! use termtint::{Emitter, Layer, Rgb};
//!
//! let emitter = Emitter::new();
//! let mut out = Vec::new();
//! emitter.write_rgb(&mut out, Layer::Background, Rgb(255, 165, 0)).unwrap();
//! assert_eq!(out, b"\x1b[48;2;255;165;0m");
//!
//! emitter.disable();
//! emitter.write_indexed(&mut out, Layer::Foreground, 34).unwrap();
//! assert_eq!(out, b"\x1b[48;2;255;165;0m");
//! ```

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::style::{ColorSpec, Layer, Rgb};

/// The escape character.
pub const ESC: char = '\x1b';

/// Resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// Formats an extended color as an SGR sequence.
///
/// Channels and palette indices are written as plain decimal without padding:
/// `ESC[38;2;255;165;0m`, `ESC[48;5;34m`.
pub fn format_escape(layer: Layer, spec: ColorSpec) -> String {
    match spec {
        ColorSpec::Rgb(Rgb(r, g, b)) => format!("\x1b[{};2;{};{};{}m", layer.sgr(), r, g, b),
        ColorSpec::Indexed(n) => format!("\x1b[{};5;{}m", layer.sgr(), n),
    }
}

/// Shorthand for a 24-bit foreground sequence.
pub fn rgb_code(rgb: Rgb) -> String {
    format_escape(Layer::Foreground, ColorSpec::Rgb(rgb))
}

/// Shorthand for a 24-bit background sequence.
pub fn rgb_bg_code(rgb: Rgb) -> String {
    format_escape(Layer::Background, ColorSpec::Rgb(rgb))
}

/// Renders a sequence as printable text, ESC becoming the four characters `\033`.
pub fn escape_visible(code: &str) -> String {
    code.replace(ESC, "\\033")
}

/// Writes escape sequences into output sinks.
///
/// Cloning an emitter shares its enable flag, so one [`disable`](Emitter::disable)
/// silences every clone.
#[derive(Debug, Clone)]
pub struct Emitter {
    enabled: Arc<AtomicBool>,
}

impl Emitter {
    /// Creates an enabled emitter.
    pub fn new() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Creates a disabled emitter.
    pub fn disabled() -> Self {
        let emitter = Self::new();
        emitter.disable();
        emitter
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Writes a raw code verbatim.
    pub fn write_code<W: Write + ?Sized>(&self, out: &mut W, code: &str) -> io::Result<()> {
        if !self.is_enabled() || code.is_empty() {
            return Ok(());
        }
        out.write_all(code.as_bytes())
    }

    /// Writes an extended color sequence.
    pub fn write_color<W: Write + ?Sized>(
        &self,
        out: &mut W,
        layer: Layer,
        spec: ColorSpec,
    ) -> io::Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        out.write_all(format_escape(layer, spec).as_bytes())
    }

    /// Writes a 24-bit color sequence.
    pub fn write_rgb<W: Write + ?Sized>(&self, out: &mut W, layer: Layer, rgb: Rgb) -> io::Result<()> {
        self.write_color(out, layer, ColorSpec::Rgb(rgb))
    }

    /// Writes an 8-bit palette color sequence.
    pub fn write_indexed<W: Write + ?Sized>(
        &self,
        out: &mut W,
        layer: Layer,
        index: u8,
    ) -> io::Result<()> {
        self.write_color(out, layer, ColorSpec::Indexed(index))
    }

    /// Writes [`RESET`].
    pub fn write_reset<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.write_code(out, RESET)
    }

    /// Wraps `text` in `code` and a reset, or returns it untouched while disabled.
    pub fn paint(&self, code: &str, text: &str) -> String {
        if !self.is_enabled() || code.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", code, text, RESET)
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

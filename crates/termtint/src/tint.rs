//! The composition root.
//!
//! A [`Tint`] owns one of everything that carries state: the emitter and its
//! enable flag, the theme manager, the custom color registry and the current
//! output format. Applications build one and pass it, or its parts, to the
//! code that renders. Independent instances never share state.
//!
//! ```rust
//! use termtint::{MapTarget, Tint};
//!
//! let mut tint = Tint::new();
//! tint.colors_mut().set("error", "\x1b[38;5;196m");
//! tint.themes().insert("bracket", "[]", "\x1b[38;5;34m", MapTarget::Chars);
//!
//! let mut out = Vec::new();
//! tint.custom_color(&mut out, "error", "").unwrap();
//! assert_eq!(out, b"\x1b[38;5;196m");
//!
//! tint.reset();
//! assert!(tint.colors().is_empty());
//! assert_eq!(tint.themes().apply("[x]"), "[x]");
//! ```

use std::io::{self, Write};

use crate::ansi::Emitter;
use crate::gradient;
use crate::output::FormatSelector;
use crate::style::{apply_styles, CustomColors, Resolution, Rgb};
use crate::theme::ThemeManager;

/// Owns the emitter, themes, custom colors and output format selection.
#[derive(Debug)]
pub struct Tint {
    emitter: Emitter,
    themes: ThemeManager,
    colors: CustomColors,
    formats: FormatSelector,
}

impl Tint {
    /// Creates a root with color enabled, only the default theme and no
    /// custom colors.
    pub fn new() -> Self {
        let emitter = Emitter::new();
        Self {
            colors: CustomColors::with_emitter(emitter.clone()),
            emitter,
            themes: ThemeManager::new(),
            formats: FormatSelector::new(),
        }
    }

    /// Creates a root whose emitter starts in the given state.
    pub fn with_color(enabled: bool) -> Self {
        let tint = Self::new();
        tint.emitter.set_enabled(enabled);
        tint
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    pub fn themes(&self) -> &ThemeManager {
        &self.themes
    }

    pub fn colors(&self) -> &CustomColors {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut CustomColors {
        &mut self.colors
    }

    pub fn formats(&self) -> &FormatSelector {
        &self.formats
    }

    pub fn enable_color(&self) {
        self.emitter.enable();
    }

    pub fn disable_color(&self) {
        self.emitter.disable();
    }

    pub fn is_color_enabled(&self) -> bool {
        self.emitter.is_enabled()
    }

    /// Writes a registered custom color. See [`CustomColors::write`].
    pub fn custom_color<W: Write + ?Sized>(
        &self,
        out: &mut W,
        name: &str,
        default_code: &str,
    ) -> io::Result<Resolution> {
        self.colors.write(out, name, default_code)
    }

    /// Writes predefined styles by name, returning the names not found.
    pub fn apply_styles<W: Write + ?Sized>(
        &self,
        out: &mut W,
        names: &[&str],
    ) -> io::Result<Vec<String>> {
        apply_styles(&self.emitter, out, names)
    }

    /// Colors `text` with the active theme.
    pub fn apply_theme(&self, text: &str) -> String {
        self.themes.apply(text)
    }

    /// A per-character gradient through this root's emitter.
    pub fn gradient(&self, text: &str, start: Rgb, end: Rgb) -> String {
        gradient::gradient(&self.emitter, text, start, end)
    }

    /// Returns every part to its initial state.
    pub fn reset(&mut self) {
        self.emitter.enable();
        self.themes.reset();
        self.colors.reset();
        self.formats.reset();
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::theme::{MapTarget, DEFAULT_THEME};

    #[test]
    fn test_registry_shares_emitter() {
        let mut tint = Tint::new();
        tint.colors_mut().set("x", "\x1b[31m");
        tint.disable_color();

        let mut out = Vec::new();
        assert_eq!(tint.custom_color(&mut out, "x", "").unwrap(), Resolution::Custom);
        assert!(out.is_empty());
    }

    #[test]
    fn test_with_color_disabled() {
        let tint = Tint::with_color(false);
        assert!(!tint.is_color_enabled());
        assert_eq!(tint.gradient("ab", Rgb(0, 0, 0), Rgb(9, 9, 9)), "ab");
    }

    #[test]
    fn test_instances_are_independent() {
        let a = Tint::new();
        let b = Tint::new();
        a.themes().create("only-a").unwrap();
        a.disable_color();
        assert_eq!(b.themes().list(), vec![DEFAULT_THEME.to_string()]);
        assert!(b.is_color_enabled());
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut tint = Tint::new();
        tint.colors_mut().set("x", "\x1b[31m");
        tint.themes().create("t").unwrap();
        tint.themes().set("t").unwrap();
        tint.themes().insert("b", "[", "\x1b[32m", MapTarget::Chars);
        tint.themes().disable_colormap();
        tint.formats().set(OutputFormat::Json);
        tint.disable_color();

        tint.reset();

        assert!(tint.is_color_enabled());
        assert!(tint.colors().is_empty());
        assert_eq!(tint.themes().list(), vec![DEFAULT_THEME.to_string()]);
        assert_eq!(tint.themes().current(), DEFAULT_THEME);
        assert!(tint.themes().is_enabled());
        assert_eq!(tint.formats().get(), OutputFormat::PlainText);
    }

    #[test]
    fn test_apply_styles() {
        let tint = Tint::new();
        let mut out = Vec::new();
        let missing = tint.apply_styles(&mut out, &["bold", "nope"]).unwrap();
        assert_eq!(out, b"\x1b[1m");
        assert_eq!(missing, vec!["nope".to_string()]);
    }
}

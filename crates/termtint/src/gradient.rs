//! Gradients and single-color text helpers.
//!
//! All helpers honor the emitter's enable flag: while it is disabled the text
//! comes back unchanged.

use std::io::{self, Write};

use crate::ansi::{rgb_code, Emitter, RESET};
use crate::style::{Layer, Rgb};

/// Linear interpolation between two colors.
///
/// `ratio` is clamped to `0.0..=1.0`. Channels are truncated toward the
/// start color.
pub fn blend(start: Rgb, end: Rgb, ratio: f32) -> Rgb {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let mix = |a: u8, b: u8| -> u8 {
        let delta = (b as f32 - a as f32) * ratio;
        (a as f32 + delta.trunc()).clamp(0.0, 255.0) as u8
    };
    Rgb(mix(start.0, end.0), mix(start.1, end.1), mix(start.2, end.2))
}

/// Colors each character of `text` along a gradient from `start` to `end`.
///
/// The first character gets `start`, the last gets `end`. A single trailing
/// reset closes the run. One-character text uses `start`.
pub fn gradient(emitter: &Emitter, text: &str, start: Rgb, end: Rgb) -> String {
    if !emitter.is_enabled() || text.is_empty() {
        return text.to_string();
    }
    let count = text.chars().count();
    let mut out = String::with_capacity(text.len() * 20);
    for (i, ch) in text.chars().enumerate() {
        let ratio = if count > 1 {
            i as f32 / (count - 1) as f32
        } else {
            0.0
        };
        out.push_str(&rgb_code(blend(start, end, ratio)));
        out.push(ch);
    }
    out.push_str(RESET);
    out
}

/// Writes [`gradient`] output to `out`.
pub fn write_gradient<W: Write + ?Sized>(
    emitter: &Emitter,
    out: &mut W,
    text: &str,
    start: Rgb,
    end: Rgb,
) -> io::Result<()> {
    out.write_all(gradient(emitter, text, start, end).as_bytes())
}

/// A run of `width` background-colored spaces sweeping from `start` to `end`.
pub fn swatch(emitter: &Emitter, start: Rgb, end: Rgb, width: usize) -> String {
    if !emitter.is_enabled() || width == 0 {
        return String::new();
    }
    let mut out = String::new();
    for i in 0..width {
        let ratio = if width > 1 {
            i as f32 / (width - 1) as f32
        } else {
            0.0
        };
        out.push_str(&crate::ansi::format_escape(
            Layer::Background,
            blend(start, end, ratio).into(),
        ));
        out.push(' ');
    }
    out.push_str(RESET);
    out
}

/// Wraps `text` in a 24-bit foreground color and a reset.
pub fn colorize(emitter: &Emitter, text: &str, color: Rgb) -> String {
    emitter.paint(&rgb_code(color), text)
}

/// Colors every occurrence of `pattern` in `text`.
pub fn highlight(emitter: &Emitter, text: &str, pattern: &str, color: Rgb) -> String {
    if pattern.is_empty() {
        return text.to_string();
    }
    text.replace(pattern, &colorize(emitter, pattern, color))
}

/// Swaps every 24-bit foreground code for `from` with the code for `to`.
pub fn replace_color(text: &str, from: Rgb, to: Rgb) -> String {
    text.replace(&rgb_code(from), &rgb_code(to))
}

/// Named editor palettes, expressed as their base foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Solarized,
    Monokai,
}

impl Palette {
    pub fn base(self) -> Rgb {
        match self {
            Palette::Solarized => Rgb(147, 161, 161),
            Palette::Monokai => Rgb(248, 248, 242),
        }
    }

    /// Writes the palette's base foreground code.
    pub fn write<W: Write + ?Sized>(self, emitter: &Emitter, out: &mut W) -> io::Result<()> {
        emitter.write_rgb(out, Layer::Foreground, self.base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb(255, 0, 0);
    const BLUE: Rgb = Rgb(0, 0, 255);

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(RED, BLUE, 0.0), RED);
        assert_eq!(blend(RED, BLUE, 1.0), BLUE);
        assert_eq!(blend(RED, BLUE, 0.5), Rgb(128, 0, 127));
    }

    #[test]
    fn test_blend_clamps_ratio() {
        assert_eq!(blend(RED, BLUE, -3.0), RED);
        assert_eq!(blend(RED, BLUE, 7.0), BLUE);
        assert_eq!(blend(RED, BLUE, f32::NAN), RED);
    }

    #[test]
    fn test_gradient_three_chars() {
        let out = gradient(&Emitter::new(), "abc", RED, BLUE);
        assert_eq!(
            out,
            "\x1b[38;2;255;0;0ma\x1b[38;2;128;0;127mb\x1b[38;2;0;0;255mc\x1b[0m"
        );
    }

    #[test]
    fn test_gradient_single_char_uses_start() {
        let out = gradient(&Emitter::new(), "x", RED, BLUE);
        assert_eq!(out, "\x1b[38;2;255;0;0mx\x1b[0m");
    }

    #[test]
    fn test_gradient_disabled_and_empty() {
        assert_eq!(gradient(&Emitter::disabled(), "abc", RED, BLUE), "abc");
        assert_eq!(gradient(&Emitter::new(), "", RED, BLUE), "");
    }

    #[test]
    fn test_gradient_counts_chars_not_bytes() {
        let out = gradient(&Emitter::new(), "é→", RED, BLUE);
        assert_eq!(out, "\x1b[38;2;255;0;0mé\x1b[38;2;0;0;255m→\x1b[0m");
    }

    #[test]
    fn test_swatch() {
        let out = swatch(&Emitter::new(), RED, BLUE, 2);
        assert_eq!(out, "\x1b[48;2;255;0;0m \x1b[48;2;0;0;255m \x1b[0m");
        assert_eq!(swatch(&Emitter::disabled(), RED, BLUE, 2), "");
    }

    #[test]
    fn test_colorize() {
        assert_eq!(
            colorize(&Emitter::new(), "hi", Rgb(1, 2, 3)),
            "\x1b[38;2;1;2;3mhi\x1b[0m"
        );
        assert_eq!(colorize(&Emitter::disabled(), "hi", Rgb(1, 2, 3)), "hi");
    }

    #[test]
    fn test_highlight_every_occurrence() {
        let out = highlight(&Emitter::new(), "ab ab", "ab", Rgb(0, 255, 0));
        let painted = "\x1b[38;2;0;255;0mab\x1b[0m";
        assert_eq!(out, format!("{painted} {painted}"));
        assert_eq!(highlight(&Emitter::new(), "ab", "", RED), "ab");
    }

    #[test]
    fn test_replace_color() {
        let text = format!("{}x{}y", rgb_code(RED), rgb_code(RED));
        let swapped = replace_color(&text, RED, BLUE);
        assert_eq!(swapped, format!("{}x{}y", rgb_code(BLUE), rgb_code(BLUE)));
    }

    #[test]
    fn test_palette() {
        let mut out = Vec::new();
        Palette::Monokai.write(&Emitter::new(), &mut out).unwrap();
        assert_eq!(out, b"\x1b[38;2;248;248;242m");
    }
}

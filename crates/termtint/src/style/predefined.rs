//! The compiled-in table of named colors and text attributes.
//!
//! The table is built once on first use and never changes afterwards. It is
//! the source for [`CustomColors::set_predefined`](crate::CustomColors::set_predefined)
//! and for [`apply_styles`].

use std::collections::HashMap;
use std::io::{self, Write};

use once_cell::sync::Lazy;

use crate::ansi::{Emitter, RESET};

const PREDEFINED: &[(&str, &str)] = &[
    // Basic foreground colors
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),

    // Basic background colors
    ("bg_black", "\x1b[40m"),
    ("bg_red", "\x1b[41m"),
    ("bg_green", "\x1b[42m"),
    ("bg_yellow", "\x1b[43m"),
    ("bg_blue", "\x1b[44m"),
    ("bg_magenta", "\x1b[45m"),
    ("bg_cyan", "\x1b[46m"),
    ("bg_white", "\x1b[47m"),

    // Reset
    ("reset", "\x1b[0m"),

    // Text attributes
    ("bold", "\x1b[1m"),
    ("faint", "\x1b[2m"),
    ("italic", "\x1b[3m"),
    ("underline", "\x1b[4m"),
    ("blink_slow", "\x1b[5m"),
    ("blink_rapid", "\x1b[6m"),
    ("reverse", "\x1b[7m"),
    ("hidden", "\x1b[8m"),
    ("strikethrough", "\x1b[9m"),
    ("default_foreground", "\x1b[39m"),
    ("default_background", "\x1b[49m"),
    ("fullreset", "\x1b[0m\x1b[39m\x1b[49m"),

    // Font selection and attribute cancels
    ("primary_font", "\x1b[10m"),
    ("alternate_font_1", "\x1b[11m"),
    ("alternate_font_2", "\x1b[12m"),
    ("alternate_font_3", "\x1b[13m"),
    ("alternate_font_4", "\x1b[14m"),
    ("alternate_font_5", "\x1b[15m"),
    ("alternate_font_6", "\x1b[16m"),
    ("alternate_font_7", "\x1b[17m"),
    ("alternate_font_8", "\x1b[18m"),
    ("fraktur", "\x1b[20m"),
    ("doubly_underline", "\x1b[21m"),
    ("normal_intensity", "\x1b[22m"),
    ("no_italic", "\x1b[23m"),
    ("no_underline", "\x1b[24m"),
    ("no_blink", "\x1b[25m"),
    ("reserved_1", "\x1b[26m"),
    ("no_reverse", "\x1b[27m"),
    ("reveal", "\x1b[28m"),
    ("no_strikethrough", "\x1b[29m"),

    // Dim ("light") foreground variants
    ("light_black", "\x1b[2;30m"),
    ("light_red", "\x1b[2;31m"),
    ("light_green", "\x1b[2;32m"),
    ("light_yellow", "\x1b[2;33m"),
    ("light_blue", "\x1b[2;34m"),
    ("light_magenta", "\x1b[2;35m"),
    ("light_cyan", "\x1b[2;36m"),
    ("light_white", "\x1b[2;37m"),

    // Bold foreground variants
    ("bold_black", "\x1b[1;30m"),
    ("bold_red", "\x1b[1;31m"),
    ("bold_green", "\x1b[1;32m"),
    ("bold_yellow", "\x1b[1;33m"),
    ("bold_blue", "\x1b[1;34m"),
    ("bold_magenta", "\x1b[1;35m"),
    ("bold_cyan", "\x1b[1;36m"),
    ("bold_white", "\x1b[1;37m"),

    // Bright foreground colors
    ("bright_black", "\x1b[90m"),
    ("bright_red", "\x1b[91m"),
    ("bright_green", "\x1b[92m"),
    ("bright_yellow", "\x1b[93m"),
    ("bright_blue", "\x1b[94m"),
    ("bright_magenta", "\x1b[95m"),
    ("bright_cyan", "\x1b[96m"),
    ("bright_white", "\x1b[97m"),

    // Dim background variants
    ("bg_light_black", "\x1b[2;40m"),
    ("bg_light_red", "\x1b[2;41m"),
    ("bg_light_green", "\x1b[2;42m"),
    ("bg_light_yellow", "\x1b[2;43m"),
    ("bg_light_blue", "\x1b[2;44m"),
    ("bg_light_magenta", "\x1b[2;45m"),
    ("bg_light_cyan", "\x1b[2;46m"),
    ("bg_light_white", "\x1b[2;47m"),

    // Bright background colors
    ("bg_bright_black", "\x1b[100m"),
    ("bg_bright_red", "\x1b[101m"),
    ("bg_bright_green", "\x1b[102m"),
    ("bg_bright_yellow", "\x1b[103m"),
    ("bg_bright_blue", "\x1b[104m"),
    ("bg_bright_magenta", "\x1b[105m"),
    ("bg_bright_cyan", "\x1b[106m"),
    ("bg_bright_white", "\x1b[107m"),

    // Named 256-color foregrounds
    ("amethyst", "\x1b[38;5;92m"),
    ("amber", "\x1b[38;5;214m"),
    ("apricot", "\x1b[38;5;215m"),
    ("aqua", "\x1b[38;5;51m"),
    ("azure", "\x1b[38;5;75m"),
    ("beige", "\x1b[38;5;230m"),
    ("brown", "\x1b[38;5;94m"),
    ("charcoal", "\x1b[38;5;240m"),
    ("coral", "\x1b[38;5;203m"),
    ("crimson", "\x1b[38;5;197m"),
    ("emerald", "\x1b[38;5;46m"),
    ("gold", "\x1b[38;5;220m"),
    ("indigo", "\x1b[38;5;54m"),
    ("ivory", "\x1b[38;5;230m"),
    ("jade", "\x1b[38;5;35m"),
    ("khaki", "\x1b[38;5;228m"),
    ("lavender", "\x1b[38;5;183m"),
    ("lime", "\x1b[38;5;10m"),
    ("maroon", "\x1b[38;5;88m"),
    ("mint", "\x1b[38;5;48m"),
    ("navy", "\x1b[38;5;17m"),
    ("olive", "\x1b[38;5;100m"),
    ("onyx", "\x1b[38;5;236m"),
    ("orange", "\x1b[38;5;214m"),
    ("peach", "\x1b[38;5;217m"),
    ("pearl", "\x1b[38;5;231m"),
    ("pink", "\x1b[38;5;13m"),
    ("plum", "\x1b[38;5;176m"),
    ("purple", "\x1b[38;5;93m"),
    ("rose", "\x1b[38;5;211m"),
    ("rose_gold", "\x1b[38;5;223m"),
    ("ruby", "\x1b[38;5;196m"),
    ("salmon", "\x1b[38;5;209m"),
    ("sapphire", "\x1b[38;5;21m"),
    ("silver", "\x1b[38;5;7m"),
    ("teal", "\x1b[38;5;14m"),
    ("topaz", "\x1b[38;5;178m"),
    ("turquoise", "\x1b[38;5;45m"),
    ("violet", "\x1b[38;5;177m"),

    // Named 256-color backgrounds
    ("bg_amethyst", "\x1b[48;5;92m"),
    ("bg_amber", "\x1b[48;5;214m"),
    ("bg_apricot", "\x1b[48;5;215m"),
    ("bg_aqua", "\x1b[48;5;51m"),
    ("bg_azure", "\x1b[48;5;75m"),
    ("bg_beige", "\x1b[48;5;230m"),
    ("bg_brown", "\x1b[48;5;94m"),
    ("bg_charcoal", "\x1b[48;5;240m"),
    ("bg_coral", "\x1b[48;5;203m"),
    ("bg_crimson", "\x1b[48;5;197m"),
    ("bg_emerald", "\x1b[48;5;46m"),
    ("bg_gold", "\x1b[48;5;220m"),
    ("bg_indigo", "\x1b[48;5;54m"),
    ("bg_ivory", "\x1b[48;5;230m"),
    ("bg_jade", "\x1b[48;5;35m"),
    ("bg_khaki", "\x1b[48;5;228m"),
    ("bg_lavender", "\x1b[48;5;183m"),
    ("bg_lime", "\x1b[48;5;10m"),
    ("bg_maroon", "\x1b[48;5;88m"),
    ("bg_mint", "\x1b[48;5;48m"),
    ("bg_navy", "\x1b[48;5;17m"),
    ("bg_olive", "\x1b[48;5;100m"),
    ("bg_onyx", "\x1b[48;5;236m"),
    ("bg_orange", "\x1b[48;5;214m"),
    ("bg_peach", "\x1b[48;5;217m"),
    ("bg_pearl", "\x1b[48;5;231m"),
    ("bg_pink", "\x1b[48;5;13m"),
    ("bg_plum", "\x1b[48;5;176m"),
    ("bg_purple", "\x1b[48;5;93m"),
    ("bg_rose", "\x1b[48;5;211m"),
    ("bg_rose_gold", "\x1b[48;5;223m"),
    ("bg_ruby", "\x1b[48;5;196m"),
    ("bg_salmon", "\x1b[48;5;209m"),
    ("bg_sapphire", "\x1b[48;5;21m"),
    ("bg_silver", "\x1b[48;5;7m"),
    ("bg_teal", "\x1b[48;5;14m"),
    ("bg_topaz", "\x1b[48;5;178m"),
    ("bg_turquoise", "\x1b[48;5;45m"),
    ("bg_violet", "\x1b[48;5;177m"),
    ("bg_reset", "\x1b[49m"),
];

static TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PREDEFINED.iter().copied().collect());

/// Looks up a predefined code by name.
pub fn predefined(name: &str) -> Option<&'static str> {
    TABLE.get(name).copied()
}

/// All predefined names, in table order.
pub fn predefined_names() -> impl Iterator<Item = &'static str> {
    PREDEFINED.iter().map(|(name, _)| *name)
}

/// All predefined `(name, code)` pairs, in table order.
pub fn predefined_entries() -> &'static [(&'static str, &'static str)] {
    PREDEFINED
}

/// Emits each named predefined style in order.
///
/// Unknown names are reported and skipped. Returns the names that were not
/// found so callers can surface them.
pub fn apply_styles<W: Write + ?Sized>(
    emitter: &Emitter,
    out: &mut W,
    names: &[&str],
) -> io::Result<Vec<String>> {
    let mut missing = Vec::new();
    if !emitter.is_enabled() {
        return Ok(missing);
    }
    for name in names {
        match predefined(name) {
            Some(code) => emitter.write_code(out, code)?,
            None => {
                tracing::warn!(style = %name, "style not found");
                missing.push(name.to_string());
            }
        }
    }
    Ok(missing)
}

/// Writes `text` wrapped in the named styles and a trailing reset.
pub fn style_text<W: Write + ?Sized>(
    emitter: &Emitter,
    out: &mut W,
    text: &str,
    names: &[&str],
) -> io::Result<Vec<String>> {
    let missing = apply_styles(emitter, out, names)?;
    out.write_all(text.as_bytes())?;
    emitter.write_code(out, RESET)?;
    Ok(missing)
}

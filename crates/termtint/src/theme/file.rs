//! The line-oriented theme file format.
//!
//! One character mapping per line, newline-terminated:
//!
//! ```text
//! [:\x1b[38;5;34m
//! ]:\x1b[38;5;34m
//! ::\x1b[1m
//! ```
//!
//! The first character of a line is the mapped character. The color code is
//! everything after the first `:` that follows it, so a line for `:` itself
//! reads `::<code>`. There is no header and no escaping; codes containing `:`
//! are not representable. Only the character table of a theme is persisted.

use std::io::{self, BufRead, Write};

use super::colormap::ColorMapping;

/// Splits one line into its character and code.
///
/// Returns `None` for empty lines and lines without a separator.
pub fn parse_line(line: &str) -> Option<(char, &str)> {
    let mut chars = line.chars();
    let ch = chars.next()?;
    let rest = chars.as_str();
    let sep = rest.find(':')?;
    Some((ch, &rest[sep + 1..]))
}

/// Renders one mapping as a line, without the newline.
pub fn format_line(ch: char, code: &str) -> String {
    format!("{}:{}", ch, code)
}

/// Writes the character table of `mapping`, sorted by character.
pub fn write_mapping<W: Write + ?Sized>(out: &mut W, mapping: &ColorMapping) -> io::Result<()> {
    let mut entries: Vec<(&char, &String)> = mapping.chars().iter().collect();
    entries.sort();
    for (ch, code) in entries {
        writeln!(out, "{}", format_line(*ch, code))?;
    }
    Ok(())
}

/// Reads every well-formed line from `reader`.
///
/// Empty lines are skipped silently. Lines that are not UTF-8 or have no
/// separator are reported and skipped. Only a failing reader is an error.
pub fn read_mappings<R: BufRead>(reader: R) -> io::Result<Vec<(char, String)>> {
    let mut mappings = Vec::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let bytes = line?;
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);
        if bytes.is_empty() {
            continue;
        }
        let Ok(line) = std::str::from_utf8(bytes) else {
            tracing::warn!(line = index + 1, "skipping theme line that is not valid UTF-8");
            continue;
        };
        match parse_line(line) {
            Some((ch, code)) => mappings.push((ch, code.to_string())),
            None => tracing::warn!(line = index + 1, "skipping malformed theme line"),
        }
    }
    Ok(mappings)
}

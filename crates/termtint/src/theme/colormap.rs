//! Per-character, key and value coloring.
//!
//! A [`ColorMapping`] holds three independent tables:
//!
//! - characters, for punctuation and structural symbols (`[`, `]`, `{`, `:`)
//! - keys, for the text before the first `:`
//! - values, for the text after it
//!
//! [`ColorMapping::apply`] walks the text one character at a time. Scanning
//! starts in key mode and switches to value mode at the first `:` for the rest
//! of the text. Each character is looked up in the character table first, and
//! otherwise as a one-character string in the key or value table. A matched
//! character is written as `code + char + RESET`; anything else passes through.
//!
//! Lookups in the key and value tables are always one character long, so an
//! entry whose name has more than one character never matches during `apply`.
//!
//! ```rust
//! use termtint::{ColorMapping, MapTarget};
//!
//! let mut map = ColorMapping::new();
//! map.insert("bracket", "[]", "\x1b[38;5;34m", MapTarget::Chars);
//! assert_eq!(map.apply("[x]"), "\x1b[38;5;34m[\x1b[0mx\x1b[38;5;34m]\x1b[0m");
//! ```

use std::collections::HashMap;

use crate::ansi::RESET;

/// Which table an [`insert`](ColorMapping::insert) writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapTarget {
    /// Every character of `characters` is bound to the code.
    #[default]
    Chars,
    /// `name` is bound to the code in the key table.
    Key,
    /// `name` is bound to the code in the value table.
    Value,
}

/// Character, key and value color tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMapping {
    chars: HashMap<char, String>,
    keys: HashMap<String, String>,
    values: HashMap<String, String>,
}

impl ColorMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a code in the table selected by `target`.
    ///
    /// For [`MapTarget::Chars`] each character of `characters` gets the code
    /// and `name` is ignored. For [`MapTarget::Key`] and [`MapTarget::Value`]
    /// the entry is stored under `name` and `characters` is ignored.
    /// Existing entries are overwritten.
    pub fn insert(&mut self, name: &str, characters: &str, code: &str, target: MapTarget) {
        match target {
            MapTarget::Chars => {
                for ch in characters.chars() {
                    self.chars.insert(ch, code.to_string());
                }
            }
            MapTarget::Key => {
                self.keys.insert(name.to_string(), code.to_string());
            }
            MapTarget::Value => {
                self.values.insert(name.to_string(), code.to_string());
            }
        }
    }

    /// Rebinds every character of `characters` to `code`.
    pub fn replace(&mut self, characters: &str, code: &str) {
        self.insert("", characters, code, MapTarget::Chars);
    }

    /// Removes every character of `characters` from the character table.
    pub fn erase(&mut self, characters: &str) {
        for ch in characters.chars() {
            self.chars.remove(&ch);
        }
    }

    /// Returns `text` with codes interleaved around mapped characters.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut in_key = true;
        let mut buf = [0u8; 4];

        for ch in text.chars() {
            if ch == ':' {
                in_key = false;
            }
            let single: &str = ch.encode_utf8(&mut buf);
            let code = match self.chars.get(&ch) {
                Some(code) => Some(code),
                None if in_key => self.keys.get(single),
                None => self.values.get(single),
            };
            match code {
                Some(code) => {
                    out.push_str(code);
                    out.push(ch);
                    out.push_str(RESET);
                }
                None => out.push(ch),
            }
        }
        out
    }

    /// The code bound to a character.
    pub fn inspect_color(&self, ch: char) -> Option<&str> {
        self.chars.get(&ch).map(String::as_str)
    }

    /// The code bound to a key name.
    pub fn inspect_key_color(&self, key: &str) -> Option<&str> {
        self.keys.get(key).map(String::as_str)
    }

    /// The code bound to a value name.
    pub fn inspect_value_color(&self, value: &str) -> Option<&str> {
        self.values.get(value).map(String::as_str)
    }

    pub fn chars(&self) -> &HashMap<char, String> {
        &self.chars
    }

    pub fn keys(&self) -> &HashMap<String, String> {
        &self.keys
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// True when all three tables are empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty() && self.keys.is_empty() && self.values.is_empty()
    }
}

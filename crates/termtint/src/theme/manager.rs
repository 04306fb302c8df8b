use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use super::colormap::{ColorMapping, MapTarget};
use super::file::{parse_line, read_mappings, write_mapping};
use crate::ansi::escape_visible;
use crate::error::ThemeError;

/// Name of the theme every manager starts with.
pub const DEFAULT_THEME: &str = "default";

const EDIT_SOURCE: &str = "<interactive input>";

#[derive(Debug)]
struct State {
    themes: HashMap<String, ColorMapping>,
    current: String,
    enabled: bool,
}

impl State {
    fn initial() -> Self {
        let mut themes = HashMap::new();
        themes.insert(DEFAULT_THEME.to_string(), ColorMapping::new());
        Self {
            themes,
            current: DEFAULT_THEME.to_string(),
            enabled: true,
        }
    }

    fn current_mut(&mut self) -> &mut ColorMapping {
        self.themes.entry(self.current.clone()).or_default()
    }

    fn current(&self) -> Option<&ColorMapping> {
        self.themes.get(&self.current)
    }
}

/// Named themes with one active at a time.
///
/// The manager always holds a theme named [`DEFAULT_THEME`]. Themes are
/// created explicitly and live as long as the manager. The active theme is
/// tracked by name, so switching can never leave it pointing at a missing
/// entry.
///
/// All methods take `&self`. Internal state sits behind a mutex held only for
/// the duration of each read or mutation; file and stream I/O happen outside
/// it.
///
/// # Example
///
/// ```rust
/// use termtint::{MapTarget, ThemeManager};
///
/// let themes = ThemeManager::new();
/// themes.create("json").unwrap();
/// themes.set("json").unwrap();
/// themes.insert("braces", "{}", "\x1b[33m", MapTarget::Chars);
///
/// assert_eq!(themes.apply("{}"), "\x1b[33m{\x1b[0m\x1b[33m}\x1b[0m");
///
/// themes.disable_colormap();
/// assert_eq!(themes.apply("{}"), "{}");
/// ```
#[derive(Debug)]
pub struct ThemeManager {
    state: Mutex<State>,
}

impl ThemeManager {
    /// Creates a manager holding only the default theme, which is active.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::initial()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers an empty theme.
    pub fn create(&self, name: &str) -> Result<(), ThemeError> {
        if name.is_empty() {
            tracing::error!("theme names must not be empty");
            return Err(ThemeError::InvalidName(name.to_string()));
        }
        let mut state = self.lock();
        if state.themes.contains_key(name) {
            tracing::error!(theme = %name, "theme already exists");
            return Err(ThemeError::AlreadyExists(name.to_string()));
        }
        state.themes.insert(name.to_string(), ColorMapping::new());
        tracing::info!(theme = %name, "created theme");
        Ok(())
    }

    /// Makes `name` the active theme.
    ///
    /// On failure the active theme is unchanged.
    pub fn set(&self, name: &str) -> Result<(), ThemeError> {
        let mut state = self.lock();
        if !state.themes.contains_key(name) {
            tracing::error!(theme = %name, "theme does not exist");
            return Err(ThemeError::NotFound(name.to_string()));
        }
        state.current = name.to_string();
        tracing::info!(theme = %name, "set current theme");
        Ok(())
    }

    /// Makes the default theme active.
    pub fn set_default(&self) {
        self.lock().current = DEFAULT_THEME.to_string();
        tracing::info!("set current theme to default");
    }

    /// Name of the active theme.
    pub fn current(&self) -> String {
        self.lock().current.clone()
    }

    /// Binds a code in the active theme. See [`ColorMapping::insert`].
    pub fn insert(&self, name: &str, characters: &str, code: &str, target: MapTarget) {
        let mut state = self.lock();
        state.current_mut().insert(name, characters, code, target);
        tracing::info!(mapping = %name, theme = %state.current, "inserted color mapping");
    }

    /// Inserts each `(name, code)` pair into the active theme, using the name
    /// as the characters too.
    pub fn batch_insert(&self, mappings: &[(&str, &str)], target: MapTarget) {
        let mut state = self.lock();
        let theme = state.current_mut();
        for (name, code) in mappings {
            theme.insert(name, name, code, target);
        }
        tracing::info!(count = mappings.len(), theme = %state.current, "inserted color mappings");
    }

    /// Rebinds characters in the active theme.
    pub fn replace(&self, characters: &str, code: &str) {
        let mut state = self.lock();
        state.current_mut().replace(characters, code);
        tracing::info!(theme = %state.current, "replaced color mapping");
    }

    /// Removes characters from the active theme.
    pub fn erase(&self, characters: &str) {
        let mut state = self.lock();
        state.current_mut().erase(characters);
        tracing::info!(theme = %state.current, "erased color mapping");
    }

    /// Colors `text` with the active theme, or returns it unchanged while the
    /// colormap is disabled.
    pub fn apply(&self, text: &str) -> String {
        let state = self.lock();
        if !state.enabled {
            return text.to_string();
        }
        match state.current() {
            Some(theme) => theme.apply(text),
            None => text.to_string(),
        }
    }

    /// The active theme's character table.
    pub fn inspect(&self) -> HashMap<char, String> {
        self.lock()
            .current()
            .map(|theme| theme.chars().clone())
            .unwrap_or_default()
    }

    pub fn inspect_color(&self, ch: char) -> Option<String> {
        let state = self.lock();
        state.current()?.inspect_color(ch).map(str::to_string)
    }

    pub fn inspect_key_color(&self, key: &str) -> Option<String> {
        let state = self.lock();
        state.current()?.inspect_key_color(key).map(str::to_string)
    }

    pub fn inspect_value_color(&self, value: &str) -> Option<String> {
        let state = self.lock();
        state.current()?.inspect_value_color(value).map(str::to_string)
    }

    /// A copy of the named theme.
    pub fn theme(&self, name: &str) -> Option<ColorMapping> {
        self.lock().themes.get(name).cloned()
    }

    /// Names of all themes, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().themes.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn enable_colormap(&self) {
        self.lock().enabled = true;
        tracing::info!("enabled colormap");
    }

    pub fn disable_colormap(&self) {
        self.lock().enabled = false;
        tracing::info!("disabled colormap");
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    /// Writes the character table of `name` to `path`.
    ///
    /// Key and value tables are not persisted.
    pub fn save(&self, name: &str, path: impl AsRef<Path>) -> Result<(), ThemeError> {
        let path = path.as_ref();
        let Some(theme) = self.theme(name) else {
            tracing::error!(theme = %name, "theme does not exist");
            return Err(ThemeError::NotFound(name.to_string()));
        };

        let io_err = |e: io::Error| {
            tracing::error!(path = %path.display(), error = %e, "failed to save theme");
            ThemeError::io(path.display().to_string(), e)
        };
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        write_mapping(&mut writer, &theme).map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        tracing::info!(theme = %name, path = %path.display(), "saved theme");
        Ok(())
    }

    /// Creates theme `name` from the file at `path`.
    ///
    /// The whole file is read before the theme is created, so a read failure
    /// leaves no theme behind. Loading into an existing name fails with
    /// [`ThemeError::AlreadyExists`]. Malformed lines are reported and skipped.
    pub fn load(&self, name: &str, path: impl AsRef<Path>) -> Result<(), ThemeError> {
        let path = path.as_ref();
        let io_err = |e: io::Error| {
            tracing::error!(path = %path.display(), error = %e, "failed to load theme");
            ThemeError::io(path.display().to_string(), e)
        };
        let file = File::open(path).map_err(io_err)?;
        let mappings = read_mappings(BufReader::new(file)).map_err(io_err)?;
        self.create(name)?;

        let mut state = self.lock();
        let theme = state.themes.entry(name.to_string()).or_default();
        for (ch, code) in &mappings {
            let key = ch.to_string();
            theme.insert(&key, &key, code, MapTarget::Chars);
        }
        drop(state);

        tracing::info!(theme = %name, path = %path.display(), count = mappings.len(), "loaded theme");
        Ok(())
    }

    /// Human-readable dump of every theme and all three of its tables.
    ///
    /// Themes and entries are sorted; escape characters are shown as `\033`.
    pub fn list_all_theme_maps(&self) -> String {
        let state = self.lock();
        let mut names: Vec<&String> = state.themes.keys().collect();
        names.sort();

        let mut out = String::from("\nAll Themes and Their Mappings:\n");
        for name in names {
            let Some(theme) = state.themes.get(name) else {
                continue;
            };
            out.push_str(&format!("Theme: {}\n", name));

            let mut chars: Vec<_> = theme.chars().iter().collect();
            chars.sort();
            for (ch, code) in chars {
                out.push_str(&format!(
                    "Character: {}, Color Code: {}\n",
                    ch,
                    escape_visible(code)
                ));
            }
            for (label, table) in [("Key", theme.keys()), ("Value", theme.values())] {
                let mut entries: Vec<_> = table.iter().collect();
                entries.sort();
                for (entry, code) in entries {
                    out.push_str(&format!(
                        "{}: {}, Color Code: {}\n",
                        label,
                        entry,
                        escape_visible(code)
                    ));
                }
            }
            out.push('\n');
        }
        out
    }

    /// Reads `char:code` lines from `input` into the character table of
    /// `name` until a line reading `done` or end of input.
    ///
    /// Only the prompt goes to `out`. Malformed lines are reported on the error
    /// channel through `warn!` and skipped. Returns the number of mappings
    /// inserted.
    pub fn interactive_edit_theme<R, W>(
        &self,
        name: &str,
        mut input: R,
        mut out: W,
    ) -> Result<usize, ThemeError>
    where
        R: BufRead,
        W: Write,
    {
        if !self.lock().themes.contains_key(name) {
            tracing::error!(theme = %name, "theme does not exist");
            return Err(ThemeError::NotFound(name.to_string()));
        }
        let io_err = |e: io::Error| ThemeError::io(EDIT_SOURCE, e);

        writeln!(
            out,
            "Editing theme: {}\nEnter color mapping (char:colorCode) or 'done' to finish:",
            name
        )
        .map_err(io_err)?;
        out.flush().map_err(io_err)?;

        let mut inserted = 0;
        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line).map_err(io_err)? == 0 {
                break;
            }
            let entry = line.trim_end_matches(['\n', '\r']);
            if entry == "done" {
                break;
            }
            let Some((ch, code)) = parse_line(entry) else {
                tracing::warn!(input = %entry, "invalid format, use char:colorCode");
                continue;
            };

            let key = ch.to_string();
            self.lock()
                .themes
                .entry(name.to_string())
                .or_default()
                .insert(&key, &key, code, MapTarget::Chars);
            inserted += 1;
        }

        tracing::info!(theme = %name, count = inserted, "edited theme");
        Ok(inserted)
    }

    /// Drops every theme except an empty default, makes it active and
    /// re-enables the colormap.
    pub fn reset(&self) {
        *self.lock() = State::initial();
        tracing::info!("reset themes");
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

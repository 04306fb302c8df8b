//! Level-colored log lines.
//!
//! [`LevelFormat`] is a `tracing-subscriber` event formatter that renders each
//! event as `[LEVEL] message`, coloring the level label with the code from a
//! [`LevelPalette`]. With [`LevelPalette::set_color_full`] the whole line is
//! colored instead of just the label.
//!
//! Default colors:
//!
//! | Level | Label     | Color   |
//! |-------|-----------|---------|
//! | TRACE | `TRACE`   | blue    |
//! | DEBUG | `DEBUG`   | cyan    |
//! | INFO  | `INFO`    | green   |
//! | WARN  | `WARNING` | yellow  |
//! | ERROR | `ERROR`   | red     |
//!
//! [`init_logging`] installs a global subscriber writing to stderr. The filter
//! comes from `TERMTINT_LOG` when set, otherwise from the configured
//! verbosity.

use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::ansi::{Emitter, RESET};

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "TERMTINT_LOG";

const LEVELS: [Level; 5] = [
    Level::TRACE,
    Level::DEBUG,
    Level::INFO,
    Level::WARN,
    Level::ERROR,
];

fn slot(level: Level) -> usize {
    LEVELS.iter().position(|l| *l == level).unwrap_or(0)
}

const DEFAULT_LABELS: [&str; 5] = ["TRACE", "DEBUG", "INFO", "WARNING", "ERROR"];

// blue, cyan, green, yellow, red
const DEFAULT_COLORS: [&str; 5] = ["\x1b[34m", "\x1b[36m", "\x1b[32m", "\x1b[33m", "\x1b[31m"];

#[derive(Debug, Default)]
struct PaletteState {
    labels: [Option<String>; 5],
    colors: [Option<String>; 5],
    color_full: bool,
}

/// Per-level labels and colors.
///
/// Clones share the same configuration, so a palette handed to
/// [`LevelFormat`] can still be adjusted afterwards.
#[derive(Debug, Clone, Default)]
pub struct LevelPalette {
    state: Arc<Mutex<PaletteState>>,
}

impl LevelPalette {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PaletteState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replaces the label printed for `level`.
    pub fn set_label(&self, level: Level, label: impl Into<String>) {
        self.lock().labels[slot(level)] = Some(label.into());
    }

    /// Replaces the escape code used for `level`. An empty code restores the default.
    pub fn set_color(&self, level: Level, code: impl Into<String>) {
        let code = code.into();
        self.lock().colors[slot(level)] = if code.is_empty() { None } else { Some(code) };
    }

    /// Colors the whole line rather than only the label.
    pub fn set_color_full(&self, color_full: bool) {
        self.lock().color_full = color_full;
    }

    pub fn label(&self, level: Level) -> String {
        self.lock().labels[slot(level)]
            .clone()
            .unwrap_or_else(|| DEFAULT_LABELS[slot(level)].to_string())
    }

    pub fn color(&self, level: Level) -> String {
        self.lock().colors[slot(level)]
            .clone()
            .unwrap_or_else(|| DEFAULT_COLORS[slot(level)].to_string())
    }

    pub fn color_full(&self) -> bool {
        self.lock().color_full
    }
}

/// Renders one log line, without the trailing newline.
///
/// `location` is printed as `file:line ` before the message when given.
pub fn format_line(
    palette: &LevelPalette,
    emitter: &Emitter,
    level: Level,
    location: Option<(&str, u32)>,
    message: &str,
) -> String {
    let label = palette.label(level);
    let location = location
        .map(|(file, line)| format!("{}:{} ", file, line))
        .unwrap_or_default();

    if !emitter.is_enabled() {
        return format!("[{}] {}{}", label, location, message);
    }
    let code = palette.color(level);
    if palette.color_full() {
        format!("{}[{}] {}{}{}", code, label, location, message, RESET)
    } else {
        format!("[{}{}{}] {}{}", code, label, RESET, location, message)
    }
}

/// Event formatter producing `[LEVEL] message` lines.
#[derive(Debug, Clone, Default)]
pub struct LevelFormat {
    palette: LevelPalette,
    emitter: Emitter,
    with_location: bool,
}

impl LevelFormat {
    pub fn new(palette: LevelPalette, emitter: Emitter) -> Self {
        Self {
            palette,
            emitter,
            with_location: false,
        }
    }

    /// Prefixes messages with the source `file:line` of the event.
    pub fn with_location(mut self, with_location: bool) -> Self {
        self.with_location = with_location;
        self
    }
}

impl<S, N> FormatEvent<S, N> for LevelFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let mut message = String::new();
        ctx.format_fields(format::Writer::new(&mut message), event)?;

        let location = if self.with_location {
            meta.file().zip(meta.line())
        } else {
            None
        };
        let line = format_line(&self.palette, &self.emitter, *meta.level(), location, &message);
        writeln!(writer, "{}", line)
    }
}

/// Options for [`init_logging`].
#[derive(Debug, Clone, Default)]
pub struct LogSettings {
    pub palette: LevelPalette,
    /// Color the level labels.
    pub color: bool,
    /// 0 = warn, 1 = info, 2 = debug, 3 or more = trace.
    pub verbosity: u8,
    pub with_location: bool,
}

impl LogSettings {
    /// The filter directive implied by `verbosity`.
    pub fn default_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Installs the global stderr subscriber. Later calls do nothing.
pub fn init_logging(settings: LogSettings) {
    let _ = LOGGING_INIT.get_or_init(|| {
        let emitter = if settings.color {
            Emitter::new()
        } else {
            Emitter::disabled()
        };
        let format = LevelFormat::new(settings.palette.clone(), emitter)
            .with_location(settings.with_location);
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(settings.filter())
            .with_writer(std::io::stderr)
            .event_format(format)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

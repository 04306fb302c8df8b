//! Error types for themes and output formatting.
//!
//! Color lookups have their own [`ColorError`](crate::ColorError) in the
//! style module.

use std::io;

/// Errors raised by [`ThemeManager`](crate::ThemeManager) operations.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A theme with this name is already registered.
    #[error("theme '{0}' already exists")]
    AlreadyExists(String),

    /// No theme is registered under this name.
    #[error("theme '{0}' not found")]
    NotFound(String),

    /// Theme names must be non-empty.
    #[error("invalid theme name '{0}'")]
    InvalidName(String),

    /// A theme file or input stream could not be read or written.
    #[error("theme I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ThemeError {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        ThemeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by the structured output formatters.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The name does not match any [`OutputFormat`](crate::OutputFormat).
    #[error("unknown output format '{0}'")]
    UnknownFormat(String),

    /// The data could not be serialized in the requested format.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Writing to the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        FormatError::Serialization(err.to_string())
    }
}

impl From<quick_xml::DeError> for FormatError {
    fn from(err: quick_xml::DeError) -> Self {
        FormatError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for FormatError {
    fn from(err: csv::Error) -> Self {
        FormatError::Serialization(err.to_string())
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for FormatError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        FormatError::Serialization(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for FormatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        FormatError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_theme_error_display() {
        let err = ThemeError::AlreadyExists("dark".to_string());
        assert_eq!(err.to_string(), "theme 'dark' already exists");

        let err = ThemeError::NotFound("ghost".to_string());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_theme_io_error_keeps_source() {
        let err = ThemeError::io(
            "/nope/theme.txt",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("/nope/theme.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_format_error_from_io() {
        let err: FormatError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, FormatError::Io(_)));
    }

    #[test]
    fn test_format_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FormatError = json_err.into();
        assert!(matches!(err, FormatError::Serialization(_)));
    }
}

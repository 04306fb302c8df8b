//! Color lookup and parsing errors.

/// Errors raised by color parsing and the named color tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// No color is registered under the name.
    #[error("color '{0}' not found")]
    NotFound(String),

    /// The string is not a `#rgb` or `#rrggbb` hex color.
    #[error("invalid hex color '{0}' (expected #rgb or #rrggbb)")]
    InvalidHex(String),
}

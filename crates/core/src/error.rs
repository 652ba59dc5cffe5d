//! Error types for the huepick core.

use thiserror::Error;

/// Errors produced by color parsing and options handling.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An options file existed but did not contain valid options JSON.
    #[error("invalid options file: {0}")]
    Config(String),

    /// An options file could not be read or written.
    #[error("io error: {0}")]
    Io(String),
}

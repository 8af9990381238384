//! Error types for the scribe layer

use thiserror::Error;

/// Scribe error types
#[derive(Debug, Error)]
pub enum ScribeError {
    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Text could not be parsed as a decimal number literal.
    #[error("Malformed number: {0}")]
    MalformedNumber(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ScribeError>;

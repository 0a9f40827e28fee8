//! Error types for shorthand parsing.

use thiserror::Error;

/// Errors that can occur while parsing a shorthand line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShorthandError {
    /// Empty input provided.
    #[error("empty shorthand")]
    Empty,

    /// Input does not match the shorthand grammar.
    #[error("malformed shorthand at position {position}: {message}")]
    Malformed {
        /// Byte offset in the (lowercased) input where parsing stopped.
        position: usize,
        /// Description of the error.
        message: String,
    },
}

/// Result type for shorthand parsing.
pub type ShorthandResult<T> = std::result::Result<T, ShorthandError>;

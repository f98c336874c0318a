//! Error types for the raw project file reader/writer

use thiserror::Error;

/// Errors that can occur while reading or writing raw config files
#[derive(Error, Debug)]
pub enum RiniError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key cannot be written as a record key
    #[error("Invalid key '{0}': keys must be non-empty and contain no whitespace, '=' or '#'")]
    InvalidKey(String),

    /// Value cannot be written without changing its meaning
    #[error("Value of '{key}' cannot be written: {reason}")]
    UnrepresentableText { key: String, reason: &'static str },
}

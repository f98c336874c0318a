//! Error types for project documents

use std::path::PathBuf;

use thiserror::Error;

use super::types::EntryType;
use crate::rini::RiniError;

/// Errors that can occur while loading, editing or saving a project
#[derive(Error, Debug)]
pub enum ProjectError {
    /// Path does not carry the `.rpc` extension
    #[error("Not a project file (expected .{}): {}", crate::PROJECT_EXTENSION, .0.display())]
    UnsupportedExtension(PathBuf),

    /// Project file does not exist
    #[error("Project file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Text payload longer than the file format allows
    #[error("Value of '{key}' is {len} bytes long, the maximum is {max}")]
    CapacityExceeded { key: String, len: usize, max: usize },

    /// Entry key is empty
    #[error("Entry key is empty")]
    EmptyKey,

    /// Key contains characters the file format cannot hold
    #[error("Invalid entry key '{0}': keys must contain no whitespace, '=' or '#'")]
    InvalidKey(String),

    /// Key already present in the document
    #[error("Duplicate entry key: {0}")]
    DuplicateKey(String),

    /// No entry with this key
    #[error("Unknown entry key: {0}")]
    UnknownKey(String),

    /// Setter does not match the entry type
    #[error("Entry '{key}' holds {actual:?} data, expected {expected}")]
    TypeMismatch {
        key: String,
        actual: EntryType,
        expected: &'static str,
    },

    /// Save requested before the project was bound to a file
    #[error("No file path set for this project")]
    NoFilePath,

    /// Raw reader/writer failure
    #[error(transparent)]
    Rini(#[from] RiniError),
}

//! Project Definition Model
//!
//! Turns the flat records of a `.rpc` project file into typed entries and
//! back. Every key carries its own metadata:
//!
//! ```text
//! PROJECT_DEBUG_FLAG             -> Project, any platform, boolean
//! BUILD_SOURCE_FILES             -> Build, any platform, file list
//! PLATFORM_WINDOWS_ICON_FILE     -> Platform, Windows, file
//! ```
//!
//! Loading goes raw config -> [`ConfigDocument`]; saving goes back through
//! [`ConfigDocument::to_raw`], grouped by category.

mod document;
mod entry;
mod error;
mod key;
mod template;
mod types;
mod writer;

pub use document::ConfigDocument;
pub use entry::{Entry, LIST_SEPARATOR};
pub use error::ProjectError;
pub use key::{decode_key, decode_record, infer_type, DecodedKey};
pub use template::{TEMPLATE, UNNAMED_PROJECT};
pub use types::{Category, EntryType, Platform};
pub use writer::HEADER_LINES;

use std::path::{Path, PathBuf};

/// Extension of project definition files
pub const PROJECT_EXTENSION: &str = "rpc";

/// Check whether a path names a project file
pub fn is_project_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PROJECT_EXTENSION))
}

/// Append the project extension unless the path already has it
pub fn with_project_extension(path: &Path) -> PathBuf {
    if is_project_file(path) {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".");
        name.push(PROJECT_EXTENSION);
        PathBuf::from(name)
    }
}

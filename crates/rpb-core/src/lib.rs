//! # rpb Core Library
//!
//! Core functionality for the raylib project builder.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Reading and writing flat `KEY = VALUE # description` project files
//! - Decoding entry keys into category, platform and data type
//! - A typed, editable entry model for UI layers
//! - Editing sessions with save/dirty tracking
//!
//! ## Example
//!
//! ```rust,no_run
//! use rpb_core::project::{Category, ConfigDocument, Platform};
//!
//! let document = ConfigDocument::load("game.rpc")?;
//! for entry in document.visible(Category::Platform, Platform::Windows) {
//!     println!("{}: {:?}", entry.name, entry.entry_type);
//! }
//! document.save("game.rpc")?;
//! # Ok::<(), rpb_core::project::ProjectError>(())
//! ```

pub mod project;
pub mod rini;
pub mod session;

pub use project::PROJECT_EXTENSION;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::project::{
        Category, ConfigDocument, Entry, EntryType, Platform, ProjectError,
    };
    pub use crate::rini::{RawConfig, RawRecord};
    pub use crate::session::Session;
}

/// Tool name
pub const TOOL_NAME: &str = "raylib project builder";

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

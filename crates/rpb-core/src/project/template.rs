//! Built-in project template
//!
//! New projects start from this definition, which lists every setting the
//! builder knows about with sensible defaults.

use super::document::ConfigDocument;

/// Template project file contents
pub const TEMPLATE: &str = include_str!("../../resources/project_template.rpc");

/// File name suggested for a new, unsaved project
pub const UNNAMED_PROJECT: &str = "unnamed.rpc";

impl ConfigDocument {
    /// Build a document from the built-in template
    pub fn template() -> Self {
        Self::parse(TEMPLATE)
    }
}

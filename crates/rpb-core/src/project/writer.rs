//! Project document serialization
//!
//! Entries are written grouped by category (and by platform inside the
//! platform category), independently of the order they were loaded in, so a
//! hand-edited file comes back out organized.

use std::path::{Path, PathBuf};

use super::document::ConfigDocument;
use super::entry::Entry;
use super::error::ProjectError;
use super::types::{Category, Platform};
use super::with_project_extension;
use crate::rini::RawConfig;

/// Fixed header written at the top of every project file
pub const HEADER_LINES: &[&str] = &[
    "",
    "raylib project creator - project definition file",
    "",
    "This definition file contains all required info to describe a project",
    "and allow building it for multiple platforms",
    "",
    "This file follows certain conventions to be able to display the information in",
    "an easy-configurable UI manner when loaded through [raylib project builder]",
    "CONVENTIONS:",
    "   - ID containing [_FLAG]: Value is considered a boolean, it displays as a checkbox",
    "   - ID with an unquoted numeric value: Value is considered an integer, it displays as a value box",
    "   - ID containing _FILE or _FILES: Value is considered a text file path, it displays as a text box with a [Browse-File] button",
    "   - ID containing _PATH: Value is considered a text directory path, it displays as a text box with a [Browse-Dir] button",
    "",
    "NOTE: The description of each entry is used as tooltip when editing the entry on [rpb]",
];

/// Rule line written under every section title
const SECTION_RULE: &str =
    "------------------------------------------------------------------------------------";

/// Category order in written files
const CATEGORY_ORDER: [Category; 7] = [
    Category::Project,
    Category::Build,
    Category::Platform,
    Category::Deploy,
    Category::Imagery,
    Category::Raylib,
    Category::Unknown,
];

impl ConfigDocument {
    /// Convert the document to a raw config ready for writing
    ///
    /// Fails without producing anything if an entry does not fit the file
    /// format.
    pub fn to_raw(&self) -> Result<RawConfig, ProjectError> {
        for entry in self.iter() {
            entry.validate()?;
        }

        let mut config = RawConfig::new();
        for line in HEADER_LINES {
            config.push_header(*line);
        }

        for category in CATEGORY_ORDER {
            let entries: Vec<&Entry> = self.by_category(category).collect();
            if entries.is_empty() {
                continue;
            }

            push_section(&mut config, category.label());

            if category == Category::Platform {
                for platform in Platform::TARGETS.into_iter().chain([Platform::Any]) {
                    let scoped: Vec<&Entry> = entries
                        .iter()
                        .copied()
                        .filter(|e| e.platform == platform)
                        .collect();
                    if scoped.is_empty() {
                        continue;
                    }
                    config.push_comment(format!("{} platform", platform.label()));
                    push_entries(&mut config, &scoped);
                }
            } else {
                push_entries(&mut config, &entries);
            }
        }

        Ok(config)
    }

    /// Render the document to project file text
    pub fn to_text(&self) -> Result<String, ProjectError> {
        Ok(self.to_raw()?.to_text()?)
    }

    /// Save the document as a project file
    ///
    /// The `.rpc` extension is appended when missing. Returns the path the
    /// file was written to.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, ProjectError> {
        let path = with_project_extension(path.as_ref());
        let config = self.to_raw()?;
        config.save(&path)?;
        tracing::info!("Saved {} entries to {}", self.len(), path.display());
        Ok(path)
    }
}

fn push_section(config: &mut RawConfig, title: &str) {
    config.push_comment("");
    config.push_comment(title);
    config.push_comment(SECTION_RULE);
}

fn push_entries(config: &mut RawConfig, entries: &[&Entry]) {
    for entry in entries {
        config.push_record(entry.to_record());
    }
}

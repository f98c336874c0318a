//! Project document: the ordered entry list built from a raw config

use std::path::Path;

use serde::Serialize;

use super::entry::Entry;
use super::error::ProjectError;
use super::is_project_file;
use super::types::{Category, Platform};
use crate::rini::{is_valid_key, RawConfig, RawRecord};

/// All entries of one project, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigDocument {
    entries: Vec<Entry>,
}

impl ConfigDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from raw records, preserving their order
    ///
    /// A key seen twice keeps its first position and the last value.
    /// Records whose key could not be written back are skipped.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        let mut document = ConfigDocument::new();
        for record in records {
            if !is_valid_key(&record.key) {
                tracing::warn!("Skipping record with invalid key {:?}", record.key);
                continue;
            }
            let entry = Entry::from_record(record);
            match document.position(&entry.key) {
                Some(i) => {
                    tracing::warn!("Duplicate key '{}', keeping the last value", entry.key);
                    document.entries[i] = entry;
                }
                None => document.entries.push(entry),
            }
        }
        document
    }

    /// Build a document from a parsed raw config
    pub fn from_raw(config: &RawConfig) -> Self {
        Self::from_records(config.records())
    }

    /// Parse a document from project file text
    pub fn parse(content: &str) -> Self {
        Self::from_raw(&RawConfig::parse(content))
    }

    /// Load a project file
    ///
    /// Paths without the `.rpc` extension are rejected before reading. A
    /// missing file yields an empty document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProjectError> {
        let path = path.as_ref();

        if !is_project_file(path) {
            return Err(ProjectError::UnsupportedExtension(path.to_path_buf()));
        }

        if !path.exists() {
            tracing::warn!("Project file {} not found, starting empty", path.display());
            return Ok(Self::new());
        }

        let config = RawConfig::load(path)?;
        let document = Self::from_raw(&config);
        tracing::info!(
            "Loaded {} entries from {}",
            document.len(),
            path.display()
        );
        Ok(document)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the document has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate entries in order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Get an entry by key
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Get a mutable entry by key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Append an entry; keys must be unique
    pub fn insert(&mut self, entry: Entry) -> Result<(), ProjectError> {
        if entry.key.is_empty() {
            return Err(ProjectError::EmptyKey);
        }
        if !is_valid_key(&entry.key) {
            return Err(ProjectError::InvalidKey(entry.key));
        }
        if self.contains(&entry.key) {
            return Err(ProjectError::DuplicateKey(entry.key));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Entries of one category, in document order
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Entries shown for a category tab when `platform` is the selected target
    pub fn visible(&self, category: Category, platform: Platform) -> impl Iterator<Item = &Entry> {
        self.by_category(category)
            .filter(move |e| e.applies_to(platform))
    }

    /// Export entries as JSON for a rendering layer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }
}

impl<'a> IntoIterator for &'a ConfigDocument {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

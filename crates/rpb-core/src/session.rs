//! Editing session
//!
//! A [`Session`] owns the open project document together with the state the
//! editor needs around it: where the file lives, whether there are unsaved
//! changes, and which category tab and target platform are selected.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::project::{
    is_project_file, Category, ConfigDocument, Entry, Platform, ProjectError, UNNAMED_PROJECT,
};

/// An open project and its editing state
#[derive(Debug, Clone)]
pub struct Session {
    document: ConfigDocument,
    path: Option<PathBuf>,
    dirty: bool,
    category: Category,
    platform: Platform,
    last_saved: Option<DateTime<Utc>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_document(ConfigDocument::new())
    }
}

impl Session {
    /// Start a session with an empty, unsaved document
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session on the built-in template
    pub fn from_template() -> Self {
        Self::with_document(ConfigDocument::template())
    }

    /// Start a session on an existing document, not yet bound to a file
    pub fn with_document(document: ConfigDocument) -> Self {
        Self {
            document,
            path: None,
            dirty: false,
            category: Category::Project,
            platform: Platform::Windows,
            last_saved: None,
        }
    }

    /// Open a project file, replacing the current document
    ///
    /// On error the current document is left untouched.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ProjectError> {
        let path = path.as_ref();

        if !is_project_file(path) {
            return Err(ProjectError::UnsupportedExtension(path.to_path_buf()));
        }
        if !path.exists() {
            return Err(ProjectError::SourceNotFound(path.to_path_buf()));
        }

        self.document = ConfigDocument::load(path)?;
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        self.last_saved = None;
        Ok(())
    }

    /// Save to the current file
    pub fn save(&mut self) -> Result<PathBuf, ProjectError> {
        let path = self.path.clone().ok_or(ProjectError::NoFilePath)?;
        self.save_as(path)
    }

    /// Save to a new file and make it the current one
    ///
    /// The `.rpc` extension is appended when missing.
    pub fn save_as<P: AsRef<Path>>(&mut self, path: P) -> Result<PathBuf, ProjectError> {
        let written = self.document.save(path)?;
        self.path = Some(written.clone());
        self.dirty = false;
        self.last_saved = Some(Utc::now());
        Ok(written)
    }

    /// Discard the current project and start over from the template
    pub fn reset(&mut self) {
        tracing::debug!("Resetting session to the project template");
        *self = Self {
            category: self.category,
            platform: self.platform,
            ..Self::from_template()
        };
    }

    /// The open document
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Current file, if the project was opened or saved
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name for display, `unnamed.rpc` until saved
    pub fn file_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNNAMED_PROJECT.to_string())
    }

    /// Whether there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// When the project was last saved in this session
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    /// Selected category tab
    pub fn category(&self) -> Category {
        self.category
    }

    /// Selected target platform
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Select a category tab
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Select the target platform; `Any` is not a target and is ignored
    pub fn select_platform(&mut self, platform: Platform) {
        if platform == Platform::Any {
            tracing::debug!("Ignoring selection of Any as target platform");
            return;
        }
        self.platform = platform;
    }

    /// Entries shown for the selected tab and platform
    pub fn visible_entries(&self) -> impl Iterator<Item = &Entry> {
        self.document.visible(self.category, self.platform)
    }

    /// Set an integer or boolean entry
    pub fn set_value(&mut self, key: &str, value: i32) -> Result<(), ProjectError> {
        self.edit(key, |entry| entry.set_value(value))
    }

    /// Set a boolean entry
    pub fn set_checked(&mut self, key: &str, checked: bool) -> Result<(), ProjectError> {
        self.edit(key, |entry| entry.set_checked(checked))
    }

    /// Set a text, file or path entry
    pub fn set_text(&mut self, key: &str, text: &str) -> Result<(), ProjectError> {
        self.edit(key, |entry| entry.set_text(text))
    }

    /// Replace the items of a file list entry
    pub fn set_paths<I, S>(&mut self, key: &str, paths: I) -> Result<(), ProjectError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.edit(key, |entry| entry.set_paths(paths))
    }

    fn edit<F>(&mut self, key: &str, f: F) -> Result<(), ProjectError>
    where
        F: FnOnce(&mut Entry) -> Result<(), ProjectError>,
    {
        let entry = self
            .document
            .get_mut(key)
            .ok_or_else(|| ProjectError::UnknownKey(key.to_string()))?;

        let before = entry.clone();
        f(entry)?;
        if *entry != before {
            self.dirty = true;
        }
        Ok(())
    }
}

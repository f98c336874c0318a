//! Project entry: one typed, categorized setting

use serde::Serialize;

use super::error::ProjectError;
use super::key::{decode_record, DecodedKey};
use super::types::{Category, EntryType, Platform};
use crate::rini::{RawRecord, MAX_TEXT_LEN};

/// Separator for multi-value text entries
pub const LIST_SEPARATOR: char = ';';

/// A project setting decoded from one raw record
///
/// The payload is either `value` (boolean/integer entries) or `text`
/// (text/file/path entries); it is only changed through the setters so the
/// type invariants hold. Entries serialize for export but are never
/// deserialized directly; they are rebuilt from raw records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Original key as read from the file
    pub key: String,

    /// Label for display, computed from the key
    pub name: String,

    /// Category from the key prefix
    pub category: Category,

    /// Target platform the entry applies to
    pub platform: Platform,

    /// Data kind, decides which setters apply
    pub entry_type: EntryType,

    /// Integer payload (boolean entries hold 0 or 1)
    value: i32,

    /// Text payload, possibly a `;`-separated list
    text: String,

    /// Description, used as tooltip
    pub description: String,

    /// Text holds multiple values
    pub multi: bool,
}

impl Entry {
    /// Decode an entry from a raw record
    pub fn from_record(record: &RawRecord) -> Self {
        decode_record(record)
    }

    pub(crate) fn from_parts(
        key: String,
        decoded: DecodedKey,
        entry_type: EntryType,
        value: i32,
        text: String,
        description: String,
        multi: bool,
    ) -> Self {
        Self {
            key,
            name: decoded.name,
            category: decoded.category,
            platform: decoded.platform,
            entry_type,
            value,
            text,
            description,
            multi,
        }
    }

    /// Integer payload
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Text payload
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether a boolean entry is set
    pub fn is_checked(&self) -> bool {
        self.value != 0
    }

    /// Whether the entry applies to the given target platform
    pub fn applies_to(&self, platform: Platform) -> bool {
        self.platform == Platform::Any || self.platform == platform
    }

    /// Set the integer payload; boolean entries store any non-zero as 1
    pub fn set_value(&mut self, value: i32) -> Result<(), ProjectError> {
        match self.entry_type {
            EntryType::Boolean => self.value = i32::from(value != 0),
            EntryType::Integer => self.value = value,
            _ => return Err(self.mismatch("a number")),
        }
        Ok(())
    }

    /// Set a boolean entry
    pub fn set_checked(&mut self, checked: bool) -> Result<(), ProjectError> {
        if self.entry_type != EntryType::Boolean {
            return Err(self.mismatch("a boolean"));
        }
        self.value = i32::from(checked);
        Ok(())
    }

    /// Set the text payload
    ///
    /// Text longer than the file format allows is rejected, not truncated.
    pub fn set_text(&mut self, text: &str) -> Result<(), ProjectError> {
        if self.entry_type.is_numeric() {
            return Err(self.mismatch("text"));
        }
        check_capacity(&self.key, text)?;
        self.text = text.to_string();
        Ok(())
    }

    /// Items of a multi-value entry (a single-value entry yields its text)
    pub fn paths(&self) -> Vec<&str> {
        if !self.multi {
            return if self.text.is_empty() {
                Vec::new()
            } else {
                vec![self.text.as_str()]
            };
        }

        self.text
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Replace the items of a multi-value entry
    pub fn set_paths<I, S>(&mut self, paths: I) -> Result<(), ProjectError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = paths
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(&LIST_SEPARATOR.to_string());
        self.set_text(&joined)
    }

    /// Check the entry can be written back
    pub fn validate(&self) -> Result<(), ProjectError> {
        if self.entry_type.is_numeric() {
            Ok(())
        } else {
            check_capacity(&self.key, &self.text)
        }
    }

    /// Raw record for writing
    pub fn to_record(&self) -> RawRecord {
        if self.entry_type.is_numeric() {
            RawRecord::number(&self.key, self.value, &self.description)
        } else {
            RawRecord::text(&self.key, &self.text, &self.description)
        }
    }

    fn mismatch(&self, expected: &'static str) -> ProjectError {
        ProjectError::TypeMismatch {
            key: self.key.clone(),
            actual: self.entry_type,
            expected,
        }
    }
}

fn check_capacity(key: &str, text: &str) -> Result<(), ProjectError> {
    if text.len() > MAX_TEXT_LEN {
        return Err(ProjectError::CapacityExceeded {
            key: key.to_string(),
            len: text.len(),
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

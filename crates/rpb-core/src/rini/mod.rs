//! Raw Project File Reader/Writer
//!
//! Reads and writes the flat `KEY = VALUE # description` files used for
//! project definitions (`.rpc`) and tool settings.
//!
//! ```text
//! # raylib project creator - project definition file
//! #
//! PROJECT_NAME                          = "raylib game"          # Project name
//! PROJECT_DEBUG_FLAG                    = 1                      # Enable debug build
//! ```
//!
//! Format rules:
//! - Comment lines start with `#` (or `;`)
//! - A value in double quotes is text, an unquoted value is numeric when it
//!   parses as a 32-bit integer and text otherwise
//! - Anything after a `#` following the value is the entry description
//!
//! This layer knows nothing about categories or entry types, it only moves
//! [`RawRecord`]s in and out of files.

mod error;

pub use error::RiniError;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Column at which the `=` of a record is written
pub const VALUE_SPACING: usize = 38;

/// Width reserved for the value before the description comment
pub const DESCRIPTION_SPACING: usize = 24;

/// Maximum text payload length (in bytes) a value may carry
pub const MAX_TEXT_LEN: usize = 255;

/// One `KEY = VALUE # description` line, agnostic of what the key means
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Record key
    pub key: String,
    /// Value in its textual form (numbers are stored as their decimal text)
    pub text: String,
    /// Whether the value was quoted or non-numeric
    pub is_text: bool,
    /// Trailing description comment, empty when absent
    pub description: String,
}

impl RawRecord {
    /// Create a text record (written quoted)
    pub fn text(
        key: impl Into<String>,
        text: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            is_text: true,
            description: description.into(),
        }
    }

    /// Create a numeric record
    pub fn number(key: impl Into<String>, value: i32, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: value.to_string(),
            is_text: false,
            description: description.into(),
        }
    }

    /// Numeric value of the record, if it holds one
    pub fn as_i32(&self) -> Option<i32> {
        if self.is_text {
            None
        } else {
            self.text.parse().ok()
        }
    }
}

/// A line of the file body after the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLine {
    /// Section comment; an empty string writes a bare `#`
    Comment(String),
    /// Key/value record
    Record(RawRecord),
}

/// A parsed raw config file
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    /// Comment lines before the first record
    header: Vec<String>,
    /// Body lines in order of appearance
    lines: Vec<RawLine>,
    /// Key -> index into `lines`
    index: HashMap<String, usize>,
}

impl RawConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a string
    pub fn parse(content: &str) -> Self {
        let mut config = RawConfig::new();

        for (number, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                continue;
            }

            if let Some(comment) = comment_text(trimmed) {
                if config.lines.is_empty() {
                    config.header.push(comment.to_string());
                } else {
                    config.lines.push(RawLine::Comment(comment.to_string()));
                }
                continue;
            }

            match parse_record(trimmed) {
                Some(record) => match validate_record(&record) {
                    Ok(()) => config.push_record(record),
                    Err(e) => tracing::warn!("Skipping line {}: {}", number + 1, e),
                },
                None => tracing::warn!("Skipping malformed line {}: {:?}", number + 1, trimmed),
            }
        }

        config
    }

    /// Load a config from a file
    ///
    /// Handles both UTF-8 and ISO-8859-1 (Latin-1) encoded files.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RiniError> {
        let bytes = fs::read(path)?;
        let content = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
        };
        Ok(Self::parse(&content))
    }

    /// Save the config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RiniError> {
        let content = self.to_text()?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Render the config to its file form
    ///
    /// Fails when a key or value cannot be expressed in the line format.
    pub fn to_text(&self) -> Result<String, RiniError> {
        let mut out = String::new();

        for comment in &self.header {
            push_comment_line(&mut out, comment);
        }
        if !self.header.is_empty() {
            out.push('\n');
        }

        for line in &self.lines {
            match line {
                RawLine::Comment(comment) => push_comment_line(&mut out, comment),
                RawLine::Record(record) => {
                    validate_record(record)?;
                    push_record_line(&mut out, record);
                }
            }
        }

        Ok(out)
    }

    /// Header comment lines
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Body lines (records and section comments) in order
    pub fn lines(&self) -> &[RawLine] {
        &self.lines
    }

    /// Records in order of appearance
    pub fn records(&self) -> impl Iterator<Item = &RawRecord> {
        self.lines.iter().filter_map(|line| match line {
            RawLine::Record(record) => Some(record),
            RawLine::Comment(_) => None,
        })
    }

    /// Get a record by key
    pub fn get(&self, key: &str) -> Option<&RawRecord> {
        match self.index.get(key).map(|&i| &self.lines[i]) {
            Some(RawLine::Record(record)) => Some(record),
            _ => None,
        }
    }

    /// Append a header comment line
    pub fn push_header(&mut self, comment: impl Into<String>) {
        self.header.push(comment.into());
    }

    /// Append a section comment after the current last line
    pub fn push_comment(&mut self, comment: impl Into<String>) {
        self.lines.push(RawLine::Comment(comment.into()));
    }

    /// Append a record, replacing the value of an existing key in place
    pub fn push_record(&mut self, record: RawRecord) {
        if let Some(&i) = self.index.get(&record.key) {
            tracing::warn!("Duplicate key '{}', keeping the last value", record.key);
            self.lines[i] = RawLine::Record(record);
        } else {
            self.index.insert(record.key.clone(), self.lines.len());
            self.lines.push(RawLine::Record(record));
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if there are no records
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Text of a comment line, without its marker
fn comment_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#').or_else(|| line.strip_prefix(';'))?;
    Some(rest.strip_prefix(' ').unwrap_or(rest).trim_end())
}

/// Parse a `KEY = VALUE # description` line
fn parse_record(line: &str) -> Option<RawRecord> {
    let (key, rest) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let rest = rest.trim_start();
    let (text, is_text, tail) = match rest.strip_prefix('"') {
        Some(quoted) => match quoted.split_once('"') {
            Some((text, tail)) => (text.to_string(), true, tail),
            // Unterminated quote: the value runs up to the description
            None => {
                let (text, tail) = split_description(quoted);
                (text.trim_end().to_string(), true, tail)
            }
        },
        None => {
            let (value, tail) = split_description(rest);
            let value = value.trim();
            let is_text = value.parse::<i32>().is_err();
            if is_text && value.parse::<i64>().is_ok() {
                tracing::warn!("Value of '{}' is out of the integer range, reading it as text", key);
            }
            (value.to_string(), is_text, tail)
        }
    };

    let description = tail
        .trim_start()
        .strip_prefix('#')
        .map(|d| d.trim().to_string())
        .unwrap_or_default();

    Some(RawRecord {
        key: key.to_string(),
        text,
        is_text,
        description,
    })
}

/// Split at the first `#`, keeping the marker on the tail
fn split_description(s: &str) -> (&str, &str) {
    match s.find('#') {
        Some(pos) => s.split_at(pos),
        None => (s, ""),
    }
}

/// Whether a key can be written and read back unchanged
///
/// Keys must be non-empty and contain no whitespace, `=` or `#`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(|c: char| c.is_whitespace() || c == '=' || c == '#')
}

fn validate_record(record: &RawRecord) -> Result<(), RiniError> {
    let key = &record.key;
    if !is_valid_key(key) {
        return Err(RiniError::InvalidKey(key.clone()));
    }

    let unrepresentable = |reason: &'static str| RiniError::UnrepresentableText {
        key: key.clone(),
        reason,
    };
    if record.text.contains(['\n', '\r']) {
        return Err(unrepresentable("value contains a line break"));
    }
    if record.is_text && record.text.contains('"') {
        return Err(unrepresentable("text contains a double quote"));
    }
    if !record.is_text && record.text.parse::<i32>().is_err() {
        return Err(unrepresentable("numeric value is not an integer"));
    }
    if record.description.contains(['\n', '\r']) {
        return Err(unrepresentable("description contains a line break"));
    }

    Ok(())
}

fn push_comment_line(out: &mut String, comment: &str) {
    if comment.is_empty() {
        out.push_str("#\n");
    } else {
        out.push_str("# ");
        out.push_str(comment);
        out.push('\n');
    }
}

fn push_record_line(out: &mut String, record: &RawRecord) {
    let value = if record.is_text {
        format!("\"{}\"", record.text)
    } else {
        record.text.clone()
    };

    let line = if record.description.is_empty() {
        format!("{:<width$} = {}", record.key, value, width = VALUE_SPACING)
    } else {
        format!(
            "{:<width$} = {:<desc_width$} # {}",
            record.key,
            value,
            record.description,
            width = VALUE_SPACING,
            desc_width = DESCRIPTION_SPACING,
        )
    };

    out.push_str(&line);
    out.push('\n');
}

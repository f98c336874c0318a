//! Entry key decoding
//!
//! Keys follow the `<CATEGORY>_<NAME>` convention, with platform scoped
//! entries written as `PLATFORM_<TARGET>_<NAME>`. The entry type is inferred
//! from markers inside the key (`_FLAG`, `_FILES`, `_FILE`, `_PATH`) together
//! with whether the raw value was text or numeric.

use super::entry::Entry;
use super::types::{Category, EntryType, Platform};
use crate::rini::RawRecord;

/// Metadata recovered from a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedKey {
    /// Category from the key prefix
    pub category: Category,
    /// Target platform, `Any` outside the platform category
    pub platform: Platform,
    /// Display label
    pub name: String,
}

/// Text type rules, checked in order; the first marker found in the key wins
const TEXT_RULES: [(&str, EntryType, bool); 3] = [
    ("_FILES", EntryType::TextFile, true),
    ("_FILE", EntryType::TextFile, false),
    ("_PATH", EntryType::TextPath, false),
];

/// Numeric marker for boolean entries
const FLAG_MARKER: &str = "_FLAG";

/// Decode category, platform and display name from a key
///
/// Never fails: unknown prefixes decode to [`Category::Unknown`] and unknown
/// or missing platform tokens to [`Platform::Any`].
pub fn decode_key(key: &str) -> DecodedKey {
    let (token, remainder) = match key.split_once('_') {
        Some((token, remainder)) => (token, Some(remainder)),
        None => (key, None),
    };

    let category = Category::from_token(token).unwrap_or(Category::Unknown);

    let Some(remainder) = remainder.filter(|r| !r.is_empty()) else {
        if category == Category::Unknown {
            tracing::debug!("Key '{}' has no category prefix", key);
        }
        return DecodedKey {
            category,
            platform: Platform::Any,
            name: key.replace('_', " "),
        };
    };

    match category {
        Category::Platform => {
            // Platform entries keep their underscores in the label
            let (platform, name) = match remainder.split_once('_') {
                Some((token, name)) if !name.is_empty() => match Platform::from_token(token) {
                    Some(platform) => (platform, name),
                    None => {
                        tracing::debug!("Unknown platform '{}' in key '{}'", token, key);
                        (Platform::Any, remainder)
                    }
                },
                _ => {
                    tracing::debug!("Platform key '{}' has no setting name", key);
                    (Platform::Any, remainder)
                }
            };
            DecodedKey {
                category,
                platform,
                name: name.to_string(),
            }
        }
        Category::Unknown => {
            tracing::debug!("Unknown category '{}' in key '{}'", token, key);
            DecodedKey {
                category,
                platform: Platform::Any,
                name: key.replace('_', " "),
            }
        }
        _ => DecodedKey {
            category,
            platform: Platform::Any,
            name: remainder.replace('_', " "),
        },
    }
}

/// Infer the entry type from the key and the raw value kind
///
/// Returns the type and whether the text holds a `;`-separated list.
pub fn infer_type(key: &str, is_text: bool) -> (EntryType, bool) {
    if !is_text {
        let entry_type = if key.contains(FLAG_MARKER) {
            EntryType::Boolean
        } else {
            EntryType::Integer
        };
        return (entry_type, false);
    }

    TEXT_RULES
        .iter()
        .find(|(marker, _, _)| key.contains(marker))
        .map(|&(_, entry_type, multi)| (entry_type, multi))
        .unwrap_or((EntryType::Text, false))
}

/// Decode a raw record into a typed entry
pub fn decode_record(record: &RawRecord) -> Entry {
    let decoded = decode_key(&record.key);
    let (entry_type, multi) = infer_type(&record.key, record.is_text);

    let (value, text) = if entry_type.is_numeric() {
        let value = record
            .as_i32()
            .unwrap_or_else(|| parse_integer(&record.text));
        let value = match entry_type {
            EntryType::Boolean => i32::from(value != 0),
            _ => value,
        };
        (value, String::new())
    } else {
        (0, record.text.clone())
    };

    Entry::from_parts(
        record.key.clone(),
        decoded,
        entry_type,
        value,
        text,
        record.description.clone(),
        multi,
    )
}

/// Parse a numeric payload, reading the leading integer and defaulting to 0
fn parse_integer(text: &str) -> i32 {
    let text = text.trim();
    if let Ok(value) = text.parse() {
        return value;
    }

    let digits_end = text
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    text[..digits_end].parse().unwrap_or_else(|_| {
        tracing::debug!("Numeric value '{}' is not an integer, using 0", text);
        0
    })
}

//! Override records: the input format for locale layout patches.
//!
//! An override batch is an ordered list of records, each replacing the row
//! for one character:
//!
//! ```toml
//! [[overrides]]
//! character = "@"
//! keys = [{ code = 0xC0 }]
//!
//! [[overrides]]
//! character = "*"
//! keys = [{ code = 0xBA, shift = true }, { code = 0x6A }]
//! ```
//!
//! Records come from hand-written data, so a batch is validated as a whole
//! before any of it is applied.  This is the only strict boundary in the
//! crate: everything downstream of a finished layout is total.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::table::LayoutEntry;
use super::PhysicalKey;

/// Errors found while validating an override batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// `character` is empty or holds more than one character.
    #[error("override #{index}: character must be exactly one character, got {character:?}")]
    InvalidCharacter { index: usize, character: String },

    /// The record lists no keys.
    #[error("override #{index}: no keys listed for {character:?}")]
    EmptyKeys { index: usize, character: char },

    /// Two records in the same batch target one character.
    #[error("overrides #{first} and #{second} both map {character:?}")]
    DuplicateCharacter {
        first: usize,
        second: usize,
        character: char,
    },
}

/// One unvalidated override record as it appears in configuration data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRecord {
    /// The character whose row is replaced.  Must hold exactly one character.
    pub character: String,
    /// The replacement key list.
    pub keys: Vec<PhysicalKey>,
}

impl OverrideRecord {
    /// Creates a record for `character`.
    pub fn new(character: char, keys: Vec<PhysicalKey>) -> Self {
        Self {
            character: character.to_string(),
            keys,
        }
    }
}

impl From<LayoutEntry> for OverrideRecord {
    fn from(entry: LayoutEntry) -> Self {
        Self::new(entry.character, entry.keys)
    }
}

/// Validates `records` and converts them to layout rows, preserving order.
///
/// # Errors
///
/// - [`LayoutError::InvalidCharacter`] if a record's `character` is not a
///   single character.
/// - [`LayoutError::EmptyKeys`] if a record has no keys.
/// - [`LayoutError::DuplicateCharacter`] if two records share a character.
pub fn validate(records: &[OverrideRecord]) -> Result<Vec<LayoutEntry>, LayoutError> {
    let mut seen: HashMap<char, usize> = HashMap::with_capacity(records.len());
    let mut entries = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let character = single_char(&record.character).ok_or_else(|| {
            LayoutError::InvalidCharacter {
                index,
                character: record.character.clone(),
            }
        })?;

        if record.keys.is_empty() {
            return Err(LayoutError::EmptyKeys { index, character });
        }

        if let Some(&first) = seen.get(&character) {
            return Err(LayoutError::DuplicateCharacter {
                first,
                second: index,
                character,
            });
        }
        seen.insert(character, index);

        entries.push(LayoutEntry::new(character, record.keys.clone()));
    }

    Ok(entries)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

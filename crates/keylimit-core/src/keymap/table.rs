//! The Layout Table: character → physical keys.
//!
//! A table has two phases.  While it is a [`LayoutBuilder`] rows can be
//! registered and overridden; [`LayoutBuilder::finish`] freezes it into a
//! [`Layout`], which only answers lookups.  Every key set is derived from a
//! finished `Layout`, so a table can never change under a policy that was
//! already resolved against it.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::overrides::{self, LayoutError, OverrideRecord};
use super::{jis109, us101, PhysicalKey};

/// One row of a layout table: a character and every key that types it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    /// The character produced.
    pub character: char,
    /// Keys producing `character`; a character may have several (keypad and top row).
    pub keys: Vec<PhysicalKey>,
}

impl LayoutEntry {
    /// Creates a row mapping `character` to `keys`.
    pub fn new(character: char, keys: Vec<PhysicalKey>) -> Self {
        Self { character, keys }
    }
}

/// A layout table that is still being assembled.
#[derive(Debug, Clone, Default)]
pub struct LayoutBuilder {
    entries: HashMap<char, Vec<PhysicalKey>>,
}

impl LayoutBuilder {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads baseline rows in order.
    ///
    /// Rows for a character seen earlier in the same `entries` extend that
    /// character's key list instead of replacing it.  Use [`register`] to
    /// replace.
    ///
    /// [`register`]: LayoutBuilder::register
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LayoutEntry>,
    {
        let mut table: HashMap<char, Vec<PhysicalKey>> = HashMap::new();
        for entry in entries {
            table.entry(entry.character).or_default().extend(entry.keys);
        }
        Self { entries: table }
    }

    /// Creates a builder seeded with the US 101 baseline.
    pub fn us101() -> Self {
        Self::from_entries(us101::entries())
    }

    /// Creates a builder seeded with US 101 patched for 106/109 keyboards.
    pub fn jis109() -> Self {
        let mut builder = Self::us101();
        for entry in jis109::entries() {
            builder.apply_override(entry.character, entry.keys);
        }
        builder
    }

    /// Adds or replaces the row for `character`.
    ///
    /// An existing key list is replaced, never appended to.
    pub fn register(&mut self, character: char, keys: Vec<PhysicalKey>) {
        self.entries.insert(character, keys);
    }

    /// Replaces the row for `character` with a locale-specific key list.
    ///
    /// Identical to [`register`](LayoutBuilder::register); applying the same
    /// override twice leaves the table unchanged.
    pub fn apply_override(&mut self, character: char, keys: Vec<PhysicalKey>) {
        self.register(character, keys);
    }

    /// Validates a batch of override records and applies all of them.
    ///
    /// # Errors
    ///
    /// Returns the first [`LayoutError`] found in `records`.  Nothing is
    /// applied when validation fails.
    pub fn apply_overrides(&mut self, records: &[OverrideRecord]) -> Result<(), LayoutError> {
        let validated = overrides::validate(records).map_err(|e| {
            warn!("rejected layout override batch: {e}");
            e
        })?;

        let count = validated.len();
        for entry in validated {
            self.apply_override(entry.character, entry.keys);
        }
        debug!(count, "applied layout overrides");
        Ok(())
    }

    /// Returns the keys currently registered for `character`.
    pub fn lookup(&self, character: char) -> Option<&[PhysicalKey]> {
        self.entries.get(&character).map(Vec::as_slice)
    }

    /// Freezes the table.
    pub fn finish(self) -> Layout {
        debug!(characters = self.entries.len(), "layout table finished");
        Layout {
            entries: self.entries,
        }
    }
}

/// A finished, read-only layout table.
///
/// `Layout` has no interior mutability, so any number of fields and threads
/// can share one through `&Layout` or `Arc<Layout>`.
#[derive(Debug, Clone)]
pub struct Layout {
    entries: HashMap<char, Vec<PhysicalKey>>,
}

impl Layout {
    /// The US 101 baseline with no overrides.
    pub fn us101() -> Self {
        LayoutBuilder::us101().finish()
    }

    /// The US 101 baseline patched for Japanese 106/109 keyboards.
    pub fn jis109() -> Self {
        LayoutBuilder::jis109().finish()
    }

    /// Builds a layout from `baseline` rows plus a batch of override records.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if any record in `records` is malformed.
    pub fn with_overrides<I>(baseline: I, records: &[OverrideRecord]) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = LayoutEntry>,
    {
        let mut builder = LayoutBuilder::from_entries(baseline);
        builder.apply_overrides(records)?;
        Ok(builder.finish())
    }

    /// Returns the keys that type `character`, or `None` if the character
    /// cannot be typed on this layout.
    pub fn lookup(&self, character: char) -> Option<&[PhysicalKey]> {
        self.entries.get(&character).map(Vec::as_slice)
    }

    /// Returns `true` if `character` has a row in this layout.
    pub fn contains(&self, character: char) -> bool {
        self.entries.contains_key(&character)
    }

    /// Number of characters in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over every character in the table, in no particular order.
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::us101()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

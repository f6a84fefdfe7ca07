//! Key sets: the key codes that type "any of these characters".
//!
//! A [`KeySet`] holds two groups of codes.  A keystroke matches if its code is
//! in the group for its Shift state, so `0x41` in the unshifted group means
//! `a` and `0x41` in the shifted group means `A`.
//!
//! Codes are one byte wide, so each group is a 256-bit bitmap ([`CodeSet`]).
//! Membership is a single bit test and merging is a bitwise OR, which makes
//! [`merge`] commutative, associative, and indifferent to duplicates.

use std::fmt;

use crate::keymap::{Layout, PhysicalKey};

/// A set of raw key codes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CodeSet {
    bits: [u64; 4],
}

impl CodeSet {
    /// The set containing no codes.
    pub const EMPTY: CodeSet = CodeSet { bits: [0; 4] };

    /// Adds `code` to the set.
    pub fn insert(&mut self, code: u8) {
        self.bits[usize::from(code >> 6)] |= 1u64 << (code & 0x3F);
    }

    /// Returns `true` if `code` is in the set.
    pub fn contains(&self, code: u8) -> bool {
        self.bits[usize::from(code >> 6)] & (1u64 << (code & 0x3F)) != 0
    }

    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &CodeSet) -> CodeSet {
        let mut bits = self.bits;
        for (word, other_word) in bits.iter_mut().zip(other.bits) {
            *word |= other_word;
        }
        CodeSet { bits }
    }

    /// Number of codes in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if the set contains no codes.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Iterates over the codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&code| self.contains(code))
    }
}

impl fmt::Debug for CodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|code| format!("0x{code:02X}")))
            .finish()
    }
}

impl FromIterator<u8> for CodeSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = CodeSet::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<u8> for CodeSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for code in iter {
            self.insert(code);
        }
    }
}

/// Key codes for a set of characters, partitioned by Shift state.
///
/// `KeySet` is `Copy`.  Merging never touches its inputs, so the shared
/// constants in [`NamedClasses`](crate::NamedClasses) cannot be altered by a
/// caller composing its own policy from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeySet {
    unshifted: CodeSet,
    shifted: CodeSet,
}

impl KeySet {
    /// The key set that matches nothing; the identity for [`merge`].
    pub const EMPTY: KeySet = KeySet {
        unshifted: CodeSet::EMPTY,
        shifted: CodeSet::EMPTY,
    };

    /// Builds a key set directly from two code groups.
    pub fn from_groups(unshifted: CodeSet, shifted: CodeSet) -> Self {
        Self { unshifted, shifted }
    }

    /// Adds one physical key to the group matching its Shift flag.
    pub fn insert(&mut self, key: PhysicalKey) {
        if key.shift {
            self.shifted.insert(key.code);
        } else {
            self.unshifted.insert(key.code);
        }
    }

    /// Returns `true` if `code` typed with the given Shift state is in the set.
    pub fn contains(&self, code: u8, shift: bool) -> bool {
        if shift {
            self.shifted.contains(code)
        } else {
            self.unshifted.contains(code)
        }
    }

    /// Codes matched when Shift is not held.
    pub fn unshifted(&self) -> &CodeSet {
        &self.unshifted
    }

    /// Codes matched when Shift is held.
    pub fn shifted(&self) -> &CodeSet {
        &self.shifted
    }

    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &KeySet) -> KeySet {
        KeySet {
            unshifted: self.unshifted.union(&other.unshifted),
            shifted: self.shifted.union(&other.shifted),
        }
    }

    /// Returns `true` if neither group holds any code.
    pub fn is_empty(&self) -> bool {
        self.unshifted.is_empty() && self.shifted.is_empty()
    }
}

impl FromIterator<PhysicalKey> for KeySet {
    fn from_iter<I: IntoIterator<Item = PhysicalKey>>(iter: I) -> Self {
        let mut set = KeySet::EMPTY;
        for key in iter {
            set.insert(key);
        }
        set
    }
}

impl FromIterator<KeySet> for KeySet {
    fn from_iter<I: IntoIterator<Item = KeySet>>(iter: I) -> Self {
        merge(iter)
    }
}

/// Builds the key set for one character.
///
/// A character with no row in `layout` cannot be typed, so it contributes
/// nothing and the result is [`KeySet::EMPTY`].
pub fn build_from_char(layout: &Layout, character: char) -> KeySet {
    layout
        .lookup(character)
        .map(|keys| keys.iter().copied().collect())
        .unwrap_or(KeySet::EMPTY)
}

/// Builds the key set for every character of `chars`.
pub fn build_from_str(layout: &Layout, chars: &str) -> KeySet {
    chars.chars().map(|c| build_from_char(layout, c)).collect()
}

/// Unions any number of key sets.  Merging nothing yields [`KeySet::EMPTY`].
pub fn merge<I>(sets: I) -> KeySet
where
    I: IntoIterator<Item = KeySet>,
{
    sets.into_iter()
        .fold(KeySet::EMPTY, |acc, set| acc.union(&set))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

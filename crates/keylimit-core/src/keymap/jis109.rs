//! Japanese 106/109-key layout, expressed as overrides on the US 101 baseline.
//!
//! Only rows that differ from US 101 are listed.  The key codes are the ones
//! Windows and browsers report for a JIS keyboard: the digit row carries
//! different shifted symbols, and the OEM keys to the right of `L` and `P`
//! are rearranged (`:` and `@` are unshifted, `;` moves onto `0xBB`).
//! `0xE2` is the extra `\ _` key left of right Shift.

use super::overrides::OverrideRecord;
use super::table::LayoutEntry;
use super::PhysicalKey;

const fn key(code: u8) -> PhysicalKey {
    PhysicalKey::plain(code)
}

const fn shift(code: u8) -> PhysicalKey {
    PhysicalKey::shifted(code)
}

/// Rows replaced on a 106/109 keyboard.
pub const OVERRIDES: &[(char, &[PhysicalKey])] = &[
    ('"', &[shift(0x32)]),
    ('&', &[shift(0x36)]),
    ('\'', &[shift(0x37)]),
    ('(', &[shift(0x38)]),
    (')', &[shift(0x39)]),
    (':', &[key(0xBA), key(0x3B)]),
    ('*', &[shift(0xBA), shift(0x3B), key(0x6A)]),
    (';', &[key(0xBB), key(0x6B)]),
    ('=', &[shift(0xBD), shift(0x6D)]),
    ('@', &[key(0xC0)]),
    ('`', &[shift(0xC0)]),
    ('\\', &[key(0xDC), key(0xE2)]),
    ('^', &[key(0xDE)]),
    ('~', &[shift(0xDE)]),
    ('_', &[shift(0xE2)]),
];

/// Returns the override rows as layout entries.
pub fn entries() -> Vec<LayoutEntry> {
    OVERRIDES
        .iter()
        .map(|&(character, keys)| LayoutEntry::new(character, keys.to_vec()))
        .collect()
}

/// Returns the same data as plain override records.
pub fn overrides() -> Vec<OverrideRecord> {
    entries().into_iter().map(OverrideRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::overrides::validate;

    #[test]
    fn test_overrides_form_a_valid_batch() {
        let validated = validate(&overrides()).expect("JIS data must validate");
        assert_eq!(validated.len(), 15);
    }

    #[test]
    fn test_overrides_round_trip_through_validation_unchanged() {
        assert_eq!(validate(&overrides()).expect("valid"), entries());
    }

    #[test]
    fn test_equals_sign_is_typeable_only_after_jis_override() {
        let eq = OVERRIDES.iter().find(|&&(c, _)| c == '=').expect("'=' row");
        assert_eq!(eq.1, &[shift(0xBD), shift(0x6D)]);
    }
}

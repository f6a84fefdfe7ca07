//! US 101-key layout: the baseline table every other layout patches.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h) and the matching
//! `KeyboardEvent.keyCode` values reported by browsers on a US keyboard.
//!
//! # How this table works
//!
//! Digits and letters follow a regular pattern and are generated:
//!
//! | Characters | Keys                                          |
//! |------------|-----------------------------------------------|
//! | `0`-`9`    | top row `0x30`-`0x39` and keypad `0x60`-`0x69` |
//! | `a`-`z`    | `0x41`-`0x5A` without Shift                   |
//! | `A`-`Z`    | `0x41`-`0x5A` with Shift                      |
//!
//! Everything else lives in [`SYMBOLS`], one row per character.  Keypad
//! operators (`*`, `+`, `-`, `.`, `/`) type the same character whether or not
//! Shift is held, so they are listed in both states.

use super::table::LayoutEntry;
use super::PhysicalKey;

/// `VK_0`; the digit row runs `0x30`-`0x39`.
pub const DIGIT_ROW_BASE: u8 = 0x30;

/// `VK_NUMPAD0`; the numeric keypad runs `0x60`-`0x69`.
pub const NUMPAD_BASE: u8 = 0x60;

/// `VK_A`; letter keys run `0x41`-`0x5A`.
pub const LETTER_BASE: u8 = 0x41;

const fn key(code: u8) -> PhysicalKey {
    PhysicalKey::plain(code)
}

const fn shift(code: u8) -> PhysicalKey {
    PhysicalKey::shifted(code)
}

/// Printable symbols and their keys on a US 101 keyboard.
///
/// `,` appears twice.  Both rows contribute to the character's key list when
/// the baseline is loaded.  The second row (`0xBB` + Shift) is what a US
/// keyboard types as `+`, so it is probably an upstream data error; it stays
/// until it has been re-checked against real hardware.
pub const SYMBOLS: &[(char, &[PhysicalKey])] = &[
    (' ', &[key(0x20)]),
    (')', &[shift(0x30)]),
    ('!', &[shift(0x31)]),
    ('@', &[shift(0x32)]),
    ('#', &[shift(0x33)]),
    ('$', &[shift(0x34)]),
    ('%', &[shift(0x35)]),
    ('^', &[shift(0x36)]),
    ('&', &[shift(0x37)]),
    ('*', &[shift(0x38), key(0x6A), shift(0x6A)]),
    ('(', &[shift(0x39)]),
    // ── OEM keys ─────────────────────────────────────────────────────────────
    (';', &[key(0xBA)]),
    (':', &[shift(0xBA)]),
    ('+', &[shift(0xBB), key(0x6B), shift(0x6B)]),
    (',', &[key(0xBC)]),
    ('<', &[shift(0xBC)]),
    (',', &[shift(0xBB)]),
    ('-', &[key(0xBD), key(0x6D), shift(0x6D)]),
    ('_', &[shift(0xBD)]),
    ('.', &[key(0xBE), key(0x6E), shift(0x6E)]),
    ('>', &[shift(0xBE)]),
    ('/', &[key(0xBF), key(0x6F), shift(0x6F)]),
    ('?', &[shift(0xBF)]),
    ('`', &[key(0xC0)]),
    ('~', &[shift(0xC0)]),
    ('[', &[key(0xDB)]),
    ('{', &[shift(0xDB)]),
    ('\\', &[key(0xDC)]),
    ('|', &[shift(0xDC)]),
    (']', &[key(0xDD)]),
    ('}', &[shift(0xDD)]),
    ('\'', &[key(0xDE)]),
    ('"', &[shift(0xDE)]),
];

/// Returns every baseline row in load order: digits, letters, then symbols.
pub fn entries() -> Vec<LayoutEntry> {
    let mut rows = Vec::with_capacity(10 + 52 + SYMBOLS.len());

    for i in 0..10u8 {
        rows.push(LayoutEntry::new(
            char::from(b'0' + i),
            vec![key(DIGIT_ROW_BASE + i), key(NUMPAD_BASE + i)],
        ));
    }

    for i in 0..26u8 {
        rows.push(LayoutEntry::new(
            char::from(b'A' + i),
            vec![shift(LETTER_BASE + i)],
        ));
        rows.push(LayoutEntry::new(char::from(b'a' + i), vec![key(LETTER_BASE + i)]));
    }

    rows.extend(
        SYMBOLS
            .iter()
            .map(|&(character, keys)| LayoutEntry::new(character, keys.to_vec())),
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_contain_every_digit_with_top_row_and_keypad_keys() {
        let rows = entries();
        for (i, c) in ('0'..='9').enumerate() {
            let row = rows
                .iter()
                .find(|r| r.character == c)
                .expect("digit row must exist");
            let i = i as u8;
            assert_eq!(row.keys, vec![key(0x30 + i), key(0x60 + i)], "digit {c}");
        }
    }

    #[test]
    fn test_entries_map_upper_and_lower_letters_to_the_same_code() {
        let rows = entries();
        let upper = rows.iter().find(|r| r.character == 'Q').expect("Q");
        let lower = rows.iter().find(|r| r.character == 'q').expect("q");
        assert_eq!(upper.keys, vec![shift(0x51)]);
        assert_eq!(lower.keys, vec![key(0x51)]);
    }

    #[test]
    fn test_entries_list_comma_twice() {
        let commas = entries().into_iter().filter(|r| r.character == ',').count();
        assert_eq!(commas, 2);
    }

    #[test]
    fn test_symbols_have_no_equals_sign_row() {
        // The upstream table never listed '='; it stays untypeable on US 101
        // until an override supplies it.
        assert!(SYMBOLS.iter().all(|&(c, _)| c != '='));
    }

    #[test]
    fn test_keypad_operators_are_listed_in_both_shift_states() {
        for c in ['*', '+', '-', '.', '/'] {
            let (_, keys) = SYMBOLS.iter().find(|&&(s, _)| s == c).expect("row");
            let keypad: Vec<_> = keys.iter().filter(|k| (0x6A..=0x6F).contains(&k.code)).collect();
            assert_eq!(keypad.len(), 2, "keypad key for {c:?} must appear plain and shifted");
            assert!(keypad.iter().any(|k| k.shift) && keypad.iter().any(|k| !k.shift));
        }
    }
}

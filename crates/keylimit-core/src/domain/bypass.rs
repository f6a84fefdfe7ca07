//! Keys that are always let through, whatever the field's policy.
//!
//! A field that accepts only digits must still let the user move the caret,
//! delete what was typed, leave the field with Tab, and use Ctrl shortcuts
//! (copy, paste, select all).  None of this depends on the keyboard layout:
//! the codes below are the same on every physical keyboard.

use super::event::KeystrokeEvent;

pub const BACKSPACE: u8 = 0x08;
pub const TAB: u8 = 0x09;
pub const ENTER: u8 = 0x0D;
pub const PAGE_UP: u8 = 0x21;
pub const PAGE_DOWN: u8 = 0x22;
pub const END: u8 = 0x23;
pub const HOME: u8 = 0x24;
pub const ARROW_LEFT: u8 = 0x25;
pub const ARROW_UP: u8 = 0x26;
pub const ARROW_RIGHT: u8 = 0x27;
pub const ARROW_DOWN: u8 = 0x28;
pub const INSERT: u8 = 0x2D;
pub const DELETE: u8 = 0x2E;

/// `VK_F1`.
pub const F1: u8 = 0x70;
/// `VK_F12`.
pub const F12: u8 = 0x7B;

/// Navigation and editing keys, always allowed.
pub const NAVIGATION_KEYS: [u8; 13] = [
    BACKSPACE,
    TAB,
    ENTER,
    PAGE_UP,
    PAGE_DOWN,
    END,
    HOME,
    ARROW_LEFT,
    ARROW_UP,
    ARROW_RIGHT,
    ARROW_DOWN,
    INSERT,
    DELETE,
];

/// Returns `true` if `code` is one of F1-F12.
pub fn is_function_key(code: u8) -> bool {
    (F1..=F12).contains(&code)
}

/// Returns `true` if `code` is a navigation or editing key.
pub fn is_navigation_key(code: u8) -> bool {
    NAVIGATION_KEYS.contains(&code)
}

/// Returns `true` if `event` must be allowed regardless of any policy.
///
/// That is the case when Ctrl is held, when the key is F1-F12, or when it is
/// one of [`NAVIGATION_KEYS`].
pub fn is_bypassed(event: &KeystrokeEvent) -> bool {
    event.ctrl_key || is_function_key(event.key_code) || is_navigation_key(event.key_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_combination_is_bypassed_for_any_code() {
        for code in [0x00, 0x41, 0x56, 0xFF] {
            assert!(is_bypassed(&KeystrokeEvent::new(code).with_ctrl()), "ctrl+0x{code:02X}");
        }
    }

    #[test]
    fn test_all_twelve_function_keys_are_bypassed() {
        let bypassed = (0..=u8::MAX).filter(|&c| is_function_key(c)).count();
        assert_eq!(bypassed, 12);
        assert!(is_bypassed(&KeystrokeEvent::new(F1)));
        assert!(is_bypassed(&KeystrokeEvent::new(F12).with_shift()));
    }

    #[test]
    fn test_codes_adjacent_to_function_range_are_not_bypassed() {
        // 0x6F is keypad '/', 0x7C is F13.
        assert!(!is_bypassed(&KeystrokeEvent::new(0x6F)));
        assert!(!is_bypassed(&KeystrokeEvent::new(0x7C)));
    }

    #[test]
    fn test_navigation_keys_are_bypassed_with_or_without_shift() {
        for code in NAVIGATION_KEYS {
            assert!(is_bypassed(&KeystrokeEvent::new(code)));
            assert!(is_bypassed(&KeystrokeEvent::new(code).with_shift()));
        }
    }

    #[test]
    fn test_escape_and_space_are_not_bypassed() {
        assert!(!is_bypassed(&KeystrokeEvent::new(0x1B)));
        assert!(!is_bypassed(&KeystrokeEvent::new(0x20)));
    }

    #[test]
    fn test_alt_and_meta_do_not_trigger_bypass() {
        assert!(!is_bypassed(&KeystrokeEvent::new(0x41).with_alt()));
        assert!(!is_bypassed(&KeystrokeEvent::new(0x41).with_meta()));
    }
}

//! The per-keystroke decision: allow or deny.
//!
//! # Decision order
//!
//! 1. [`is_bypassed`] – navigation, editing, function, and Ctrl keys are
//!    always allowed.
//! 2. Otherwise the event's code must be in the key set group matching its
//!    Shift state.
//!
//! Alt and Meta are not inspected.  Denying is not an error: an event that
//! matches nothing is simply not allowed, and the caller discards it.

use crate::keymap::Layout;

use super::bypass::is_bypassed;
use super::event::KeystrokeEvent;
use super::key_set::KeySet;
use super::policy::Policy;

/// Decides `event` against an already-resolved key set.
///
/// This is the hot path: a scan of the 13-entry bypass list and one bit test.
pub fn is_allowed(event: &KeystrokeEvent, keys: &KeySet) -> bool {
    if is_bypassed(event) {
        return true;
    }
    keys.contains(event.key_code, event.shift_key)
}

/// Decides `event` by resolving `policy` against `layout` first.
///
/// Use this for policies that change between keystrokes; for a fixed policy,
/// resolve once with [`Policy::resolve`] and call [`is_allowed`].
pub fn is_allowed_by_policy(event: &KeystrokeEvent, policy: &Policy, layout: &Layout) -> bool {
    if is_bypassed(event) {
        return true;
    }
    is_allowed(event, &policy.resolve(layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::key_set::{build_from_char, build_from_str};

    #[test]
    fn test_allows_unshifted_code_only_when_unshifted_group_has_it() {
        let keys = build_from_char(&Layout::us101(), 'a');
        assert!(is_allowed(&KeystrokeEvent::new(0x41), &keys));
        assert!(!is_allowed(&KeystrokeEvent::new(0x41).with_shift(), &keys));
    }

    #[test]
    fn test_allows_shifted_code_only_when_shifted_group_has_it() {
        let keys = build_from_char(&Layout::us101(), 'A');
        assert!(is_allowed(&KeystrokeEvent::new(0x41).with_shift(), &keys));
        assert!(!is_allowed(&KeystrokeEvent::new(0x41), &keys));
    }

    #[test]
    fn test_denies_event_matching_nothing() {
        let keys = build_from_str(&Layout::us101(), "0123456789");
        assert!(!is_allowed(&KeystrokeEvent::new(0x51), &keys));
    }

    #[test]
    fn test_empty_key_set_still_allows_bypassed_keys() {
        assert!(is_allowed(&KeystrokeEvent::new(0x08), &KeySet::EMPTY));
        assert!(is_allowed(&KeystrokeEvent::new(0x51).with_ctrl(), &KeySet::EMPTY));
        assert!(!is_allowed(&KeystrokeEvent::new(0x51), &KeySet::EMPTY));
    }

    #[test]
    fn test_alt_modifier_is_ignored() {
        let keys = build_from_char(&Layout::us101(), 'a');
        assert!(is_allowed(&KeystrokeEvent::new(0x41).with_alt(), &keys));
    }

    #[test]
    fn test_is_allowed_by_policy_matches_pre_resolved_decision() {
        // Arrange
        let layout = Layout::us101();
        let policy = Policy::from("+-");
        let resolved = policy.resolve(&layout);

        // Act / Assert
        for code in 0..=u8::MAX {
            for event in [KeystrokeEvent::new(code), KeystrokeEvent::new(code).with_shift()] {
                assert_eq!(
                    is_allowed_by_policy(&event, &policy, &layout),
                    is_allowed(&event, &resolved),
                    "decision differs for {event:?}"
                );
            }
        }
    }
}

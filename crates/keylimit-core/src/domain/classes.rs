//! The Named Class Registry: precomputed key sets for common character classes.
//!
//! | Class   | Characters                              |
//! |---------|-----------------------------------------|
//! | `digit` | `0-9`                                   |
//! | `hex`   | `0-9 a-f A-F`                           |
//! | `lower` | `a-z`                                   |
//! | `upper` | `A-Z`                                   |
//! | `alpha` | `a-z A-Z`                               |
//! | `alnum` | `a-z A-Z 0-9`                           |
//! | `graph` | `alnum` plus [`GRAPH_SYMBOLS`]          |
//! | `mail`  | policy: `alnum` plus [`MAIL_SYMBOLS`]   |
//!
//! `mail` is a composition rather than a key set of its own, so it exists
//! only as a [`Policy`] returned by [`NamedClasses::policy`].
//!
//! The registry is built once from a finished [`Layout`].  A registry built
//! from the US table and one built from the JIS table hold different codes for
//! the same class.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keymap::Layout;

use super::key_set::{build_from_str, merge, KeySet};
use super::policy::Policy;

pub const DIGITS: &str = "0123456789";
pub const HEX_LETTERS: &str = "abcdefABCDEF";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The printable symbols added to `alnum` to form `graph`.  Space is not
/// included.
pub const GRAPH_SYMBOLS: &str = "!\"#$%&'()*+-,./:;<=>?@[\\]^_`{|}~";

/// The characters added to `alnum` for e-mail addresses.
pub const MAIL_SYMBOLS: &str = "@-_.";

/// Error returned when parsing an unknown class name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassError {
    #[error("unknown character class: {0:?} (expected one of digit, hex, lower, upper, alpha, alnum, graph, mail)")]
    UnknownClass(String),
}

/// The built-in classes, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedClass {
    Digit,
    Hex,
    Lower,
    Upper,
    Alpha,
    Alnum,
    Graph,
    Mail,
}

impl NamedClass {
    /// Every class, in table order.
    pub const ALL: [NamedClass; 8] = [
        NamedClass::Digit,
        NamedClass::Hex,
        NamedClass::Lower,
        NamedClass::Upper,
        NamedClass::Alpha,
        NamedClass::Alnum,
        NamedClass::Graph,
        NamedClass::Mail,
    ];

    /// The lowercase name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            NamedClass::Digit => "digit",
            NamedClass::Hex => "hex",
            NamedClass::Lower => "lower",
            NamedClass::Upper => "upper",
            NamedClass::Alpha => "alpha",
            NamedClass::Alnum => "alnum",
            NamedClass::Graph => "graph",
            NamedClass::Mail => "mail",
        }
    }
}

impl fmt::Display for NamedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedClass {
    type Err = ClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedClass::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| ClassError::UnknownClass(s.to_string()))
    }
}

/// Key sets for the built-in classes, resolved against one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedClasses {
    digit: KeySet,
    hex: KeySet,
    lower: KeySet,
    upper: KeySet,
    alpha: KeySet,
    alnum: KeySet,
    graph: KeySet,
}

impl NamedClasses {
    /// Computes every class from `layout`.
    pub fn build(layout: &Layout) -> Self {
        let digit = build_from_str(layout, DIGITS);
        let hex = merge([digit, build_from_str(layout, HEX_LETTERS)]);
        let lower = build_from_str(layout, LOWERCASE);
        let upper = build_from_str(layout, UPPERCASE);
        let alpha = merge([lower, upper]);
        let alnum = merge([alpha, digit]);
        let graph = merge([alnum, build_from_str(layout, GRAPH_SYMBOLS)]);

        Self {
            digit,
            hex,
            lower,
            upper,
            alpha,
            alnum,
            graph,
        }
    }

    pub fn digit(&self) -> KeySet {
        self.digit
    }

    pub fn hex(&self) -> KeySet {
        self.hex
    }

    pub fn lower(&self) -> KeySet {
        self.lower
    }

    pub fn upper(&self) -> KeySet {
        self.upper
    }

    pub fn alpha(&self) -> KeySet {
        self.alpha
    }

    pub fn alnum(&self) -> KeySet {
        self.alnum
    }

    pub fn graph(&self) -> KeySet {
        self.graph
    }

    /// The e-mail policy: `alnum` plus [`MAIL_SYMBOLS`].
    pub fn mail_policy(&self) -> Policy {
        Policy::from(self.alnum).with_chars(MAIL_SYMBOLS)
    }

    /// Returns the policy for `class`.
    pub fn policy(&self, class: NamedClass) -> Policy {
        match class {
            NamedClass::Digit => Policy::from(self.digit),
            NamedClass::Hex => Policy::from(self.hex),
            NamedClass::Lower => Policy::from(self.lower),
            NamedClass::Upper => Policy::from(self.upper),
            NamedClass::Alpha => Policy::from(self.alpha),
            NamedClass::Alnum => Policy::from(self.alnum),
            NamedClass::Graph => Policy::from(self.graph),
            NamedClass::Mail => self.mail_policy(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::is_allowed;
    use crate::domain::event::KeystrokeEvent;

    fn us_classes() -> (Layout, NamedClasses) {
        let layout = Layout::us101();
        let classes = NamedClasses::build(&layout);
        (layout, classes)
    }

    #[test]
    fn test_digit_class_has_twenty_unshifted_codes() {
        let (_, classes) = us_classes();
        assert_eq!(classes.digit().unshifted().len(), 20);
        assert!(classes.digit().shifted().is_empty());
    }

    #[test]
    fn test_hex_class_allows_a_to_f_in_both_cases_but_not_g() {
        let (_, classes) = us_classes();
        let hex = classes.hex();
        assert!(is_allowed(&KeystrokeEvent::new(0x46), &hex));
        assert!(is_allowed(&KeystrokeEvent::new(0x46).with_shift(), &hex));
        assert!(!is_allowed(&KeystrokeEvent::new(0x47), &hex));
    }

    #[test]
    fn test_lower_and_upper_share_codes_but_not_shift_state() {
        let (_, classes) = us_classes();
        assert_eq!(classes.lower().unshifted(), classes.upper().shifted());
        assert!(classes.lower().shifted().is_empty());
        assert!(classes.upper().unshifted().is_empty());
    }

    #[test]
    fn test_alnum_is_alpha_merged_with_digit() {
        let (_, classes) = us_classes();
        assert_eq!(classes.alnum(), merge([classes.alpha(), classes.digit()]));
    }

    #[test]
    fn test_graph_allows_symbols_but_not_space() {
        let (_, classes) = us_classes();
        let graph = classes.graph();
        assert!(is_allowed(&KeystrokeEvent::new(0x32).with_shift(), &graph)); // '@'
        assert!(is_allowed(&KeystrokeEvent::new(0xDE).with_shift(), &graph)); // '"'
        assert!(!is_allowed(&KeystrokeEvent::new(0x20), &graph));
    }

    #[test]
    fn test_mail_policy_adds_at_sign_to_alnum() {
        // Arrange
        let (layout, classes) = us_classes();

        // Act
        let mail = classes.policy(NamedClass::Mail).resolve(&layout);

        // Assert
        assert!(is_allowed(&KeystrokeEvent::new(0x32).with_shift(), &mail)); // '@'
        assert!(is_allowed(&KeystrokeEvent::new(0xBD).with_shift(), &mail)); // '_'
        assert!(!is_allowed(&KeystrokeEvent::new(0x31).with_shift(), &mail)); // '!'
    }

    #[test]
    fn test_classes_follow_the_layout_they_were_built_from() {
        let us = NamedClasses::build(&Layout::us101());
        let jis = NamedClasses::build(&Layout::jis109());
        // 0xE2 is the JIS-only key typing `\` and `_`.
        assert!(!us.graph().contains(0xE2, false));
        assert!(jis.graph().contains(0xE2, false));
        assert!(jis.graph().contains(0xE2, true));
        assert_ne!(us.graph(), jis.graph());
        assert_eq!(us.alnum(), jis.alnum());
    }

    #[test]
    fn test_named_class_parses_every_name_it_displays() {
        for class in NamedClass::ALL {
            assert_eq!(class.to_string().parse::<NamedClass>(), Ok(class));
        }
    }

    #[test]
    fn test_named_class_rejects_unknown_name() {
        assert_eq!(
            "klimit-digit".parse::<NamedClass>(),
            Err(ClassError::UnknownClass("klimit-digit".to_string()))
        );
    }
}

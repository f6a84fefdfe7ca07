//! # keylimit-core
//!
//! Shared library for KeyLimit containing the keyboard layout tables, the key
//! set algebra, and the per-keystroke decision that restricts which characters
//! a text-entry field accepts.
//!
//! It has zero dependencies on OS APIs, UI frameworks, or event loops.  The
//! host UI layer hands each raw keystroke to [`is_allowed`] and suppresses the
//! keystroke when the answer is `false`.
//!
//! # Architecture overview (for beginners)
//!
//! Keyboard drivers do not report *characters*, they report *key codes*: the
//! identifier of the physical key that went down plus the modifier state.  The
//! same code produces `a` or `A` depending on Shift, and the same character
//! (`5`) can come from two different keys (top row and numeric keypad).  To
//! decide "is this keystroke a digit?" before the character exists, the
//! character class has to be translated into key codes ahead of time.
//!
//! - **`keymap`** – Layout tables mapping each character to the physical keys
//!   that type it.  The US 101 table is the baseline; locale tables such as
//!   the Japanese 106/109 layout are expressed as override records applied
//!   once while the table is being built.
//!
//! - **`domain`** – [`KeySet`]s (the key codes for a set of characters, split
//!   into shifted and unshifted groups), [`Policy`] composition, the bypass
//!   rule for navigation and editing keys, the decision function, and the
//!   precomputed [`NamedClasses`].
//!
//! ```
//! use keylimit_core::{is_allowed, KeystrokeEvent, Layout, NamedClasses, Policy};
//!
//! let layout = Layout::us101();
//! let classes = NamedClasses::build(&layout);
//! let keys = Policy::from(classes.digit()).with_chars(".").resolve(&layout);
//!
//! assert!(is_allowed(&KeystrokeEvent::new(0x35), &keys)); // '5'
//! assert!(is_allowed(&KeystrokeEvent::new(0xBE), &keys)); // '.'
//! assert!(!is_allowed(&KeystrokeEvent::new(0x41), &keys)); // 'a'
//! ```

pub mod domain;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `keylimit_core::Layout` instead of `keylimit_core::keymap::table::Layout`.
pub use domain::bypass::is_bypassed;
pub use domain::classes::{ClassError, NamedClass, NamedClasses};
pub use domain::decision::{is_allowed, is_allowed_by_policy};
pub use domain::event::KeystrokeEvent;
pub use domain::key_set::{build_from_char, build_from_str, merge, CodeSet, KeySet};
pub use domain::policy::{resolve_policy, Policy, PolicyElement};
pub use keymap::overrides::{LayoutError, OverrideRecord};
pub use keymap::table::{Layout, LayoutBuilder, LayoutEntry};
pub use keymap::PhysicalKey;

//! Keyboard layout tables: which physical keys type which character.
//!
//! Key codes are the values browsers report as `KeyboardEvent.keyCode` and
//! Windows reports as Virtual Key codes (`VK_*`).  Both follow the same
//! numbering for the keys a text field cares about, so one byte is enough.
//!
//! The baseline is the US 101 layout ([`us101`]).  Other physical keyboards
//! are described as a list of [`OverrideRecord`]s that replace individual
//! rows of the baseline, for example [`jis109`].

pub mod jis109;
pub mod overrides;
pub mod table;
pub mod us101;

use serde::{Deserialize, Serialize};

pub use overrides::{LayoutError, OverrideRecord};
pub use table::{Layout, LayoutBuilder, LayoutEntry};

/// One physical key press: a key code plus whether Shift must be held.
///
/// Two identifiers are distinct if either field differs, so `0x41` and
/// `0x41 + shift` are separate keys as far as a layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhysicalKey {
    /// Key code as reported by the keyboard driver.
    pub code: u8,
    /// `true` if the character requires the Shift modifier.
    #[serde(default)]
    pub shift: bool,
}

impl PhysicalKey {
    /// A key pressed without Shift.
    pub const fn plain(code: u8) -> Self {
        Self { code, shift: false }
    }

    /// A key pressed with Shift held.
    pub const fn shifted(code: u8) -> Self {
        Self { code, shift: true }
    }
}

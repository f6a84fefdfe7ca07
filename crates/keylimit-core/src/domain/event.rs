//! The keystroke event shape consumed from the host UI layer.

use serde::{Deserialize, Serialize};

/// One key-down notification.
///
/// Field names deserialize from the browser-style shape
/// `{ "keyCode": 65, "shiftKey": true, "ctrlKey": false }`.  `altKey` and
/// `metaKey` are accepted but play no part in any decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeystrokeEvent {
    /// Code of the key that went down.
    pub key_code: u8,
    /// Shift was held.
    #[serde(default)]
    pub shift_key: bool,
    /// Ctrl was held.
    #[serde(default)]
    pub ctrl_key: bool,
    /// Alt was held.
    #[serde(default)]
    pub alt_key: bool,
    /// Meta (Windows / Command) was held.
    #[serde(default)]
    pub meta_key: bool,
}

impl KeystrokeEvent {
    /// An event for `key_code` with no modifiers held.
    pub const fn new(key_code: u8) -> Self {
        Self {
            key_code,
            shift_key: false,
            ctrl_key: false,
            alt_key: false,
            meta_key: false,
        }
    }

    /// Returns the event with Shift held.
    pub const fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Returns the event with Ctrl held.
    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    /// Returns the event with Alt held.
    pub const fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    /// Returns the event with Meta held.
    pub const fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }
}

//! Infrastructure for keylimit-guard.
//!
//! - **`keystroke_source`** – The trait a host UI layer implements to hand
//!   key-down events to a guard and to suppress the ones it rejects.
//! - **`storage`** – Configuration file model and TOML persistence.

pub mod keystroke_source;
pub mod storage;

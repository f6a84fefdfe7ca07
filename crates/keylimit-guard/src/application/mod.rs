//! Application layer use cases.
//!
//! - **`guard_field`** – Binds a policy to one keystroke source and decides
//!   every key-down it reports.  Runs on each keystroke.
//! - **`build_layout`** – Turns a loaded [`GuardConfig`] into the finished
//!   layout, the named classes, and one policy per configured field.  Runs
//!   once at startup, before any field is attached.
//!
//! Neither touches the file system or an OS API; both depend only on
//! `keylimit-core` and the [`KeystrokeSource`] trait.
//!
//! [`GuardConfig`]: crate::infrastructure::storage::config::GuardConfig
//! [`KeystrokeSource`]: crate::infrastructure::keystroke_source::KeystrokeSource

pub mod build_layout;
pub mod guard_field;

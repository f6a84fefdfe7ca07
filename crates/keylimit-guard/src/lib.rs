//! keylimit-guard library entry point.
//!
//! Binds [`keylimit_core`] policies to keystroke sources and loads the layout
//! and field rules from configuration.
//!
//! - **`application`** – [`attach`](application::guard_field::attach) and the
//!   [`FieldGuard`](application::guard_field::FieldGuard) that suppresses
//!   denied keystrokes; building the active layout and field policies from a
//!   loaded config.
//! - **`infrastructure`** – the [`KeystrokeSource`] seam to the host UI
//!   layer, with a scripted mock, and TOML/JSON configuration storage.
//!
//! [`KeystrokeSource`]: infrastructure::keystroke_source::KeystrokeSource

pub mod application;
pub mod infrastructure;

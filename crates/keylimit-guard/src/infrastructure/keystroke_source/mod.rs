//! The seam between a guard and the host UI layer.
//!
//! A host (a GUI toolkit's key-down callback, a terminal reader, a browser
//! bridge) implements [`KeystrokeSource`].  The guard pulls events from the
//! channel returned by [`start`](KeystrokeSource::start) and, for each event
//! it denies, calls [`suppress_current_event`](KeystrokeSource::suppress_current_event)
//! before reading the next one.  Hosts map that call onto their own "prevent
//! default action" mechanism.
//!
//! # Testability
//!
//! [`mock::MockKeystrokeSource`] replays a scripted list of events and counts
//! suppressions, so guards can be tested without a UI.

use std::sync::mpsc;

use keylimit_core::KeystrokeEvent;

pub mod mock;

/// Error type for keystroke source operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("keystroke source has already been started")]
    AlreadyStarted,
    #[error("keystroke source unavailable: {0}")]
    Unavailable(String),
}

/// Trait abstracting keystroke delivery from a text-entry field.
pub trait KeystrokeSource: Send {
    /// Starts delivering key-down events.  The channel closes when the field
    /// goes away.
    fn start(&self) -> Result<mpsc::Receiver<KeystrokeEvent>, SourceError>;
    /// Stops delivery and releases host resources.
    fn stop(&self);
    /// Suppresses the event most recently received from the channel.
    fn suppress_current_event(&self);
}

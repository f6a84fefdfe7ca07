//! Mock keystroke source for tests.
//!
//! Replays a fixed script of [`KeystrokeEvent`]s without a UI and counts how
//! often the guard asked for the current event to be suppressed.

use std::sync::{mpsc, Mutex};

use keylimit_core::KeystrokeEvent;

use super::{KeystrokeSource, SourceError};

/// A [`KeystrokeSource`] that delivers a scripted list of events once.
///
/// The whole script is queued on `start()` and the sending half is dropped,
/// so a guard reading the channel stops after the last event.
pub struct MockKeystrokeSource {
    script: Mutex<Option<Vec<KeystrokeEvent>>>,
    suppress_count: Mutex<usize>,
    stopped: Mutex<bool>,
}

impl MockKeystrokeSource {
    /// Creates a source that will replay `events` in order.
    pub fn with_events(events: Vec<KeystrokeEvent>) -> Self {
        Self {
            script: Mutex::new(Some(events)),
            suppress_count: Mutex::new(0),
            stopped: Mutex::new(false),
        }
    }

    /// Number of times [`suppress_current_event`] was called.
    ///
    /// [`suppress_current_event`]: KeystrokeSource::suppress_current_event
    pub fn suppress_count(&self) -> usize {
        *self.suppress_count.lock().expect("lock poisoned")
    }

    /// Returns `true` once [`stop`](KeystrokeSource::stop) has been called.
    pub fn is_stopped(&self) -> bool {
        *self.stopped.lock().expect("lock poisoned")
    }
}

impl KeystrokeSource for MockKeystrokeSource {
    fn start(&self) -> Result<mpsc::Receiver<KeystrokeEvent>, SourceError> {
        let events = self
            .script
            .lock()
            .expect("lock poisoned")
            .take()
            .ok_or(SourceError::AlreadyStarted)?;

        let (tx, rx) = mpsc::channel();
        for event in events {
            // The receiver is alive until we return it.
            let _ = tx.send(event);
        }
        Ok(rx)
    }

    fn stop(&self) {
        *self.stopped.lock().expect("lock poisoned") = true;
    }

    fn suppress_current_event(&self) {
        *self.suppress_count.lock().expect("lock poisoned") += 1;
    }
}

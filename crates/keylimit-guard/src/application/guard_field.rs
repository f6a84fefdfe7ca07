//! FieldGuard: decides every keystroke a field receives.
//!
//! [`attach`] resolves the field's policy against the active layout once and
//! binds the result to a [`KeystrokeSource`].  From then on each key-down is
//! checked with [`is_allowed`]; a denied keystroke is suppressed through the
//! source and never reaches the field.
//!
//! A guard holds no state across keystrokes apart from its counters, so any
//! number of guards for different fields can run side by side.

use keylimit_core::{is_allowed, KeySet, KeystrokeEvent, Layout, Policy};
use tracing::{info, trace};

use crate::infrastructure::keystroke_source::{KeystrokeSource, SourceError};

/// What the host should do with a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Let the keystroke reach the field.
    Accept,
    /// Prevent the keystroke's default action.
    Suppress,
}

impl Disposition {
    /// Returns `true` for [`Disposition::Accept`].
    pub fn is_accept(self) -> bool {
        self == Disposition::Accept
    }
}

/// Counts of decisions made by [`FieldGuard::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardStats {
    pub accepted: u64,
    pub suppressed: u64,
}

/// A policy bound to one keystroke source.
pub struct FieldGuard<S: KeystrokeSource> {
    source: S,
    keys: KeySet,
}

/// Binds `policy`, resolved against `layout`, to `source`.
pub fn attach<S: KeystrokeSource>(source: S, layout: &Layout, policy: &Policy) -> FieldGuard<S> {
    FieldGuard {
        source,
        keys: policy.resolve(layout),
    }
}

impl<S: KeystrokeSource> FieldGuard<S> {
    /// The resolved key set this guard checks against.
    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    /// The bound source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Decides one keystroke, suppressing it through the source if denied.
    pub fn handle(&self, event: &KeystrokeEvent) -> Disposition {
        if is_allowed(event, &self.keys) {
            return Disposition::Accept;
        }
        trace!(
            key_code = event.key_code,
            shift = event.shift_key,
            "suppressing keystroke"
        );
        self.source.suppress_current_event();
        Disposition::Suppress
    }

    /// Handles keystrokes until the source's channel closes, then stops the
    /// source.
    ///
    /// # Errors
    ///
    /// Returns the [`SourceError`] from [`KeystrokeSource::start`].
    pub fn run(&self) -> Result<GuardStats, SourceError> {
        let events = self.source.start()?;
        info!("field guard started");

        let mut stats = GuardStats::default();
        for event in events.iter() {
            match self.handle(&event) {
                Disposition::Accept => stats.accepted += 1,
                Disposition::Suppress => stats.suppressed += 1,
            }
        }

        self.source.stop();
        info!(
            accepted = stats.accepted,
            suppressed = stats.suppressed,
            "field guard stopped"
        );
        Ok(stats)
    }

    /// Releases the source.
    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use keylimit_core::NamedClasses;
    use mockall::{mock, Sequence};

    use super::*;

    mock! {
        Source {}
        impl KeystrokeSource for Source {
            fn start(&self) -> Result<mpsc::Receiver<KeystrokeEvent>, SourceError>;
            fn stop(&self);
            fn suppress_current_event(&self);
        }
    }

    fn digit_policy(layout: &Layout) -> Policy {
        Policy::from(NamedClasses::build(layout).digit())
    }

    #[test]
    fn test_handle_accepts_allowed_key_without_touching_source() {
        // Arrange
        let layout = Layout::us101();
        let mut source = MockSource::new();
        source.expect_suppress_current_event().times(0);
        let guard = attach(source, &layout, &digit_policy(&layout));

        // Act
        let disposition = guard.handle(&KeystrokeEvent::new(0x37));

        // Assert
        assert_eq!(disposition, Disposition::Accept);
    }

    #[test]
    fn test_handle_suppresses_denied_key_exactly_once() {
        let layout = Layout::us101();
        let mut source = MockSource::new();
        source.expect_suppress_current_event().times(1).return_const(());
        let guard = attach(source, &layout, &digit_policy(&layout));

        assert_eq!(guard.handle(&KeystrokeEvent::new(0x41)), Disposition::Suppress);
    }

    #[test]
    fn test_handle_accepts_navigation_key_under_digit_policy() {
        let layout = Layout::us101();
        let mut source = MockSource::new();
        source.expect_suppress_current_event().times(0);
        let guard = attach(source, &layout, &digit_policy(&layout));

        assert!(guard.handle(&KeystrokeEvent::new(0x2E)).is_accept());
    }

    #[test]
    fn test_run_starts_handles_then_stops_in_order() {
        // Arrange
        let layout = Layout::us101();
        let (tx, rx) = mpsc::channel();
        for event in [
            KeystrokeEvent::new(0x31),
            KeystrokeEvent::new(0x51),
            KeystrokeEvent::new(0x09),
        ] {
            tx.send(event).expect("receiver alive");
        }
        drop(tx);

        let mut seq = Sequence::new();
        let mut source = MockSource::new();
        source
            .expect_start()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move || Ok(rx));
        source
            .expect_suppress_current_event()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        source
            .expect_stop()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let guard = attach(source, &layout, &digit_policy(&layout));

        // Act
        let stats = guard.run().expect("run must succeed");

        // Assert
        assert_eq!(
            stats,
            GuardStats {
                accepted: 2,
                suppressed: 1
            }
        );
    }

    #[test]
    fn test_run_propagates_start_failure_without_stopping() {
        let layout = Layout::us101();
        let mut source = MockSource::new();
        source
            .expect_start()
            .times(1)
            .return_once(|| Err(SourceError::Unavailable("no window".to_string())));
        source.expect_stop().times(0);
        let guard = attach(source, &layout, &digit_policy(&layout));

        assert_eq!(
            guard.run(),
            Err(SourceError::Unavailable("no window".to_string()))
        );
    }

    #[test]
    fn test_attach_resolves_policy_against_given_layout() {
        let layout = Layout::jis109();
        let guard = attach(MockSource::new(), &layout, &Policy::from("@"));
        assert!(guard.keys().contains(0xC0, false));
        assert!(!guard.keys().contains(0x32, true));
    }
}

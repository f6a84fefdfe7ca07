//! Domain logic for KeyLimit.
//!
//! Everything here is pure: functions take a finished [`Layout`] and values,
//! and return values.  There is no I/O and no shared mutable state, so the
//! decision function can run on any number of independent event streams at
//! once.
//!
//! Data flows in one direction:
//!
//! ```text
//!  Layout ──► key_set (build / merge) ──► classes (named key sets)
//!                                      └─► policy (resolve) ──► decision
//!                                                                 ▲
//!                                                     bypass ─────┘ (checked first)
//! ```
//!
//! [`Layout`]: crate::keymap::Layout

pub mod bypass;
pub mod classes;
pub mod decision;
pub mod event;
pub mod key_set;
pub mod policy;

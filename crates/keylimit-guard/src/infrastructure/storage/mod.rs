//! Configuration storage.

pub mod config;

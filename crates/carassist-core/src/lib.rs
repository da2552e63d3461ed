//! carassist-core - Core library for Car assist
//!
//! This crate holds the head unit's user preference record, the typed
//! key-value adapter it persists through, and the `SQLite` backend used by
//! the CLI and tests.

pub mod db;
pub mod error;
pub mod models;
pub mod prefs;
pub mod util;

pub use error::{Error, Result};
pub use models::Settings;
pub use prefs::{PreferenceKind, PreferenceSink, PreferenceSource, PreferenceValue, Preferences};

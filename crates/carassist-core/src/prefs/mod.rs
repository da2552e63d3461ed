//! Typed key-value adapter between the settings record and its storage.
//!
//! A [`PreferenceSource`] answers typed reads with a caller-supplied default,
//! and a [`PreferenceSink`] buffers typed writes until [`PreferenceSink::commit`].
//! Backends only have to provide raw value lookup and a commit.

mod memory;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use memory::{Preferences, PreferencesEditor};

/// Storage type of a preference value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKind {
    /// Boolean flag
    Bool,
    /// 32-bit signed integer
    Int,
    /// UTF-8 text
    Text,
}

impl PreferenceKind {
    /// Stable name used in the database `kind` column
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for PreferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PreferenceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bool" => Ok(Self::Bool),
            "int" => Ok(Self::Int),
            "text" => Ok(Self::Text),
            other => Err(Error::InvalidValue(format!(
                "unknown preference kind '{other}'"
            ))),
        }
    }
}

/// A single stored preference value
///
/// Serializes untagged, so a map of values reads as plain JSON:
/// `{"bAutoOpenBT": true, "mCongestion": 1, "mCarType": "0"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Int(i32),
    Text(String),
}

impl PreferenceValue {
    pub const fn kind(&self) -> PreferenceKind {
        match self {
            Self::Bool(_) => PreferenceKind::Bool,
            Self::Int(_) => PreferenceKind::Int,
            Self::Text(_) => PreferenceKind::Text,
        }
    }

    /// Encode for a text column. Pair with [`PreferenceValue::decode`].
    pub fn encode(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }

    /// Decode a text column written by [`PreferenceValue::encode`]
    pub fn decode(kind: PreferenceKind, raw: &str) -> Result<Self> {
        match kind {
            PreferenceKind::Bool => match raw {
                "true" | "1" => Ok(Self::Bool(true)),
                "false" | "0" => Ok(Self::Bool(false)),
                _ => Err(Error::InvalidValue(format!("'{raw}' is not a bool"))),
            },
            PreferenceKind::Int => raw
                .parse()
                .map(Self::Int)
                .map_err(|error| Error::InvalidValue(format!("'{raw}' is not an int: {error}"))),
            PreferenceKind::Text => Ok(Self::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
        }
    }
}

/// Read side of a key-value store
///
/// Only [`PreferenceSource::value`] is required. The typed getters return
/// `default` for missing keys, and also for keys stored with another kind.
pub trait PreferenceSource {
    /// Raw stored value for `key`
    fn value(&self, key: &str) -> Option<&PreferenceValue>;

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.value(key) {
            Some(PreferenceValue::Bool(value)) => *value,
            Some(other) => {
                warn_kind_mismatch(key, PreferenceKind::Bool, other);
                default
            }
            None => default,
        }
    }

    fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.value(key) {
            Some(PreferenceValue::Int(value)) => *value,
            Some(other) => {
                warn_kind_mismatch(key, PreferenceKind::Int, other);
                default
            }
            None => default,
        }
    }

    fn get_text(&self, key: &str, default: &str) -> String {
        match self.value(key) {
            Some(PreferenceValue::Text(value)) => value.clone(),
            Some(other) => {
                warn_kind_mismatch(key, PreferenceKind::Text, other);
                default.to_string()
            }
            None => default.to_string(),
        }
    }
}

/// Write side of a key-value store
///
/// Puts are buffered; nothing reaches the store before `commit` returns `Ok`.
/// The last put for a key wins.
pub trait PreferenceSink {
    fn put(&mut self, key: &str, value: PreferenceValue);

    /// Write all buffered values synchronously
    fn commit(&mut self) -> Result<()>;

    fn put_bool(&mut self, key: &str, value: bool) {
        self.put(key, PreferenceValue::Bool(value));
    }

    fn put_int(&mut self, key: &str, value: i32) {
        self.put(key, PreferenceValue::Int(value));
    }

    fn put_text(&mut self, key: &str, value: &str) {
        self.put(key, PreferenceValue::Text(value.to_string()));
    }
}

fn warn_kind_mismatch(key: &str, expected: PreferenceKind, found: &PreferenceValue) {
    tracing::warn!(
        key,
        %expected,
        found = %found.kind(),
        "Stored preference has unexpected kind, using default"
    );
}

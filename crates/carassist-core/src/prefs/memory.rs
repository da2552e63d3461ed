//! In-memory preference map

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{PreferenceSink, PreferenceSource, PreferenceValue};
use crate::error::Result;

/// Ordered in-memory key-value map
///
/// Serializes as a flat JSON object keyed by preference name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    values: BTreeMap<String, PreferenceValue>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a buffered edit; changes land on `commit`
    pub fn edit(&mut self) -> PreferencesEditor<'_> {
        PreferencesEditor {
            target: self,
            pending: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PreferenceValue> {
        self.values.remove(key)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PreferenceValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, PreferenceValue)> for Preferences {
    fn from_iter<I: IntoIterator<Item = (String, PreferenceValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl PreferenceSource for Preferences {
    fn value(&self, key: &str) -> Option<&PreferenceValue> {
        self.values.get(key)
    }
}

/// Buffered writer over a [`Preferences`] map
pub struct PreferencesEditor<'a> {
    target: &'a mut Preferences,
    pending: BTreeMap<String, PreferenceValue>,
}

impl PreferenceSink for PreferencesEditor<'_> {
    fn put(&mut self, key: &str, value: PreferenceValue) {
        self.pending.insert(key.to_string(), value);
    }

    fn commit(&mut self) -> Result<()> {
        self.target.values.append(&mut self.pending);
        Ok(())
    }
}

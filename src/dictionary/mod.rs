//! Slang dictionary: abbreviation -> expansion.
//!
//! Keys are stored in canonical uppercase form, values verbatim (trimmed).
//! The dictionary is built once at startup and shared read-only afterwards.

mod loader;

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use loader::{parse_line, LoadStats};

/// A single abbreviation with its expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlangEntry {
    pub abbreviation: String,
    pub expansion: String,
}

impl SlangEntry {
    pub fn new(abbreviation: impl Into<String>, expansion: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            expansion: expansion.into(),
        }
    }
}

/// Canonical uppercase key used for storage and lookup.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlangDictionary {
    entries: BTreeMap<String, String>,
}

impl SlangDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, normalizing the key. Empty keys are ignored.
    /// Returns `true` when the entry was stored.
    pub fn insert(&mut self, abbreviation: &str, expansion: &str) -> bool {
        let key = normalize_key(abbreviation);
        if key.is_empty() {
            return false;
        }
        self.entries.insert(key, expansion.trim().to_string());
        true
    }

    /// Case-insensitive lookup on the abbreviation.
    pub fn get(&self, abbreviation: &str) -> Option<&str> {
        self.entries
            .get(&normalize_key(abbreviation))
            .map(String::as_str)
    }

    /// Lookup by an already-canonical (uppercase) key.
    pub(crate) fn get_canonical(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    pub fn entries(&self) -> impl Iterator<Item = SlangEntry> + '_ {
        self.entries
            .iter()
            .map(|(k, v)| SlangEntry::new(k.clone(), v.clone()))
    }

    /// Entries whose abbreviation or expansion contains `query`, ignoring case.
    /// Surrounding whitespace in `query` is ignored.
    pub fn search(&self, query: &str) -> SlangDictionary {
        let needle = query.trim().to_lowercase();
        let entries = self
            .entries
            .iter()
            .filter(|(k, v)| {
                k.to_lowercase().contains(&needle) || v.to_lowercase().contains(&needle)
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        SlangDictionary { entries }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for SlangDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = SlangDictionary::new();
        for (k, v) in iter {
            dict.insert(k.as_ref(), v.as_ref());
        }
        dict
    }
}

impl Serialize for SlangDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Deserializes a plain map, normalizing keys like [`SlangDictionary::insert`].
impl<'de> Deserialize<'de> for SlangDictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SlangDictionary {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Configuration key/value store.
//!
//! Backs the pure key-value context: a keyed collection with no game
//! object behind it. Keys are case-normalized; the first-seen spelling is
//! kept for display.

use std::collections::BTreeMap;

use starscript_foundation::{TypeHint, Value};

/// One configuration entry.
#[derive(Clone, Debug)]
struct ConfigEntry {
    /// Display spelling of the key (first seen).
    display: String,
    value: Value,
}

/// Ordered configuration store.
#[derive(Clone, Debug, Default)]
pub struct ConfigStore {
    /// Upper-cased key -> entry.
    entries: BTreeMap<String, ConfigEntry>,
}

impl ConfigStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a configuration value, creating the key if needed.
    pub fn set(&mut self, key: &str, value: Value) {
        let normalized = key.to_ascii_uppercase();
        self.entries
            .entry(normalized)
            .and_modify(|e| e.value = value.clone())
            .or_insert_with(|| ConfigEntry {
                display: key.to_string(),
                value,
            });
    }

    /// Reads a configuration value by case-insensitive key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .get(&key.to_ascii_uppercase())
            .map(|e| &e.value)
    }

    /// Returns true if the key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_ascii_uppercase())
    }

    /// Iterates (display name, value) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries
            .values()
            .map(|e| (e.display.as_str(), &e.value))
    }

    /// Iterates (display name, type hint) pairs in key order, hints derived
    /// from the stored value's variant.
    pub fn properties(&self) -> impl Iterator<Item = (&str, TypeHint)> + '_ {
        self.entries
            .values()
            .map(|e| (e.display.as_str(), hint_of(&e.value)))
    }

    /// Returns the key at a stable enumeration position, if any.
    #[must_use]
    pub fn key_at(&self, position: usize) -> Option<&str> {
        self.entries.values().nth(position).map(|e| e.display.as_str())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives the declared type of a configuration value.
fn hint_of(value: &Value) -> TypeHint {
    match value {
        Value::Bool(_) => TypeHint::Bool,
        Value::Int(_) => TypeHint::Int,
        Value::Float(_) => TypeHint::Float,
        Value::Str(_) => TypeHint::String,
        _ => TypeHint::None,
    }
}

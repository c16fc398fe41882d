//! Named keymap registry.
//!
//! Keymaps bind input keys to script command atoms. The registry is owned
//! by the [`World`](crate::World) and addressed through [`KeymapRef`]
//! handles, so a `Value::Keymap` is a shared reference: mutation through
//! one holder is visible to every other.

use std::collections::HashMap;

use tracing::debug;

use starscript_foundation::{AtomId, Error, KeymapRef, Result};

/// A single named key-binding table.
#[derive(Clone, Debug)]
pub struct Keymap {
    name: String,
    bindings: HashMap<String, AtomId>,
}

impl Keymap {
    fn new(name: String) -> Self {
        Self {
            name,
            bindings: HashMap::new(),
        }
    }

    /// Returns the keymap's registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the command bound to a key, if any.
    #[must_use]
    pub fn command_for(&self, key: &str) -> Option<AtomId> {
        self.bindings.get(key).copied()
    }

    /// Returns the number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no keys are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Registry of every named keymap in the session.
#[derive(Debug, Default)]
pub struct KeymapRegistry {
    maps: Vec<Keymap>,
    /// Upper-cased name -> handle.
    by_name: HashMap<String, KeymapRef>,
}

impl KeymapRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new keymap.
    ///
    /// The name must be an identifier; creation fails if a keymap with
    /// this name (case-insensitively) already exists.
    pub fn create(&mut self, name: &str) -> Result<KeymapRef> {
        if !is_identifier(name) {
            return Err(Error::range_error());
        }
        let normalized = name.to_ascii_uppercase();
        if self.by_name.contains_key(&normalized) {
            return Err(Error::keymap_exists(normalized));
        }

        let index = u32::try_from(self.maps.len())
            .map_err(|_| Error::internal("keymap registry exhausted"))?;
        let handle = KeymapRef::new(index);
        self.maps.push(Keymap::new(normalized.clone()));
        self.by_name.insert(normalized.clone(), handle);
        debug!(target: "script", keymap = %normalized, "created keymap");
        Ok(handle)
    }

    /// Resolves a keymap by name.
    pub fn lookup(&self, name: &str) -> Result<KeymapRef> {
        let normalized = name.to_ascii_uppercase();
        self.by_name
            .get(&normalized)
            .copied()
            .ok_or_else(|| Error::keymap_unknown(normalized))
    }

    /// Reads a keymap through its handle.
    #[must_use]
    pub fn get(&self, handle: KeymapRef) -> Option<&Keymap> {
        self.maps.get(handle.index() as usize)
    }

    /// Binds a key to a command atom, replacing any previous binding.
    pub fn add_key(&mut self, handle: KeymapRef, key: &str, command: AtomId) -> Result<()> {
        if key.is_empty() {
            return Err(Error::range_error());
        }
        let map = self
            .maps
            .get_mut(handle.index() as usize)
            .ok_or_else(|| Error::internal("stale keymap handle"))?;
        map.bindings.insert(key.to_string(), command);
        debug!(target: "script", keymap = %map.name, key, "bound key");
        Ok(())
    }

    /// Returns the number of registered keymaps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Returns true if no keymaps are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

/// Checks the identifier syntax keymap names must follow.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

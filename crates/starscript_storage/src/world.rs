//! The world: every process-wide registry the interpreter core touches.
//!
//! Operators receive the world by reference on every dispatch call; there
//! are no ambient globals. The universe and configuration are behind
//! shared handles so contexts can keep reading them after the dispatch
//! call that created the context has returned.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use starscript_foundation::AtomTable;

use crate::config::ConfigStore;
use crate::keymap::KeymapRegistry;
use crate::universe::Universe;

/// Single-threaded shared handle.
pub type Shared<T> = Rc<RefCell<T>>;

/// Ambient interpreter state: atom table, keymap registry, object arena,
/// and configuration.
pub struct World {
    atoms: AtomTable,
    keymaps: KeymapRegistry,
    universe: Shared<Universe>,
    config: Shared<ConfigStore>,
}

impl World {
    /// Creates a world with empty registries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            atoms: AtomTable::new(),
            keymaps: KeymapRegistry::new(),
            universe: Rc::new(RefCell::new(Universe::new())),
            config: Rc::new(RefCell::new(ConfigStore::new())),
        }
    }

    /// Returns the atom table.
    #[must_use]
    pub fn atoms(&self) -> &AtomTable {
        &self.atoms
    }

    /// Returns the atom table mutably.
    pub fn atoms_mut(&mut self) -> &mut AtomTable {
        &mut self.atoms
    }

    /// Returns the keymap registry.
    #[must_use]
    pub fn keymaps(&self) -> &KeymapRegistry {
        &self.keymaps
    }

    /// Returns the keymap registry mutably.
    pub fn keymaps_mut(&mut self) -> &mut KeymapRegistry {
        &mut self.keymaps
    }

    /// Returns the shared object arena.
    #[must_use]
    pub fn universe(&self) -> &Shared<Universe> {
        &self.universe
    }

    /// Returns the shared configuration store.
    #[must_use]
    pub fn config(&self) -> &Shared<ConfigStore> {
        &self.config
    }

    /// Writes a message to the script log sink.
    pub fn log(&self, message: &str) {
        info!(target: "script", "{message}");
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

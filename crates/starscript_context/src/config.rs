//! The configuration context: a pure key-value context with no backing
//! game object.
//!
//! This context proves the property-access contract does not require a
//! domain object: the "properties" are the configuration keys themselves,
//! the hints are derived from the stored values, and `object_ref` is
//! `None`. All keys are writable.

use starscript_foundation::{
    Context, Error, ObjectId, PropertyAcceptor, PropertyIndex, Result, Value,
};
use starscript_storage::{ConfigStore, Shared};

/// Context over the configuration store.
pub struct ConfigContext {
    config: Shared<ConfigStore>,
}

impl ConfigContext {
    /// Creates a context over a configuration store. Unlike object
    /// contexts this always succeeds; an empty store is a context with no
    /// properties.
    #[must_use]
    pub fn new(config: &Shared<ConfigStore>) -> Self {
        Self {
            config: Shared::clone(config),
        }
    }

    fn key_at(&self, index: PropertyIndex) -> Result<String> {
        self.config
            .borrow()
            .key_at(index.index())
            .map(str::to_string)
            .ok_or_else(|| Error::internal("property index out of table"))
    }
}

impl Context for ConfigContext {
    fn lookup(&self, name: &str) -> Option<PropertyIndex> {
        let config = self.config.borrow();
        (0..config.len())
            .find(|&i| {
                config
                    .key_at(i)
                    .is_some_and(|key| key.eq_ignore_ascii_case(name))
            })
            .map(PropertyIndex::new)
    }

    fn get(&mut self, index: PropertyIndex) -> Result<Value> {
        let key = self.key_at(index)?;
        Ok(self
            .config
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or(Value::Null))
    }

    fn set(&mut self, index: PropertyIndex, value: &Value) -> Result<()> {
        let key = self.key_at(index)?;
        self.config.borrow_mut().set(&key, value.clone());
        Ok(())
    }

    fn next(&mut self) -> bool {
        // One logical object: the key set itself.
        false
    }

    fn clone_context(&self) -> Box<dyn Context> {
        Box::new(Self {
            config: Shared::clone(&self.config),
        })
    }

    fn enumerate(&self, acceptor: &mut dyn PropertyAcceptor) {
        for (name, hint) in self.config.borrow().properties() {
            acceptor.add_property(name, hint);
        }
    }

    fn object_ref(&self) -> Option<ObjectId> {
        None
    }

    fn name(&self) -> &str {
        "CONFIG"
    }
}

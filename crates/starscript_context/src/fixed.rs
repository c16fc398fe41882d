//! Single-object contexts over fixed-id objects.

use starscript_foundation::{
    Context, Error, ObjectId, PropertyAcceptor, PropertyIndex, Result, Value,
};
use starscript_storage::{ObjectKind, Shared, Universe};

use crate::property::{family_name, lookup_in, read_property, table_for, PropertyDef};

/// Context over exactly one object (an explosion marker, a starchart
/// drawing). There is no family to iterate: `next` is immediately false.
pub struct FixedContext {
    universe: Shared<Universe>,
    kind: ObjectKind,
    id: ObjectId,
}

impl FixedContext {
    /// Creates a context over the object with the given external id, or
    /// `None` if no live object of the family has it.
    #[must_use]
    pub fn new(universe: &Shared<Universe>, kind: ObjectKind, ext_id: i32) -> Option<Self> {
        let id = universe.borrow().find(kind, ext_id)?;
        Some(Self {
            universe: Shared::clone(universe),
            kind,
            id,
        })
    }

    fn table(&self) -> &'static [PropertyDef] {
        table_for(self.kind)
    }
}

impl Context for FixedContext {
    fn lookup(&self, name: &str) -> Option<PropertyIndex> {
        lookup_in(self.table(), name)
    }

    fn get(&mut self, index: PropertyIndex) -> Result<Value> {
        let prop = self
            .table()
            .get(index.index())
            .ok_or_else(|| Error::internal("property index out of table"))?;
        Ok(read_property(&self.universe.borrow(), self.id, prop))
    }

    fn set(&mut self, index: PropertyIndex, value: &Value) -> Result<()> {
        let prop = self
            .table()
            .get(index.index())
            .ok_or_else(|| Error::internal("property index out of table"))?;
        if !prop.writable {
            return Err(Error::not_assignable());
        }
        let mut universe = self.universe.borrow_mut();
        match universe.get_mut(self.id) {
            None => Err(Error::not_assignable()),
            Some(object) => {
                object.set_field(prop.name, value.clone());
                Ok(())
            }
        }
    }

    fn next(&mut self) -> bool {
        false
    }

    fn clone_context(&self) -> Box<dyn Context> {
        Box::new(Self {
            universe: Shared::clone(&self.universe),
            kind: self.kind,
            id: self.id,
        })
    }

    fn enumerate(&self, acceptor: &mut dyn PropertyAcceptor) {
        for prop in self.table() {
            acceptor.add_property(prop.name, prop.hint);
        }
    }

    fn object_ref(&self) -> Option<ObjectId> {
        Some(self.id)
    }

    fn name(&self) -> &str {
        family_name(self.kind)
    }
}

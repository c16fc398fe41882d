//! Iteration contexts over whole object families.

use starscript_foundation::{
    Context, Error, ObjectId, PropertyAcceptor, PropertyIndex, Result, Value,
};
use starscript_storage::{ObjectKind, Shared, Universe};

use crate::property::{family_name, lookup_in, read_property, table_for, PropertyDef};

/// Cursor position: the external id is kept alongside the arena id so the
/// cursor can advance past a current object that was deleted under it.
#[derive(Copy, Clone, Debug)]
struct Position {
    ext_id: i32,
    id: ObjectId,
}

/// Context iterating one object family in ascending external-id order.
///
/// The cursor tolerates concurrent deletion: reads of a deleted current
/// object yield the empty value, and `next` resumes from the deleted
/// object's id.
pub struct FamilyContext {
    universe: Shared<Universe>,
    kind: ObjectKind,
    position: Option<Position>,
}

impl FamilyContext {
    /// Creates a context positioned on the family's first object, or
    /// `None` if the family is empty.
    #[must_use]
    pub fn first(universe: &Shared<Universe>, kind: ObjectKind) -> Option<Self> {
        let id = universe.borrow().first(kind)?;
        Some(Self::from_id(universe, kind, id))
    }

    /// Creates a context positioned on a specific object, or `None` if no
    /// live object of the family has that external id.
    #[must_use]
    pub fn at(universe: &Shared<Universe>, kind: ObjectKind, ext_id: i32) -> Option<Self> {
        let id = universe.borrow().find(kind, ext_id)?;
        Some(Self {
            universe: Shared::clone(universe),
            kind,
            position: Some(Position { ext_id, id }),
        })
    }

    fn from_id(universe: &Shared<Universe>, kind: ObjectKind, id: ObjectId) -> Self {
        let ext_id = universe
            .borrow()
            .get(id)
            .map_or(0, starscript_storage::GameObject::ext_id);
        Self {
            universe: Shared::clone(universe),
            kind,
            position: Some(Position { ext_id, id }),
        }
    }

    fn table(&self) -> &'static [PropertyDef] {
        table_for(self.kind)
    }
}

impl Context for FamilyContext {
    fn lookup(&self, name: &str) -> Option<PropertyIndex> {
        lookup_in(self.table(), name)
    }

    fn get(&mut self, index: PropertyIndex) -> Result<Value> {
        let prop = self
            .table()
            .get(index.index())
            .ok_or_else(|| Error::internal("property index out of table"))?;
        match self.position {
            None => Ok(Value::Null),
            Some(pos) => Ok(read_property(&self.universe.borrow(), pos.id, prop)),
        }
    }

    fn set(&mut self, index: PropertyIndex, value: &Value) -> Result<()> {
        let prop = self
            .table()
            .get(index.index())
            .ok_or_else(|| Error::internal("property index out of table"))?;
        if !prop.writable {
            return Err(Error::not_assignable());
        }
        let Some(pos) = self.position else {
            return Err(Error::not_assignable());
        };
        let mut universe = self.universe.borrow_mut();
        match universe.get_mut(pos.id) {
            // The referent is gone; the write has nowhere to land.
            None => Err(Error::not_assignable()),
            Some(object) => {
                object.set_field(prop.name, value.clone());
                Ok(())
            }
        }
    }

    fn next(&mut self) -> bool {
        let Some(pos) = self.position else {
            return false;
        };
        match self.universe.borrow().next_after(self.kind, pos.ext_id) {
            Some(id) => {
                let ext_id = self
                    .universe
                    .borrow()
                    .get(id)
                    .map_or(pos.ext_id, starscript_storage::GameObject::ext_id);
                self.position = Some(Position { ext_id, id });
                true
            }
            None => {
                self.position = None;
                false
            }
        }
    }

    fn clone_context(&self) -> Box<dyn Context> {
        Box::new(Self {
            universe: Shared::clone(&self.universe),
            kind: self.kind,
            position: self.position,
        })
    }

    fn enumerate(&self, acceptor: &mut dyn PropertyAcceptor) {
        for prop in self.table() {
            acceptor.add_property(prop.name, prop.hint);
        }
    }

    fn object_ref(&self) -> Option<ObjectId> {
        self.position.map(|pos| pos.id)
    }

    fn name(&self) -> &str {
        family_name(self.kind)
    }
}

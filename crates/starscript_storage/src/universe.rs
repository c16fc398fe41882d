//! Game-object arena with generational indices.
//!
//! The `Universe` owns every scriptable game object. Slots are reused
//! through a free list; generations detect stale references so a context
//! holding an [`ObjectId`] can see that its referent was deleted and
//! degrade reads to the empty value.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use starscript_foundation::{Error, ObjectId, Result, Value};

/// Family of a scriptable game object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectKind {
    /// A ship in the universe.
    Ship,
    /// A planet in the universe.
    Planet,
    /// A minefield.
    Minefield,
    /// An explosion marker.
    Explosion,
    /// A user drawing on the starchart.
    Drawing,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Ship => "SHIP",
            Self::Planet => "PLANET",
            Self::Minefield => "MINEFIELD",
            Self::Explosion => "EXPLOSION",
            Self::Drawing => "DRAWING",
        };
        f.write_str(text)
    }
}

/// A scriptable game object: a kind, an external (game) id, and a bag of
/// named property values.
///
/// Property names are case-normalized to upper on both read and write, so
/// scripts can spell `Name`, `NAME`, or `name` interchangeably.
#[derive(Clone, Debug)]
pub struct GameObject {
    kind: ObjectKind,
    ext_id: i32,
    fields: BTreeMap<String, Value>,
}

impl GameObject {
    /// Creates an object with no properties set.
    #[must_use]
    pub fn new(kind: ObjectKind, ext_id: i32) -> Self {
        Self {
            kind,
            ext_id,
            fields: BTreeMap::new(),
        }
    }

    /// Returns the object's family.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Returns the object's external (game) id.
    #[must_use]
    pub const fn ext_id(&self) -> i32 {
        self.ext_id
    }

    /// Reads a property by name, or `None` if this object does not carry
    /// it.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(&name.to_ascii_uppercase())
    }

    /// Writes a property by name.
    pub fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_ascii_uppercase(), value);
    }
}

/// Generation-checked arena of game objects with an ordered per-family
/// index for deterministic ascending-id iteration.
#[derive(Debug, Default)]
pub struct Universe {
    /// Generation counter per slot. Odd generations are alive, even free.
    generations: Vec<u32>,
    /// Object storage, parallel to `generations`.
    objects: Vec<Option<GameObject>>,
    /// Free list of slot indices available for reuse.
    free_list: Vec<u32>,
    /// Ordered (external id -> slot) index per family.
    by_ext_id: HashMap<ObjectKind, BTreeMap<i32, ObjectId>>,
    /// Count of live objects.
    live_count: usize,
}

impl Universe {
    /// Creates an empty universe.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new object, returning its arena id.
    ///
    /// Fails if an object of this kind with the same external id already
    /// exists; external ids are the scripts' stable names for objects.
    pub fn create(&mut self, kind: ObjectKind, ext_id: i32) -> Result<ObjectId> {
        let index = self.by_ext_id.entry(kind).or_default();
        if index.contains_key(&ext_id) {
            return Err(Error::internal(format!(
                "duplicate {kind} id {ext_id}"
            )));
        }

        let id = if let Some(slot) = self.free_list.pop() {
            let idx = slot as usize;
            // Was even/free, now odd/alive.
            self.generations[idx] += 1;
            self.objects[idx] = Some(GameObject::new(kind, ext_id));
            ObjectId::new(slot, self.generations[idx])
        } else {
            let slot = u32::try_from(self.generations.len())
                .map_err(|_| Error::internal("object arena exhausted"))?;
            self.generations.push(1);
            self.objects.push(Some(GameObject::new(kind, ext_id)));
            ObjectId::new(slot, 1)
        };

        self.by_ext_id.entry(kind).or_default().insert(ext_id, id);
        self.live_count += 1;
        Ok(id)
    }

    /// Destroys an object.
    ///
    /// Fails if the id is stale or was never allocated.
    pub fn destroy(&mut self, id: ObjectId) -> Result<()> {
        self.validate(id)?;

        let idx = id.index as usize;
        let object = self.objects[idx].take();
        // Was odd/alive, now even/free.
        self.generations[idx] += 1;
        self.free_list.push(id.index);
        self.live_count -= 1;

        if let Some(object) = object {
            if let Some(index) = self.by_ext_id.get_mut(&object.kind()) {
                index.remove(&object.ext_id());
            }
        }
        Ok(())
    }

    /// Checks if an object exists and is not stale.
    #[must_use]
    pub fn exists(&self, id: ObjectId) -> bool {
        let idx = id.index as usize;
        idx < self.generations.len()
            && self.generations[idx] == id.generation
            && id.generation % 2 == 1
    }

    /// Validates that an object is live.
    fn validate(&self, id: ObjectId) -> Result<()> {
        if self.exists(id) {
            Ok(())
        } else {
            Err(Error::internal(format!("stale object reference {id:?}")))
        }
    }

    /// Reads an object, or `None` if the id is stale.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        if self.exists(id) {
            self.objects[id.index as usize].as_ref()
        } else {
            None
        }
    }

    /// Reads an object mutably, or `None` if the id is stale.
    #[must_use]
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        if self.exists(id) {
            self.objects[id.index as usize].as_mut()
        } else {
            None
        }
    }

    /// Finds a live object by family and external id.
    #[must_use]
    pub fn find(&self, kind: ObjectKind, ext_id: i32) -> Option<ObjectId> {
        self.by_ext_id.get(&kind)?.get(&ext_id).copied()
    }

    /// Returns the live object of a family with the smallest external id.
    #[must_use]
    pub fn first(&self, kind: ObjectKind) -> Option<ObjectId> {
        self.by_ext_id
            .get(&kind)?
            .iter()
            .next()
            .map(|(_, &id)| id)
    }

    /// Returns the live object of a family with the smallest external id
    /// strictly greater than `ext_id`.
    #[must_use]
    pub fn next_after(&self, kind: ObjectKind, ext_id: i32) -> Option<ObjectId> {
        use std::ops::Bound::{Excluded, Unbounded};
        self.by_ext_id
            .get(&kind)?
            .range((Excluded(ext_id), Unbounded))
            .next()
            .map(|(_, &id)| id)
    }

    /// Iterates the live objects of a family in ascending external-id
    /// order.
    pub fn iter(&self, kind: ObjectKind) -> impl Iterator<Item = ObjectId> + '_ {
        self.by_ext_id
            .get(&kind)
            .into_iter()
            .flat_map(|index| index.values().copied())
    }

    /// Returns the number of live objects of a family.
    #[must_use]
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.by_ext_id.get(&kind).map_or(0, BTreeMap::len)
    }

    /// Returns the total number of live objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if there are no live objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }
}

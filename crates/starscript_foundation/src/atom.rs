//! String interning for atoms.
//!
//! Atoms are interned string handles used by scripts to pass commands and
//! other identifiers around as cheap, stable integers. A table lives for
//! the lifetime of the session that owns it.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Interned atom identifier.
///
/// Atom 0 is reserved for the empty string, so any atom a script receives
/// for real content is non-zero.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct AtomId(u32);

impl AtomId {
    /// The reserved null atom (the empty string).
    pub const NULL: AtomId = AtomId(0);

    /// Creates an atom handle from a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this atom.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns true if this is the reserved null atom.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtomId({})", self.0)
    }
}

/// Interner mapping strings to stable [`AtomId`]s and back.
#[derive(Clone, Debug)]
pub struct AtomTable {
    strings: Vec<Rc<str>>,
    lookup: HashMap<Rc<str>, AtomId>,
}

impl AtomTable {
    /// Creates a new table with the null atom pre-interned.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self {
            strings: Vec::new(),
            lookup: HashMap::new(),
        };
        let null = table.intern("");
        debug_assert_eq!(null, AtomId::NULL);
        table
    }

    /// Interns a string, returning its stable atom.
    ///
    /// # Panics
    ///
    /// Panics if the number of interned atoms exceeds `u32::MAX`.
    pub fn intern(&mut self, s: &str) -> AtomId {
        if let Some(&id) = self.lookup.get(s) {
            return id;
        }

        let index = u32::try_from(self.strings.len()).expect("too many atoms");
        let arc: Rc<str> = s.into();
        self.strings.push(arc.clone());
        let id = AtomId(index);
        self.lookup.insert(arc, id);
        id
    }

    /// Gets the string for an atom, if it has been interned.
    #[must_use]
    pub fn get(&self, id: AtomId) -> Option<&str> {
        self.strings.get(id.0 as usize).map(AsRef::as_ref)
    }

    /// Returns the number of interned atoms, including the null atom.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if only the null atom is interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }
}

impl Default for AtomTable {
    fn default() -> Self {
        Self::new()
    }
}

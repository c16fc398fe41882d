//! The property-access contract between scripts and game objects.
//!
//! A [`Context`] is a cursor plus property map over some logical object
//! family: a single explosion, the vector of all ships, or a pure key-value
//! set such as the configuration. It is the language's sole mechanism for
//! reading and writing game state.

use crate::error::Result;
use crate::object::ObjectId;
use crate::types::TypeHint;
use crate::value::Value;

/// Resolved property handle returned by [`Context::lookup`].
///
/// An index, not a string, so repeated `get`/`set` calls skip name
/// resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyIndex(usize);

impl PropertyIndex {
    /// Creates a property index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Receiver for property enumeration.
///
/// Used for introspection (autocompletion, export field validation) without
/// needing a live object.
pub trait PropertyAcceptor {
    /// Accepts one property the context recognizes.
    fn add_property(&mut self, name: &str, hint: TypeHint);
}

/// Acceptor that collects every enumerated property into a vector.
#[derive(Debug, Default)]
pub struct PropertyCollector {
    /// Collected (name, hint) pairs in enumeration order.
    pub properties: Vec<(String, TypeHint)>,
}

impl PropertyCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the hint for a property by case-insensitive name.
    #[must_use]
    pub fn hint_for(&self, name: &str) -> Option<TypeHint> {
        self.properties
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, hint)| hint)
    }
}

impl PropertyAcceptor for PropertyCollector {
    fn add_property(&mut self, name: &str, hint: TypeHint) {
        self.properties.push((name.to_string(), hint));
    }
}

/// Polymorphic cursor and property map over a logical object family.
///
/// A context is always usable even with no current object: property reads
/// then produce the empty value rather than failing. Contexts referencing
/// live game objects hold generation-checked back-references and tolerate
/// the referent being deleted concurrently.
pub trait Context {
    /// Resolves a property name, case-insensitively, against this family's
    /// property table. Returns a handle for repeated access, or `None` if
    /// the name is not recognized at all.
    fn lookup(&self, name: &str) -> Option<PropertyIndex>;

    /// Reads a property.
    ///
    /// Never fails merely because the current object is absent or deleted;
    /// that reads as `Value::Null`. Structurally invalid requests may still
    /// fail with a type or range error.
    fn get(&mut self, index: PropertyIndex) -> Result<Value>;

    /// Writes a property.
    ///
    /// Fails with `NotAssignable` for read-only properties (the common
    /// case) and for writable ones whose underlying object no longer
    /// exists.
    fn set(&mut self, index: PropertyIndex, value: &Value) -> Result<()>;

    /// Advances to the next object in the family, in ascending-id order.
    ///
    /// Returns `false` exactly once iteration is exhausted; further calls
    /// keep returning `false` without wrapping around.
    fn next(&mut self) -> bool;

    /// Creates an independent cursor over the same logical collection,
    /// positioned identically.
    fn clone_context(&self) -> Box<dyn Context>;

    /// Pushes every (name, type hint) pair this context recognizes.
    fn enumerate(&self, acceptor: &mut dyn PropertyAcceptor);

    /// Back-reference to the concrete game object, if there is one.
    ///
    /// Pure key-value contexts return `None`; consumers must cope.
    fn object_ref(&self) -> Option<ObjectId> {
        None
    }

    /// Returns true if this callable runs as a procedure rather than
    /// yielding a value. A capability flag, not a class identity.
    fn is_procedure(&self) -> bool {
        false
    }

    /// Family name used when stringifying the context as a value.
    fn name(&self) -> &str;
}

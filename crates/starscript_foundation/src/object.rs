//! Object identifiers with generational indices.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Game-object identifier with a generational index for stale-reference
/// detection.
///
/// Contexts hold these as back-references into the object arena. When an
/// arena slot is reused after deletion its generation changes, so a context
/// can cheaply detect that its referent is gone and degrade reads to the
/// empty value instead of dangling.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectId {
    /// Index into the object arena.
    pub index: u32,
    /// Generation counter for stale-reference detection.
    pub generation: u32,
}

impl ObjectId {
    /// Creates a new object ID with the given index and generation.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the sentinel value representing "no object".
    #[must_use]
    pub const fn null() -> Self {
        Self {
            index: u32::MAX,
            generation: 0,
        }
    }

    /// Returns true if this is the null sentinel value.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.index == u32::MAX
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "ObjectId(null)")
        } else {
            write!(f, "ObjectId({}v{})", self.index, self.generation)
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Object(null)")
        } else {
            write!(f, "Object({})", self.index)
        }
    }
}

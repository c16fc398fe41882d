//! Property type hints.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declared type of a context property.
///
/// Consumed by export field validation and column-width resolution;
/// properties whose type varies by object declare [`TypeHint::None`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeHint {
    /// Boolean property.
    Bool,
    /// Integer property.
    Int,
    /// Floating-point property.
    Float,
    /// String property.
    String,
    /// No declared type.
    None,
}

impl TypeHint {
    /// Returns true if values of this type are numbers.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Float)
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::None => "none",
        };
        f.write_str(text)
    }
}

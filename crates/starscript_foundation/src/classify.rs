//! Arithmetic classification of values.
//!
//! Every numeric operator routes its operands through [`classify`]; this is
//! the single place that defines "what is a number" for the whole language.

use crate::value::Value;

/// Arithmetic classification of a value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Classified {
    /// The operand was the empty value; the caller must short-circuit and
    /// itself produce the empty value.
    Null,
    /// An integer operand (booleans classify here as 0/1).
    Int(i32),
    /// A floating-point operand.
    Float(f64),
    /// The operand is not usable as a number.
    NotNumeric,
}

impl Classified {
    /// Returns the numeric value widened to f64, if there is one.
    #[must_use]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(f64::from(n)),
            Self::Float(n) => Some(n),
            Self::Null | Self::NotNumeric => None,
        }
    }
}

/// Classifies a value for arithmetic.
///
/// Booleans classify as integers 0/1; integers and floats classify as
/// themselves; every other variant is not numeric.
#[must_use]
pub fn classify(value: &Value) -> Classified {
    match value {
        Value::Null => Classified::Null,
        Value::Bool(b) => Classified::Int(i32::from(*b)),
        Value::Int(n) => Classified::Int(*n),
        Value::Float(n) => Classified::Float(*n),
        Value::Str(_)
        | Value::Hash(_)
        | Value::Array(_)
        | Value::FileHandle(_)
        | Value::Keymap(_)
        | Value::Context(_) => Classified::NotNumeric,
    }
}

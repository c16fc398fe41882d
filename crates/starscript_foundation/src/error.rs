//! Error types for the Starscript core.
//!
//! Uses `thiserror` for ergonomic error definition. The taxonomy is closed:
//! every operator and context call either succeeds or fails with exactly one
//! of these kinds, so the VM loop can phrase user-visible script errors
//! without inspecting message strings.

use std::fmt;

use thiserror::Error;

/// Result alias for Starscript operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Starscript operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a type error for an unmet operand expectation.
    #[must_use]
    pub const fn type_error(expected: Expectation) -> Self {
        Self::new(ErrorKind::TypeError(expected))
    }

    /// Creates a range error.
    #[must_use]
    pub const fn range_error() -> Self {
        Self::new(ErrorKind::RangeError)
    }

    /// Creates a divide-by-zero error.
    #[must_use]
    pub const fn divide_by_zero() -> Self {
        Self::new(ErrorKind::DivideByZero)
    }

    /// Creates a not-assignable error.
    #[must_use]
    pub const fn not_assignable() -> Self {
        Self::new(ErrorKind::NotAssignable)
    }

    /// Creates a not-serializable error.
    #[must_use]
    pub const fn not_serializable() -> Self {
        Self::new(ErrorKind::NotSerializable)
    }

    /// Creates an unknown-field error for an export request.
    #[must_use]
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownField(name.into()))
    }

    /// Creates a duplicate-keymap error.
    #[must_use]
    pub fn keymap_exists(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeymapExists(name.into()))
    }

    /// Creates an unknown-keymap error.
    #[must_use]
    pub fn keymap_unknown(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeymapUnknown(name.into()))
    }

    /// Creates an internal error (invariant violation).
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Operand does not support the required classification.
    #[error("type error: expected {0}")]
    TypeError(Expectation),

    /// Operand classified correctly but lies outside the operator's domain.
    #[error("range error")]
    RangeError,

    /// Division or an equivalent operation hit a zero divisor.
    #[error("divide by zero")]
    DivideByZero,

    /// Write attempted on a read-only property, or the referent is gone.
    #[error("property is not assignable")]
    NotAssignable,

    /// Persistence attempted on a value variant that cannot be stored.
    #[error("value cannot be serialized")]
    NotSerializable,

    /// Export requested a field name the context cannot resolve at all.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A keymap with this name already exists.
    #[error("keymap already exists: {0}")]
    KeymapExists(String),

    /// No keymap with this name exists.
    #[error("unknown keymap: {0}")]
    KeymapUnknown(String),

    /// Invariant violation such as an unknown opcode. Fatal to the call.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Operand capability an operator expected and did not get.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Expectation {
    /// A numeric operand (integer, float, or boolean).
    Numeric,
    /// An integer operand.
    Integer,
    /// A string operand.
    String,
    /// A keymap operand.
    Keymap,
    /// A command atom (integer handle) or command string.
    Atom,
    /// An indexable operand (array or hash).
    Indexable,
    /// A callable operand (context).
    Callable,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Numeric => "a numeric value",
            Self::Integer => "an integer",
            Self::String => "a string",
            Self::Keymap => "a keymap",
            Self::Atom => "an atom or command string",
            Self::Indexable => "an indexable value",
            Self::Callable => "a callable value",
        };
        f.write_str(text)
    }
}

//! Operator opcodes for the Starscript expression evaluator.
//!
//! The bytecode compiler controls the opcode numbering, so the opcode
//! space is closed and versioned: each arity has a fixed `#[repr(u8)]`
//! enum, and an opcode outside the enum indicates a compiler/runtime
//! version mismatch. That mismatch is fatal to the operation, never
//! silently ignored.

/// Opcode of a unary built-in operator.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// Ternary-logic negation: `Null -> Null`, else negated truthiness.
    Not = 0,
    /// Binary-logic negation: `Null -> True`, else negated truthiness.
    Not2 = 1,
    /// Truthiness as a boolean; `Null -> Null`.
    Bool = 2,
    /// Arithmetic negation.
    Neg = 3,
    /// Arithmetic identity (numeric check only).
    Pos = 4,
    /// Absolute value.
    Abs = 5,
    /// Increment by one.
    Inc = 6,
    /// Decrement by one.
    Dec = 7,
    /// Replace falsy values by `Null`.
    Zap = 8,
    /// Sine of an angle in degrees.
    Sin = 9,
    /// Cosine of an angle in degrees.
    Cos = 10,
    /// Tangent of an angle in degrees.
    Tan = 11,
    /// Square root.
    Sqrt = 12,
    /// Natural logarithm.
    Log = 13,
    /// Exponential.
    Exp = 14,
    /// Truncate toward zero to an integer.
    Trunc = 15,
    /// Round half away from zero to an integer.
    Round = 16,
    /// Strip leading whitespace from a string.
    LTrim = 17,
    /// Strip trailing whitespace from a string.
    RTrim = 18,
    /// Strip both leading and trailing whitespace.
    LRTrim = 19,
    /// Upper-case a string.
    UCase = 20,
    /// Lower-case a string.
    LCase = 21,
    /// String length in characters.
    Length = 22,
    /// Character from a code point.
    Chr = 23,
    /// Stringify any value.
    Str = 24,
    /// Code point of the first character of the stringified value.
    Asc = 25,
    /// Parse a string as an integer or float.
    Val = 26,
    /// Test for the empty value.
    IsEmpty = 27,
    /// Test for a numeric value.
    IsNum = 28,
    /// Test for a string value.
    IsString = 29,
    /// First-dimension size of an array value, 0 otherwise.
    IsArray = 30,
    /// Test the procedure capability flag of a callable.
    IsProcedure = 31,
    /// Intern the stringified value as an atom.
    Atom = 32,
    /// Resolve an atom handle back to its string.
    AtomStr = 33,
    /// Create a named keymap.
    KeyCreate = 34,
    /// Resolve a named keymap.
    KeyLookup = 35,
    /// Normalize an integer or file handle to a canonical file handle.
    FileNr = 36,
}

impl UnaryOp {
    /// Decodes a raw opcode, or `None` if it is outside the known set.
    #[must_use]
    pub const fn from_u8(opcode: u8) -> Option<Self> {
        Some(match opcode {
            0 => Self::Not,
            1 => Self::Not2,
            2 => Self::Bool,
            3 => Self::Neg,
            4 => Self::Pos,
            5 => Self::Abs,
            6 => Self::Inc,
            7 => Self::Dec,
            8 => Self::Zap,
            9 => Self::Sin,
            10 => Self::Cos,
            11 => Self::Tan,
            12 => Self::Sqrt,
            13 => Self::Log,
            14 => Self::Exp,
            15 => Self::Trunc,
            16 => Self::Round,
            17 => Self::LTrim,
            18 => Self::RTrim,
            19 => Self::LRTrim,
            20 => Self::UCase,
            21 => Self::LCase,
            22 => Self::Length,
            23 => Self::Chr,
            24 => Self::Str,
            25 => Self::Asc,
            26 => Self::Val,
            27 => Self::IsEmpty,
            28 => Self::IsNum,
            29 => Self::IsString,
            30 => Self::IsArray,
            31 => Self::IsProcedure,
            32 => Self::Atom,
            33 => Self::AtomStr,
            34 => Self::KeyCreate,
            35 => Self::KeyLookup,
            36 => Self::FileNr,
            _ => return None,
        })
    }
}

/// Opcode of a ternary built-in operator.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TernaryOp {
    /// Bind a key to a command in a keymap:
    /// `(keymap, key-name, command) -> keymap`.
    KeyAdd = 0,
}

impl TernaryOp {
    /// Decodes a raw opcode, or `None` if it is outside the known set.
    #[must_use]
    pub const fn from_u8(opcode: u8) -> Option<Self> {
        match opcode {
            0 => Some(Self::KeyAdd),
            _ => None,
        }
    }
}

//! Effective column width resolution.
//!
//! The interaction between user width, per-type defaults, and alignment is
//! defined here as one pure function and nowhere else.

use starscript_foundation::TypeHint;

/// Column text alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Pad on the right; text and booleans.
    Left,
    /// Pad on the left; numbers.
    Right,
}

impl Alignment {
    const fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Per-type default column widths of one output format.
#[derive(Copy, Clone, Debug)]
pub struct WidthDefaults {
    /// Default width for boolean columns.
    pub bool_width: usize,
    /// Default width for integer columns.
    pub int_width: usize,
    /// Default width for float columns.
    pub float_width: usize,
    /// Default width for string columns.
    pub string_width: usize,
    /// Default width for columns without a declared type.
    pub none_width: usize,
}

impl WidthDefaults {
    /// Defaults of the aligned text-table format.
    pub const TEXT_TABLE: Self = Self {
        bool_width: 5,
        int_width: 10,
        float_width: 10,
        string_width: 30,
        none_width: 10,
    };

    const fn for_hint(&self, hint: TypeHint) -> usize {
        match hint {
            TypeHint::Bool => self.bool_width,
            TypeHint::Int => self.int_width,
            TypeHint::Float => self.float_width,
            TypeHint::String => self.string_width,
            TypeHint::None => self.none_width,
        }
    }
}

/// Natural alignment of a declared type: numbers right, text left.
const fn natural_alignment(hint: TypeHint) -> Alignment {
    match hint {
        TypeHint::Int | TypeHint::Float => Alignment::Right,
        TypeHint::Bool | TypeHint::String | TypeHint::None => Alignment::Left,
    }
}

/// Resolves the effective (width, alignment) of one column.
///
/// User width zero selects the format default and the type's natural
/// alignment; a positive width keeps the natural alignment; a negative
/// width uses its magnitude with the alignment flipped.
#[must_use]
pub fn resolve_width(user: i32, hint: TypeHint, defaults: &WidthDefaults) -> (usize, Alignment) {
    let natural = natural_alignment(hint);
    match user {
        0 => (defaults.for_hint(hint), natural),
        w if w > 0 => (w.unsigned_abs() as usize, natural),
        w => (w.unsigned_abs() as usize, natural.flipped()),
    }
}

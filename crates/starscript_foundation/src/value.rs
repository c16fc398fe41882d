//! Core value type for all Starscript data.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::error::{Error, Result};

/// Shared hash value backing store.
///
/// Cloning a `Value::Hash` clones the reference, not the map; mutation is
/// visible to every holder.
pub type HashRef = Rc<RefCell<BTreeMap<String, Value>>>;

/// Shared array value backing store.
pub type ArrayRef = Rc<RefCell<ArrayData>>;

/// Shared callable-context value.
pub type ContextRef = Rc<RefCell<dyn Context>>;

/// Handle to a named keymap in the world's keymap registry.
///
/// The handle is stable for the lifetime of the world; all `Value::Keymap`
/// clones of it refer to the same registry slot.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeymapRef(u32);

impl KeymapRef {
    /// Creates a keymap handle from a registry slot index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw registry slot index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for KeymapRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeymapRef({})", self.0)
    }
}

/// Core value type for all Starscript data.
///
/// The variant set is closed: every consumer (arithmetic, stringification,
/// serialization) matches exhaustively, so adding a variant is a
/// compile-time event, not a runtime surprise.
///
/// Scalars are immutable; operators always produce new values. The
/// reference variants (`Hash`, `Array`, `Keymap`, `Context`) are shared by
/// all holders, and mutation through one holder is visible to the rest.
#[derive(Clone)]
pub enum Value {
    /// The empty value (absence). Propagates through arithmetic.
    Null,
    /// Boolean value; arithmetically an integer 0/1.
    Bool(bool),
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    Str(Rc<str>),
    /// Shared hash (string-keyed mapping).
    Hash(HashRef),
    /// Shared multi-dimensional array.
    Array(ArrayRef),
    /// Script file handle (slot number).
    FileHandle(i32),
    /// Reference to a named keymap in the world registry.
    Keymap(KeymapRef),
    /// Callable context over an object family.
    Context(ContextRef),
}

impl Value {
    /// Creates a string value.
    #[must_use]
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Self::Str(s.into())
    }

    /// Creates an empty shared hash value.
    #[must_use]
    pub fn hash() -> Self {
        Self::Hash(Rc::new(RefCell::new(BTreeMap::new())))
    }

    /// Creates a shared array value with the given dimensions.
    pub fn array(dims: &[usize]) -> Result<Self> {
        Ok(Self::Array(Rc::new(RefCell::new(ArrayData::new(dims)?))))
    }

    /// Wraps a context implementation into a callable-context value.
    #[must_use]
    pub fn context(ctx: impl Context + 'static) -> Self {
        Self::Context(Rc::new(RefCell::new(ctx)))
    }

    /// Returns true if this is the empty value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the truth value used by the logic operators.
    ///
    /// Zero numbers, the empty string, `false`, and `Null` are falsy;
    /// everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a keymap handle.
    #[must_use]
    pub const fn as_keymap(&self) -> Option<KeymapRef> {
        match self {
            Self::Keymap(k) => Some(*k),
            _ => None,
        }
    }

    /// Attempts to extract a file handle slot.
    #[must_use]
    pub const fn as_file_handle(&self) -> Option<i32> {
        match self {
            Self::FileHandle(n) => Some(*n),
            _ => None,
        }
    }

    /// Renders this value as text.
    ///
    /// In readable mode the result parses back as a script literal where
    /// possible: strings are quoted and escaped, the empty value prints as
    /// `Z(0)`, booleans as `True`/`False`. In plain mode strings are
    /// unquoted, the empty value prints as `""`, booleans as `YES`/`NO`.
    #[must_use]
    pub fn stringify(&self, readable: bool) -> String {
        match self {
            Self::Null => {
                if readable {
                    "Z(0)".to_string()
                } else {
                    String::new()
                }
            }
            Self::Bool(b) => {
                let text = match (readable, b) {
                    (true, true) => "True",
                    (true, false) => "False",
                    (false, true) => "YES",
                    (false, false) => "NO",
                };
                text.to_string()
            }
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Str(s) => {
                if readable {
                    quote_string(s)
                } else {
                    s.to_string()
                }
            }
            Self::Hash(_) => "#<hash>".to_string(),
            Self::Array(_) => "#<array>".to_string(),
            Self::FileHandle(n) => format!("#<file:{n}>"),
            Self::Keymap(_) => "#<keymap>".to_string(),
            Self::Context(ctx) => format!("#<{}>", ctx.borrow().name()),
        }
    }

    /// Converts this value into its persistable form.
    ///
    /// Only the small fixed set of variants the language can persist
    /// serializes; everything else fails with `NotSerializable`.
    pub fn store(&self) -> Result<StoredValue> {
        match self {
            Self::Null => Ok(StoredValue::Null),
            Self::Bool(b) => Ok(StoredValue::Bool(*b)),
            Self::Int(n) => Ok(StoredValue::Int(*n)),
            Self::FileHandle(n) => Ok(StoredValue::FileHandle(*n)),
            Self::Float(_)
            | Self::Str(_)
            | Self::Hash(_)
            | Self::Array(_)
            | Self::Keymap(_)
            | Self::Context(_) => Err(Error::not_serializable()),
        }
    }
}

/// Quotes a string as a script literal.
fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// Persistable form of a [`Value`].
///
/// This is the subset of variants the language commits to keeping loadable
/// across sessions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StoredValue {
    /// The empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i32),
    /// File handle slot.
    FileHandle(i32),
}

impl StoredValue {
    /// Restores the live value this record was created from.
    #[must_use]
    pub const fn restore(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(b),
            Self::Int(n) => Value::Int(n),
            Self::FileHandle(n) => Value::FileHandle(n),
        }
    }
}

/// Backing store for a multi-dimensional script array.
///
/// Elements are stored row-major; every element starts out as `Null`.
#[derive(Clone, Debug)]
pub struct ArrayData {
    dims: Vec<usize>,
    elems: Vec<Value>,
}

/// Upper bound on total array elements, to keep a typo in a `DIM`
/// statement from exhausting memory.
const MAX_ARRAY_ELEMS: usize = 10_000_000;

impl ArrayData {
    /// Creates an array with the given dimensions, filled with `Null`.
    pub fn new(dims: &[usize]) -> Result<Self> {
        if dims.is_empty() {
            return Err(Error::range_error());
        }
        let mut total: usize = 1;
        for &d in dims {
            total = total.checked_mul(d).ok_or_else(Error::range_error)?;
        }
        if total > MAX_ARRAY_ELEMS {
            return Err(Error::range_error());
        }
        Ok(Self {
            dims: dims.to_vec(),
            elems: vec![Value::Null; total],
        })
    }

    /// Returns the dimension sizes.
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the size of the first dimension.
    #[must_use]
    pub fn first_dim(&self) -> usize {
        self.dims[0]
    }

    /// Returns the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns true if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Computes the row-major offset of a multi-index.
    fn offset(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.dims.len() {
            return Err(Error::range_error());
        }
        let mut offset = 0;
        for (&i, &d) in index.iter().zip(&self.dims) {
            if i >= d {
                return Err(Error::range_error());
            }
            offset = offset * d + i;
        }
        Ok(offset)
    }

    /// Reads the element at a multi-index.
    pub fn get(&self, index: &[usize]) -> Result<Value> {
        Ok(self.elems[self.offset(index)?].clone())
    }

    /// Writes the element at a multi-index.
    pub fn set(&mut self, index: &[usize], value: Value) -> Result<()> {
        let offset = self.offset(index)?;
        self.elems[offset] = value;
        Ok(())
    }
}

// Equality for the reference variants is identity: clones share one backing
// store, so two values are equal exactly when they observe the same store.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::FileHandle(a), Self::FileHandle(b)) => a == b,
            (Self::Keymap(a), Self::Keymap(b)) => a == b,
            (Self::Context(a), Self::Context(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::Str(s) => s.hash(state),
            Self::Hash(h) => (Rc::as_ptr(h) as usize).hash(state),
            Self::Array(a) => (Rc::as_ptr(a) as usize).hash(state),
            Self::FileHandle(n) => n.hash(state),
            Self::Keymap(k) => k.hash(state),
            Self::Context(c) => (Rc::as_ptr(c).cast::<()>() as usize).hash(state),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Null, Self::Null) => Some(Ordering::Equal),
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Float(b)) => f64::from(*a).partial_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.partial_cmp(&f64::from(*b)),
            (Self::Str(a), Self::Str(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Hash(h) => write!(f, "Hash({:?})", h.borrow()),
            Self::Array(a) => write!(f, "Array(dims={:?})", a.borrow().dims()),
            Self::FileHandle(n) => write!(f, "FileHandle({n})"),
            Self::Keymap(k) => write!(f, "{k:?}"),
            Self::Context(c) => write!(f, "Context({})", c.borrow().name()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify(false))
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s.into())
    }
}

impl From<KeymapRef> for Value {
    fn from(k: KeymapRef) -> Self {
        Self::Keymap(k)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

//! Export field lists.

use starscript_foundation::{Error, Result};

/// One requested export field: a case-normalized name plus a user width.
///
/// Width zero means "use the format default"; a negative width means
/// "use the magnitude, with the alignment flipped".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    width: i32,
}

impl Field {
    /// Returns the canonical (upper-case) field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the user-requested width, which may be zero or negative.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }
}

/// Ordered list of requested export fields.
///
/// Duplicate names are permitted and independent: requesting `ID` twice
/// exports two `ID` columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    /// Creates an empty field list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one field.
    ///
    /// The name is case-normalized to upper and must be a valid field
    /// identifier; otherwise the call fails with a range error.
    pub fn add(&mut self, name: &str, width: i32) -> Result<()> {
        if !is_field_name(name) {
            return Err(Error::range_error());
        }
        self.fields.push(Field {
            name: name.to_ascii_uppercase(),
            width,
        });
        Ok(())
    }

    /// Parses and appends a comma-separated field specification such as
    /// `"ID,NAME@30,OWNER@-10"`, where `@width` is optional per field.
    pub fn add_list(&mut self, spec: &str) -> Result<()> {
        for part in spec.split(',') {
            let part = part.trim();
            let (name, width) = match part.split_once('@') {
                Some((name, width)) => {
                    let width: i32 = width
                        .trim()
                        .parse()
                        .map_err(|_| Error::range_error())?;
                    (name.trim(), width)
                }
                None => (part, 0),
            };
            self.add(name, width)?;
        }
        Ok(())
    }

    /// Returns the field at a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Field> {
        self.fields.get(position)
    }

    /// Iterates the fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Checks the identifier syntax export field names must follow. Dots,
/// underscores and dollar signs appear in derived property names.
fn is_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '$'))
}

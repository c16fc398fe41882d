//! The export sink contract.

use starscript_foundation::{Result, TypeHint, Value};

use crate::field::FieldList;

/// Receiver of tabular export output.
///
/// The engine drives every sink through the same lifecycle:
/// `start_table`, then per accepted object `start_record`, one
/// `add_field` per requested field in order, `end_record`; finally
/// `end_table`. Sinks may treat calls outside this order as internal
/// errors.
pub trait Exporter {
    /// Opens the table. `hints` carries the declared type of each field,
    /// parallel to `fields`.
    fn start_table(&mut self, fields: &FieldList, hints: &[TypeHint]) -> Result<()>;

    /// Opens one record.
    fn start_record(&mut self) -> Result<()>;

    /// Adds the next field of the current record.
    fn add_field(&mut self, value: &Value, name: &str, hint: TypeHint) -> Result<()>;

    /// Closes the current record.
    fn end_record(&mut self) -> Result<()>;

    /// Closes the table.
    fn end_table(&mut self) -> Result<()>;
}

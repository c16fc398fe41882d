//! The export engine: walks a context and feeds a sink.

use tracing::debug;

use starscript_foundation::{Context, Error, PropertyCollector, Result, TypeHint, Value};

use crate::exporter::Exporter;
use crate::field::FieldList;

/// Caller decision for one object during export.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Emit this object as a record.
    Accept,
    /// Skip this object only.
    Reject,
    /// Stop the export as if the collection were exhausted.
    Cancel,
}

/// Exports every object of a context.
pub fn export(
    context: &mut dyn Context,
    fields: &FieldList,
    sink: &mut dyn Exporter,
) -> Result<()> {
    export_filtered(context, fields, &mut |_| Decision::Accept, sink)
}

/// Exports a context with a per-object filter decision.
///
/// Field names are validated against the context's property enumeration
/// before anything is written; an unknown name fails the whole export
/// up front. After that, per-field resolution failures degrade to the
/// empty value and the export continues.
pub fn export_filtered(
    context: &mut dyn Context,
    fields: &FieldList,
    filter: &mut dyn FnMut(&mut dyn Context) -> Decision,
    sink: &mut dyn Exporter,
) -> Result<()> {
    // Hard precondition: every requested field must be a known property.
    let mut collector = PropertyCollector::new();
    context.enumerate(&mut collector);
    let hints = fields
        .iter()
        .map(|field| {
            collector
                .hint_for(field.name())
                .ok_or_else(|| Error::unknown_field(field.name()))
        })
        .collect::<Result<Vec<TypeHint>>>()?;

    debug!(target: "script", context = context.name(), fields = fields.len(), "export start");
    sink.start_table(fields, &hints)?;

    let mut records = 0usize;
    loop {
        match filter(context) {
            Decision::Cancel => break,
            Decision::Reject => {}
            Decision::Accept => {
                sink.start_record()?;
                for (field, &hint) in fields.iter().zip(&hints) {
                    let value = read_field(context, field.name());
                    sink.add_field(&value, field.name(), hint)?;
                }
                sink.end_record()?;
                records += 1;
            }
        }
        if !context.next() {
            break;
        }
    }

    sink.end_table()?;
    debug!(target: "script", records, "export done");
    Ok(())
}

/// Reads one field off the current object. A lookup miss or a failing
/// read degrades to the empty value; exports never abort mid-stream on a
/// single bad field.
fn read_field(context: &mut dyn Context, name: &str) -> Value {
    match context.lookup(name) {
        None => Value::Null,
        Some(index) => context.get(index).unwrap_or(Value::Null),
    }
}

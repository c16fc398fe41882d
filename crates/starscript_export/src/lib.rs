//! Tabular data export over Starscript contexts.
//!
//! This crate provides:
//! - [`FieldList`] - Ordered, width-annotated export field requests
//! - [`resolve_width`] - The one place effective column widths are decided
//! - [`Exporter`] - The sink contract the engine drives
//! - [`export`] / [`export_filtered`] - The engine itself
//! - [`TextTableExporter`], [`SeparatedExporter`] - Concrete sinks

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dsv;
pub mod engine;
pub mod exporter;
pub mod field;
pub mod text;
pub mod width;

pub use dsv::SeparatedExporter;
pub use engine::{export, export_filtered, Decision};
pub use exporter::Exporter;
pub use field::{Field, FieldList};
pub use text::TextTableExporter;
pub use width::{resolve_width, Alignment, WidthDefaults};

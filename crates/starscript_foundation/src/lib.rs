//! Core types and contracts for the Starscript interpreter core.
//!
//! This crate provides:
//! - [`Value`] - The closed, tagged value union for all script data
//! - [`classify`] - The arithmetic classifier shared by all numeric operators
//! - [`Context`] - The property-access contract over game-object families
//! - [`ObjectId`] - Generational object identifiers
//! - [`AtomTable`] - Session-wide string interning
//! - [`Error`] - The closed script error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod atom;
pub mod classify;
pub mod context;
pub mod error;
pub mod object;
pub mod types;
pub mod value;

pub use atom::{AtomId, AtomTable};
pub use classify::{classify, Classified};
pub use context::{Context, PropertyAcceptor, PropertyCollector, PropertyIndex};
pub use error::{Error, ErrorKind, Expectation, Result};
pub use object::ObjectId;
pub use types::TypeHint;
pub use value::{ArrayData, ArrayRef, ContextRef, HashRef, KeymapRef, StoredValue, Value};

//! Game-object storage and session state for Starscript.
//!
//! This crate provides:
//! - [`Universe`] - Generation-checked arena of scriptable game objects
//! - [`KeymapRegistry`] - Named key-binding tables
//! - [`ConfigStore`] - Configuration key/value store
//! - [`World`] - The aggregate passed into every dispatch call

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod keymap;
pub mod universe;
pub mod world;

pub use config::ConfigStore;
pub use keymap::{Keymap, KeymapRegistry};
pub use universe::{GameObject, ObjectKind, Universe};
pub use world::{Shared, World};

//! Concrete property-access contexts for Starscript.
//!
//! This crate provides:
//! - [`FamilyContext`] - Iteration over whole object families (ships,
//!   planets, minefields) in ascending id order
//! - [`FixedContext`] - A single fixed-id object (explosion, drawing)
//! - [`ConfigContext`] - The configuration key set, with no backing object
//! - [`factory`] - Per-family factory functions script execution calls

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod factory;
pub mod family;
pub mod fixed;
pub mod property;

pub use config::ConfigContext;
pub use family::FamilyContext;
pub use fixed::FixedContext;
pub use property::PropertyDef;

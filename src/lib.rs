//! Starscript - Embedded scripting core for a space-strategy game client
//!
//! This crate re-exports all layers of the Starscript core for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: starscript_export      — Field lists, export engine, sinks
//!          starscript_context     — Concrete contexts per object family
//! Layer 2: starscript_interpreter — Unary/ternary opcode dispatch
//! Layer 1: starscript_storage     — Universe arena, keymaps, config, World
//! Layer 0: starscript_foundation  — Core types (Value, Context, Error)
//! ```

pub use starscript_context as context;
pub use starscript_export as export;
pub use starscript_foundation as foundation;
pub use starscript_interpreter as interpreter;
pub use starscript_storage as storage;

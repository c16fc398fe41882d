//! Integration tests for Layer 3: Export
//!
//! Tests the export engine and the concrete sinks over real contexts.

mod engine;
mod sinks;

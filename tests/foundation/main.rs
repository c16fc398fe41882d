//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, arithmetic classification, atoms, and
//! errors.

mod atoms;
mod classify;
mod values;

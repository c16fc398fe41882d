//! Integration tests for Layer 2: Interpreter
//!
//! Tests opcode dispatch for the unary and ternary operator tables.

//! Opcode dispatch for the Starscript expression evaluator.
//!
//! This crate provides:
//! - [`UnaryOp`] / [`TernaryOp`] - Closed opcode tables per operator arity
//! - [`execute_unary`] / [`execute_ternary`] - Dispatch entry points the
//!   bytecode loop calls with raw opcodes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod opcode;
pub mod ternary;
pub mod unary;

pub use opcode::{TernaryOp, UnaryOp};
pub use ternary::execute_ternary;
pub use unary::execute_unary;

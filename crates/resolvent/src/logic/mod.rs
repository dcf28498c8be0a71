//! Propositional logic representation
//!
//! This module provides the fundamental value types: literals and clauses.

pub mod clause;
pub mod literal;

// Re-export commonly used types
pub use clause::{Clause, ClauseDisplay};
pub use literal::{Literal, LiteralDisplay};

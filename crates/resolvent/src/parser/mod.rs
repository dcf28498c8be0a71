//! Parser for textual CNF expressions

pub mod cnf;

// Re-export main parsing functions
pub use cnf::{parse_clause, parse_clauses, parse_literal, split_clauses};

//! Resolvent: an interactive propositional resolution engine
//!
//! This library keeps an append-only sequence of clauses, resolves chosen
//! pairs on a chosen letter, and reconstructs and checks the derivation of
//! the empty clause once a contradiction has been reached.

pub mod config;
pub mod error;
pub mod inference;
pub mod json;
pub mod logic;
pub mod model;
pub mod parser;
pub mod proof;

// Re-export commonly used types from logic
pub use logic::{Clause, ClauseDisplay, Literal, LiteralDisplay};

// Re-export inference types
pub use inference::{resolution, Derivation, StepPlan};

pub use config::{ModelConfig, Notation};
pub use error::{ClauseError, LiteralError, ResolutionError, Result, VerificationError};
pub use json::{ClauseJson, ModelJson, ProofJson, ProofStepJson};
pub use model::{ResolutionModel, ResolveOutcome};
pub use parser::{parse_clause, parse_clauses, parse_literal};
pub use proof::{Proof, ProofStep};

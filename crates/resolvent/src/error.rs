//! Error types for resolvent

use crate::logic::{Clause, Literal};
use thiserror::Error;

/// Malformed literal text or constructor arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("literal text is empty")]
    Empty,

    #[error("literal {input:?} has a negation marker but no letter")]
    MissingLetter { input: String },

    #[error("literal {input:?} must be a single letter, optionally prefixed by '~'")]
    TooLong { input: String },

    #[error("literal {input:?} contains {found:?}, expected a letter A-Z")]
    NotAlphabetic { input: String, found: char },
}

/// Clause text that cannot be read as a disjunction of literals
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClauseError {
    #[error("clause {input:?} contains no literals")]
    Empty { input: String },

    #[error("invalid literal {token:?} in clause: {source}")]
    InvalidLiteral {
        token: String,
        #[source]
        source: LiteralError,
    },
}

/// Failures of model construction, queries and resolution steps
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error(transparent)]
    InvalidLiteral(#[from] LiteralError),

    #[error("invalid clause {input:?} in model: {source}")]
    InvalidClause {
        input: String,
        #[source]
        source: ClauseError,
    },

    #[error("expression contains no clauses")]
    NoClauses,

    #[error("a resolution model needs at least one clause")]
    EmptyModel,

    #[error("{operation}: {argument} index {index} is out of range for {len} clauses")]
    IndexOutOfRange {
        operation: &'static str,
        argument: &'static str,
        index: usize,
        len: usize,
    },

    #[error("cannot resolve {left} and {right} on {literal}: it must appear in one clause and its negation in the other")]
    NotResolvable {
        literal: Literal,
        left: Clause,
        right: Clause,
    },

    #[error("{left} and {right} share no complementary literal")]
    NoComplementaryLiteral { left: Clause, right: Clause },

    #[error("model contains no empty clause")]
    NoContradiction,

    #[error("clause limit of {limit} reached")]
    ClauseLimit { limit: usize },

    #[error("recorded clause {index} does not match its replayed derivation")]
    InconsistentHistory { index: usize },
}

/// A proof step that does not replay against the model it came from
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("step {step_idx}: premise {premise_idx} is not an earlier clause")]
    InvalidPremise { step_idx: usize, premise_idx: usize },

    #[error("step {step_idx}: clause {clause_idx} is not an input clause")]
    InputNotFound { step_idx: usize, clause_idx: usize },

    #[error("step {step_idx}: clause {clause_idx} should be {expected} but is {found}")]
    InvalidConclusion {
        step_idx: usize,
        clause_idx: usize,
        expected: Clause,
        found: Clause,
    },

    #[error("step {step_idx}: {source}")]
    Resolution {
        step_idx: usize,
        #[source]
        source: ResolutionError,
    },

    #[error("proof does not end in the empty clause")]
    MissingContradiction,
}

pub type Result<T> = std::result::Result<T, ResolutionError>;

//! Clause derivation tracking.
//!
//! Records how each clause entered a model: as an input premise, or as the
//! resolvent of two earlier clauses.

use crate::logic::Literal;
use serde::{Deserialize, Serialize};

/// How a clause was derived.
///
/// Parents are indices into the owning model's clause sequence. The sequence is
/// append-only, so a parent index is always smaller than its child's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Derivation {
    Input,
    Resolution {
        left: usize,
        right: usize,
        pivot: Literal,
    },
}

impl Derivation {
    /// Get the premise clause indices.
    pub fn premises(&self) -> Vec<usize> {
        match self {
            Derivation::Input => vec![],
            Derivation::Resolution { left, right, .. } => vec![*left, *right],
        }
    }

    /// Get the (left, right) parent indices, if any
    pub fn parents(&self) -> Option<(usize, usize)> {
        match self {
            Derivation::Input => None,
            Derivation::Resolution { left, right, .. } => Some((*left, *right)),
        }
    }

    /// Get a human-readable rule name.
    pub fn rule_name(&self) -> &'static str {
        match self {
            Derivation::Input => "Input",
            Derivation::Resolution { .. } => "Resolution",
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Derivation::Input)
    }
}

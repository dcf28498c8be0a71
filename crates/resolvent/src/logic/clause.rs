//! Clauses (disjunctions of literals)

use super::literal::Literal;
use crate::config::Notation;
use crate::error::{ClauseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A clause: an unordered, duplicate-free disjunction of literals.
///
/// Equality and hashing depend only on the literal set. Provenance lives in the
/// model that owns the clause (see [`crate::Derivation`]), so two clauses derived
/// along different paths compare equal when their literals match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// Create a clause from literals, collapsing duplicates
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    /// The empty clause (contradiction)
    pub fn empty() -> Self {
        Clause::default()
    }

    /// Parse `{A, ~B}`, `(a ∨ b)`, `[A B]` or `A, B`
    pub fn parse(text: &str) -> std::result::Result<Self, ClauseError> {
        crate::parser::parse_clause(text)
    }

    /// Resolve `left` and `right` on `literal`.
    ///
    /// See [`crate::inference::resolution`] for the inclusion rule.
    pub fn resolve(left: &Clause, right: &Clause, literal: Literal) -> Result<Clause> {
        crate::inference::resolution(left, right, literal)
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Literals in canonical order (ascending letter, positive first)
    pub fn literals(&self) -> impl Iterator<Item = &Literal> + '_ {
        self.literals.iter()
    }

    /// Format this clause with the given notation
    pub fn display(&self, notation: Notation) -> ClauseDisplay<'_> {
        ClauseDisplay {
            clause: self,
            notation,
        }
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::new(iter)
    }
}

impl FromStr for Clause {
    type Err = ClauseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Clause::parse(s)
    }
}

/// Display wrapper for Clause that selects literal and empty-clause symbols
pub struct ClauseDisplay<'a> {
    clause: &'a Clause,
    notation: Notation,
}

impl<'a> fmt::Display for ClauseDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clause.is_empty() {
            return write!(f, "{}", self.notation.contradiction());
        }
        write!(f, "{{")?;
        for (i, lit) in self.clause.literals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", lit.display(self.notation))?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(Notation::Ascii))
    }
}

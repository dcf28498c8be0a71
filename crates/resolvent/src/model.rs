//! The resolution model: the evolving clause sequence of one proof session.

use crate::config::ModelConfig;
use crate::error::{ResolutionError, Result};
use crate::inference::{
    complementary_candidates, count_complementary_pairs, first_complementary_literal, Derivation,
    StepPlan,
};
use crate::logic::{Clause, Literal};
use crate::parser::parse_clauses;
use indexmap::IndexSet;
use std::fmt;
use tracing::debug;

/// Result of a resolution step on the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The resolvent was new and was appended at this index
    Added(usize),
    /// An equal clause already sits at this index; the model is unchanged
    Duplicate(usize),
}

impl ResolveOutcome {
    /// Index of the resolvent in the model
    pub fn index(&self) -> usize {
        match self {
            ResolveOutcome::Added(idx) | ResolveOutcome::Duplicate(idx) => *idx,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, ResolveOutcome::Added(_))
    }
}

/// An ordered, duplicate-free clause sequence.
///
/// The sequence is never empty and only grows by appending, so indices handed
/// out to callers stay valid and every derived clause sits after its parents.
/// The first occurrence of a clause keeps its derivation.
#[derive(Debug, Clone)]
pub struct ResolutionModel {
    clauses: IndexSet<Clause>,
    /// Parallel to `clauses`
    derivations: Vec<Derivation>,
    initial_clause_count: usize,
    config: ModelConfig,
}

impl ResolutionModel {
    /// Create a model from premises, dropping later duplicates
    pub fn new(clauses: impl IntoIterator<Item = Clause>) -> Result<Self> {
        Self::with_config(clauses, ModelConfig::default())
    }

    pub fn with_config(clauses: impl IntoIterator<Item = Clause>, config: ModelConfig) -> Result<Self> {
        let mut given = 0;
        let mut set = IndexSet::new();
        for clause in clauses {
            given += 1;
            set.insert(clause);
        }

        if set.is_empty() {
            return Err(ResolutionError::EmptyModel);
        }
        if !config.admits(set.len()) {
            return Err(ResolutionError::ClauseLimit {
                limit: config.max_clauses,
            });
        }

        debug!(given, kept = set.len(), "built resolution model");
        Ok(ResolutionModel {
            derivations: vec![Derivation::Input; set.len()],
            initial_clause_count: set.len(),
            clauses: set,
            config,
        })
    }

    /// Parse a CNF expression such as `{A, B} & {~A, C}`
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_config(text, ModelConfig::default())
    }

    pub fn parse_with_config(text: &str, config: ModelConfig) -> Result<Self> {
        let clauses = parse_clauses(text)?;
        Self::with_config(clauses, config)
    }

    fn clause_at(&self, operation: &'static str, argument: &'static str, index: usize) -> Result<&Clause> {
        self.clauses
            .get_index(index)
            .ok_or(ResolutionError::IndexOutOfRange {
                operation,
                argument,
                index,
                len: self.clauses.len(),
            })
    }

    fn pair_at(&self, operation: &'static str, left: usize, right: usize) -> Result<(&Clause, &Clause)> {
        Ok((
            self.clause_at(operation, "left", left)?,
            self.clause_at(operation, "right", right)?,
        ))
    }

    /// Resolve the clauses at `left` and `right` on `literal`.
    ///
    /// The resolvent is appended unless an equal clause is already present.
    pub fn resolve(&mut self, left: usize, right: usize, literal: Literal) -> Result<ResolveOutcome> {
        let (a, b) = self.pair_at("resolve", left, right)?;
        let resolvent = Clause::resolve(a, b, literal)?;

        if let Some(existing) = self.clauses.get_index_of(&resolvent) {
            debug!(left, right, %literal, existing, "resolvent already present");
            return Ok(ResolveOutcome::Duplicate(existing));
        }
        if !self.config.admits(self.clauses.len() + 1) {
            return Err(ResolutionError::ClauseLimit {
                limit: self.config.max_clauses,
            });
        }

        debug!(left, right, %literal, resolvent = %resolvent, "appending resolvent");
        let (idx, _) = self.clauses.insert_full(resolvent);
        self.derivations.push(Derivation::Resolution {
            left,
            right,
            pivot: literal,
        });
        Ok(ResolveOutcome::Added(idx))
    }

    /// Number of (literal, literal) pairs across the two clauses that clash
    pub fn count_complementary_pairs(&self, left: usize, right: usize) -> Result<usize> {
        let (a, b) = self.pair_at("count_complementary_pairs", left, right)?;
        Ok(count_complementary_pairs(a, b))
    }

    /// The literal to resolve on when the pair has exactly one clash
    pub fn unique_resolvable_literal(&self, left: usize, right: usize) -> Result<Literal> {
        let (a, b) = self.pair_at("unique_resolvable_literal", left, right)?;
        first_complementary_literal(a, b).ok_or_else(|| ResolutionError::NoComplementaryLiteral {
            left: a.clone(),
            right: b.clone(),
        })
    }

    /// Positive literals, by letter, that the pair could be resolved on
    pub fn complementary_literal_candidates(&self, left: usize, right: usize) -> Result<Vec<Literal>> {
        let (a, b) = self.pair_at("complementary_literal_candidates", left, right)?;
        Ok(complementary_candidates(a, b))
    }

    /// Decide between rejecting, resolving directly, or asking for a letter
    pub fn plan_step(&self, left: usize, right: usize) -> Result<StepPlan> {
        let (a, b) = self.pair_at("plan_step", left, right)?;
        Ok(StepPlan::for_pair(a, b))
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Clauses in derivation order
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.clauses.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Clause> {
        self.clauses.get_index(index)
    }

    pub fn derivation(&self, index: usize) -> Option<&Derivation> {
        self.derivations.get(index)
    }

    /// (left, right) parent indices of a derived clause
    pub fn parents(&self, index: usize) -> Option<(usize, usize)> {
        self.derivation(index).and_then(Derivation::parents)
    }

    /// Index of an equal clause, if present
    pub fn index_of(&self, clause: &Clause) -> Option<usize> {
        self.clauses.get_index_of(clause)
    }

    pub fn initial_clause_count(&self) -> usize {
        self.initial_clause_count
    }

    /// Number of clauses added by resolution
    pub fn step_count(&self) -> usize {
        self.clauses.len() - self.initial_clause_count
    }

    pub fn has_contradiction(&self) -> bool {
        self.contradiction_index().is_some()
    }

    /// Index of the empty clause, if one has been derived (or given)
    pub fn contradiction_index(&self) -> Option<usize> {
        self.clauses.get_index_of(&Clause::empty())
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }
}

impl PartialEq for ResolutionModel {
    fn eq(&self, other: &Self) -> bool {
        self.clauses.iter().eq(other.clauses.iter())
    }
}

impl Eq for ResolutionModel {}

impl fmt::Display for ResolutionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResolutionModel(")?;
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", clause.display(self.config.notation))?;
        }
        write!(f, ")")
    }
}

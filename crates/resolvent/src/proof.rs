//! Proof extraction, rendering and verification

use crate::config::Notation;
use crate::error::{ResolutionError, Result, VerificationError};
use crate::inference::Derivation;
use crate::json::ProofJson;
use crate::logic::Clause;
use crate::model::ResolutionModel;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

/// A single step in a proof. Every step produces a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    pub clause_idx: usize,
    pub derivation: Derivation,
    pub conclusion: Clause,
}

/// The clauses that contributed to a contradiction, in derivation order.
///
/// Input premises come first where they appear in the model; every derived
/// clause is listed after both of its parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
    pub empty_clause_idx: usize,
}

impl Proof {
    /// Extract a proof by backward traversal from `clause_idx`.
    ///
    /// Parents always have lower indices than their children, so sorting the
    /// collected indices gives a topological order.
    pub fn extract(model: &ResolutionModel, clause_idx: usize) -> Proof {
        let mut proof_clause_indices = Vec::new();
        let mut visited = HashSet::new();
        let mut to_visit = vec![clause_idx];

        while let Some(idx) = to_visit.pop() {
            if !visited.insert(idx) {
                continue;
            }
            proof_clause_indices.push(idx);
            if let Some(derivation) = model.derivation(idx) {
                to_visit.extend(derivation.premises());
            }
        }

        proof_clause_indices.sort_unstable();

        let steps = proof_clause_indices
            .into_iter()
            .filter_map(|idx| {
                Some(ProofStep {
                    clause_idx: idx,
                    derivation: model.derivation(idx)?.clone(),
                    conclusion: model.get(idx)?.clone(),
                })
            })
            .collect();

        Proof {
            steps,
            empty_clause_idx: clause_idx,
        }
    }

    /// Input clauses the proof starts from
    pub fn premises(&self) -> impl Iterator<Item = &ProofStep> + '_ {
        self.steps.iter().filter(|s| s.derivation.is_input())
    }

    /// Resolution steps, in order
    pub fn inferences(&self) -> impl Iterator<Item = &ProofStep> + '_ {
        self.steps.iter().filter(|s| !s.derivation.is_input())
    }

    pub fn num_inferences(&self) -> usize {
        self.inferences().count()
    }

    /// Render one line per premise, then one numbered line per resolution step
    pub fn render(&self, notation: Notation) -> String {
        let by_index: HashMap<usize, &Clause> = self
            .steps
            .iter()
            .map(|s| (s.clause_idx, &s.conclusion))
            .collect();
        let show = |idx: usize| match by_index.get(&idx) {
            Some(clause) => format!("[{}] {}", idx, clause.display(notation)),
            None => format!("[{}]", idx),
        };

        let mut lines = Vec::with_capacity(self.steps.len());
        for step in self.premises() {
            lines.push(format!("premise {}", show(step.clause_idx)));
        }
        for (n, step) in self.inferences().enumerate() {
            if let Derivation::Resolution { left, right, pivot } = &step.derivation {
                lines.push(format!(
                    "{}. {} {} {} on {} {} {}",
                    n + 1,
                    show(*left),
                    notation.product(),
                    show(*right),
                    pivot.display(notation),
                    notation.yields(),
                    show(step.clause_idx),
                ));
            }
        }
        lines.join("\n")
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> ProofJson {
        self.into()
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Notation::Ascii))
    }
}

impl ResolutionModel {
    /// The derivation of the empty clause, once one exists
    pub fn get_proof(&self) -> Result<Proof> {
        let empty_clause_idx = self
            .contradiction_index()
            .ok_or(ResolutionError::NoContradiction)?;
        let proof = Proof::extract(self, empty_clause_idx);
        debug!(
            empty_clause_idx,
            steps = proof.steps.len(),
            inferences = proof.num_inferences(),
            "extracted proof"
        );
        Ok(proof)
    }

    /// Replay every step of `proof` against this model
    pub fn verify_proof(&self, proof: &Proof) -> std::result::Result<(), VerificationError> {
        for (step_idx, step) in proof.steps.iter().enumerate() {
            let stored = self.get(step.clause_idx).ok_or(VerificationError::InvalidPremise {
                step_idx,
                premise_idx: step.clause_idx,
            })?;

            match &step.derivation {
                Derivation::Input => {
                    if step.clause_idx >= self.initial_clause_count() {
                        return Err(VerificationError::InputNotFound {
                            step_idx,
                            clause_idx: step.clause_idx,
                        });
                    }
                    if stored != &step.conclusion {
                        return Err(VerificationError::InvalidConclusion {
                            step_idx,
                            clause_idx: step.clause_idx,
                            expected: stored.clone(),
                            found: step.conclusion.clone(),
                        });
                    }
                }
                Derivation::Resolution { left, right, pivot } => {
                    for &premise_idx in &[*left, *right] {
                        if premise_idx >= step.clause_idx {
                            return Err(VerificationError::InvalidPremise {
                                step_idx,
                                premise_idx,
                            });
                        }
                    }
                    let (a, b) = match (self.get(*left), self.get(*right)) {
                        (Some(a), Some(b)) => (a, b),
                        _ => {
                            return Err(VerificationError::InvalidPremise {
                                step_idx,
                                premise_idx: (*left).max(*right),
                            })
                        }
                    };
                    let expected = Clause::resolve(a, b, *pivot)
                        .map_err(|source| VerificationError::Resolution { step_idx, source })?;
                    if expected != step.conclusion || stored != &step.conclusion {
                        return Err(VerificationError::InvalidConclusion {
                            step_idx,
                            clause_idx: step.clause_idx,
                            expected,
                            found: step.conclusion.clone(),
                        });
                    }
                }
            }
        }

        match proof.steps.last() {
            Some(last) if last.conclusion.is_empty() && last.clause_idx == proof.empty_clause_idx => Ok(()),
            _ => Err(VerificationError::MissingContradiction),
        }
    }
}

//! JSON serialization types for models and proofs

use crate::config::ModelConfig;
use crate::error::{ResolutionError, Result};
use crate::inference::Derivation;
use crate::logic::{Clause, Literal};
use crate::model::ResolutionModel;
use crate::proof::{Proof, ProofStep};
use serde::{Deserialize, Serialize};

/// JSON representation of a clause and how it entered the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseJson {
    pub index: usize,
    pub literals: Vec<Literal>,
    pub derivation: Derivation,
}

/// JSON representation of a whole model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelJson {
    pub clauses: Vec<ClauseJson>,
    pub initial_clause_count: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contradiction: Option<usize>,
}

impl ModelJson {
    /// Rebuild the model by replaying every recorded resolution step
    pub fn to_model(&self, config: ModelConfig) -> Result<ResolutionModel> {
        let premises = self
            .clauses
            .iter()
            .take(self.initial_clause_count)
            .map(|c| Clause::new(c.literals.iter().copied()));
        let mut model = ResolutionModel::with_config(premises, config)?;

        for entry in self.clauses.iter().skip(self.initial_clause_count) {
            let (left, right, pivot) = match entry.derivation {
                Derivation::Resolution { left, right, pivot } => (left, right, pivot),
                Derivation::Input => {
                    return Err(ResolutionError::InconsistentHistory { index: entry.index })
                }
            };
            let outcome = model.resolve(left, right, pivot)?;
            let replayed = model.get(outcome.index());
            let recorded = Clause::new(entry.literals.iter().copied());
            if !outcome.is_added() || outcome.index() != entry.index || replayed != Some(&recorded) {
                return Err(ResolutionError::InconsistentHistory { index: entry.index });
            }
        }
        Ok(model)
    }
}

/// JSON representation of a proof step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStepJson {
    pub clause_idx: usize,
    pub rule: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub premises: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pivot: Option<Literal>,
    pub clause: String,
}

impl From<&ProofStep> for ProofStepJson {
    fn from(step: &ProofStep) -> Self {
        let pivot = match step.derivation {
            Derivation::Resolution { pivot, .. } => Some(pivot),
            Derivation::Input => None,
        };
        ProofStepJson {
            clause_idx: step.clause_idx,
            rule: step.derivation.rule_name().to_string(),
            premises: step.derivation.premises(),
            pivot,
            clause: step.conclusion.to_string(),
        }
    }
}

/// JSON representation of a proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofJson {
    pub steps: Vec<ProofStepJson>,
    pub empty_clause_idx: usize,
}

impl From<&Proof> for ProofJson {
    fn from(proof: &Proof) -> Self {
        ProofJson {
            steps: proof.steps.iter().map(ProofStepJson::from).collect(),
            empty_clause_idx: proof.empty_clause_idx,
        }
    }
}

impl ResolutionModel {
    /// Convert to JSON representation
    pub fn to_json(&self) -> ModelJson {
        let clauses = self
            .clauses()
            .enumerate()
            .filter_map(|(index, clause)| {
                Some(ClauseJson {
                    index,
                    literals: clause.literals().copied().collect(),
                    derivation: self.derivation(index)?.clone(),
                })
            })
            .collect();

        ModelJson {
            clauses,
            initial_clause_count: self.initial_clause_count(),
            contradiction: self.contradiction_index(),
        }
    }
}

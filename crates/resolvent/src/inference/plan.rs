//! Classification of a chosen clause pair.

use super::resolution::{complementary_candidates, count_complementary_pairs, first_complementary_literal};
use crate::logic::{Clause, Literal};
use serde::{Deserialize, Serialize};

/// What a caller should do with a pair of clauses it picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "literals")]
pub enum StepPlan {
    /// No complementary pair: the clauses cannot be resolved
    Reject,
    /// Exactly one complementary pair: resolve on this literal
    Resolve(Literal),
    /// Several complementary pairs: ask which letter to resolve on
    Choose(Vec<Literal>),
}

impl StepPlan {
    pub fn for_pair(left: &Clause, right: &Clause) -> StepPlan {
        match count_complementary_pairs(left, right) {
            0 => StepPlan::Reject,
            1 => match first_complementary_literal(left, right) {
                Some(literal) => StepPlan::Resolve(literal),
                None => StepPlan::Reject,
            },
            _ => StepPlan::Choose(complementary_candidates(left, right)),
        }
    }
}

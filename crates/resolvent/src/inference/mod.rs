//! Inference rules for propositional resolution

pub mod derivation;
pub mod plan;
pub mod resolution;


// Re-export the main inference function and types
pub use derivation::Derivation;
pub use plan::StepPlan;
pub use resolution::{
    complementary_candidates, count_complementary_pairs, first_complementary_literal, resolution,
};

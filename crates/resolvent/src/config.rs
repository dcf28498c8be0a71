//! Model configuration types.

/// Symbol set used when rendering literals, clauses and proofs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// `~A`, `{}` for the empty clause, `x` and `->` in proof lines
    #[default]
    Ascii,
    /// `¬A`, `⊥` for the empty clause, `⊗` and `→` in proof lines
    Unicode,
}

impl Notation {
    pub fn negation(&self) -> &'static str {
        match self {
            Notation::Ascii => "~",
            Notation::Unicode => "¬",
        }
    }

    pub fn contradiction(&self) -> &'static str {
        match self {
            Notation::Ascii => "{}",
            Notation::Unicode => "⊥",
        }
    }

    /// Connective between the two parents of a resolution step
    pub fn product(&self) -> &'static str {
        match self {
            Notation::Ascii => "x",
            Notation::Unicode => "⊗",
        }
    }

    pub fn yields(&self) -> &'static str {
        match self {
            Notation::Ascii => "->",
            Notation::Unicode => "→",
        }
    }
}

/// Configuration for a resolution model
#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    /// Upper bound on the clause sequence (0 means no limit)
    pub max_clauses: usize,
    /// Notation used when the model renders its proof
    pub notation: Notation,
}

impl ModelConfig {
    /// True if the model may hold `count` clauses
    pub fn admits(&self, count: usize) -> bool {
        self.max_clauses == 0 || count <= self.max_clauses
    }
}

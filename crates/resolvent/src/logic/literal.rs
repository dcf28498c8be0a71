//! Propositional literals

use crate::error::LiteralError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A propositional atom or its negation.
///
/// The letter is always one of the 26 uppercase ASCII letters. Ordering is by
/// letter first, with the positive literal before the negated one, which is the
/// canonical order used for rendering and for every enumeration in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Literal {
    letter: char,
    negated: bool,
}

impl Literal {
    /// Create a literal, folding `letter` to uppercase
    pub fn new(negated: bool, letter: char) -> Result<Self, LiteralError> {
        if !letter.is_ascii_alphabetic() {
            return Err(LiteralError::NotAlphabetic {
                input: letter.to_string(),
                found: letter,
            });
        }
        Ok(Literal {
            letter: letter.to_ascii_uppercase(),
            negated,
        })
    }

    /// Create a positive literal
    pub fn positive(letter: char) -> Result<Self, LiteralError> {
        Self::new(false, letter)
    }

    /// Create a negated literal
    pub fn negative(letter: char) -> Result<Self, LiteralError> {
        Self::new(true, letter)
    }

    /// Parse `A`, `a`, `~A` or `¬a`
    pub fn parse(text: &str) -> Result<Self, LiteralError> {
        crate::parser::parse_literal(text)
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Same letter, opposite polarity
    pub fn complement(&self) -> Literal {
        Literal {
            letter: self.letter,
            negated: !self.negated,
        }
    }

    /// True if `other` has the same letter and the opposite polarity
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.letter == other.letter && self.negated != other.negated
    }

    /// The positive literal over the same letter
    pub fn atom(&self) -> Literal {
        Literal {
            letter: self.letter,
            negated: false,
        }
    }

    /// Render with the negation symbol of the given notation
    pub fn display(&self, notation: crate::config::Notation) -> LiteralDisplay {
        LiteralDisplay {
            literal: *self,
            notation,
        }
    }
}

/// Display wrapper for Literal that selects the negation symbol
pub struct LiteralDisplay {
    literal: Literal,
    notation: crate::config::Notation,
}

impl fmt::Display for LiteralDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literal.negated {
            write!(f, "{}", self.notation.negation())?;
        }
        write!(f, "{}", self.literal.letter)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "~")?;
        }
        write!(f, "{}", self.letter)
    }
}

impl FromStr for Literal {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Literal::parse(s)
    }
}

impl TryFrom<String> for Literal {
    type Error = LiteralError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Literal::parse(&value)
    }
}

impl From<Literal> for String {
    fn from(literal: Literal) -> Self {
        literal.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_folds_case() {
        let lit = Literal::new(true, 'b').unwrap();
        assert_eq!(lit.letter(), 'B');
        assert!(lit.is_negated());
        assert_eq!(lit, Literal::negative('B').unwrap());
    }

    #[test]
    fn test_new_rejects_non_letters() {
        assert!(matches!(
            Literal::new(false, '1'),
            Err(LiteralError::NotAlphabetic { found: '1', .. })
        ));
        assert!(Literal::new(false, 'é').is_err());
        assert!(Literal::new(false, '~').is_err());
    }

    #[test]
    fn test_equality_uses_letter_and_polarity() {
        let a = Literal::positive('A').unwrap();
        assert_eq!(a, Literal::parse("a").unwrap());
        assert_ne!(a, a.complement());
        assert_ne!(a, Literal::positive('B').unwrap());
        assert!(a.is_complement_of(&a.complement()));
        assert!(!a.is_complement_of(&a));
    }

    #[test]
    fn test_canonical_order() {
        let mut lits = vec![
            Literal::parse("~B").unwrap(),
            Literal::parse("B").unwrap(),
            Literal::parse("~A").unwrap(),
            Literal::parse("C").unwrap(),
        ];
        lits.sort();
        let rendered: Vec<String> = lits.iter().map(|l| l.to_string()).collect();
        assert_eq!(rendered, vec!["~A", "B", "~B", "C"]);
    }

    #[test]
    fn test_display_notation() {
        use crate::config::Notation;
        let lit = Literal::parse("~q").unwrap();
        assert_eq!(lit.to_string(), "~Q");
        assert_eq!(lit.display(Notation::Ascii).to_string(), "~Q");
        assert_eq!(lit.display(Notation::Unicode).to_string(), "¬Q");
    }

    #[test]
    fn test_serde_uses_canonical_text() {
        let lit = Literal::parse("~c").unwrap();
        let json = serde_json::to_string(&lit).unwrap();
        assert_eq!(json, "\"~C\"");
        let back: Literal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lit);
        assert!(serde_json::from_str::<Literal>("\"AB\"").is_err());
    }
}

//! Parser for free-form CNF notation
//!
//! Literals are `~?[A-Za-z]` (`¬` is accepted as a negation marker too).
//! A clause is an optionally bracketed list of literals separated by commas,
//! `∨` or whitespace. A model is a list of clauses separated by `&`, `∧` or
//! whitespace; when the text contains bracket groups, top-level commas also
//! separate clauses.

use crate::error::{ClauseError, LiteralError, ResolutionError};
use crate::logic::{Clause, Literal};
use nom::{
    character::complete::{one_of, satisfy},
    combinator::{map, opt},
    IResult,
};
use tracing::trace;

const NEGATION_MARKERS: &str = "~¬";
const BRACKETS: [(char, char); 3] = [('{', '}'), ('(', ')'), ('[', ']')];

fn negation_marker(input: &str) -> IResult<&str, bool> {
    map(opt(one_of(NEGATION_MARKERS)), |marker| marker.is_some())(input)
}

fn letter(input: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_alphabetic())(input)
}

fn closer_for(open: char) -> Option<char> {
    BRACKETS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|(_, close)| *close)
}

fn is_open_bracket(c: char) -> bool {
    closer_for(c).is_some()
}

fn is_disjunction_separator(c: char) -> bool {
    c == ',' || c == '∨' || c.is_whitespace()
}

fn is_conjunction_separator(c: char) -> bool {
    c == '&' || c == '∧' || c.is_whitespace()
}

/// Parse a single literal
pub fn parse_literal(text: &str) -> Result<Literal, LiteralError> {
    if text.is_empty() {
        return Err(LiteralError::Empty);
    }
    let (rest, negated) = negation_marker(text).unwrap_or((text, false));
    if rest.is_empty() {
        return Err(LiteralError::MissingLetter {
            input: text.to_string(),
        });
    }
    match letter(rest) {
        Ok(("", c)) => Literal::new(negated, c),
        Ok(_) => Err(LiteralError::TooLong {
            input: text.to_string(),
        }),
        Err(_) => Err(LiteralError::NotAlphabetic {
            input: text.to_string(),
            found: rest.chars().next().unwrap_or_default(),
        }),
    }
}

/// Strip one layer of matching brackets if they wrap the whole string
fn strip_brackets(s: &str) -> &str {
    let mut chars = s.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if closer_for(open) == Some(close) => &s[1..s.len() - 1],
        _ => s,
    }
}

/// Parse a single clause
pub fn parse_clause(text: &str) -> Result<Clause, ClauseError> {
    let body = strip_brackets(text.trim());

    let mut literals = Vec::new();
    for token in body.split(is_disjunction_separator).filter(|t| !t.is_empty()) {
        let literal = parse_literal(token).map_err(|source| ClauseError::InvalidLiteral {
            token: token.to_string(),
            source,
        })?;
        literals.push(literal);
    }

    if literals.is_empty() {
        return Err(ClauseError::Empty {
            input: text.to_string(),
        });
    }
    Ok(Clause::new(literals))
}

/// Byte offset of the bracket closing the group opened at the start of `s`
fn matching_close(s: &str) -> Option<usize> {
    let mut expected = Vec::new();
    for (i, c) in s.char_indices() {
        if let Some(close) = closer_for(c) {
            expected.push(close);
        } else if expected.last() == Some(&c) {
            expected.pop();
            if expected.is_empty() {
                return Some(i);
            }
        }
    }
    None
}

/// Strip an outer bracket pair that encloses further groups, as in `{{A, B}, {C}}`
fn strip_outer_group(s: &str) -> &str {
    let Some(first) = s.chars().next() else {
        return s;
    };
    if !is_open_bracket(first) || matching_close(s) != Some(s.len() - 1) {
        return s;
    }
    let inner = &s[1..s.len() - 1];
    if inner.chars().any(is_open_bracket) {
        inner.trim()
    } else {
        s
    }
}

/// Split at top-level separators and bracket-group boundaries.
///
/// Brackets are matched by kind; a stray or mismatched closer is kept as an
/// ordinary character and surfaces later as a malformed clause.
fn split_top_level(s: &str, is_separator: impl Fn(char) -> bool) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut expected: Vec<char> = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in s.char_indices() {
        if expected.is_empty() {
            if is_separator(c) {
                if let Some(st) = start.take() {
                    pieces.push(&s[st..i]);
                }
                continue;
            }
            if is_open_bracket(c) {
                if let Some(st) = start.take() {
                    pieces.push(&s[st..i]);
                }
            }
        }

        if start.is_none() {
            start = Some(i);
        }

        if let Some(close) = closer_for(c) {
            expected.push(close);
        } else if expected.last() == Some(&c) {
            expected.pop();
            if expected.is_empty() {
                if let Some(st) = start.take() {
                    pieces.push(&s[st..i + c.len_utf8()]);
                }
            }
        }
    }

    if let Some(st) = start {
        pieces.push(&s[st..]);
    }
    pieces
}

/// Split a CNF expression into clause texts
pub fn split_clauses(text: &str) -> Vec<&str> {
    let body = strip_outer_group(text.trim());
    let bracketed = body.chars().any(is_open_bracket);
    let pieces = if bracketed {
        split_top_level(body, |c| c == ',' || is_conjunction_separator(c))
    } else {
        split_top_level(body, is_conjunction_separator)
    };
    trace!(bracketed, pieces = ?pieces, "split CNF expression");
    pieces
}

/// Parse a CNF expression into its clauses, in order, duplicates included
pub fn parse_clauses(text: &str) -> Result<Vec<Clause>, ResolutionError> {
    let clauses = split_clauses(text)
        .into_iter()
        .map(|piece| {
            parse_clause(piece).map_err(|source| ResolutionError::InvalidClause {
                input: piece.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if clauses.is_empty() {
        return Err(ResolutionError::NoClauses);
    }
    Ok(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Literal {
        parse_literal(s).unwrap()
    }

    #[test]
    fn test_parse_literal_forms() {
        assert_eq!(lit("A"), Literal::new(false, 'A').unwrap());
        assert_eq!(lit("a"), Literal::new(false, 'A').unwrap());
        assert_eq!(lit("~B"), Literal::new(true, 'B').unwrap());
        assert_eq!(lit("~b"), Literal::new(true, 'B').unwrap());
        assert_eq!(lit("¬c"), Literal::new(true, 'C').unwrap());
    }

    #[test]
    fn test_parse_literal_all_letters() {
        for c in ('a'..='z').chain('A'..='Z') {
            let positive = lit(&c.to_string());
            assert_eq!(positive.letter(), c.to_ascii_uppercase());
            assert!(!positive.is_negated());

            let negated = lit(&format!("~{}", c));
            assert_eq!(negated.letter(), c.to_ascii_uppercase());
            assert!(negated.is_negated());
        }
    }

    #[test]
    fn test_parse_literal_errors() {
        assert_eq!(parse_literal(""), Err(LiteralError::Empty));
        assert!(matches!(
            parse_literal("~"),
            Err(LiteralError::MissingLetter { .. })
        ));
        assert!(matches!(parse_literal("AB"), Err(LiteralError::TooLong { .. })));
        assert!(matches!(parse_literal("~AB"), Err(LiteralError::TooLong { .. })));
        assert!(matches!(
            parse_literal("1"),
            Err(LiteralError::NotAlphabetic { found: '1', .. })
        ));
        assert!(matches!(
            parse_literal("~1"),
            Err(LiteralError::NotAlphabetic { found: '1', .. })
        ));
        assert!(matches!(
            parse_literal("!"),
            Err(LiteralError::NotAlphabetic { found: '!', .. })
        ));
        assert!(matches!(
            parse_literal("~~A"),
            Err(LiteralError::NotAlphabetic { found: '~', .. })
        ));
    }

    #[test]
    fn test_parse_clause_separators() {
        for text in [
            "A B ~C",
            "A,B,~C",
            "A, B, ~C",
            "A ∨ B ∨ ~C",
            "{A, B, ~C}",
            "(A B ~C)",
            "[A,B ∨ ~C]",
            "  { a , b ,~c }  ",
        ] {
            let clause = parse_clause(text).unwrap();
            assert_eq!(clause.len(), 3, "{}", text);
            assert!(clause.contains(&lit("~C")), "{}", text);
        }
    }

    #[test]
    fn test_parse_clause_single_literal() {
        let clause = parse_clause("A").unwrap();
        assert_eq!(clause, Clause::new([lit("A")]));
    }

    #[test]
    fn test_parse_clause_errors() {
        assert!(matches!(parse_clause(""), Err(ClauseError::Empty { .. })));
        assert!(matches!(parse_clause("{}"), Err(ClauseError::Empty { .. })));
        assert!(matches!(parse_clause("( )"), Err(ClauseError::Empty { .. })));
        assert!(matches!(parse_clause("{ , ∨ }"), Err(ClauseError::Empty { .. })));
        match parse_clause("{A, BC}") {
            Err(ClauseError::InvalidLiteral { token, source }) => {
                assert_eq!(token, "BC");
                assert!(matches!(source, LiteralError::TooLong { .. }));
            }
            other => panic!("expected invalid literal, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_clause_strips_one_layer() {
        assert!(parse_clause("{{A}}").is_err());
        // Mismatched brackets are not stripped
        assert!(parse_clause("{A)").is_err());
    }

    #[test]
    fn test_split_clauses() {
        assert_eq!(split_clauses("{A, B} {~B, C}"), vec!["{A, B}", "{~B, C}"]);
        assert_eq!(split_clauses("{A,B},{~A,C}"), vec!["{A,B}", "{~A,C}"]);
        assert_eq!(split_clauses("{A} & {B} ∧ {C}"), vec!["{A}", "{B}", "{C}"]);
        assert_eq!(split_clauses("(A B) (B C)"), vec!["(A B)", "(B C)"]);
        assert_eq!(split_clauses("{A}{B}"), vec!["{A}", "{B}"]);
        assert_eq!(split_clauses("{{A, B}, {C, D}}"), vec!["{A, B}", "{C, D}"]);
        assert_eq!(split_clauses("{A, B} C"), vec!["{A, B}", "C"]);
        assert_eq!(split_clauses("A,B & C"), vec!["A,B", "C"]);
        assert!(split_clauses("& ∧ &").is_empty());
        assert!(split_clauses("").is_empty());
    }

    #[test]
    fn test_split_respects_nesting() {
        assert_eq!(split_clauses("{A, (B)} & [C]"), vec!["{A, (B)}", "[C]"]);
    }

    #[test]
    fn test_parse_clauses_errors() {
        assert_eq!(parse_clauses(""), Err(ResolutionError::NoClauses));
        assert_eq!(parse_clauses("& ∧ &"), Err(ResolutionError::NoClauses));
        match parse_clauses("{A} {invalid!}") {
            Err(ResolutionError::InvalidClause { input, .. }) => assert_eq!(input, "{invalid!}"),
            other => panic!("expected invalid clause, got {:?}", other),
        }
        assert!(matches!(
            parse_clauses("{A} {}"),
            Err(ResolutionError::InvalidClause {
                source: ClauseError::Empty { .. },
                ..
            })
        ));
        assert!(parse_clauses("{A, B").is_err());
    }
}

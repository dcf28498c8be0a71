//! Binary resolution and clause-pair analysis

use crate::error::{ResolutionError, Result};
use crate::logic::{Clause, Literal};
use std::collections::BTreeSet;

/// Resolve two clauses on `pivot`.
///
/// One clause must contain `pivot` and the other its complement. Literals over
/// other letters are always kept. A literal over the pivot's letter is kept only
/// when the other clause contains that exact literal too, so resolving
/// `{Q, ~Q}` with itself on `Q` gives `{Q, ~Q}` back.
pub fn resolution(left: &Clause, right: &Clause, pivot: Literal) -> Result<Clause> {
    let complement = pivot.complement();
    let forward = left.contains(&pivot) && right.contains(&complement);
    let backward = right.contains(&pivot) && left.contains(&complement);

    if !(forward || backward) {
        return Err(ResolutionError::NotResolvable {
            literal: pivot,
            left: left.clone(),
            right: right.clone(),
        });
    }

    let letter = pivot.letter();
    let kept = |lit: &Literal, other: &Clause| lit.letter() != letter || other.contains(lit);

    let literals = left
        .literals()
        .filter(|lit| kept(*lit, right))
        .chain(right.literals().filter(|lit| kept(*lit, left)))
        .copied();

    Ok(Clause::new(literals))
}

/// Literals of `clause` whose complement appears in `other`, in canonical order
fn complemented_in<'a>(clause: &'a Clause, other: &'a Clause) -> impl Iterator<Item = &'a Literal> {
    clause
        .literals()
        .filter(move |lit| other.contains(&lit.complement()))
}

/// Count literal pairs (one from each clause) with the same letter and opposite polarity
pub fn count_complementary_pairs(left: &Clause, right: &Clause) -> usize {
    left.literals()
        .map(|l| right.literals().filter(|r| l.is_complement_of(r)).count())
        .sum()
}

/// First literal that can be resolved on: scans `left` in canonical order, then `right`
pub fn first_complementary_literal(left: &Clause, right: &Clause) -> Option<Literal> {
    complemented_in(left, right)
        .chain(complemented_in(right, left))
        .next()
        .copied()
}

/// One positive literal per letter that occurs with opposite polarity across the two clauses
pub fn complementary_candidates(left: &Clause, right: &Clause) -> Vec<Literal> {
    complemented_in(left, right)
        .map(Literal::atom)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(s: &str) -> Clause {
        Clause::parse(s).unwrap()
    }

    fn lit(s: &str) -> Literal {
        Literal::parse(s).unwrap()
    }

    #[test]
    fn test_resolve_q_not_q_and_q_r_on_q() {
        let result = resolution(&clause("{Q, ~Q}"), &clause("{Q, R}"), lit("Q")).unwrap();
        assert_eq!(result, clause("{R, Q}"));
    }

    #[test]
    fn test_resolve_q_not_q_and_not_q_r_on_q() {
        let result = resolution(&clause("{Q, ~Q}"), &clause("{~Q, R}"), lit("Q")).unwrap();
        assert_eq!(result, clause("{R, ~Q}"));
    }

    #[test]
    fn test_resolve_q_not_q_with_itself_is_noop() {
        let c = clause("{Q, ~Q}");
        assert_eq!(resolution(&c, &c, lit("Q")).unwrap(), c);
        assert_eq!(resolution(&c, &c, lit("~Q")).unwrap(), c);
    }

    #[test]
    fn test_resolve_on_negated_pivot() {
        let result = resolution(&clause("{Q, ~Q}"), &clause("{Q, R}"), lit("~Q")).unwrap();
        assert_eq!(result, clause("{R, Q}"));
    }

    #[test]
    fn test_resolve_a_not_b_and_b_c_on_b() {
        let result = resolution(&clause("{A, ~B}"), &clause("{B, C}"), lit("B")).unwrap();
        assert_eq!(result, clause("{A, C}"));
    }

    #[test]
    fn test_resolve_b_and_not_b_on_b() {
        let result = resolution(&clause("{B}"), &clause("{~B}"), lit("B")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_resolve_either_side_may_hold_pivot() {
        let left = clause("{~B, A}");
        let right = clause("{B, C}");
        assert_eq!(
            resolution(&left, &right, lit("B")).unwrap(),
            resolution(&right, &left, lit("B")).unwrap()
        );
        assert_eq!(
            resolution(&left, &right, lit("~B")).unwrap(),
            clause("{A, C}")
        );
    }

    #[test]
    fn test_resolve_incompatible_clauses() {
        let err = resolution(&clause("{A}"), &clause("{B}"), lit("A")).unwrap_err();
        assert!(matches!(err, ResolutionError::NotResolvable { .. }));

        // Same polarity on both sides is not a complementary pair
        assert!(resolution(&clause("{A, B}"), &clause("{A}"), lit("A")).is_err());
        // Pivot letter absent
        assert!(resolution(&clause("{A}"), &clause("{~A}"), lit("C")).is_err());
    }

    #[test]
    fn test_count_complementary_pairs() {
        assert_eq!(count_complementary_pairs(&clause("{A, B}"), &clause("{~A, ~B}")), 2);
        assert_eq!(count_complementary_pairs(&clause("{A, B}"), &clause("{~A, C}")), 1);
        assert_eq!(count_complementary_pairs(&clause("{A, B}"), &clause("{A, C}")), 0);
        assert_eq!(count_complementary_pairs(&clause("{Q, ~Q}"), &clause("{Q, ~Q}")), 2);
    }

    #[test]
    fn test_first_complementary_literal() {
        assert_eq!(
            first_complementary_literal(&clause("{A, ~C}"), &clause("{C, D}")),
            Some(lit("~C"))
        );
        assert_eq!(
            first_complementary_literal(&clause("{B, ~A}"), &clause("{A, ~B}")),
            Some(lit("~A"))
        );
        assert_eq!(
            first_complementary_literal(&clause("{A}"), &clause("{B}")),
            None
        );
    }

    #[test]
    fn test_first_complementary_literal_resolves() {
        let left = clause("{A, ~C, D}");
        let right = clause("{C, E}");
        let pivot = first_complementary_literal(&left, &right).unwrap();
        assert_eq!(resolution(&left, &right, pivot).unwrap(), clause("{A, D, E}"));
    }

    #[test]
    fn test_complementary_candidates() {
        assert_eq!(
            complementary_candidates(&clause("{~B, A, C}"), &clause("{~A, B, ~C}")),
            vec![lit("A"), lit("B"), lit("C")]
        );
        assert_eq!(
            complementary_candidates(&clause("{Q, ~Q}"), &clause("{Q, ~Q}")),
            vec![lit("Q")]
        );
        assert!(complementary_candidates(&clause("{A}"), &clause("{A}")).is_empty());
    }
}

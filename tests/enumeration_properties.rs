//! Property-based tests for the combination enumerator.
//!
//! These verify the invariants that should hold for every score:
//! - every emitted combination sums to the score
//! - no combination is emitted twice
//! - the enumeration is complete (matches an independent brute force)
//! - every score except 0 and 1 has at least one combination

use proptest::prelude::*;
use sideline::scoring::{enumerate, Combination};
use std::collections::HashSet;

/// Independent five-counter search used as the completeness oracle.
fn brute_force(score: u32) -> Vec<(u32, u32, u32, u32, u32)> {
    let mut found = Vec::new();
    for td2 in 0..=score / 8 {
        for td1 in 0..=score / 7 {
            for td0 in 0..=score / 6 {
                for fg in 0..=score / 3 {
                    for safeties in 0..=score / 2 {
                        // Zero plays is not a combination of scoring plays.
                        if td2 + td1 + td0 + fg + safeties == 0 {
                            continue;
                        }
                        if td2 * 8 + td1 * 7 + td0 * 6 + fg * 3 + safeties * 2 == score {
                            found.push((td2, td1, td0, fg, safeties));
                        }
                    }
                }
            }
        }
    }
    found
}

fn as_tuple(c: &Combination) -> (u32, u32, u32, u32, u32) {
    (
        c.td_two_pt,
        c.td_one_pt,
        c.td_plain,
        c.field_goals,
        c.safeties,
    )
}

proptest! {
    #[test]
    fn prop_every_combination_sums_to_score(score in 0u32..=150) {
        for combination in enumerate(score) {
            prop_assert_eq!(combination.total(), score);
        }
    }

    #[test]
    fn prop_no_duplicate_combinations(score in 0u32..=150) {
        let combos: Vec<_> = enumerate(score).map(|c| as_tuple(&c)).collect();
        let distinct: HashSet<_> = combos.iter().copied().collect();
        prop_assert_eq!(combos.len(), distinct.len());
    }

    #[test]
    fn prop_enumeration_is_complete(score in 0u32..=120) {
        let emitted: HashSet<_> = enumerate(score).map(|c| as_tuple(&c)).collect();
        let expected: HashSet<_> = brute_force(score).into_iter().collect();
        prop_assert_eq!(emitted, expected);
    }

    #[test]
    fn prop_every_score_above_one_is_reachable(score in 2u32..=150) {
        prop_assert!(enumerate(score).next().is_some());
    }

    #[test]
    fn prop_enumeration_is_deterministic(score in 0u32..=100) {
        let first: Vec<_> = enumerate(score).map(|c| as_tuple(&c)).collect();
        let second: Vec<_> = enumerate(score).map(|c| as_tuple(&c)).collect();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_unreachable_scores_are_exactly_zero_and_one() {
    let unreachable: Vec<u32> = (0..=60).filter(|&s| enumerate(s).next().is_none()).collect();
    assert_eq!(unreachable, vec![0, 1]);
}

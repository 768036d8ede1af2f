//! Minimax worst-case calculation for Mastermind scores
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible score.

use crate::core::{ALL_SCORES, Code, SCORE_INDEX_SPACE, Score};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each possible score that could result from this guess:
/// - Count how many candidates would produce that score
/// - Return the maximum count (worst case)
///
/// Counting happens in a single pass over the candidates into a dense bucket
/// array, which yields the same per-score counts as scanning the candidates
/// once per score.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let guess: Code = "RRGG".parse().unwrap();
/// let candidates: Vec<Code> = ["RGBY", "BBYY", "OOPP"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// // BBYY and OOPP both score 0B 0W against RRGG
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    let mut buckets = [0usize; SCORE_INDEX_SPACE];

    for candidate in candidates {
        buckets[Score::evaluate(guess, candidate).index()] += 1;
    }

    buckets.iter().copied().max().unwrap_or(0)
}

/// Group candidates by the score they produce with the guess
///
/// Only scores with at least one candidate appear in the map.
#[must_use]
pub fn partition(guess: &Code, candidates: &[Code]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let score = Score::evaluate(guess, candidate);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}

/// Candidate counts for every reachable score, in `ALL_SCORES` order
///
/// Unlike `partition`, empty buckets are listed with a zero count.
#[must_use]
pub fn score_distribution(guess: &Code, candidates: &[Code]) -> Vec<(Score, usize)> {
    let counts = partition(guess, candidates);

    ALL_SCORES
        .iter()
        .map(|score| (*score, counts.get(score).copied().unwrap_or(0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALL_CODES;

    fn codes(list: &[&str]) -> Vec<Code> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    /// Count per score by scanning the candidates once per score
    fn brute_force_max(guess: &Code, candidates: &[Code]) -> usize {
        ALL_SCORES
            .iter()
            .map(|score| {
                candidates
                    .iter()
                    .filter(|c| Score::evaluate(guess, c) == *score)
                    .count()
            })
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn max_remaining_perfect_split() {
        // Each candidate lands in its own bucket
        let guess: Code = "RGBY".parse().unwrap();
        let candidates = codes(&["RGBY", "OOPP"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn max_remaining_all_same_score() {
        let guess: Code = "PPPP".parse().unwrap();
        let candidates = codes(&["RRRR", "GGGG", "BBBB"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess: Code = "RRGG".parse().unwrap();
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn opener_worst_case_over_full_universe() {
        // RRGG leaves at most 256 candidates, the classic figure for 1122
        let guess: Code = "RRGG".parse().unwrap();
        assert_eq!(calculate_max_remaining(&guess, &ALL_CODES), 256);
    }

    #[test]
    fn matches_per_score_scan() {
        let candidates: Vec<Code> = ALL_CODES.iter().step_by(11).copied().collect();
        for guess in ALL_CODES.iter().step_by(97) {
            assert_eq!(
                calculate_max_remaining(guess, &candidates),
                brute_force_max(guess, &candidates)
            );
        }
    }

    #[test]
    fn partition_counts_sum_to_candidates() {
        let guess: Code = "RRGG".parse().unwrap();
        let groups = partition(&guess, &ALL_CODES);

        assert_eq!(groups.values().sum::<usize>(), ALL_CODES.len());
        assert!(groups.keys().all(|score| ALL_SCORES.contains(score)));
        assert_eq!(groups.get(&Score::WIN), Some(&1));
    }

    #[test]
    fn distribution_lists_every_score() {
        let guess: Code = "RRGG".parse().unwrap();
        let candidates = codes(&["RRGG", "BBYY"]);
        let distribution = score_distribution(&guess, &candidates);

        assert_eq!(distribution.len(), ALL_SCORES.len());
        assert_eq!(distribution.iter().map(|(_, n)| n).sum::<usize>(), 2);
        assert!(distribution.contains(&(Score::WIN, 1)));
        assert!(distribution.contains(&(Score::new(0, 0).unwrap(), 1)));
    }
}

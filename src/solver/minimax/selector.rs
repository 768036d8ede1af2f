//! Minimax-based guess selection strategy
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the code with the lowest maximum remaining candidates and that value,
/// or `None` if the guess pool is empty.
///
/// Ties go to the code that comes first in `guess_pool`. The parallel path
/// reduces over `(worst, position)` pairs, so it picks exactly the same code
/// as the sequential scan.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{ALL_CODES, Code};
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let candidates: Vec<Code> = ["RGBY", "RGBO", "RGBP"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let (best, max_remaining) = select_best_guess(&ALL_CODES, &candidates, true).unwrap();
/// assert_eq!(max_remaining, 1);
/// assert_eq!(best, select_best_guess(&ALL_CODES, &candidates, false).unwrap().0);
/// ```
#[must_use]
pub fn select_best_guess(
    guess_pool: &[Code],
    candidates: &[Code],
    parallel: bool,
) -> Option<(Code, usize)> {
    if parallel {
        guess_pool
            .par_iter()
            .enumerate()
            .map(|(position, guess)| (calculate_max_remaining(guess, candidates), position))
            .min()
            .map(|(max_remaining, position)| (guess_pool[position], max_remaining))
    } else {
        let mut best: Option<(Code, usize)> = None;

        for guess in guess_pool {
            let max_remaining = calculate_max_remaining(guess, candidates);
            if best.is_none_or(|(_, current)| max_remaining < current) {
                best = Some((*guess, max_remaining));
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ALL_CODES, ALL_SCORES, Score};

    fn codes(list: &[&str]) -> Vec<Code> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let guesses = codes(&["PPPP", "RGBY"]);
        let candidates = codes(&["RGBY", "RGYB", "GRBY", "YBGR"]);

        let (best, max_remaining) = select_best_guess(&guesses, &candidates, false).unwrap();

        // PPPP can't tell any of them apart
        assert_eq!(best.to_string(), "RGBY");
        assert!(max_remaining < 4);
    }

    #[test]
    fn ties_keep_earliest_guess() {
        // Neither guess shares a color with the candidate
        let guesses = codes(&["OOOO", "PPPP"]);
        let candidates = codes(&["RRRR"]);

        for parallel in [false, true] {
            let (best, max_remaining) =
                select_best_guess(&guesses, &candidates, parallel).unwrap();
            assert_eq!(best.to_string(), "OOOO");
            assert_eq!(max_remaining, 1);
        }
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = codes(&["RGBY"]);
        assert!(select_best_guess(&[], &candidates, false).is_none());
        assert!(select_best_guess(&[], &candidates, true).is_none());
    }

    #[test]
    fn parallel_matches_sequential() {
        let opener: Code = "RRGG".parse().unwrap();
        let candidate_sets = [
            codes(&["RRGB", "RGRB", "BGRR", "GGBB", "YYOP"]),
            ALL_CODES.iter().step_by(5).copied().collect(),
            ALL_CODES
                .iter()
                .filter(|c| Score::evaluate(&opener, c) == Score::new(1, 1).unwrap())
                .copied()
                .collect::<Vec<_>>(),
        ];

        for candidates in &candidate_sets {
            assert_eq!(
                select_best_guess(&ALL_CODES, candidates, true),
                select_best_guess(&ALL_CODES, candidates, false)
            );
        }
    }

    #[test]
    fn brute_force_three_candidates() {
        let candidates = codes(&["RRGB", "GBYO", "POYR"]);

        let (best, max_remaining) = select_best_guess(&ALL_CODES, &candidates, true).unwrap();

        // Recompute every guess's worst bucket by scanning once per score
        let worst = |guess: &Code| {
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
        };
        let optimum = ALL_CODES.iter().map(worst).min().unwrap();
        let first_optimal = ALL_CODES.iter().find(|g| worst(*g) == optimum).unwrap();

        assert_eq!(max_remaining, optimum);
        assert_eq!(best, *first_optimal);
        // RRGB alone already gives all three different scores
        assert_eq!(optimum, 1);
    }
}

//! Guess analysis command
//!
//! Shows how a guess splits a candidate set across all possible scores.

use crate::core::{Code, Score};
use crate::solver::minimax::score_distribution;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub total_candidates: usize,
    /// Candidate count per reachable score (zero counts included)
    pub distribution: Vec<(Score, usize)>,
    /// Size of the largest bucket
    pub worst_case: usize,
    /// Average bucket size weighted by the chance of landing in it
    pub expected_remaining: f64,
}

impl AnalysisResult {
    /// Number of scores at least one candidate produces
    #[must_use]
    pub fn nonempty_buckets(&self) -> usize {
        self.distribution.iter().filter(|(_, n)| *n > 0).count()
    }
}

/// Analyze how a guess partitions the given candidates
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not a valid code
/// - The candidate set is empty
pub fn analyze_guess(guess: &str, candidates: &[Code]) -> Result<AnalysisResult, String> {
    let guess: Code = guess.parse().map_err(|e| format!("Invalid guess: {e}"))?;

    if candidates.is_empty() {
        return Err("No candidates to analyze against".to_string());
    }

    let distribution = score_distribution(&guess, candidates);
    let total_candidates = candidates.len();
    let worst_case = distribution.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let sum_of_squares: usize = distribution.iter().map(|(_, n)| n * n).sum();
    let expected_remaining = sum_of_squares as f64 / total_candidates as f64;

    Ok(AnalysisResult {
        guess,
        total_candidates,
        distribution,
        worst_case,
        expected_remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ALL_CODES, ALL_SCORES};

    #[test]
    fn analyze_opening_guess() {
        let result = analyze_guess("RRGG", &ALL_CODES).unwrap();

        assert_eq!(result.guess.to_string(), "RRGG");
        assert_eq!(result.total_candidates, 1296);
        assert_eq!(result.worst_case, 256);
        assert_eq!(result.distribution.len(), ALL_SCORES.len());
        assert_eq!(
            result.distribution.iter().map(|(_, n)| n).sum::<usize>(),
            1296
        );
    }

    #[test]
    fn expected_remaining_bounds() {
        let result = analyze_guess("RGBY", &ALL_CODES).unwrap();

        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.worst_case as f64);
    }

    #[test]
    fn single_color_guess_leaves_few_buckets() {
        // RRRR can only score 0-4 blacks
        let result = analyze_guess("RRRR", &ALL_CODES).unwrap();
        assert_eq!(result.nonempty_buckets(), 5);
        assert_eq!(result.worst_case, 625);
    }

    #[test]
    fn analyze_invalid_guess() {
        assert!(analyze_guess("RRGGB", &ALL_CODES).is_err());
    }

    #[test]
    fn analyze_empty_candidates() {
        assert!(analyze_guess("RRGG", &[]).is_err());
    }
}

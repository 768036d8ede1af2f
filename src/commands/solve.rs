//! Code solving command
//!
//! Solves a specific secret code and returns the solution path.

use crate::core::{Code, Score};
use crate::solver::{RoundReport, Solver};

/// Result of solving a code
pub struct SolveResult {
    pub secret: Code,
    pub rounds: Vec<RoundReport>,
}

impl SolveResult {
    /// Number of guesses it took
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.rounds.len()
    }
}

/// Solve a specific secret with the given solver
///
/// The secret is only used to score guesses; the solver never sees it.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code (4 pegs from R, G, B, Y, O, P)
/// - The solver runs out of candidates
pub fn solve_secret(secret: &str, solver: &Solver) -> Result<SolveResult, String> {
    let secret: Code = secret
        .parse()
        .map_err(|e| format!("Invalid secret code: {e}"))?;

    let mut rounds = Vec::new();
    solver
        .solve_observed(
            |guess| Score::evaluate(&guess, &secret),
            |report| rounds.push(*report),
        )
        .map_err(|e| e.to_string())?;

    Ok(SolveResult { secret, rounds })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALL_CODES;
    use crate::solver::{OPENING_GUESS, SolverConfig};

    fn solver() -> Solver {
        Solver::new(SolverConfig::sequential()).unwrap()
    }

    #[test]
    fn solve_secret_succeeds() {
        let result = solve_secret("BYOP", &solver()).unwrap();

        assert_eq!(result.secret.to_string(), "BYOP");
        assert_eq!(result.rounds.last().unwrap().guess, result.secret);
        assert!(result.guess_count() <= 5);
    }

    #[test]
    fn solve_records_history() {
        let result = solve_secret("gygy", &solver()).unwrap();

        assert_eq!(result.rounds[0].guess, OPENING_GUESS);
        assert_eq!(result.rounds[0].candidates_before, ALL_CODES.len());

        // Each step should show candidate reduction (or stay same)
        for step in &result.rounds {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_opening_guess_wins_immediately() {
        let result = solve_secret("RRGG", &solver()).unwrap();

        assert_eq!(result.guess_count(), 1);
        assert!(result.rounds[0].score.is_win());
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        assert!(solve_secret("RRG", &solver()).is_err());
        assert!(solve_secret("RRGX", &solver()).is_err());
    }
}

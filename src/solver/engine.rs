//! Main Mastermind solver interface

use super::config::SolverConfig;
use super::minimax::select_best_guess;
use crate::core::{ALL_CODES, Code, Peg, Score};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::fmt;

/// First guess of every game: two pegs of the first palette color, two of the second
pub const OPENING_GUESS: Code = Code::new([Peg::Red, Peg::Red, Peg::Green, Peg::Green]);

/// Errors the solver can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Every code was eliminated; the feedback contradicts itself
    NoCandidates,
    /// The dedicated worker pool could not be started
    ThreadPool(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(
                f,
                "No candidates remain; the scores given are inconsistent with every code"
            ),
            Self::ThreadPool(reason) => write!(f, "Failed to start worker pool: {reason}"),
        }
    }
}

impl std::error::Error for SolveError {}

/// What happened in one round of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number
    pub round: usize,
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Main Mastermind solver
///
/// Drives the guess/score cycle. Rounds are strictly sequential; only the
/// minimax search inside a round runs in parallel.
pub struct Solver {
    config: SolverConfig,
    pool: Option<ThreadPool>,
}

impl Solver {
    /// Create a new solver
    ///
    /// A dedicated thread pool is started when parallelism is enabled with a
    /// non-zero worker count; otherwise rayon's global pool is used.
    ///
    /// # Errors
    /// Returns `SolveError::ThreadPool` if the worker pool cannot be built.
    pub fn new(config: SolverConfig) -> Result<Self, SolveError> {
        let pool = if config.enable_parallelism && config.worker_count > 0 {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.worker_count)
                .thread_name(|i| format!("minimax-{i}"))
                .build()
                .map_err(|e| SolveError::ThreadPool(e.to_string()))?;
            Some(pool)
        } else {
            None
        };

        Ok(Self { config, pool })
    }

    /// Get the solver configuration
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Pick the guess for a round given the codes still in play
    ///
    /// - full universe: the fixed opening guess
    /// - one candidate: that candidate
    /// - otherwise: the minimax guess over the whole universe
    ///
    /// # Errors
    /// Returns `SolveError::NoCandidates` if `candidates` is empty.
    pub fn next_guess(&self, candidates: &[Code]) -> Result<Code, SolveError> {
        match candidates {
            [] => Err(SolveError::NoCandidates),
            [only] => Ok(*only),
            _ if candidates.len() == ALL_CODES.len() => Ok(OPENING_GUESS),
            _ => self.minimax_guess(candidates),
        }
    }

    fn minimax_guess(&self, candidates: &[Code]) -> Result<Code, SolveError> {
        let parallel = self.config.parallel_for(candidates.len());
        let search = || select_best_guess(&ALL_CODES, candidates, parallel);

        let best = match &self.pool {
            Some(pool) if parallel => pool.install(search),
            _ => search(),
        };

        best.map(|(guess, _)| guess).ok_or(SolveError::NoCandidates)
    }

    /// Solve a game, calling `attempt` once per round until it reports a win
    ///
    /// `attempt` must score every guess against one fixed secret. If it does
    /// not, the candidate set can run empty and `SolveError::NoCandidates` is
    /// returned instead of a guess picked from nothing.
    ///
    /// # Errors
    /// Returns `SolveError::NoCandidates` on inconsistent feedback.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Score};
    /// use mastermind_solver::solver::{Solver, SolverConfig};
    ///
    /// let secret: Code = "BOYP".parse().unwrap();
    /// let solver = Solver::new(SolverConfig::default()).unwrap();
    ///
    /// let mut rounds = 0;
    /// solver
    ///     .solve(|guess| {
    ///         rounds += 1;
    ///         Score::evaluate(&guess, &secret)
    ///     })
    ///     .unwrap();
    /// assert!(rounds <= 5);
    /// ```
    pub fn solve<F>(&self, attempt: F) -> Result<(), SolveError>
    where
        F: FnMut(Code) -> Score,
    {
        self.solve_observed(attempt, |_| {})
    }

    /// Like `solve`, but hands a `RoundReport` to `on_round` after each round
    ///
    /// # Errors
    /// Returns `SolveError::NoCandidates` on inconsistent feedback.
    pub fn solve_observed<F, R>(&self, mut attempt: F, mut on_round: R) -> Result<(), SolveError>
    where
        F: FnMut(Code) -> Score,
        R: FnMut(&RoundReport),
    {
        let mut candidates: Vec<Code> = ALL_CODES.to_vec();
        let mut round = 0;

        loop {
            round += 1;
            let guess = self.next_guess(&candidates)?;
            let score = attempt(guess);
            let candidates_before = candidates.len();

            if score.is_win() {
                on_round(&RoundReport {
                    round,
                    guess,
                    score,
                    candidates_before,
                    candidates_after: 1,
                });
                return Ok(());
            }

            candidates = narrow(&candidates, &guess, score);

            on_round(&RoundReport {
                round,
                guess,
                score,
                candidates_before,
                candidates_after: candidates.len(),
            });
        }
    }
}

/// Keep the candidates that would have produced `score` for `guess`
///
/// The secret always survives when the score is truthful.
#[must_use]
pub fn narrow(candidates: &[Code], guess: &Code, score: Score) -> Vec<Code> {
    candidates
        .iter()
        .filter(|&code| Score::evaluate(code, guess) == score)
        .copied()
        .collect()
}

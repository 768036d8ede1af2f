//! Benchmark command
//!
//! Tests solver performance across multiple secrets.

use crate::core::{ALL_CODES, Code, Score};
use crate::solver::Solver;
use rand::prelude::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Draw `count` secrets uniformly at random (with repetition)
#[must_use]
pub fn random_secrets(count: usize) -> Vec<Code> {
    let mut rng = rand::rng();
    (0..count)
        .filter_map(|_| ALL_CODES.choose(&mut rng).copied())
        .collect()
}

/// Run benchmark on a set of secret codes
///
/// # Errors
///
/// Returns an error if the solver fails on any secret.
pub fn run_benchmark(solver: &Solver, secrets: &[Code]) -> Result<BenchmarkResult, String> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in secrets {
        let mut guesses = 0;
        solver
            .solve(|guess| {
                guesses += 1;
                Score::evaluate(&guess, secret)
            })
            .map_err(|e| format!("Failed on {secret}: {e}"))?;

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_codes = secrets.len();

    Ok(BenchmarkResult {
        total_codes,
        total_guesses,
        average_guesses: if total_codes > 0 {
            total_guesses as f64 / total_codes as f64
        } else {
            0.0
        },
        min_guesses: if total_codes > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

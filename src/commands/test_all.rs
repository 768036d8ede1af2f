//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every possible secret code and generates statistics.

use crate::core::{ALL_CODES, Code, Score};
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub guesses: Vec<Code>,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_codes: Vec<(Code, usize)>,
}

/// Run solver on every secret in universe order (or the first `limit` of them)
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_test_all(solver: &Solver, limit: Option<usize>) -> TestAllStatistics {
    let secrets: Vec<Code> = ALL_CODES
        .iter()
        .take(limit.unwrap_or(ALL_CODES.len()))
        .copied()
        .collect();

    println!("🎯 Testing {} codes...", secrets.len());

    // Progress bar
    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut results = Vec::with_capacity(secrets.len());
    let total_start = Instant::now();

    for (idx, secret) in secrets.iter().enumerate() {
        let code_start = Instant::now();
        let mut guesses = Vec::new();

        let success = solver
            .solve(|guess| {
                guesses.push(guess);
                Score::evaluate(&guess, secret)
            })
            .is_ok();

        results.push(CodeTestResult {
            secret: *secret,
            guesses,
            success,
            duration: code_start.elapsed(),
        });

        // Update progress
        if idx % 25 == 0 {
            let avg = results.iter().map(|r| r.guesses.len()).sum::<usize>() as f64
                / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.3}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

/// Fold per-secret results into statistics
#[must_use]
pub fn summarize(results: &[CodeTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&CodeTestResult> = results.iter().filter(|r| r.success).collect();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for r in &solved {
        *guess_distribution.entry(r.guesses.len()).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.guesses.len()).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let max_guesses = solved.iter().map(|r| r.guesses.len()).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.guesses.len()).min().unwrap_or(0);

    let mut hardest_codes: Vec<(Code, usize)> = solved
        .iter()
        .filter(|r| r.guesses.len() == max_guesses)
        .map(|r| (r.secret, r.guesses.len()))
        .collect();
    hardest_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        hardest_codes,
    }
}

/// Print test-all statistics with beautiful formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_codes.max(1) as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_codes.max(1) as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Guess range:         {}-{}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per code:       {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_codes.max(1) as f64
    );

    // Guess distribution
    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (*count * 40 / max_count.max(1)).max(usize::from(*count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.hardest_codes.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Codes ({} guesses)", stats.max_guesses)
                .yellow()
                .bold()
        );
        for (code, _) in stats.hardest_codes.iter().take(5) {
            println!("  {}", code.to_string().yellow());
        }
    }

    // Known bound for worst-case minimax play
    println!("\n📐 {}", "Worst-Case Bound".bright_cyan().bold());
    let verdict = if stats.max_guesses <= 5 && stats.failed == 0 {
        "✓ every code solved within 5 guesses".bright_green().bold()
    } else {
        "✗ exceeded the 5-guess bound".red().bold()
    };
    println!("  {verdict}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(secret: &str, guesses: &[&str], success: bool) -> CodeTestResult {
        CodeTestResult {
            secret: secret.parse().unwrap(),
            guesses: guesses.iter().map(|g| g.parse().unwrap()).collect(),
            success,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn summarize_counts_and_extremes() {
        let results = vec![
            result("RRGG", &["RRGG"], true),
            result("BYOP", &["RRGG", "BBYY", "BYOP"], true),
            result("PPPP", &["RRGG", "BBYY", "OOPP", "PPPP"], true),
            result("GGGG", &["RRGG"], false),
        ];

        let stats = summarize(&results, Duration::from_secs(1));

        assert_eq!(stats.total_codes, 4);
        assert_eq!(stats.solved, 3);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.max_guesses, 4);
        assert!((stats.average_guesses - 8.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.hardest_codes.len(), 1);
        assert_eq!(stats.hardest_codes[0].0.to_string(), "PPPP");
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 3);
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(&[], Duration::ZERO);
        assert_eq!(stats.total_codes, 0);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
        assert!(stats.hardest_codes.is_empty());
    }

    #[test]
    fn run_test_all_with_limit() {
        let solver = Solver::new(crate::solver::SolverConfig::default()).unwrap();
        let stats = run_test_all(&solver, Some(30));

        assert_eq!(stats.total_codes, 30);
        assert_eq!(stats.failed, 0);
        assert!(stats.max_guesses <= 5);
    }
}

//! Mastermind Solver - CLI
//!
//! Breaks classic 6-color, 4-peg Mastermind codes with worst-case minimax play.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        analyze_guess, print_test_all_statistics, random_secrets, run_benchmark, run_simple,
        run_test_all, solve_secret,
    },
    core::ALL_CODES,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Solver, SolverConfig},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver using worst-case minimax guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run the minimax search on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Worker threads for the minimax search (0 = one per core)
    #[arg(short = 't', long, global = true, default_value = "0")]
    threads: usize,

    /// Search sequentially when fewer candidates than this remain
    #[arg(long, global = true, default_value = "16")]
    threshold: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you keep the secret and score each guess (default)
    Play,

    /// Solve a specific secret code, e.g. RGBY
    Solve {
        /// The secret code to break (letters R G B Y O P)
        code: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess splits the full code universe
    Analyze {
        /// Guess to analyze
        code: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(!self.sequential, self.threads, self.threshold)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let solver = Solver::new(cli.solver_config()).map_err(|e| anyhow::anyhow!(e))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_simple(&solver).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { code, verbose } => run_solve_command(&code, verbose, &solver),
        Commands::Analyze { code } => run_analyze_command(&code),
        Commands::Benchmark { count } => run_benchmark_command(count, &solver),
        Commands::TestAll { limit } => {
            run_test_all_command(limit, &solver);
            Ok(())
        }
    }
}

fn run_solve_command(code: &str, verbose: bool, solver: &Solver) -> Result<()> {
    let result = solve_secret(code, solver).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(code: &str) -> Result<()> {
    let result = analyze_guess(code, &ALL_CODES).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(count: usize, solver: &Solver) -> Result<()> {
    println!("Running benchmark on {count} random codes...");

    let secrets = random_secrets(count);
    let result = run_benchmark(solver, &secrets).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(limit: Option<usize>, solver: &Solver) {
    let config = solver.config();

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} possible codes", ALL_CODES.len());
    if config.enable_parallelism {
        println!(
            "Minimax search: parallel (threads: {}, threshold: {})",
            if config.worker_count == 0 {
                "auto".to_string()
            } else {
                config.worker_count.to_string()
            },
            config.set_size_threshold
        );
    } else {
        println!("Minimax search: sequential");
    }
    println!();

    let stats = run_test_all(solver, limit);
    print_test_all_statistics(&stats);
}

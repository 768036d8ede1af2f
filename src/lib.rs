//! Mastermind Solver
//!
//! A Mastermind solver using worst-case minimax guess selection, breaking every
//! classic 6-color, 4-peg code in at most five guesses.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_solver::core::{Code, Score};
//! use mastermind_solver::solver::{Solver, SolverConfig};
//!
//! let secret: Code = "GYOB".parse().unwrap();
//! let solver = Solver::new(SolverConfig::default()).unwrap();
//!
//! solver
//!     .solve(|guess| {
//!         let score = Score::evaluate(&guess, &secret);
//!         println!("{guess} -> {score}");
//!         score
//!     })
//!     .unwrap();
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Mastermind solving algorithms
//!
//! The solver narrows the candidate set round by round and picks each guess
//! by worst-case minimax over the whole code universe.

mod config;
mod engine;
pub mod minimax;

pub use config::SolverConfig;
pub use engine::{OPENING_GUESS, RoundReport, SolveError, Solver, narrow};

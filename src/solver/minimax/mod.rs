//! Minimax-based Mastermind solver
//!
//! Implements worst-case minimization strategy for Mastermind solving.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, partition, score_distribution};
pub use selector::select_best_guess;

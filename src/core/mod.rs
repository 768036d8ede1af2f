//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod peg;
mod score;
mod universe;

pub use code::{CODE_LENGTH, Code, CodeError, UNIVERSE_SIZE};
pub use peg::{PALETTE_SIZE, Peg, PegError};
pub use score::{SCORE_INDEX_SPACE, Score, ScoreError};
pub use universe::{ALL_CODES, ALL_SCORES};

//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Score};

/// Format a score as key pegs: `●` black, `○` white, `·` empty
#[must_use]
pub fn score_to_pegs(score: Score) -> String {
    let blacks = usize::from(score.blacks());
    let whites = usize::from(score.whites());
    let empty = CODE_LENGTH.saturating_sub(blacks + whites);

    format!("{}{}{}", "●".repeat(blacks), "○".repeat(whites), "·".repeat(empty))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

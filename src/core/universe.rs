//! The code and score universes
//!
//! Both are computed once per process and shared read-only afterwards.

use super::code::{Code, UNIVERSE_SIZE};
use super::score::Score;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Every possible code, in ascending `Code::index` order (`RRRR` .. `PPPP`)
pub static ALL_CODES: LazyLock<Vec<Code>> = LazyLock::new(|| {
    (0..UNIVERSE_SIZE).filter_map(Code::from_index).collect()
});

/// Every score `Score::evaluate` can produce, sorted
///
/// Derived by scoring every pair of codes rather than listed by hand, so
/// unreachable pairs never appear as minimax buckets.
pub static ALL_SCORES: LazyLock<Vec<Score>> = LazyLock::new(|| {
    let reachable: BTreeSet<Score> = ALL_CODES
        .iter()
        .flat_map(|guess| {
            ALL_CODES
                .iter()
                .map(move |candidate| Score::evaluate(guess, candidate))
        })
        .collect();
    reachable.into_iter().collect()
});

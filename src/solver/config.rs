//! Solver performance settings
//!
//! None of these settings change which guesses are made; they only decide how
//! the minimax search is spread over threads.

/// Tuning knobs for the minimax search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Fan the minimax search out over a rayon thread pool
    pub enable_parallelism: bool,
    /// Worker threads for the search (0 = rayon's global pool)
    pub worker_count: usize,
    /// Search sequentially when fewer candidates than this remain
    pub set_size_threshold: usize,
}

impl SolverConfig {
    /// Create a new configuration
    ///
    /// # Parameters
    /// - `enable_parallelism`: whether to use rayon for the minimax search
    /// - `worker_count`: dedicated worker threads (0 uses the global pool)
    /// - `set_size_threshold`: minimum candidate count for parallel search
    #[must_use]
    pub const fn new(
        enable_parallelism: bool,
        worker_count: usize,
        set_size_threshold: usize,
    ) -> Self {
        Self {
            enable_parallelism,
            worker_count,
            set_size_threshold,
        }
    }

    /// Single-threaded configuration
    #[must_use]
    pub const fn sequential() -> Self {
        Self::new(false, 0, 0)
    }

    /// Use a dedicated pool of `worker_count` threads
    #[must_use]
    pub const fn with_workers(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Change the parallel fan-out threshold
    #[must_use]
    pub const fn with_threshold(mut self, set_size_threshold: usize) -> Self {
        self.set_size_threshold = set_size_threshold;
        self
    }

    /// Whether a search over `candidate_count` candidates should run in parallel
    #[inline]
    #[must_use]
    pub const fn parallel_for(&self, candidate_count: usize) -> bool {
        self.enable_parallelism && candidate_count >= self.set_size_threshold
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(true, 0, 16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_parallel() {
        let config = SolverConfig::default();
        assert!(config.enable_parallelism);
        assert_eq!(config.worker_count, 0);
        assert_eq!(config.set_size_threshold, 16);
    }

    #[test]
    fn threshold_gates_parallelism() {
        let config = SolverConfig::default().with_threshold(10);
        assert!(!config.parallel_for(9));
        assert!(config.parallel_for(10));
        assert!(config.parallel_for(500));
    }

    #[test]
    fn sequential_never_parallel() {
        let config = SolverConfig::sequential();
        assert!(!config.parallel_for(0));
        assert!(!config.parallel_for(1296));
    }

    #[test]
    fn builder_sets_workers() {
        let config = SolverConfig::default().with_workers(4);
        assert_eq!(config.worker_count, 4);
        assert!(config.enable_parallelism);
    }
}

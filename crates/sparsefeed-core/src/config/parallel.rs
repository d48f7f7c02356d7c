//! Thresholds for parallel batch densification.
//!
//! Densifying a batch writes `rows * ncols` cells. Below a few thousand
//! cells the rayon fork/join overhead dominates, so small batches stay on
//! the calling thread.

use std::sync::OnceLock;

/// Global configuration for parallel thresholds
static GLOBAL_CONFIG: OnceLock<ParallelThresholds> = OnceLock::new();

/// Configuration for parallel execution thresholds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelThresholds {
    /// Minimum number of dense output cells before densification goes parallel
    pub densify_cells: usize,

    /// Minimum number of rows handed to one worker
    pub min_rows_per_task: usize,

    /// Number of available threads (cached)
    pub num_threads: usize,
}

impl Default for ParallelThresholds {
    fn default() -> Self {
        let num_threads = rayon::current_num_threads();

        // More threads = higher overhead = need larger batches
        let thread_scaling = (num_threads as f64).sqrt();
        let base_cells = 16_384;

        Self {
            densify_cells: (base_cells as f64 * thread_scaling) as usize,
            min_rows_per_task: 8,
            num_threads,
        }
    }
}

impl ParallelThresholds {
    /// Thresholds that never enable the parallel path.
    pub fn sequential() -> Self {
        Self {
            densify_cells: usize::MAX,
            min_rows_per_task: usize::MAX,
            num_threads: 1,
        }
    }

    /// Whether a `rows x ncols` densification should run in parallel.
    pub fn should_parallelize_densify(&self, rows: usize, ncols: usize) -> bool {
        cfg!(feature = "parallel")
            && self.num_threads > 1
            && rows >= self.min_rows_per_task.saturating_mul(2)
            && rows.saturating_mul(ncols) >= self.densify_cells
    }
}

/// Get the process-wide parallel thresholds.
pub fn parallel_thresholds() -> &'static ParallelThresholds {
    GLOBAL_CONFIG.get_or_init(ParallelThresholds::default)
}

/// Install custom thresholds. Only the first call takes effect; later calls
/// return the rejected value.
pub fn set_parallel_thresholds(
    thresholds: ParallelThresholds,
) -> std::result::Result<(), ParallelThresholds> {
    GLOBAL_CONFIG.set(thresholds)
}

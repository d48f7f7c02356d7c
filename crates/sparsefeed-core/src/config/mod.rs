//! Configuration for batch supply.

pub mod parallel;
pub mod supplier;

// Re-export key items
pub use parallel::{parallel_thresholds, set_parallel_thresholds, ParallelThresholds};
pub use supplier::{SupplierConfig, SupplierConfigBuilder, DEFAULT_BATCH_SIZE};

//! Core types and sparse storage for sparsefeed.
//!
//! This crate provides the building blocks shared by the batch supplier and
//! the GPU diagnostic: scalar types, error types, compressed sparse row
//! storage and the configuration types that drive batching.
//!
//! # Modules
//!
//! - [`config`]: Supplier configuration and parallel thresholds
//! - [`error`]: Error types for sparse storage and batching
//! - [`sparse`]: CSR and COO matrices with row gather and densify
//! - [`types`]: Scalar trait and matrix type aliases

pub mod config;
pub mod error;
pub mod sparse;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{DataError, Result};
pub use types::{DMatrix, DVector, Scalar};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use sparsefeed_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{
        parallel_thresholds, ParallelThresholds, SupplierConfig, SupplierConfigBuilder,
    };
    pub use crate::error::{DataError, Result};
    pub use crate::sparse::{CooMatrix, CsrMatrix};
    pub use crate::types::{DMatrix, DVector, Scalar};
}

//! # sparsefeed
//!
//! Feeds sparse training data to a training loop one dense batch at a
//! time, and checks whether the host exposes a GPU.
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsefeed::prelude::*;
//!
//! let features = CsrMatrix::from_dense(&DMatrix::<f32>::identity(6, 6), 0.0);
//! let labels = vec![0u32, 1, 0, 1, 0, 1];
//!
//! let config = SupplierConfig::new().with_batch_size(4).with_seed(1);
//! let mut supplier = SparseBatchSupplier::new(&features, &labels, config).unwrap();
//!
//! for _epoch in 0..2 {
//!     for batch in supplier.epoch_iter() {
//!         let (x, y) = batch.unwrap().into_parts();
//!         assert_eq!(x.nrows(), y.len());
//!     }
//!     supplier.on_epoch_end();
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Errors, scalar types, CSR/COO storage and configuration
//! - [`data`]: The `BatchSequence` trait and the sparse batch supplier
//! - [`gpu`]: Device registries and the GPU status report

pub use sparsefeed_core as core;
pub use sparsefeed_data as data;
pub use sparsefeed_gpu as gpu;

/// Re-export nalgebra for convenience.
pub use nalgebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sparsefeed_core::prelude::*;
    pub use sparsefeed_data::{Batch, BatchSequence, SparseBatchSupplier};
    pub use sparsefeed_gpu::{run_diagnostic, DeviceRegistry, DiagnosticReport, SystemRegistry};
}

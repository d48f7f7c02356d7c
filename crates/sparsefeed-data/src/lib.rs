//! Batch supply over sparse training data.
//!
//! A training loop consumes data through the [`BatchSequence`] trait: it
//! asks how many batches an epoch holds, fetches them by index, and signals
//! the end of each pass. [`SparseBatchSupplier`] implements that trait on
//! top of a borrowed [`CsrMatrix`](sparsefeed_core::sparse::CsrMatrix) and a
//! borrowed label slice, densifying one batch at a time.
//!
//! # Examples
//!
//! ```rust
//! use sparsefeed_core::{config::SupplierConfig, sparse::CooMatrix};
//! use sparsefeed_data::{BatchSequence, SparseBatchSupplier};
//!
//! let mut coo = CooMatrix::new(10, 3);
//! for row in 0..10 {
//!     coo.push(row, row % 3, 1.0).unwrap();
//! }
//! let features = coo.to_csr();
//! let labels: Vec<u8> = (0..10).map(|r| (r % 2) as u8).collect();
//!
//! let config = SupplierConfig::new().with_batch_size(4).with_shuffle(false);
//! let supplier = SparseBatchSupplier::new(&features, &labels, config).unwrap();
//!
//! assert_eq!(supplier.len(), 3);
//! let last = supplier.get_item(2).unwrap();
//! assert_eq!(last.rows(), &[8, 9]);
//! assert_eq!(last.features().shape(), (2, 3));
//! ```

pub mod batch;
pub mod sequence;
pub mod supplier;

// Re-export main types for convenience
pub use batch::Batch;
pub use sequence::{BatchSequence, EpochIter};
pub use supplier::SparseBatchSupplier;

// Re-export commonly used items from core
pub use sparsefeed_core::{
    config::{SupplierConfig, SupplierConfigBuilder},
    error::{DataError, Result},
};

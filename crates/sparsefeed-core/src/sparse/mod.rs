//! Sparse matrix storage.
//!
//! [`CsrMatrix`] is the storage the batch supplier reads from: rows can be
//! gathered in any order and densified one batch at a time, so peak memory
//! tracks the batch size rather than the dataset size. [`CooMatrix`] is a
//! convenience builder that converts into CSR.

pub mod coo;
pub mod csr;

pub use coo::CooMatrix;
pub use csr::CsrMatrix;

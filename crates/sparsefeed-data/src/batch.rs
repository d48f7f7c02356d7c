//! Dense training batches.

use sparsefeed_core::types::{DMatrix, Scalar};

/// One densified batch: a `(b, F)` feature block, its `b` labels and the
/// source row index of each batch row.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T: Scalar, L> {
    features: DMatrix<T>,
    labels: Vec<L>,
    rows: Vec<usize>,
}

impl<T: Scalar, L> Batch<T, L> {
    pub(crate) fn new(features: DMatrix<T>, labels: Vec<L>, rows: Vec<usize>) -> Self {
        debug_assert_eq!(features.nrows(), labels.len());
        debug_assert_eq!(features.nrows(), rows.len());
        Self {
            features,
            labels,
            rows,
        }
    }

    /// Dense feature block, one row per sample.
    pub fn features(&self) -> &DMatrix<T> {
        &self.features
    }

    /// Labels aligned with the feature rows.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Row indices into the backing dataset.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Number of samples in the batch.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the batch holds no samples.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Splits the batch into `(features, labels)`, the pair a training step consumes.
    pub fn into_parts(self) -> (DMatrix<T>, Vec<L>) {
        (self.features, self.labels)
    }
}

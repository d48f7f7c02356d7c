//! Shuffling batch supplier over CSR feature matrices.
//!
//! The supplier owns exactly one piece of mutable state, the row
//! permutation. Batch `i` covers permutation positions
//! `i * batch_size..min((i + 1) * batch_size, N)`, so the batches of one
//! epoch always partition the dataset rows. Only the rows of the requested
//! batch are ever densified.

use crate::{batch::Batch, sequence::BatchSequence};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use sparsefeed_core::{
    config::SupplierConfig,
    error::{DataError, Result},
    sparse::CsrMatrix,
    types::Scalar,
};
use std::ops::Range;

/// Feeds `(dense features, labels)` batches from borrowed sparse data.
///
/// The RNG is owned by the supplier; pass a seeded generator through
/// [`with_rng`](Self::with_rng) or set [`SupplierConfig::seed`] for
/// reproducible epochs.
#[derive(Debug)]
pub struct SparseBatchSupplier<'a, T: Scalar, L, R = StdRng> {
    features: &'a CsrMatrix<T>,
    labels: &'a [L],
    batch_size: usize,
    shuffle: bool,
    indexes: Vec<usize>,
    rng: R,
    epoch: usize,
}

impl<'a, T: Scalar, L: Clone> SparseBatchSupplier<'a, T, L, StdRng> {
    /// Creates a supplier whose RNG is seeded from `config.seed`, or from
    /// OS entropy when no seed is set.
    pub fn new(features: &'a CsrMatrix<T>, labels: &'a [L], config: SupplierConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(features, labels, config, rng)
    }

    /// Creates a supplier with the default configuration
    /// (32 rows per batch, shuffled).
    pub fn with_defaults(features: &'a CsrMatrix<T>, labels: &'a [L]) -> Result<Self> {
        Self::new(features, labels, SupplierConfig::default())
    }
}

impl<'a, T: Scalar, L: Clone, R: Rng> SparseBatchSupplier<'a, T, L, R> {
    /// Creates a supplier drawing permutations from `rng`.
    ///
    /// Fails when the configuration is invalid or when the feature matrix
    /// and the label slice disagree on the number of rows.
    pub fn with_rng(
        features: &'a CsrMatrix<T>,
        labels: &'a [L],
        config: SupplierConfig,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;

        if features.nrows() != labels.len() {
            return Err(DataError::dimension_mismatch(
                format!("{} labels (one per feature row)", features.nrows()),
                format!("{} labels", labels.len()),
            ));
        }

        let mut supplier = Self {
            features,
            labels,
            batch_size: config.batch_size,
            shuffle: config.shuffle,
            indexes: (0..features.nrows()).collect(),
            rng,
            epoch: 0,
        };

        if supplier.shuffle {
            supplier.reshuffle();
        }

        log::debug!(
            "sparse batch supplier: {} rows x {} features, batch size {}, {} batches, shuffle {}",
            supplier.num_rows(),
            supplier.num_features(),
            supplier.batch_size,
            supplier.batch_count(),
            supplier.shuffle
        );

        Ok(supplier)
    }

    fn reshuffle(&mut self) {
        self.indexes.shuffle(&mut self.rng);
    }

    /// Number of batches per epoch: `ceil(N / batch_size)`.
    pub fn batch_count(&self) -> usize {
        self.num_rows().div_ceil(self.batch_size)
    }

    /// Permutation positions covered by batch `index`.
    pub fn batch_bounds(&self, index: usize) -> Result<Range<usize>> {
        let count = self.batch_count();
        if index >= count {
            return Err(DataError::index_out_of_range(index, count));
        }
        let start = index * self.batch_size;
        let end = (start + self.batch_size).min(self.num_rows());
        Ok(start..end)
    }

    /// Dataset rows that make up batch `index`, in batch order.
    pub fn batch_rows(&self, index: usize) -> Result<&[usize]> {
        let bounds = self.batch_bounds(index)?;
        Ok(&self.indexes[bounds])
    }

    /// Number of samples in batch `index`.
    pub fn batch_size_at(&self, index: usize) -> Result<usize> {
        self.batch_bounds(index).map(|bounds| bounds.len())
    }

    /// Gathers, densifies and returns batch `index`.
    pub fn get_batch(&self, index: usize) -> Result<Batch<T, L>> {
        let rows = self.batch_rows(index)?;
        let features = self.features.densify_rows(rows)?;
        let labels = rows.iter().map(|&r| self.labels[r].clone()).collect();
        Ok(Batch::new(features, labels, rows.to_vec()))
    }

    /// Marks the end of an epoch, drawing a fresh permutation when
    /// shuffling is enabled.
    pub fn on_epoch_end(&mut self) {
        self.epoch += 1;
        if self.shuffle {
            self.reshuffle();
            log::debug!("epoch {} finished, rows reshuffled", self.epoch);
        }
    }

    /// Number of completed epochs.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// Current row permutation.
    pub fn permutation(&self) -> &[usize] {
        &self.indexes
    }

    /// Configured batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Whether rows are reshuffled between epochs.
    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    /// Number of dataset rows `N`.
    pub fn num_rows(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns `F`.
    pub fn num_features(&self) -> usize {
        self.features.ncols()
    }
}

impl<T: Scalar, L: Clone, R: Rng> BatchSequence for SparseBatchSupplier<'_, T, L, R> {
    type Item = Batch<T, L>;

    fn len(&self) -> usize {
        self.batch_count()
    }

    fn get_item(&self, index: usize) -> Result<Self::Item> {
        self.get_batch(index)
    }

    fn on_epoch_end(&mut self) {
        SparseBatchSupplier::on_epoch_end(self);
    }
}

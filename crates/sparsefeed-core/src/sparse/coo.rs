//! Coordinate (COO) format builder.

use super::CsrMatrix;
use crate::{
    error::{DataError as Error, Result},
    types::Scalar,
};

/// Coordinate (COO) format matrix for easier construction.
#[derive(Debug, Clone)]
pub struct CooMatrix<T: Scalar> {
    /// Number of rows
    nrows: usize,
    /// Number of columns
    ncols: usize,
    /// Triplets (row, col, value)
    triplets: Vec<(usize, usize, T)>,
}

impl<T: Scalar> CooMatrix<T> {
    /// Creates a new empty COO matrix.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            triplets: Vec::new(),
        }
    }

    /// Builds a COO matrix from `(row, col, value)` triplets.
    pub fn from_triplets<I>(nrows: usize, ncols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut coo = Self::new(nrows, ncols);
        for (r, c, v) in triplets {
            coo.push(r, c, v)?;
        }
        Ok(coo)
    }

    /// Adds an entry to the matrix. Explicit zeros are not stored.
    pub fn push(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.nrows {
            return Err(Error::index_out_of_range(row, self.nrows));
        }

        if col >= self.ncols {
            return Err(Error::index_out_of_range(col, self.ncols));
        }

        if value != T::zero() {
            self.triplets.push((row, col, value));
        }

        Ok(())
    }

    /// Number of stored triplets, duplicates included.
    pub fn len(&self) -> usize {
        self.triplets.len()
    }

    /// Whether no entries have been stored.
    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }

    /// Converts to CSR format, summing duplicate coordinates.
    pub fn to_csr(&self) -> CsrMatrix<T> {
        let mut sorted = self.triplets.clone();
        sorted.sort_by_key(|&(r, c, _)| (r, c));

        let mut row_ptr = Vec::with_capacity(self.nrows + 1);
        row_ptr.push(0);
        let mut col_idx: Vec<usize> = Vec::with_capacity(sorted.len());
        let mut values: Vec<T> = Vec::with_capacity(sorted.len());

        let mut current_row = 0;
        let mut last: Option<(usize, usize)> = None;
        for (r, c, v) in sorted {
            if last == Some((r, c)) {
                if let Some(tail) = values.last_mut() {
                    *tail = *tail + v;
                }
                continue;
            }
            while current_row < r {
                row_ptr.push(col_idx.len());
                current_row += 1;
            }
            col_idx.push(c);
            values.push(v);
            last = Some((r, c));
        }

        while current_row < self.nrows {
            row_ptr.push(col_idx.len());
            current_row += 1;
        }

        CsrMatrix::from_parts(self.nrows, self.ncols, row_ptr, col_idx, values)
    }
}

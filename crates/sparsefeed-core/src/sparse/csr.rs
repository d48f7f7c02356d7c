//! Compressed Sparse Row storage.

use crate::{
    config::{parallel_thresholds, ParallelThresholds},
    error::{DataError as Error, Result},
    types::{DMatrix, Scalar},
};
use num_traits::Float;
use rayon::prelude::*;

/// Compressed Sparse Row (CSR) format matrix.
///
/// Row `i` owns the entries `row_ptr[i]..row_ptr[i + 1]` of `col_idx` and
/// `values`. Duplicate column indices within a row are allowed and are
/// summed on densification.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T: Scalar> {
    /// Number of rows
    nrows: usize,
    /// Number of columns
    ncols: usize,
    /// Row pointers (length nrows + 1)
    row_ptr: Vec<usize>,
    /// Column indices (length nnz)
    col_idx: Vec<usize>,
    /// Non-zero values (length nnz)
    values: Vec<T>,
}

impl<T: Scalar> CsrMatrix<T> {
    /// Creates a new CSR matrix from raw data.
    pub fn new(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        let expected_ptrs = nrows.checked_add(1).ok_or_else(|| {
            Error::invalid_structure(format!("row count {} is too large", nrows))
        })?;
        if row_ptr.len() != expected_ptrs {
            return Err(Error::dimension_mismatch(
                format!("row_ptr length {}", expected_ptrs),
                format!("row_ptr length {}", row_ptr.len()),
            ));
        }

        if row_ptr[0] != 0 {
            return Err(Error::invalid_structure(format!(
                "row_ptr must start at 0, starts at {}",
                row_ptr[0]
            )));
        }

        if let Some(i) = row_ptr.windows(2).position(|w| w[0] > w[1]) {
            return Err(Error::invalid_structure(format!(
                "row_ptr decreases between rows {} and {}",
                i,
                i + 1
            )));
        }

        let nnz = row_ptr[nrows];
        if col_idx.len() != nnz {
            return Err(Error::dimension_mismatch(
                format!("col_idx length {}", nnz),
                format!("col_idx length {}", col_idx.len()),
            ));
        }

        if values.len() != nnz {
            return Err(Error::dimension_mismatch(
                format!("values length {}", nnz),
                format!("values length {}", values.len()),
            ));
        }

        if let Some(&j) = col_idx.iter().find(|&&j| j >= ncols) {
            return Err(Error::invalid_structure(format!(
                "column index {} out of range for {} columns",
                j, ncols
            )));
        }

        Ok(Self {
            nrows,
            ncols,
            row_ptr,
            col_idx,
            values,
        })
    }

    /// Assembles a matrix from buffers already known to be well formed.
    pub(crate) fn from_parts(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        debug_assert_eq!(row_ptr.len(), nrows + 1);
        debug_assert_eq!(col_idx.len(), values.len());
        Self {
            nrows,
            ncols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Creates an all-zero matrix with the given shape.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            row_ptr: vec![0; nrows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates a CSR matrix from a dense matrix, dropping entries whose
    /// magnitude does not exceed `tolerance`.
    pub fn from_dense(dense: &DMatrix<T>, tolerance: T) -> Self {
        let mut row_ptr = Vec::with_capacity(dense.nrows() + 1);
        row_ptr.push(0);
        let mut col_idx = Vec::new();
        let mut values = Vec::new();

        for i in 0..dense.nrows() {
            for j in 0..dense.ncols() {
                let val = dense[(i, j)];
                if Float::abs(val) > tolerance {
                    col_idx.push(j);
                    values.push(val);
                }
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            nrows: dense.nrows(),
            ncols: dense.ncols(),
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Converts the whole matrix to dense storage.
    pub fn to_dense(&self) -> DMatrix<T> {
        let mut dense = DMatrix::zeros(self.nrows, self.ncols);

        for i in 0..self.nrows {
            let (cols, vals) = self.row_unchecked(i);
            for (&j, &v) in cols.iter().zip(vals) {
                dense[(i, j)] = dense[(i, j)] + v;
            }
        }

        dense
    }

    /// Returns the number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Returns the number of stored elements.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the sparsity (fraction of zero elements).
    #[inline]
    pub fn sparsity(&self) -> f64 {
        // Counted in f64 so absurd shapes cannot overflow.
        let total_elements = self.nrows as f64 * self.ncols as f64;
        if total_elements == 0.0 {
            0.0
        } else {
            1.0 - (self.nnz() as f64 / total_elements)
        }
    }

    /// Returns the column indices and values stored in row `i`.
    pub fn row(&self, i: usize) -> Result<(&[usize], &[T])> {
        if i >= self.nrows {
            return Err(Error::index_out_of_range(i, self.nrows));
        }
        Ok(self.row_unchecked(i))
    }

    #[inline]
    fn row_unchecked(&self, i: usize) -> (&[usize], &[T]) {
        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];
        (&self.col_idx[start..end], &self.values[start..end])
    }

    fn check_rows(&self, rows: &[usize]) -> Result<()> {
        match rows.iter().find(|&&r| r >= self.nrows) {
            Some(&r) => Err(Error::index_out_of_range(r, self.nrows)),
            None => Ok(()),
        }
    }

    /// Gathers the given rows, in order, into a new CSR matrix.
    ///
    /// Rows may repeat and need not be sorted.
    pub fn select_rows(&self, rows: &[usize]) -> Result<Self> {
        self.check_rows(rows)?;

        let nnz: usize = rows
            .iter()
            .map(|&r| self.row_ptr[r + 1] - self.row_ptr[r])
            .sum();

        let mut row_ptr = Vec::with_capacity(rows.len() + 1);
        row_ptr.push(0);
        let mut col_idx = Vec::with_capacity(nnz);
        let mut values = Vec::with_capacity(nnz);

        for &r in rows {
            let (cols, vals) = self.row_unchecked(r);
            col_idx.extend_from_slice(cols);
            values.extend_from_slice(vals);
            row_ptr.push(col_idx.len());
        }

        Ok(Self {
            nrows: rows.len(),
            ncols: self.ncols,
            row_ptr,
            col_idx,
            values,
        })
    }

    /// Densifies only the given rows into a `(rows.len(), ncols)` matrix.
    ///
    /// Equivalent to `self.select_rows(rows)?.to_dense()` without building
    /// the intermediate CSR matrix. Large outputs are filled in parallel
    /// according to the process-wide [`parallel_thresholds`].
    pub fn densify_rows(&self, rows: &[usize]) -> Result<DMatrix<T>> {
        self.densify_rows_with(parallel_thresholds(), rows)
    }

    /// Like [`densify_rows`](Self::densify_rows), deciding between the
    /// sequential and parallel fill with the given thresholds.
    pub fn densify_rows_with(
        &self,
        thresholds: &ParallelThresholds,
        rows: &[usize],
    ) -> Result<DMatrix<T>> {
        self.check_rows(rows)?;

        let ncols = self.ncols;
        if ncols == 0 || rows.is_empty() {
            return Ok(DMatrix::zeros(rows.len(), ncols));
        }

        let cells = rows.len().checked_mul(ncols).ok_or_else(|| {
            Error::invalid_structure(format!(
                "dense batch of {} x {} cells overflows usize",
                rows.len(),
                ncols
            ))
        })?;

        if thresholds.should_parallelize_densify(rows.len(), ncols) {
            log::trace!("densifying {} x {} batch in parallel", rows.len(), ncols);
            let mut data = vec![T::zero(); cells];
            data.par_chunks_mut(ncols)
                .zip(rows.par_iter())
                .for_each(|(out, &r)| {
                    let (cols, vals) = self.row_unchecked(r);
                    for (&j, &v) in cols.iter().zip(vals) {
                        out[j] = out[j] + v;
                    }
                });
            return Ok(DMatrix::from_row_slice(rows.len(), ncols, &data));
        }

        let mut dense = DMatrix::zeros(rows.len(), ncols);
        for (i, &r) in rows.iter().enumerate() {
            let (cols, vals) = self.row_unchecked(r);
            for (&j, &v) in cols.iter().zip(vals) {
                dense[(i, j)] = dense[(i, j)] + v;
            }
        }
        Ok(dense)
    }

    /// Raw row pointer array.
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Raw column index array.
    pub fn col_idx(&self) -> &[usize] {
        &self.col_idx
    }

    /// Raw value array.
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

//! Compressed sparse row matrix assembled from triplets.
//!
//! Discrete operators on meshes are naturally written as a sum of small
//! per-face contributions. [`CsrMatrix::from_triplets`] accepts those
//! contributions as `(row, col, value)` triplets and sums entries that land
//! on the same position, so callers never accumulate in place.

use nalgebra::{DMatrix, DVector};

use crate::error::{MeshError, Result};

/// Compressed Sparse Row (CSR) matrix.
///
/// Stores a sparse matrix in CSR format for efficient matrix-vector multiplication.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Row pointers: row_ptr[i] is the index in col_idx/values where row i starts.
    /// Length is rows + 1, with row_ptr[rows] = nnz.
    row_ptr: Vec<usize>,
    /// Column indices for each stored value, sorted within each row.
    col_idx: Vec<usize>,
    /// Stored values.
    values: Vec<f64>,
}

impl CsrMatrix {
    /// Create a CSR matrix from triplets (row, col, value).
    ///
    /// Duplicate entries at the same (row, col) are summed. Entries that sum
    /// to zero are still stored, so the sparsity pattern reflects every
    /// position that received a contribution.
    ///
    /// # Panics
    ///
    /// Panics if a triplet lies outside the `rows x cols` shape.
    pub fn from_triplets(rows: usize, cols: usize, mut triplets: Vec<(usize, usize, f64)>) -> Self {
        // Sort by (row, col) for CSR construction
        triplets.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut row_counts = vec![0usize; rows];
        let mut col_idx: Vec<usize> = Vec::with_capacity(triplets.len());
        let mut values: Vec<f64> = Vec::with_capacity(triplets.len());
        let mut last: Option<(usize, usize)> = None;

        for (row, col, val) in triplets {
            assert!(
                row < rows && col < cols,
                "triplet ({}, {}) outside {}x{} matrix",
                row,
                col,
                rows,
                cols
            );

            if last == Some((row, col)) {
                if let Some(acc) = values.last_mut() {
                    *acc += val;
                }
            } else {
                col_idx.push(col);
                values.push(val);
                row_counts[row] += 1;
                last = Some((row, col));
            }
        }

        let mut row_ptr = Vec::with_capacity(rows + 1);
        row_ptr.push(0);
        for count in row_counts {
            let next = row_ptr[row_ptr.len() - 1] + count;
            row_ptr.push(next);
        }

        Self {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Get the number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Get the number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Get the value at (row, col), or 0 if nothing is stored there.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        match self.col_idx[start..end].binary_search(&col) {
            Ok(k) => self.values[start + k],
            Err(_) => 0.0,
        }
    }

    /// Iterate over the stored `(col, value)` pairs of a row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        self.col_idx[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter().copied())
    }

    /// Iterate over all stored entries as `(row, col, value)`, in row-major order.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.rows).flat_map(move |r| self.row(r).map(move |(c, v)| (r, c, v)))
    }

    /// Multiply matrix by vector: y = A * x.
    pub fn mul_vec(&self, x: &DVector<f64>) -> DVector<f64> {
        assert_eq!(x.len(), self.cols, "Vector dimension mismatch");

        let mut y = DVector::zeros(self.rows);

        for i in 0..self.rows {
            let start = self.row_ptr[i];
            let end = self.row_ptr[i + 1];

            let mut sum = 0.0;
            for k in start..end {
                sum += self.values[k] * x[self.col_idx[k]];
            }
            y[i] = sum;
        }

        y
    }

    /// Left-multiply by a diagonal matrix: returns `diag(scale) * A`.
    ///
    /// Row `i` of the result is row `i` of `self` multiplied by `scale[i]`.
    pub fn scale_rows(&self, scale: &[f64]) -> Result<CsrMatrix> {
        MeshError::check_len("row scale", self.rows, scale.len())?;

        let mut values = self.values.clone();
        for (i, &s) in scale.iter().enumerate() {
            for v in &mut values[self.row_ptr[i]..self.row_ptr[i + 1]] {
                *v *= s;
            }
        }

        Ok(CsrMatrix {
            rows: self.rows,
            cols: self.cols,
            row_ptr: self.row_ptr.clone(),
            col_idx: self.col_idx.clone(),
            values,
        })
    }

    /// Sum of the stored values of every row.
    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.rows)
            .map(|i| self.values[self.row_ptr[i]..self.row_ptr[i + 1]].iter().sum())
            .collect()
    }

    /// Convert to a dense matrix.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut dense = DMatrix::zeros(self.rows, self.cols);
        for (r, c, v) in self.triplets() {
            dense[(r, c)] = v;
        }
        dense
    }
}

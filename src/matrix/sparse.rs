//! Compressed sparse row (CSR) matrix with fixed dimensions.
//!
//! Storage is three parallel sequences:
//! - `row_offsets` (length `N + 1`): entries of row `i` live in
//!   `row_offsets[i]..row_offsets[i + 1]`,
//! - `columns`: column index of every stored entry,
//! - `values`: the stored entries themselves.
//!
//! Construction never materializes zeros and emits columns in ascending order
//! within a row. Equality compares the storage layout, so two matrices built
//! from the same dense input always compare equal, while a matrix carrying
//! explicit zeros (after `scale(0)`) differs from its pruned counterpart.

use crate::core::traits::{check_matvec_dims, MatShape, MatVec, Scalar};
use crate::error::{MatError, Result};
use crate::matrix::dense::DenseMatrix;

/// Row-compressed `N × M` matrix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SparseMatrix<T, const N: usize, const M: usize> {
    row_offsets: Vec<usize>,
    columns: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar, const N: usize, const M: usize> SparseMatrix<T, N, M> {
    /// Matrix with no stored entries.
    pub fn zeros() -> Self {
        Self {
            row_offsets: vec![0; N + 1],
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Compress a dense matrix, scanning rows top to bottom and columns left
    /// to right.
    pub fn from_dense(dense: &DenseMatrix<T, N, M>) -> Self {
        Self::from_row_major(dense.as_slice())
    }

    /// Compress a row-major literal. Positions past the end of `values` are
    /// treated as zero.
    ///
    /// # Errors
    /// `MatError::TooManyValues` if `values` holds more than `N * M` entries.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() > N * M {
            return Err(MatError::TooManyValues {
                capacity: N * M,
                found: values.len(),
            });
        }
        Ok(Self::from_row_major(values))
    }

    fn from_row_major(cells: &[T]) -> Self {
        let mut row_offsets = Vec::with_capacity(N + 1);
        let mut columns = Vec::new();
        let mut values = Vec::new();
        row_offsets.push(0);
        for i in 0..N {
            let start = (i * M).min(cells.len());
            let end = ((i + 1) * M).min(cells.len());
            for (j, &v) in cells[start..end].iter().enumerate() {
                if v != T::zero() {
                    columns.push(j);
                    values.push(v);
                }
            }
            row_offsets.push(values.len());
        }
        columns.shrink_to_fit();
        values.shrink_to_fit();
        log::debug!("compressed {N}x{M} matrix into CSR with nnz={}", values.len());
        Self {
            row_offsets,
            columns,
            values,
        }
    }

    /// Assemble from raw CSR arrays.
    ///
    /// The offsets must have `N + 1` entries, start at zero, never decrease and
    /// end at `values.len()`. Columns must be below `M` and strictly ascending
    /// within each row. Explicit zero values are accepted.
    pub fn from_raw_parts(
        row_offsets: Vec<usize>,
        columns: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        if row_offsets.len() != N + 1 {
            return Err(MatError::MalformedStorage(format!(
                "expected {} row offsets, got {}",
                N + 1,
                row_offsets.len()
            )));
        }
        if columns.len() != values.len() {
            return Err(MatError::MalformedStorage(format!(
                "{} column indices for {} values",
                columns.len(),
                values.len()
            )));
        }
        if row_offsets[0] != 0 || row_offsets[N] != values.len() {
            return Err(MatError::MalformedStorage(format!(
                "row offsets must span 0..{}, got {}..{}",
                values.len(),
                row_offsets[0],
                row_offsets[N]
            )));
        }
        for (i, bounds) in row_offsets.windows(2).enumerate() {
            if bounds[0] > bounds[1] || bounds[1] > values.len() {
                return Err(MatError::MalformedStorage(format!(
                    "row offsets out of order at row {i}"
                )));
            }
            let cols = &columns[bounds[0]..bounds[1]];
            if let Some(&c) = cols.iter().find(|&&c| c >= M) {
                return Err(MatError::MalformedStorage(format!(
                    "column {c} in row {i} exceeds {M} columns"
                )));
            }
            if cols.windows(2).any(|w| w[0] >= w[1]) {
                return Err(MatError::MalformedStorage(format!(
                    "columns of row {i} are not strictly ascending"
                )));
            }
        }
        Ok(Self {
            row_offsets,
            columns,
            values,
        })
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Row boundary array (`N + 1` entries).
    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    /// Column index of every stored entry.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Stored entries in row order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Stored entries of row `i` as `(column, value)` pairs.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        assert!(i < N, "row {i} out of range for {N} rows");
        let range = self.row_offsets[i]..self.row_offsets[i + 1];
        self.columns[range.clone()]
            .iter()
            .copied()
            .zip(&self.values[range])
    }

    /// All stored entries as `(row, column, value)` triplets.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        (0..N).flat_map(move |i| self.row(i).map(move |(j, v)| (i, j, v)))
    }

    /// Bounds-checked read; absent entries read as zero.
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        if i >= N || j >= M {
            return Err(MatError::OutOfRange {
                row: i,
                col: j,
                nrows: N,
                ncols: M,
            });
        }
        let range = self.row_offsets[i]..self.row_offsets[i + 1];
        let found = self.columns[range.clone()]
            .binary_search(&j)
            .map(|k| self.values[range.start + k]);
        Ok(found.unwrap_or_else(|_| T::zero()))
    }

    /// Expand back into the dense grid; unlisted positions are zero.
    pub fn to_dense(&self) -> DenseMatrix<T, N, M> {
        let mut dense = DenseMatrix::<T, N, M>::zeros();
        let cells = dense.as_mut_slice();
        for (i, j, &v) in self.iter() {
            cells[i * M + j] = v;
        }
        dense
    }

    /// Direct CSR transpose.
    ///
    /// Counts the entries landing in each destination row, turns the counts
    /// into offsets, then scatters every entry into its bucket. Source rows are
    /// visited in order, so the destination columns come out ascending.
    pub fn transpose(&self) -> SparseMatrix<T, M, N> {
        let nnz = self.nnz();
        let mut row_offsets = vec![0usize; M + 1];
        for &c in &self.columns {
            row_offsets[c + 1] += 1;
        }
        for r in 1..=M {
            row_offsets[r] += row_offsets[r - 1];
        }
        let mut next = row_offsets.clone();
        let mut columns = vec![0usize; nnz];
        let mut values = vec![T::zero(); nnz];
        for i in 0..N {
            for k in self.row_offsets[i]..self.row_offsets[i + 1] {
                let c = self.columns[k];
                let pos = next[c];
                columns[pos] = i;
                values[pos] = self.values[k];
                next[c] += 1;
            }
        }
        log::trace!("transposed {N}x{M} CSR matrix (nnz={nnz})");
        SparseMatrix {
            row_offsets,
            columns,
            values,
        }
    }

    /// Scalar multiple. The sparsity structure is kept as is, so scaling by
    /// zero leaves explicit zeros behind; see [`prune`](Self::prune).
    pub fn scale(&self, k: T) -> Self {
        let mut out = self.clone();
        out.scale_into(k);
        out
    }

    /// In-place scalar multiple; returns `self` for chaining.
    pub fn scale_into(&mut self, k: T) -> &mut Self {
        for v in &mut self.values {
            *v *= k;
        }
        self
    }

    /// Drop stored zeros and rebuild the row offsets, restoring the layout
    /// `from_dense` would produce for the same values.
    pub fn prune(&mut self) -> &mut Self {
        let before = self.nnz();
        let mut write = 0;
        let mut row_start = 0;
        for i in 0..N {
            let row_end = self.row_offsets[i + 1];
            for k in row_start..row_end {
                if self.values[k] != T::zero() {
                    self.values[write] = self.values[k];
                    self.columns[write] = self.columns[k];
                    write += 1;
                }
            }
            row_start = row_end;
            self.row_offsets[i + 1] = write;
        }
        self.values.truncate(write);
        self.columns.truncate(write);
        if write != before {
            log::debug!("pruned {} explicit zeros from {N}x{M} CSR matrix", before - write);
        }
        self
    }

    /// Sparse × dense product, `O(nnz * P)`:
    /// `C[i][j] = Σ_{k in row i} values[k] * B[columns[k]][j]`.
    pub fn matmul<const P: usize>(&self, rhs: &DenseMatrix<T, M, P>) -> DenseMatrix<T, N, P> {
        let mut out = DenseMatrix::<T, N, P>::zeros();
        let b = rhs.as_slice();
        let c = out.as_mut_slice();
        for i in 0..N {
            let range = self.row_offsets[i]..self.row_offsets[i + 1];
            for j in 0..P {
                let mut sum = T::zero();
                for k in range.clone() {
                    sum += self.values[k] * b[self.columns[k] * P + j];
                }
                c[i * P + j] = sum;
            }
        }
        out
    }
}

impl<T: Scalar, const N: usize, const M: usize> Default for SparseMatrix<T, N, M> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize, const M: usize> From<&DenseMatrix<T, N, M>>
    for SparseMatrix<T, N, M>
{
    fn from(dense: &DenseMatrix<T, N, M>) -> Self {
        Self::from_dense(dense)
    }
}

impl<T: Scalar, const N: usize, const M: usize> From<DenseMatrix<T, N, M>>
    for SparseMatrix<T, N, M>
{
    fn from(dense: DenseMatrix<T, N, M>) -> Self {
        Self::from_dense(&dense)
    }
}

impl<T: Scalar, const N: usize, const M: usize> From<&SparseMatrix<T, N, M>>
    for DenseMatrix<T, N, M>
{
    fn from(sparse: &SparseMatrix<T, N, M>) -> Self {
        sparse.to_dense()
    }
}

impl<T, const N: usize, const M: usize> MatShape for SparseMatrix<T, N, M> {
    fn nrows(&self) -> usize {
        N
    }
    fn ncols(&self) -> usize {
        M
    }
}

impl<T: Scalar, const N: usize, const M: usize> MatVec<T> for SparseMatrix<T, N, M> {
    fn matvec(&self, x: &[T], y: &mut [T]) -> Result<()> {
        check_matvec_dims(self, x.len(), y.len())?;
        for (i, yi) in y.iter_mut().enumerate() {
            let mut sum = T::zero();
            for (j, &v) in self.row(i) {
                sum += v * x[j];
            }
            *yi = sum;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staircase() -> DenseMatrix<f64, 4, 5> {
        DenseMatrix::from([
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [5.0, 8.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0, 6.0],
        ])
    }

    #[test]
    fn from_dense_storage_layout() {
        let s = SparseMatrix::from_dense(&staircase());
        assert_eq!(s.nnz(), 4);
        assert_eq!(s.values(), &[5.0, 8.0, 2.0, 6.0]);
        assert_eq!(s.columns(), &[0, 1, 2, 4]);
        assert_eq!(s.row_offsets(), &[0, 0, 2, 2, 4]);
        assert_eq!(s.to_dense(), staircase());
    }

    #[test]
    fn all_zero_matrix_stores_nothing() {
        let s = SparseMatrix::from_dense(&DenseMatrix::<f64, 3, 3>::zeros());
        assert_eq!(s.nnz(), 0);
        assert_eq!(s.row_offsets(), &[0, 0, 0, 0]);
        assert_eq!(s.to_dense(), DenseMatrix::zeros());
        assert_eq!(s, SparseMatrix::zeros());
    }

    #[test]
    fn short_literal_matches_padded_dense() {
        let s = SparseMatrix::<f64, 3, 4>::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let d = DenseMatrix::from([
            [1.0, 2.0, 3.0, 4.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ]);
        assert_eq!(s.to_dense(), d);
        assert_eq!(s.row_offsets(), &[0, 4, 4, 4]);
    }

    #[test]
    fn long_literal_is_rejected() {
        let err = SparseMatrix::<f64, 1, 2>::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, MatError::TooManyValues { capacity: 2, found: 3 });
    }

    #[test]
    fn get_reads_stored_and_absent_entries() {
        let s = SparseMatrix::from_dense(&staircase());
        assert_eq!(s.get(1, 1).unwrap(), 8.0);
        assert_eq!(s.get(3, 4).unwrap(), 6.0);
        assert_eq!(s.get(3, 3).unwrap(), 0.0);
        assert!(matches!(s.get(4, 0), Err(MatError::OutOfRange { .. })));
    }

    #[test]
    fn transpose_regroups_entries() {
        let s = SparseMatrix::from_dense(&staircase());
        let t = s.transpose();
        assert_eq!(t.nnz(), 4);
        assert_eq!(t.row_offsets(), &[0, 1, 2, 3, 3, 4]);
        assert_eq!(t.columns(), &[1, 1, 3, 3]);
        assert_eq!(t.values(), &[5.0, 8.0, 2.0, 6.0]);
        assert_eq!(t.transpose(), s);
    }

    #[test]
    fn scale_by_zero_keeps_structure_until_pruned() {
        let mut s = SparseMatrix::from_dense(&staircase());
        s.scale_into(0.0);
        assert_eq!(s.nnz(), 4);
        assert_eq!(s.to_dense(), DenseMatrix::zeros());
        assert_ne!(s, SparseMatrix::zeros());
        s.prune();
        assert_eq!(s.nnz(), 0);
        assert_eq!(s, SparseMatrix::zeros());
    }

    #[test]
    fn prune_keeps_non_zero_rows_intact() {
        let mut s = SparseMatrix::<f64, 2, 3>::from_raw_parts(
            vec![0, 2, 4],
            vec![0, 2, 1, 2],
            vec![0.0, 3.0, 4.0, 0.0],
        )
        .unwrap();
        s.prune();
        assert_eq!(s.row_offsets(), &[0, 1, 2]);
        assert_eq!(s.columns(), &[2, 1]);
        assert_eq!(s.values(), &[3.0, 4.0]);
    }

    #[test]
    fn raw_parts_are_validated() {
        type S = SparseMatrix<f64, 2, 2>;
        assert!(S::from_raw_parts(vec![0, 1, 2], vec![0, 1], vec![1.0, 2.0]).is_ok());
        let bad = [
            S::from_raw_parts(vec![0, 1], vec![0], vec![1.0]),
            S::from_raw_parts(vec![0, 1, 2], vec![0], vec![1.0, 2.0]),
            S::from_raw_parts(vec![1, 1, 2], vec![0, 1], vec![1.0, 2.0]),
            S::from_raw_parts(vec![0, 2, 1], vec![0, 1], vec![1.0]),
            S::from_raw_parts(vec![0, 1, 2], vec![0, 2], vec![1.0, 2.0]),
            S::from_raw_parts(vec![0, 2, 2], vec![1, 0], vec![1.0, 2.0]),
            S::from_raw_parts(vec![0, 5, 2], vec![0, 1], vec![1.0, 2.0]),
        ];
        for result in bad {
            assert!(matches!(result, Err(MatError::MalformedStorage(_))));
        }
    }

    #[test]
    fn matvec_matches_dense() {
        let d = staircase();
        let s = SparseMatrix::from_dense(&d);
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let (mut ys, mut yd) = (vec![0.0; 4], vec![0.0; 4]);
        s.matvec(&x, &mut ys).unwrap();
        d.matvec(&x, &mut yd).unwrap();
        assert_eq!(ys, yd);
        assert_eq!(ys, vec![0.0, 21.0, 0.0, 36.0]);
    }

    #[test]
    fn matvec_rejects_wrong_lengths_without_writing() {
        let s = SparseMatrix::<f64, 2, 3>::from_slice(&[1.0, 0.0, 2.0, 0.0, 3.0]).unwrap();
        let mut y = [9.0, 9.0];
        assert_eq!(
            s.matvec(&[1.0, 1.0], &mut y),
            Err(MatError::DimensionMismatch { expected: (3, 2), found: (2, 2) })
        );
        assert_eq!(y, [9.0, 9.0]);
        let mut long = [9.0; 3];
        assert!(s.matvec(&[1.0, 1.0, 1.0], &mut long).is_err());
        assert_eq!(long, [9.0; 3]);
        s.matvec(&[1.0, 1.0, 1.0], &mut y).unwrap();
        assert_eq!(y, [3.0, 3.0]);
    }

    #[test]
    fn shape_and_dense_conversion_agree() {
        let d = staircase();
        let s = d.to_sparse();
        assert_eq!(s, SparseMatrix::from_dense(&d));
        assert_eq!((s.nrows(), s.ncols()), (4, 5));
        assert_eq!((s.transpose().nrows(), s.transpose().ncols()), (5, 4));
    }
}

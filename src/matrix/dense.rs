//! Fixed-size dense matrix in flat row-major storage.
//!
//! `DenseMatrix<T, N, M>` stores its `N * M` entries in a single contiguous
//! buffer; element `(i, j)` lives at `data[i * M + j]`. The dimensions are
//! const generic parameters, so shape mismatches between operands of `+`,
//! `*` or `==` are rejected at compile time.
//!
//! Rows and columns are exposed as computed views over the buffer
//! (`row`, `rows`, `column`), never as separately owned sub-structures.

use crate::core::traits::{check_matvec_dims, MatShape, MatVec, Scalar};
use crate::error::{MatError, Result};
use crate::matrix::sparse::SparseMatrix;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Row-major `N × M` matrix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DenseMatrix<T, const N: usize, const M: usize> {
    data: Vec<T>,
}

impl<T: Scalar, const N: usize, const M: usize> DenseMatrix<T, N, M> {
    /// Number of rows.
    pub const NROWS: usize = N;
    /// Number of columns.
    pub const NCOLS: usize = M;

    /// Zero-initialized matrix.
    pub fn zeros() -> Self {
        Self { data: vec![T::zero(); N * M] }
    }

    /// Build from a function of `(row, col)`, evaluated in row-major order.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(N * M);
        for i in 0..N {
            for j in 0..M {
                data.push(f(i, j));
            }
        }
        Self { data }
    }

    /// Build from a row-major literal. Missing trailing values are zero.
    ///
    /// # Errors
    /// `MatError::TooManyValues` if `values` holds more than `N * M` entries.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        Self::from_vec(values.to_vec())
    }

    /// Same as [`from_slice`](Self::from_slice) but takes ownership of the buffer.
    pub fn from_vec(mut data: Vec<T>) -> Result<Self> {
        if data.len() > N * M {
            return Err(MatError::TooManyValues {
                capacity: N * M,
                found: data.len(),
            });
        }
        data.resize(N * M, T::zero());
        Ok(Self { data })
    }

    /// Flat offset of element `(i, j)`.
    #[inline]
    pub const fn flat_index(i: usize, j: usize) -> usize {
        i * M + j
    }

    #[inline]
    fn check_bounds(i: usize, j: usize) -> Result<()> {
        if i >= N || j >= M {
            return Err(MatError::OutOfRange {
                row: i,
                col: j,
                nrows: N,
                ncols: M,
            });
        }
        Ok(())
    }

    /// Bounds-checked element access.
    pub fn at(&self, i: usize, j: usize) -> Result<&T> {
        Self::check_bounds(i, j)?;
        Ok(&self.data[Self::flat_index(i, j)])
    }

    /// Bounds-checked mutable element access.
    pub fn at_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        Self::check_bounds(i, j)?;
        Ok(&mut self.data[Self::flat_index(i, j)])
    }

    /// Bounds-checked assignment.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        *self.at_mut(i, j)? = value;
        Ok(())
    }

    /// Element access without bounds checking.
    ///
    /// # Safety
    /// The caller must guarantee `i < N` and `j < M`.
    #[inline]
    pub unsafe fn at_unchecked(&self, i: usize, j: usize) -> &T {
        // SAFETY: i < N and j < M, so the offset is below N * M == data.len().
        unsafe { self.data.get_unchecked(Self::flat_index(i, j)) }
    }

    /// Mutable element access without bounds checking.
    ///
    /// # Safety
    /// The caller must guarantee `i < N` and `j < M`.
    #[inline]
    pub unsafe fn at_unchecked_mut(&mut self, i: usize, j: usize) -> &mut T {
        // SAFETY: see `at_unchecked`.
        unsafe { self.data.get_unchecked_mut(Self::flat_index(i, j)) }
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < N, "row {i} out of range for {N} rows");
        &self.data[i * M..(i + 1) * M]
    }

    /// Iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..N).map(move |i| &self.data[i * M..(i + 1) * M])
    }

    /// Iterator over column `j`, top to bottom.
    ///
    /// # Panics
    /// Panics if `j >= M`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = &T> + '_ {
        assert!(j < M, "column {j} out of range for {M} columns");
        (0..N).map(move |i| &self.data[i * M + j])
    }

    /// All elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable iterator over all elements in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Flat row-major storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable flat row-major storage.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element-wise sum.
    pub fn plus(&self, rhs: &Self) -> Self {
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(&a, &b)| a + b)
            .collect();
        Self { data }
    }

    /// In-place element-wise sum; returns `self` for chaining.
    pub fn add_into(&mut self, rhs: &Self) -> &mut Self {
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a += b;
        }
        self
    }

    /// Scalar multiple.
    pub fn scale(&self, k: T) -> Self {
        Self {
            data: self.data.iter().map(|&a| a * k).collect(),
        }
    }

    /// In-place scalar multiple; returns `self` for chaining.
    pub fn scale_into(&mut self, k: T) -> &mut Self {
        for a in &mut self.data {
            *a *= k;
        }
        self
    }

    /// Matrix product by the classic triple loop:
    /// `C[i][j] = Σ_k A[i][k] * B[k][j]`.
    pub fn matmul<const P: usize>(&self, rhs: &DenseMatrix<T, M, P>) -> DenseMatrix<T, N, P> {
        let mut out = DenseMatrix::<T, N, P>::zeros();
        for i in 0..N {
            let a_row = self.row(i);
            for j in 0..P {
                let mut sum = T::zero();
                for (k, &a) in a_row.iter().enumerate() {
                    sum += a * rhs.data[k * P + j];
                }
                out.data[i * P + j] = sum;
            }
        }
        out
    }

    /// Product with a sparse right-hand side.
    ///
    /// Every non-zero `A[i][k]` is pushed through the stored entries of row
    /// `k` of `rhs`, so the cost is `O(N * nnz(rhs))`.
    pub fn matmul_sparse<const P: usize>(
        &self,
        rhs: &SparseMatrix<T, M, P>,
    ) -> DenseMatrix<T, N, P> {
        let mut out = DenseMatrix::<T, N, P>::zeros();
        for i in 0..N {
            let a_row = &self.data[i * M..(i + 1) * M];
            let c_row = &mut out.data[i * P..(i + 1) * P];
            for (k, &a) in a_row.iter().enumerate() {
                if a == T::zero() {
                    continue;
                }
                for (j, &b) in rhs.row(k) {
                    c_row[j] += a * b;
                }
            }
        }
        out
    }

    /// Transpose: `T[j][i] = A[i][j]`.
    pub fn transpose(&self) -> DenseMatrix<T, M, N> {
        DenseMatrix::<T, M, N>::from_fn(|j, i| self.data[i * M + j])
    }

    /// Compress into CSR form.
    pub fn to_sparse(&self) -> SparseMatrix<T, N, M> {
        SparseMatrix::from_dense(self)
    }

    /// Number of entries different from zero.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != T::zero()).count()
    }
}

impl<T: Scalar, const N: usize> DenseMatrix<T, N, N> {
    /// Square identity matrix.
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Scalar, const N: usize, const M: usize> Default for DenseMatrix<T, N, M> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize, const M: usize> From<[[T; M]; N]> for DenseMatrix<T, N, M> {
    fn from(rows: [[T; M]; N]) -> Self {
        Self {
            data: rows.into_iter().flatten().collect(),
        }
    }
}

impl<T, const N: usize, const M: usize> Index<(usize, usize)> for DenseMatrix<T, N, M> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < N && j < M, "index ({i}, {j}) out of range for a {N}x{M} matrix");
        &self.data[i * M + j]
    }
}

impl<T, const N: usize, const M: usize> IndexMut<(usize, usize)> for DenseMatrix<T, N, M> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < N && j < M, "index ({i}, {j}) out of range for a {N}x{M} matrix");
        &mut self.data[i * M + j]
    }
}

/// `m[i]` is row `i`, so `m[i][j]` reads element `(i, j)`.
impl<T, const N: usize, const M: usize> Index<usize> for DenseMatrix<T, N, M> {
    type Output = [T];

    fn index(&self, i: usize) -> &[T] {
        assert!(i < N, "row {i} out of range for {N} rows");
        &self.data[i * M..(i + 1) * M]
    }
}

impl<T, const N: usize, const M: usize> IndexMut<usize> for DenseMatrix<T, N, M> {
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < N, "row {i} out of range for {N} rows");
        &mut self.data[i * M..(i + 1) * M]
    }
}

impl<'a, T, const N: usize, const M: usize> IntoIterator for &'a DenseMatrix<T, N, M> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize, const M: usize> IntoIterator for &'a mut DenseMatrix<T, N, M> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T, const N: usize, const M: usize> IntoIterator for DenseMatrix<T, N, M> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T, const N: usize, const M: usize> MatShape for DenseMatrix<T, N, M> {
    fn nrows(&self) -> usize {
        N
    }
    fn ncols(&self) -> usize {
        M
    }
}

impl<T: Scalar, const N: usize, const M: usize> MatVec<T> for DenseMatrix<T, N, M> {
    fn matvec(&self, x: &[T], y: &mut [T]) -> Result<()> {
        check_matvec_dims(self, x.len(), y.len())?;
        for (yi, row) in y.iter_mut().zip(self.rows()) {
            let mut sum = T::zero();
            for (&a, &xj) in row.iter().zip(x) {
                sum += a * xj;
            }
            *yi = sum;
        }
        Ok(())
    }
}

impl<T: fmt::Display, const N: usize, const M: usize> fmt::Display for DenseMatrix<T, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..N {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in self.data[i * M..(i + 1) * M].iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

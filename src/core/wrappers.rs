//! Interop wrappers between csrmat matrices and faer.
//!
//! faer stores dense matrices column-major with runtime dimensions, so the
//! conversions here copy element by element and, in the faer → csrmat
//! direction, check the runtime shape against the const generic one.
//!
//! # Usage
//! These wrappers let csrmat matrices feed faer's solvers and decompositions,
//! and let [`FaerMultiplier`](crate::mult::FaerMultiplier) reuse faer's matmul.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::Scalar;
use crate::error::{MatError, Result};
use crate::matrix::{DenseMatrix, SparseMatrix};
use faer::sparse::{SparseRowMat, SymbolicSparseRowMat};
use faer::traits::ComplexField;
use faer::{Mat, MatRef};

impl<T: Scalar + ComplexField, const N: usize, const M: usize> DenseMatrix<T, N, M> {
    /// Copy into a column-major `faer::Mat`.
    pub fn to_faer(&self) -> Mat<T> {
        let cells = self.as_slice();
        Mat::from_fn(N, M, |i, j| cells[i * M + j])
    }

    /// Copy out of a faer matrix view.
    ///
    /// # Errors
    /// `MatError::DimensionMismatch` if the view is not `N × M`.
    pub fn from_faer(m: MatRef<'_, T>) -> Result<Self> {
        if m.nrows() != N || m.ncols() != M {
            return Err(MatError::DimensionMismatch {
                expected: (N, M),
                found: (m.nrows(), m.ncols()),
            });
        }
        Ok(Self::from_fn(|i, j| m[(i, j)]))
    }
}

impl<T: Scalar + ComplexField, const N: usize, const M: usize> SparseMatrix<T, N, M> {
    /// Copy into faer's owning CSR type.
    pub fn to_faer(&self) -> SparseRowMat<usize, T> {
        // Columns are strictly ascending per row, which is what faer checks for.
        let symbolic = SymbolicSparseRowMat::new_checked(
            N,
            M,
            self.row_offsets().to_vec(),
            None,
            self.columns().to_vec(),
        );
        SparseRowMat::new(symbolic, self.values().to_vec())
    }
}

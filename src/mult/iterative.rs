// Triple-loop multiplication strategy

use crate::core::traits::Scalar;
use crate::matrix::DenseMatrix;
use crate::mult::Multiplier;

/// The textbook `i, j, k` loop; delegates to [`DenseMatrix::matmul`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Iterative;

impl<T: Scalar> Multiplier<T> for Iterative {
    fn multiply<const N: usize, const M: usize, const P: usize>(
        &self,
        a: &DenseMatrix<T, N, M>,
        b: &DenseMatrix<T, M, P>,
    ) -> DenseMatrix<T, N, P> {
        a.matmul(b)
    }

    fn name(&self) -> &'static str {
        "iterative"
    }
}

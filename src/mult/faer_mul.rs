//! Multiplication through faer's dense kernels.
//!
//! Both operands are copied into `faer::Mat` (column-major), multiplied with
//! faer's matmul and copied back into row-major storage. Only floating point
//! element types implement faer's `ComplexField`, so this strategy is not
//! available for integer matrices.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::Scalar;
use crate::matrix::DenseMatrix;
use crate::mult::Multiplier;
use faer::traits::ComplexField;

/// Strategy backed by faer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaerMultiplier;

impl<T: Scalar + ComplexField> Multiplier<T> for FaerMultiplier {
    fn multiply<const N: usize, const M: usize, const P: usize>(
        &self,
        a: &DenseMatrix<T, N, M>,
        b: &DenseMatrix<T, M, P>,
    ) -> DenseMatrix<T, N, P> {
        let c = &a.to_faer() * &b.to_faer();
        DenseMatrix::from_fn(|i, j| c[(i, j)])
    }

    fn name(&self) -> &'static str {
        "faer"
    }
}

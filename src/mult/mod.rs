//! Pluggable dense matrix multiplication strategies.
//!
//! A strategy is anything implementing [`Multiplier`]. The caller picks one,
//! either directly or through [`MulContext`](crate::context::MulContext);
//! every strategy must return the same product up to floating point rounding.

use crate::core::traits::Scalar;
use crate::matrix::DenseMatrix;

/// Common interface for dense × dense multiplication algorithms.
pub trait Multiplier<T: Scalar> {
    /// Compute `A · B`.
    fn multiply<const N: usize, const M: usize, const P: usize>(
        &self,
        a: &DenseMatrix<T, N, M>,
        b: &DenseMatrix<T, M, P>,
    ) -> DenseMatrix<T, N, P>;

    /// Short human-readable name, used in logs.
    fn name(&self) -> &'static str;
}

pub mod iterative;
pub use iterative::Iterative;

pub mod blocked;
pub use blocked::Blocked;

pub mod faer_mul;
pub use faer_mul::FaerMultiplier;

//! Factory for multiplication strategies.
//!
//! `MulContext` holds a [`MulOptions`] and runs the strategy it names. The
//! selection is an explicit `match` on [`MulKind`], so the caller decides the
//! algorithm up front; nothing is inferred from the operands.
//!
//! The context serves floating point matrices (the `faer` strategy needs a
//! faer `ComplexField`). Integer matrices use [`Iterative`] or [`Blocked`]
//! directly.

use crate::config::{MulKind, MulOptions};
use crate::core::traits::Scalar;
use crate::matrix::DenseMatrix;
use crate::mult::{Blocked, FaerMultiplier, Iterative, Multiplier};
use faer::traits::ComplexField;

/// Configured multiplication pipeline.
#[derive(Debug, Clone, Default)]
pub struct MulContext {
    /// Strategy selection and parameters
    pub options: MulOptions,
}

impl MulContext {
    /// Context running the strategy described by `options`.
    pub fn new(options: MulOptions) -> Self {
        Self { options }
    }

    /// Strategy currently selected.
    pub fn kind(&self) -> MulKind {
        self.options.kind
    }

    /// Compute `A · B` with the configured strategy.
    pub fn multiply<T, const N: usize, const M: usize, const P: usize>(
        &self,
        a: &DenseMatrix<T, N, M>,
        b: &DenseMatrix<T, M, P>,
    ) -> DenseMatrix<T, N, P>
    where
        T: Scalar + ComplexField,
    {
        match self.options.kind {
            MulKind::Iterative => run(&Iterative, a, b),
            MulKind::Blocked => run(&Blocked::new(self.options.block_size), a, b),
            MulKind::Faer => run(&FaerMultiplier, a, b),
        }
    }
}

fn run<T, S, const N: usize, const M: usize, const P: usize>(
    strategy: &S,
    a: &DenseMatrix<T, N, M>,
    b: &DenseMatrix<T, M, P>,
) -> DenseMatrix<T, N, P>
where
    T: Scalar,
    S: Multiplier<T>,
{
    log::debug!("multiplying {N}x{M} by {M}x{P} with the {} strategy", strategy.name());
    strategy.multiply(a, b)
}

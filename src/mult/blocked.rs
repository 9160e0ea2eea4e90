//! Cache-tiled multiplication.
//!
//! The `i`, `k` and `j` ranges are cut into `block_size` tiles so that a tile
//! of `A`, a tile of `B` and the matching tile of `C` stay hot while they are
//! combined. Within every output cell the `k` terms are still accumulated in
//! ascending order, so the result matches [`Iterative`](super::Iterative)
//! exactly.

use crate::core::traits::Scalar;
use crate::matrix::DenseMatrix;
use crate::mult::Multiplier;

/// Default tile edge.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Tiled `i, k, j` multiplication.
#[derive(Debug, Clone, Copy)]
pub struct Blocked {
    block_size: usize,
}

impl Blocked {
    /// New strategy with the given tile edge (clamped to at least 1).
    pub fn new(block_size: usize) -> Self {
        Self {
            block_size: block_size.max(1),
        }
    }

    /// Tile edge in elements.
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl Default for Blocked {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_SIZE)
    }
}

impl<T: Scalar> Multiplier<T> for Blocked {
    fn multiply<const N: usize, const M: usize, const P: usize>(
        &self,
        a: &DenseMatrix<T, N, M>,
        b: &DenseMatrix<T, M, P>,
    ) -> DenseMatrix<T, N, P> {
        let bs = self.block_size;
        let mut out = DenseMatrix::<T, N, P>::zeros();
        let (a, b) = (a.as_slice(), b.as_slice());
        let c = out.as_mut_slice();
        for ii in (0..N).step_by(bs) {
            let i_end = (ii + bs).min(N);
            for kk in (0..M).step_by(bs) {
                let k_end = (kk + bs).min(M);
                for jj in (0..P).step_by(bs) {
                    let j_end = (jj + bs).min(P);
                    for i in ii..i_end {
                        for k in kk..k_end {
                            let aik = a[i * M + k];
                            let b_row = &b[k * P + jj..k * P + j_end];
                            let c_row = &mut c[i * P + jj..i * P + j_end];
                            for (cij, &bkj) in c_row.iter_mut().zip(b_row) {
                                *cij += aik * bkj;
                            }
                        }
                    }
                }
            }
        }
        out
    }

    fn name(&self) -> &'static str {
        "blocked"
    }
}

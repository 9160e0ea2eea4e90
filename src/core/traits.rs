//! Core matrix traits for csrmat.

use crate::error::MatError;
use std::fmt::Debug;
use std::ops::{AddAssign, MulAssign};

/// Element type stored in dense and sparse matrices.
///
/// Anything `Copy` with ring arithmetic and exact equality qualifies; the
/// blanket impl covers the primitive integer and float types.
pub trait Scalar: Copy + PartialEq + Debug + num_traits::Num + AddAssign + MulAssign {}

impl<T> Scalar for T where T: Copy + PartialEq + Debug + num_traits::Num + AddAssign + MulAssign {}

/// Shape of a matrix.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<T> {
    /// Compute y = A · x.  `x.len() == ncols()`, `y.len() == nrows()`,
    /// otherwise `MatError::DimensionMismatch` is returned and `y` is untouched.
    fn matvec(&self, x: &[T], y: &mut [T]) -> Result<(), MatError>;
}

/// Checks the operand lengths of a matrix–vector product against `a`'s shape.
pub(crate) fn check_matvec_dims<A: MatShape + ?Sized>(
    a: &A,
    x_len: usize,
    y_len: usize,
) -> Result<(), MatError> {
    let (nrows, ncols) = (a.nrows(), a.ncols());
    if x_len != ncols || y_len != nrows {
        return Err(MatError::DimensionMismatch {
            expected: (ncols, nrows),
            found: (x_len, y_len),
        });
    }
    Ok(())
}

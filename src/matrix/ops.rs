//! Operator overloads for [`DenseMatrix`] and [`SparseMatrix`].
//!
//! Every operator forwards to a named method (`plus`, `add_into`, `scale`,
//! `scale_into`, `matmul`, `matmul_sparse`) and adds no behavior of its own.

use crate::core::traits::Scalar;
use crate::matrix::{DenseMatrix, SparseMatrix};
use std::ops::{Add, AddAssign, Mul, MulAssign};

// Dense + Dense

impl<T: Scalar, const N: usize, const M: usize> Add<&DenseMatrix<T, N, M>>
    for &DenseMatrix<T, N, M>
{
    type Output = DenseMatrix<T, N, M>;

    fn add(self, rhs: &DenseMatrix<T, N, M>) -> Self::Output {
        self.plus(rhs)
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add<&DenseMatrix<T, N, M>>
    for DenseMatrix<T, N, M>
{
    type Output = DenseMatrix<T, N, M>;

    fn add(mut self, rhs: &DenseMatrix<T, N, M>) -> Self::Output {
        self.add_into(rhs);
        self
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add for DenseMatrix<T, N, M> {
    type Output = DenseMatrix<T, N, M>;

    fn add(self, rhs: DenseMatrix<T, N, M>) -> Self::Output {
        self + &rhs
    }
}

impl<T: Scalar, const N: usize, const M: usize> AddAssign<&DenseMatrix<T, N, M>>
    for DenseMatrix<T, N, M>
{
    fn add_assign(&mut self, rhs: &DenseMatrix<T, N, M>) {
        self.add_into(rhs);
    }
}

impl<T: Scalar, const N: usize, const M: usize> AddAssign for DenseMatrix<T, N, M> {
    fn add_assign(&mut self, rhs: DenseMatrix<T, N, M>) {
        self.add_into(&rhs);
    }
}

// Dense * scalar

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for DenseMatrix<T, N, M> {
    type Output = DenseMatrix<T, N, M>;

    fn mul(mut self, k: T) -> Self::Output {
        self.scale_into(k);
        self
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for &DenseMatrix<T, N, M> {
    type Output = DenseMatrix<T, N, M>;

    fn mul(self, k: T) -> Self::Output {
        self.scale(k)
    }
}

impl<T: Scalar, const N: usize, const M: usize> MulAssign<T> for DenseMatrix<T, N, M> {
    fn mul_assign(&mut self, k: T) {
        self.scale_into(k);
    }
}

// Dense * Dense

impl<T: Scalar, const N: usize, const M: usize, const P: usize> Mul<&DenseMatrix<T, M, P>>
    for &DenseMatrix<T, N, M>
{
    type Output = DenseMatrix<T, N, P>;

    fn mul(self, rhs: &DenseMatrix<T, M, P>) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<T: Scalar, const N: usize, const M: usize, const P: usize> Mul<DenseMatrix<T, M, P>>
    for DenseMatrix<T, N, M>
{
    type Output = DenseMatrix<T, N, P>;

    fn mul(self, rhs: DenseMatrix<T, M, P>) -> Self::Output {
        self.matmul(&rhs)
    }
}

// Dense * Sparse

impl<T: Scalar, const N: usize, const M: usize, const P: usize> Mul<&SparseMatrix<T, M, P>>
    for &DenseMatrix<T, N, M>
{
    type Output = DenseMatrix<T, N, P>;

    fn mul(self, rhs: &SparseMatrix<T, M, P>) -> Self::Output {
        self.matmul_sparse(rhs)
    }
}

impl<T: Scalar, const N: usize, const M: usize, const P: usize> Mul<SparseMatrix<T, M, P>>
    for DenseMatrix<T, N, M>
{
    type Output = DenseMatrix<T, N, P>;

    fn mul(self, rhs: SparseMatrix<T, M, P>) -> Self::Output {
        self.matmul_sparse(&rhs)
    }
}

// Sparse * scalar

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for SparseMatrix<T, N, M> {
    type Output = SparseMatrix<T, N, M>;

    fn mul(mut self, k: T) -> Self::Output {
        self.scale_into(k);
        self
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for &SparseMatrix<T, N, M> {
    type Output = SparseMatrix<T, N, M>;

    fn mul(self, k: T) -> Self::Output {
        self.scale(k)
    }
}

impl<T: Scalar, const N: usize, const M: usize> MulAssign<T> for SparseMatrix<T, N, M> {
    fn mul_assign(&mut self, k: T) {
        self.scale_into(k);
    }
}

// Sparse * Dense

impl<T: Scalar, const N: usize, const M: usize, const P: usize> Mul<&DenseMatrix<T, M, P>>
    for &SparseMatrix<T, N, M>
{
    type Output = DenseMatrix<T, N, P>;

    fn mul(self, rhs: &DenseMatrix<T, M, P>) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<T: Scalar, const N: usize, const M: usize, const P: usize> Mul<DenseMatrix<T, M, P>>
    for SparseMatrix<T, N, M>
{
    type Output = DenseMatrix<T, N, P>;

    fn mul(self, rhs: DenseMatrix<T, M, P>) -> Self::Output {
        self.matmul(&rhs)
    }
}

// scalar * matrix, for the primitive element types

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),* $(,)?) => {$(
        impl<const N: usize, const M: usize> Mul<DenseMatrix<$t, N, M>> for $t {
            type Output = DenseMatrix<$t, N, M>;

            fn mul(self, rhs: DenseMatrix<$t, N, M>) -> Self::Output {
                rhs * self
            }
        }

        impl<const N: usize, const M: usize> Mul<&DenseMatrix<$t, N, M>> for $t {
            type Output = DenseMatrix<$t, N, M>;

            fn mul(self, rhs: &DenseMatrix<$t, N, M>) -> Self::Output {
                rhs.scale(self)
            }
        }

        impl<const N: usize, const M: usize> Mul<SparseMatrix<$t, N, M>> for $t {
            type Output = SparseMatrix<$t, N, M>;

            fn mul(self, rhs: SparseMatrix<$t, N, M>) -> Self::Output {
                rhs * self
            }
        }

        impl<const N: usize, const M: usize> Mul<&SparseMatrix<$t, N, M>> for $t {
            type Output = SparseMatrix<$t, N, M>;

            fn mul(self, rhs: &SparseMatrix<$t, N, M>) -> Self::Output {
                rhs.scale(self)
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

//! Matrix module: dense and sparse matrix types and their operators.

pub mod dense;
pub use dense::DenseMatrix;
pub mod sparse;
pub use sparse::SparseMatrix;
mod ops;

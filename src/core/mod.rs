//! Core traits and interop wrappers shared by the dense and sparse matrix types.

pub mod traits;
pub mod wrappers;

pub use traits::{MatShape, MatVec, Scalar};

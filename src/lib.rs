//! csrmat: fixed-dimension dense and compressed sparse row matrices
//!
//! This crate provides a row-major dense matrix and a CSR sparse matrix whose
//! dimensions are const generic parameters, exact conversion between the two,
//! sparse × dense and dense × sparse products, and a pluggable interface for
//! dense multiplication strategies.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod matrix;
pub mod mult;

// Re-exports for convenience
pub use self::config::*;
pub use self::context::*;
pub use self::core::*;
pub use self::error::MatError;
pub use self::matrix::*;
pub use self::mult::*;

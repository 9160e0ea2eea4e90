//! Context module for csrmat.
//!
//! This module provides the context/factory type that turns a
//! [`MulOptions`](crate::config::MulOptions) into a running multiplication
//! strategy.
//!
//! Modules:
//! - [`mul_context`]: Contains the `MulContext` struct for strategy selection and dispatch.
//!
//! # Example
//! ```rust
//! use csrmat::config::{MulKind, MulOptions};
//! use csrmat::context::MulContext;
//! use csrmat::matrix::DenseMatrix;
//!
//! let ctx = MulContext::new(MulOptions::with_kind(MulKind::Blocked));
//! let a = DenseMatrix::<f64, 2, 2>::identity();
//! let b = DenseMatrix::from([[1.0, 2.0], [3.0, 4.0]]);
//! assert_eq!(ctx.multiply(&a, &b), b);
//! ```

pub mod mul_context;
pub use mul_context::MulContext;

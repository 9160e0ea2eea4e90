//! Configuration for multiplication strategy selection.

pub mod options;
pub use options::{MulKind, MulOptions};

use thiserror::Error;

// Unified error type for csrmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("index ({row}, {col}) out of range for a {nrows}x{ncols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    #[error("dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("literal holds {found} values but the matrix only has {capacity} slots")]
    TooManyValues { capacity: usize, found: usize },
    #[error("malformed compressed storage: {0}")]
    MalformedStorage(String),
    #[error("unknown multiplication algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, MatError>;

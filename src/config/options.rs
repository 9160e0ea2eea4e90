//! Command-line or API options for matrix multiplication.
//!
//! This module provides the `MulOptions` struct, which selects the dense
//! multiplication strategy used by [`MulContext`](crate::context::MulContext).
//! The available strategies are the plain triple loop, the cache-tiled
//! variant and faer's matmul. The tile edge for the blocked strategy can be
//! set as well.

use crate::error::{MatError, Result};
use crate::mult::blocked::DEFAULT_BLOCK_SIZE;
use std::fmt;
use std::str::FromStr;

/// Available multiplication strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MulKind {
    /// Triple loop ([`Iterative`](crate::mult::Iterative)).
    #[default]
    Iterative,
    /// Cache-tiled loop ([`Blocked`](crate::mult::Blocked)).
    Blocked,
    /// faer's dense matmul ([`FaerMultiplier`](crate::mult::FaerMultiplier)).
    Faer,
}

impl FromStr for MulKind {
    type Err = MatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iterative" | "naive" => Ok(MulKind::Iterative),
            "blocked" | "tiled" => Ok(MulKind::Blocked),
            "faer" => Ok(MulKind::Faer),
            _ => Err(MatError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for MulKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MulKind::Iterative => "iterative",
            MulKind::Blocked => "blocked",
            MulKind::Faer => "faer",
        };
        f.write_str(name)
    }
}

/// Multiplication strategy & parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MulOptions {
    /// Strategy to run (iterative, blocked, faer)
    pub kind: MulKind,

    /// Tile edge for the blocked strategy
    pub block_size: usize,
}

impl Default for MulOptions {
    fn default() -> Self {
        Self {
            kind: MulKind::Iterative,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl MulOptions {
    /// Options selecting `kind` with the default tile edge.
    pub fn with_kind(kind: MulKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Parse `(key, value)` pairs on top of the defaults.
    ///
    /// Recognized keys are `mult_type` and `block_size`; a leading `-` on the
    /// key is ignored so raw `-mult_type blocked` style arguments can be fed
    /// in pairwise.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut opts = Self::default();
        for (key, value) in pairs {
            match key.trim_start_matches('-') {
                "mult_type" => opts.kind = value.parse()?,
                "block_size" => {
                    let bs: usize = value.trim().parse().map_err(|_| {
                        MatError::InvalidOption(format!("block_size={value} is not a count"))
                    })?;
                    if bs == 0 {
                        return Err(MatError::InvalidOption("block_size must be positive".into()));
                    }
                    opts.block_size = bs;
                }
                other => return Err(MatError::InvalidOption(format!("unknown key {other}"))),
            }
        }
        Ok(opts)
    }

    /// Parse a flat `-key value -key value ...` argument list.
    ///
    /// A trailing key without a value is an `InvalidOption` error.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.len() % 2 != 0 {
            let key = args.last().map_or("", |k| k.as_ref());
            return Err(MatError::InvalidOption(format!("missing value for {key}")));
        }
        Self::from_pairs(
            args.chunks_exact(2)
                .map(|pair| (pair[0].as_ref(), pair[1].as_ref())),
        )
    }
}

//! Errors raised while building or querying a potential table.

use thiserror::Error;

/// Reasons a table is rejected, or a batch query cannot be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The abscissa sequence has no entries.
    #[error("table has no entries")]
    EmptyTable,

    /// A value sequence does not have one entry per abscissa.
    #[error("value sequence has {found} entries, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },

    /// An abscissa is infinite or NaN.
    #[error("abscissa at index {index} is not finite")]
    NonFiniteAbscissa { index: usize },

    /// `x[index] <= x[index - 1]`; duplicates would divide by zero.
    #[error("abscissas must be strictly increasing (violated at index {index})")]
    NotStrictlyIncreasing { index: usize },

    /// Output buffer of a batch lookup is the wrong size.
    #[error("output buffer has {found} entries, expected {expected}")]
    OutputLength { expected: usize, found: usize },
}

pub type Result<T> = core::result::Result<T, TableError>;

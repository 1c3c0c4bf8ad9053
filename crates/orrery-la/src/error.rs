//! Error types for orrery-la.

use thiserror::Error;

/// Errors produced by matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LaError {
    /// Operand shapes (rows, cols) cannot be multiplied, or an operand is empty.
    #[error("dimension mismatch: cannot multiply {lhs:?} by {rhs:?}")]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
}

pub type Result<T> = core::result::Result<T, LaError>;

use dense_matrix::MatrixError;
use thiserror::Error;

/// Errors produced by transform and projection operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AffineError {
    /// The operation requires a 4x4 matrix.
    #[error("expected a 4x4 matrix, got {rows}x{cols}")]
    InvalidShape { rows: usize, cols: usize },

    /// A direction vector with zero length cannot be normalized.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    /// Projection parameters outside their legal domain.
    #[error("invalid projection parameters: {reason}")]
    InvalidProjection { reason: &'static str },

    /// An underlying matrix operation failed.
    #[error("matrix operation failed: {0}")]
    Matrix(#[from] MatrixError),
}

use thiserror::Error;

/// Errors produced by [`DenseMatrix`](crate::DenseMatrix) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// The operation requires a matrix with at least one row and one column.
    #[error("matrix {rows}x{cols} is degenerate")]
    Degenerate { rows: usize, cols: usize },

    /// Operand shapes are incompatible with the requested operation.
    #[error("dimension mismatch: {lhs_rows}x{lhs_cols} against {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// Determinant-based operations are defined for square matrices only.
    #[error("matrix {rows}x{cols} is not square")]
    NotSquare { rows: usize, cols: usize },

    /// The determinant is too close to zero to invert.
    #[error("matrix is singular (determinant {determinant})")]
    Singular { determinant: f64 },

    /// Element access outside the matrix bounds.
    #[error("index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

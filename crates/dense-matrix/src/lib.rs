//! Resizable dense real matrices with the classical operation set:
//! sum, difference, scalar and matrix products, transpose, cofactor
//! matrix, determinant, and inverse.
//!
//! Matrices may be resized to any shape, including zero rows or columns.
//! Such degenerate matrices are legal values that can be stored, cloned,
//! and resized back, but every arithmetic operation on them fails with
//! [`MatrixError::Degenerate`].

pub mod error;
pub mod matrix;

pub use error::MatrixError;
pub use matrix::DenseMatrix;

/// Tolerance used by [`DenseMatrix::approx_eq`] and the singularity check
/// in [`DenseMatrix::inverse`].
pub const EPSILON: f64 = 9e-8;

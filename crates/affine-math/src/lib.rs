//! Affine geometry on top of [`dense_matrix`]: 3D vectors, axis-aligned
//! bounding boxes, and a 4x4 transform engine with look-at and projection
//! matrix builders.
//!
//! [`AffineTransform`] composes translations, axis-angle rotations, and
//! scales by right-multiplying each new step onto the accumulated matrix,
//! so earlier steps keep their effect on position. The builders return
//! plain [`DenseMatrix`](dense_matrix::DenseMatrix) values that callers
//! combine through [`AffineTransform::create_mvp`].

pub mod bounds;
pub mod convert;
pub mod error;
pub mod transform;
pub mod vector;

pub use bounds::BoundingBox;
pub use convert::{matrix_from_row_major, matrix_to_gl, matrix_to_row_major};
pub use error::AffineError;
pub use transform::AffineTransform;
pub use vector::Vector3;

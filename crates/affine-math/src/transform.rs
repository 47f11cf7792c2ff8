use dense_matrix::DenseMatrix;

use crate::error::AffineError;
use crate::vector::Vector3;

/// Accumulating 4x4 affine transform.
///
/// Each applied step right-multiplies onto the stored matrix
/// (`accumulated = accumulated * step`), so a translation applied before a
/// scale keeps its original offset. The wrapped matrix may be replaced with
/// an arbitrary shape through [`from_matrix`](AffineTransform::from_matrix);
/// operations that need a 4x4 matrix report [`AffineError::InvalidShape`]
/// instead of assuming it.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineTransform {
    matrix: DenseMatrix,
}

impl AffineTransform {
    /// Starts from the 4x4 identity.
    pub fn new() -> Self {
        Self {
            matrix: DenseMatrix::identity(4),
        }
    }

    /// Wraps an existing matrix of any shape.
    pub fn from_matrix(matrix: DenseMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    /// Replaces the accumulated matrix.
    pub fn set_matrix(&mut self, matrix: DenseMatrix) {
        self.matrix = matrix;
    }

    /// Resets the accumulated matrix to the identity pattern for its
    /// current shape.
    pub fn set_identity(&mut self) {
        self.matrix.set_identity();
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64, AffineError> {
        Ok(self.matrix.get(row, col)?)
    }

    /// Appends a translation by `(tx, ty, tz)`.
    pub fn translate(&mut self, tx: f64, ty: f64, tz: f64) -> Result<(), AffineError> {
        self.check_shape()?;
        #[rustfmt::skip]
        let t = DenseMatrix::from_row_slice(4, 4, &[
            1.0, 0.0, 0.0, tx,
            0.0, 1.0, 0.0, ty,
            0.0, 0.0, 1.0, tz,
            0.0, 0.0, 0.0, 1.0,
        ]);
        self.compose(&t)
    }

    /// Appends a rotation of `angle_degrees` around `axis` (Rodrigues'
    /// formula). The axis is normalized first and must have nonzero length.
    pub fn rotate(&mut self, angle_degrees: f64, axis: Vector3) -> Result<(), AffineError> {
        self.check_shape()?;
        let axis = axis.normalized()?;
        let angle = angle_degrees.to_radians();
        let c = angle.cos();
        let s = angle.sin();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        #[rustfmt::skip]
        let r = DenseMatrix::from_row_slice(4, 4, &[
            t*x*x + c,    t*x*y - s*z,  t*x*z + s*y,  0.0,
            t*x*y + s*z,  t*y*y + c,    t*y*z - s*x,  0.0,
            t*x*z - s*y,  t*y*z + s*x,  t*z*z + c,    0.0,
            0.0,          0.0,          0.0,          1.0,
        ]);
        self.compose(&r)
    }

    /// Appends a scale by `(sx, sy, sz)`.
    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) -> Result<(), AffineError> {
        self.check_shape()?;
        #[rustfmt::skip]
        let s = DenseMatrix::from_row_slice(4, 4, &[
            sx,  0.0, 0.0, 0.0,
            0.0, sy,  0.0, 0.0,
            0.0, 0.0, sz,  0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        self.compose(&s)
    }

    /// Look-at view matrix for a camera at `eye` watching `target`.
    ///
    /// Fails with [`AffineError::DegenerateVector`] when `eye` coincides
    /// with `target` or the forward direction is parallel to `up`.
    pub fn view_matrix(
        &self,
        eye: Vector3,
        target: Vector3,
        up: Vector3,
    ) -> Result<DenseMatrix, AffineError> {
        self.check_shape()?;
        let forward = (target - eye).normalized()?;
        let right = forward.cross(&up).normalized()?;
        let up = forward.cross(&right);

        #[rustfmt::skip]
        let view = DenseMatrix::from_row_slice(4, 4, &[
            right.x,    right.y,    right.z,    -eye.dot(&right),
            up.x,       up.y,       up.z,       -eye.dot(&up),
            -forward.x, -forward.y, -forward.z, eye.dot(&forward),
            0.0,        0.0,        0.0,        1.0,
        ]);
        Ok(view)
    }

    /// Perspective projection matrix. `fov_degrees` must lie strictly
    /// between 0 and 180, `aspect` must be positive, and the planes must
    /// satisfy `0 < near < far`. Parameters are validated before the shape
    /// of the wrapped matrix.
    pub fn perspective(
        &self,
        fov_degrees: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Result<DenseMatrix, AffineError> {
        if fov_degrees <= 0.0 || fov_degrees >= 180.0 {
            return Err(AffineError::InvalidProjection {
                reason: "field of view must lie in (0, 180) degrees",
            });
        }
        if aspect <= 0.0 {
            return Err(AffineError::InvalidProjection {
                reason: "aspect ratio must be positive",
            });
        }
        if near <= 0.0 || near >= far {
            return Err(AffineError::InvalidProjection {
                reason: "planes must satisfy 0 < near < far",
            });
        }
        self.check_shape()?;

        let tan_half = (fov_degrees.to_radians() / 2.0).tan();
        let depth = far - near;
        #[rustfmt::skip]
        let proj = DenseMatrix::from_row_slice(4, 4, &[
            1.0 / (aspect * tan_half), 0.0,            0.0,                        0.0,
            0.0,                       1.0 / tan_half, 0.0,                        0.0,
            0.0,                       0.0,            -(far + near) / depth,      -2.0 * far * near / depth,
            0.0,                       0.0,            -1.0,                       0.0,
        ]);
        Ok(proj)
    }

    /// Orthographic projection matrix over the given clipping box. Bounds
    /// must satisfy `right > left`, `top > bottom`, `far > near`; the shape
    /// of the wrapped matrix is not consulted.
    pub fn orthographic(
        &self,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> Result<DenseMatrix, AffineError> {
        if right <= left {
            return Err(AffineError::InvalidProjection {
                reason: "right bound must exceed left",
            });
        }
        if top <= bottom {
            return Err(AffineError::InvalidProjection {
                reason: "top bound must exceed bottom",
            });
        }
        if far <= near {
            return Err(AffineError::InvalidProjection {
                reason: "far plane must exceed near",
            });
        }

        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        #[rustfmt::skip]
        let proj = DenseMatrix::from_row_slice(4, 4, &[
            2.0 / width, 0.0,          0.0,          -(right + left) / width,
            0.0,         2.0 / height, 0.0,          -(top + bottom) / height,
            0.0,         0.0,          -2.0 / depth, -(far + near) / depth,
            0.0,         0.0,          0.0,          1.0,
        ]);
        Ok(proj)
    }

    /// Combined matrix `projection * (view * model)`. All three operands
    /// must match the wrapped 4x4 shape.
    pub fn create_mvp(
        &self,
        projection: &DenseMatrix,
        view: &DenseMatrix,
        model: &DenseMatrix,
    ) -> Result<DenseMatrix, AffineError> {
        self.check_shape()?;
        self.check_same_shape(projection)?;
        self.check_same_shape(view)?;
        self.check_same_shape(model)?;
        let vm = view.multiply(model)?;
        Ok(projection.multiply(&vm)?)
    }

    fn compose(&mut self, step: &DenseMatrix) -> Result<(), AffineError> {
        self.matrix = self.matrix.multiply(step)?;
        Ok(())
    }

    fn check_shape(&self) -> Result<(), AffineError> {
        if self.matrix.rows() != 4 || self.matrix.cols() != 4 {
            return Err(AffineError::InvalidShape {
                rows: self.matrix.rows(),
                cols: self.matrix.cols(),
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &DenseMatrix) -> Result<(), AffineError> {
        if other.rows() != self.matrix.rows() || other.cols() != self.matrix.cols() {
            return Err(AffineError::InvalidShape {
                rows: other.rows(),
                cols: other.cols(),
            });
        }
        Ok(())
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::new()
    }
}

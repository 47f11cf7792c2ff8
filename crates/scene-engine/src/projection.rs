use affine_math::{AffineError, AffineTransform};
use dense_matrix::DenseMatrix;

/// Projection parameter defaults shared by the viewer.
pub const DEFAULT_FOV_DEGREES: f64 = 90.0;
pub const DEFAULT_ASPECT: f64 = 4.0 / 3.0;
pub const DEFAULT_ORTHO_LEFT: f64 = -16.0;
pub const DEFAULT_ORTHO_RIGHT: f64 = 16.0;
pub const DEFAULT_ORTHO_BOTTOM: f64 = -12.0;
pub const DEFAULT_ORTHO_TOP: f64 = 12.0;
pub const DEFAULT_NEAR: f64 = 0.01;
pub const DEFAULT_FAR: f64 = 15.0;

/// Dual projection state: perspective and orthographic parameters with the
/// derived matrix for each, plus the flag selecting which one is active.
///
/// Both matrices start at identity and are first derived when a scene
/// refresh or an explicit update runs.
#[derive(Debug, Clone)]
pub struct Projection {
    fov_degrees: f64,
    aspect: f64,
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
    perspective: bool,
    persp_matrix: DenseMatrix,
    orth_matrix: DenseMatrix,
}

impl Projection {
    pub fn new() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            aspect: DEFAULT_ASPECT,
            left: DEFAULT_ORTHO_LEFT,
            right: DEFAULT_ORTHO_RIGHT,
            bottom: DEFAULT_ORTHO_BOTTOM,
            top: DEFAULT_ORTHO_TOP,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            perspective: false,
            persp_matrix: DenseMatrix::identity(4),
            orth_matrix: DenseMatrix::identity(4),
        }
    }

    /// Store new perspective parameters and rebuild the perspective matrix.
    pub fn update_perspective(
        &mut self,
        fov_degrees: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Result<(), AffineError> {
        let matrix = AffineTransform::new().perspective(fov_degrees, aspect, near, far)?;
        self.fov_degrees = fov_degrees;
        self.aspect = aspect;
        self.near = near;
        self.far = far;
        self.persp_matrix = matrix;
        Ok(())
    }

    /// Store new orthographic bounds and rebuild the orthographic matrix.
    pub fn update_orthographic(
        &mut self,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> Result<(), AffineError> {
        let matrix = AffineTransform::new().orthographic(left, right, bottom, top, near, far)?;
        self.left = left;
        self.right = right;
        self.bottom = bottom;
        self.top = top;
        self.near = near;
        self.far = far;
        self.orth_matrix = matrix;
        Ok(())
    }

    /// Move the far plane and rebuild both matrices from stored parameters.
    pub fn set_far(&mut self, far: f64) -> Result<(), AffineError> {
        self.update_perspective(self.fov_degrees, self.aspect, self.near, far)?;
        self.update_orthographic(self.left, self.right, self.bottom, self.top, self.near, far)
    }

    /// Move the near plane and rebuild both matrices from stored parameters.
    pub fn set_near(&mut self, near: f64) -> Result<(), AffineError> {
        self.update_perspective(self.fov_degrees, self.aspect, near, self.far)?;
        self.update_orthographic(self.left, self.right, self.bottom, self.top, near, self.far)
    }

    /// Rebuild whichever matrix the mode flag selects, from stored
    /// parameters.
    pub fn rebuild_active(&mut self) -> Result<(), AffineError> {
        if self.perspective {
            self.update_perspective(self.fov_degrees, self.aspect, self.near, self.far)
        } else {
            self.update_orthographic(
                self.left,
                self.right,
                self.bottom,
                self.top,
                self.near,
                self.far,
            )
        }
    }

    /// Build the active-mode matrix with a substitute far plane, leaving
    /// stored state untouched.
    pub fn build_active_with_far(&self, far: f64) -> Result<DenseMatrix, AffineError> {
        let builder = AffineTransform::new();
        if self.perspective {
            builder.perspective(self.fov_degrees, self.aspect, self.near, far)
        } else {
            builder.orthographic(self.left, self.right, self.bottom, self.top, self.near, far)
        }
    }

    pub fn set_perspective(&mut self) {
        self.perspective = true;
    }

    pub fn set_orthographic(&mut self) {
        self.perspective = false;
    }

    pub fn is_perspective(&self) -> bool {
        self.perspective
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> f64 {
        self.far
    }

    pub fn persp_matrix(&self) -> &DenseMatrix {
        &self.persp_matrix
    }

    pub fn orth_matrix(&self) -> &DenseMatrix {
        &self.orth_matrix
    }

    pub fn active_matrix(&self) -> &DenseMatrix {
        if self.perspective {
            &self.persp_matrix
        } else {
            &self.orth_matrix
        }
    }

    /// Install a previously derived perspective matrix, bypassing the
    /// builders. Used when restoring a persisted scene.
    pub fn set_persp_matrix(&mut self, matrix: DenseMatrix) {
        self.persp_matrix = matrix;
    }

    /// Install a previously derived orthographic matrix, bypassing the
    /// builders. Used when restoring a persisted scene.
    pub fn set_orth_matrix(&mut self, matrix: DenseMatrix) {
        self.orth_matrix = matrix;
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new()
    }
}

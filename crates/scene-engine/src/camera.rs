use affine_math::{AffineError, AffineTransform, Vector3};
use dense_matrix::DenseMatrix;

/// Default camera placement for a fresh scene.
pub const DEFAULT_TARGET: Vector3 = Vector3::ZERO;
pub const DEFAULT_EYE: Vector3 = Vector3 { x: 5.0, y: 5.0, z: -8.0 };
pub const DEFAULT_UP: Vector3 = Vector3 { x: 0.0, y: 1.0, z: 0.0 };

/// Look-at camera. Holds the placement parameters and the derived view
/// matrix, which stays at identity until the first update.
#[derive(Debug, Clone)]
pub struct Camera {
    target: Vector3,
    eye: Vector3,
    up: Vector3,
    view: DenseMatrix,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            target: DEFAULT_TARGET,
            eye: DEFAULT_EYE,
            up: DEFAULT_UP,
            view: DenseMatrix::identity(4),
        }
    }

    /// Re-derive the view matrix for a camera at `eye` watching `target`.
    ///
    /// On failure (coincident `eye`/`target`, or `up` parallel to the view
    /// direction) the stored placement and matrix are left untouched.
    pub fn update(
        &mut self,
        target: Vector3,
        eye: Vector3,
        up: Vector3,
    ) -> Result<(), AffineError> {
        let view = AffineTransform::new().view_matrix(eye, target, up)?;
        self.target = target;
        self.eye = eye;
        self.up = up;
        self.view = view;
        Ok(())
    }

    pub fn target(&self) -> Vector3 {
        self.target
    }

    pub fn eye(&self) -> Vector3 {
        self.eye
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn view_matrix(&self) -> &DenseMatrix {
        &self.view
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_camera_view_is_identity() {
        let camera = Camera::new();
        assert!(camera.view_matrix().approx_eq(&DenseMatrix::identity(4)));
        assert_eq!(camera.eye(), DEFAULT_EYE);
    }

    #[test]
    fn test_update_derives_look_at() {
        let mut camera = Camera::new();
        camera
            .update(Vector3::ZERO, Vector3::new(1.0, 1.0, 1.0), Vector3::Y)
            .unwrap();

        let view = camera.view_matrix();
        let s2 = 2.0_f64.sqrt();
        let s3 = 3.0_f64.sqrt();
        assert_abs_diff_eq!(view.get(0, 0).unwrap(), 1.0 / s2, epsilon = 1e-12);
        assert_abs_diff_eq!(view.get(0, 2).unwrap(), -1.0 / s2, epsilon = 1e-12);
        assert_abs_diff_eq!(view.get(2, 0).unwrap(), 1.0 / s3, epsilon = 1e-12);
        assert_abs_diff_eq!(view.get(2, 3).unwrap(), -s3, epsilon = 1e-12);
        assert_eq!(camera.target(), Vector3::ZERO);
    }

    #[test]
    fn test_degenerate_update_leaves_camera_unchanged() {
        let mut camera = Camera::new();
        let eye = Vector3::new(2.0, 0.0, 0.0);
        assert!(camera.update(eye, eye, Vector3::Y).is_err());
        assert_eq!(camera.eye(), DEFAULT_EYE);
        assert!(camera.view_matrix().approx_eq(&DenseMatrix::identity(4)));
    }
}

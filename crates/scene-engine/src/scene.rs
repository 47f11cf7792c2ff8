use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use affine_math::{
    matrix_from_row_major, matrix_to_gl, matrix_to_row_major, AffineTransform, Vector3,
};
use dense_matrix::DenseMatrix;

use crate::camera::Camera;
use crate::error::SceneError;
use crate::model::Model;
use crate::projection::Projection;

/// Headroom multiplier applied to the farthest corner depth.
const FAR_MARGIN: f64 = 1.1;

/// Up direction of the initial viewpoint.
const INITIAL_UP: Vector3 = Vector3 { x: 0.0, y: -1.0, z: 0.0 };

/// Flat buffers ready for GL upload.
#[derive(Debug, Clone, PartialEq)]
pub struct GlModelData {
    /// 3 floats per vertex, insertion order.
    pub vertices: Vec<f32>,
    /// 2 endpoint indices per edge, stored order.
    pub edges: Vec<u32>,
}

/// Serializable snapshot of the viewing state, row-major matrix layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    /// Path of the loaded OBJ file, empty when none was loaded.
    pub file_path: String,
    pub transform: [f64; 16],
    pub persp_projection: [f64; 16],
    pub orth_projection: [f64; 16],
    pub is_perspective: bool,
    pub far: f64,
}

/// The viewer engine: owns the model, camera, projection and model
/// transform, and derives the MVP matrix the renderer consumes.
///
/// The far clipping plane follows the model: whenever the transform or
/// camera changes, the next MVP refresh pushes the bounding-box corners
/// through `view * model` and moves the far plane past the deepest one.
#[derive(Debug)]
pub struct Scene {
    model: Model,
    transform: AffineTransform,
    camera: Camera,
    projection: Projection,
    file_path: Option<PathBuf>,
    model_displayed: bool,
    far_dirty: bool,
}

impl Scene {
    /// A scene at the initial viewpoint with no model loaded.
    pub fn new() -> Result<Self, SceneError> {
        let mut scene = Self {
            model: Model::new(),
            transform: AffineTransform::new(),
            camera: Camera::new(),
            projection: Projection::new(),
            file_path: None,
            model_displayed: false,
            far_dirty: false,
        };
        scene.reset_view()?;
        Ok(scene)
    }

    /// Load an OBJ file, replacing the current model.
    ///
    /// Defective lines were already dropped by the importer with logged
    /// warnings; a file that yields no vertices at all fails with
    /// [`SceneError::EmptyModel`].
    #[instrument(skip(self))]
    pub fn load_model(&mut self, path: &Path) -> Result<GlModelData, SceneError> {
        self.file_path = Some(path.to_path_buf());
        let outcome = obj_import::load(path)?;
        let warning_count = outcome.warnings.len();
        self.model.set_data(outcome.mesh)?;
        self.far_dirty = true;
        self.model_displayed = true;
        info!(
            vertices = self.model.vertex_count(),
            faces = self.model.face_count(),
            edges = self.model.edge_count(),
            warnings = warning_count,
            "model loaded"
        );
        Ok(self.gl_data())
    }

    /// The current model's GL buffers.
    pub fn gl_data(&self) -> GlModelData {
        GlModelData {
            vertices: self.model.vertices_to_gl(),
            edges: self.model.edges_to_gl(),
        }
    }

    /// Append a translation to the model transform.
    pub fn apply_translation(&mut self, tx: f64, ty: f64, tz: f64) -> Result<(), SceneError> {
        self.far_dirty = true;
        self.transform.translate(tx, ty, tz)?;
        debug!(tx, ty, tz, "translation applied");
        Ok(())
    }

    /// Append a rotation about `axis` (degrees) to the model transform.
    pub fn apply_rotation(&mut self, angle_degrees: f64, axis: Vector3) -> Result<(), SceneError> {
        self.far_dirty = true;
        self.transform.rotate(angle_degrees, axis)?;
        debug!(angle_degrees, "rotation applied");
        Ok(())
    }

    /// Append a uniform scale to the model transform.
    pub fn apply_scale(&mut self, factor: f64) -> Result<(), SceneError> {
        self.far_dirty = true;
        self.transform.scale(factor, factor, factor)?;
        debug!(factor, "scale applied");
        Ok(())
    }

    /// Move the camera and invalidate the far plane.
    pub fn update_camera(
        &mut self,
        target: Vector3,
        eye: Vector3,
        up: Vector3,
    ) -> Result<(), SceneError> {
        self.far_dirty = true;
        self.camera.update(target, eye, up)?;
        Ok(())
    }

    /// Toggle between orthographic and perspective projection.
    pub fn switch_projection(&mut self) {
        if self.projection.is_perspective() {
            self.projection.set_orthographic();
        } else {
            self.projection.set_perspective();
        }
    }

    pub fn is_perspective(&self) -> bool {
        self.projection.is_perspective()
    }

    /// The combined `projection * view * model` matrix, with the far plane
    /// and the active projection matrix refreshed first.
    pub fn mvp(&mut self) -> Result<DenseMatrix, SceneError> {
        self.refresh_projection()?;
        let projection = self.projection.active_matrix().clone();
        let view = self.camera.view_matrix().clone();
        let model = self.transform.matrix().clone();
        Ok(self.transform.create_mvp(&projection, &view, &model)?)
    }

    /// The MVP matrix as a column-major float buffer for GL upload.
    pub fn mvp_gl(&mut self) -> Result<[f32; 16], SceneError> {
        let mvp = self.mvp()?;
        Ok(matrix_to_gl(&mvp)?)
    }

    /// MVP preview for a pending uniform scale: the stored transform plus
    /// one extra scale step, with its own far plane, leaving the scene
    /// untouched. Drives slider/animation feedback before the scale is
    /// committed through [`Scene::apply_scale`].
    pub fn preview_scale_mvp(&self, factor: f64) -> Result<DenseMatrix, SceneError> {
        let mut preview = AffineTransform::from_matrix(self.transform.matrix().clone());
        preview.scale(factor, factor, factor)?;

        let model_view = self.camera.view_matrix().multiply(preview.matrix())?;
        let far = self.derive_far(&model_view);
        let projection = self.projection.build_active_with_far(far)?;
        Ok(preview.create_mvp(&projection, self.camera.view_matrix(), preview.matrix())?)
    }

    /// The translation column of the model transform.
    pub fn current_translation(&self) -> Result<Vector3, SceneError> {
        Ok(Vector3::new(
            self.transform.get(0, 3)?,
            self.transform.get(1, 3)?,
            self.transform.get(2, 3)?,
        ))
    }

    /// Return to the initial viewpoint: default camera, identity model
    /// transform, refreshed projection. The loaded model stays.
    pub fn reset_view(&mut self) -> Result<(), SceneError> {
        self.update_camera(Vector3::ZERO, crate::camera::DEFAULT_EYE, INITIAL_UP)?;
        self.transform.set_identity();
        self.refresh_projection()?;
        info!("view reset");
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.model.vertex_count()
    }

    pub fn face_count(&self) -> usize {
        self.model.face_count()
    }

    pub fn edge_count(&self) -> usize {
        self.model.edge_count()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Base name of the loaded file, for window titles.
    pub fn file_name(&self) -> Option<&str> {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
    }

    pub fn is_model_displayed(&self) -> bool {
        self.model_displayed
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn transform(&self) -> &AffineTransform {
        &self.transform
    }

    /// Capture the viewing state for persistence.
    pub fn snapshot(&self) -> Result<SceneState, SceneError> {
        Ok(SceneState {
            file_path: self
                .file_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            transform: matrix_to_row_major(self.transform.matrix())?,
            persp_projection: matrix_to_row_major(self.projection.persp_matrix())?,
            orth_projection: matrix_to_row_major(self.projection.orth_matrix())?,
            is_perspective: self.projection.is_perspective(),
            far: self.projection.far(),
        })
    }

    /// Reinstate a captured viewing state. The model itself is not part of
    /// the snapshot; reload it afterwards through [`Scene::load_model`]
    /// with the recorded path.
    pub fn restore(&mut self, state: &SceneState) -> Result<(), SceneError> {
        self.file_path = if state.file_path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&state.file_path))
        };
        self.transform.set_matrix(matrix_from_row_major(&state.transform));
        if state.is_perspective {
            self.projection.set_perspective();
        } else {
            self.projection.set_orthographic();
        }
        self.projection.set_far(state.far)?;
        self.projection.set_persp_matrix(matrix_from_row_major(&state.persp_projection));
        self.projection.set_orth_matrix(matrix_from_row_major(&state.orth_projection));
        self.far_dirty = false;
        info!("scene state restored");
        Ok(())
    }

    /// Recompute the far plane if needed, then rebuild the active
    /// projection matrix from stored parameters.
    fn refresh_projection(&mut self) -> Result<(), SceneError> {
        self.refresh_far()?;
        self.projection.rebuild_active()?;
        Ok(())
    }

    fn refresh_far(&mut self) -> Result<(), SceneError> {
        if !self.far_dirty {
            return Ok(());
        }
        let model_view = self.camera.view_matrix().multiply(self.transform.matrix())?;
        let far = self.derive_far(&model_view);
        self.projection.set_far(far)?;
        self.far_dirty = false;
        debug!(far, "far plane recomputed");
        Ok(())
    }

    /// Far plane for the given `view * model` matrix: the deepest finite
    /// bounding-box corner with margin, floored at `near + 1`.
    fn derive_far(&self, model_view: &DenseMatrix) -> f64 {
        let mut max_z: f64 = 0.0;
        for corner in self.model.bounding_box().corners() {
            let column = DenseMatrix::from_row_slice(4, 1, &[corner.x, corner.y, corner.z, 1.0]);
            let z = model_view
                .multiply(&column)
                .and_then(|transformed| transformed.get(2, 0));
            match z {
                Ok(z) if z.is_finite() => max_z = max_z.max(z.abs()),
                _ => continue,
            }
        }
        (max_z * FAR_MARGIN).max(self.projection.near() + 1.0)
    }
}

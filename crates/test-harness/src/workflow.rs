//! Scripted viewer workflows for integration tests.
//!
//! [`ViewerSession`] wraps a `Scene` plus a `DisplayState` and drives the
//! same call sequence
//! the desktop UI would: load an OBJ file, apply transforms, read back the
//! MVP matrix and GL buffers, then save and restore the viewing state.

use std::path::{Path, PathBuf};

use affine_math::Vector3;
use dense_matrix::DenseMatrix;
use file_format::{read_viewer_file, write_viewer_file, DisplayState, FileMetadata};
use scene_engine::{GlModelData, Scene};

use crate::helpers::{write_temp_obj, HarnessError};

/// A scripted viewer session for end-to-end tests.
///
/// Wraps `Scene` + `DisplayState` and keeps the GL buffers from the most
/// recent load so tests can inspect them without re-deriving.
pub struct ViewerSession {
    pub scene: Scene,
    pub display: DisplayState,
    loaded: Option<GlModelData>,
}

impl ViewerSession {
    /// Create a session with a fresh scene and default display settings.
    pub fn new() -> Result<Self, HarnessError> {
        Ok(Self {
            scene: Scene::new()?,
            display: DisplayState::default(),
            loaded: None,
        })
    }

    // ── Model Loading ───────────────────────────────────────────────────

    /// Write OBJ source to a temp file and load it into the scene.
    pub fn load_obj(&mut self, name: &str, contents: &str) -> Result<(), HarnessError> {
        let path = write_temp_obj(name, contents)?;
        self.load_path(&path)
    }

    /// Load an OBJ file from disk into the scene.
    pub fn load_path(&mut self, path: &Path) -> Result<(), HarnessError> {
        let data = self.scene.load_model(path)?;
        self.loaded = Some(data);
        Ok(())
    }

    /// GL buffers from the most recent load.
    pub fn buffers(&self) -> Result<&GlModelData, HarnessError> {
        self.loaded
            .as_ref()
            .ok_or_else(|| HarnessError::AssertionFailed {
                detail: "no model loaded; call load_obj first".to_string(),
            })
    }

    // ── Transforms ──────────────────────────────────────────────────────

    /// Apply a translation to the model transform.
    pub fn translate(&mut self, tx: f64, ty: f64, tz: f64) -> Result<(), HarnessError> {
        self.scene.apply_translation(tx, ty, tz)?;
        Ok(())
    }

    /// Apply a rotation in degrees about `axis`.
    pub fn rotate(&mut self, angle_degrees: f64, axis: Vector3) -> Result<(), HarnessError> {
        self.scene.apply_rotation(angle_degrees, axis)?;
        Ok(())
    }

    /// Apply a uniform scale to the model transform.
    pub fn scale(&mut self, factor: f64) -> Result<(), HarnessError> {
        self.scene.apply_scale(factor)?;
        Ok(())
    }

    /// Toggle between perspective and orthographic projection.
    pub fn switch_projection(&mut self) {
        self.scene.switch_projection();
    }

    // ── Readback ────────────────────────────────────────────────────────

    /// Compose the current MVP matrix.
    pub fn mvp(&mut self) -> Result<DenseMatrix, HarnessError> {
        Ok(self.scene.mvp()?)
    }

    /// Compose the current MVP matrix as a column-major GL array.
    pub fn mvp_gl(&mut self) -> Result<[f32; 16], HarnessError> {
        Ok(self.scene.mvp_gl()?)
    }

    // ── Persistence ─────────────────────────────────────────────────────

    /// Save the current viewing state to `path` under the given name.
    pub fn save_to(&self, path: &Path, name: &str) -> Result<(), HarnessError> {
        let state = self.scene.snapshot()?;
        let meta = FileMetadata::new(name);
        write_viewer_file(path, &state, &self.display, &meta)?;
        Ok(())
    }

    /// Restore viewing state from `path`, reloading the recorded model file.
    pub fn restore_from(&mut self, path: &Path) -> Result<(), HarnessError> {
        let (state, display, _meta) = read_viewer_file(path)?;
        self.scene.restore(&state)?;
        self.display = display;

        self.loaded = None;
        let model_path: Option<PathBuf> = self.scene.file_path().map(Path::to_path_buf);
        if let Some(model_path) = model_path {
            let data = self.scene.load_model(&model_path)?;
            self.loaded = Some(data);
        }
        Ok(())
    }
}

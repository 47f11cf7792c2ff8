use std::path::Path;

use scene_engine::SceneState;
use serde::Serialize;

use crate::display::DisplayState;
use crate::errors::ExportError;
use crate::metadata::FileMetadata;

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level file structure.
#[derive(Debug, Clone, Serialize)]
pub struct ViewerFile {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// Save metadata.
    pub meta: FileMetadata,
    /// The captured viewing state.
    pub scene: SceneState,
    /// Display settings to reinstate with it.
    pub display: DisplayState,
}

/// Serialize a viewing state to a pretty-printed JSON string.
pub fn save_viewer_state(
    scene: &SceneState,
    display: &DisplayState,
    metadata: &FileMetadata,
) -> String {
    let file = ViewerFile {
        format: "wireview".to_string(),
        version: FORMAT_VERSION,
        meta: metadata.clone(),
        scene: scene.clone(),
        display: display.clone(),
    };
    serde_json::to_string_pretty(&file).expect("viewer state serialization should never fail")
}

/// Serialize the viewing state and write it to `path`.
pub fn write_viewer_file(
    path: &Path,
    scene: &SceneState,
    display: &DisplayState,
    metadata: &FileMetadata,
) -> Result<(), ExportError> {
    let json = save_viewer_state(scene, display, metadata);
    std::fs::write(path, json).map_err(|e| ExportError::Io(e.to_string()))
}

use std::path::Path;

use scene_engine::SceneState;
use serde::Deserialize;

use crate::display::DisplayState;
use crate::errors::LoadError;
use crate::metadata::FileMetadata;
use crate::save::FORMAT_VERSION;

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerFileRaw {
    pub format: String,
    pub version: u32,
    pub meta: FileMetadata,
    pub scene: SceneState,
    pub display: DisplayState,
}

/// Deserialize a viewing state from a JSON string.
///
/// Validates the format identifier and version.
/// Returns the scene state, display settings and save metadata.
pub fn load_viewer_state(
    json: &str,
) -> Result<(SceneState, DisplayState, FileMetadata), LoadError> {
    let raw: ViewerFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    // Validate format identifier
    if raw.format != "wireview" {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    // Validate version
    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    // Apply migrations if needed (version < current)
    let (scene, display) = if raw.version < FORMAT_VERSION {
        crate::migrate::migrate(raw.scene, raw.display, raw.version, FORMAT_VERSION)?
    } else {
        (raw.scene, raw.display)
    };

    Ok((scene, display, raw.meta))
}

/// Read a viewing state back from `path`.
pub fn read_viewer_file(
    path: &Path,
) -> Result<(SceneState, DisplayState, FileMetadata), LoadError> {
    let json = std::fs::read_to_string(path).map_err(|e| LoadError::Io(e.to_string()))?;
    load_viewer_state(&json)
}

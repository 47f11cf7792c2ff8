//! Helper functions: error type, OBJ fixtures, temp-file management.

use std::path::PathBuf;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("scene error: {0}")]
    Scene(String),

    #[error("file format error: {0}")]
    Format(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<scene_engine::SceneError> for HarnessError {
    fn from(err: scene_engine::SceneError) -> Self {
        Self::Scene(err.to_string())
    }
}

impl From<file_format::LoadError> for HarnessError {
    fn from(err: file_format::LoadError) -> Self {
        Self::Format(err.to_string())
    }
}

impl From<file_format::ExportError> for HarnessError {
    fn from(err: file_format::ExportError) -> Self {
        Self::Format(err.to_string())
    }
}

impl From<std::io::Error> for HarnessError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

// ── OBJ Fixtures ────────────────────────────────────────────────────────────

/// Unit cube centered at the origin: 8 vertices, 12 triangular faces,
/// 18 wireframe edges after deduplication.
pub const CUBE_OBJ: &str = "\
v 1 1 1
v 1 1 -1
v 1 -1 1
v 1 -1 -1
v -1 1 1
v -1 1 -1
v -1 -1 1
v -1 -1 -1
f 1 2 4
f 1 4 3
f 5 6 8
f 5 8 7
f 1 5 7
f 1 7 3
f 2 6 8
f 2 8 4
f 3 4 8
f 3 8 7
f 1 2 6
f 1 6 5
";

/// Square-based pyramid: 5 vertices, 5 faces, 8 wireframe edges.
pub const PYRAMID_OBJ: &str = "\
v 1 0 1
v 1 0 -1
v -1 0 -1
v -1 0 1
v 0 1 0
f 1 2 3 4
f 1 2 5
f 2 3 5
f 3 4 5
f 4 1 5
";

// ── Temp Files ──────────────────────────────────────────────────────────────

/// A per-process temp-dir path for the given file name.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("test-harness-{}-{}", std::process::id(), name))
}

/// Write OBJ source to a temp file and return its path.
pub fn write_temp_obj(name: &str, contents: &str) -> Result<PathBuf, HarnessError> {
    let path = temp_path(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

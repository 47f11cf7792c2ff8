use thiserror::Error;

/// Recoverable defects found while parsing. The offending line or token is
/// skipped and parsing continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseWarning {
    #[error("line {line}: vertex has a token that is not a number")]
    InvalidVertexData { line: usize },

    #[error("line {line}: vertex must have exactly 3 coordinates, found {count}")]
    WrongCoordinateCount { line: usize, count: usize },

    #[error("line {line}: face has a token with no leading index")]
    InvalidFaceData { line: usize },

    #[error("line {line}: face index 0 is not a valid reference")]
    ZeroIndex { line: usize },

    #[error("line {line}: face needs at least 3 vertices, kept {count}")]
    FaceTooShort { line: usize, count: usize },

    #[error("file not found: {path}")]
    FileNotFound { path: String },
}

/// Failures that abort the whole load.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseFatal {
    /// A face referenced a vertex outside the loaded range. `index` is the
    /// raw value from the file, before 0-based correction.
    #[error("line {line}: face index {index} is outside the {vertex_count} loaded vertices")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },

    #[error("read failed: {reason}")]
    Io { reason: String },
}

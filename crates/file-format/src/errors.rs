/// Errors during viewer-state file loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file: {0}")]
    Io(String),

    #[error("failed to parse file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("migration failed from version {from} to {to}: {reason}")]
    MigrationFailed { from: u32, to: u32, reason: String },
}

/// Errors during viewer-state file export.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write file: {0}")]
    Io(String),
}

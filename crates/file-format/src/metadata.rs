use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive data stored alongside the viewing state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Human-readable name for the saved state.
    pub name: String,
    /// When the state was captured.
    pub saved_at: DateTime<Utc>,
}

impl FileMetadata {
    /// Create metadata with the given name and current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            saved_at: Utc::now(),
        }
    }
}

use scene_engine::SceneState;

use crate::display::DisplayState;
use crate::errors::LoadError;

/// Bring state read from an older file up to the current format version.
///
/// Steps run one version at a time. Version 1 is the only released
/// format, so the chain is empty and anything else is rejected.
pub fn migrate(
    scene: SceneState,
    display: DisplayState,
    from_version: u32,
    to_version: u32,
) -> Result<(SceneState, DisplayState), LoadError> {
    // Add a step per version bump once a version 2 exists.
    if from_version != to_version {
        return Err(LoadError::MigrationFailed {
            from: from_version,
            to: to_version,
            reason: format!(
                "no migration path from v{} to v{}",
                from_version, to_version
            ),
        });
    }
    Ok((scene, display))
}

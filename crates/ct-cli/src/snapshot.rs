//! Activity snapshot kept between invocations.
//!
//! The whole [`ActivityState`] is stored as pretty-printed JSON at the
//! configured `state_path`. A missing file is an empty state.

use std::path::Path;

use anyhow::{Context, Result};
use ct_core::ActivityState;

/// Loads the snapshot at `path`.
///
/// Returns an empty state if the file doesn't exist.
/// Returns an error if the file is unreadable, unparseable, or holds an
/// activity that could never have been saved.
pub fn load(path: &Path) -> Result<ActivityState> {
    let state: ActivityState = match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no snapshot yet, starting empty");
            return Ok(ActivityState::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    state
        .validate()
        .with_context(|| format!("invalid snapshot {}", path.display()))?;
    tracing::debug!(count = state.activities.len(), "loaded snapshot");
    Ok(state)
}

/// Writes the snapshot to `path`, creating parent directories as needed.
pub fn save(path: &Path, state: &ActivityState) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("failed to create data directory")?;
    }
    let json = serde_json::to_string_pretty(state).context("failed to serialize snapshot")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

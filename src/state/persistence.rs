use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::state::TrackerState;

/// Load tracker state from a JSON file.
///
/// A missing file is an empty state.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<TrackerState> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "state file not found, starting empty");
            return Ok(TrackerState::default());
        }
        Err(err) => return Err(err.into()),
    };

    let state: TrackerState = serde_json::from_str(&content)?;
    debug!(
        path = %path.display(),
        records = state.records.len(),
        has_profile = state.profile.is_some(),
        "loaded state"
    );
    Ok(state)
}

/// Save tracker state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &TrackerState) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), records = state.records.len(), "saved state");
    Ok(())
}

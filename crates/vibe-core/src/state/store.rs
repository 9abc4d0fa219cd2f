//! Read-modify-write store for the state file.
//!
//! Every update loads the whole file, applies the new keys, and overwrites the
//! file in full. There is no locking: two concurrent writers race and the last
//! one wins.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// In-memory form of the state file.
pub type State = Map<String, Value>;

/// Failure writing the state file.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("state file I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of [`StateStore::merge`].
#[derive(Clone, Debug, PartialEq)]
pub struct MergeOutcome {
    /// The merged state, whether or not it reached the disk.
    pub state: State,
    /// `false` when the write failed (already logged).
    pub persisted: bool,
}

// ─────────────────────────────────────────────
// StateStore
// ─────────────────────────────────────────────

/// Handle to the state file at a fixed path.
#[derive(Clone, Debug)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full state.
    ///
    /// A missing, unreadable or malformed file (including valid JSON that is
    /// not an object) yields an empty state.
    pub fn load(&self) -> State {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no state file yet");
                return State::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read state file");
                return State::new();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                warn!(path = %self.path.display(), "state file is not a JSON object, ignoring");
                State::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to parse state file");
                State::new()
            }
        }
    }

    /// Overwrite the state file with `state`.
    pub fn save(&self, state: &State) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StateError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string(state)?;
        std::fs::write(&self.path, json).map_err(|source| StateError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), keys = state.len(), "state saved");
        Ok(())
    }

    /// Load, overwrite/add every key in `updates`, and save.
    ///
    /// A failed save is logged as a warning and reported through
    /// [`MergeOutcome::persisted`]; the merged state is returned either way.
    pub fn merge(&self, updates: State) -> MergeOutcome {
        let mut state = self.load();
        state.extend(updates);

        let persisted = match self.save(&state) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "could not save state");
                false
            }
        };

        MergeOutcome { state, persisted }
    }

    /// Convenience for updating a single key.
    pub fn set(&self, key: impl Into<String>, value: Value) -> MergeOutcome {
        let mut updates = State::new();
        updates.insert(key.into(), value);
        self.merge(updates)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

//! Fold a recorded action log through the loader reducer.
//!
//! The log is JSON Lines, one action per line:
//!
//! ```text
//! {"kind": "[User] User Add Request", "loader": {"[User] User Add": "LOADING"}}
//! {"kind": "[Router] Navigated", "payload": {"url": "/users"}}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Payloads are kept
//! as raw JSON and never interpreted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::error::StoreError;
use crate::loader::{
    is_failed, is_loading, is_succeeded, loading_state, reduce_loaders, Action, ActionState,
    LoaderKey, StatusMap,
};
use crate::mvi::Intent;

pub type RecordedAction = Action<serde_json::Value>;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read action log '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: StoreError,
    },
}

/// Parse an action log. Tagged actions with an empty tag are rejected.
pub fn parse_actions(input: &str) -> Result<Vec<RecordedAction>, ReplayError> {
    let mut actions = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let action: RecordedAction = serde_json::from_str(trimmed)
            .map_err(|source| ReplayError::Parse { line, source })?;
        action
            .validate()
            .map_err(|source| ReplayError::Invalid { line, source })?;
        actions.push(action);
    }
    Ok(actions)
}

pub fn load_actions(path: &Path) -> Result<Vec<RecordedAction>, ReplayError> {
    let content = fs::read_to_string(path).map_err(|source| ReplayError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_actions(&content)
}

/// Reduce `actions` in order, starting from an empty map.
pub fn replay<'a, I>(actions: I) -> StatusMap
where
    I: IntoIterator<Item = &'a RecordedAction>,
{
    actions.into_iter().fold(StatusMap::new(), |state, action| {
        debug!(kind = action.kind(), tagged = action.is_tagged(), "replaying");
        reduce_loaders(state, action)
    })
}

/// Selector results for one group of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorReport {
    pub keys: Vec<LoaderKey>,
    pub is_loading: bool,
    pub is_failed: bool,
    pub is_succeeded: bool,
    pub state: ActionState,
}

impl SelectorReport {
    pub fn new(map: &StatusMap, keys: Vec<LoaderKey>) -> Self {
        Self {
            is_loading: is_loading(map, &keys),
            is_failed: is_failed(map, &keys),
            is_succeeded: is_succeeded(map, &keys),
            state: loading_state(map, &keys),
            keys,
        }
    }
}

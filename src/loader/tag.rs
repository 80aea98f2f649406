//! Tagging actions with loader updates.
//!
//! An [`Action`] may carry a partial [`LoaderUpdates`] map describing how
//! the status map should change when the action is reduced. The tag is a
//! regular field of the action type, so checking for it is a single
//! `Option` match.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::loader::state::{ActionState, LoaderKey};
use crate::mvi::Intent;

/// Partial mapping of loader key to new status, usually a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoaderUpdates(BTreeMap<LoaderKey, ActionState>);

impl LoaderUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    /// The common case: one key moving to one state.
    pub fn single(key: impl Into<LoaderKey>, state: ActionState) -> Self {
        Self::new().with(key, state)
    }

    pub fn with(mut self, key: impl Into<LoaderKey>, state: ActionState) -> Self {
        self.insert(key, state);
        self
    }

    /// Later writes to the same key win.
    pub fn insert(&mut self, key: impl Into<LoaderKey>, state: ActionState) {
        self.0.insert(key.into(), state);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<ActionState> {
        self.0.get(key.as_ref()).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LoaderKey, ActionState)> + '_ {
        self.0.iter().map(|(key, state)| (key, *state))
    }
}

impl<K: Into<LoaderKey>> FromIterator<(K, ActionState)> for LoaderUpdates {
    fn from_iter<I: IntoIterator<Item = (K, ActionState)>>(iter: I) -> Self {
        let mut updates = Self::new();
        for (key, state) in iter {
            updates.insert(key, state);
        }
        updates
    }
}

/// Anything the loader reducer can inspect for a loader tag.
///
/// Implemented by [`Action`]; domain action types that carry their own tag
/// can implement it too and share the same reducer.
pub trait LoaderTagged {
    fn loader_updates(&self) -> Option<&LoaderUpdates>;
}

/// A dispatched action: a type string, an optional payload and an
/// optional loader tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action<P = ()> {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<LoaderUpdates>,
}

impl<P> Action<P> {
    /// Untagged action with a payload.
    pub fn new(kind: impl Into<String>, payload: P) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
            loader: None,
        }
    }

    /// Untagged action without a payload.
    pub fn bare(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
            loader: None,
        }
    }

    /// Attach (or replace) the loader tag.
    pub fn with_loader(mut self, updates: LoaderUpdates) -> Self {
        self.loader = Some(updates);
        self
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn is_tagged(&self) -> bool {
        self.loader.is_some()
    }
}

/// Build a tagged action from its parts.
///
/// With `payload` set to `None` the action carries only the loader tag.
/// An empty `updates` is accepted here; see [`Intent::validate`].
pub fn with_loader<P>(
    kind: impl Into<String>,
    updates: LoaderUpdates,
    payload: Option<P>,
) -> Action<P> {
    Action {
        kind: kind.into(),
        payload,
        loader: Some(updates),
    }
}

impl<P> LoaderTagged for Action<P> {
    fn loader_updates(&self) -> Option<&LoaderUpdates> {
        self.loader.as_ref()
    }
}

impl<P: Send + Sync + 'static> Intent for Action<P> {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn validate(&self) -> Result<(), StoreError> {
        match &self.loader {
            Some(updates) if updates.is_empty() => Err(StoreError::EmptyLoaderUpdates {
                kind: self.kind.clone(),
            }),
            _ => Ok(()),
        }
    }
}

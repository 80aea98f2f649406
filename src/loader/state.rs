//! Loader status model: per-operation states and the keyed status map.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::loader::tag::LoaderUpdates;
use crate::mvi::StoreState;

/// Status of one tracked asynchronous operation.
///
/// The variant order carries no meaning. Aggregation over several keys
/// uses the precedence `Loading > Failed > Succeeded > Init`, see
/// [`loading_state`](crate::loader::loading_state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionState {
    /// Never started, or the key was never written.
    #[default]
    Init,
    Loading,
    Succeeded,
    Failed,
}

impl ActionState {
    pub const ALL: [ActionState; 4] = [
        ActionState::Init,
        ActionState::Loading,
        ActionState::Succeeded,
        ActionState::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionState::Init => "INIT",
            ActionState::Loading => "LOADING",
            ActionState::Succeeded => "SUCCEEDED",
            ActionState::Failed => "FAILED",
        }
    }

    /// Returns true once the operation has finished, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, ActionState::Succeeded | ActionState::Failed)
    }
}

impl fmt::Display for ActionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionState {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ActionState::ALL
            .into_iter()
            .find(|state| state.as_str() == upper)
            .ok_or_else(|| StoreError::UnknownActionState {
                value: s.to_string(),
            })
    }
}

/// Name of a logical asynchronous operation, e.g. `"[User] User Add"`.
///
/// Keys are caller-defined constants; uniqueness is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoaderKey(String);

impl LoaderKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LoaderKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for LoaderKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&LoaderKey> for LoaderKey {
    fn from(key: &LoaderKey) -> Self {
        key.clone()
    }
}

impl AsRef<str> for LoaderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LoaderKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoaderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mapping from loader key to its current [`ActionState`].
///
/// A `StatusMap` is an immutable snapshot. Cloning shares the underlying
/// map; [`merge`](Self::merge) copies it only when another snapshot still
/// points at it, so a value handed to a subscriber never changes under it.
///
/// Keys are only ever added or overwritten. A key that was never written
/// reads as [`ActionState::Init`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusMap {
    entries: Arc<BTreeMap<LoaderKey, ActionState>>,
}

impl StatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of `key`, `Init` when absent.
    pub fn get(&self, key: impl AsRef<str>) -> ActionState {
        self.entries
            .get(key.as_ref())
            .copied()
            .unwrap_or_default()
    }

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LoaderKey, ActionState)> + '_ {
        self.entries.iter().map(|(key, state)| (key, *state))
    }

    /// Overwrite every key present in `updates`, leaving the rest untouched.
    pub fn merge(mut self, updates: &LoaderUpdates) -> Self {
        if updates.is_empty() {
            return self;
        }
        let entries = Arc::make_mut(&mut self.entries);
        for (key, state) in updates.iter() {
            entries.insert(key.clone(), state);
        }
        self
    }

    /// Entries of `self` whose status differs from `earlier`.
    pub fn changes_since<'a>(
        &'a self,
        earlier: &'a StatusMap,
    ) -> impl Iterator<Item = (&'a LoaderKey, ActionState)> + 'a {
        self.iter()
            .filter(move |(key, state)| earlier.get(key) != *state)
    }

    /// True when both values are the same snapshot, not merely equal.
    pub fn ptr_eq(a: &StatusMap, b: &StatusMap) -> bool {
        Arc::ptr_eq(&a.entries, &b.entries)
    }
}

impl<K: Into<LoaderKey>> FromIterator<(K, ActionState)> for StatusMap {
    fn from_iter<I: IntoIterator<Item = (K, ActionState)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, state)| (key.into(), state))
            .collect();
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl StoreState for StatusMap {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_init() {
        assert_eq!(ActionState::default(), ActionState::Init);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("loading".parse::<ActionState>(), Ok(ActionState::Loading));
        assert_eq!(" FAILED ".parse::<ActionState>(), Ok(ActionState::Failed));
        assert!(matches!(
            "done".parse::<ActionState>(),
            Err(StoreError::UnknownActionState { value }) if value == "done"
        ));
    }

    #[test]
    fn serializes_as_screaming_names() {
        let json = serde_json::to_string(&ActionState::Succeeded).unwrap();
        assert_eq!(json, "\"SUCCEEDED\"");
        let state: ActionState = serde_json::from_str("\"INIT\"").unwrap();
        assert_eq!(state, ActionState::Init);
    }

    #[test]
    fn only_terminal_states_are_settled() {
        assert!(!ActionState::Init.is_settled());
        assert!(!ActionState::Loading.is_settled());
        assert!(ActionState::Succeeded.is_settled());
        assert!(ActionState::Failed.is_settled());
    }

    #[test]
    fn absent_key_reads_as_init() {
        let map = StatusMap::new();
        assert_eq!(map.get("never written"), ActionState::Init);
        assert!(!map.contains("never written"));
    }

    #[test]
    fn merge_does_not_touch_shared_snapshot() {
        let before: StatusMap = [("add", ActionState::Loading)].into_iter().collect();
        let observed = before.clone();

        let after = before.merge(&LoaderUpdates::single("add", ActionState::Succeeded));

        assert_eq!(observed.get("add"), ActionState::Loading);
        assert_eq!(after.get("add"), ActionState::Succeeded);
        assert!(!StatusMap::ptr_eq(&observed, &after));
    }

    #[test]
    fn changes_since_lists_new_and_updated_keys() {
        let earlier: StatusMap = [("add", ActionState::Loading), ("list", ActionState::Succeeded)]
            .into_iter()
            .collect();
        let later = earlier.clone().merge(
            &LoaderUpdates::single("add", ActionState::Succeeded)
                .with("delete", ActionState::Loading),
        );

        let changed: Vec<_> = later
            .changes_since(&earlier)
            .map(|(key, state)| (key.as_str().to_string(), state))
            .collect();
        assert_eq!(
            changed,
            vec![
                ("add".to_string(), ActionState::Succeeded),
                ("delete".to_string(), ActionState::Loading),
            ]
        );
    }

    #[test]
    fn serializes_as_plain_object() {
        let map: StatusMap = [("add", ActionState::Loading)].into_iter().collect();
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ "add": "LOADING" }));
    }
}

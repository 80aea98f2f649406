//! Pure queries over a [`StatusMap`].
//!
//! Each predicate takes the keys of interest. With exactly one key it
//! compares that key's status; with any other count it is true when at
//! least one key matches, which makes the empty list false everywhere.

use parking_lot::Mutex;

use crate::loader::state::{ActionState, LoaderKey, StatusMap};

/// States that expose the loader status map, wherever it lives in them.
pub trait LoadersFeature {
    fn loaders(&self) -> &StatusMap;
}

impl LoadersFeature for StatusMap {
    fn loaders(&self) -> &StatusMap {
        self
    }
}

fn has_state<K: AsRef<str>>(map: &StatusMap, keys: &[K], wanted: ActionState) -> bool {
    if let [only] = keys {
        return map.get(only) == wanted;
    }
    keys.iter().any(|key| map.get(key) == wanted)
}

pub fn is_succeeded<K: AsRef<str>>(map: &StatusMap, keys: &[K]) -> bool {
    has_state(map, keys, ActionState::Succeeded)
}

pub fn is_loading<K: AsRef<str>>(map: &StatusMap, keys: &[K]) -> bool {
    has_state(map, keys, ActionState::Loading)
}

pub fn is_failed<K: AsRef<str>>(map: &StatusMap, keys: &[K]) -> bool {
    has_state(map, keys, ActionState::Failed)
}

/// Single status for a group of keys: `Loading` beats `Failed` beats
/// `Succeeded` beats `Init`.
pub fn loading_state<K: AsRef<str>>(map: &StatusMap, keys: &[K]) -> ActionState {
    if is_loading(map, keys) {
        ActionState::Loading
    } else if is_failed(map, keys) {
        ActionState::Failed
    } else if is_succeeded(map, keys) {
        ActionState::Succeeded
    } else {
        ActionState::Init
    }
}

/// Selector bound to a fixed list of keys.
///
/// [`select`](Self::select) remembers the last snapshot it saw and returns
/// the cached aggregate while it is handed that same snapshot again.
#[derive(Debug)]
pub struct LoaderSelector {
    keys: Vec<LoaderKey>,
    memo: Mutex<Option<(StatusMap, ActionState)>>,
}

impl LoaderSelector {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<LoaderKey>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            memo: Mutex::new(None),
        }
    }

    pub fn keys(&self) -> &[LoaderKey] {
        &self.keys
    }

    pub fn is_succeeded(&self, map: &StatusMap) -> bool {
        is_succeeded(map, &self.keys)
    }

    pub fn is_loading(&self, map: &StatusMap) -> bool {
        is_loading(map, &self.keys)
    }

    pub fn is_failed(&self, map: &StatusMap) -> bool {
        is_failed(map, &self.keys)
    }

    pub fn select(&self, map: &StatusMap) -> ActionState {
        let mut memo = self.memo.lock();
        if let Some((seen, state)) = memo.as_ref() {
            if StatusMap::ptr_eq(seen, map) {
                return *state;
            }
        }
        let state = loading_state(map, &self.keys);
        *memo = Some((map.clone(), state));
        state
    }

    /// Keys joined for log and error messages.
    pub fn describe(&self) -> String {
        self.keys
            .iter()
            .map(LoaderKey::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Clone for LoaderSelector {
    fn clone(&self) -> Self {
        Self::new(self.keys.iter())
    }
}

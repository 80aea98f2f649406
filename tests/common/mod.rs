//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use action_loaders::app::{AppState, AppStore};
use action_loaders::config::DemoConfig;
use action_loaders::loader::{with_loader, Action, ActionState, LoaderUpdates, StatusMap};
use action_loaders::users::UserEffects;

/// Build a status map from literal entries.
pub fn status_map(entries: &[(&str, ActionState)]) -> StatusMap {
    entries.iter().copied().collect()
}

/// Action carrying a single-entry loader tag and no payload.
pub fn tag(key: &str, state: ActionState) -> Action {
    with_loader("[Test] Tagged", LoaderUpdates::single(key, state), None)
}

/// Action without a loader tag.
pub fn untagged(kind: &str) -> Action {
    Action::bare(kind)
}

pub const EFFECT_DELAY: Duration = Duration::from_millis(2000);

/// App store with user effects running on the default demo config.
pub fn app_with_effects() -> (Arc<AppStore>, tokio::task::JoinHandle<()>) {
    let store = Arc::new(AppStore::new(AppState::default()));
    let effects = UserEffects::new(&DemoConfig::default())
        .with_delay(EFFECT_DELAY)
        .spawn(&store);
    (store, effects)
}

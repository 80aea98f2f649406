mod common;

use std::sync::Arc;
use std::time::Duration;

use action_loaders::error::StoreError;
use action_loaders::loader::{
    Action, ActionState, LoaderReducer, LoaderSelector, LoaderUpdates, StatusMap,
};
use action_loaders::store::{settle, Store};
use common::{status_map, tag, untagged};

type LoaderStore = Store<LoaderReducer<Action>>;

#[test]
fn starts_from_initial_state() {
    let store = LoaderStore::new(status_map(&[("list", ActionState::Succeeded)]));
    assert_eq!(store.state().get("list"), ActionState::Succeeded);
}

#[test]
fn dispatch_folds_tags_in_order() {
    let store = LoaderStore::new(StatusMap::new());
    store.dispatch(tag("add", ActionState::Loading));
    store.dispatch(untagged("[Router] Navigated"));
    store.dispatch(tag("delete", ActionState::Loading));
    store.dispatch(tag("add", ActionState::Succeeded));

    assert_eq!(
        store.state(),
        status_map(&[("add", ActionState::Succeeded), ("delete", ActionState::Loading)])
    );
}

#[test]
fn untagged_dispatch_keeps_snapshot() {
    let store = LoaderStore::new(status_map(&[("add", ActionState::Loading)]));
    let before = store.state();
    store.dispatch(untagged("[Router] Navigated"));
    assert!(StatusMap::ptr_eq(&before, &store.state()));
}

#[test]
fn held_snapshot_does_not_change() {
    let store = LoaderStore::new(StatusMap::new());
    store.dispatch(tag("add", ActionState::Loading));
    let snapshot = store.state();

    store.dispatch(tag("add", ActionState::Failed));

    assert_eq!(snapshot.get("add"), ActionState::Loading);
    assert_eq!(store.state().get("add"), ActionState::Failed);
}

#[test]
fn try_dispatch_leaves_state_on_error() {
    let store = LoaderStore::new(StatusMap::new());
    let err = store
        .try_dispatch(Action::bare("[Test] Empty").with_loader(LoaderUpdates::new()))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::EmptyLoaderUpdates {
            kind: "[Test] Empty".to_string()
        }
    );
    assert!(store.state().is_empty());
}

#[tokio::test]
async fn subscribers_see_latest_state() {
    let store = LoaderStore::new(StatusMap::new());
    let mut receiver = store.subscribe();

    store.dispatch(tag("add", ActionState::Loading));

    receiver.changed().await.unwrap();
    assert_eq!(receiver.borrow_and_update().get("add"), ActionState::Loading);
}

#[tokio::test]
async fn action_stream_delivers_dispatched_actions() {
    let store = LoaderStore::new(StatusMap::new());
    let mut actions = store.actions();

    store.dispatch(tag("add", ActionState::Loading));
    store.dispatch(untagged("[Router] Navigated"));

    assert!(actions.recv().await.unwrap().is_tagged());
    assert_eq!(actions.recv().await.unwrap().kind, "[Router] Navigated");
}

#[tokio::test]
async fn settle_waits_for_terminal_state() {
    let store = Arc::new(LoaderStore::new(StatusMap::new()));
    store.dispatch(tag("add", ActionState::Loading));

    let background = Arc::clone(&store);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        background.dispatch(tag("add", ActionState::Succeeded));
    });

    let outcome = store
        .settle(&LoaderSelector::new(["add"]), Some(Duration::from_secs(5)))
        .await;
    assert_eq!(outcome, Ok(ActionState::Succeeded));
}

#[tokio::test]
async fn settle_reports_failure() {
    let store = Arc::new(LoaderStore::new(StatusMap::new()));
    store.dispatch(tag("delete", ActionState::Loading));

    let background = Arc::clone(&store);
    tokio::spawn(async move {
        background.dispatch(tag("delete", ActionState::Failed));
    });

    let outcome = store
        .settle(&LoaderSelector::new(["delete"]), Some(Duration::from_secs(5)))
        .await;
    assert_eq!(outcome, Ok(ActionState::Failed));
}

#[tokio::test(start_paused = true)]
async fn settle_times_out_while_loading() {
    let store = LoaderStore::new(StatusMap::new());
    store.dispatch(tag("add", ActionState::Loading));

    let outcome = store
        .settle(&LoaderSelector::new(["add"]), Some(Duration::from_millis(500)))
        .await;

    assert!(matches!(
        outcome,
        Err(StoreError::SettleTimeout { keys, timeout })
            if keys == "add" && timeout == Duration::from_millis(500)
    ));
}

#[tokio::test]
async fn settle_errors_when_store_is_dropped() {
    let store = LoaderStore::new(StatusMap::new());
    store.dispatch(tag("add", ActionState::Loading));
    let mut receiver = store.subscribe();
    drop(store);

    let outcome = settle(&mut receiver, |map: &StatusMap| map.get("add")).await;
    assert_eq!(outcome, Err(StoreError::Closed));
}

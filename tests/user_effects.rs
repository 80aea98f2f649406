mod common;

use std::time::Duration;

use action_loaders::loader::{ActionState, LoaderSelector};
use action_loaders::users::{
    user_add_request, user_delete_request, user_list_load_request, User, USER_ADD_KEY,
    USER_DELETE_KEY, USER_LIST_LOAD_KEY,
};
use common::{app_with_effects, EFFECT_DELAY};

const TIMEOUT: Option<Duration> = Some(Duration::from_secs(30));

#[tokio::test(start_paused = true)]
async fn list_load_goes_loading_then_succeeded() {
    let (store, _effects) = app_with_effects();

    store.dispatch(user_list_load_request());
    assert_eq!(store.state().loaders.get(USER_LIST_LOAD_KEY), ActionState::Loading);
    assert!(store.state().users.is_empty());

    let outcome = store
        .settle(&LoaderSelector::new([USER_LIST_LOAD_KEY]), TIMEOUT)
        .await;

    assert_eq!(outcome, Ok(ActionState::Succeeded));
    let users = store.state().users;
    assert_eq!(users.len(), 4);
    assert_eq!(users.users()[0], User::new(1, "Jhon"));
}

#[tokio::test(start_paused = true)]
async fn answer_arrives_after_delay() {
    let (store, _effects) = app_with_effects();

    store.dispatch(user_add_request("Ann"));
    tokio::time::sleep(EFFECT_DELAY / 2).await;
    assert_eq!(store.state().loaders.get(USER_ADD_KEY), ActionState::Loading);

    tokio::time::sleep(EFFECT_DELAY).await;
    assert_eq!(store.state().loaders.get(USER_ADD_KEY), ActionState::Succeeded);
    assert!(store.state().users.contains(5));
}

#[tokio::test(start_paused = true)]
async fn blank_username_fails_add() {
    let (store, _effects) = app_with_effects();

    store.dispatch(user_add_request("  "));
    let outcome = store
        .settle(&LoaderSelector::new([USER_ADD_KEY]), TIMEOUT)
        .await;

    assert_eq!(outcome, Ok(ActionState::Failed));
    assert!(store.state().users.is_empty());
}

#[tokio::test(start_paused = true)]
async fn delete_after_load_removes_user() {
    let (store, _effects) = app_with_effects();

    store.dispatch(user_list_load_request());
    store
        .settle(&LoaderSelector::new([USER_LIST_LOAD_KEY]), TIMEOUT)
        .await
        .unwrap();

    store.dispatch(user_delete_request(2));
    let outcome = store
        .settle(&LoaderSelector::new([USER_DELETE_KEY]), TIMEOUT)
        .await;

    assert_eq!(outcome, Ok(ActionState::Succeeded));
    let state = store.state();
    assert!(!state.users.contains(2));
    assert_eq!(state.users.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn delete_of_unknown_user_fails() {
    let (store, _effects) = app_with_effects();

    store.dispatch(user_delete_request(99));
    let outcome = store
        .settle(&LoaderSelector::new([USER_DELETE_KEY]), TIMEOUT)
        .await;

    assert_eq!(outcome, Ok(ActionState::Failed));
}

#[tokio::test(start_paused = true)]
async fn newer_request_of_same_kind_cancels_older_answer() {
    let (store, _effects) = app_with_effects();

    store.dispatch(user_add_request("Ann"));
    tokio::time::sleep(EFFECT_DELAY / 2).await;
    store.dispatch(user_add_request("Ben"));

    store
        .settle(&LoaderSelector::new([USER_ADD_KEY]), TIMEOUT)
        .await
        .unwrap();
    tokio::time::sleep(EFFECT_DELAY * 2).await;

    let users = store.state().users;
    assert_eq!(users.users(), &[User::new(6, "Ben")]);
}

#[tokio::test(start_paused = true)]
async fn different_kinds_run_side_by_side() {
    let (store, _effects) = app_with_effects();

    store.dispatch(user_list_load_request());
    store.dispatch(user_add_request("Ann"));

    let both = LoaderSelector::new([USER_LIST_LOAD_KEY, USER_ADD_KEY]);
    assert_eq!(both.select(&store.state().loaders), ActionState::Loading);

    tokio::time::sleep(EFFECT_DELAY + Duration::from_millis(10)).await;

    let state = store.state();
    assert_eq!(both.select(&state.loaders), ActionState::Succeeded);
    assert_eq!(state.users.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn effects_stop_when_store_is_dropped() {
    let (store, effects) = app_with_effects();
    store.dispatch(user_add_request("Ann"));
    drop(store);

    tokio::time::timeout(Duration::from_secs(1), effects)
        .await
        .expect("effect loop should end")
        .expect("effect loop should not panic");
}

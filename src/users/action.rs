//! User actions, each tagged with the loader key of the operation it
//! belongs to.

use crate::loader::{with_loader, Action, ActionState, LoaderUpdates};
use crate::users::model::User;

pub const USER_ADD_KEY: &str = "[User] User Add";
pub const USER_DELETE_KEY: &str = "[User] User Delete";
pub const USER_LIST_LOAD_KEY: &str = "[User] User Load List";

pub const USER_ADD_REQUEST: &str = "[User] User Add Request";
pub const USER_ADD_SUCCESS: &str = "[User] User Add Success";
pub const USER_ADD_FAILURE: &str = "[User] User Add Failure";
pub const USER_DELETE_REQUEST: &str = "[User] User Delete Request";
pub const USER_DELETE_SUCCESS: &str = "[User] User Delete Success";
pub const USER_DELETE_FAILURE: &str = "[User] User Delete Failure";
pub const USER_LIST_LOAD_REQUEST: &str = "[User] User Load List Request";
pub const USER_LIST_LOAD_SUCCESS: &str = "[User] User Load List Success";
pub const USER_LIST_LOAD_FAILURE: &str = "[User] User Load List Failure";

#[derive(Debug, Clone, PartialEq)]
pub enum UserPayload {
    Add { username: String },
    Added { user: User },
    Delete { id: u64 },
    Deleted { id: u64 },
    Loaded { users: Vec<User> },
    Failure { message: String },
}

pub type UserAction = Action<UserPayload>;

fn tagged(kind: &str, key: &str, state: ActionState, payload: Option<UserPayload>) -> UserAction {
    with_loader(kind, LoaderUpdates::single(key, state), payload)
}

fn failure(kind: &str, key: &str, message: impl Into<String>) -> UserAction {
    tagged(
        kind,
        key,
        ActionState::Failed,
        Some(UserPayload::Failure {
            message: message.into(),
        }),
    )
}

pub fn user_add_request(username: impl Into<String>) -> UserAction {
    tagged(
        USER_ADD_REQUEST,
        USER_ADD_KEY,
        ActionState::Loading,
        Some(UserPayload::Add {
            username: username.into(),
        }),
    )
}

pub fn user_add_success(user: User) -> UserAction {
    tagged(
        USER_ADD_SUCCESS,
        USER_ADD_KEY,
        ActionState::Succeeded,
        Some(UserPayload::Added { user }),
    )
}

pub fn user_add_failure(message: impl Into<String>) -> UserAction {
    failure(USER_ADD_FAILURE, USER_ADD_KEY, message)
}

pub fn user_delete_request(id: u64) -> UserAction {
    tagged(
        USER_DELETE_REQUEST,
        USER_DELETE_KEY,
        ActionState::Loading,
        Some(UserPayload::Delete { id }),
    )
}

pub fn user_delete_success(id: u64) -> UserAction {
    tagged(
        USER_DELETE_SUCCESS,
        USER_DELETE_KEY,
        ActionState::Succeeded,
        Some(UserPayload::Deleted { id }),
    )
}

pub fn user_delete_failure(message: impl Into<String>) -> UserAction {
    failure(USER_DELETE_FAILURE, USER_DELETE_KEY, message)
}

/// Carries no payload, only the loader tag.
pub fn user_list_load_request() -> UserAction {
    tagged(
        USER_LIST_LOAD_REQUEST,
        USER_LIST_LOAD_KEY,
        ActionState::Loading,
        None,
    )
}

pub fn user_list_load_success(users: Vec<User>) -> UserAction {
    tagged(
        USER_LIST_LOAD_SUCCESS,
        USER_LIST_LOAD_KEY,
        ActionState::Succeeded,
        Some(UserPayload::Loaded { users }),
    )
}

pub fn user_list_load_failure(message: impl Into<String>) -> UserAction {
    failure(USER_LIST_LOAD_FAILURE, USER_LIST_LOAD_KEY, message)
}

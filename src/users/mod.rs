//! Users feature: a list of users loaded, added and deleted through
//! asynchronous effects whose progress is tracked by loader keys.

mod action;
mod effect;
mod model;
mod reducer;

pub use action::{
    user_add_failure, user_add_request, user_add_success, user_delete_failure,
    user_delete_request, user_delete_success, user_list_load_failure, user_list_load_request,
    user_list_load_success, UserAction, UserPayload, USER_ADD_FAILURE, USER_ADD_KEY,
    USER_ADD_REQUEST, USER_ADD_SUCCESS, USER_DELETE_FAILURE, USER_DELETE_KEY,
    USER_DELETE_REQUEST, USER_DELETE_SUCCESS, USER_LIST_LOAD_FAILURE, USER_LIST_LOAD_KEY,
    USER_LIST_LOAD_REQUEST, USER_LIST_LOAD_SUCCESS,
};
pub use effect::UserEffects;
pub use model::User;
pub use reducer::{UsersReducer, UsersState};

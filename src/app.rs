//! Root state of the demo application: loader statuses plus the users
//! feature, reduced together for every dispatched action.

use crate::loader::{LoaderReducer, LoadersFeature, StatusMap};
use crate::mvi::{Reducer, StoreState};
use crate::store::Store;
use crate::users::{UserAction, UsersReducer, UsersState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub loaders: StatusMap,
    pub users: UsersState,
}

impl StoreState for AppState {}

impl LoadersFeature for AppState {
    fn loaders(&self) -> &StatusMap {
        &self.loaders
    }
}

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = UserAction;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        AppState {
            loaders: LoaderReducer::<UserAction>::reduce(state.loaders, intent),
            users: UsersReducer::reduce(state.users, intent),
        }
    }
}

pub type AppStore = Store<AppReducer>;

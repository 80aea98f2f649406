use crate::mvi::{Reducer, StoreState};
use crate::users::action::{UserAction, UserPayload};
use crate::users::model::User;

/// Users known to the client, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    users: Vec<User>,
}

impl StoreState for UsersState {}

impl UsersState {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.users.iter().any(|u| u.id == id)
    }
}

impl FromIterator<User> for UsersState {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().collect(),
        }
    }
}

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UserAction;

    fn reduce(mut state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent.payload() {
            Some(UserPayload::Added { user }) => {
                state.users.push(user.clone());
                state
            }
            Some(UserPayload::Deleted { id }) => {
                state.users.retain(|u| u.id != *id);
                state
            }
            Some(UserPayload::Loaded { users }) => {
                state.users.extend(users.iter().cloned());
                state
            }
            _ => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::action::{
        user_add_request, user_add_success, user_delete_success, user_list_load_success,
    };

    #[test]
    fn add_success_appends() {
        let state = UsersReducer::reduce(
            UsersState::default(),
            &user_add_success(User::new(5, "Ann")),
        );
        assert_eq!(state.users(), &[User::new(5, "Ann")]);
    }

    #[test]
    fn request_leaves_users_alone() {
        let state = UsersReducer::reduce(UsersState::default(), &user_add_request("Ann"));
        assert!(state.is_empty());
    }

    #[test]
    fn delete_success_removes_by_id() {
        let state: UsersState = [User::new(1, "Jhon"), User::new(2, "Bob")]
            .into_iter()
            .collect();
        let state = UsersReducer::reduce(state, &user_delete_success(1));
        assert_eq!(state.users(), &[User::new(2, "Bob")]);
        assert!(!state.contains(1));
    }

    #[test]
    fn list_load_appends_once() {
        let state: UsersState = [User::new(9, "Existing")].into_iter().collect();
        let state = UsersReducer::reduce(
            state,
            &user_list_load_success(vec![User::new(1, "Jhon"), User::new(2, "Bob")]),
        );
        assert_eq!(state.len(), 3);
    }
}

//! Asynchronous side of the users feature.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::app::{AppState, AppStore};
use crate::config::DemoConfig;
use crate::mvi::Intent;
use crate::users::action::{
    user_add_failure, user_add_success, user_delete_failure, user_delete_success,
    user_list_load_success, UserAction, UserPayload, USER_ADD_KEY, USER_ADD_REQUEST,
    USER_DELETE_KEY, USER_DELETE_REQUEST, USER_LIST_LOAD_KEY, USER_LIST_LOAD_REQUEST,
};
use crate::users::model::User;

/// Answers user requests after a fixed delay, standing in for a backend.
///
/// Requests of the same kind switch: a newer request cancels the pending
/// answer to an older one.
pub struct UserEffects {
    delay: Duration,
    next_id: u64,
    seed_users: Vec<User>,
}

impl UserEffects {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.effect_delay_ms),
            next_id: config.first_user_id,
            seed_users: config.seed_users.clone(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Answer for `action`, or `None` when this effect ignores it.
    ///
    /// The first element is the loader key, which doubles as the switch slot.
    pub fn respond(
        &mut self,
        action: &UserAction,
        state: &AppState,
    ) -> Option<(&'static str, UserAction)> {
        match (action.kind(), action.payload()) {
            (USER_ADD_REQUEST, Some(UserPayload::Add { username })) => {
                let username = username.trim();
                let response = if username.is_empty() {
                    user_add_failure("username must not be blank")
                } else {
                    let user = User::new(self.next_id, username);
                    self.next_id += 1;
                    user_add_success(user)
                };
                Some((USER_ADD_KEY, response))
            }
            (USER_DELETE_REQUEST, Some(UserPayload::Delete { id })) => {
                let response = if state.users.contains(*id) {
                    user_delete_success(*id)
                } else {
                    user_delete_failure(format!("no user with id {}", id))
                };
                Some((USER_DELETE_KEY, response))
            }
            (USER_LIST_LOAD_REQUEST, _) => Some((
                USER_LIST_LOAD_KEY,
                user_list_load_success(self.seed_users.clone()),
            )),
            _ => None,
        }
    }

    /// Run the effect loop until the store is dropped.
    ///
    /// Subscribes before returning, so actions dispatched right after this
    /// call are not missed. Only a weak reference to the store is kept.
    pub fn spawn(mut self, store: &Arc<AppStore>) -> JoinHandle<()> {
        let mut actions = store.actions();
        let store = Arc::downgrade(store);

        tokio::spawn(async move {
            let mut inflight: HashMap<&'static str, JoinHandle<()>> = HashMap::new();

            loop {
                let action = match actions.recv().await {
                    Ok(action) => action,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "user effects lagged behind the action stream");
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };

                let Some(current) = store.upgrade() else {
                    break;
                };
                let answer = current.select(|state| self.respond(&action, state));
                drop(current);

                let Some((slot, response)) = answer else {
                    continue;
                };
                debug!(slot, request = action.kind(), "scheduling answer");
                let handle = answer_later(Weak::clone(&store), self.delay, response);
                if let Some(previous) = inflight.insert(slot, handle) {
                    previous.abort();
                }
            }

            for (_, handle) in inflight {
                handle.abort();
            }
            debug!("user effects stopped");
        })
    }
}

fn answer_later(store: Weak<AppStore>, delay: Duration, response: UserAction) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let Some(store) = store.upgrade() else {
            return;
        };
        info!(kind = response.kind(), "effect answered");
        store.dispatch(response);
    })
}

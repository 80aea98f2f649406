//! Single-writer store holding the current state snapshot.
//!
//! Every dispatched action is folded through the root [`Reducer`], the new
//! state is published to watch subscribers, and the action itself is
//! broadcast so effects can react to it.
//!
//! # Guarantees
//!
//! - **Serial reduction**: concurrent `dispatch` calls are applied one at a time
//! - **Latest value only**: subscribers see the newest state, not every step
//! - **At-most-once actions**: slow action receivers may lag and miss actions

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tracing::debug;

use crate::error::StoreError;
use crate::loader::{ActionState, LoaderSelector, LoadersFeature};
use crate::mvi::{Intent, Reducer};

/// Default capacity of the dispatched-action stream.
pub const DEFAULT_ACTION_CAPACITY: usize = 256;

pub struct Store<R: Reducer> {
    state: watch::Sender<R::State>,
    actions: broadcast::Sender<Arc<R::Intent>>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self::with_capacity(initial, DEFAULT_ACTION_CAPACITY)
    }

    /// Create a store whose action stream buffers `capacity` actions
    /// before slow receivers start lagging.
    pub fn with_capacity(initial: R::State, capacity: usize) -> Self {
        let (state, _) = watch::channel(initial);
        let (actions, _) = broadcast::channel(capacity.max(1));
        Self { state, actions }
    }

    /// Reduce `action` into the state, then hand it to action receivers.
    ///
    /// Returns the number of action receivers that got the action.
    pub fn dispatch(&self, action: R::Intent) -> usize {
        debug!(kind = action.kind(), "dispatch");
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = R::reduce(current, &action);
        });
        self.actions.send(Arc::new(action)).unwrap_or(0)
    }

    /// Like [`dispatch`](Self::dispatch), but runs [`Intent::validate`] first
    /// and leaves the state alone when it fails.
    pub fn try_dispatch(&self, action: R::Intent) -> Result<usize, StoreError> {
        action.validate()?;
        Ok(self.dispatch(action))
    }

    /// Clone of the current snapshot.
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Project the current snapshot without cloning it.
    pub fn select<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.state.borrow())
    }

    /// Receiver of successive state snapshots, starting from the current one.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.subscribe()
    }

    /// Receiver of actions dispatched after this call.
    pub fn actions(&self) -> broadcast::Receiver<Arc<R::Intent>> {
        self.actions.subscribe()
    }

    pub fn action_receiver_count(&self) -> usize {
        self.actions.receiver_count()
    }
}

impl<R> Store<R>
where
    R: Reducer,
    R::State: LoadersFeature,
{
    /// Wait until `selector` reports `Succeeded` or `Failed`.
    ///
    /// The current state counts, so call this right after dispatching the
    /// request that moves the keys to `Loading`.
    pub async fn settle(
        &self,
        selector: &LoaderSelector,
        timeout: Option<Duration>,
    ) -> Result<ActionState, StoreError> {
        let mut receiver = self.subscribe();
        let waiting = settle(&mut receiver, |state: &R::State| {
            selector.select(state.loaders())
        });
        match timeout {
            Some(timeout) => tokio::time::timeout(timeout, waiting)
                .await
                .map_err(|_| StoreError::SettleTimeout {
                    keys: selector.describe(),
                    timeout,
                })?,
            None => waiting.await,
        }
    }
}

/// Resolve with the first settled aggregate seen on `receiver`.
///
/// Fails with [`StoreError::Closed`] when the store is dropped first.
pub async fn settle<S, F>(
    receiver: &mut watch::Receiver<S>,
    project: F,
) -> Result<ActionState, StoreError>
where
    F: Fn(&S) -> ActionState,
{
    let state = receiver
        .wait_for(|state| project(state).is_settled())
        .await
        .map_err(|_| StoreError::Closed)?;
    Ok(project(&state))
}

impl<R: Reducer> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("subscribers", &self.state.receiver_count())
            .field("action_receivers", &self.actions.receiver_count())
            .finish()
    }
}

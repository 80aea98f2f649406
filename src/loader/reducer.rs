use std::marker::PhantomData;

use tracing::trace;

use crate::loader::state::StatusMap;
use crate::loader::tag::LoaderTagged;
use crate::mvi::{Intent, Reducer};

/// Fold one action into the status map.
///
/// Tagged actions overwrite the keys they mention. Anything else gets the
/// input snapshot back untouched, so `StatusMap::ptr_eq` holds between the
/// argument and the result.
pub fn reduce_loaders<A>(state: StatusMap, action: &A) -> StatusMap
where
    A: LoaderTagged + ?Sized,
{
    match action.loader_updates() {
        Some(updates) => {
            trace!(keys = updates.len(), "merging loader updates");
            state.merge(updates)
        }
        None => state,
    }
}

/// [`reduce_loaders`] as a [`Reducer`], for composing into a root reducer
/// or driving a store that only tracks loaders.
pub struct LoaderReducer<A>(PhantomData<fn() -> A>);

impl<A> Reducer for LoaderReducer<A>
where
    A: Intent + LoaderTagged,
{
    type State = StatusMap;
    type Intent = A;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        reduce_loaders(state, intent)
    }
}

//! Keyed action-state tracking.
//!
//! Actions are tagged with loader-key/state pairs ([`with_loader`]), a
//! reducer merges those tags into a [`StatusMap`] ([`reduce_loaders`]),
//! and selectors derive loading/success/failure flags for any group of
//! keys ([`loading_state`] and friends).

mod reducer;
mod selector;
mod state;
mod tag;

pub use reducer::{reduce_loaders, LoaderReducer};
pub use selector::{
    is_failed, is_loading, is_succeeded, loading_state, LoaderSelector, LoadersFeature,
};
pub use state::{ActionState, LoaderKey, StatusMap};
pub use tag::{with_loader, Action, LoaderTagged, LoaderUpdates};

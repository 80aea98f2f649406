//! Error types shared by the store and the loader model.

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by the store layer.
///
/// The loader reducer and selectors are total and never produce these;
/// they come from optional validation and from waiting on the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Action '{kind}' carries an empty loader tag")]
    EmptyLoaderUpdates { kind: String },

    #[error("Unknown action state '{value}' (expected INIT, LOADING, SUCCEEDED or FAILED)")]
    UnknownActionState { value: String },

    #[error("Store closed before the loaders settled")]
    Closed,

    #[error("Loaders [{keys}] did not settle within {timeout:?}")]
    SettleTimeout { keys: String, timeout: Duration },
}

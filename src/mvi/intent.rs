//! Base trait for intents (actions) in MVI architecture.

use crate::error::StoreError;

/// Trait for action objects dispatched to a store.
///
/// Intents represent:
/// - Requests to start asynchronous work (add a user, load a list)
/// - Outcomes reported by effects (the work succeeded or failed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + Sync + 'static {
    /// Action type string, used for logging and by effects to pick the
    /// actions they react to.
    fn kind(&self) -> &str;

    /// Structural check applied by [`Store::try_dispatch`](crate::store::Store::try_dispatch).
    ///
    /// Plain [`dispatch`](crate::store::Store::dispatch) never calls this.
    fn validate(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

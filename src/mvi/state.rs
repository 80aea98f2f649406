//! Base trait for store state in MVI architecture.

/// Marker trait for state objects held by a store.
///
/// States should be:
/// - Immutable (Clone to create new states, cheap when shared)
/// - Self-contained (all data selectors need)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}

//! Model-View-Intent (MVI) primitives.
//!
//! This module provides the base traits for unidirectional data flow:
//! every state change goes through a reducer, and every reducer input is
//! an action dispatched to a [`Store`](crate::store::Store).
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Selectors
//!    ↑                              │
//!    └────────── Effects ───────────┘
//! ```
//!
//! - **State**: Immutable snapshot of application state
//! - **Intent**: Requests to start work, or outcomes reported by effects
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;

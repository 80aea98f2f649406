//! Track the loading state of dispatched actions.
//!
//! Actions carry an optional loader tag mapping operation keys to an
//! [`ActionState`](loader::ActionState). A reducer folds the tags into a
//! keyed [`StatusMap`](loader::StatusMap), and selectors answer "is this
//! group of operations loading, failed or done?" for the UI.
//!
//! The [`store`] module provides the surrounding single-writer store with
//! subscriptions and an action stream for effects; [`users`] and [`app`]
//! wire a small users feature on top of it.

pub mod app;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod mvi;
pub mod replay;
pub mod store;
pub mod users;

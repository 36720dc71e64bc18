//! Store layer owning the canonical catalog state.
//!
//! This module implements the vehicle store: the two ordered collections
//! (inventory and purchase candidates), the command vocabulary that mutates
//! them, id generation, and synchronous change notification. Everything else
//! in the crate reads snapshots from here and issues commands back.
//!
//! # Architecture
//!
//! ```text
//! add/delete/mark/unmark → Command → dispatch → CatalogState::apply
//!                                        │
//!                                        ├→ new CatalogState (old value dropped)
//!                                        └→ subscribers notified synchronously
//! ```
//!
//! # Modules
//!
//! - [`commands`]: The mutation vocabulary routed through dispatch
//! - [`ids`]: Injected id generation (deterministic counter or wall clock)
//! - [`state`]: The two-collection state value and its pure reducer
//! - [`store`]: The store itself: dispatch, snapshots, subscriptions, lifecycle

pub mod commands;
pub mod ids;
pub mod state;
#[allow(clippy::module_inception)]
pub mod store;

pub use commands::Command;
pub use ids::IdSource;
pub use state::CatalogState;
pub use store::{SubscriptionId, VehicleStore};

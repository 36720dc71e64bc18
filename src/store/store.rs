//! The vehicle store: command dispatch, snapshots, and change notification.
//!
//! This module implements [`VehicleStore`], the single source of truth for the
//! catalog. The store owns the current [`CatalogState`], assigns record ids
//! through an injected [`IdSource`], and notifies subscribers synchronously
//! whenever a command changes state. Views never reach into the store; they
//! read snapshots and issue commands.
//!
//! # Architecture
//!
//! The store follows a unidirectional data flow pattern:
//!
//! ```text
//! Command → dispatch → CatalogState::apply → new state → notify subscribers
//!                                                      → snapshot readers
//! ```
//!
//! Every mutation flows through [`dispatch`](VehicleStore::dispatch), so each
//! observer sees a consistent sequence of whole-state values; there is no
//! partially applied command to observe.
//!
//! # Session lifecycle
//!
//! A store is created open (by [`initialize`](crate::initialize) or
//! [`VehicleStore::new`]) and stays usable until [`close`](VehicleStore::close).
//! Touching the command or query surface afterwards is a programming error and
//! fails fast with [`ShowroomError::ContextMisuse`].
//!
//! # Example
//!
//! ```
//! use showroom::seed::default_inventory;
//! use showroom::store::{IdSource, VehicleStore};
//!
//! let mut store = VehicleStore::new(default_inventory(), IdSource::counter());
//! store.mark_candidate(1)?;
//!
//! let snapshot = store.snapshot()?;
//! assert_eq!(snapshot.inventory.len(), 2);
//! assert_eq!(snapshot.candidates.len(), 1);
//! # Ok::<(), showroom::ShowroomError>(())
//! ```

use crate::domain::{NewVehicle, Result, ShowroomError, Vehicle};
use crate::store::commands::Command;
use crate::store::ids::IdSource;
use crate::store::state::CatalogState;

/// Callback invoked with the new state after every accepted command.
type Subscriber = Box<dyn FnMut(&CatalogState)>;

/// Handle identifying one subscription, returned by
/// [`VehicleStore::subscribe`] and consumed by
/// [`VehicleStore::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Owner of the canonical catalog state.
///
/// All four mutations (`add_vehicle`, `delete_vehicle`, `mark_candidate`,
/// `unmark_candidate`) are serialized through one dispatch path. Reads go
/// through [`snapshot`](Self::snapshot), which clones the current state so no
/// caller can mutate store internals.
pub struct VehicleStore {
    /// Current canonical state, replaced wholesale on every accepted command.
    state: CatalogState,

    /// Generator for fresh record ids.
    ids: IdSource,

    /// Registered change observers, notified in subscription order.
    subscribers: Vec<(SubscriptionId, Subscriber)>,

    /// Next subscription handle value.
    next_subscription: u64,

    /// Cleared by [`close`](Self::close); every surface method checks it.
    open: bool,
}

impl VehicleStore {
    /// Creates an open store holding `inventory` and an empty candidates list.
    ///
    /// The id source is injected so interactive sessions can use wall-clock
    /// ids while tests pin deterministic ones.
    #[must_use]
    pub fn new(inventory: Vec<Vehicle>, ids: IdSource) -> Self {
        tracing::debug!(seed_count = inventory.len(), "initializing vehicle store");
        Self {
            state: CatalogState::seeded(inventory),
            ids,
            subscribers: Vec::new(),
            next_subscription: 0,
            open: true,
        }
    }

    /// Validates and stores a new record at the end of the inventory.
    ///
    /// A fresh id is assigned that collides with nothing in either collection.
    /// Returns the stored record, id included, after subscribers have been
    /// notified.
    ///
    /// # Errors
    ///
    /// - [`ShowroomError::Validation`] when `make` or `model` is empty. The
    ///   store enforces this even though input forms are expected to
    ///   pre-validate; the numeric fields are constrained by their types.
    /// - [`ShowroomError::ContextMisuse`] when the store is closed.
    pub fn add_vehicle(&mut self, draft: NewVehicle) -> Result<Vehicle> {
        self.ensure_open()?;
        draft.validate()?;

        let id = self.ids.next_id(&self.state);
        let vehicle = draft.into_vehicle(id);

        tracing::debug!(
            id = vehicle.id,
            make = %vehicle.make,
            model = %vehicle.model,
            "adding vehicle"
        );

        self.dispatch(Command::Add(vehicle.clone()))?;
        Ok(vehicle)
    }

    /// Removes a record from the inventory, permanently.
    ///
    /// Silent no-op when the id is not in the inventory; candidates are never
    /// searched. Subscribers are only notified when something was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::ContextMisuse`] when the store is closed.
    pub fn delete_vehicle(&mut self, id: u64) -> Result<()> {
        self.dispatch(Command::Delete { id })
    }

    /// Moves an inventory record to the end of the candidates list.
    ///
    /// Silent no-op when the id is not in the inventory.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::ContextMisuse`] when the store is closed.
    pub fn mark_candidate(&mut self, id: u64) -> Result<()> {
        self.dispatch(Command::MarkCandidate { id })
    }

    /// Moves a candidate back to the end of the inventory.
    ///
    /// Silent no-op when the id is not in the candidates list.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::ContextMisuse`] when the store is closed.
    pub fn unmark_candidate(&mut self, id: u64) -> Result<()> {
        self.dispatch(Command::UnmarkCandidate { id })
    }

    /// Routes one command through the store's single mutation path.
    ///
    /// The reducer computes the next state; if it differs from the current
    /// one, the store swaps it in and notifies every subscriber synchronously
    /// before returning. Commands that miss (unknown id) change nothing and
    /// notify nobody.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::ContextMisuse`] when the store is closed.
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        self.ensure_open()?;

        let _span = tracing::debug_span!("dispatch", command = command.kind()).entered();

        let next = self.state.apply(&command);
        if next == self.state {
            tracing::debug!("state unchanged, skipping notify");
            return Ok(());
        }

        self.state = next;
        tracing::debug!(
            inventory = self.state.inventory.len(),
            candidates = self.state.candidates.len(),
            "state updated"
        );
        self.notify();
        Ok(())
    }

    /// Returns an immutable snapshot of both collections at this instant.
    ///
    /// The snapshot is a clone; later commands do not affect it and nothing
    /// the caller does to it reaches the store.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::ContextMisuse`] when the store is closed.
    pub fn snapshot(&self) -> Result<CatalogState> {
        self.ensure_open()?;
        Ok(self.state.clone())
    }

    /// Registers a change observer.
    ///
    /// The callback runs synchronously, in subscription order, with the new
    /// state after every state-changing command. It is not called for
    /// commands that miss.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use showroom::seed::default_inventory;
    /// use showroom::store::{IdSource, VehicleStore};
    ///
    /// let mut store = VehicleStore::new(default_inventory(), IdSource::counter());
    /// let seen = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&seen);
    /// store.subscribe(move |state| counter.set(state.candidates.len()));
    ///
    /// store.mark_candidate(2)?;
    /// assert_eq!(seen.get(), 1);
    /// # Ok::<(), showroom::ShowroomError>(())
    /// ```
    pub fn subscribe(&mut self, callback: impl FnMut(&CatalogState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        tracing::debug!(subscription = id.0, "subscriber registered");
        id
    }

    /// Removes a previously registered observer. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    /// Ends the session.
    ///
    /// Subscribers are dropped and every later use of the command or query
    /// surface fails with [`ShowroomError::ContextMisuse`]. Closing twice is
    /// harmless.
    pub fn close(&mut self) {
        tracing::debug!("closing vehicle store");
        self.open = false;
        self.subscribers.clear();
    }

    fn ensure_open(&self) -> Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(ShowroomError::ContextMisuse(
                "vehicle store used after close".to_string(),
            ))
        }
    }

    fn notify(&mut self) {
        let state = self.state.clone();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&state);
        }
    }
}

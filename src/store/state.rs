//! Canonical catalog state and its pure transition functions.
//!
//! This module defines [`CatalogState`], the value holding the two ordered
//! vehicle collections, `inventory` (records for sale) and `candidates`
//! (records set aside as possible purchases), together with the reducer
//! methods that produce the next state for each command.
//!
//! # Invariants
//!
//! - A given id appears in at most one of the two collections, never both and
//!   never twice within one.
//! - Insertion order within each collection is preserved; sorting is a view
//!   concern and never touches the canonical lists.
//! - No method mutates `self`; every transition returns a fresh state value,
//!   which is what makes snapshots safe to hand out.
//!
//! # Example
//!
//! ```
//! use showroom::seed::default_inventory;
//! use showroom::store::CatalogState;
//!
//! let state = CatalogState::seeded(default_inventory());
//! let next = state.promoted(1);
//! assert_eq!(next.inventory.len(), 2);
//! assert_eq!(next.candidates.len(), 1);
//! // The original value is untouched.
//! assert_eq!(state.inventory.len(), 3);
//! ```

use crate::domain::Vehicle;
use crate::store::commands::Command;

/// The two canonical vehicle collections at one instant.
///
/// This is a plain value type: the store swaps in a new `CatalogState` on every
/// accepted command, and [`snapshot`](crate::store::VehicleStore::snapshot)
/// hands out clones. Nothing outside the store can reach the store's current
/// value by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    /// Records currently for sale, in insertion order.
    pub inventory: Vec<Vehicle>,

    /// Records the user has set aside as possible purchases, in the order they
    /// were marked.
    pub candidates: Vec<Vehicle>,
}

impl CatalogState {
    /// Creates a state holding the given starting inventory and no candidates.
    #[must_use]
    pub fn seeded(inventory: Vec<Vehicle>) -> Self {
        Self {
            inventory,
            candidates: Vec::new(),
        }
    }

    /// Applies one command, returning the resulting state.
    ///
    /// This is the single transition function every mutation flows through.
    /// Commands referring to an id that is not where they expect it leave the
    /// state unchanged: a deliberate silent no-op, not an error.
    #[must_use]
    pub fn apply(&self, command: &Command) -> Self {
        match command {
            Command::Add(vehicle) => self.added(vehicle.clone()),
            Command::Delete { id } => self.deleted(*id),
            Command::MarkCandidate { id } => self.promoted(*id),
            Command::UnmarkCandidate { id } => self.demoted(*id),
        }
    }

    /// Returns a state with `vehicle` appended to the end of the inventory.
    #[must_use]
    pub fn added(&self, vehicle: Vehicle) -> Self {
        let mut next = self.clone();
        next.inventory.push(vehicle);
        next
    }

    /// Returns a state with the matching record removed from the inventory.
    ///
    /// Deletion only applies to the inventory; candidates must be demoted
    /// first. Unchanged state when the id is not found.
    #[must_use]
    pub fn deleted(&self, id: u64) -> Self {
        let mut next = self.clone();
        next.inventory.retain(|vehicle| vehicle.id != id);
        next
    }

    /// Returns a state with the matching inventory record moved to the end of
    /// the candidates list, all fields preserved.
    ///
    /// Unchanged state when the id is not in the inventory.
    #[must_use]
    pub fn promoted(&self, id: u64) -> Self {
        let mut next = self.clone();
        let Some(position) = next.inventory.iter().position(|v| v.id == id) else {
            return next;
        };
        let vehicle = next.inventory.remove(position);
        next.candidates.push(vehicle);
        next
    }

    /// Returns a state with the matching candidate moved back to the end of
    /// the inventory, the symmetric inverse of [`promoted`](Self::promoted).
    ///
    /// Unchanged state when the id is not in the candidates list.
    #[must_use]
    pub fn demoted(&self, id: u64) -> Self {
        let mut next = self.clone();
        let Some(position) = next.candidates.iter().position(|v| v.id == id) else {
            return next;
        };
        let vehicle = next.candidates.remove(position);
        next.inventory.push(vehicle);
        next
    }

    /// Looks up a record by id across both collections.
    ///
    /// The detail view resolves ids this way, so a record stays reachable
    /// whether or not it has been marked as a candidate.
    #[must_use]
    pub fn find(&self, id: u64) -> Option<&Vehicle> {
        self.inventory
            .iter()
            .find(|v| v.id == id)
            .or_else(|| self.candidates.iter().find(|v| v.id == id))
    }

    /// Returns `true` if the id exists in either collection.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.find(id).is_some()
    }

    /// Returns `true` if the id is currently in the candidates list.
    #[must_use]
    pub fn is_candidate(&self, id: u64) -> bool {
        self.candidates.iter().any(|v| v.id == id)
    }
}

//! Commands representing the catalog's mutation surface.
//!
//! This module defines the [`Command`] type, the one vocabulary of state
//! changes the store understands. Every mutation, whether issued from the
//! library API or the CLI shim, is expressed as a `Command` and routed through
//! the store's single dispatch path, which is what keeps each observed snapshot
//! consistent.
//!
//! # Example
//!
//! ```
//! use showroom::store::Command;
//!
//! let commands = vec![
//!     Command::MarkCandidate { id: 1 },
//!     Command::Delete { id: 2 },
//! ];
//! assert_eq!(commands[0].kind(), "mark_candidate");
//! ```

use crate::domain::Vehicle;

/// One catalog mutation.
///
/// `Add` carries a complete record: the store assigns the fresh id before
/// constructing the command, mirroring how every other field is already final
/// by the time the command exists. The id-bearing variants are silent no-ops
/// when their id is not where they expect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Appends a new record to the end of the inventory.
    Add(Vehicle),

    /// Removes a record from the inventory, permanently.
    ///
    /// Only the inventory is searched; candidates must be unmarked before they
    /// can be deleted.
    Delete {
        /// Id of the record to remove.
        id: u64,
    },

    /// Moves an inventory record to the end of the candidates list.
    MarkCandidate {
        /// Id of the record to set aside as a possible purchase.
        id: u64,
    },

    /// Moves a candidate back to the end of the inventory.
    UnmarkCandidate {
        /// Id of the record to return to the inventory.
        id: u64,
    },
}

impl Command {
    /// Returns a short static name for the command, used as a tracing field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Delete { .. } => "delete",
            Self::MarkCandidate { .. } => "mark_candidate",
            Self::UnmarkCandidate { .. } => "unmark_candidate",
        }
    }
}

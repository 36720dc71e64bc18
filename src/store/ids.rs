//! Injected id generation for new records.
//!
//! Stamping new records with the current wall-clock time is unique enough in
//! practice but impossible to assert against in tests. [`IdSource`] makes the
//! generator an explicit, injectable value: the store asks it for the next id
//! and the source guarantees the result collides with nothing currently in
//! the catalog.

use crate::store::state::CatalogState;

/// Source of fresh record ids.
///
/// Both variants bump past any id already present in either collection, so the
/// returned id is always unique across the whole catalog regardless of what
/// the seed data or earlier commands put there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdSource {
    /// Deterministic incrementing counter.
    ///
    /// Always yields one past the highest id handed out so far or present in
    /// the catalog, whichever is larger, so assignment stays monotonic even
    /// after deletions free up lower ids. Tests use this variant to assert
    /// exact id values.
    Counter {
        /// Next id to try.
        next: u64,
    },

    /// Wall-clock milliseconds since the Unix epoch.
    ///
    /// The default for interactive sessions. Collisions (two adds within one
    /// millisecond, or a seed record carrying the same value) are resolved by
    /// bumping.
    Clock,
}

impl IdSource {
    /// Creates a deterministic counter source starting at 1.
    #[must_use]
    pub const fn counter() -> Self {
        Self::Counter { next: 1 }
    }

    /// Creates the wall-clock source.
    #[must_use]
    pub const fn clock() -> Self {
        Self::Clock
    }

    /// Returns a fresh id not present anywhere in `state`.
    pub fn next_id(&mut self, state: &CatalogState) -> u64 {
        let floor = state
            .inventory
            .iter()
            .chain(state.candidates.iter())
            .map(|v| v.id)
            .max()
            .map_or(1, |highest| highest.saturating_add(1));

        let mut candidate = match self {
            Self::Counter { next } => (*next).max(floor),
            Self::Clock => {
                let millis = chrono::Utc::now().timestamp_millis();
                u64::try_from(millis).unwrap_or(1)
            }
        };

        while state.contains(candidate) {
            candidate = candidate.saturating_add(1);
        }

        if let Self::Counter { next } = self {
            *next = candidate.saturating_add(1);
        }

        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_inventory;

    #[test]
    fn counter_skips_seeded_ids() {
        let state = CatalogState::seeded(default_inventory());
        let mut ids = IdSource::counter();

        // Seed occupies 1..=3, so the first fresh id is 4.
        assert_eq!(ids.next_id(&state), 4);
        assert_eq!(ids.next_id(&state), 5);
    }

    #[test]
    fn counter_skips_ids_in_both_collections() {
        let state = CatalogState::seeded(default_inventory()).promoted(2);
        let mut ids = IdSource::counter();

        // Id 2 now lives in candidates; it still counts as occupied.
        assert_eq!(ids.next_id(&state), 4);
    }

    #[test]
    fn counter_never_reuses_a_freed_lower_id() {
        let state = CatalogState::seeded(default_inventory()).deleted(1);
        let mut ids = IdSource::counter();

        // Id 1 is free again, but assignment stays above the highest live id.
        assert_eq!(ids.next_id(&state), 4);
    }

    #[test]
    fn clock_ids_are_unique_against_existing_records() {
        let state = CatalogState::seeded(default_inventory());
        let mut ids = IdSource::clock();

        let id = ids.next_id(&state);
        assert!(!state.contains(id));
    }
}

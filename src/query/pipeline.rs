//! The inventory query pipeline: filter, then stable sort.
//!
//! This module implements the pure function behind the inventory view. It
//! takes a snapshot of the inventory and an [`InventoryQuery`] and returns a
//! fresh ordered list; the input collection is never touched and the function
//! holds no state between calls, so the view recomputes it on every input
//! change.
//!
//! # Algorithm
//!
//! 1. **Filter**: a record passes iff it matches the search text AND the
//!    category filter AND the transmission filter. The three predicates are
//!    independent; evaluation order is not observable.
//! 2. **Sort**: stable sort by the selected key. Text keys compare
//!    lowercased, numeric keys numerically. Descending reverses the
//!    comparator only; equal keys keep their filtered order either way.
//!
//! # Example
//!
//! ```
//! use showroom::query::{self, InventoryQuery, SortDirection, SortKey};
//! use showroom::seed::default_inventory;
//!
//! let inventory = default_inventory();
//! let query = InventoryQuery {
//!     search: "a".to_string(),
//!     sort_key: SortKey::Price,
//!     direction: SortDirection::Ascending,
//!     ..InventoryQuery::default()
//! };
//!
//! // "Suzuki Swift" contains no "a"; the other two records match.
//! let results = query::run(&inventory, &query);
//! let makes: Vec<&str> = results.iter().map(|v| v.make.as_str()).collect();
//! assert_eq!(makes, vec!["Mazda", "Hyundai"]);
//! ```

use crate::domain::Vehicle;
use crate::query::params::{InventoryQuery, SortDirection, SortKey};
use std::cmp::Ordering;

/// Runs the pipeline over one inventory snapshot.
///
/// Total for every input: an empty collection yields an empty result, and
/// search text with special characters is matched literally, never as a
/// pattern.
#[must_use]
pub fn run(collection: &[Vehicle], query: &InventoryQuery) -> Vec<Vehicle> {
    let _span = tracing::debug_span!(
        "run_query",
        total = collection.len(),
        search_len = query.search.len(),
        sort_key = ?query.sort_key,
    )
    .entered();

    let needle = query.search.to_lowercase();

    let mut results: Vec<Vehicle> = collection
        .iter()
        .filter(|vehicle| {
            matches_search(vehicle, &needle)
                && matches_category(vehicle, query)
                && matches_transmission(vehicle, query)
        })
        .cloned()
        .collect();

    results.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, query.sort_key);
        match query.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    tracing::debug!(matched = results.len(), "query complete");
    results
}

/// Case-insensitive literal substring match against make, model, and the
/// decimal text of the year. An empty needle matches everything.
fn matches_search(vehicle: &Vehicle, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    vehicle.make.to_lowercase().contains(needle)
        || vehicle.model.to_lowercase().contains(needle)
        || vehicle.year.to_string().contains(needle)
}

/// A set category filter requires an exact match; a record with no category
/// fails it. An unset filter passes everything.
fn matches_category(vehicle: &Vehicle, query: &InventoryQuery) -> bool {
    query
        .category
        .map_or(true, |wanted| vehicle.category == Some(wanted))
}

fn matches_transmission(vehicle: &Vehicle, query: &InventoryQuery) -> bool {
    query
        .transmission
        .map_or(true, |wanted| vehicle.transmission == Some(wanted))
}

fn compare_by_key(a: &Vehicle, b: &Vehicle, key: SortKey) -> Ordering {
    match key {
        SortKey::Make => a.make.to_lowercase().cmp(&b.make.to_lowercase()),
        SortKey::Model => a.model.to_lowercase().cmp(&b.model.to_lowercase()),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Year => a.year.cmp(&b.year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Transmission};
    use crate::seed::default_inventory;

    fn vehicle(
        id: u64,
        make: &str,
        model: &str,
        price: u64,
        year: i32,
        category: Option<Category>,
        transmission: Option<Transmission>,
    ) -> Vehicle {
        Vehicle {
            id,
            make: make.to_string(),
            model: model.to_string(),
            price,
            year,
            category,
            transmission,
            description: String::new(),
            image: None,
        }
    }

    fn search(text: &str) -> InventoryQuery {
        InventoryQuery {
            search: text.to_string(),
            ..InventoryQuery::default()
        }
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        assert!(run(&[], &InventoryQuery::default()).is_empty());
        assert!(run(&[], &search("anything")).is_empty());
    }

    #[test]
    fn search_matches_make_model_and_year_case_insensitively() {
        let inventory = default_inventory();

        let by_make = run(&inventory, &search("suzu"));
        assert_eq!(by_make.len(), 1);
        assert_eq!(by_make[0].make, "Suzuki");

        let by_model = run(&inventory, &search("TUCSON"));
        assert_eq!(by_model.len(), 1);
        assert_eq!(by_model[0].model, "Tucson");

        let by_year = run(&inventory, &search("2025"));
        assert_eq!(by_year.len(), 3);

        assert!(run(&inventory, &search("delorean")).is_empty());
    }

    #[test]
    fn special_characters_are_literal_not_patterns() {
        let inventory = vec![vehicle(1, "Citroen", "C4 (facelift)", 1, 2020, None, None)];

        assert_eq!(run(&inventory, &search("(facelift)")).len(), 1);
        assert!(run(&inventory, &search(".*")).is_empty());
    }

    #[test]
    fn seed_scenario_search_a_price_ascending() {
        let inventory = default_inventory();
        let query = InventoryQuery {
            search: "a".to_string(),
            sort_key: SortKey::Price,
            direction: SortDirection::Ascending,
            ..InventoryQuery::default()
        };

        // Mazda and Hyundai contain an "a"; Suzuki Swift does not and drops out.
        let results = run(&inventory, &query);
        let expected: Vec<(&str, u64)> = vec![("Mazda", 19_990_000), ("Hyundai", 29_990_000)];
        let actual: Vec<(&str, u64)> = results
            .iter()
            .map(|v| (v.make.as_str(), v.price))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn missing_field_fails_a_set_filter() {
        let inventory = vec![
            vehicle(1, "Ford", "Ranger", 3, 2022, Some(Category::Pickup), None),
            vehicle(2, "Ford", "Fiesta", 1, 2010, None, Some(Transmission::Manual)),
        ];

        let by_category = InventoryQuery {
            category: Some(Category::Pickup),
            ..InventoryQuery::default()
        };
        let results = run(&inventory, &by_category);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].model, "Ranger");

        let by_transmission = InventoryQuery {
            transmission: Some(Transmission::Manual),
            ..InventoryQuery::default()
        };
        let results = run(&inventory, &by_transmission);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].model, "Fiesta");
    }

    #[test]
    fn combined_filters_are_the_intersection_of_each_alone() {
        let inventory = vec![
            vehicle(1, "A", "one", 1, 2020, Some(Category::Suv), Some(Transmission::Manual)),
            vehicle(2, "B", "two", 2, 2020, Some(Category::Suv), Some(Transmission::Automatic)),
            vehicle(3, "C", "three", 3, 2020, Some(Category::Sedan), Some(Transmission::Manual)),
            vehicle(4, "D", "four", 4, 2020, None, None),
        ];

        let category_only = InventoryQuery {
            category: Some(Category::Suv),
            ..InventoryQuery::default()
        };
        let transmission_only = InventoryQuery {
            transmission: Some(Transmission::Manual),
            ..InventoryQuery::default()
        };
        let both = InventoryQuery {
            category: Some(Category::Suv),
            transmission: Some(Transmission::Manual),
            ..InventoryQuery::default()
        };

        let ids = |query: &InventoryQuery| -> Vec<u64> {
            run(&inventory, query).iter().map(|v| v.id).collect()
        };

        let intersection: Vec<u64> = ids(&category_only)
            .into_iter()
            .filter(|id| ids(&transmission_only).contains(id))
            .collect();
        assert_eq!(ids(&both), intersection);
        assert_eq!(ids(&both), vec![1]);
    }

    #[test]
    fn sort_is_stable_for_duplicate_keys_in_both_directions() {
        let inventory = vec![
            vehicle(1, "Mazda", "Mazda2", 1, 2020, None, None),
            vehicle(2, "mazda", "Mazda3", 2, 2021, None, None),
            vehicle(3, "MAZDA", "Mazda6", 3, 2022, None, None),
            vehicle(4, "Audi", "A3", 4, 2023, None, None),
        ];

        let ascending = InventoryQuery::default();
        let ids: Vec<u64> = run(&inventory, &ascending).iter().map(|v| v.id).collect();
        // Equal makes (case-insensitively) keep insertion order.
        assert_eq!(ids, vec![4, 1, 2, 3]);

        let descending = InventoryQuery {
            direction: SortDirection::Descending,
            ..InventoryQuery::default()
        };
        let ids: Vec<u64> = run(&inventory, &descending).iter().map(|v| v.id).collect();
        // Reversed comparator, but ties still keep insertion order.
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn numeric_keys_sort_numerically() {
        let inventory = vec![
            vehicle(1, "A", "a", 9_000_000, 2025, None, None),
            vehicle(2, "B", "b", 10_000_000, 1999, None, None),
        ];

        let by_price = InventoryQuery {
            sort_key: SortKey::Price,
            ..InventoryQuery::default()
        };
        let prices: Vec<u64> = run(&inventory, &by_price).iter().map(|v| v.price).collect();
        assert_eq!(prices, vec![9_000_000, 10_000_000]);

        let by_year_desc = InventoryQuery {
            sort_key: SortKey::Year,
            direction: SortDirection::Descending,
            ..InventoryQuery::default()
        };
        let years: Vec<i32> = run(&inventory, &by_year_desc).iter().map(|v| v.year).collect();
        assert_eq!(years, vec![2025, 1999]);
    }

    #[test]
    fn input_collection_is_never_mutated() {
        let inventory = default_inventory();
        let before = inventory.clone();

        let _ = run(
            &inventory,
            &InventoryQuery {
                search: "a".to_string(),
                sort_key: SortKey::Price,
                direction: SortDirection::Descending,
                ..InventoryQuery::default()
            },
        );

        assert_eq!(inventory, before);
    }
}

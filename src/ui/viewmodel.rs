//! View model types representing renderable catalog state.
//!
//! This module defines immutable view models computed from store snapshots,
//! following the MVVM pattern: the presentation layer renders these directly
//! and contains no catalog logic of its own. View models carry display-ready
//! strings (formatted prices, resolved image references, fallback
//! descriptions) so rendering is a straight mapping.
//!
//! # Architecture
//!
//! ```text
//! CatalogState snapshot → InventoryView::compute / CandidateSummary::compute → render
//! ```
//!
//! # Example
//!
//! ```
//! use showroom::query::InventoryQuery;
//! use showroom::seed::default_inventory;
//! use showroom::ui::InventoryView;
//!
//! let view = InventoryView::compute(&default_inventory(), &InventoryQuery::default());
//! assert_eq!(view.total_count, 3);
//! assert_eq!(view.cards[0].price, "$29.990.000"); // Hyundai sorts first by make
//! ```

use crate::domain::vehicle::format_clp;
use crate::domain::Vehicle;
use crate::query::{self, InventoryQuery};

/// Complete inventory listing ready for rendering.
///
/// Computed from an inventory snapshot and the current query. Carries the
/// result cards plus the counts and filter labels the page chrome shows
/// ("N vehicles total", "M results found", active-filter chips).
#[derive(Debug, Clone)]
pub struct InventoryView {
    /// One card per record that passed the query, in query order.
    pub cards: Vec<VehicleCard>,

    /// Size of the unfiltered inventory.
    pub total_count: usize,

    /// Number of records that passed the query.
    pub match_count: usize,

    /// Labels for the currently active narrowing inputs, in display order:
    /// search text first, then category, then transmission. Empty when the
    /// query has no filters.
    pub active_filters: Vec<String>,
}

impl InventoryView {
    /// Runs the query pipeline and formats the results.
    #[must_use]
    pub fn compute(inventory: &[Vehicle], query: &InventoryQuery) -> Self {
        let results = query::run(inventory, query);

        let mut active_filters = Vec::new();
        if !query.search.is_empty() {
            active_filters.push(format!("Search: \"{}\"", query.search));
        }
        if let Some(category) = query.category {
            active_filters.push(format!("Category: {}", category.label()));
        }
        if let Some(transmission) = query.transmission {
            active_filters.push(format!("Transmission: {}", transmission.label()));
        }

        Self {
            total_count: inventory.len(),
            match_count: results.len(),
            cards: results.iter().map(VehicleCard::from_vehicle).collect(),
            active_filters,
        }
    }

    /// Returns `true` when the empty state should show "no results" rather
    /// than "empty inventory".
    #[must_use]
    pub fn is_filtered_empty(&self) -> bool {
        self.cards.is_empty() && !self.active_filters.is_empty()
    }
}

/// Display information for one vehicle.
///
/// Represents one card in the grid. All fields are final display strings; the
/// only non-string field is the id, which actions (view details, delete, mark)
/// need to issue commands back to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleCard {
    /// Record id, for issuing commands.
    pub id: u64,

    /// "Make Model Year" heading.
    pub title: String,

    /// Price formatted in Chilean-peso style.
    pub price: String,

    /// Year shown in the card's corner badge.
    pub year_badge: String,

    /// Category label, when the record has one.
    pub category: Option<String>,

    /// Transmission label, when the record has one.
    pub transmission: Option<String>,

    /// Free text, with the standard fallback for records without one.
    pub description: String,

    /// Image reference with the placeholder substituted for missing images.
    pub image: String,
}

impl VehicleCard {
    /// Formats one record for display.
    #[must_use]
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            title: vehicle.display_name(),
            price: vehicle.display_price(),
            year_badge: vehicle.year.to_string(),
            category: vehicle.category.map(|c| c.label().to_string()),
            transmission: vehicle.transmission.map(|t| t.label().to_string()),
            description: vehicle.description_or_default().to_string(),
            image: vehicle.image_or_default().to_string(),
        }
    }
}

/// Totals shown on the candidates page.
///
/// Count, combined value, and average price of the records the user has set
/// aside. All money fields are formatted strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSummary {
    /// Number of candidate records.
    pub count: usize,

    /// Formatted sum of all candidate prices.
    pub total: String,

    /// Formatted mean candidate price; `$0` when there are no candidates.
    pub average: String,
}

impl CandidateSummary {
    /// Computes the summary over the candidates collection.
    #[must_use]
    pub fn compute(candidates: &[Vehicle]) -> Self {
        let total: u64 = candidates.iter().map(|v| v.price).sum();
        let count = candidates.len();
        let average = if count == 0 {
            0
        } else {
            total / count as u64
        };

        Self {
            count,
            total: format_clp(total),
            average: format_clp(average),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Transmission};
    use crate::query::{SortDirection, SortKey};
    use crate::seed::default_inventory;

    #[test]
    fn view_formats_cards_in_query_order() {
        let query = InventoryQuery {
            search: "a".to_string(),
            sort_key: SortKey::Price,
            direction: SortDirection::Ascending,
            ..InventoryQuery::default()
        };

        let view = InventoryView::compute(&default_inventory(), &query);

        assert_eq!(view.total_count, 3);
        assert_eq!(view.match_count, 2);
        let titles: Vec<&str> = view.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Mazda Mazda3 2025", "Hyundai Tucson 2025"]);
        assert_eq!(view.cards[0].price, "$19.990.000");
        assert_eq!(view.cards[0].year_badge, "2025");
        assert_eq!(view.cards[0].image, "/images/mazda3.png");
    }

    #[test]
    fn active_filter_labels_follow_display_order() {
        let query = InventoryQuery {
            search: "swift".to_string(),
            category: Some(Category::Hatchback),
            transmission: Some(Transmission::Manual),
            ..InventoryQuery::default()
        };

        let view = InventoryView::compute(&default_inventory(), &query);
        assert_eq!(
            view.active_filters,
            vec![
                "Search: \"swift\"".to_string(),
                "Category: Hatchback".to_string(),
                "Transmission: Manual".to_string(),
            ]
        );
    }

    #[test]
    fn filtered_empty_differs_from_empty_inventory() {
        let filtered = InventoryView::compute(
            &default_inventory(),
            &InventoryQuery {
                search: "delorean".to_string(),
                ..InventoryQuery::default()
            },
        );
        assert!(filtered.is_filtered_empty());

        let empty = InventoryView::compute(&[], &InventoryQuery::default());
        assert!(empty.cards.is_empty());
        assert!(!empty.is_filtered_empty());
    }

    #[test]
    fn candidate_summary_totals_and_averages() {
        let inventory = default_inventory();
        let candidates = &inventory[..2]; // Swift + Tucson

        let summary = CandidateSummary::compute(candidates);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total, "$43.980.000");
        assert_eq!(summary.average, "$21.990.000");
    }

    #[test]
    fn empty_candidate_summary_is_zero_safe() {
        let summary = CandidateSummary::compute(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total, "$0");
        assert_eq!(summary.average, "$0");
    }
}

//! Query parameter types for the inventory view.
//!
//! This module defines the inputs the query pipeline is a function of: the
//! free-text search, the two categorical filters, and the sort selection.
//! The types mirror the controls of the inventory page; each `from_label`
//! parser accepts the values its select box submits.

use crate::domain::{Category, Transmission};

/// Field the inventory view is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Sort by make, case-insensitively.
    Make,
    /// Sort by model, case-insensitively.
    Model,
    /// Sort by price, numerically.
    Price,
    /// Sort by year, numerically.
    Year,
}

impl SortKey {
    /// Parses a sort key from its label, case-insensitively.
    ///
    /// Returns `None` for unknown labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "make" => Some(Self::Make),
            "model" => Some(Self::Model),
            "price" => Some(Self::Price),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

/// Direction of the inventory sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// A→Z, lowest first.
    Ascending,
    /// Z→A, highest first.
    Descending,
}

impl SortDirection {
    /// Parses a direction from its label (`asc`/`ascending`, `desc`/`descending`).
    ///
    /// Returns `None` for unknown labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// Complete input to one run of the query pipeline.
///
/// The default value matches the inventory page's initial state: empty search,
/// no categorical filters, sorted by make ascending.
///
/// # Example
///
/// ```
/// use showroom::query::{InventoryQuery, SortDirection, SortKey};
///
/// let query = InventoryQuery {
///     search: "mazda".to_string(),
///     sort_key: SortKey::Price,
///     direction: SortDirection::Descending,
///     ..InventoryQuery::default()
/// };
/// assert!(query.has_filters());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryQuery {
    /// Case-insensitive literal substring matched against make, model, and the
    /// decimal text of year. Empty matches everything.
    pub search: String,

    /// Exact-match category filter; `None` passes every record, including
    /// those without a category.
    pub category: Option<Category>,

    /// Exact-match transmission filter; `None` passes every record.
    pub transmission: Option<Transmission>,

    /// Field to sort the filtered records by.
    pub sort_key: SortKey,

    /// Sort direction.
    pub direction: SortDirection,
}

impl Default for InventoryQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            transmission: None,
            sort_key: SortKey::Make,
            direction: SortDirection::Ascending,
        }
    }
}

impl InventoryQuery {
    /// Returns `true` when any narrowing input is set, which is the condition the
    /// inventory page uses to show its "results found" count and the
    /// clear-filters control.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.search.is_empty() || self.category.is_some() || self.transmission.is_some()
    }
}

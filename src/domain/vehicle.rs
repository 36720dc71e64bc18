//! Vehicle domain model and display operations.
//!
//! This module defines the core `Vehicle` type representing one listing in the
//! catalog, the enumerated `Category` and `Transmission` field values, and the
//! `NewVehicle` input shape used when adding a record (everything except the id,
//! which the store assigns). Display helpers format prices in Chilean-peso style
//! and substitute a placeholder for missing images.

use serde::{Deserialize, Serialize};

/// Placeholder image reference used when a record carries no image of its own.
pub const DEFAULT_IMAGE: &str = "/images/default-car.svg";

/// Fallback description shown for records with empty free text.
pub const NO_DESCRIPTION: &str = "No description available";

/// Body style of a vehicle.
///
/// Older records may not carry a category at all; the field is optional on
/// [`Vehicle`]. Values serialize as their human-readable labels so seed files
/// read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Sedan,
    Hatchback,
    #[serde(rename = "SUV")]
    Suv,
    Crossover,
    Pickup,
    Coupe,
    Convertible,
    #[serde(rename = "Station Wagon")]
    StationWagon,
}

impl Category {
    /// Returns the human-readable label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedan => "Sedan",
            Self::Hatchback => "Hatchback",
            Self::Suv => "SUV",
            Self::Crossover => "Crossover",
            Self::Pickup => "Pickup",
            Self::Coupe => "Coupe",
            Self::Convertible => "Convertible",
            Self::StationWagon => "Station Wagon",
        }
    }

    /// Parses a category from its label.
    ///
    /// Matching is case-insensitive. Returns `None` for unknown labels.
    ///
    /// # Example
    ///
    /// ```
    /// use showroom::domain::Category;
    ///
    /// assert_eq!(Category::from_label("suv"), Some(Category::Suv));
    /// assert_eq!(Category::from_label("rocket"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "sedan" => Some(Self::Sedan),
            "hatchback" => Some(Self::Hatchback),
            "suv" => Some(Self::Suv),
            "crossover" => Some(Self::Crossover),
            "pickup" => Some(Self::Pickup),
            "coupe" => Some(Self::Coupe),
            "convertible" => Some(Self::Convertible),
            "station wagon" => Some(Self::StationWagon),
            _ => None,
        }
    }
}

/// Transmission type of a vehicle.
///
/// Optional on [`Vehicle`] for the same reason as [`Category`]: records added
/// before the field existed simply do not have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
    #[serde(rename = "CVT")]
    Cvt,
    #[serde(rename = "Semi-automatic")]
    SemiAutomatic,
}

impl Transmission {
    /// Returns the human-readable label for this transmission type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Automatic => "Automatic",
            Self::Cvt => "CVT",
            Self::SemiAutomatic => "Semi-automatic",
        }
    }

    /// Parses a transmission type from its label, case-insensitively.
    ///
    /// Returns `None` for unknown labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "manual" => Some(Self::Manual),
            "automatic" => Some(Self::Automatic),
            "cvt" => Some(Self::Cvt),
            "semi-automatic" => Some(Self::SemiAutomatic),
            _ => None,
        }
    }
}

/// Represents one vehicle listing in the catalog.
///
/// A vehicle lives in exactly one of the store's two collections (inventory or
/// candidates) from creation until deletion. The `id` is assigned by the store
/// when the record is created and never changes; moving a record between
/// collections preserves every field.
///
/// # Fields
///
/// - `id`: Unique across the union of both collections, immutable
/// - `make`, `model`: Non-empty text, enforced when the store accepts the record
/// - `price`: Integer CLP amount; non-negativity is carried by the type
/// - `year`: Expected range 1980–2030, enforced by input forms rather than the store
/// - `category`, `transmission`: Optional enumerated fields, absent on older records
/// - `description`: Free text, may be empty
/// - `image`: URL or local path; display falls back to [`DEFAULT_IMAGE`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u64,
    pub make: String,
    pub model: String,
    pub price: u64,
    pub year: i32,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub transmission: Option<Transmission>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Vehicle {
    /// Returns the "Make Model Year" heading used wherever the record is listed.
    ///
    /// # Examples
    ///
    /// ```
    /// use showroom::seed::default_inventory;
    ///
    /// let swift = &default_inventory()[0];
    /// assert_eq!(swift.display_name(), "Suzuki Swift 2025");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.make, self.model, self.year)
    }

    /// Formats the price in Chilean-peso style: `$` plus dot-separated
    /// thousands, no decimals.
    ///
    /// # Examples
    ///
    /// ```
    /// use showroom::seed::default_inventory;
    ///
    /// let swift = &default_inventory()[0];
    /// assert_eq!(swift.display_price(), "$13.990.000");
    /// ```
    #[must_use]
    pub fn display_price(&self) -> String {
        format_clp(self.price)
    }

    /// Returns the image reference, substituting the default placeholder when
    /// the record has none (or an empty one).
    #[must_use]
    pub fn image_or_default(&self) -> &str {
        match self.image.as_deref() {
            Some(image) if !image.is_empty() => image,
            _ => DEFAULT_IMAGE,
        }
    }

    /// Returns the free-text description, or the standard fallback when empty.
    #[must_use]
    pub fn description_or_default(&self) -> &str {
        if self.description.is_empty() {
            NO_DESCRIPTION
        } else {
            &self.description
        }
    }
}

/// Input shape for adding a vehicle: every [`Vehicle`] field except the id.
///
/// The store assigns a fresh unique id when it accepts the record; callers
/// never pick ids themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub price: u64,
    pub year: i32,
    pub category: Option<Category>,
    pub transmission: Option<Transmission>,
    pub description: String,
    pub image: Option<String>,
}

impl NewVehicle {
    /// Checks the required text fields.
    ///
    /// `make` and `model` must be non-empty after trimming. The numeric fields
    /// need no check here; their constraints are carried by the types.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Validation`](crate::ShowroomError::Validation)
    /// naming the first empty field.
    pub fn validate(&self) -> crate::domain::Result<()> {
        if self.make.trim().is_empty() {
            return Err(crate::domain::ShowroomError::Validation(
                "make must not be empty".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(crate::domain::ShowroomError::Validation(
                "model must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Completes the record with a store-assigned id.
    #[must_use]
    pub fn into_vehicle(self, id: u64) -> Vehicle {
        Vehicle {
            id,
            make: self.make,
            model: self.model,
            price: self.price,
            year: self.year,
            category: self.category,
            transmission: self.transmission,
            description: self.description,
            image: self.image,
        }
    }
}

/// Formats an integer CLP amount with dot-separated thousands groups.
///
/// Shared by [`Vehicle::display_price`] and the aggregate figures on the
/// candidates summary.
#[must_use]
pub fn format_clp(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("${grouped}")
}

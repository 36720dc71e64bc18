//! Seed catalog: the fixed starting inventory and optional file override.
//!
//! The store opens with a small, known set of sample records so the catalog is
//! browsable before anything has been added. The built-in set is a
//! configuration constant; deployments that want different starting data point
//! the configuration at a JSON file instead. Seed files are read once at
//! startup and never written back.

use crate::domain::{Category, Result, ShowroomError, Transmission, Vehicle};
use std::path::Path;

/// Returns the built-in starting inventory: three records with ids 1–3.
///
/// # Examples
///
/// ```
/// use showroom::seed::default_inventory;
///
/// let inventory = default_inventory();
/// assert_eq!(inventory.len(), 3);
/// assert_eq!(inventory[1].display_name(), "Hyundai Tucson 2025");
/// ```
#[must_use]
pub fn default_inventory() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: 1,
            make: "Suzuki".to_string(),
            model: "Swift".to_string(),
            price: 13_990_000,
            year: 2025,
            category: Some(Category::Hatchback),
            transmission: Some(Transmission::Manual),
            description: "1.2L engine, manual transmission, air conditioning, ideal for the city"
                .to_string(),
            image: Some("/images/swift.jpg".to_string()),
        },
        Vehicle {
            id: 2,
            make: "Hyundai".to_string(),
            model: "Tucson".to_string(),
            price: 29_990_000,
            year: 2025,
            category: Some(Category::Suv),
            transmission: Some(Transmission::Automatic),
            description: "2.0L engine, AWD, 7 airbags, 8\" touchscreen, reversing camera"
                .to_string(),
            image: Some("/images/tucson.jpg".to_string()),
        },
        Vehicle {
            id: 3,
            make: "Mazda".to_string(),
            model: "Mazda3".to_string(),
            price: 19_990_000,
            year: 2025,
            category: Some(Category::Sedan),
            transmission: Some(Transmission::Automatic),
            description: "2.0L Skyactiv-G engine, automatic transmission, i-Activsense safety suite"
                .to_string(),
            image: Some("/images/mazda3.png".to_string()),
        },
    ]
}

/// Loads a starting inventory from a JSON file.
///
/// The file holds a JSON array of vehicle records, the same shape
/// [`Vehicle`] serializes to. Ids in the file are trusted as-is; the store's
/// id source bumps past them when new records are added.
///
/// # Errors
///
/// Returns [`ShowroomError::Io`] when the file cannot be read and
/// [`ShowroomError::Seed`] when its contents do not parse.
pub fn load_from_file(path: &Path) -> Result<Vec<Vehicle>> {
    tracing::debug!(path = ?path, "loading seed catalog");

    let contents = std::fs::read_to_string(path)?;
    let inventory: Vec<Vehicle> = serde_json::from_str(&contents)
        .map_err(|e| ShowroomError::Seed(format!("failed to parse seed JSON: {e}")))?;

    tracing::debug!(count = inventory.len(), "seed catalog loaded");
    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inventory_holds_the_three_sample_records() {
        let inventory = default_inventory();

        let ids: Vec<u64> = inventory.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert_eq!(inventory[0].make, "Suzuki");
        assert_eq!(inventory[0].price, 13_990_000);
        assert_eq!(inventory[0].category, Some(Category::Hatchback));
        assert_eq!(inventory[2].transmission, Some(Transmission::Automatic));
        assert!(inventory.iter().all(|v| v.year == 2025));
    }

    #[test]
    fn seed_file_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("seed.json");

        let json = serde_json::to_string_pretty(&default_inventory()).expect("serialize");
        std::fs::write(&path, json).expect("write");

        let loaded = load_from_file(&path).expect("load");
        assert_eq!(loaded, default_inventory());
    }

    #[test]
    fn older_records_without_optional_fields_parse() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"[{"id": 9, "make": "Lada", "model": "Niva", "price": 4500000, "year": 1998}]"#,
        )
        .expect("write");

        let loaded = load_from_file(&path).expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category, None);
        assert_eq!(loaded[0].transmission, None);
        assert_eq!(loaded[0].description, "");
        assert_eq!(loaded[0].image, None);
    }

    #[test]
    fn malformed_seed_file_is_a_seed_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("seed.json");
        std::fs::write(&path, "not json").expect("write");

        let err = load_from_file(&path).expect_err("parse failure");
        assert!(matches!(err, ShowroomError::Seed(_)));

        let missing = load_from_file(&dir.path().join("absent.json")).expect_err("io failure");
        assert!(matches!(missing, ShowroomError::Io(_)));
    }
}

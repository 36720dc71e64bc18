//! Showroom: an in-memory vehicle catalog core.
//!
//! Showroom is the state-and-logic core of a small vehicle-catalog browsing
//! application. It provides:
//! - A canonical store holding two ordered collections (the inventory and a
//!   "possible purchase" candidates shortlist), mutated only through a single
//!   command-dispatch path
//! - A pure search/filter/sort pipeline deriving the inventory view
//! - Display-ready view models (formatted prices, image fallbacks, result
//!   counts) for the presentation layer to render
//! - A fixed seed catalog, optionally overridden from a JSON file
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Shim (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                               │  ← Single source of truth
//! │  - Command dispatch                                 │
//! │  - Snapshots & change notification                  │
//! │  - Id assignment                                    │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ Query Layer   │   │ View Models   │
//! │ (query/)      │   │ (ui/)         │
//! │ - Filtering   │   │ - Cards       │
//! │ - Stable sort │   │ - Summaries   │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Vehicle record & enumerated fields               │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Seed & Observability (seed.rs, observability/)     │  ← Optional
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`store`]: Canonical state, command dispatch, subscriptions
//! - [`query`]: Pure inventory filter/sort pipeline
//! - [`ui`]: Display-ready view models
//! - [`domain`]: Vehicle record shape and error types
//! - [`seed`]: Built-in starting catalog and JSON seed loading
//! - [`observability`]: Tracing subscriber setup
//!
//! # Initialization Flow
//!
//! 1. Load [`Config`] (defaults, or a TOML file)
//! 2. [`initialize`] sets up tracing, loads the seed catalog, and returns an
//!    open [`VehicleStore`]
//! 3. Views take snapshots, run queries, and compute view models
//! 4. User actions dispatch commands; subscribers observe each new state
//! 5. `close()` ends the session; later use fails fast
//!
//! # Examples
//!
//! ```
//! use showroom::query::InventoryQuery;
//! use showroom::ui::InventoryView;
//! use showroom::{initialize, Config};
//!
//! let mut store = initialize(&Config::default())?;
//!
//! // Browse the seeded inventory.
//! let snapshot = store.snapshot()?;
//! let view = InventoryView::compute(&snapshot.inventory, &InventoryQuery::default());
//! assert_eq!(view.total_count, 3);
//!
//! // Shortlist one record and read the new state.
//! store.mark_candidate(snapshot.inventory[0].id)?;
//! assert_eq!(store.snapshot()?.candidates.len(), 1);
//! # Ok::<(), showroom::ShowroomError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Whole-State Values
//!
//! The store never mutates a collection in place; each command produces a new
//! state value and the store swaps it in. Snapshots are therefore plain clones
//! that no later command can disturb.
//!
//! ## Silent Lookup Misses
//!
//! Deleting, marking, or unmarking an id that is not where the command expects
//! it changes nothing and raises nothing. Stale references from the
//! presentation layer degrade to no-ops instead of errors.
//!
//! ## Injected Id Generation
//!
//! Record ids come from an explicit [`IdSource`](store::IdSource): wall-clock
//! milliseconds in interactive sessions, a deterministic counter in tests.

pub mod domain;
pub mod observability;
pub mod query;
pub mod seed;
pub mod store;
pub mod ui;

pub use domain::{Category, NewVehicle, Result, ShowroomError, Transmission, Vehicle};
pub use query::{InventoryQuery, SortDirection, SortKey};
pub use store::{CatalogState, Command, IdSource, VehicleStore};
pub use ui::{CandidateSummary, InventoryView};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration.
///
/// Loaded from a TOML file when one is provided; every field is optional and
/// the default configuration needs no file at all.
///
/// # Example
///
/// ```toml
/// # showroom.toml
/// seed_file = "/var/lib/showroom/catalog.json"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Path to a JSON seed catalog replacing the built-in starting inventory.
    pub seed_file: Option<PathBuf>,

    /// Tracing filter directive (`trace`, `debug`, `info`, `warn`, `error`,
    /// or any `EnvFilter` expression). Tracing stays off when unset.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a TOML file.
    ///
    /// Missing optional fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Io`] when the file cannot be read and
    /// [`ShowroomError::Config`] when its contents do not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ShowroomError::Config(format!("failed to parse config: {e}")))
    }
}

/// Initializes a catalog session.
///
/// Sets up tracing (when configured), loads the seed catalog (built-in or
/// from the configured file), and returns an open [`VehicleStore`] using
/// wall-clock id generation. The caller owns the store and passes it to
/// whatever views need it; there is no ambient global.
///
/// # Errors
///
/// Returns seed-loading errors from [`seed::load_from_file`].
pub fn initialize(config: &Config) -> Result<VehicleStore> {
    observability::init_tracing(config);
    tracing::debug!("initializing showroom catalog");

    let inventory = match &config.seed_file {
        Some(path) => seed::load_from_file(path)?,
        None => seed::default_inventory(),
    };

    Ok(VehicleStore::new(inventory, IdSource::clock()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_from_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("showroom.toml");
        std::fs::write(
            &path,
            "seed_file = \"/tmp/catalog.json\"\ntrace_level = \"debug\"\n",
        )
        .expect("write");

        let config = Config::from_file(&path).expect("parse");
        assert_eq!(config.seed_file, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.trace_level, Some("debug".to_string()));
    }

    #[test]
    fn empty_config_file_takes_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("showroom.toml");
        std::fs::write(&path, "").expect("write");

        let config = Config::from_file(&path).expect("parse");
        assert!(config.seed_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn invalid_config_is_a_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("showroom.toml");
        std::fs::write(&path, "seed_file = 42").expect("write");

        let err = Config::from_file(&path).expect_err("parse failure");
        assert!(matches!(err, ShowroomError::Config(_)));
    }

    #[test]
    fn initialize_uses_configured_seed_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let seed_path = dir.path().join("catalog.json");
        std::fs::write(
            &seed_path,
            r#"[{"id": 10, "make": "Kia", "model": "Rio", "price": 9990000, "year": 2021}]"#,
        )
        .expect("write");

        let config = Config {
            seed_file: Some(seed_path),
            trace_level: None,
        };
        let store = initialize(&config).expect("initialize");

        let snapshot = store.snapshot().expect("snapshot");
        assert_eq!(snapshot.inventory.len(), 1);
        assert_eq!(snapshot.inventory[0].make, "Kia");
        assert!(snapshot.candidates.is_empty());
    }

    #[test]
    fn initialize_defaults_to_builtin_seed() {
        let store = initialize(&Config::default()).expect("initialize");
        let snapshot = store.snapshot().expect("snapshot");
        assert_eq!(snapshot.inventory.len(), 3);
    }
}

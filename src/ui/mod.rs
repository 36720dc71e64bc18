//! View model layer between catalog state and the presentation surface.
//!
//! The actual pages (routing, markup, form widgets) live outside this crate;
//! what lives here is the display-ready data they consume. View models are
//! computed from store snapshots and contain no catalog logic, only formatted
//! fields and the counts the page chrome needs.
//!
//! # Modules
//!
//! - [`viewmodel`]: Inventory listing and candidate summary view models

pub mod viewmodel;

pub use viewmodel::{CandidateSummary, InventoryView, VehicleCard};

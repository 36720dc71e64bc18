//! Domain layer for the showroom catalog.
//!
//! This module contains the core domain types and business rules for the
//! catalog, independent of storage, query, or presentation concerns. It follows
//! domain-driven design principles by keeping the record shape and its
//! invariants isolated from the layers that consume them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`vehicle`]: Vehicle record shape, enumerated fields, display helpers
//!
//! # Examples
//!
//! ```
//! use showroom::domain::{Category, NewVehicle, Result};
//!
//! fn corolla() -> Result<NewVehicle> {
//!     let draft = NewVehicle {
//!         make: "Toyota".to_string(),
//!         model: "Corolla".to_string(),
//!         price: 15_000_000,
//!         year: 2024,
//!         category: Some(Category::Sedan),
//!         transmission: None,
//!         description: String::new(),
//!         image: None,
//!     };
//!     draft.validate()?;
//!     Ok(draft)
//! }
//! assert!(corolla().is_ok());
//! ```

pub mod error;
pub mod vehicle;

pub use error::{Result, ShowroomError};
pub use vehicle::{Category, NewVehicle, Transmission, Vehicle, DEFAULT_IMAGE, NO_DESCRIPTION};

//! Error types for the showroom catalog.
//!
//! This module defines the centralized error type [`ShowroomError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for showroom catalog operations.
///
/// This enum consolidates all error conditions that can occur while driving the
/// catalog, from record validation to configuration and seed-file loading. Lookup
/// misses (deleting or promoting an id that is not present) are deliberately NOT
/// errors; those commands are silent no-ops so the presentation layer stays
/// resilient to stale references.
///
/// # Examples
///
/// ```
/// use showroom::ShowroomError;
///
/// fn reject_blank_make() -> Result<(), ShowroomError> {
///     Err(ShowroomError::Validation("make must not be empty".to_string()))
/// }
/// assert!(reject_blank_make().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ShowroomError {
    /// A record submitted to the store failed validation.
    ///
    /// Raised only from `add_vehicle` when required text fields are empty.
    /// The string names the offending field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The store's command or query surface was used after the session ended.
    ///
    /// Consuming a closed store is a programming error, not a runtime
    /// condition, and fails fast with this variant.
    #[error("Store misuse: {0}")]
    ContextMisuse(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the TOML configuration file cannot be parsed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The seed catalog file could not be loaded.
    ///
    /// Occurs when a configured seed file contains invalid JSON or records
    /// that do not match the vehicle shape.
    #[error("Seed error: {0}")]
    Seed(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for showroom operations.
///
/// This is a type alias for `std::result::Result<T, ShowroomError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use showroom::Result;
///
/// fn noop() -> Result<()> {
///     Ok(())
/// }
/// assert!(noop().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, ShowroomError>;

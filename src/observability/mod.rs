//! Structured logging for the catalog.
//!
//! Store dispatches and query runs emit `tracing` spans and events; this
//! module wires them to a subscriber. Observability is optional: when no
//! trace level is configured nothing is initialized and the macros compile to
//! cheap no-ops.
//!
//! # Configuration
//!
//! The filter directive is resolved from:
//! 1. `RUST_LOG` environment variable (highest priority, standard
//!    `EnvFilter` behavior)
//! 2. `trace_level` in the configuration file
//! 3. Nothing; tracing stays uninitialized
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;

//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber for the configured trace level.
///
/// Builds a registry with an [`EnvFilter`] (so `RUST_LOG` still overrides the
/// configured level) and a plain formatting layer writing to stderr.
///
/// # Initialization Behavior
///
/// - No-op when `config.trace_level` is unset
/// - Idempotent: safe to call multiple times, only the first call takes effect
pub fn init_tracing(config: &Config) {
    let Some(level) = config.trace_level.clone() else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}

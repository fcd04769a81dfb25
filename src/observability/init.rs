//! Tracing subscriber setup.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Sets up a fmt layer filtered by `RUST_LOG` when present, falling back to
/// `config.trace_level`, falling back to `"info"`.
///
/// # Initialization behavior
///
/// - Observability is optional: embedding hosts that install their own
///   subscriber can skip this entirely.
/// - Idempotent: safe to call multiple times (only the first call takes
///   effect; later calls are ignored rather than panicking).
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}

//! Tracing initialization.
//!
//! This module configures the `tracing` subscriber for embedders that want the
//! controllers' span and event output. The handlers emit `debug`-level spans
//! per processed event and `debug!` records for every state transition;
//! initialization is optional and the crate works silently without it.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with a formatted output layer.
///
/// The filter directive comes from [`Config::trace_level`], falling back to
/// `"info"`. Safe to call multiple times: only the first call installs a
/// global subscriber, later calls are silently ignored.
///
/// # Example
///
/// ```
/// use facetsync::{observability, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// observability::init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}

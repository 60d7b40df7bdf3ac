//! Tracing subscriber setup

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level for this
/// crate and HTTP tracing. Debug mode forces `debug`.
pub fn build_filter(config: &LoggingConfig, debug: bool) -> EnvFilter {
    let level = if debug { "debug" } else { config.level.as_str() };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("snowtrip={level},tower_http={level},axum::rejection=trace,warn").into()
    })
}

/// Install the global subscriber. Call once at process start.
pub fn init(config: &LoggingConfig, debug: bool) -> Result<()> {
    let filter = build_filter(config, debug);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format.as_str() {
        "json" => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

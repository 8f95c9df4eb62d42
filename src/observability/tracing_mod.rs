//! Tracing and logging setup module.
//!
//! This module provides:
//! - Structured logging configuration
//! - Tracing span creation utilities

use anyhow::Result;
use tracing_subscriber::prelude::*;

use crate::observability_config::ObservabilityConfig;

/// Initialize structured logging with tracing and configuration
///
/// Also applies `enable_metrics`. Fails if a global subscriber is already
/// installed.
pub fn init_tracing_with_config(config: &ObservabilityConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("grocery_identity={}", config.log_level).parse()?);

    if config.use_pretty_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true),
            )
            .try_init()?;
    }

    super::metrics::set_metrics_enabled(config.enable_metrics);

    tracing::info!(
        environment = %config.environment,
        log_level = %config.log_level,
        metrics = config.enable_metrics,
        "Tracing initialized with structured logging"
    );
    Ok(())
}

/// Initialize structured logging from environment variables
pub fn init_tracing() -> Result<()> {
    init_tracing_with_config(&ObservabilityConfig::from_env())
}

/// Create a span for fuzzy matching operations
pub fn matching_span(operation: &str) -> tracing::Span {
    tracing::debug_span!("matching_operation", operation = operation, component = "matcher")
}

/// Create a span for price label resolution
pub fn pricing_span(operation: &str) -> tracing::Span {
    tracing::debug_span!("pricing_operation", operation = operation, component = "pricing")
}

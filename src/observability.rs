//! Observability module for structured logging, tracing spans and metrics.
//!
//! This module provides:
//! - Subscriber setup with pretty or JSON output
//! - Span helpers for matching and pricing calls
//! - Counters and histograms for matcher and resolver activity

pub mod metrics;
pub mod tracing_mod;

pub use self::metrics::{
    metrics_enabled, record_match_metrics, record_name_validation, record_price_label,
    set_metrics_enabled,
};
pub use self::tracing_mod::{init_tracing, init_tracing_with_config, matching_span, pricing_span};

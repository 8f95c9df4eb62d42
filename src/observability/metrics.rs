//! Metrics recording for the matcher, the name validator and the price resolver.
//!
//! Recording goes through the `metrics` facade. Nothing is exported unless
//! the host application installs a recorder.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::pricing::{PriceLabel, PriceSource};

static METRICS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn metric recording on or off for the whole process
pub fn set_metrics_enabled(enabled: bool) {
    METRICS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether metric recording is currently enabled
pub fn metrics_enabled() -> bool {
    METRICS_ENABLED.load(Ordering::Relaxed)
}

/// Record one fuzzy matching call
pub fn record_match_metrics(candidate_count: usize, result_count: usize, duration: Duration) {
    if !metrics_enabled() {
        return;
    }
    metrics::counter!("fuzzy_match_requests_total").increment(1);
    metrics::histogram!("fuzzy_match_candidates").record(candidate_count as f64);
    metrics::histogram!("fuzzy_match_results").record(result_count as f64);
    metrics::histogram!("fuzzy_match_duration_seconds").record(duration.as_secs_f64());
}

/// Record a product name validation outcome; `None` means accepted
pub fn record_name_validation(rejection: Option<&'static str>) {
    if !metrics_enabled() {
        return;
    }
    let result = rejection.unwrap_or("accepted");
    metrics::counter!("product_name_validations_total", "result" => result).increment(1);
}

/// Record which confidence band a price label fell into
pub fn record_price_label(source: PriceSource, label: &PriceLabel) {
    if !metrics_enabled() {
        return;
    }
    let band = match (label.prefix.as_str(), label.suffix.as_str()) {
        ("~", _) => "estimate",
        (_, "avg") => "average",
        (_, "") => "established",
        _ => "store",
    };
    metrics::counter!(
        "price_labels_total",
        "source" => source.as_str(),
        "band" => band
    )
    .increment(1);
}

//! # Price Confidence Labels
//!
//! Turns a price and its provenance into the short qualifier shown next to
//! it: `~£2.50 est.` for guesses, `£2.50 at Tesco` for a single store report,
//! `£2.50 avg` for a handful of reports and a bare `£2.50` once a price is
//! well established.
//!
//! This is a presentation heuristic only. Which observation to surface when a
//! variant has several is decided by the catalog, not here.

use crate::errors::{error_logging, AppError, AppResult};
use crate::observability;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Report count at which a price needs no qualifier
pub const ESTABLISHED_REPORT_COUNT: i64 = 10;
/// Largest report count still attributed to a single store
pub const STORE_ATTRIBUTION_MAX_REPORTS: i64 = 2;

/// Where a price came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// Entered or scanned by the user themselves
    Personal,
    /// Aggregated from other users' reports
    Crowdsourced,
    /// Generated estimate with no first-hand report behind it
    AiEstimate,
}

impl PriceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSource::Personal => "personal",
            PriceSource::Crowdsourced => "crowdsourced",
            PriceSource::AiEstimate => "ai_estimate",
        }
    }
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(PriceSource::Personal),
            "crowdsourced" => Ok(PriceSource::Crowdsourced),
            "ai_estimate" => Ok(PriceSource::AiEstimate),
            other => {
                let err = AppError::Validation(format!("Unknown price source '{}'", other));
                error_logging::log_validation_error(&err, "parse_price_source", "price_source", Some(s));
                Err(err)
            }
        }
    }
}

/// A single price observation supplied by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub price: f64,
    pub source: PriceSource,
    /// Number of independent reports behind this price
    pub report_count: u32,
    pub store_name: Option<String>,
}

impl PriceObservation {
    /// The confidence label for this observation
    pub fn label(&self) -> PriceLabel {
        get_price_label(
            self.price,
            self.source,
            i64::from(self.report_count),
            self.store_name.as_deref(),
        )
    }

    /// Parse an observation from a JSON document
    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Prefix and suffix displayed around a price
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceLabel {
    pub prefix: String,
    pub suffix: String,
}

impl PriceLabel {
    fn new(prefix: &str, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.into(),
        }
    }

    /// Whether the price is an estimate rather than a reported figure
    pub fn is_estimate(&self) -> bool {
        !self.prefix.is_empty()
    }

    /// Render a price with this label, e.g. `~£2.50 est.`
    ///
    /// ```
    /// use grocery_identity::pricing::{get_price_label, PriceSource};
    ///
    /// let label = get_price_label(1.2, PriceSource::Crowdsourced, 1, Some("Tesco"));
    /// assert_eq!(label.render(1.2, "£"), "£1.20 at Tesco");
    /// ```
    pub fn render(&self, price: f64, currency_symbol: &str) -> String {
        let amount = format!("{}{}{:.2}", self.prefix, currency_symbol, price);
        if self.suffix.is_empty() {
            amount
        } else {
            format!("{} {}", amount, self.suffix)
        }
    }
}

/// Resolve the confidence label for a price
///
/// First matching rule wins:
/// 1. AI estimate, or no reports → `~` / `est.`
/// 2. at most two reports and a known store → `at <store>`
/// 3. fewer than ten reports → `avg`
/// 4. otherwise no qualifier
///
/// Negative report counts are treated as zero.
///
/// ```
/// use grocery_identity::pricing::{get_price_label, PriceSource};
///
/// let label = get_price_label(2.5, PriceSource::AiEstimate, 0, None);
/// assert_eq!((label.prefix.as_str(), label.suffix.as_str()), ("~", "est."));
/// ```
pub fn get_price_label(
    price: f64,
    source: PriceSource,
    report_count: i64,
    store_name: Option<&str>,
) -> PriceLabel {
    let _span = observability::pricing_span("get_price_label").entered();
    let report_count = report_count.max(0);
    let store_name = store_name.map(str::trim).filter(|name| !name.is_empty());

    let label = match (source, store_name) {
        (PriceSource::AiEstimate, _) => PriceLabel::new("~", "est."),
        _ if report_count == 0 => PriceLabel::new("~", "est."),
        (_, Some(store)) if report_count <= STORE_ATTRIBUTION_MAX_REPORTS => {
            PriceLabel::new("", format!("at {}", store))
        }
        _ if report_count < ESTABLISHED_REPORT_COUNT => PriceLabel::new("", "avg"),
        _ => PriceLabel::default(),
    };

    trace!(
        price = price,
        source = %source,
        report_count = report_count,
        suffix = %label.suffix,
        "Resolved price label"
    );
    observability::record_price_label(source, &label);

    label
}

//! # Grocery Item Identity
//!
//! Turns freeform grocery item text (typed by users or read from receipts)
//! into a canonical identity, matches it against catalog names despite typos,
//! plurals and filler prefixes, and labels prices with how trustworthy they
//! are. Everything here is pure computation; the catalog itself lives with
//! the caller.

pub mod config;
pub mod display;
pub mod errors;
pub mod fuzzy;
pub mod normalization;
pub mod observability;
pub mod observability_config;
pub mod pricing;
pub mod variant_key;
pub mod vocabulary;

// Re-export the engine surface for easier access
pub use display::{normalize_display_name, to_grocery_title_case};
pub use fuzzy::{calculate_similarity, find_fuzzy_matches, MatchCandidate, MatchOptions};
pub use normalization::{is_valid_product_name, normalize_item_name};
pub use pricing::{get_price_label, PriceLabel, PriceObservation, PriceSource};
pub use variant_key::{variant_key, RawMention};

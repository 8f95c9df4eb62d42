//! # Item Name Normalization
//!
//! Turns freeform grocery text into the comparison form used for identity
//! keys and fuzzy matching, and decides whether a string is a plausible
//! product name at all.
//!
//! The comparison form is deliberately lossy: `"The Fresh Strawberries"` and
//! `"strawberry"` both become `"strawberry"`. It is never shown to users; see
//! [`crate::display`] for presentation.

use crate::observability;
use crate::vocabulary::vocabulary;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Limits applied by [`validate_product_name_with`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NameRules {
    /// Minimum length in characters (inclusive)
    pub min_length: usize,
    /// Maximum length in characters (inclusive)
    pub max_length: usize,
    /// Minimum share of ASCII letters, compared with `>=`
    pub min_alpha_ratio: f64,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 50,
            min_alpha_ratio: 0.5,
        }
    }
}

impl NameRules {
    /// Validate name rule parameters
    pub fn validate(&self) -> crate::errors::AppResult<()> {
        if self.min_length == 0 {
            return Err(crate::errors::AppError::Config(
                "min_length must be greater than 0".to_string(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(crate::errors::AppError::Config(format!(
                "min_length ({}) cannot be greater than max_length ({})",
                self.min_length, self.max_length
            )));
        }
        if !(0.0..=1.0).contains(&self.min_alpha_ratio) {
            return Err(crate::errors::AppError::Config(format!(
                "min_alpha_ratio must be between 0.0 and 1.0, got {}",
                self.min_alpha_ratio
            )));
        }
        Ok(())
    }
}

/// Validates a product name with the default [`NameRules`]
///
/// # Returns
/// * `Ok(&str)` - The trimmed name if valid
/// * `Err(&str)` - Rejection key: "empty", "too_short", "too_long",
///   "placeholder", "numeric", "no_letters" or "low_alpha_ratio"
///
/// # Examples
/// ```
/// use grocery_identity::normalization::validate_product_name;
///
/// assert_eq!(validate_product_name("  Jam "), Ok("Jam"));
/// assert_eq!(validate_product_name("ab"), Err("too_short"));
/// assert_eq!(validate_product_name("1234ab"), Err("low_alpha_ratio"));
/// ```
pub fn validate_product_name(text: &str) -> Result<&str, &'static str> {
    validate_product_name_with(text, &NameRules::default())
}

/// Validates a product name against explicit rules
pub fn validate_product_name_with<'a>(
    text: &'a str,
    rules: &NameRules,
) -> Result<&'a str, &'static str> {
    let result = check_product_name(text.trim(), rules);
    observability::record_name_validation(result.err());
    if let Err(reason) = result {
        debug!(reason = reason, "Rejected product name: '{}'", text);
    }
    result
}

fn check_product_name<'a>(trimmed: &'a str, rules: &NameRules) -> Result<&'a str, &'static str> {
    if trimmed.is_empty() {
        return Err("empty");
    }

    let length = trimmed.chars().count();
    if length < rules.min_length {
        return Err("too_short");
    }
    if length > rules.max_length {
        return Err("too_long");
    }

    if vocabulary()
        .matches_placeholder(&trimmed.to_ascii_lowercase())
        .is_some()
    {
        return Err("placeholder");
    }

    if trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '.' | ','))
    {
        return Err("numeric");
    }

    let alpha_count = trimmed.chars().filter(|c| c.is_ascii_alphabetic()).count();
    if alpha_count == 0 {
        return Err("no_letters");
    }

    if (alpha_count as f64) / (length as f64) < rules.min_alpha_ratio {
        return Err("low_alpha_ratio");
    }

    Ok(trimmed)
}

/// Whether `text` is a plausible product name
///
/// ```
/// use grocery_identity::normalization::is_valid_product_name;
///
/// assert!(is_valid_product_name("Jam"));
/// assert!(is_valid_product_name("123abc"));
/// assert!(!is_valid_product_name("test item"));
/// ```
pub fn is_valid_product_name(text: &str) -> bool {
    validate_product_name(text).is_ok()
}

/// Normalize an item name into its comparison form
///
/// Lowercases (ASCII only), collapses whitespace, strips one leading filler
/// prefix ("the ", "organic ", ...) and one plural suffix per pass. Passes
/// repeat until the output is stable, so the result is always a fixed point:
/// `normalize_item_name(normalize_item_name(s)) == normalize_item_name(s)`.
///
/// ```
/// use grocery_identity::normalization::normalize_item_name;
///
/// assert_eq!(normalize_item_name("  Fresh Strawberries "), "strawberry");
/// assert_eq!(normalize_item_name("Loaves"), "loaf");
/// assert_eq!(normalize_item_name("glass"), "glass");
/// ```
pub fn normalize_item_name(text: &str) -> String {
    let mut current = normalize_pass(text);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            trace!("Normalized item name: '{}' -> '{}'", text, current);
            return current;
        }
        current = next;
    }
}

/// Lowercase, collapse whitespace, strip at most one prefix and one plural suffix
fn normalize_pass(text: &str) -> String {
    let lowered = text
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ");

    let without_prefix = strip_leading_prefix(&lowered);
    strip_plural_suffix(without_prefix).trim().to_string()
}

fn strip_leading_prefix(text: &str) -> &str {
    vocabulary()
        .name_prefixes
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix.as_str()))
        .map(str::trim_start)
        .unwrap_or(text)
}

fn strip_plural_suffix(word: &str) -> String {
    let length = word.chars().count();

    if length > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{}y", stem);
        }
        if let Some(stem) = word.strip_suffix("ves") {
            return format!("{}f", stem);
        }
    }
    if length > 3 {
        if let Some(stem) = word.strip_suffix("es") {
            return stem.to_string();
        }
    }
    if length > 2 && !word.ends_with("ss") {
        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }
    }

    word.to_string()
}

//! # Variant Keys
//!
//! A variant key identifies "the same product in the same pack size". It is
//! the normalized name and the normalized size joined by [`KEY_SEPARATOR`],
//! so `("Roasted Cashews", "180 g")` and `("roasted cashew", "180G")` share
//! one key while `("Cashews", "500g")` gets another.

use crate::normalization::normalize_item_name;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Separator between the name and size components
pub const KEY_SEPARATOR: char = '|';

/// A raw item mention as typed by a user or read from a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMention {
    /// Item text, e.g. "Roasted Cashews"
    pub text: String,
    /// Pack size, e.g. "180" or "180g"
    pub size: Option<String>,
    /// Unit appended to the size when given separately, e.g. "g"
    pub unit: Option<String>,
}

impl RawMention {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
            unit: None,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Size and unit joined into one token ("180" + "g" -> "180g")
    pub fn size_token(&self) -> String {
        let size = self.size.as_deref().unwrap_or("");
        let unit = self.unit.as_deref().unwrap_or("");
        format!("{}{}", size, unit)
    }

    /// The variant key for this mention
    pub fn variant_key(&self) -> String {
        variant_key(&self.text, &self.size_token())
    }
}

/// Normalize a pack size: lowercase with every whitespace character and
/// [`KEY_SEPARATOR`] removed
///
/// ```
/// use grocery_identity::variant_key::normalize_size;
///
/// assert_eq!(normalize_size(" 180 G "), "180g");
/// ```
pub fn normalize_size(size: &str) -> String {
    size.chars()
        .filter(|c| !c.is_whitespace() && *c != KEY_SEPARATOR)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Build the variant key for a name and pack size
///
/// A [`KEY_SEPARATOR`] inside the name (a common OCR artifact) is read as a
/// space, so every key contains exactly one separator.
///
/// ```
/// use grocery_identity::variant_key::variant_key;
///
/// assert_eq!(variant_key("Roasted Cashews", "180 g"), "roasted cashew|180g");
/// assert_eq!(variant_key("cashews", "180g"), variant_key("cashew", "180g"));
/// assert_ne!(variant_key("Cashews", "180g"), variant_key("Cashews", "500g"));
/// ```
pub fn variant_key(name: &str, size: &str) -> String {
    let key = format!(
        "{}{}{}",
        normalize_item_name(&name.replace(KEY_SEPARATOR, " ")),
        KEY_SEPARATOR,
        normalize_size(size)
    );
    trace!("Variant key for ('{}', '{}'): {}", name, size, key);
    key
}

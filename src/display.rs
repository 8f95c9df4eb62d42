//! # Display Formatting
//!
//! Title-casing for item names shown to users. Unlike the comparison form in
//! [`crate::normalization`] this keeps every word, keeps acronyms readable and
//! leaves pack sizes such as `140g` or `1.5L` exactly as written. It is
//! applied only at presentation boundaries.

use crate::vocabulary::{vocabulary, Vocabulary};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

/// Build the measurement token pattern from the configured units
///
/// Units are sorted longest first so `kg` wins over `g`. The pattern accepts
/// an optional multipack prefix (`4x250ml`), an integer or decimal quantity
/// and a unit suffix, anchored to the whole token.
fn build_measurement_regex_pattern(vocabulary: &Vocabulary) -> String {
    let mut units: Vec<&str> = vocabulary
        .measurement_units
        .iter()
        .map(String::as_str)
        .collect();
    units.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    units.dedup();

    let units_pattern = units
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<String>>()
        .join("|");

    format!(r"(?i)^(?:\d+x)?\d+(?:[.,]\d+)?(?:{})$", units_pattern)
}

lazy_static! {
    static ref MEASUREMENT_REGEX: Regex = Regex::new(&build_measurement_regex_pattern(vocabulary()))
        .expect("Measurement token pattern should be valid");
}

/// Whether a token is a quantity immediately followed by a unit (`140g`, `2L`, `6pk`)
///
/// Surrounding punctuation is ignored, so `(500ml)` also counts.
pub fn is_measurement_token(token: &str) -> bool {
    MEASUREMENT_REGEX.is_match(token_core(token))
}

/// Title-case a grocery item name for display
///
/// Rules per whitespace-separated token:
/// - measurement tokens are kept verbatim
/// - allow-listed abbreviations are uppercased (`uht` → `UHT`)
/// - minor words (`of`, `and`, ...) are lowercased unless first
/// - everything else gets an uppercase first letter and lowercase rest
///
/// Whitespace runs collapse to single spaces. Empty or whitespace-only input
/// is returned unchanged. The function is idempotent.
///
/// ```
/// use grocery_identity::display::to_grocery_title_case;
///
/// assert_eq!(to_grocery_title_case("140g CHIN CHIN"), "140g Chin Chin");
/// assert_eq!(to_grocery_title_case("bag of rice"), "Bag of Rice");
/// assert_eq!(to_grocery_title_case("uht milk"), "UHT Milk");
/// ```
pub fn to_grocery_title_case(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let vocabulary = vocabulary();
    let formatted = text
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| format_token(token, index == 0, vocabulary))
        .collect::<Vec<String>>()
        .join(" ");

    trace!("Title-cased '{}' -> '{}'", text, formatted);
    formatted
}

/// Display form of an optional name; absent or empty values become `""`
pub fn normalize_display_name(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => to_grocery_title_case(text),
        _ => String::new(),
    }
}

fn format_token(token: &str, is_first: bool, vocabulary: &Vocabulary) -> String {
    let core = token_core(token);

    if MEASUREMENT_REGEX.is_match(core) {
        return token.to_string();
    }
    if vocabulary.is_abbreviation(core) {
        return token.to_uppercase();
    }
    if !is_first && vocabulary.is_minor_word(core) {
        return token.to_lowercase();
    }
    capitalize(token)
}

/// Uppercase the first letter, lowercase everything else
fn capitalize(token: &str) -> String {
    let mut result = String::with_capacity(token.len());
    let mut seen_letter = false;

    for c in token.chars() {
        if !seen_letter && c.is_alphabetic() {
            seen_letter = true;
            // Multi-char uppercase forms (ß -> SS) would break idempotence
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => result.push(single),
                _ => result.push(c),
            }
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

/// Token without surrounding punctuation such as brackets or trailing commas
fn token_core(token: &str) -> &str {
    token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '.' && c != ',')
        .trim_end_matches(&['.', ','][..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_pattern_prefers_longer_units() {
        let pattern = build_measurement_regex_pattern(vocabulary());
        assert!(pattern.find("litres").unwrap() < pattern.find("|l|").unwrap());
    }

    #[test]
    fn test_measurement_tokens() {
        assert!(is_measurement_token("140g"));
        assert!(is_measurement_token("1.5L"));
        assert!(is_measurement_token("500ML"));
        assert!(is_measurement_token("6pk"));
        assert!(is_measurement_token("4x250ml"));
        assert!(is_measurement_token("(500ml)"));
        assert!(!is_measurement_token("140"));
        assert!(!is_measurement_token("g140"));
        assert!(!is_measurement_token("7up"));
        assert!(!is_measurement_token("milk"));
    }

    #[test]
    fn test_title_case_examples() {
        assert_eq!(to_grocery_title_case("140g CHIN CHIN"), "140g Chin Chin");
        assert_eq!(to_grocery_title_case("bag of rice"), "Bag of Rice");
        assert_eq!(to_grocery_title_case("of mice and men"), "Of Mice and Men");
        assert_eq!(to_grocery_title_case("uht milk"), "UHT Milk");
    }

    #[test]
    fn test_receipt_ocr_caps() {
        assert_eq!(
            to_grocery_title_case("HEINZ BAKED BEANS IN TOMATO SAUCE 415G"),
            "Heinz Baked Beans in Tomato Sauce 415G"
        );
        assert_eq!(to_grocery_title_case("PG TIPS 80 BAGS"), "PG Tips 80 Bags");
        assert_eq!(to_grocery_title_case("hp sauce"), "HP Sauce");
        assert_eq!(to_grocery_title_case("XL EGGS"), "XL Eggs");
    }

    #[test]
    fn test_whitespace_collapsing() {
        assert_eq!(to_grocery_title_case("  bbq   chicken  "), "BBQ Chicken");
        assert_eq!(to_grocery_title_case(""), "");
        assert_eq!(to_grocery_title_case("   "), "   ");
    }

    #[test]
    fn test_punctuation_inside_tokens() {
        assert_eq!(
            to_grocery_title_case("sainsbury's SEMI-SKIMMED"),
            "Sainsbury's Semi-skimmed"
        );
        assert_eq!(to_grocery_title_case("éclairs"), "Éclairs");
        assert_eq!(to_grocery_title_case("milk (uht)"), "Milk (UHT)");
        assert_eq!(to_grocery_title_case("crème FRAÎCHE"), "Crème Fraîche");
    }

    #[test]
    fn test_title_case_is_idempotent() {
        let inputs = [
            "140g CHIN CHIN",
            "of mice and men",
            "HEINZ BAKED BEANS IN TOMATO SAUCE 415G",
            "uht milk 1.5L",
            "ÉCLAIRS",
            "a",
        ];
        for input in inputs {
            let once = to_grocery_title_case(input);
            assert_eq!(to_grocery_title_case(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn test_normalize_display_name() {
        assert_eq!(normalize_display_name(None), "");
        assert_eq!(normalize_display_name(Some("")), "");
        assert_eq!(normalize_display_name(Some("bag of rice")), "Bag of Rice");
    }
}

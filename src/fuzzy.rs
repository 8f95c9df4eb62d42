//! # Fuzzy Catalog Matching
//!
//! Scores an item mention against candidate names supplied by the catalog
//! (pantry items, known items, community variants) and returns a ranked
//! shortlist. Scoring is plain edit distance on the normalized forms, with
//! two adjustments:
//!
//! - containment in either direction ("milk" / "oat milk") never scores
//!   below [`CONTAINMENT_FLOOR`]
//! - inputs shorter than [`SHORT_INPUT_LENGTH`] get a threshold lowered by
//!   [`SHORT_INPUT_LENIENCY`], since one edit is proportionally larger there

use crate::errors::{AppError, AppResult};
use crate::normalization::normalize_item_name;
use crate::observability;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, trace};

/// Similarity reported for exact normalized matches
pub const EXACT_SIMILARITY: f64 = 100.0;
/// Minimum similarity reported when one name contains the other
pub const CONTAINMENT_FLOOR: f64 = 85.0;
/// Normalized inputs shorter than this get the lenient threshold
pub const SHORT_INPUT_LENGTH: usize = 4;
/// Threshold reduction for short inputs
pub const SHORT_INPUT_LENIENCY: f64 = 10.0;

/// Options for [`find_fuzzy_matches`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Minimum similarity (0-100) for non-exact, non-containment matches
    pub min_similarity: f64,
    /// Maximum number of results returned
    pub max_results: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_similarity: 70.0,
            max_results: 10,
        }
    }
}

impl MatchOptions {
    /// Validate matching options
    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..=100.0).contains(&self.min_similarity) {
            return Err(AppError::Config(format!(
                "min_similarity must be between 0 and 100, got {}",
                self.min_similarity
            )));
        }
        if self.max_results == 0 {
            return Err(AppError::Config(
                "max_results must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Threshold actually applied for a normalized input
    pub fn effective_threshold(&self, normalized_input: &str) -> f64 {
        if normalized_input.chars().count() < SHORT_INPUT_LENGTH {
            (self.min_similarity - SHORT_INPUT_LENIENCY).max(0.0)
        } else {
            self.min_similarity
        }
    }
}

/// A candidate kept by the matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// The candidate exactly as supplied by the caller
    pub name: String,
    /// Similarity score, 0-100
    pub similarity: f64,
    /// Whether the normalized forms are identical
    pub is_exact: bool,
}

/// Calculate Levenshtein distance between two strings
///
/// Insertions, deletions and substitutions each cost 1. Works on chars, not
/// bytes.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    #[allow(clippy::needless_range_loop)]
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[len1][len2]
}

/// Similarity of two strings on a 0-100 scale
///
/// Inputs are trimmed and lowercased first. Equal strings (including two
/// empty ones) score 100; an empty string against a non-empty one scores 0.
///
/// ```
/// use grocery_identity::fuzzy::calculate_similarity;
///
/// assert_eq!(calculate_similarity("Milk", " milk "), 100.0);
/// assert_eq!(calculate_similarity("test", ""), 0.0);
/// assert_eq!(calculate_similarity("milk", "silk"), 75.0);
/// ```
pub fn calculate_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return EXACT_SIMILARITY;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = levenshtein_distance(&a, &b);

    ((max_len - distance) as f64 / max_len as f64) * 100.0
}

/// Rank candidates by similarity to `input`
///
/// Both sides are compared in normalized form. Candidates that differ from an
/// earlier one only by case or surrounding whitespace are skipped, so the
/// first spelling wins; candidates that normalize to nothing are skipped too.
/// Results are sorted by similarity, highest first, keeping input order on
/// ties, and truncated to `options.max_results`.
///
/// ```
/// use grocery_identity::fuzzy::{find_fuzzy_matches, MatchOptions};
///
/// let matches = find_fuzzy_matches(
///     "milk",
///     &["milk", "Milk", "milks", "bread"],
///     &MatchOptions::default(),
/// );
/// let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
/// assert_eq!(names, vec!["milk", "milks"]);
/// assert!(matches[0].is_exact);
/// ```
pub fn find_fuzzy_matches<S: AsRef<str>>(
    input: &str,
    candidates: &[S],
    options: &MatchOptions,
) -> Vec<MatchCandidate> {
    let _span = observability::matching_span("find_fuzzy_matches").entered();
    let started = Instant::now();

    let normalized_input = normalize_item_name(input);
    if normalized_input.is_empty() {
        debug!("Empty input after normalization: '{}'", input);
        return Vec::new();
    }

    let threshold = options.effective_threshold(&normalized_input);
    let mut seen: HashSet<String> = HashSet::new();
    let mut matches: Vec<MatchCandidate> = Vec::new();

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let normalized_candidate = normalize_item_name(candidate);

        if normalized_candidate.is_empty() || !seen.insert(candidate.trim().to_lowercase()) {
            trace!("Skipping empty or duplicate candidate '{}'", candidate);
            continue;
        }

        if normalized_candidate == normalized_input {
            matches.push(MatchCandidate {
                name: candidate.to_string(),
                similarity: EXACT_SIMILARITY,
                is_exact: true,
            });
            continue;
        }

        let similarity = calculate_similarity(&normalized_input, &normalized_candidate);

        if normalized_candidate.contains(normalized_input.as_str())
            || normalized_input.contains(normalized_candidate.as_str())
        {
            matches.push(MatchCandidate {
                name: candidate.to_string(),
                similarity: similarity.max(CONTAINMENT_FLOOR),
                is_exact: false,
            });
            continue;
        }

        if similarity >= threshold {
            matches.push(MatchCandidate {
                name: candidate.to_string(),
                similarity,
                is_exact: false,
            });
        } else {
            trace!(
                "Candidate '{}' below threshold: {:.1} < {:.1}",
                candidate,
                similarity,
                threshold
            );
        }
    }

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(options.max_results);

    debug!(
        input = %normalized_input,
        threshold = threshold,
        candidates = candidates.len(),
        results = matches.len(),
        "Fuzzy matching complete"
    );
    observability::record_match_metrics(candidates.len(), matches.len(), started.elapsed());

    matches
}

/// The highest-ranked match, if any candidate qualifies
pub fn find_best_match<S: AsRef<str>>(
    input: &str,
    candidates: &[S],
    options: &MatchOptions,
) -> Option<MatchCandidate> {
    let options = MatchOptions {
        max_results: 1,
        ..*options
    };
    find_fuzzy_matches(input, candidates, &options)
        .into_iter()
        .next()
}

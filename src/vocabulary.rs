//! # Word Tables
//!
//! The placeholder denylist, name prefixes, minor words, abbreviation
//! allow-list and measurement units used by the normalizer and the display
//! formatter. The tables are data, not logic: the built-in copy is embedded
//! from `config/vocabulary.json` at compile time, `VOCABULARY_CONFIG_PATH` can
//! point at a replacement file, and either is loaded once per process and
//! never mutated afterwards.

use crate::errors::{error_logging, AppError, AppResult};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Built-in tables, identical to the shipped `config/vocabulary.json`
pub const DEFAULT_VOCABULARY_JSON: &str = include_str!("../config/vocabulary.json");

/// Environment variable overriding the vocabulary file location
pub const VOCABULARY_PATH_ENV: &str = "VOCABULARY_CONFIG_PATH";

/// Vocabulary configuration loaded from JSON
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VocabularyConfig {
    pub vocabulary: Vocabulary,
}

/// The word tables themselves
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Vocabulary {
    /// Substrings that mark a name as placeholder garbage (matched case-insensitively)
    pub placeholder_patterns: Vec<String>,
    /// Leading prefixes stripped during normalization, in priority order
    pub name_prefixes: Vec<String>,
    /// Articles and prepositions kept lowercase in display titles
    pub minor_words: Vec<String>,
    /// Acronyms always rendered uppercase in display titles
    pub abbreviations: Vec<String>,
    /// Unit suffixes recognized in measurement tokens such as `140g`
    pub measurement_units: Vec<String>,
}

impl Vocabulary {
    /// The first placeholder pattern contained in `lowercase_text`, if any
    pub fn matches_placeholder(&self, lowercase_text: &str) -> Option<&str> {
        self.placeholder_patterns
            .iter()
            .find(|pattern| lowercase_text.contains(pattern.to_ascii_lowercase().as_str()))
            .map(String::as_str)
    }

    /// True when `word` is a minor word (case-insensitive)
    pub fn is_minor_word(&self, word: &str) -> bool {
        self.minor_words
            .iter()
            .any(|minor| minor.eq_ignore_ascii_case(word))
    }

    /// True when `word` is an allow-listed abbreviation (case-insensitive)
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations
            .iter()
            .any(|abbr| abbr.eq_ignore_ascii_case(word))
    }
}

impl VocabularyConfig {
    /// Parse and validate a vocabulary from a JSON document
    pub fn from_json(content: &str) -> AppResult<Self> {
        let config: VocabularyConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a vocabulary file
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// The tables compiled into the crate
    pub fn builtin() -> Self {
        serde_json::from_str(DEFAULT_VOCABULARY_JSON)
            .expect("Built-in vocabulary should be valid JSON")
    }

    /// Validate vocabulary tables
    pub fn validate(&self) -> AppResult<()> {
        let vocabulary = &self.vocabulary;

        if vocabulary.measurement_units.is_empty() {
            return Err(AppError::Config(
                "measurement_units cannot be empty".to_string(),
            ));
        }

        let validate_words = |words: &[String], category: &str| -> AppResult<()> {
            for (i, word) in words.iter().enumerate() {
                if word.trim().is_empty() {
                    return Err(AppError::Config(format!(
                        "{}[{}] cannot be empty",
                        category, i
                    )));
                }
                if word.chars().any(|c| c.is_control()) {
                    return Err(AppError::Config(format!(
                        "{}[{}] '{}' contains control characters",
                        category, i, word
                    )));
                }
            }
            Ok(())
        };

        validate_words(&vocabulary.placeholder_patterns, "placeholder_patterns")?;
        validate_words(&vocabulary.name_prefixes, "name_prefixes")?;
        validate_words(&vocabulary.minor_words, "minor_words")?;
        validate_words(&vocabulary.abbreviations, "abbreviations")?;
        validate_words(&vocabulary.measurement_units, "measurement_units")?;

        // Prefixes are compared against lowercased input
        for (i, prefix) in vocabulary.name_prefixes.iter().enumerate() {
            if *prefix != prefix.to_ascii_lowercase() {
                return Err(AppError::Config(format!(
                    "name_prefixes[{}] '{}' must be lowercase",
                    i, prefix
                )));
            }
        }

        // Units are spliced into the measurement regex as letter runs
        for (i, unit) in vocabulary.measurement_units.iter().enumerate() {
            if !unit.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(AppError::Config(format!(
                    "measurement_units[{}] '{}' must contain ASCII letters only",
                    i, unit
                )));
            }
        }

        Ok(())
    }
}

/// Load the vocabulary, falling back to the built-in tables
///
/// Only the file named by `VOCABULARY_CONFIG_PATH` is read; the working
/// directory is never searched. Without the variable, or when the file is
/// unreadable or invalid, [`VocabularyConfig::builtin`] is used.
pub fn load_vocabulary_config() -> VocabularyConfig {
    resolve_vocabulary_config(std::env::var(VOCABULARY_PATH_ENV).ok().as_deref())
}

/// Load the vocabulary from an explicit file, falling back to the built-in tables
pub fn resolve_vocabulary_config(config_path: Option<&str>) -> VocabularyConfig {
    let Some(config_path) = config_path else {
        info!("{} not set, using built-in vocabulary", VOCABULARY_PATH_ENV);
        return VocabularyConfig::builtin();
    };

    info!("Loading vocabulary from {}", config_path);
    match VocabularyConfig::from_path(config_path) {
        Ok(config) => config,
        Err(e) => {
            error_logging::log_config_error(&e, VOCABULARY_PATH_ENV, "load_vocabulary");
            warn!(
                "Failed to load vocabulary from '{}': {}. Using built-in tables.",
                config_path, e
            );
            VocabularyConfig::builtin()
        }
    }
}

lazy_static! {
    static ref VOCABULARY: VocabularyConfig = load_vocabulary_config();
}

/// The process-wide word tables
///
/// Resolved once, on first use, by [`load_vocabulary_config`]: the file named
/// by `VOCABULARY_CONFIG_PATH` if set and valid, otherwise the built-in
/// tables. Nothing is re-read afterwards.
pub fn vocabulary() -> &'static Vocabulary {
    &VOCABULARY.vocabulary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_vocabulary_is_valid() {
        let config = VocabularyConfig::builtin();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.vocabulary.name_prefixes,
            vec!["a ", "an ", "the ", "some ", "fresh ", "organic "]
        );
    }

    #[test]
    fn test_vocabulary_validation() {
        let mut config = VocabularyConfig::builtin();

        config.vocabulary.measurement_units = vec![];
        assert!(config.validate().is_err());
        config.vocabulary.measurement_units = vec!["g".to_string()];
        assert!(config.validate().is_ok());

        config.vocabulary.measurement_units = vec!["fl oz".to_string()];
        assert!(config.validate().is_err());
        config.vocabulary.measurement_units = vec!["g".to_string()];

        config.vocabulary.name_prefixes = vec!["The ".to_string()];
        assert!(config.validate().is_err());
        config.vocabulary.name_prefixes = vec!["the ".to_string()];

        config.vocabulary.abbreviations = vec!["".to_string()];
        assert!(config.validate().is_err());
        config.vocabulary.abbreviations = vec!["UHT".to_string()];

        config.vocabulary.minor_words = vec!["of\nand".to_string()];
        assert!(config.validate().is_err());
        config.vocabulary.minor_words = vec!["of".to_string()];

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            VocabularyConfig::from_json("{ \"vocabulary\": "),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_resolution_without_path_uses_builtin() {
        let config = resolve_vocabulary_config(None);
        assert_eq!(
            config.vocabulary.abbreviations,
            VocabularyConfig::builtin().vocabulary.abbreviations
        );
    }

    #[test]
    fn test_resolution_falls_back_on_bad_file() {
        let config = resolve_vocabulary_config(Some("no/such/vocabulary.json"));
        assert_eq!(
            config.vocabulary.measurement_units,
            VocabularyConfig::builtin().vocabulary.measurement_units
        );
    }

    #[test]
    fn test_lookup_helpers() {
        let vocabulary = vocabulary();
        assert!(vocabulary.is_minor_word("OF"));
        assert!(!vocabulary.is_minor_word("rice"));
        assert!(vocabulary.is_abbreviation("uht"));
        assert!(!vocabulary.is_abbreviation("milk"));
        assert_eq!(
            vocabulary.matches_placeholder("my test item here"),
            Some("test item")
        );
        assert_eq!(vocabulary.matches_placeholder("oat milk"), None);
    }
}

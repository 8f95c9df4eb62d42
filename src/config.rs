//! # Engine Configuration
//!
//! Groups the tunable parts of the engine (matching thresholds, name
//! validation limits, logging) into one structure that can be loaded from
//! environment variables and validated before use. The word tables have
//! their own loader in [`crate::vocabulary`].

use crate::errors::{error_logging, AppError, AppResult};
use crate::fuzzy::MatchOptions;
use crate::normalization::NameRules;
use crate::observability_config::ObservabilityConfig;
use std::env;
use std::str::FromStr;

/// Unified engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Fuzzy matching options
    pub matching: MatchOptions,
    /// Product name validation rules
    pub names: NameRules,
    /// Logging and metrics configuration
    pub observability: ObservabilityConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        config.matching.min_similarity =
            parse_env("FUZZY_MIN_SIMILARITY", config.matching.min_similarity)?;
        config.matching.max_results = parse_env("FUZZY_MAX_RESULTS", config.matching.max_results)?;

        config.names.min_length = parse_env("PRODUCT_NAME_MIN_LENGTH", config.names.min_length)?;
        config.names.max_length = parse_env("PRODUCT_NAME_MAX_LENGTH", config.names.max_length)?;
        config.names.min_alpha_ratio =
            parse_env("PRODUCT_NAME_MIN_ALPHA_RATIO", config.names.min_alpha_ratio)?;

        config.observability = ObservabilityConfig::from_env();

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> AppResult<()> {
        self.matching.validate()?;
        self.names.validate()?;
        self.observability.validate().map_err(AppError::Config)?;
        Ok(())
    }

    /// Get a summary of the current configuration for logging
    pub fn summary(&self) -> String {
        format!(
            "Configuration: min_similarity={}, max_results={}, name_length={}..={}, min_alpha_ratio={}, environment={}, log_level={}",
            self.matching.min_similarity,
            self.matching.max_results,
            self.names.min_length,
            self.names.max_length,
            self.names.min_alpha_ratio,
            self.observability.environment,
            self.observability.log_level
        )
    }
}

/// Read an environment variable, falling back to `default` when unset
fn parse_env<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            let err = AppError::Config(format!("{} must be a valid number, got '{}'", key, raw));
            error_logging::log_config_error(&err, key, "parse_env");
            err
        }),
        Err(_) => Ok(default),
    }
}

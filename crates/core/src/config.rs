//! Thresholds driving the title pipeline.
//!
//! # Example
//!
//! ```rust
//! use titulus_core::TitleConfig;
//!
//! let config = TitleConfig::builder()
//!     .top_margin(50)
//!     .min_length(10)
//!     .multiline(false)
//!     .build();
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::select::DEFAULT_EXCLUDED_PHRASES;
use crate::{Result, TitulusError};

/// Configuration for one title extraction.
///
/// Read-only for the duration of a call; nothing is shared between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    /// Blocks must start strictly below this top coordinate (default: 70).
    pub top_margin: i64,

    /// Minimum joined text length of a candidate block (default: 15).
    pub min_length: usize,

    /// Maximum joined text length of a candidate block (default: 250).
    pub max_length: usize,

    /// Return all lines of the chosen block instead of only the first (default: true).
    pub multiline: bool,

    /// Share of uppercase/whitespace characters above which a title is
    /// considered all-caps (default: 0.67).
    pub upper_case_threshold: f64,

    /// Share of whitespace characters above which a title is considered
    /// letter-spaced (default: 0.20).
    pub letter_spacing_threshold: f64,

    /// Width of the window scanned for irregular case flips (default: 3).
    pub case_window: usize,

    /// Candidates containing any of these phrases are skipped.
    pub excluded_phrases: Vec<String>,

    /// Apply English title-case rules (small words stay lowercase) to the
    /// formatted title (default: false).
    pub smart_titlecase: bool,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            top_margin: 70,
            min_length: 15,
            max_length: 250,
            multiline: true,
            upper_case_threshold: 0.67,
            letter_spacing_threshold: 0.20,
            case_window: 3,
            excluded_phrases: DEFAULT_EXCLUDED_PHRASES.iter().map(|s| s.to_string()).collect(),
            smart_titlecase: false,
        }
    }
}

impl TitleConfig {
    /// Creates a new builder for TitleConfig.
    pub fn builder() -> TitleConfigBuilder {
        TitleConfigBuilder::new()
    }

    /// Checks that the thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_length > self.max_length {
            return Err(TitulusError::ConfigError(format!(
                "min_length ({}) exceeds max_length ({})",
                self.min_length, self.max_length
            )));
        }
        for (name, value) in [
            ("upper_case_threshold", self.upper_case_threshold),
            ("letter_spacing_threshold", self.letter_spacing_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TitulusError::ConfigError(format!("{} must be within [0, 1], got {}", name, value)));
            }
        }
        if self.case_window < 3 {
            return Err(TitulusError::ConfigError(format!(
                "case_window must be at least 3, got {}",
                self.case_window
            )));
        }
        Ok(())
    }
}

/// Builder for TitleConfig.
pub struct TitleConfigBuilder {
    config: TitleConfig,
}

impl TitleConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: TitleConfig::default() }
    }

    pub fn top_margin(mut self, value: i64) -> Self {
        self.config.top_margin = value;
        self
    }

    pub fn min_length(mut self, value: usize) -> Self {
        self.config.min_length = value;
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.config.max_length = value;
        self
    }

    pub fn multiline(mut self, value: bool) -> Self {
        self.config.multiline = value;
        self
    }

    pub fn upper_case_threshold(mut self, value: f64) -> Self {
        self.config.upper_case_threshold = value;
        self
    }

    pub fn letter_spacing_threshold(mut self, value: f64) -> Self {
        self.config.letter_spacing_threshold = value;
        self
    }

    pub fn case_window(mut self, value: usize) -> Self {
        self.config.case_window = value;
        self
    }

    /// Adds a phrase to the exclusion list.
    pub fn exclude(mut self, phrase: impl Into<String>) -> Self {
        self.config.excluded_phrases.push(phrase.into());
        self
    }

    /// Replaces the exclusion list.
    pub fn excluded_phrases(mut self, phrases: Vec<String>) -> Self {
        self.config.excluded_phrases = phrases;
        self
    }

    pub fn smart_titlecase(mut self, value: bool) -> Self {
        self.config.smart_titlecase = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> TitleConfig {
        self.config
    }
}

impl Default for TitleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TitleConfig::default();
        assert_eq!(config.top_margin, 70);
        assert_eq!(config.min_length, 15);
        assert_eq!(config.max_length, 250);
        assert!(config.multiline);
        assert_eq!(config.case_window, 3);
        assert!(!config.smart_titlecase);
        assert!(config.excluded_phrases.iter().any(|p| p == "Open Access"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = TitleConfig::builder()
            .top_margin(10)
            .min_length(5)
            .max_length(80)
            .multiline(false)
            .exclude("Preprint")
            .build();

        assert_eq!(config.top_margin, 10);
        assert_eq!(config.min_length, 5);
        assert_eq!(config.max_length, 80);
        assert!(!config.multiline);
        assert_eq!(config.excluded_phrases.last().map(String::as_str), Some("Preprint"));
    }

    #[test]
    fn test_validate_rejects_inverted_lengths() {
        let config = TitleConfig::builder().min_length(300).build();
        assert!(matches!(config.validate(), Err(TitulusError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let config = TitleConfig::builder().letter_spacing_threshold(1.5).build();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("letter_spacing_threshold"));
    }

    #[test]
    fn test_validate_rejects_small_window() {
        let config = TitleConfig::builder().case_window(2).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: TitleConfig = serde_json::from_str(r#"{"top_margin": 40, "multiline": false}"#).unwrap();
        assert_eq!(config.top_margin, 40);
        assert!(!config.multiline);
        assert_eq!(config.max_length, 250);
    }
}

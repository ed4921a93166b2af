//! Configuration structures.
//!
//! The built-in defaults are the reference data of the quiz service. A JSON
//! config file may override any section; missing sections keep their defaults.

use crate::payload::{Difficulty, Mix, QuestionFormat};
use crate::types::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Topics known to the question bank.
pub const DEFAULT_TOPICS: &[&str] = &["ada", "python", "web_development"];

/// Global validator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidatorConfig {
    /// Allowed question topics. Matched case-insensitively.
    #[serde(default = "default_topics")]
    pub topics: BTreeSet<String>,

    /// Values assumed when a generate payload omits an optional field.
    #[serde(default)]
    pub defaults: GenerateDefaults,

    /// Numeric limits applied to payload contents.
    #[serde(default)]
    pub limits: Limits,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            topics: default_topics(),
            defaults: GenerateDefaults::default(),
            limits: Limits::default(),
        }
    }
}

fn default_topics() -> BTreeSet<String> {
    DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect()
}

/// Defaults for optional generate fields. Each field may be overridden alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GenerateDefaults {
    pub difficulty: Difficulty,
    pub format: QuestionFormat,
    pub mix: Mix,
}

impl Default for GenerateDefaults {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Mixed,
            format: QuestionFormat::Mcq,
            mix: Mix::default(),
        }
    }
}

/// Numeric limits on payload contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Limits {
    /// Players a multiplayer session needs.
    pub min_multiplayer_players: usize,

    /// Minimum hidden tests a coding question must ship with its hidden answer.
    pub min_hidden_tests: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_multiplayer_players: 2,
            min_hidden_tests: 3,
        }
    }
}

impl ValidatorConfig {
    /// Load a config file, normalise it, and check it is usable.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            topics = config.topics.len(),
            "loaded validator config"
        );
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.normalized()
    }

    /// Lowercase all topics and reject configs no payload could satisfy.
    pub fn normalized(mut self) -> Result<Self> {
        self.topics = self
            .topics
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if self.topics.is_empty() {
            return Err(Error::config("at least one topic must be allowed"));
        }
        if self.limits.min_multiplayer_players < 2 {
            return Err(Error::config(format!(
                "min_multiplayer_players must be at least 2, got {}",
                self.limits.min_multiplayer_players
            )));
        }
        if !self.defaults.mix.sums_to_hundred() {
            return Err(Error::config(format!(
                "default mix must add up to 100, got {}",
                self.defaults.mix.total()
            )));
        }
        Ok(self)
    }

    /// Whether `topic` (any case) is in the allowed set.
    pub fn is_allowed_topic(&self, topic: &str) -> bool {
        self.topics.contains(&topic.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_reference_data() {
        let config = ValidatorConfig::default();
        assert_eq!(config.topics.len(), 3);
        assert!(config.is_allowed_topic("web_development"));
        assert!(config.is_allowed_topic("ADA"));
        assert!(!config.is_allowed_topic("history"));
        assert_eq!(config.defaults.difficulty, Difficulty::Mixed);
        assert_eq!(config.defaults.format, QuestionFormat::Mcq);
        assert_eq!(config.limits.min_hidden_tests, 3);
        assert_eq!(config.limits.min_multiplayer_players, 2);
    }

    #[test]
    fn test_partial_section_overrides() {
        let config =
            ValidatorConfig::from_json_str(r#"{"defaults": {"difficulty": "easy"}}"#).unwrap();
        assert_eq!(config.defaults.difficulty, Difficulty::Easy);
        assert_eq!(config.defaults.format, QuestionFormat::Mcq);
        assert_eq!(config.defaults.mix, Mix::default());

        let config =
            ValidatorConfig::from_json_str(r#"{"limits": {"min_multiplayer_players": 4}}"#)
                .unwrap();
        assert_eq!(config.limits.min_multiplayer_players, 4);
        assert_eq!(config.limits.min_hidden_tests, 3);
    }

    #[test]
    fn test_empty_json_keeps_defaults() {
        let config = ValidatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_topics_are_lowercased() {
        let config = ValidatorConfig::from_json_str(r#"{"topics": ["Rust", " GO "]}"#).unwrap();
        assert!(config.topics.contains("rust"));
        assert!(config.topics.contains("go"));
        assert!(config.is_allowed_topic("RUST"));
        assert!(!config.is_allowed_topic("python"));
    }

    #[test]
    fn test_empty_topics_rejected() {
        let err = ValidatorConfig::from_json_str(r#"{"topics": ["  "]}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_bad_default_mix_rejected() {
        let raw = r#"{"defaults": {"difficulty": "easy", "format": "mcq",
            "mix": {"mcq_percent": 50, "coding_percent": 20}}}"#;
        let err = ValidatorConfig::from_json_str(raw).unwrap_err();
        assert!(err.to_string().contains("default mix must add up to 100"));
    }

    #[test]
    fn test_single_player_minimum_rejected() {
        let raw = r#"{"limits": {"min_multiplayer_players": 1}}"#;
        let err = ValidatorConfig::from_json_str(raw).unwrap_err();
        assert!(err.to_string().contains("min_multiplayer_players"));
    }

    #[test]
    fn test_unknown_difficulty_is_serialization_error() {
        let raw = r#"{"defaults": {"difficulty": "brutal", "format": "mcq",
            "mix": {"mcq_percent": 80, "coding_percent": 20}}}"#;
        let err = ValidatorConfig::from_json_str(raw).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"limits": {{"min_hidden_tests": 5}}}}"#).unwrap();
        let config = ValidatorConfig::from_path(file.path()).unwrap();
        assert_eq!(config.limits.min_hidden_tests, 5);
        assert_eq!(config.topics.len(), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ValidatorConfig::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

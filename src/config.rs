//! Normalizer configuration and its validation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::{DEFAULT_DELIMITERS, is_word_char, word_runs};

/// Reasons a configuration is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("correction rule has an empty misspelling")]
    EmptyMisspelling,

    #[error("misspelling {0:?} must consist of word characters only")]
    NonWordMisspelling(String),

    #[error("replacement {replacement:?} for {misspelling:?} contains a configured misspelling")]
    ChainedReplacement {
        misspelling: String,
        replacement: String,
    },

    #[error("at least one sentence delimiter is required")]
    NoDelimiters,

    #[error("delimiter {0:?} must not be a word character or whitespace")]
    InvalidDelimiter(char),

    #[error("quote {0:?} must not be a word character")]
    InvalidQuote(char),
}

/// A standalone word to rewrite wherever it is not quoted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRule {
    /// Matched case-insensitively (ASCII)
    pub misspelling: String,
    /// Inserted verbatim
    pub replacement: String,
}

impl CorrectionRule {
    pub fn new(misspelling: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            misspelling: misspelling.into(),
            replacement: replacement.into(),
        }
    }
}

/// Configuration for the misspelling corrector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionConfig {
    pub rules: Vec<CorrectionRule>,
    /// Characters that protect a match when directly adjacent to it
    pub quotes: Vec<char>,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            rules: vec![CorrectionRule::new("iz", "is")],
            quotes: vec!['"', '“', '”'],
        }
    }
}

impl CorrectionConfig {
    pub fn is_quote(&self, c: char) -> bool {
        self.quotes.contains(&c)
    }
}

/// Configuration for the whole normalization pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub correction: CorrectionConfig,
    /// Sentence-terminating characters
    pub delimiters: Vec<char>,
    /// Inserted between the normalized text and the extra sentence
    pub paragraph_separator: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            correction: CorrectionConfig::default(),
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            paragraph_separator: "\n\n".to_string(),
        }
    }
}

impl NormalizerConfig {
    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for rule in &self.correction.rules {
            if rule.misspelling.is_empty() {
                return Err(ConfigError::EmptyMisspelling);
            }
            if !rule.misspelling.chars().all(is_word_char) {
                return Err(ConfigError::NonWordMisspelling(rule.misspelling.clone()));
            }
            // A replacement word that is itself a misspelling would be rewritten on a second pass
            let chained = word_runs(&rule.replacement).any(|(_, word)| {
                self.correction
                    .rules
                    .iter()
                    .any(|other| other.misspelling.eq_ignore_ascii_case(word))
            });
            if chained {
                return Err(ConfigError::ChainedReplacement {
                    misspelling: rule.misspelling.clone(),
                    replacement: rule.replacement.clone(),
                });
            }
        }

        if let Some(&quote) = self.correction.quotes.iter().find(|&&q| is_word_char(q)) {
            return Err(ConfigError::InvalidQuote(quote));
        }

        if self.delimiters.is_empty() {
            return Err(ConfigError::NoDelimiters);
        }
        if let Some(&delimiter) = self
            .delimiters
            .iter()
            .find(|&&d| is_word_char(d) || d.is_whitespace())
        {
            return Err(ConfigError::InvalidDelimiter(delimiter));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NormalizerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.delimiters, vec!['.', '!', '?', ':']);
        assert_eq!(config.paragraph_separator, "\n\n");
        assert!(config.correction.is_quote('“'));
        assert!(!config.correction.is_quote('\''));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = NormalizerConfig::from_json_str(r#"{"paragraph_separator": "\n"}"#).unwrap();
        assert_eq!(config.paragraph_separator, "\n");
        assert_eq!(config.correction, CorrectionConfig::default());
        assert_eq!(config.delimiters, DEFAULT_DELIMITERS.to_vec());
    }

    #[test]
    fn test_custom_rules_from_json() {
        let json = r#"{
            "correction": {
                "rules": [
                    {"misspelling": "teh", "replacement": "the"},
                    {"misspelling": "iz", "replacement": "is"}
                ]
            },
            "delimiters": [".", ";"]
        }"#;
        let config = NormalizerConfig::from_json_str(json).unwrap();
        assert_eq!(config.correction.rules.len(), 2);
        assert_eq!(config.correction.quotes, vec!['"', '“', '”']);
        assert_eq!(config.delimiters, vec!['.', ';']);
    }

    #[test]
    fn test_rejects_chained_replacement() {
        let mut config = NormalizerConfig::default();
        config.correction.rules.push(CorrectionRule::new("is", "be"));
        assert_eq!(
            config.validate(),
            Err(ConfigError::ChainedReplacement {
                misspelling: "iz".to_string(),
                replacement: "is".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_embedded_misspelling_in_replacement() {
        let mut config = NormalizerConfig::default();
        config.correction.rules.insert(0, CorrectionRule::new("teh", "the iz"));
        assert_eq!(
            config.validate(),
            Err(ConfigError::ChainedReplacement {
                misspelling: "teh".to_string(),
                replacement: "the iz".to_string(),
            })
        );

        config.correction.rules[0] = CorrectionRule::new("teh", "the-IZ");
        assert!(config.validate().is_err());

        config.correction.rules[0] = CorrectionRule::new("teh", "the quiz");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_rules() {
        let mut config = NormalizerConfig::default();
        config.correction.rules = vec![CorrectionRule::new("", "x")];
        assert_eq!(config.validate(), Err(ConfigError::EmptyMisspelling));

        config.correction.rules = vec![CorrectionRule::new("i z", "is")];
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonWordMisspelling("i z".to_string()))
        );
    }

    #[test]
    fn test_rejects_bad_delimiters_and_quotes() {
        let mut config = NormalizerConfig::default();
        config.delimiters.clear();
        assert_eq!(config.validate(), Err(ConfigError::NoDelimiters));

        config.delimiters = vec!['.', ' '];
        assert_eq!(config.validate(), Err(ConfigError::InvalidDelimiter(' ')));

        config.delimiters = vec!['x'];
        assert_eq!(config.validate(), Err(ConfigError::InvalidDelimiter('x')));

        let mut config = NormalizerConfig::default();
        config.correction.quotes.push('q');
        assert_eq!(config.validate(), Err(ConfigError::InvalidQuote('q')));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(NormalizerConfig::from_json_str("{not json").is_err());
        assert!(NormalizerConfig::from_json_str(r#"{"delimiters": []}"#).is_err());
    }
}

//! Analysis configuration.
//!
//! Everything that varies between writing tools lives here as plain data:
//! the stopword list, syllable exceptions, phrase lexicons, scoring
//! profiles and editing hint settings. A [`TextEngine`](crate::engine::TextEngine) is built from one
//! configuration and never changes afterwards.
//!
//! Configuration files are JSON. Every field is optional and falls back to
//! the built-in value:
//!
//! ```json
//! {
//!   "stopwords": ["the", "a", "an"],
//!   "syllable_exceptions": { "poem": 2 },
//!   "lexicons": [
//!     { "name": "hedges", "phrases": ["kind of", "sort of", "maybe"] }
//!   ],
//!   "profiles": [
//!     {
//!       "name": "dense",
//!       "components": [
//!         { "metric": "lexical_density", "weight": 1.0, "transform": { "kind": "identity" } }
//!       ],
//!       "bands": [ { "min_score": 60.0, "label": "Dense" } ],
//!       "fallback_label": "Airy"
//!     }
//!   ],
//!   "rewrites": [
//!     { "phrase": "in order to", "replacement": "to", "label": "Wordy phrase" }
//!   ],
//!   "long_sentence_words": 25
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS;
use crate::error::{QuillError, Result};
use crate::hints::{LONG_SENTENCE_WORDS, RewriteRule, RewriteTable};
use crate::lexicon::{LexiconConfig, PhraseLexicon};
use crate::scoring::ScoringProfile;

/// Configuration for a [`TextEngine`](crate::engine::TextEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Stopwords, matched case-insensitively.
    pub stopwords: Vec<String>,

    /// Words whose syllable count overrides the heuristic.
    pub syllable_exceptions: HashMap<String, usize>,

    /// Named phrase lexicons.
    pub lexicons: Vec<LexiconConfig>,

    /// Named scoring profiles.
    pub profiles: Vec<ScoringProfile>,

    /// Wordy phrases and their suggested replacements.
    pub rewrites: Vec<RewriteRule>,

    /// Word count at which a sentence is flagged as long.
    pub long_sentence_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            stopwords: DEFAULT_ENGLISH_STOP_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            syllable_exceptions: HashMap::new(),
            lexicons: LexiconConfig::defaults(),
            profiles: vec![ScoringProfile::minimalism()],
            rewrites: RewriteRule::defaults(),
            long_sentence_words: LONG_SENTENCE_WORDS,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file and validate it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading analysis config from {}", path.display());

        let content = std::fs::read_to_string(path)?;

        let config = Self::from_json_str(&content)?;
        debug!(
            "loaded {} stopwords, {} lexicons, {} profiles",
            config.stopwords.len(),
            config.lexicons.len(),
            config.profiles.len()
        );
        Ok(config)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check lexicons, profiles, rewrites and thresholds.
    pub fn validate(&self) -> Result<()> {
        let mut lexicon_names = HashSet::new();
        for lexicon in &self.lexicons {
            PhraseLexicon::from_config(lexicon)?;
            if !lexicon_names.insert(lexicon.name.as_str()) {
                return Err(QuillError::config(format!(
                    "duplicate lexicon name '{}'",
                    lexicon.name
                )));
            }
        }

        let mut profile_names = HashSet::new();
        for profile in &self.profiles {
            profile.validate()?;
            if !profile_names.insert(profile.name.as_str()) {
                return Err(QuillError::config(format!(
                    "duplicate scoring profile '{}'",
                    profile.name
                )));
            }
        }

        if let Some((word, _)) = self.syllable_exceptions.iter().find(|(_, n)| **n == 0) {
            return Err(QuillError::config(format!(
                "syllable exception for '{word}' must be at least 1"
            )));
        }

        RewriteTable::new(&self.rewrites)?;

        if self.long_sentence_words == 0 {
            return Err(QuillError::config("long_sentence_words must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.stopwords.len(), 80);
        assert_eq!(config.lexicons.len(), 3);
        assert_eq!(config.profiles[0].name, "minimalism");
        assert_eq!(config.rewrites.len(), 9);
        assert_eq!(config.long_sentence_words, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AnalysisConfig::from_json_str(r#"{ "stopwords": ["zzz"] }"#).unwrap();
        assert_eq!(config.stopwords, vec!["zzz"]);
        assert_eq!(config.lexicons, LexiconConfig::defaults());
        assert_eq!(config.profiles.len(), 1);
    }

    #[test]
    fn test_round_trip() {
        let config = AnalysisConfig::default();
        let json = config.to_json_string().unwrap();
        assert_eq!(AnalysisConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        let err = AnalysisConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, QuillError::Json(_)));
    }

    #[test]
    fn test_rejects_duplicate_lexicons() {
        let json = r#"{ "lexicons": [
            { "name": "a", "phrases": ["x"] },
            { "name": "a", "phrases": ["y"] }
        ] }"#;
        assert!(AnalysisConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_rejects_negative_weights() {
        let json = r#"{ "profiles": [ {
            "name": "bad",
            "components": [
                { "metric": "comma_rate", "weight": -0.5, "transform": { "kind": "identity" } }
            ]
        } ] }"#;
        let err = AnalysisConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, QuillError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_syllable_exception() {
        let json = r#"{ "syllable_exceptions": { "hmm": 0 } }"#;
        assert!(AnalysisConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_rejects_bad_hint_settings() {
        let err = AnalysisConfig::from_json_str(r#"{ "long_sentence_words": 0 }"#).unwrap_err();
        assert!(matches!(err, QuillError::Config(_)));

        let json = r#"{ "rewrites": [ { "phrase": "...", "replacement": "x" } ] }"#;
        assert!(AnalysisConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = AnalysisConfig::from_json_file("/nonexistent/quill.json").unwrap_err();
        assert!(matches!(err, QuillError::Io(_)));
    }
}

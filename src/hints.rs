//! Sentence-level editing hints.
//!
//! Each sentence is checked for length, passive constructions, weak verb
//! phrases, wordy phrases with a plainer rewrite, and dialogue. The per-text
//! summaries ([`Softening`], [`DialogueBalance`]) are derived from the
//! per-sentence results.
//!
//! # Examples
//!
//! ```
//! use quill::hints::RewriteTable;
//!
//! let table = RewriteTable::with_defaults().unwrap();
//! let words = ["we", "met", "in", "order", "to", "utilize", "it"];
//! let suggestions = table.suggest(&words);
//!
//! assert_eq!(suggestions[0].phrase, "in order to");
//! assert_eq!(suggestions[0].replacement, "to");
//! assert_eq!(suggestions[1].replacement, "use");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::Result;
use crate::lexicon::PhraseLexicon;
use crate::stats::ratio;

/// Sentences with at least this many words are flagged as long.
pub const LONG_SENTENCE_WORDS: usize = 30;

/// Coverage above this share of sentences reads as heavily softened.
pub const HEAVY_SOFTENING: f64 = 0.35;

/// Coverage above this share of sentences reads as somewhat softened.
pub const SOME_SOFTENING: f64 = 0.18;

/// Built-in rewrites: phrase, replacement, label.
pub const DEFAULT_REWRITES: &[(&str, &str, &str)] = &[
    ("in order to", "to", "Wordy phrase"),
    ("due to the fact that", "because", "Wordy phrase"),
    ("utilize", "use", "Simpler verb"),
    ("leverage", "use", "Simpler verb"),
    ("with respect to", "about", "Simpler phrase"),
    ("at this point in time", "now", "Wordy phrase"),
    ("a number of", "many", "Simpler phrase"),
    ("for the purpose of", "to", "Wordy phrase"),
    ("in order that", "so that", "Wordy phrase"),
];

fn default_rewrite_label() -> String {
    "Wordy phrase".to_string()
}

/// A wordy phrase and the plainer text to use instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub phrase: String,
    pub replacement: String,
    #[serde(default = "default_rewrite_label")]
    pub label: String,
}

impl RewriteRule {
    pub fn new<P, R, L>(phrase: P, replacement: R, label: L) -> Self
    where
        P: Into<String>,
        R: Into<String>,
        L: Into<String>,
    {
        RewriteRule {
            phrase: phrase.into(),
            replacement: replacement.into(),
            label: label.into(),
        }
    }

    /// The built-in rewrite rules.
    pub fn defaults() -> Vec<RewriteRule> {
        DEFAULT_REWRITES
            .iter()
            .map(|(phrase, replacement, label)| RewriteRule::new(*phrase, *replacement, *label))
            .collect()
    }
}

/// A suggested rewrite found in a word sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The normalized phrase that matched.
    pub phrase: String,
    pub replacement: String,
    pub label: String,
}

/// Rewrite rules compiled into a phrase lexicon.
///
/// Phrases match on whole tokens, so "utilize" does not match "utilized".
#[derive(Clone, Debug)]
pub struct RewriteTable {
    lexicon: PhraseLexicon,
    /// One rule per lexicon phrase, in the lexicon's order.
    rules: Vec<RewriteRule>,
}

impl RewriteTable {
    /// Compile rewrite rules. The first rule wins when two phrases normalize
    /// to the same words.
    pub fn new(rules: &[RewriteRule]) -> Result<Self> {
        let lexicon = PhraseLexicon::new("rewrites", rules.iter().map(|r| r.phrase.as_str()))?;

        let tokenizer = WordTokenizer::new();
        let normalized: Vec<String> = rules
            .iter()
            .map(|rule| tokenizer.words(&rule.phrase).join(" "))
            .collect();

        let rules = lexicon
            .phrases()
            .iter()
            .filter_map(|phrase| {
                let index = normalized.iter().position(|n| n == phrase)?;
                Some(RewriteRule {
                    phrase: phrase.clone(),
                    ..rules[index].clone()
                })
            })
            .collect();

        Ok(RewriteTable { lexicon, rules })
    }

    /// Compile the built-in rewrite rules.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&RewriteRule::defaults())
    }

    /// Rules with normalized phrases.
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Suggestions for a word sequence, one per matched rule, in order of
    /// first occurrence.
    pub fn suggest<S: AsRef<str>>(&self, words: &[S]) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = Vec::new();
        for hit in self.lexicon.find(words) {
            if suggestions.iter().any(|s| s.phrase == hit.phrase) {
                continue;
            }
            if let Some(rule) = self.rules.iter().find(|r| r.phrase == hit.phrase) {
                suggestions.push(Suggestion {
                    phrase: rule.phrase.clone(),
                    replacement: rule.replacement.clone(),
                    label: rule.label.clone(),
                });
            }
        }
        suggestions
    }
}

/// Check if a sentence contains dialogue.
pub fn is_dialogue(sentence: &str) -> bool {
    sentence.contains(['"', '\u{201C}', '\u{201D}'])
}

/// Hints for one sentence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SentenceHints {
    /// Position of the sentence in the text (0-based).
    pub index: usize,
    pub text: String,
    pub word_count: usize,
    /// The sentence reaches the long sentence threshold.
    pub long: bool,
    pub dialogue: bool,
    /// Passive constructions as written.
    pub passive: Vec<String>,
    /// Weak verb phrases, one entry per occurrence.
    pub weak: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

impl SentenceHints {
    /// True when any hint applies. Dialogue alone is not a hint.
    pub fn is_flagged(&self) -> bool {
        self.long
            || !self.passive.is_empty()
            || !self.weak.is_empty()
            || !self.suggestions.is_empty()
    }
}

/// How much passive voice and weak verbs soften a text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SofteningLevel {
    MostlyDirect,
    SomeSoftening,
    HeavilySoftened,
}

impl SofteningLevel {
    /// Level for the larger of the two sentence coverages.
    pub fn from_coverage(passive: f64, weak: f64) -> Self {
        let coverage = passive.max(weak);
        if coverage > HEAVY_SOFTENING {
            SofteningLevel::HeavilySoftened
        } else if coverage > SOME_SOFTENING {
            SofteningLevel::SomeSoftening
        } else {
            SofteningLevel::MostlyDirect
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SofteningLevel::MostlyDirect => "Mostly direct",
            SofteningLevel::SomeSoftening => "Some softening",
            SofteningLevel::HeavilySoftened => "Heavily softened",
        }
    }
}

impl fmt::Display for SofteningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Passive and weak verb totals with the share of sentences containing each.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Softening {
    pub sentence_count: usize,
    pub passive_hits: usize,
    pub weak_hits: usize,
    pub passive_sentences: usize,
    pub weak_sentences: usize,
    pub passive_coverage: f64,
    pub weak_coverage: f64,
    pub level: SofteningLevel,
}

impl Softening {
    pub fn from_sentences(sentences: &[SentenceHints]) -> Self {
        let sentence_count = sentences.len();
        let passive_sentences = sentences.iter().filter(|s| !s.passive.is_empty()).count();
        let weak_sentences = sentences.iter().filter(|s| !s.weak.is_empty()).count();
        let passive_coverage = ratio(passive_sentences, sentence_count);
        let weak_coverage = ratio(weak_sentences, sentence_count);

        Softening {
            sentence_count,
            passive_hits: sentences.iter().map(|s| s.passive.len()).sum(),
            weak_hits: sentences.iter().map(|s| s.weak.len()).sum(),
            passive_sentences,
            weak_sentences,
            passive_coverage,
            weak_coverage,
            level: SofteningLevel::from_coverage(passive_coverage, weak_coverage),
        }
    }
}

/// Dialogue sentences against narration sentences.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DialogueBalance {
    pub dialogue_sentences: usize,
    pub narration_sentences: usize,
    /// dialogue / all sentences, 0 for an empty text
    pub dialogue_share: f64,
}

impl DialogueBalance {
    pub fn from_sentences(sentences: &[SentenceHints]) -> Self {
        let dialogue_sentences = sentences.iter().filter(|s| s.dialogue).count();
        DialogueBalance {
            dialogue_sentences,
            narration_sentences: sentences.len() - dialogue_sentences,
            dialogue_share: ratio(dialogue_sentences, sentences.len()),
        }
    }
}

/// Every editing hint for a text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditingHints {
    pub long_sentence_count: usize,
    pub suggestion_count: usize,
    pub softening: Softening,
    pub dialogue: DialogueBalance,
    pub sentences: Vec<SentenceHints>,
}

impl EditingHints {
    pub fn from_sentences(sentences: Vec<SentenceHints>) -> Self {
        EditingHints {
            long_sentence_count: sentences.iter().filter(|s| s.long).count(),
            suggestion_count: sentences.iter().map(|s| s.suggestions.len()).sum(),
            softening: Softening::from_sentences(&sentences),
            dialogue: DialogueBalance::from_sentences(&sentences),
            sentences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        WordTokenizer::new().words(text)
    }

    fn hints(passive: usize, weak: usize, dialogue: bool) -> SentenceHints {
        SentenceHints {
            index: 0,
            text: String::new(),
            word_count: 5,
            long: false,
            dialogue,
            passive: vec!["was kicked".to_string(); passive],
            weak: vec!["tried to".to_string(); weak],
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn test_default_rewrites() {
        let table = RewriteTable::with_defaults().unwrap();
        assert_eq!(table.rules().len(), DEFAULT_REWRITES.len());

        let suggestions = table.suggest(&words(
            "Due to the fact that we had a number of delays, we waited.",
        ));
        let found: Vec<(&str, &str)> = suggestions
            .iter()
            .map(|s| (s.phrase.as_str(), s.replacement.as_str()))
            .collect();
        assert_eq!(found, vec![("due to the fact that", "because"), ("a number of", "many")]);
        assert_eq!(suggestions[1].label, "Simpler phrase");
    }

    #[test]
    fn test_one_suggestion_per_rule() {
        let table = RewriteTable::with_defaults().unwrap();
        let suggestions = table.suggest(&words("Utilize it, then utilize it again."));
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].replacement, "use");
    }

    #[test]
    fn test_rewrites_match_whole_tokens() {
        let table = RewriteTable::with_defaults().unwrap();
        assert!(table.suggest(&words("They utilized the leverages.")).is_empty());
    }

    #[test]
    fn test_first_duplicate_rule_wins() {
        let table = RewriteTable::new(&[
            RewriteRule::new("In-order-to", "to", "Wordy phrase"),
            RewriteRule::new("in order to", "so as to", "Other"),
        ])
        .unwrap();
        assert_eq!(table.rules().len(), 1);
        assert_eq!(table.rules()[0].phrase, "in order to");
        assert_eq!(table.rules()[0].replacement, "to");
    }

    #[test]
    fn test_rewrite_label_defaults() {
        let rule: RewriteRule =
            serde_json::from_str(r#"{ "phrase": "very unique", "replacement": "unique" }"#).unwrap();
        assert_eq!(rule.label, "Wordy phrase");
    }

    #[test]
    fn test_invalid_rewrite_phrase() {
        assert!(RewriteTable::new(&[RewriteRule::new("--", "x", "y")]).is_err());
    }

    #[test]
    fn test_is_dialogue() {
        assert!(is_dialogue("\"Run,\" she said."));
        assert!(is_dialogue("\u{201C}Run.\u{201D}"));
        assert!(!is_dialogue("She ran."));
    }

    #[test]
    fn test_softening_levels() {
        assert_eq!(SofteningLevel::from_coverage(0.0, 0.0), SofteningLevel::MostlyDirect);
        assert_eq!(SofteningLevel::from_coverage(0.18, 0.1), SofteningLevel::MostlyDirect);
        assert_eq!(SofteningLevel::from_coverage(0.1, 0.2), SofteningLevel::SomeSoftening);
        assert_eq!(SofteningLevel::from_coverage(0.35, 0.0), SofteningLevel::SomeSoftening);
        assert_eq!(SofteningLevel::from_coverage(0.5, 0.0), SofteningLevel::HeavilySoftened);
        assert_eq!(SofteningLevel::HeavilySoftened.to_string(), "Heavily softened");
    }

    #[test]
    fn test_softening_coverage() {
        let sentences = [hints(2, 0, false), hints(0, 1, false), hints(0, 0, false), hints(1, 1, false)];
        let softening = Softening::from_sentences(&sentences);

        assert_eq!(softening.sentence_count, 4);
        assert_eq!(softening.passive_hits, 3);
        assert_eq!(softening.weak_hits, 2);
        assert_eq!(softening.passive_coverage, 0.5);
        assert_eq!(softening.weak_coverage, 0.5);
        assert_eq!(softening.level, SofteningLevel::HeavilySoftened);
    }

    #[test]
    fn test_empty_text_summaries() {
        let summary = EditingHints::from_sentences(Vec::new());
        assert_eq!(summary.softening.passive_coverage, 0.0);
        assert_eq!(summary.softening.level, SofteningLevel::MostlyDirect);
        assert_eq!(summary.dialogue.dialogue_share, 0.0);
        assert_eq!(summary.long_sentence_count, 0);
    }

    #[test]
    fn test_dialogue_balance() {
        let sentences = [hints(0, 0, true), hints(0, 0, false), hints(0, 0, false), hints(0, 0, true)];
        let balance = DialogueBalance::from_sentences(&sentences);
        assert_eq!(balance.dialogue_sentences, 2);
        assert_eq!(balance.narration_sentences, 2);
        assert_eq!(balance.dialogue_share, 0.5);
    }

    #[test]
    fn test_flagged() {
        assert!(!hints(0, 0, true).is_flagged());
        assert!(hints(1, 0, false).is_flagged());
        let long = SentenceHints {
            long: true,
            ..hints(0, 0, false)
        };
        assert!(long.is_flagged());
    }
}

//! The text statistics engine.
//!
//! [`TextEngine`] bundles the analysis pipeline (word analyzer, sentence
//! tokenizer, syllable counter) with the configured lexicons, scoring
//! profiles and rewrite rules. It is immutable once built and safe to share across threads.
//!
//! The free functions at the bottom of this module run against a default
//! engine that is created lazily on first use.
//!
//! # Examples
//!
//! ```
//! use quill::engine::TextEngine;
//!
//! let engine = TextEngine::new();
//! let stats = engine.compute_readability("The dog ran. It was fast!");
//!
//! assert_eq!(stats.stats.word_count, 6);
//! assert_eq!(stats.stats.sentence_count, 2);
//! assert!(stats.flesch_reading_ease.is_some());
//! ```

use std::sync::LazyLock;

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::word::WordAnalyzer;
use crate::analysis::syllable::SyllableCounter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::sentence::SentenceTokenizer;
use crate::config::AnalysisConfig;
use crate::error::{QuillError, Result};
use crate::hints::{
    DialogueBalance, EditingHints, RewriteTable, SentenceHints, Softening, is_dialogue,
};
use crate::lexicon::{PhraseCount, PhraseLexicon, PhraseMatch};
use crate::scoring::{Metric, MetricValues, ScoreResult, ScoringProfile};
use crate::stats::ratio;
use crate::stats::readability::{self, ReadabilityStats, SentenceReadability};
use crate::stats::text_stats::{TextStats, TokenizedText};
use crate::style::{self, StyleMetrics};

/// Name of the lexicon consulted by [`TextEngine::classify_word`].
pub const CRUTCH_LEXICON: &str = "crutch";

/// Name of the lexicon whose phrases are reported as weak verbs in hints.
pub const WEAK_LEXICON: &str = "weak";

/// Coarse role of a word in a text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordTag {
    /// Listed in the crutch lexicon.
    Crutch,
    /// Listed in the stopwords.
    Stopword,
    /// Neither crutch word nor stopword.
    Content,
}

/// Configured text analysis engine.
#[derive(Clone, Debug)]
pub struct TextEngine {
    analyzer: WordAnalyzer,
    sentence_tokenizer: SentenceTokenizer,
    syllables: SyllableCounter,
    lexicons: Vec<PhraseLexicon>,
    profiles: Vec<ScoringProfile>,
    rewrites: RewriteTable,
    long_sentence_words: usize,
}

impl TextEngine {
    /// Create an engine from [`AnalysisConfig::default`].
    pub fn new() -> Self {
        DEFAULT_ENGINE.clone()
    }

    /// Create an engine from a configuration.
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let lexicons = config
            .lexicons
            .iter()
            .map(PhraseLexicon::from_config)
            .collect::<Result<Vec<_>>>()?;
        let rewrites = RewriteTable::new(&config.rewrites)?;

        debug!(
            "building engine with {} stopwords, {} syllable exceptions, {} lexicons, {} profiles, {} rewrites",
            config.stopwords.len(),
            config.syllable_exceptions.len(),
            lexicons.len(),
            config.profiles.len(),
            rewrites.rules().len()
        );

        Ok(TextEngine {
            analyzer: WordAnalyzer::with_stop_filter(StopFilter::from_words(config.stopwords)),
            sentence_tokenizer: SentenceTokenizer::new(),
            syllables: SyllableCounter::with_exceptions(config.syllable_exceptions),
            lexicons,
            profiles: config.profiles,
            rewrites,
            long_sentence_words: config.long_sentence_words,
        })
    }

    pub fn analyzer(&self) -> &WordAnalyzer {
        &self.analyzer
    }

    pub fn sentence_tokenizer(&self) -> &SentenceTokenizer {
        &self.sentence_tokenizer
    }

    pub fn syllable_counter(&self) -> &SyllableCounter {
        &self.syllables
    }

    pub fn lexicons(&self) -> &[PhraseLexicon] {
        &self.lexicons
    }

    pub fn profiles(&self) -> &[ScoringProfile] {
        &self.profiles
    }

    pub fn rewrites(&self) -> &RewriteTable {
        &self.rewrites
    }

    pub fn long_sentence_words(&self) -> usize {
        self.long_sentence_words
    }

    /// Look up a lexicon by name.
    pub fn lexicon(&self, name: &str) -> Result<&PhraseLexicon> {
        self.lexicons
            .iter()
            .find(|lexicon| lexicon.name() == name)
            .ok_or_else(|| QuillError::config(format!("unknown lexicon '{name}'")))
    }

    /// Look up a scoring profile by name.
    pub fn profile(&self, name: &str) -> Result<&ScoringProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.name == name)
            .ok_or_else(|| QuillError::config(format!("unknown scoring profile '{name}'")))
    }

    /// Lowercased word tokens in source order.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.analyzer.analyze(text).map(|token| token.text).collect()
    }

    /// Split text into sentences and words.
    pub fn tokenize_text(&self, text: &str) -> TokenizedText {
        TokenizedText {
            sentences: self.sentence_tokenizer.sentences(text),
            words: self.words(text),
        }
    }

    /// Count the syllables in a single word.
    pub fn count_syllables(&self, word: &str) -> usize {
        self.syllables.count(word)
    }

    /// Check a word against the configured stopwords.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.analyzer.is_stop_word(word)
    }

    /// Counts, averages, density and frequencies for a text.
    pub fn compute_text_stats(&self, text: &str) -> TextStats {
        TextStats::compute(
            text,
            &self.analyzer,
            &self.sentence_tokenizer,
            &self.syllables,
        )
    }

    /// Text statistics plus readability scores.
    pub fn compute_readability(&self, text: &str) -> ReadabilityStats {
        let (stats, complex_words) = TextStats::measure(
            text,
            &self.analyzer,
            &self.sentence_tokenizer,
            &self.syllables,
        );
        ReadabilityStats::from_stats(stats, complex_words)
    }

    /// Score many texts in parallel. Results keep the input order.
    pub fn compute_readability_batch<S>(&self, texts: &[S]) -> Vec<ReadabilityStats>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.compute_readability(text.as_ref()))
            .collect()
    }

    /// Reading ease of every sentence taken on its own.
    pub fn sentence_breakdown(&self, text: &str) -> Vec<SentenceReadability> {
        self.sentence_tokenizer
            .sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| {
                let mut word_count = 0;
                let mut syllable_count = 0;
                for token in self.analyzer.analyze(&sentence) {
                    word_count += 1;
                    syllable_count += self.syllables.count(&token.text);
                }

                let flesch_reading_ease = (word_count > 0).then(|| {
                    readability::flesch_reading_ease(
                        word_count as f64,
                        ratio(syllable_count, word_count),
                    )
                });

                SentenceReadability {
                    index,
                    text: sentence,
                    word_count,
                    flesch_reading_ease,
                }
            })
            .collect()
    }

    /// Every occurrence of a lexicon's phrases in the text.
    pub fn find_phrases(&self, text: &str, lexicon: &str) -> Result<Vec<PhraseMatch>> {
        let lexicon = self.lexicon(lexicon)?;
        Ok(lexicon.find(&self.words(text)))
    }

    /// Per-phrase totals for a lexicon, most frequent first.
    pub fn count_phrases(&self, text: &str, lexicon: &str) -> Result<Vec<PhraseCount>> {
        let lexicon = self.lexicon(lexicon)?;
        Ok(lexicon.count(&self.words(text)))
    }

    /// Length, passive, weak verb, rewrite and dialogue hints per sentence.
    ///
    /// Weak verbs come from the [`WEAK_LEXICON`] lexicon and are omitted when
    /// no lexicon has that name.
    pub fn sentence_hints(&self, text: &str) -> Vec<SentenceHints> {
        let weak = self.lexicon(WEAK_LEXICON).ok();

        self.sentence_tokenizer
            .sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| {
                let words = self.words(&sentence);
                let weak: Vec<String> = weak
                    .map(|lexicon| lexicon.find(&words).into_iter().map(|m| m.phrase).collect())
                    .unwrap_or_default();

                SentenceHints {
                    index,
                    word_count: words.len(),
                    long: words.len() >= self.long_sentence_words,
                    dialogue: is_dialogue(&sentence),
                    passive: style::find_passive(&sentence)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                    weak,
                    suggestions: self.rewrites.suggest(&words),
                    text: sentence,
                }
            })
            .collect()
    }

    /// Per-sentence hints with their text-level summaries.
    pub fn editing_hints(&self, text: &str) -> EditingHints {
        let hints = EditingHints::from_sentences(self.sentence_hints(text));
        debug!(
            "{} of {} sentences flagged",
            hints.sentences.iter().filter(|s| s.is_flagged()).count(),
            hints.sentences.len()
        );
        hints
    }

    /// Passive and weak verb coverage.
    pub fn softening(&self, text: &str) -> Softening {
        Softening::from_sentences(&self.sentence_hints(text))
    }

    /// Dialogue sentences against narration sentences.
    pub fn dialogue_balance(&self, text: &str) -> DialogueBalance {
        DialogueBalance::from_sentences(&self.sentence_hints(text))
    }

    /// Adverb, modifier, comma and passive voice signals.
    pub fn style_metrics(&self, text: &str) -> StyleMetrics {
        StyleMetrics::measure(text, &self.compute_text_stats(text))
    }

    /// Every metric a scoring profile can weigh.
    ///
    /// Readability metrics are absent when the text has no words.
    pub fn metrics(&self, text: &str) -> MetricValues {
        let readability = self.compute_readability(text);
        let style = StyleMetrics::measure(text, &readability.stats);
        let stats = &readability.stats;

        let mut values = MetricValues::new();
        values.insert(Metric::WordCount, stats.word_count as f64);
        values.insert(Metric::SentenceCount, stats.sentence_count as f64);
        values.insert(Metric::AvgSentenceLength, stats.avg_sentence_length);
        values.insert(Metric::AvgSyllablesPerWord, stats.avg_syllables_per_word);
        values.insert(Metric::LexicalDensity, stats.lexical_density);
        values.insert(Metric::TypeTokenRatio, stats.type_token_ratio());
        values.insert(Metric::ModifierRate, style.modifier_rate);
        values.insert(Metric::CommaRate, style.comma_rate);
        values.insert(Metric::AdverbCount, style.adverb_count as f64);
        values.insert(Metric::PassiveCount, style.passive_count as f64);

        let optional = [
            (Metric::FleschReadingEase, readability.flesch_reading_ease),
            (Metric::FleschKincaidGrade, readability.flesch_kincaid_grade),
            (Metric::GunningFog, readability.gunning_fog),
        ];
        for (metric, value) in optional {
            if let Some(value) = value {
                values.insert(metric, value);
            }
        }

        values
    }

    /// Score a text with a named profile.
    pub fn score(&self, text: &str, profile: &str) -> Result<ScoreResult> {
        let profile = self.profile(profile)?;
        Ok(profile.evaluate(&self.metrics(text)))
    }

    /// Tag a single word as crutch word, stopword or content word.
    ///
    /// A word can be both a crutch word and a stopword ("just", "really").
    pub fn classify_word(&self, word: &str) -> Vec<WordTag> {
        let normalized = self.words(word).join(" ");
        let mut tags = Vec::new();

        if self
            .lexicons
            .iter()
            .any(|lexicon| lexicon.name() == CRUTCH_LEXICON && lexicon.contains(&normalized))
        {
            tags.push(WordTag::Crutch);
        }
        if self.is_stopword(&normalized) {
            tags.push(WordTag::Stopword);
        }
        if tags.is_empty() {
            tags.push(WordTag::Content);
        }

        tags
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_ENGINE: LazyLock<TextEngine> = LazyLock::new(|| {
    TextEngine::with_config(AnalysisConfig::default())
        .expect("built-in configuration should be valid")
});

/// The shared engine behind the free functions.
pub fn default_engine() -> &'static TextEngine {
    &DEFAULT_ENGINE
}

/// Split text into sentences and words.
pub fn tokenize_text(text: &str) -> TokenizedText {
    DEFAULT_ENGINE.tokenize_text(text)
}

/// Count the syllables in a single word.
///
/// ```
/// assert_eq!(quill::count_syllables("the"), 1);
/// assert_eq!(quill::count_syllables("!!"), 0);
/// ```
pub fn count_syllables(word: &str) -> usize {
    DEFAULT_ENGINE.count_syllables(word)
}

/// Counts, averages, density and frequencies for a text.
pub fn compute_text_stats(text: &str) -> TextStats {
    DEFAULT_ENGINE.compute_text_stats(text)
}

/// Text statistics plus readability scores.
pub fn compute_readability(text: &str) -> ReadabilityStats {
    DEFAULT_ENGINE.compute_readability(text)
}

/// Check a word against the built-in stopwords.
pub fn is_stopword(word: &str) -> bool {
    DEFAULT_ENGINE.is_stopword(word)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::hints::{RewriteRule, SofteningLevel};
    use crate::lexicon::LexiconConfig;

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextEngine>();
    }

    #[test]
    fn test_tokenize_text() {
        let tokens = tokenize_text("Hello there.  General Kenobi!");
        assert_eq!(tokens.sentences, vec!["Hello there.", "General Kenobi!"]);
        assert_eq!(tokens.words, vec!["hello", "there", "general", "kenobi"]);
    }

    #[test]
    fn test_no_terminal_punctuation_is_one_sentence() {
        let stats = compute_text_stats("crimson lanterns flicker silently");
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.lexical_density, 1.0);
    }

    #[test]
    fn test_readability_batch_keeps_order() {
        let engine = TextEngine::new();
        let texts = ["", "The dog ran. It was fast!", "One."];
        let results = engine.compute_readability_batch(&texts[..]);

        assert_eq!(results.len(), 3);
        assert!(results[0].flesch_reading_ease.is_none());
        assert_eq!(results[1].stats.word_count, 6);
        assert_eq!(results[2].stats.word_count, 1);
        assert_eq!(results[1], engine.compute_readability(texts[1]));
    }

    #[test]
    fn test_sentence_breakdown() {
        let engine = TextEngine::new();
        let breakdown = engine.sentence_breakdown("The dog ran. It was fast! ?");

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].index, 0);
        assert_eq!(breakdown[0].text, "The dog ran.");
        assert_eq!(breakdown[0].word_count, 3);
        let expected = readability::flesch_reading_ease(3.0, 1.0);
        assert_eq!(breakdown[0].flesch_reading_ease, Some(expected));
    }

    #[test]
    fn test_sentence_breakdown_without_words() {
        let breakdown = TextEngine::new().sentence_breakdown("?!");
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].word_count, 0);
        assert!(breakdown[0].flesch_reading_ease.is_none());
    }

    #[test]
    fn test_find_phrases() {
        let engine = TextEngine::new();
        let hits = engine
            .find_phrases("She tried to leave. He tried to stay.", "weak")
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].word_index, 5);

        assert!(engine.find_phrases("text", "missing").is_err());
    }

    #[test]
    fn test_count_phrases() {
        let counts = TextEngine::new()
            .count_phrases("Really, it was really just fine.", "crutch")
            .unwrap();
        assert_eq!(counts[0].phrase, "really");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].phrase, "just");
    }

    #[test]
    fn test_metrics_omit_undefined_readability() {
        let engine = TextEngine::new();
        let empty = engine.metrics("");
        assert!(!empty.contains_key(&Metric::FleschReadingEase));
        assert_eq!(empty[&Metric::WordCount], 0.0);

        let full = engine.metrics("The dog ran. It was fast!");
        assert!(full.contains_key(&Metric::FleschReadingEase));
        assert_eq!(full[&Metric::AvgSentenceLength], 3.0);
    }

    #[test]
    fn test_score_with_minimalism() {
        let engine = TextEngine::new();
        let plain = engine.score("The man walked home. It was late.", "minimalism").unwrap();
        let ornate = engine
            .score(
                "The beautiful, shimmering, crimson lanterns glowed, softly, warmly, endlessly.",
                "minimalism",
            )
            .unwrap();

        assert!(plain.score > ornate.score);
        assert_eq!(ornate.label, "Over-decorated");
        assert!(engine.score("text", "baroque").is_err());
    }

    #[test]
    fn test_classify_word() {
        let engine = TextEngine::new();
        assert_eq!(engine.classify_word("Lantern"), vec![WordTag::Content]);
        assert_eq!(engine.classify_word("the"), vec![WordTag::Stopword]);
        assert_eq!(engine.classify_word("basically"), vec![WordTag::Crutch]);
        assert_eq!(
            engine.classify_word("Just"),
            vec![WordTag::Crutch, WordTag::Stopword]
        );
    }

    #[test]
    fn test_with_config() {
        let config = AnalysisConfig {
            stopwords: vec!["lantern".to_string()],
            syllable_exceptions: HashMap::from([("poem".to_string(), 2)]),
            ..AnalysisConfig::default()
        };
        let engine = TextEngine::with_config(config).unwrap();

        assert!(engine.is_stopword("Lantern"));
        assert!(!engine.is_stopword("the"));
        assert_eq!(engine.count_syllables("poem"), 2);
        assert_eq!(engine.compute_text_stats("the lantern").lexical_density, 0.5);
    }

    #[test]
    fn test_new_matches_default_config() {
        let engine = TextEngine::new();
        let config = AnalysisConfig::default();

        let names: Vec<&str> = engine.lexicons().iter().map(|l| l.name()).collect();
        let expected: Vec<&str> = config.lexicons.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, expected);
        assert_eq!(engine.profiles(), &config.profiles[..]);
        assert_eq!(engine.rewrites().rules(), &config.rewrites[..]);
        assert_eq!(engine.long_sentence_words(), config.long_sentence_words);
    }

    #[test]
    fn test_sentence_hints() {
        let engine = TextEngine::new();
        let hints = engine.sentence_hints(
            "The door was opened in order to let us in. She tried to smile. \"Leave,\" he said.",
        );

        assert_eq!(hints.len(), 3);
        assert_eq!(hints[0].passive, vec!["was opened"]);
        assert_eq!(hints[0].suggestions[0].phrase, "in order to");
        assert_eq!(hints[0].suggestions[0].replacement, "to");
        assert!(hints[0].weak.is_empty());

        assert_eq!(hints[1].weak, vec!["tried to"]);
        assert!(hints[1].passive.is_empty());
        assert!(!hints[1].dialogue);

        assert!(hints[2].dialogue);
        assert!(!hints[2].is_flagged());
    }

    #[test]
    fn test_long_sentences() {
        let engine = TextEngine::new();
        let long = format!("{}.", vec!["word"; 30].join(" "));
        let short = format!("{}.", vec!["word"; 29].join(" "));

        let hints = engine.sentence_hints(&long);
        assert_eq!(hints[0].word_count, 30);
        assert!(hints[0].long);
        assert!(!engine.sentence_hints(&short)[0].long);
    }

    #[test]
    fn test_editing_hints_summaries() {
        let engine = TextEngine::new();
        let text = "The door was opened. She tried to smile. \"Leave,\" he said.";
        let hints = engine.editing_hints(text);

        assert_eq!(hints.softening.passive_sentences, 1);
        assert_eq!(hints.softening.weak_sentences, 1);
        assert_eq!(hints.softening.level, SofteningLevel::SomeSoftening);
        assert_eq!(hints.dialogue.dialogue_sentences, 1);
        assert_eq!(hints.dialogue.narration_sentences, 2);
        assert_eq!(engine.softening(text), hints.softening);
        assert_eq!(engine.dialogue_balance(text), hints.dialogue);

        let empty = engine.editing_hints("");
        assert!(empty.sentences.is_empty());
        assert_eq!(empty.softening.level, SofteningLevel::MostlyDirect);
    }

    #[test]
    fn test_hints_follow_config() {
        let config = AnalysisConfig {
            lexicons: vec![LexiconConfig::new("crutch", &["just"])],
            rewrites: vec![RewriteRule::new("very big", "huge", "Stronger word")],
            long_sentence_words: 3,
            ..AnalysisConfig::default()
        };
        let engine = TextEngine::with_config(config).unwrap();
        let hints = engine.sentence_hints("She tried to be very big.");

        assert!(hints[0].long);
        assert!(hints[0].weak.is_empty());
        assert_eq!(hints[0].suggestions[0].replacement, "huge");
        assert_eq!(hints[0].suggestions[0].label, "Stronger word");
    }

    #[test]
    fn test_idempotent() {
        let text = "It was the best of times. It was the worst of times.";
        assert_eq!(compute_readability(text), compute_readability(text));
    }
}

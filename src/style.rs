//! Surface style metrics: adverbs, modifiers, commas, passive voice.
//!
//! These are deliberately crude signals. An adverb is any word ending in
//! `ly` (minus a few common nouns and verbs), a "modifier" is any long word
//! that is not an adverb or participle, and a passive construction is a form
//! of "to be" followed by a word ending in `ed`. Word characters in that
//! pattern are ASCII only, like the word tokenizer.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::stats::ratio;
use crate::stats::text_stats::TextStats;

/// Words ending in `ly` that are not adverbs.
const NON_ADVERB_ENDINGS: &[&str] = &["only", "family", "supply", "reply"];

/// Minimum length for a word to count as a descriptive modifier.
pub const MODIFIER_MIN_LEN: usize = 6;

static PASSIVE_VOICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)(?:was|were|is|are|been|being|be)\s+[0-9A-Za-z_]+ed(?-u:\b)")
        .expect("passive voice pattern should be valid")
});

/// Check if a lowercased token looks like an adverb.
pub fn is_adverb(word: &str) -> bool {
    word.ends_with("ly") && !NON_ADVERB_ENDINGS.iter().any(|w| word.ends_with(w))
}

/// Check if a lowercased token looks like a descriptive modifier.
pub fn is_modifier(word: &str) -> bool {
    word.len() >= MODIFIER_MIN_LEN
        && !word.ends_with("ly")
        && !word.ends_with("ing")
        && !word.ends_with("ed")
}

/// Count passive constructions in raw text.
pub fn count_passive(text: &str) -> usize {
    PASSIVE_VOICE.find_iter(text).count()
}

/// Passive constructions in raw text, as written.
pub fn find_passive(text: &str) -> Vec<&str> {
    PASSIVE_VOICE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Style signals for one text.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StyleMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub adverb_count: usize,
    pub modifier_count: usize,
    pub comma_count: usize,
    pub passive_count: usize,
    /// (adverbs + modifiers) / max(1, words)
    pub modifier_rate: f64,
    /// commas / max(1, sentences)
    pub comma_rate: f64,
    pub avg_sentence_length: f64,
}

impl StyleMetrics {
    /// Measure `text` given its already computed statistics.
    pub fn measure(text: &str, stats: &TextStats) -> Self {
        let adverb_count = stats.words.iter().filter(|w| is_adverb(w)).count();
        let modifier_count = stats.words.iter().filter(|w| is_modifier(w)).count();
        let comma_count = text.matches(',').count();

        StyleMetrics {
            word_count: stats.word_count,
            sentence_count: stats.sentence_count,
            adverb_count,
            modifier_count,
            comma_count,
            passive_count: count_passive(text),
            modifier_rate: ratio(adverb_count + modifier_count, stats.word_count.max(1)),
            comma_rate: ratio(comma_count, stats.sentence_count.max(1)),
            avg_sentence_length: stats.avg_sentence_length,
        }
    }
}

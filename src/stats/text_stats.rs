//! Core text statistics.

use serde::Serialize;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::word::WordAnalyzer;
use crate::analysis::syllable::SyllableCounter;
use crate::analysis::tokenizer::sentence::SentenceTokenizer;
use crate::stats::frequency::FrequencyTable;
use crate::stats::ratio;

/// Words with this many syllables or more count as complex.
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Sentences and words of a text, in document order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TokenizedText {
    /// Whitespace-normalized sentences.
    pub sentences: Vec<String>,
    /// Lowercased word tokens.
    pub words: Vec<String>,
}

/// Counts and ratios derived from one text.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TextStats {
    /// Whitespace-normalized sentences in document order.
    pub sentences: Vec<String>,
    /// Lowercased word tokens in document order.
    pub words: Vec<String>,
    pub word_count: usize,
    /// Number of sentences; 1 when words exist but no sentence was split out.
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub avg_sentence_length: f64,
    pub avg_syllables_per_word: f64,
    pub frequencies: FrequencyTable,
    /// Fraction of tokens that are not stopwords.
    pub lexical_density: f64,
}

impl TextStats {
    /// Compute statistics for `text` with the given pipeline pieces.
    pub fn compute(
        text: &str,
        analyzer: &WordAnalyzer,
        sentence_tokenizer: &SentenceTokenizer,
        syllables: &SyllableCounter,
    ) -> Self {
        Self::measure(text, analyzer, sentence_tokenizer, syllables).0
    }

    /// Compute statistics along with the number of complex words.
    pub(crate) fn measure(
        text: &str,
        analyzer: &WordAnalyzer,
        sentence_tokenizer: &SentenceTokenizer,
        syllables: &SyllableCounter,
    ) -> (Self, usize) {
        let sentences = sentence_tokenizer.sentences(text);

        let mut words = Vec::new();
        let mut frequencies = FrequencyTable::new();
        let mut content_words = 0;
        let mut syllable_count = 0;
        let mut complex_words = 0;

        for token in analyzer.analyze(text) {
            if !token.is_stopped() {
                content_words += 1;
            }
            let count = syllables.count(&token.text);
            syllable_count += count;
            if count >= COMPLEX_WORD_SYLLABLES {
                complex_words += 1;
            }
            frequencies.add(&token.text);
            words.push(token.text);
        }

        let word_count = words.len();
        let sentence_count = match sentences.len() {
            0 if word_count > 0 => 1,
            n => n,
        };

        let stats = TextStats {
            avg_sentence_length: ratio(word_count, sentence_count),
            avg_syllables_per_word: ratio(syllable_count, word_count),
            lexical_density: ratio(content_words, word_count),
            sentences,
            words,
            word_count,
            sentence_count,
            syllable_count,
            frequencies,
        };

        (stats, complex_words)
    }

    /// Distinct words over total words.
    pub fn type_token_ratio(&self) -> f64 {
        self.frequencies.type_token_ratio()
    }

    /// Check if the text had no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

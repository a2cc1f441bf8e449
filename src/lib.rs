//! # Quill
//!
//! Heuristic lexical analysis of English prose.
//!
//! ## Features
//!
//! - Sentence and word tokenization
//! - Syllable counting
//! - Flesch Reading Ease, Flesch-Kincaid Grade and Gunning Fog
//! - Lexical density and word frequencies
//! - Phrase lexicons (crutch words, glue words, weak verbs)
//! - Configurable weighted style scores
//! - Editing hints: long sentences, wordy phrases, passive voice, dialogue
//!
//! ## Example
//!
//! ```
//! let stats = quill::compute_readability("The dog ran. It was fast!");
//!
//! assert_eq!(stats.stats.word_count, 6);
//! assert_eq!(stats.stats.avg_sentence_length, 3.0);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod hints;
pub mod lexicon;
pub mod scoring;
pub mod stats;
pub mod style;

pub use config::AnalysisConfig;
pub use engine::{
    TextEngine, WordTag, compute_readability, compute_text_stats, count_syllables, is_stopword,
    tokenize_text,
};
pub use error::{QuillError, Result};
pub use stats::{ReadabilityStats, TextStats, TokenizedText, sorted_frequencies};

pub mod prelude {
    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::analysis::token_filter::Filter;
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::config::AnalysisConfig;
    pub use crate::engine::TextEngine;
    pub use crate::error::{QuillError, Result};
    pub use crate::hints::{EditingHints, RewriteRule};
    pub use crate::lexicon::PhraseLexicon;
    pub use crate::scoring::{Metric, ScoringProfile};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

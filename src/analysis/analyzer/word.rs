//! Word analyzer used by the statistics engine.
//!
//! # Pipeline
//!
//! 1. WordTokenizer (lowercased ASCII words)
//! 2. StopFilter (marks stopwords, keeps them in the stream)
//!
//! Every word survives the pipeline, so the token count is the word count and
//! the unstopped tokens are the content words.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::word::WordTokenizer;

/// Word tokenization with stopwords marked rather than removed.
#[derive(Clone)]
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
    stop_filter: Arc<StopFilter>,
}

impl WordAnalyzer {
    /// Create a word analyzer with the default English stopwords.
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Create a word analyzer with a custom stop filter.
    ///
    /// The filter is switched to marking mode; removing stopwords here would
    /// change the word count.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let stop_filter = Arc::new(stop_filter.remove_stopped(false));
        let inner = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
            .add_filter(stop_filter.clone())
            .with_name("word");

        WordAnalyzer { inner, stop_filter }
    }

    /// Check a single word against this analyzer's stopwords.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_filter.is_stop_word(word)
    }

    /// Get the stop filter.
    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        "word"
    }
}

impl std::fmt::Debug for WordAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordAnalyzer")
            .field("inner", &self.inner)
            .field("stop_words", &self.stop_filter.len())
            .finish()
    }
}

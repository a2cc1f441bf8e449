//! Stop filter implementation.
//!
//! This module provides a filter for common function words (stopwords).
//! Density calculations keep the stopwords in the stream and only mark them,
//! so the total token count is preserved.
//!
//! # Examples
//!
//! ```
//! use quill::analysis::token_filter::Filter;
//! use quill::analysis::token_filter::stop::StopFilter;
//! use quill::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses default English stopwords
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("crimson", 1),
//!     Token::new("lantern", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! // "the" is removed as a stopword
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "crimson");
//! assert_eq!(result[1].text, "lantern");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;

/// Default English stopwords: articles, pronouns, auxiliaries, conjunctions
/// and a handful of intensifiers.
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "else", "when", "while", "of", "for", "to",
    "in", "on", "at", "by", "with", "from", "up", "down", "into", "over", "after", "before", "is",
    "am", "are", "was", "were", "be", "been", "being", "i", "you", "he", "she", "it", "we", "they",
    "them", "this", "that", "these", "those", "there", "here", "as", "so", "than", "too", "very",
    "can", "could", "should", "would", "may", "might", "will", "just", "really", "about", "also",
    "only", "even", "not", "no", "yes", "do", "does", "did", "have", "has", "had", "some", "any",
    "more", "most", "such",
];

/// Default English stopwords as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes or marks stopwords in the token stream.
///
/// Lookups are case-insensitive: the word is lowercased before the set is
/// consulted, and custom word lists are lowercased when the filter is built.
///
/// # Examples
///
/// ## Custom Stopwords
///
/// ```
/// use quill::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["Foo", "bar", "baz"]);
/// assert_eq!(filter.len(), 3);
/// assert!(filter.is_stop_word("FOO"));
/// ```
///
/// ## Preserve Stopped Tokens
///
/// ```
/// use quill::analysis::token_filter::Filter;
/// use quill::analysis::token_filter::stop::StopFilter;
/// use quill::analysis::token::Token;
///
/// // Mark as stopped but don't remove
/// let filter = StopFilter::from_words(vec!["the"]).remove_stopped(false);
/// let tokens = vec![Token::new("the", 0), Token::new("quick", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].is_stopped());
/// assert!(!result[1].is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stopwords, all lowercase
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default English stopwords.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(!filter.is_stop_word("lantern"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with a custom stopword set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        let stop_words = stop_words
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();

        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stopwords.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stopword, ignoring case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.stop_words.contains(&word.to_lowercase())
        } else {
            self.stop_words.contains(word)
        }
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }

    /// Iterate over the stopwords in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.stop_words.iter().map(String::as_str)
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None // Remove the token entirely
                    } else {
                        Some(token.stop()) // Mark as stopped but keep it
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

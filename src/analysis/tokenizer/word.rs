//! Word tokenizer implementation.
//!
//! Lowercases the text, treats every character other than an ASCII letter,
//! ASCII digit, apostrophe or whitespace as a separator, and emits the
//! remaining runs as tokens.

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;

/// A tokenizer that produces lowercased word tokens.
///
/// Offsets point into the original (not lowercased) text, so a token can be
/// mapped back to the characters that produced it.
///
/// # Examples
///
/// ```
/// use quill::analysis::tokenizer::Tokenizer;
/// use quill::analysis::tokenizer::word::WordTokenizer;
///
/// let tokenizer = WordTokenizer::new();
/// let words: Vec<String> = tokenizer
///     .tokenize("Don't PANIC -- it's 2 a.m.")
///     .map(|t| t.text)
///     .collect();
///
/// assert_eq!(words, vec!["don't", "panic", "it's", "2", "a", "m"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Split text into lowercased words without building tokens.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.tokenize(text).map(|token| token.text).collect()
    }

    #[inline]
    fn is_word_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '\''
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut start = 0;

        for (offset, ch) in text.char_indices() {
            // Lowercasing may expand one char into several; a token breaks at
            // the first folded char that is not a word char.
            for folded in ch.to_lowercase() {
                if Self::is_word_char(folded) {
                    if current.is_empty() {
                        start = offset;
                    }
                    current.push(folded);
                } else if !current.is_empty() {
                    let position = tokens.len();
                    tokens.push(Token::with_offsets(
                        std::mem::take(&mut current),
                        position,
                        start,
                        offset,
                    ));
                }
            }
        }

        if !current.is_empty() {
            let position = tokens.len();
            tokens.push(Token::with_offsets(current, position, start, text.len()));
        }

        tokens.into_token_stream()
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

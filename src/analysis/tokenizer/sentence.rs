//! Sentence tokenizer implementation.
//!
//! Sentences end at `.`, `!` or `?` followed by whitespace and then an
//! uppercase ASCII letter, a digit or a quote. This is a heuristic: "Mr. Smith"
//! is split after "Mr." while "3.14" is never split because no whitespace
//! follows the dot.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;

/// Terminal punctuation, the whitespace gap, and the first char of the next
/// sentence. Every alternative is a single ASCII byte on both ends.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?]\s+[A-Z0-9"']"#).expect("sentence boundary pattern should be valid")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should be valid"));

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// A tokenizer that emits one token per sentence.
///
/// Token text is the sentence with whitespace normalized; offsets cover the
/// trimmed sentence in the original text.
///
/// # Examples
///
/// ```
/// use quill::analysis::tokenizer::Tokenizer;
/// use quill::analysis::tokenizer::sentence::SentenceTokenizer;
///
/// let tokenizer = SentenceTokenizer::new();
/// let sentences = tokenizer.sentences("The dog ran.  It was\nfast!");
///
/// assert_eq!(sentences, vec!["The dog ran.", "It was fast!"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new() -> Self {
        SentenceTokenizer
    }

    /// Split text into normalized sentence strings.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        self.tokenize(text).map(|token| token.text).collect()
    }

    fn push_piece(tokens: &mut Vec<Token>, text: &str, start: usize, end: usize) {
        let piece = &text[start..end];
        let trimmed = piece.trim_start();
        let start = start + (piece.len() - trimmed.len());
        let trimmed = trimmed.trim_end();
        if trimmed.is_empty() {
            return;
        }

        let position = tokens.len();
        tokens.push(Token::with_offsets(
            normalize_whitespace(trimmed),
            position,
            start,
            start + trimmed.len(),
        ));
    }
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut last = 0;

        for mat in SENTENCE_BOUNDARY.find_iter(text) {
            // Keep the punctuation with the sentence it ends, and start the
            // next sentence at the char that follows the gap.
            Self::push_piece(&mut tokens, text, last, mat.start() + 1);
            last = mat.end() - 1;
        }
        Self::push_piece(&mut tokens, text, last, text.len());

        tokens.into_token_stream()
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}

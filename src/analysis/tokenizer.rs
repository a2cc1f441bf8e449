//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline, responsible for
//! splitting input text into tokens.
//!
//! # Available Tokenizers
//!
//! - [`word::WordTokenizer`] - Lowercased ASCII word tokens
//! - [`sentence::SentenceTokenizer`] - Sentences split on terminal punctuation
//!
//! # Examples
//!
//! ```
//! use quill::analysis::tokenizer::Tokenizer;
//! use quill::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization is total: every string, including the empty string, yields a
/// (possibly empty) stream. The trait requires `Send + Sync` so that an engine
/// holding tokenizers can be shared across threads.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use quill::analysis::token::{Token, TokenStream};
/// use quill::analysis::tokenizer::Tokenizer;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> TokenStream {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Box::new(tokens.into_iter())
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod sentence;
pub mod word;

pub use sentence::SentenceTokenizer;
pub use word::WordTokenizer;

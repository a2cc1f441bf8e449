//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers. They can
//! modify, remove or mark tokens.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes or marks stopwords
//!
//! # Examples
//!
//! ```
//! use quill::analysis::token_filter::Filter;
//! use quill::analysis::token_filter::stop::StopFilter;
//! use quill::analysis::token::Token;
//!
//! let filter = StopFilter::new().remove_stopped(false);
//! let tokens = vec![Token::new("the", 0), Token::new("lantern", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert!(filtered[0].is_stopped());
//! assert!(!filtered[1].is_stopped());
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream. Filtering is
/// total, like tokenization.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use quill::analysis::token::{Token, TokenStream};
/// use quill::analysis::token_filter::Filter;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> TokenStream {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Box::new(reversed.into_iter())
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod stop;

pub use stop::StopFilter;

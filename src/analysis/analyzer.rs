//! Analyzers that combine a tokenizer with token filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`WordAnalyzer`](word::WordAnalyzer) - Word tokens with stopwords marked
//!
//! # Examples
//!
//! ```
//! use quill::analysis::analyzer::Analyzer;
//! use quill::analysis::analyzer::word::WordAnalyzer;
//!
//! let analyzer = WordAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("The Crimson lanterns").collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert!(tokens[0].is_stopped());
//! assert_eq!(tokens[1].text, "crimson");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared by an engine
/// that is used from several threads at once.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &str;
}

pub mod pipeline;
pub mod word;

pub use pipeline::PipelineAnalyzer;
pub use word::WordAnalyzer;

//! Text analysis pipeline.
//!
//! Text flows through a [`Tokenizer`](tokenizer::Tokenizer), then any number
//! of [`Filter`](token_filter::Filter)s, and comes out as a stream of
//! [`Token`](token::Token)s. An [`Analyzer`](analyzer::Analyzer) owns one
//! such pipeline. Syllable counting sits beside the pipeline and works on
//! single words.

pub mod analyzer;
pub mod syllable;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

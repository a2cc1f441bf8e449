//! Text statistics: counts, averages, readability and frequencies.
//!
//! Every value here is derived from a single input string and computed fresh
//! on each call. Ratios with a zero denominator are 0, never NaN.

pub mod frequency;
pub mod readability;
pub mod text_stats;

pub use frequency::{FrequencyTable, sorted_frequencies};
pub use readability::{
    FogBand, GradeBand, ReadabilityStats, ReadingEaseLevel, SentenceReadability,
};
pub use text_stats::{TextStats, TokenizedText};

/// `numerator / denominator`, or 0 when the denominator is 0.
#[inline]
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

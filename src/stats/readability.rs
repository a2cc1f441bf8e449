//! Readability formulas.
//!
//! Scores use the published coefficients and are never clamped. Presentation
//! helpers ([`ReadingEaseLevel`], [`GradeBand`], [`FogBand`]) map a score to
//! a coarse label for callers that want one.
//!
//! # Examples
//!
//! ```
//! use quill::stats::readability::{flesch_reading_ease, ReadingEaseLevel};
//!
//! let score = flesch_reading_ease(10.0, 1.2);
//! assert!((score - 95.165).abs() < 1e-9);
//! assert_eq!(ReadingEaseLevel::from_score(score), ReadingEaseLevel::Easy);
//! ```

use std::fmt;

use serde::Serialize;

use crate::stats::ratio;
use crate::stats::text_stats::TextStats;

/// Flesch Reading Ease from average sentence length and syllables per word.
#[inline]
pub fn flesch_reading_ease(asl: f64, asw: f64) -> f64 {
    206.835 - (1.015 * asl) - (84.6 * asw)
}

/// Flesch-Kincaid Grade Level from average sentence length and syllables per word.
#[inline]
pub fn flesch_kincaid_grade(asl: f64, asw: f64) -> f64 {
    (0.39 * asl) + (11.8 * asw) - 15.59
}

/// Gunning Fog index from average sentence length and the complex word share.
#[inline]
pub fn gunning_fog(asl: f64, complex_fraction: f64) -> f64 {
    0.4 * (asl + 100.0 * complex_fraction)
}

/// Text statistics plus readability scores.
///
/// The scores are `None` when the text has no words or no sentences.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReadabilityStats {
    #[serde(flatten)]
    pub stats: TextStats,
    pub flesch_reading_ease: Option<f64>,
    pub flesch_kincaid_grade: Option<f64>,
    /// Words with three or more syllables.
    pub complex_word_count: usize,
    pub gunning_fog: Option<f64>,
}

impl ReadabilityStats {
    /// Score already computed statistics.
    pub fn from_stats(stats: TextStats, complex_word_count: usize) -> Self {
        let (fre, fkgl, fog) = if stats.word_count == 0 || stats.sentence_count == 0 {
            (None, None, None)
        } else {
            let asl = ratio(stats.word_count, stats.sentence_count);
            let asw = ratio(stats.syllable_count, stats.word_count);
            let complex = ratio(complex_word_count, stats.word_count);
            (
                Some(flesch_reading_ease(asl, asw)),
                Some(flesch_kincaid_grade(asl, asw)),
                Some(gunning_fog(asl, complex)),
            )
        };

        ReadabilityStats {
            stats,
            flesch_reading_ease: fre,
            flesch_kincaid_grade: fkgl,
            complex_word_count,
            gunning_fog: fog,
        }
    }

    /// Coarse level for the reading ease score.
    pub fn reading_ease_level(&self) -> Option<ReadingEaseLevel> {
        self.flesch_reading_ease.map(ReadingEaseLevel::from_score)
    }

    /// School-grade band for the Flesch-Kincaid grade.
    pub fn grade_band(&self) -> Option<GradeBand> {
        self.flesch_kincaid_grade.map(GradeBand::from_grade)
    }

    /// Band for the Gunning Fog index.
    pub fn fog_band(&self) -> Option<FogBand> {
        self.gunning_fog.map(FogBand::from_index)
    }
}

/// Readability of a single sentence analysed on its own.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SentenceReadability {
    /// Position of the sentence in the text (0-based).
    pub index: usize,
    pub text: String,
    pub word_count: usize,
    /// `None` when the sentence has no words.
    pub flesch_reading_ease: Option<f64>,
}

/// Coarse difficulty level derived from Flesch Reading Ease.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingEaseLevel {
    /// 70 and above.
    Easy,
    /// 50 to 70.
    Moderate,
    /// 30 to 50.
    Dense,
    /// Below 30.
    VeryDense,
}

impl ReadingEaseLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            ReadingEaseLevel::Easy
        } else if score >= 50.0 {
            ReadingEaseLevel::Moderate
        } else if score >= 30.0 {
            ReadingEaseLevel::Dense
        } else {
            ReadingEaseLevel::VeryDense
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadingEaseLevel::Easy => "Easy",
            ReadingEaseLevel::Moderate => "Moderate",
            ReadingEaseLevel::Dense => "Dense",
            ReadingEaseLevel::VeryDense => "Very dense",
        }
    }
}

impl fmt::Display for ReadingEaseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// School-grade band derived from the Flesch-Kincaid grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    VeryAccessible,
    Accessible,
    Academic,
    Technical,
}

impl GradeBand {
    pub fn from_grade(grade: f64) -> Self {
        if grade <= 6.0 {
            GradeBand::VeryAccessible
        } else if grade <= 10.0 {
            GradeBand::Accessible
        } else if grade <= 14.0 {
            GradeBand::Academic
        } else {
            GradeBand::Technical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeBand::VeryAccessible => "Very accessible (grade 6 and below)",
            GradeBand::Accessible => "Accessible (grades 7-10)",
            GradeBand::Academic => "Academic / technical (grades 11-14)",
            GradeBand::Technical => "Highly technical (postgraduate level)",
        }
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Band derived from the Gunning Fog index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FogBand {
    Easy,
    FairlyClear,
    Complex,
    VeryComplex,
}

impl FogBand {
    pub fn from_index(fog: f64) -> Self {
        if fog < 10.0 {
            FogBand::Easy
        } else if fog < 14.0 {
            FogBand::FairlyClear
        } else if fog < 18.0 {
            FogBand::Complex
        } else {
            FogBand::VeryComplex
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FogBand::Easy => "Easy to read",
            FogBand::FairlyClear => "Fairly clear",
            FogBand::Complex => "Academic / somewhat complex",
            FogBand::VeryComplex => "Very complex",
        }
    }
}

impl fmt::Display for FogBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

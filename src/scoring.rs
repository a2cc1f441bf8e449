//! Weighted style scores.
//!
//! A [`ScoringProfile`] is plain data: a list of metrics, each with a weight
//! and a transform into the `[0, 1]` range, plus labelled bands. Tools that
//! differ only in weights become different profiles of the same engine.
//!
//! ```text
//! score = 100 × Σ weight × transform(metric)
//! ```
//!
//! # Examples
//!
//! ```
//! use quill::scoring::{Metric, MetricValues, ScoringProfile};
//!
//! let profile = ScoringProfile::minimalism();
//! let mut values = MetricValues::new();
//! values.insert(Metric::ModifierRate, 0.0);
//! values.insert(Metric::CommaRate, 0.0);
//! values.insert(Metric::AvgSentenceLength, 24.0);
//!
//! let result = profile.evaluate(&values);
//! assert_eq!(result.score, 100.0);
//! assert_eq!(result.label, "Austere");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{QuillError, Result};

/// Metrics a profile can weigh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    WordCount,
    SentenceCount,
    AvgSentenceLength,
    AvgSyllablesPerWord,
    LexicalDensity,
    TypeTokenRatio,
    FleschReadingEase,
    FleschKincaidGrade,
    GunningFog,
    ModifierRate,
    CommaRate,
    AdverbCount,
    PassiveCount,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::WordCount => "word_count",
            Metric::SentenceCount => "sentence_count",
            Metric::AvgSentenceLength => "avg_sentence_length",
            Metric::AvgSyllablesPerWord => "avg_syllables_per_word",
            Metric::LexicalDensity => "lexical_density",
            Metric::TypeTokenRatio => "type_token_ratio",
            Metric::FleschReadingEase => "flesch_reading_ease",
            Metric::FleschKincaidGrade => "flesch_kincaid_grade",
            Metric::GunningFog => "gunning_fog",
            Metric::ModifierRate => "modifier_rate",
            Metric::CommaRate => "comma_rate",
            Metric::AdverbCount => "adverb_count",
            Metric::PassiveCount => "passive_count",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measured metric values. A missing key means the metric is undefined for
/// the text (for example readability of an empty text).
pub type MetricValues = BTreeMap<Metric, f64>;

/// How a raw metric value becomes a `[0, 1]` component score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transform {
    /// The value itself, clamped to `[0, 1]`.
    Identity,
    /// `max(0, 1 - value × scale)`: less is better.
    Inverse { scale: f64 },
    /// `min(1, value / target)`: more is better, up to the target.
    Ratio { target: f64 },
}

impl Transform {
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Transform::Identity => value.clamp(0.0, 1.0),
            Transform::Inverse { scale } => (1.0 - value * scale).max(0.0),
            Transform::Ratio { target } => {
                if target == 0.0 {
                    1.0
                } else {
                    (value / target).clamp(0.0, 1.0)
                }
            }
        }
    }
}

/// One weighted metric in a profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub metric: Metric,
    pub weight: f64,
    pub transform: Transform,
    /// Component score used when the metric is missing or exactly zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<f64>,
}

impl ScoreComponent {
    pub fn new(metric: Metric, weight: f64, transform: Transform) -> Self {
        ScoreComponent {
            metric,
            weight,
            transform,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = Some(fallback);
        self
    }

    fn component_score(&self, value: Option<f64>) -> f64 {
        match (value, self.fallback) {
            (None, Some(fallback)) => fallback,
            (Some(v), Some(fallback)) if v == 0.0 => fallback,
            (None, None) => 0.0,
            (Some(v), _) => self.transform.apply(v),
        }
    }
}

/// A labelled score range: scores at or above `min_score` get `label`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub min_score: f64,
    pub label: String,
}

impl ScoreBand {
    pub fn new<S: Into<String>>(min_score: f64, label: S) -> Self {
        ScoreBand {
            min_score,
            label: label.into(),
        }
    }
}

/// A named, weighted scoring recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringProfile {
    pub name: String,
    pub components: Vec<ScoreComponent>,
    /// Bands checked from the highest `min_score` down.
    #[serde(default)]
    pub bands: Vec<ScoreBand>,
    /// Label for scores below every band.
    #[serde(default)]
    pub fallback_label: String,
}

/// Contribution of one component to a score.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComponentScore {
    pub metric: Metric,
    pub value: Option<f64>,
    /// Transformed value in `[0, 1]` before weighting.
    pub component: f64,
    pub weight: f64,
}

/// Result of evaluating a profile.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreResult {
    pub profile: String,
    /// Weighted score, 100 when every component is perfect and weights sum to 1.
    pub score: f64,
    pub label: String,
    pub components: Vec<ComponentScore>,
}

impl ScoringProfile {
    pub fn new<S: Into<String>>(name: S) -> Self {
        ScoringProfile {
            name: name.into(),
            components: Vec::new(),
            bands: Vec::new(),
            fallback_label: String::new(),
        }
    }

    pub fn add_component(mut self, component: ScoreComponent) -> Self {
        self.components.push(component);
        self
    }

    pub fn add_band<S: Into<String>>(mut self, min_score: f64, label: S) -> Self {
        self.bands.push(ScoreBand::new(min_score, label));
        self
    }

    pub fn with_fallback_label<S: Into<String>>(mut self, label: S) -> Self {
        self.fallback_label = label.into();
        self
    }

    /// Minimalist prose: few modifiers, few commas, long cadence.
    pub fn minimalism() -> Self {
        ScoringProfile::new("minimalism")
            .add_component(ScoreComponent::new(
                Metric::ModifierRate,
                0.5,
                Transform::Inverse { scale: 40.0 },
            ))
            .add_component(ScoreComponent::new(
                Metric::CommaRate,
                0.3,
                Transform::Inverse { scale: 0.8 },
            ))
            .add_component(
                ScoreComponent::new(
                    Metric::AvgSentenceLength,
                    0.2,
                    Transform::Ratio { target: 24.0 },
                )
                .with_fallback(0.5),
            )
            .add_band(70.0, "Austere")
            .add_band(45.0, "Half-minimal")
            .with_fallback_label("Over-decorated")
    }

    /// Check weights, transform parameters and bands.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(QuillError::config("scoring profile name must not be empty"));
        }
        for component in &self.components {
            if !component.weight.is_finite() || component.weight < 0.0 {
                return Err(QuillError::config(format!(
                    "profile '{}': weight for {} must be a non-negative number",
                    self.name, component.metric
                )));
            }
            let parameter = match component.transform {
                Transform::Identity => 0.0,
                Transform::Inverse { scale } => scale,
                Transform::Ratio { target } => target,
            };
            if !parameter.is_finite() || parameter < 0.0 {
                return Err(QuillError::config(format!(
                    "profile '{}': transform for {} needs a non-negative parameter",
                    self.name, component.metric
                )));
            }
            if let Some(fallback) = component.fallback
                && !(0.0..=1.0).contains(&fallback)
            {
                return Err(QuillError::config(format!(
                    "profile '{}': fallback for {} must be within [0, 1]",
                    self.name, component.metric
                )));
            }
        }
        if let Some(band) = self.bands.iter().find(|b| !b.min_score.is_finite()) {
            return Err(QuillError::config(format!(
                "profile '{}': band '{}' has a non-finite threshold",
                self.name, band.label
            )));
        }
        Ok(())
    }

    /// Label for a score.
    pub fn label_for(&self, score: f64) -> &str {
        let mut bands: Vec<&ScoreBand> = self.bands.iter().collect();
        bands.sort_by(|a, b| b.min_score.total_cmp(&a.min_score));
        bands
            .into_iter()
            .find(|band| score >= band.min_score)
            .map(|band| band.label.as_str())
            .unwrap_or(self.fallback_label.as_str())
    }

    /// Score a set of metric values.
    pub fn evaluate(&self, values: &MetricValues) -> ScoreResult {
        let components: Vec<ComponentScore> = self
            .components
            .iter()
            .map(|c| {
                let value = values.get(&c.metric).copied();
                ComponentScore {
                    metric: c.metric,
                    value,
                    component: c.component_score(value),
                    weight: c.weight,
                }
            })
            .collect();

        let score = components
            .iter()
            .map(|c| c.component * c.weight)
            .sum::<f64>()
            * 100.0;

        ScoreResult {
            profile: self.name.clone(),
            label: self.label_for(score).to_string(),
            score,
            components,
        }
    }
}

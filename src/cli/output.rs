//! Output formatting for CLI commands.

use std::fmt::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, QuillArgs};
use crate::engine::WordTag;
use crate::error::Result;
use crate::hints::{DialogueBalance, SentenceHints, Softening};
use crate::lexicon::PhraseCount;
use crate::scoring::ScoreResult;
use crate::stats::readability::{FogBand, GradeBand, ReadingEaseLevel, SentenceReadability};
use crate::style::StyleMetrics;

/// Report types that know how to print themselves for a terminal.
pub trait HumanOutput {
    /// Render the report as plain text.
    fn render_human(&self) -> String;
}

/// Counts and averages for a text.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub unique_words: usize,
    pub avg_sentence_length: f64,
    pub avg_syllables_per_word: f64,
    pub lexical_density: f64,
    pub type_token_ratio: f64,
}

/// Readability scores with their bands.
#[derive(Debug, Serialize)]
pub struct ReadabilityReport {
    pub word_count: usize,
    pub sentence_count: usize,
    pub complex_word_count: usize,
    pub flesch_reading_ease: Option<f64>,
    pub reading_ease_level: Option<ReadingEaseLevel>,
    pub flesch_kincaid_grade: Option<f64>,
    pub grade_band: Option<GradeBand>,
    pub gunning_fog: Option<f64>,
    pub fog_band: Option<FogBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Vec<SentenceReadability>>,
}

/// One row of a frequency listing.
#[derive(Debug, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    pub tags: Vec<WordTag>,
}

/// Word frequencies, most frequent first.
#[derive(Debug, Serialize)]
pub struct FrequencyReport {
    pub total_words: usize,
    pub unique_words: usize,
    pub type_token_ratio: f64,
    pub words: Vec<WordFrequency>,
}

/// Sentences of a text in document order.
#[derive(Debug, Serialize)]
pub struct SentencesReport {
    pub sentence_count: usize,
    pub sentences: Vec<String>,
}

/// Phrase totals for one lexicon.
#[derive(Debug, Serialize)]
pub struct LexiconHits {
    pub lexicon: String,
    pub total: usize,
    pub phrases: Vec<PhraseCount>,
}

/// Phrase totals for every requested lexicon.
#[derive(Debug, Serialize)]
pub struct PhrasesReport {
    pub word_count: usize,
    pub lexicons: Vec<LexiconHits>,
}

/// A profile score together with the style signals behind it.
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub style: StyleMetrics,
}

/// Editing hints with their text-level summaries.
#[derive(Debug, Serialize)]
pub struct HintsReport {
    pub sentence_count: usize,
    pub long_sentence_count: usize,
    pub suggestion_count: usize,
    pub softening: Softening,
    pub dialogue: DialogueBalance,
    /// Flagged sentences, or every sentence when asked for.
    pub sentences: Vec<SentenceHints>,
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &QuillArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &QuillArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!("{}", "═".repeat(message.chars().count()));
    }
    print!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &QuillArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format an optional score, `n/a` when undefined.
fn format_score(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "n/a".to_string(),
    }
}

/// Format an optional band label, empty when undefined.
fn format_band<B: std::fmt::Display>(band: Option<B>) -> String {
    band.map(|b| format!(" ({b})")).unwrap_or_default()
}

fn format_tags(tags: &[WordTag]) -> String {
    tags.iter()
        .map(|tag| match tag {
            WordTag::Crutch => "crutch",
            WordTag::Stopword => "stopword",
            WordTag::Content => "content",
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl HumanOutput for StatsReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Words: {}", self.word_count);
        let _ = writeln!(out, "Sentences: {}", self.sentence_count);
        let _ = writeln!(out, "Syllables: {}", self.syllable_count);
        let _ = writeln!(out, "Unique words: {}", self.unique_words);
        let _ = writeln!(out, "Average sentence length: {:.2}", self.avg_sentence_length);
        let _ = writeln!(
            out,
            "Average syllables per word: {:.2}",
            self.avg_syllables_per_word
        );
        let _ = writeln!(out, "Lexical density: {:.1}%", self.lexical_density * 100.0);
        let _ = writeln!(out, "Type-token ratio: {:.3}", self.type_token_ratio);
        out
    }
}

impl HumanOutput for ReadabilityReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Flesch reading ease: {}{}",
            format_score(self.flesch_reading_ease),
            format_band(self.reading_ease_level)
        );
        let _ = writeln!(
            out,
            "Flesch-Kincaid grade: {}{}",
            format_score(self.flesch_kincaid_grade),
            format_band(self.grade_band)
        );
        let _ = writeln!(
            out,
            "Gunning fog: {}{}",
            format_score(self.gunning_fog),
            format_band(self.fog_band)
        );
        let _ = writeln!(
            out,
            "Words: {}, sentences: {}, complex words: {}",
            self.word_count, self.sentence_count, self.complex_word_count
        );

        if let Some(sentences) = &self.sentences {
            let _ = writeln!(out);
            let _ = writeln!(out, "Sentences:");
            let _ = writeln!(out, "──────────");
            for sentence in sentences {
                let _ = writeln!(
                    out,
                    "{:>3}. [{:>6}] {}",
                    sentence.index + 1,
                    format_score(sentence.flesch_reading_ease),
                    sentence.text
                );
            }
        }
        out
    }
}

impl HumanOutput for FrequencyReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Total words: {}, unique words: {}, type-token ratio: {:.3}",
            self.total_words, self.unique_words, self.type_token_ratio
        );
        let width = self
            .words
            .iter()
            .map(|w| w.word.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &self.words {
            let _ = writeln!(
                out,
                "{:<width$}  {:>5}  {}",
                entry.word,
                entry.count,
                format_tags(&entry.tags)
            );
        }
        out
    }
}

impl HumanOutput for SentencesReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for (i, sentence) in self.sentences.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {sentence}", i + 1);
        }
        out
    }
}

impl HumanOutput for PhrasesReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for (i, hits) in self.lexicons.iter().enumerate() {
            if i > 0 {
                let _ = writeln!(out);
            }
            let _ = writeln!(
                out,
                "{}: {} match(es) in {} words",
                hits.lexicon, hits.total, self.word_count
            );
            for phrase in &hits.phrases {
                let _ = writeln!(out, "  {:>4}  {}", phrase.count, phrase.phrase);
            }
        }
        out
    }
}

impl HumanOutput for ScoreReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} score: {:.1} ({})",
            self.result.profile, self.result.score, self.result.label
        );
        for component in &self.result.components {
            let _ = writeln!(
                out,
                "  {:<24} value {:>8}  component {:.2} × {:.2}",
                component.metric.as_str(),
                format_score(component.value),
                component.component,
                component.weight
            );
        }
        let _ = writeln!(
            out,
            "Adverbs: {}, modifiers: {}, commas: {}, passive constructions: {}",
            self.style.adverb_count,
            self.style.modifier_count,
            self.style.comma_count,
            self.style.passive_count
        );
        out
    }
}

fn format_hint_tags(sentence: &SentenceHints) -> String {
    let mut tags = Vec::new();
    if sentence.long {
        tags.push("long");
    }
    if !sentence.passive.is_empty() {
        tags.push("passive");
    }
    if !sentence.weak.is_empty() {
        tags.push("weak");
    }
    if !sentence.suggestions.is_empty() {
        tags.push("rewrite");
    }
    if sentence.dialogue {
        tags.push("dialogue");
    }
    tags.join(", ")
}

impl HumanOutput for HintsReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Sentences: {}, long: {}, suggestions: {}",
            self.sentence_count, self.long_sentence_count, self.suggestion_count
        );
        let _ = writeln!(
            out,
            "Passive: {} hit(s) in {:.0}% of sentences",
            self.softening.passive_hits,
            self.softening.passive_coverage * 100.0
        );
        let _ = writeln!(
            out,
            "Weak verbs: {} hit(s) in {:.0}% of sentences",
            self.softening.weak_hits,
            self.softening.weak_coverage * 100.0
        );
        let _ = writeln!(out, "Softening: {}", self.softening.level);
        let _ = writeln!(
            out,
            "Dialogue: {}, narration: {} ({:.0}% dialogue)",
            self.dialogue.dialogue_sentences,
            self.dialogue.narration_sentences,
            self.dialogue.dialogue_share * 100.0
        );

        for sentence in &self.sentences {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{:>3}. [{}] {}",
                sentence.index + 1,
                format_hint_tags(sentence),
                sentence.text
            );
            if sentence.long {
                let _ = writeln!(
                    out,
                    "     long sentence ({} words), consider splitting it",
                    sentence.word_count
                );
            }
            if !sentence.passive.is_empty() {
                let _ = writeln!(out, "     passive: {}", sentence.passive.join(", "));
            }
            if !sentence.weak.is_empty() {
                let _ = writeln!(out, "     weak: {}", sentence.weak.join(", "));
            }
            for suggestion in &sentence.suggestions {
                let _ = writeln!(
                    out,
                    "     {}: try \"{}\" instead of \"{}\"",
                    suggestion.label, suggestion.replacement, suggestion.phrase
                );
            }
        }
        out
    }
}

//! Command implementations for the Quill CLI.

use std::io::{self, Read};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalysisConfig;
use crate::engine::TextEngine;
use crate::error::Result;
use crate::stats::frequency::sorted_frequencies;

/// Execute a CLI command.
pub fn execute_command(args: QuillArgs) -> Result<()> {
    let engine = build_engine(&args)?;
    let text = read_input(args.command.input(), io::stdin().lock())?;
    debug!("analysing {} bytes of text", text.len());

    match &args.command {
        Command::Stats(_) => {
            output_result("Text statistics", &stats_report(&engine, &text), &args)
        }
        Command::Readability(readability_args) => output_result(
            "Readability",
            &readability_report(&engine, &text, readability_args.breakdown),
            &args,
        ),
        Command::Frequencies(frequency_args) => output_result(
            "Word frequencies",
            &frequency_report(
                &engine,
                &text,
                frequency_args.top,
                frequency_args.skip_stopwords,
            ),
            &args,
        ),
        Command::Sentences(_) => {
            output_result("Sentences", &sentences_report(&engine, &text), &args)
        }
        Command::Phrases(phrase_args) => output_result(
            "Phrases",
            &phrases_report(&engine, &text, phrase_args.lexicon.as_deref())?,
            &args,
        ),
        Command::Score(score_args) => output_result(
            "Style score",
            &score_report(&engine, &text, &score_args.profile)?,
            &args,
        ),
        Command::Hints(hints_args) => output_result(
            "Editing hints",
            &hints_report(&engine, &text, hints_args.all),
            &args,
        ),
    }
}

/// Build the engine, from the configuration file when one is given.
fn build_engine(args: &QuillArgs) -> Result<TextEngine> {
    match &args.config {
        Some(path) => {
            info!("using analysis config {}", path.display());
            TextEngine::with_config(AnalysisConfig::from_json_file(path)?)
        }
        None => Ok(TextEngine::new()),
    }
}

/// Take the text from `--text`, or read all of `reader` when it is absent.
pub fn read_input<R: Read>(input: &InputArgs, mut reader: R) -> Result<String> {
    match &input.text {
        Some(text) => Ok(text.clone()),
        None => {
            let mut buffer = String::new();
            reader.read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

pub fn stats_report(engine: &TextEngine, text: &str) -> StatsReport {
    let stats = engine.compute_text_stats(text);
    StatsReport {
        word_count: stats.word_count,
        sentence_count: stats.sentence_count,
        syllable_count: stats.syllable_count,
        unique_words: stats.frequencies.unique_words(),
        avg_sentence_length: stats.avg_sentence_length,
        avg_syllables_per_word: stats.avg_syllables_per_word,
        lexical_density: stats.lexical_density,
        type_token_ratio: stats.type_token_ratio(),
    }
}

pub fn readability_report(engine: &TextEngine, text: &str, breakdown: bool) -> ReadabilityReport {
    let readability = engine.compute_readability(text);
    ReadabilityReport {
        word_count: readability.stats.word_count,
        sentence_count: readability.stats.sentence_count,
        complex_word_count: readability.complex_word_count,
        flesch_reading_ease: readability.flesch_reading_ease,
        reading_ease_level: readability.reading_ease_level(),
        flesch_kincaid_grade: readability.flesch_kincaid_grade,
        grade_band: readability.grade_band(),
        gunning_fog: readability.gunning_fog,
        fog_band: readability.fog_band(),
        sentences: breakdown.then(|| engine.sentence_breakdown(text)),
    }
}

pub fn frequency_report(
    engine: &TextEngine,
    text: &str,
    top: Option<usize>,
    skip_stopwords: bool,
) -> FrequencyReport {
    let stats = engine.compute_text_stats(text);
    let words = sorted_frequencies(&stats.frequencies)
        .into_iter()
        .filter(|(word, _)| !(skip_stopwords && engine.is_stopword(word)))
        .take(top.unwrap_or(usize::MAX))
        .map(|(word, count)| WordFrequency {
            tags: engine.classify_word(&word),
            word,
            count,
        })
        .collect();

    FrequencyReport {
        total_words: stats.word_count,
        unique_words: stats.frequencies.unique_words(),
        type_token_ratio: stats.type_token_ratio(),
        words,
    }
}

pub fn sentences_report(engine: &TextEngine, text: &str) -> SentencesReport {
    let sentences = engine.tokenize_text(text).sentences;
    SentencesReport {
        sentence_count: sentences.len(),
        sentences,
    }
}

pub fn phrases_report(
    engine: &TextEngine,
    text: &str,
    lexicon: Option<&str>,
) -> Result<PhrasesReport> {
    let lexicons = match lexicon {
        Some(name) => vec![engine.lexicon(name)?],
        None => engine.lexicons().iter().collect(),
    };

    let words = engine.words(text);
    let lexicons = lexicons
        .into_iter()
        .map(|lexicon| {
            let phrases = lexicon.count(&words);
            LexiconHits {
                lexicon: lexicon.name().to_string(),
                total: phrases.iter().map(|p| p.count).sum(),
                phrases,
            }
        })
        .collect();

    Ok(PhrasesReport {
        word_count: words.len(),
        lexicons,
    })
}

pub fn score_report(engine: &TextEngine, text: &str, profile: &str) -> Result<ScoreReport> {
    Ok(ScoreReport {
        result: engine.score(text, profile)?,
        style: engine.style_metrics(text),
    })
}

pub fn hints_report(engine: &TextEngine, text: &str, all: bool) -> HintsReport {
    let hints = engine.editing_hints(text);
    let sentence_count = hints.sentences.len();
    let sentences = hints
        .sentences
        .into_iter()
        .filter(|sentence| all || sentence.is_flagged())
        .collect();

    HintsReport {
        sentence_count,
        long_sentence_count: hints.long_sentence_count,
        suggestion_count: hints.suggestion_count,
        softening: hints.softening,
        dialogue: hints.dialogue,
        sentences,
    }
}

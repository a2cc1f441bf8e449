//! Command line argument parsing for the Quill CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Quill - heuristic readability and style analysis for English prose
#[derive(Parser, Debug, Clone)]
#[command(name = "quill")]
#[command(about = "Readability, frequency and style analysis for English prose")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct QuillArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Analysis configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "QUILL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl QuillArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Word, sentence and syllable counts
    Stats(StatsArgs),

    /// Readability scores
    Readability(ReadabilityArgs),

    /// Word frequencies, most frequent first
    Frequencies(FrequenciesArgs),

    /// Split text into sentences
    Sentences(SentencesArgs),

    /// Count lexicon phrases (crutch words, glue words, weak verbs)
    Phrases(PhrasesArgs),

    /// Score text with a weighted style profile
    Score(ScoreArgs),

    /// Editing hints: long sentences, wordy phrases, passive voice, dialogue
    Hints(HintsArgs),
}

/// Where the text to analyse comes from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to analyse (reads standard input when omitted)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for text statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for readability scores
#[derive(Parser, Debug, Clone)]
pub struct ReadabilityArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Include a per-sentence reading ease breakdown
    #[arg(short, long)]
    pub breakdown: bool,
}

/// Arguments for word frequencies
#[derive(Parser, Debug, Clone)]
pub struct FrequenciesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only show the N most frequent words
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Leave stopwords out of the listing
    #[arg(long)]
    pub skip_stopwords: bool,
}

/// Arguments for sentence splitting
#[derive(Parser, Debug, Clone)]
pub struct SentencesArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for phrase counting
#[derive(Parser, Debug, Clone)]
pub struct PhrasesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Lexicon to count (all configured lexicons when omitted)
    #[arg(short, long, value_name = "NAME")]
    pub lexicon: Option<String>,
}

/// Arguments for style scoring
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Scoring profile name
    #[arg(short, long, value_name = "NAME", default_value = "minimalism")]
    pub profile: String,
}

/// Arguments for editing hints
#[derive(Parser, Debug, Clone)]
pub struct HintsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// List every sentence, not only flagged ones
    #[arg(short, long)]
    pub all: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

impl Command {
    /// The text input shared by every command.
    pub fn input(&self) -> &InputArgs {
        match self {
            Command::Stats(args) => &args.input,
            Command::Readability(args) => &args.input,
            Command::Frequencies(args) => &args.input,
            Command::Sentences(args) => &args.input,
            Command::Phrases(args) => &args.input,
            Command::Score(args) => &args.input,
            Command::Hints(args) => &args.input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_readability_command() {
        let args = QuillArgs::try_parse_from([
            "quill",
            "readability",
            "--text",
            "The dog ran.",
            "--breakdown",
        ])
        .unwrap();

        if let Command::Readability(readability_args) = args.command {
            assert_eq!(readability_args.input.text.as_deref(), Some("The dog ran."));
            assert!(readability_args.breakdown);
        } else {
            panic!("Expected Readability command");
        }
    }

    #[test]
    fn test_frequencies_command() {
        let args =
            QuillArgs::try_parse_from(["quill", "frequencies", "--top", "5", "--skip-stopwords"])
                .unwrap();

        if let Command::Frequencies(frequency_args) = args.command {
            assert_eq!(frequency_args.top, Some(5));
            assert!(frequency_args.skip_stopwords);
            assert!(frequency_args.input.text.is_none());
        } else {
            panic!("Expected Frequencies command");
        }
    }

    #[test]
    fn test_score_defaults_to_minimalism() {
        let args = QuillArgs::try_parse_from(["quill", "score", "-t", "Hi."]).unwrap();

        if let Command::Score(score_args) = &args.command {
            assert_eq!(score_args.profile, "minimalism");
        } else {
            panic!("Expected Score command");
        }
        assert_eq!(args.command.input().text.as_deref(), Some("Hi."));
    }

    #[test]
    fn test_phrases_lexicon() {
        let args = QuillArgs::try_parse_from(["quill", "phrases", "--lexicon", "weak"]).unwrap();

        if let Command::Phrases(phrase_args) = args.command {
            assert_eq!(phrase_args.lexicon.as_deref(), Some("weak"));
        } else {
            panic!("Expected Phrases command");
        }
    }

    #[test]
    fn test_hints_command() {
        let args = QuillArgs::try_parse_from(["quill", "hints", "--all", "-t", "Go."]).unwrap();

        if let Command::Hints(hints_args) = &args.command {
            assert!(hints_args.all);
        } else {
            panic!("Expected Hints command");
        }
        assert_eq!(args.command.input().text.as_deref(), Some("Go."));
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = QuillArgs::try_parse_from(["quill", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = QuillArgs::try_parse_from(["quill", "-v", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = QuillArgs::try_parse_from(["quill", "-vv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = QuillArgs::try_parse_from(["quill", "--quiet", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = QuillArgs::try_parse_from([
            "quill",
            "stats",
            "--format",
            "json",
            "--pretty",
            "--config",
            "quill.json",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.config, Some(PathBuf::from("quill.json")));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(QuillArgs::try_parse_from(["quill", "--format", "yaml", "stats"]).is_err());
    }
}

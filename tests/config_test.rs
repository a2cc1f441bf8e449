use std::io::Write;

use quill::config::AnalysisConfig;
use quill::engine::{TextEngine, WordTag};
use quill::error::QuillError;
use quill::lexicon::LexiconConfig;
use quill::scoring::{Metric, ScoreComponent, ScoringProfile, Transform};
use tempfile::NamedTempFile;

const CONFIG: &str = r#"{
    "stopwords": ["the", "a", "of"],
    "syllable_exceptions": { "fire": 2 },
    "lexicons": [
        { "name": "crutch", "phrases": ["honestly", "to be fair"] },
        { "name": "sensory", "phrases": ["smoke", "bitter"] }
    ],
    "profiles": [
        {
            "name": "dense",
            "components": [
                { "metric": "lexical_density", "weight": 1.0, "transform": { "kind": "identity" } }
            ],
            "bands": [
                { "min_score": 50.0, "label": "Dense" },
                { "min_score": 80.0, "label": "Packed" }
            ],
            "fallback_label": "Airy"
        }
    ]
}"#;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_engine_from_config_file() {
    let file = write_config(CONFIG);
    let config = AnalysisConfig::from_json_file(file.path()).unwrap();
    let engine = TextEngine::with_config(config).unwrap();

    assert!(engine.is_stopword("THE"));
    assert!(!engine.is_stopword("was"));
    assert_eq!(engine.count_syllables("fire"), 2);

    let hits = engine
        .find_phrases("To be fair, the smoke was bitter.", "sensory")
        .unwrap();
    assert_eq!(hits.len(), 2);

    let crutch = engine
        .count_phrases("Honestly, to be fair, it was fine.", "crutch")
        .unwrap();
    assert_eq!(crutch.len(), 2);

    // Built-in lexicons are replaced, not merged.
    assert!(engine.find_phrases("text", "weak").is_err());
    assert_eq!(engine.classify_word("honestly"), vec![WordTag::Crutch]);
}

#[test]
fn test_custom_profile_bands() {
    let config = AnalysisConfig::from_json_str(CONFIG).unwrap();
    let engine = TextEngine::with_config(config).unwrap();

    // Every word is a content word.
    let packed = engine.score("Crimson lanterns flicker.", "dense").unwrap();
    assert_eq!(packed.score, 100.0);
    assert_eq!(packed.label, "Packed");

    // the, of, a are stopwords: 3 of 6 words carry content.
    let dense = engine.score("The edge of a dark wood.", "dense").unwrap();
    assert!((dense.score - 50.0).abs() < 1e-9);
    assert_eq!(dense.label, "Dense");

    let airy = engine.score("", "dense").unwrap();
    assert_eq!(airy.label, "Airy");

    assert!(engine.score("text", "minimalism").is_err());
}

#[test]
fn test_partial_config_keeps_defaults() {
    let file = write_config(r#"{ "syllable_exceptions": { "every": 2 } }"#);
    let config = AnalysisConfig::from_json_file(file.path()).unwrap();

    assert_eq!(config.stopwords.len(), 80);
    assert_eq!(config.lexicons, LexiconConfig::defaults());

    let engine = TextEngine::with_config(config).unwrap();
    assert_eq!(engine.count_syllables("every"), 2);
    assert!(engine.score("Fine.", "minimalism").is_ok());
}

#[test]
fn test_invalid_config_files() {
    let malformed = write_config("{ \"stopwords\": [");
    assert!(matches!(
        AnalysisConfig::from_json_file(malformed.path()),
        Err(QuillError::Json(_))
    ));

    let empty_phrase = write_config(r#"{ "lexicons": [ { "name": "x", "phrases": ["!!"] } ] }"#);
    assert!(matches!(
        AnalysisConfig::from_json_file(empty_phrase.path()),
        Err(QuillError::Config(_))
    ));

    let unknown_metric = write_config(
        r#"{ "profiles": [ { "name": "p", "components": [
            { "metric": "vibes", "weight": 1.0, "transform": { "kind": "identity" } }
        ] } ] }"#,
    );
    assert!(AnalysisConfig::from_json_file(unknown_metric.path()).is_err());
}

#[test]
fn test_unreadable_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        AnalysisConfig::from_json_file(&missing),
        Err(QuillError::Io(_))
    ));
}

#[test]
fn test_profile_built_in_code() {
    let profile = ScoringProfile::new("readable")
        .add_component(ScoreComponent::new(
            Metric::FleschReadingEase,
            1.0,
            Transform::Ratio { target: 100.0 },
        ))
        .add_band(60.0, "Plain")
        .with_fallback_label("Hard");

    let config = AnalysisConfig {
        profiles: vec![profile],
        ..AnalysisConfig::default()
    };
    let engine = TextEngine::with_config(config).unwrap();

    let easy = engine.score("The cat sat. The dog ran.", "readable").unwrap();
    assert_eq!(easy.label, "Plain");

    // No words means no reading ease, and no fallback was configured.
    let empty = engine.score("", "readable").unwrap();
    assert_eq!(empty.score, 0.0);
    assert_eq!(empty.components[0].value, None);
}

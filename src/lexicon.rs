//! Phrase lexicons: crutch words, glue words, weak verb phrases.
//!
//! A lexicon is a named list of words or multi-word phrases. Phrases are
//! normalized with the word tokenizer, so "Kind-of" and "kind of" are the same
//! phrase, and matching happens on whole tokens only ("just" never matches
//! inside "justice").
//!
//! Each phrase is counted independently; overlapping phrases ("sort of" and
//! "of") both match.
//!
//! # Examples
//!
//! ```
//! use quill::lexicon::PhraseLexicon;
//!
//! let lexicon = PhraseLexicon::new("hedges", ["kind of", "maybe"]).unwrap();
//! let words = ["it", "was", "kind", "of", "late", "maybe"];
//! let hits = lexicon.find(&words);
//!
//! assert_eq!(hits.len(), 2);
//! assert_eq!(hits[0].phrase, "kind of");
//! assert_eq!(hits[0].word_index, 2);
//! ```

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::{QuillError, Result};

/// Built-in lexicon of soft words writers lean on.
pub const CRUTCH_WORDS: &[&str] = &[
    "just", "really", "very", "actually", "literally", "maybe", "kind of", "sort of", "honestly",
    "probably", "perhaps", "like", "definitely", "basically", "pretty", "quite", "rather",
];

/// Built-in lexicon of words that pad sentences without carrying meaning.
pub const GLUE_WORDS: &[&str] = &[
    "very", "really", "just", "that", "sort of", "kind of", "maybe", "perhaps", "quite", "rather",
    "seems", "seemed", "actually", "literally", "basically", "probably", "somewhat", "somehow",
];

/// Built-in lexicon of weak verb constructions.
pub const WEAK_PHRASES: &[&str] = &[
    "seems to",
    "seemed to",
    "started to",
    "begin to",
    "began to",
    "decided to",
    "tried to",
    "attempted to",
];

/// Serializable description of a lexicon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub name: String,
    pub phrases: Vec<String>,
}

impl LexiconConfig {
    pub fn new<S: Into<String>>(name: S, phrases: &[&str]) -> Self {
        LexiconConfig {
            name: name.into(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// The crutch, glue and weak lexicons.
    pub fn defaults() -> Vec<LexiconConfig> {
        vec![
            LexiconConfig::new("crutch", CRUTCH_WORDS),
            LexiconConfig::new("glue", GLUE_WORDS),
            LexiconConfig::new("weak", WEAK_PHRASES),
        ]
    }
}

/// One phrase occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhraseMatch {
    /// The normalized phrase.
    pub phrase: String,
    /// Index of the phrase's first word in the word sequence.
    pub word_index: usize,
    /// Number of words the phrase spans.
    pub word_len: usize,
}

/// Per-phrase totals for a lexicon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: usize,
}

/// A compiled phrase lexicon.
#[derive(Clone, Debug)]
pub struct PhraseLexicon {
    name: String,
    phrases: Vec<String>,
    word_lens: Vec<usize>,
    matcher: AhoCorasick,
}

impl PhraseLexicon {
    /// Compile a lexicon.
    ///
    /// Phrases are normalized with the word tokenizer and de-duplicated.
    /// Phrases that normalize to nothing are rejected.
    pub fn new<N, I, S>(name: N, phrases: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(QuillError::config("lexicon name must not be empty"));
        }

        let tokenizer = WordTokenizer::new();
        let mut normalized: Vec<String> = Vec::new();
        let mut word_lens = Vec::new();

        for phrase in phrases {
            let words = tokenizer.words(phrase.as_ref());
            if words.is_empty() {
                return Err(QuillError::config(format!(
                    "lexicon '{name}' has a phrase with no words: {:?}",
                    phrase.as_ref()
                )));
            }
            let joined = words.join(" ");
            if !normalized.contains(&joined) {
                word_lens.push(words.len());
                normalized.push(joined);
            }
        }

        // Padding with spaces anchors every pattern on token boundaries.
        let patterns: Vec<String> = normalized.iter().map(|p| format!(" {p} ")).collect();
        let matcher = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| QuillError::config(format!("invalid lexicon '{name}': {e}")))?;

        trace!("compiled lexicon '{}' with {} phrases", name, normalized.len());

        Ok(PhraseLexicon {
            name,
            phrases: normalized,
            word_lens,
            matcher,
        })
    }

    /// Compile a lexicon from its serializable description.
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        Self::new(config.name.clone(), &config.phrases)
    }

    /// Lexicon name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized phrases in declaration order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Check if a single normalized word is one of the phrases.
    pub fn contains(&self, word: &str) -> bool {
        self.phrases.iter().any(|p| p == word)
    }

    /// Find every phrase occurrence in a word sequence, ordered by position.
    pub fn find<S: AsRef<str>>(&self, words: &[S]) -> Vec<PhraseMatch> {
        if words.is_empty() || self.phrases.is_empty() {
            return Vec::new();
        }

        // Byte offset in the padded haystack of the space before each word.
        let mut haystack = String::from(" ");
        let mut starts = Vec::with_capacity(words.len());
        for word in words {
            starts.push(haystack.len() - 1);
            haystack.push_str(word.as_ref());
            haystack.push(' ');
        }

        let mut matches: Vec<PhraseMatch> = self
            .matcher
            .find_overlapping_iter(&haystack)
            .filter_map(|mat| {
                let pattern = mat.pattern().as_usize();
                let word_index = starts.binary_search(&mat.start()).ok()?;
                Some(PhraseMatch {
                    phrase: self.phrases[pattern].clone(),
                    word_index,
                    word_len: self.word_lens[pattern],
                })
            })
            .collect();

        matches.sort_by_key(|m| (m.word_index, m.word_len));
        matches
    }

    /// Total occurrences per phrase, most frequent first, zero counts omitted.
    pub fn count<S: AsRef<str>>(&self, words: &[S]) -> Vec<PhraseCount> {
        let mut counts = vec![0usize; self.phrases.len()];
        for mat in self.find(words) {
            if let Some(index) = self.phrases.iter().position(|p| *p == mat.phrase) {
                counts[index] += 1;
            }
        }

        let mut totals: Vec<PhraseCount> = self
            .phrases
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(phrase, count)| PhraseCount {
                phrase: phrase.clone(),
                count,
            })
            .collect();
        totals.sort_by(|a, b| b.count.cmp(&a.count));
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        WordTokenizer::new().words(text)
    }

    #[test]
    fn test_single_and_multi_word_phrases() {
        let lexicon = PhraseLexicon::new("crutch", CRUTCH_WORDS).unwrap();
        let hits = lexicon.find(&words("I just kind of really liked it"));

        let found: Vec<&str> = hits.iter().map(|m| m.phrase.as_str()).collect();
        assert_eq!(found, vec!["just", "kind of", "really"]);
        assert_eq!(hits[1].word_index, 2);
        assert_eq!(hits[1].word_len, 2);
    }

    #[test]
    fn test_whole_tokens_only() {
        let lexicon = PhraseLexicon::new("crutch", ["just", "like"]).unwrap();
        assert!(lexicon.find(&words("Justice is likely unjust")).is_empty());
    }

    #[test]
    fn test_adjacent_repeats_are_all_found() {
        let lexicon = PhraseLexicon::new("crutch", ["very"]).unwrap();
        let hits = lexicon.find(&words("very very very good"));
        let indices: Vec<usize> = hits.iter().map(|m| m.word_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_overlapping_phrases_both_count() {
        let lexicon = PhraseLexicon::new("mixed", ["sort of", "of"]).unwrap();
        let hits = lexicon.find(&words("sort of odd"));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_phrases_are_normalized_and_deduplicated() {
        let lexicon = PhraseLexicon::new("glue", ["Kind-Of", "kind of", "perhaps", "perhaps"]).unwrap();
        assert_eq!(lexicon.phrases(), &["kind of".to_string(), "perhaps".to_string()]);
        assert!(lexicon.contains("perhaps"));
    }

    #[test]
    fn test_count_totals() {
        let lexicon = PhraseLexicon::new("weak", WEAK_PHRASES).unwrap();
        let totals = lexicon.count(&words(
            "She tried to run. He tried to hide. It seemed to rain.",
        ));

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].phrase, "tried to");
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].phrase, "seemed to");
    }

    #[test]
    fn test_empty_input() {
        let lexicon = PhraseLexicon::new("crutch", CRUTCH_WORDS).unwrap();
        assert!(lexicon.find::<String>(&[]).is_empty());
        assert!(lexicon.count::<String>(&[]).is_empty());
    }

    #[test]
    fn test_invalid_lexicons() {
        assert!(PhraseLexicon::new("", ["just"]).is_err());
        assert!(PhraseLexicon::new("symbols", ["--"]).is_err());
    }
}

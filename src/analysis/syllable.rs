//! Heuristic English syllable counting.
//!
//! The counter is not phonetically exact. It follows the rule of thumb used
//! by most readability tools:
//!
//! 1. Keep only ASCII letters (lowercased). Nothing left means 0 syllables.
//! 2. Words of three letters or fewer have one syllable.
//! 3. Drop one silent suffix: `es` or `e` after a consonant other than `l`,
//!    or a trailing `ed`. Drop a leading `y`.
//! 4. Count maximal runs of `a e i o u y`, with a floor of one.
//!
//! # Examples
//!
//! ```
//! use quill::analysis::syllable::SyllableCounter;
//!
//! let counter = SyllableCounter::new();
//! assert_eq!(counter.count("the"), 1);
//! assert_eq!(counter.count("reading"), 2);
//! assert_eq!(counter.count("42"), 0);
//! ```

use std::collections::HashMap;

/// Words the heuristic gets wrong often enough to special-case.
const ENGLISH_EXCEPTIONS: &[(&str, usize)] = &[
    ("the", 1),
    ("are", 1),
    ("were", 1),
    ("you", 1),
    ("your", 1),
    ("their", 1),
    ("they", 1),
    ("some", 1),
    ("one", 1),
    ("done", 1),
    ("people", 2),
    ("because", 2),
    ("business", 2),
    ("science", 2),
];

#[inline]
fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

/// A syllable counter with an optional table of exact counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SyllableCounter {
    exceptions: HashMap<String, usize>,
}

impl SyllableCounter {
    /// Create a counter that relies on the heuristic alone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter with a custom exception table.
    ///
    /// Keys are matched after cleaning, so they should be lowercase ASCII.
    pub fn with_exceptions(exceptions: HashMap<String, usize>) -> Self {
        let exceptions = exceptions
            .into_iter()
            .map(|(word, count)| (word.to_ascii_lowercase(), count))
            .collect();
        SyllableCounter { exceptions }
    }

    /// Create a counter with the built-in English exception table.
    pub fn with_english_exceptions() -> Self {
        Self::with_exceptions(
            ENGLISH_EXCEPTIONS
                .iter()
                .map(|&(word, count)| (word.to_string(), count))
                .collect(),
        )
    }

    /// Get the exception table.
    pub fn exceptions(&self) -> &HashMap<String, usize> {
        &self.exceptions
    }

    /// Count the syllables in a single word.
    ///
    /// Returns 0 only when the word contains no ASCII letters.
    pub fn count(&self, word: &str) -> usize {
        let cleaned: String = word
            .chars()
            .flat_map(char::to_lowercase)
            .filter(char::is_ascii_lowercase)
            .collect();

        if cleaned.is_empty() {
            return 0;
        }
        if let Some(&count) = self.exceptions.get(&cleaned) {
            return count;
        }
        if cleaned.len() <= 3 {
            return 1;
        }

        let stem = strip_leading_y(strip_silent_suffix(cleaned.as_bytes()));

        let mut runs = 0;
        let mut in_run = false;
        for &b in stem {
            let vowel = is_vowel(b);
            if vowel && !in_run {
                runs += 1;
            }
            in_run = vowel;
        }

        runs.max(1)
    }
}

/// Drop `[^laeiouy]es`, `ed` or `[^laeiouy]e` at the end of the word.
fn strip_silent_suffix(word: &[u8]) -> &[u8] {
    let len = word.len();
    let keeps_e = |b: u8| b == b'l' || is_vowel(b);

    if word.ends_with(b"es") && len >= 3 && !keeps_e(word[len - 3]) {
        &word[..len - 3]
    } else if word.ends_with(b"ed") {
        &word[..len - 2]
    } else if word.ends_with(b"e") && len >= 2 && !keeps_e(word[len - 2]) {
        &word[..len - 2]
    } else {
        word
    }
}

fn strip_leading_y(word: &[u8]) -> &[u8] {
    word.strip_prefix(b"y").unwrap_or(word)
}

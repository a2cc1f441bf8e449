//! Word frequency tables.
//!
//! A [`FrequencyTable`] counts tokens in a single pass and remembers the order
//! in which words first appeared. Sorting by count is stable over that order,
//! so words with equal counts come out in first-appearance order.

use ahash::AHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Occurrence counts keyed by word.
///
/// # Examples
///
/// ```
/// use quill::stats::frequency::FrequencyTable;
///
/// let table = FrequencyTable::from_words(["the", "cat", "the"]);
/// assert_eq!(table.get("the"), 2);
/// assert_eq!(table.get("dog"), 0);
/// assert_eq!(table.unique_words(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
    counts: AHashMap<String, usize>,
    order: Vec<String>,
    total: usize,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a sequence of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for word in words {
            table.add(word.as_ref());
        }
        table
    }

    /// Count one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        self.total += 1;
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_string(), 1);
            self.order.push(word.to_string());
        }
    }

    /// Occurrences of `word` (0 if never seen).
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn unique_words(&self) -> usize {
        self.order.len()
    }

    /// Number of counted tokens.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Distinct words over total tokens, 0 for an empty table.
    pub fn type_token_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.unique_words() as f64 / self.total as f64
        }
    }

    /// Iterate `(word, count)` in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|word| (word.as_str(), self.counts[word]))
    }

    /// `(word, count)` pairs by descending count, ties in first-appearance order.
    pub fn sorted(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// The `n` most frequent words.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries = self.sorted();
        entries.truncate(n);
        entries
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (word, count) in self.iter() {
            map.serialize_entry(word, &count)?;
        }
        map.end()
    }
}

/// Order a frequency table by descending count.
///
/// Ties keep first-appearance order.
pub fn sorted_frequencies(table: &FrequencyTable) -> Vec<(String, usize)> {
    table.sorted()
}

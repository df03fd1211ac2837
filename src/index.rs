//! The anagram index.
//!
//! [`AnagramIndex`] maps every [`CanonicalKey`] to the words of the source
//! that share it, in the order they were read. Duplicates are kept. The
//! index is built in one pass and never changes afterwards, so a built index
//! can be shared across threads and queried without locking.
//!
//! # Examples
//!
//! ```
//! use anagrams::index::AnagramIndex;
//!
//! let index = AnagramIndex::from_words(["dictionary", "indicatory", "FooBar", "foobar"]);
//!
//! assert_eq!(
//!     index.get_anagrams("dictionary"),
//!     Some(&["dictionary".to_string(), "indicatory".to_string()][..])
//! );
//! assert_eq!(index.get_anagrams("foobaR").map(|class| class.len()), Some(2));
//! assert_eq!(index.get_anagrams("fizzbang"), None);
//! ```

use std::path::Path;

use ahash::AHashMap;
use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::canonical::{CanonicalKey, canonical_key};
use crate::error::Result;
use crate::source::WordSource;

/// Summary numbers for a built index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of words read, duplicates included.
    pub words: usize,
    /// Number of distinct anagram classes.
    pub classes: usize,
    /// Size of the largest class.
    pub largest_class: usize,
    /// Classes holding exactly one word.
    pub singleton_classes: usize,
}

/// Accumulates words before freezing them into an [`AnagramIndex`].
#[derive(Debug, Default)]
pub struct AnagramIndexBuilder {
    classes: AHashMap<CanonicalKey, Vec<String>>,
    word_count: usize,
}

impl AnagramIndexBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder sized for roughly `capacity` classes.
    pub fn with_capacity(capacity: usize) -> Self {
        AnagramIndexBuilder {
            classes: AHashMap::with_capacity(capacity),
            word_count: 0,
        }
    }

    /// Add one raw line. A trailing `\n`, `\r\n` or `\r` is stripped before the
    /// word is stored.
    pub fn add_word(&mut self, line: &str) -> &mut Self {
        let word = strip_terminator(line);
        self.classes
            .entry(canonical_key(word))
            .or_default()
            .push(word.to_string());
        self.word_count += 1;
        self
    }

    /// Add every line of an iterator.
    pub fn add_words<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.add_word(line.as_ref());
        }
        self
    }

    /// Freeze the accumulated words into an index.
    pub fn build(self) -> AnagramIndex {
        info!(
            "Built anagram index: {} words in {} classes",
            self.word_count,
            self.classes.len()
        );

        AnagramIndex {
            classes: self.classes,
            word_count: self.word_count,
        }
    }
}

/// An immutable mapping from canonical key to the words sharing it.
#[derive(Debug, Clone)]
pub struct AnagramIndex {
    classes: AHashMap<CanonicalKey, Vec<String>>,
    word_count: usize,
}

impl AnagramIndex {
    /// Load a word list from `path` (gzip or plain text) and build the index.
    ///
    /// # Errors
    ///
    /// Fails with [`AnagramError::Format`](crate::error::AnagramError::Format)
    /// when the file is neither gzip nor UTF-8 text, and with
    /// [`AnagramError::Io`](crate::error::AnagramError::Io) when it cannot be read.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = WordSource::open(path)?;
        Ok(Self::from_source(&source))
    }

    /// Build the index from an already decoded source.
    pub fn from_source(source: &WordSource) -> Self {
        let mut builder = AnagramIndexBuilder::new();
        builder.add_words(source.words());
        builder.build()
    }

    /// Build the index from a sequence of lines.
    pub fn from_words<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = AnagramIndexBuilder::new();
        builder.add_words(lines);
        builder.build()
    }

    /// Return every known word in the anagram class of `word`.
    ///
    /// `word` itself does not have to be in the index. Returns `None` when no
    /// word of the source shares its canonical key.
    pub fn get_anagrams(&self, word: &str) -> Option<&[String]> {
        self.class_of(&canonical_key(word))
    }

    /// Look up a class by its key.
    pub fn class_of(&self, key: &CanonicalKey) -> Option<&[String]> {
        self.classes.get(key).map(Vec::as_slice)
    }

    /// Check whether `word` has a class in the index.
    pub fn contains_class(&self, word: &str) -> bool {
        self.classes.contains_key(&canonical_key(word))
    }

    /// Number of distinct anagram classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of words read, duplicates included.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Check if the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Iterate over all classes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, &[String])> {
        self.classes.iter().map(|(key, words)| (key, words.as_slice()))
    }

    /// Classes with at least `min_size` words, largest first, ties by key.
    pub fn classes_with_min_size(&self, min_size: usize) -> Vec<(&CanonicalKey, &[String])> {
        let mut classes: Vec<_> = self
            .iter()
            .filter(|(_, words)| words.len() >= min_size)
            .collect();
        classes.sort_by(|(a_key, a_words), (b_key, b_words)| {
            b_words.len().cmp(&a_words.len()).then_with(|| a_key.cmp(b_key))
        });
        classes
    }

    /// Compute summary statistics.
    pub fn stats(&self) -> IndexStats {
        let mut largest_class = 0;
        let mut singleton_classes = 0;
        for words in self.classes.values() {
            largest_class = largest_class.max(words.len());
            if words.len() == 1 {
                singleton_classes += 1;
            }
        }

        IndexStats {
            words: self.word_count,
            classes: self.classes.len(),
            largest_class,
            singleton_classes,
        }
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 7] = [
        "dictionary",
        "indicatory",
        "tea spoon",
        "teaspoon",
        "FooBar",
        "foobar",
        "A-and-R",
    ];

    fn sample_index() -> AnagramIndex {
        AnagramIndex::from_words(WORDS)
    }

    #[test]
    fn test_lookup_returns_class_in_source_order() {
        let index = sample_index();

        assert_eq!(
            index.get_anagrams("dictionary").unwrap(),
            ["dictionary", "indicatory"]
        );
        assert_eq!(index.get_anagrams("tea spoon").unwrap(), ["tea spoon", "teaspoon"]);
        assert_eq!(index.get_anagrams("foobaR").unwrap(), ["FooBar", "foobar"]);
        assert_eq!(index.get_anagrams("randa--").unwrap(), ["A-and-R"]);
    }

    #[test]
    fn test_missing_class_is_none() {
        let index = sample_index();
        assert!(index.get_anagrams("fizzbang").is_none());
        assert!(index.get_anagrams("randa").is_none());
        assert!(!index.contains_class("fizzbang"));
    }

    #[test]
    fn test_case_and_space_insensitive_lookup() {
        let index = sample_index();
        assert_eq!(index.get_anagrams("foobaR"), index.get_anagrams("FOOBAR"));
        assert_eq!(index.get_anagrams("tea spoon"), index.get_anagrams("teaspoon"));
        assert_eq!(index.get_anagrams("spoon tea"), index.get_anagrams("teaspoon"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let index = AnagramIndex::from_words(["stop", "pots", "stop"]);
        assert_eq!(index.get_anagrams("tops").unwrap(), ["stop", "pots", "stop"]);
        assert_eq!(index.word_count(), 3);
        assert_eq!(index.class_count(), 1);
    }

    #[test]
    fn test_line_terminators_are_stripped() {
        let index = AnagramIndex::from_words(["stop\n", "pots\r\n", "tops\r", "opts"]);
        assert_eq!(index.get_anagrams("spot").unwrap(), ["stop", "pots", "tops", "opts"]);
    }

    #[test]
    fn test_every_word_reachable_from_itself() {
        let index = sample_index();
        for word in WORDS {
            let class = index.get_anagrams(word).unwrap();
            assert!(class.iter().any(|w| w == word), "{word} not in its own class");
        }
    }

    #[test]
    fn test_builder() {
        let mut builder = AnagramIndexBuilder::with_capacity(4);
        builder.add_word("listen").add_word("silent");
        builder.add_words(vec!["enlist".to_string()]);
        let index = builder.build();

        assert_eq!(index.get_anagrams("tinsel").unwrap().len(), 3);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = AnagramIndex::from_words(Vec::<String>::new());
        assert!(index.is_empty());
        assert_eq!(index.class_count(), 0);
        assert!(index.get_anagrams("").is_none());
    }

    #[test]
    fn test_classes_with_min_size() {
        let index = AnagramIndex::from_words(["stop", "pots", "tops", "ab", "ba", "zebra"]);

        let classes = index.classes_with_min_size(2);
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].1, ["stop", "pots", "tops"]);
        assert_eq!(classes[1].0.as_str(), "ab");

        assert_eq!(index.classes_with_min_size(1).len(), 3);
        assert!(index.classes_with_min_size(4).is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = sample_index().stats();
        assert_eq!(
            stats,
            IndexStats {
                words: 7,
                classes: 4,
                largest_class: 2,
                singleton_classes: 1,
            }
        );
    }

    #[test]
    fn test_index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnagramIndex>();
    }
}

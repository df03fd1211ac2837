//! Canonical anagram keys.
//!
//! Two words are anagrams of each other when they produce the same
//! [`CanonicalKey`]. The key is built by dropping space characters,
//! lowercasing and sorting what is left by code point.
//!
//! Only U+0020 is removed. Tabs, hyphens and every other punctuation
//! character stay in the key, so `"A-and-R"` matches `"randa--"` but not
//! `"randa"`.
//!
//! # Examples
//!
//! ```
//! use anagrams::analysis::canonical::{are_anagrams, canonical_key};
//!
//! assert_eq!(canonical_key("Tea Spoon").as_str(), "aenoopst");
//! assert!(are_anagrams("dictionary", "indicatory"));
//! assert!(!are_anagrams("A-and-R", "randa"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier of an anagram class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the key.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Check if the key is empty (the key of an empty or all-space word).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the key and return the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CanonicalKey {
    fn from(word: &str) -> Self {
        canonical_key(word)
    }
}

/// Compute the canonical key of a word.
pub fn canonical_key(word: &str) -> CanonicalKey {
    let mut chars: Vec<char> = word
        .chars()
        .filter(|&c| c != ' ')
        .flat_map(char::to_lowercase)
        .collect();
    chars.sort_unstable();

    CanonicalKey(chars.into_iter().collect())
}

/// Check whether two words belong to the same anagram class.
pub fn are_anagrams(a: &str, b: &str) -> bool {
    canonical_key(a) == canonical_key(b)
}

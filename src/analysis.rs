//! Word analysis for anagram matching.
//!
//! This module turns a word into the canonical key that identifies its
//! anagram class.

pub mod canonical;

pub use canonical::{CanonicalKey, are_anagrams, canonical_key};

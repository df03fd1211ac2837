//! # anagrams
//!
//! Group the words of a word list into anagram classes and look up every
//! known anagram of a word.
//!
//! ## Features
//!
//! - Gzip-compressed or plain text word lists
//! - Case and space insensitive matching
//! - Immutable index, safe to share between threads
//!
//! ```no_run
//! use anagrams::AnagramIndex;
//!
//! let index = AnagramIndex::new("words.txt.gz")?;
//! if let Some(class) = index.get_anagrams("dictionary") {
//!     println!("{}", class.join(", "));
//! }
//! # Ok::<(), anagrams::error::AnagramError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod source;

pub use analysis::{CanonicalKey, canonical_key};
pub use error::{AnagramError, Result};
pub use index::{AnagramIndex, AnagramIndexBuilder, IndexStats};
pub use source::{SourceFormat, WordSource, Words};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

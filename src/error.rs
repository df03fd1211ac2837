//! Error types for the anagrams library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`AnagramError`] enum.
//!
//! # Examples
//!
//! ```
//! use anagrams::error::{AnagramError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AnagramError::unsupported_file("words.txt.bz2"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert_eq!(e.to_string(), "Unsupported file words.txt.bz2"),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for anagrams operations.
#[derive(Error, Debug)]
pub enum AnagramError {
    /// The word source is neither valid gzip nor decodable text.
    #[error("Unsupported file {}", path.display())]
    Format { path: PathBuf },

    /// I/O errors (missing file, permission denied, ...)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with AnagramError.
pub type Result<T> = std::result::Result<T, AnagramError>;

impl AnagramError {
    /// Create a new format error naming the offending source.
    pub fn unsupported_file<P: AsRef<Path>>(path: P) -> Self {
        AnagramError::Format {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        AnagramError::InvalidArgument(msg.into())
    }

    /// Whether this is the unsupported-format error raised while loading a source.
    pub fn is_format_error(&self) -> bool {
        matches!(self, AnagramError::Format { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = AnagramError::unsupported_file("words.txt.bz2");
        assert_eq!(error.to_string(), "Unsupported file words.txt.bz2");
        assert!(error.is_format_error());

        let error = AnagramError::invalid_argument("--min-size must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid argument: --min-size must be positive"
        );
        assert!(!error.is_format_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let anagram_error = AnagramError::from(io_error);

        match anagram_error {
            AnagramError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}

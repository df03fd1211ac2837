//! Word list sources.
//!
//! A word list is a newline-delimited text file, optionally gzip-compressed.
//! Gzip is tried first; content that does not carry the gzip header is read
//! as plain UTF-8 text. Anything that cannot be turned into text this way is
//! rejected with [`AnagramError::Format`].

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{AnagramError, Result};

/// Leading bytes of every gzip member.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Physical format a word source was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Gzip-compressed text.
    Gzip,
    /// Uncompressed text.
    PlainText,
}

impl SourceFormat {
    /// Detect the format from the first bytes of the content.
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(&GZIP_MAGIC) {
            SourceFormat::Gzip
        } else {
            SourceFormat::PlainText
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Gzip => write!(f, "gzip"),
            SourceFormat::PlainText => write!(f, "plain text"),
        }
    }
}

/// A fully loaded and decoded word list.
#[derive(Debug, Clone)]
pub struct WordSource {
    path: PathBuf,
    format: SourceFormat,
    byte_len: usize,
    text: String,
}

impl WordSource {
    /// Read a word list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`AnagramError::Io`] if the file cannot be opened or read and
    /// [`AnagramError::Format`] if its content is neither gzip nor UTF-8 text.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening word list: {}", path.display());

        let bytes = {
            let mut file = File::open(path)?;
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            bytes
        };

        Self::from_bytes(path, bytes)
    }

    /// Decode an in-memory word list. `path` only identifies the source in errors.
    pub fn from_bytes<P: AsRef<Path>>(path: P, bytes: Vec<u8>) -> Result<Self> {
        let path = path.as_ref();
        let byte_len = bytes.len();
        let format = SourceFormat::detect(&bytes);
        debug!("Detected {} content in {} ({} bytes)", format, path.display(), byte_len);

        let raw = match format {
            SourceFormat::Gzip => {
                let mut decoder = MultiGzDecoder::new(bytes.as_slice());
                let mut decompressed = Vec::new();
                decoder.read_to_end(&mut decompressed).map_err(|e| {
                    debug!("Gzip decompression of {} failed: {}", path.display(), e);
                    AnagramError::unsupported_file(path)
                })?;
                decompressed
            }
            SourceFormat::PlainText => bytes,
        };

        let text = String::from_utf8(raw).map_err(|e| {
            debug!("{} is not valid UTF-8: {}", path.display(), e);
            AnagramError::unsupported_file(path)
        })?;

        Ok(WordSource {
            path: path.to_path_buf(),
            format,
            byte_len,
            text,
        })
    }

    /// Iterate over the words, one per line, with the line terminator removed.
    ///
    /// `\n`, `\r\n` and a lone `\r` all terminate a line. No other
    /// normalization is applied.
    pub fn words(&self) -> Words<'_> {
        Words { rest: &self.text }
    }

    /// The path this source was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The detected physical format.
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Size of the content as stored, before decompression.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// The decoded text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Iterator over the lines of a [`WordSource`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        if rest.is_empty() {
            return None;
        }

        match rest.find(['\r', '\n']) {
            Some(end) => {
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &rest[end + terminator..];
                Some(&rest[..end])
            }
            None => {
                self.rest = "";
                Some(rest)
            }
        }
    }
}

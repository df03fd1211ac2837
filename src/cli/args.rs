//! Command line argument parsing for the anagrams CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// anagrams - find every anagram of a word in a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "anagrams")]
#[command(about = "Group a word list into anagram classes and look words up")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct AnagramsArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AnagramsArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the anagrams of one or more words
    Lookup(LookupArgs),

    /// List anagram classes found in the word list
    Groups(GroupsArgs),

    /// Show word list statistics
    Stats(StatsArgs),
}

/// Where the word list comes from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Word list, one word per line, plain text or gzip
    #[arg(short = 'w', long = "words", value_name = "WORDS_FILE", env = "ANAGRAMS_WORDS")]
    pub words_file: PathBuf,
}

/// Arguments for looking words up
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for listing anagram classes
#[derive(Parser, Debug, Clone)]
pub struct GroupsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only list classes with at least this many words
    #[arg(short, long, default_value = "2")]
    pub min_size: usize,

    /// Maximum number of classes to list
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for word list statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup() {
        let args = AnagramsArgs::try_parse_from([
            "anagrams", "lookup", "--words", "words.txt", "dictionary", "tea spoon",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.output_format, OutputFormat::Human);
        match args.command {
            Command::Lookup(lookup) => {
                assert_eq!(lookup.source.words_file, PathBuf::from("words.txt"));
                assert_eq!(lookup.words, vec!["dictionary", "tea spoon"]);
            }
            other => panic!("Expected lookup command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_groups_with_global_flags() {
        let args = AnagramsArgs::try_parse_from([
            "anagrams", "-vv", "groups", "-w", "words.txt.gz", "--min-size", "3", "-f", "json",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Groups(groups) => {
                assert_eq!(groups.min_size, 3);
                assert_eq!(groups.limit, None);
            }
            other => panic!("Expected groups command, got {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args =
            AnagramsArgs::try_parse_from(["anagrams", "-q", "-v", "stats", "-w", "words.txt"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_words_file_from_environment() {
        unsafe {
            std::env::set_var("ANAGRAMS_WORDS", "/tmp/env-words.txt.gz");
        }
        let parsed = AnagramsArgs::try_parse_from(["anagrams", "stats"]);
        unsafe {
            std::env::remove_var("ANAGRAMS_WORDS");
        }

        match parsed.unwrap().command {
            Command::Stats(stats) => {
                assert_eq!(stats.source.words_file, PathBuf::from("/tmp/env-words.txt.gz"));
            }
            other => panic!("Expected stats command, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_requires_a_word() {
        assert!(AnagramsArgs::try_parse_from(["anagrams", "lookup", "-w", "words.txt"]).is_err());
    }
}

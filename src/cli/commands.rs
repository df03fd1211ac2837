//! Command implementations for the anagrams CLI.

use std::path::Path;
use std::time::Instant;

use log::debug;

use crate::analysis::canonical_key;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{AnagramError, Result};
use crate::index::AnagramIndex;
use crate::source::WordSource;

/// Execute a CLI command.
pub fn execute_command(args: AnagramsArgs) -> Result<()> {
    match &args.command {
        Command::Lookup(lookup_args) => lookup_words(lookup_args, &args),
        Command::Groups(groups_args) => list_groups(groups_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Load a word list and build its index.
fn load_index(path: &Path, cli_args: &AnagramsArgs) -> Result<(WordSource, AnagramIndex, u64)> {
    if cli_args.verbosity() > 1 {
        println!("Loading word list: {}", path.display());
    }

    let start_time = Instant::now();
    let source = WordSource::open(path)?;
    let index = AnagramIndex::from_source(&source);
    let duration_ms = start_time.elapsed().as_millis() as u64;

    debug!(
        "Indexed {} words from {} in {}ms",
        index.word_count(),
        path.display(),
        duration_ms
    );

    Ok((source, index, duration_ms))
}

/// Look up the anagrams of each query word.
fn lookup_words(args: &LookupArgs, cli_args: &AnagramsArgs) -> Result<()> {
    let (_, index, _) = load_index(&args.source.words_file, cli_args)?;

    let results = args
        .words
        .iter()
        .map(|word| LookupResult {
            query: word.clone(),
            key: canonical_key(word).into_string(),
            anagrams: index.get_anagrams(word).map(<[String]>::to_vec),
        })
        .collect();

    output_result("Lookup results", &LookupResults { results }, cli_args)
}

/// List anagram classes with at least `min_size` words.
fn list_groups(args: &GroupsArgs, cli_args: &AnagramsArgs) -> Result<()> {
    if args.min_size == 0 {
        return Err(AnagramError::invalid_argument(
            "--min-size must be at least 1",
        ));
    }

    let (_, index, _) = load_index(&args.source.words_file, cli_args)?;
    let result = collect_groups(&index, args.min_size, args.limit);

    output_result("Anagram classes", &result, cli_args)
}

/// Gather up to `limit` classes with at least `min_size` words.
fn collect_groups(index: &AnagramIndex, min_size: usize, limit: Option<usize>) -> GroupsResult {
    let matching = index.classes_with_min_size(min_size);
    let matching_classes = matching.len();
    let limit = limit.unwrap_or(matching_classes);

    let classes = matching
        .into_iter()
        .take(limit)
        .map(|(key, words)| ClassEntry {
            key: key.to_string(),
            words: words.to_vec(),
        })
        .collect();

    GroupsResult {
        min_size,
        matching_classes,
        classes,
    }
}

/// Show statistics about a word list.
fn show_stats(args: &StatsArgs, cli_args: &AnagramsArgs) -> Result<()> {
    let (source, index, build_duration_ms) = load_index(&args.source.words_file, cli_args)?;

    let stats = SourceStats {
        path: source.path().to_string_lossy().to_string(),
        format: source.format(),
        size_bytes: source.byte_len() as u64,
        build_duration_ms,
        index: index.stats(),
    };

    output_result("Word list statistics", &stats, cli_args)
}

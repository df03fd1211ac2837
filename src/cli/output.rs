//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{AnagramsArgs, OutputFormat};
use crate::error::Result;
use crate::index::IndexStats;
use crate::source::SourceFormat;

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Render the result as lines of text.
    fn human_lines(&self) -> Vec<String>;
}

/// The class found for one query word.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub query: String,
    pub key: String,
    pub anagrams: Option<Vec<String>>,
}

/// Result structure for the lookup command.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResults {
    pub results: Vec<LookupResult>,
}

/// One anagram class.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassEntry {
    pub key: String,
    pub words: Vec<String>,
}

/// Result structure for the groups command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupsResult {
    pub min_size: usize,
    pub matching_classes: usize,
    pub classes: Vec<ClassEntry>,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceStats {
    pub path: String,
    pub format: SourceFormat,
    pub size_bytes: u64,
    pub build_duration_ms: u64,
    #[serde(flatten)]
    pub index: IndexStats,
}

impl HumanOutput for LookupResults {
    fn human_lines(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|result| match &result.anagrams {
                Some(words) => format!("{}: {}", result.query, words.join(", ")),
                None => format!("{}: no anagrams", result.query),
            })
            .collect()
    }
}

impl HumanOutput for GroupsResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .classes
            .iter()
            .map(|class| format!("{} ({}): {}", class.key, class.words.len(), class.words.join(", ")))
            .collect();

        if self.classes.len() < self.matching_classes {
            lines.push(format!(
                "... and {} more",
                self.matching_classes - self.classes.len()
            ));
        }
        lines
    }
}

impl HumanOutput for SourceStats {
    fn human_lines(&self) -> Vec<String> {
        vec![
            "Word List Statistics:".to_string(),
            "═════════════════════".to_string(),
            format!("Path: {}", self.path),
            format!("Format: {}", self.format),
            format!("Size: {}", format_bytes(self.size_bytes)),
            format!("Words: {}", self.index.words),
            format!("Anagram classes: {}", self.index.classes),
            format!("Largest class: {}", self.index.largest_class),
            format!("Singleton classes: {}", self.index.singleton_classes),
            format!("Build time: {}ms", self.build_duration_ms),
        ]
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &AnagramsArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &AnagramsArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    for line in result.human_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &AnagramsArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format bytes in human-readable format.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

//! Command implementations for the Lexiscan CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::FuzzyMatcher;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: LexiscanArgs) -> Result<()> {
    match &args.command {
        Command::Match(match_args) => run_match(match_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Rank word list entries by edit distance to the query.
fn run_match(args: MatchArgs, cli_args: &LexiscanArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading word list from: {}", args.word_list.display());
    }

    let lexicon = Arc::new(load_word_list(&args.word_list)?);
    let budget = Duration::from_micros(args.budget_us);

    let mut matcher = FuzzyMatcher::with_max_results(args.max_results)?;
    matcher.set_lexicon(Arc::clone(&lexicon));
    matcher.set_query(&args.query);

    // Drive the engine the way an application loop would: one budget-sized
    // slice per tick until the scan reports finished.
    let start = Instant::now();
    let mut ticks = 0;
    while !matcher.is_finished() {
        matcher.advance(budget);
        ticks += 1;
        log::debug!("tick {ticks}: progress {:.1}%", matcher.progress() * 100.0);
    }
    let duration_ms = start.elapsed().as_millis() as u64;

    let mut matches = matcher.result_list();
    if !args.include_empty {
        matches.retain(|hit| hit.distance.is_some());
    }

    output_result(
        &format!("Best matches for '{}'", args.query),
        &MatchResults {
            query: args.query,
            matches,
            lexicon_len: lexicon.len(),
            ticks,
            duration_ms,
        },
        cli_args,
    )
}

/// Show statistics for a word list.
fn show_stats(args: StatsArgs, cli_args: &LexiscanArgs) -> Result<()> {
    let words = load_word_list(&args.word_list)?;

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let max_length = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    let average_length = if words.is_empty() {
        0.0
    } else {
        total_chars as f64 / words.len() as f64
    };

    output_result(
        &format!("Word list: {}", args.word_list.display()),
        &WordListStats {
            words: words.len(),
            total_chars,
            average_length,
            max_length,
        },
        cli_args,
    )
}

/// Load a newline-separated word list, skipping blank lines.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    if words.is_empty() {
        log::warn!("word list {} contains no words", path.display());
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::LexiscanError;

    #[test]
    fn test_load_word_list() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  car  ").unwrap();
        writeln!(file, "cart").unwrap();
        file.flush().unwrap();

        let words = load_word_list(file.path()).unwrap();
        assert_eq!(words, ["cat", "car", "cart"]);
    }

    #[test]
    fn test_load_word_list_missing_file() {
        let result = load_word_list(Path::new("/nonexistent/word-list.txt"));
        assert!(matches!(result, Err(LexiscanError::Io(_))));
    }
}

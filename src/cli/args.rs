//! Command line argument parsing for the Lexiscan CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Lexiscan - incremental fuzzy string matching over a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "lexiscan")]
#[command(about = "Incremental, time-budgeted fuzzy string matching")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexiscanArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexiscanArgs {
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
    /// Rank word list entries by edit distance to a query
    Match(MatchArgs),

    /// Show statistics for a word list
    Stats(StatsArgs),
}

/// Arguments for the match command
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Path to a newline-separated word list
    #[arg(value_name = "WORD_LIST")]
    pub word_list: PathBuf,

    /// Query string to match against the word list
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Number of results to keep
    #[arg(short = 'k', long, default_value = "10")]
    pub max_results: usize,

    /// Time budget per scan slice, in microseconds
    #[arg(long, default_value = "1000")]
    pub budget_us: u64,

    /// Include unfilled result slots in the output
    #[arg(long)]
    pub include_empty: bool,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to a newline-separated word list
    #[arg(value_name = "WORD_LIST")]
    pub word_list: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

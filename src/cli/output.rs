//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexiscanArgs, OutputFormat};
use crate::collector::ScoredWord;
use crate::error::Result;

/// Result structure for match operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResults {
    pub query: String,
    pub matches: Vec<ScoredWord>,
    pub lexicon_len: usize,
    pub ticks: usize,
    pub duration_ms: u64,
}

/// Result structure for word list statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordListStats {
    pub words: usize,
    pub total_chars: usize,
    pub average_length: f64,
    pub max_length: usize,
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize + HumanDisplay>(
    message: &str,
    result: &T,
    args: &LexiscanArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
            Ok(())
        }
    }
}

/// Human-readable rendering of a CLI result.
pub trait HumanDisplay {
    fn print_human(&self);
}

impl HumanDisplay for MatchResults {
    fn print_human(&self) {
        if self.matches.is_empty() {
            println!("No matches for '{}'", self.query);
        } else {
            for (rank, hit) in self.matches.iter().enumerate() {
                match hit.distance {
                    Some(distance) => {
                        println!("{:>3}. {:<24} distance={distance}", rank + 1, hit.word)
                    }
                    None => println!("{:>3}. (unfilled)", rank + 1),
                }
            }
        }
        println!();
        println!(
            "Scanned {} words in {} ms over {} ticks",
            self.lexicon_len, self.duration_ms, self.ticks
        );
    }
}

impl HumanDisplay for WordListStats {
    fn print_human(&self) {
        println!("Words:          {}", self.words);
        println!("Total chars:    {}", self.total_chars);
        println!("Average length: {:.2}", self.average_length);
        println!("Max length:     {}", self.max_length);
    }
}

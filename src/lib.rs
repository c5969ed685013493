//! # Lexiscan
//!
//! An incremental, time-budgeted fuzzy string matching library for Rust.
//!
//! Given a query string and a lexicon of candidate words, Lexiscan returns
//! the top-K entries ranked by exact Levenshtein edit distance. The scan over
//! the lexicon is cooperative: each call to [`engine::FuzzyMatcher::advance`]
//! processes candidates only until a caller-supplied time budget elapses,
//! then yields, resuming from a saved cursor on the next call. This makes the
//! engine safe to drive once per UI tick without stalling the caller.
//!
//! ## Features
//!
//! - Exact dynamic-programming edit distance with a reusable scratch buffer
//! - Fixed-capacity top-K collection with stable, position-based tie-breaking
//! - Resumable, bounded-latency scanning with progress reporting
//! - Lazily recomputed word projection that freezes once the scan completes
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use lexiscan::engine::FuzzyMatcher;
//!
//! let mut matcher = FuzzyMatcher::with_max_results(2).unwrap();
//! matcher.set_lexicon(Arc::new(vec![
//!     "cat".to_string(),
//!     "car".to_string(),
//!     "cart".to_string(),
//!     "dog".to_string(),
//! ]));
//! matcher.set_query("cat");
//!
//! while !matcher.is_finished() {
//!     matcher.advance(Duration::from_millis(1));
//! }
//!
//! assert_eq!(matcher.words(), ["cat", "car"]);
//! ```

pub mod cli;
pub mod collector;
pub mod distance;
pub mod engine;
pub mod error;
pub mod projector;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! The incremental fuzzy matching engine.
//!
//! [`FuzzyMatcher`] ties the distance calculator, the top-K collector, and
//! the word projection together behind the external interface: the caller
//! sets a lexicon and a query, then drives [`FuzzyMatcher::advance`] once per
//! tick until the scan finishes, reading the best-so-far results at any
//! point in between.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::collector::{ScoredWord, TopKCollector};
use crate::distance::EditDistance;
use crate::error::Result;
use crate::projector::WordProjection;

/// Time budget used by [`FuzzyMatcher::tick`].
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(1);

/// Default number of results kept by a new matcher.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Progress statistics for a scan pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of lexicon entries scanned so far.
    pub scanned: usize,
    /// Total number of lexicon entries.
    pub lexicon_len: usize,
    /// Whether the scan has covered the whole lexicon.
    pub finished: bool,
}

/// Incremental, time-budgeted fuzzy matcher over a shared lexicon.
///
/// The engine is single-threaded and cooperative: `advance` is the only
/// operation that takes non-trivial time, and it yields control once its
/// time budget elapses, checking the clock only between candidates. All
/// state is quiescent and readable between calls.
///
/// Changing the lexicon, the query, or the result capacity resets the scan.
#[derive(Debug)]
pub struct FuzzyMatcher {
    /// Shared view of the caller-owned lexicon; never copied or mutated.
    lexicon: Arc<Vec<String>>,
    query: String,
    calculator: EditDistance,
    collector: TopKCollector,
    projection: WordProjection,
    /// Index of the next lexicon entry to process.
    cursor: usize,
    finished: bool,
}

impl FuzzyMatcher {
    /// Create a matcher with the default result capacity and an empty
    /// lexicon (which counts as already finished).
    pub fn new() -> Self {
        // DEFAULT_MAX_RESULTS is non-zero, so this cannot fail.
        Self::with_max_results(DEFAULT_MAX_RESULTS).unwrap()
    }

    /// Create a matcher keeping the best `max_results` candidates.
    ///
    /// Returns an error if `max_results` is zero.
    pub fn with_max_results(max_results: usize) -> Result<Self> {
        let mut matcher = FuzzyMatcher {
            lexicon: Arc::new(Vec::new()),
            query: String::new(),
            calculator: EditDistance::new(),
            collector: TopKCollector::new(max_results)?,
            projection: WordProjection::new(),
            cursor: 0,
            finished: false,
        };
        matcher.reset();
        Ok(matcher)
    }

    /// Replace the lexicon and reset the scan.
    pub fn set_lexicon(&mut self, lexicon: Arc<Vec<String>>) {
        self.lexicon = lexicon;
        self.reset();
    }

    /// Set the query string, resetting the scan only if it changed.
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query.clear();
            self.query.push_str(query);
            self.reset();
        }
    }

    /// Set the result capacity, resetting the scan only if it changed.
    ///
    /// Returns an error if `max_results` is zero; the current state is left
    /// untouched in that case.
    pub fn set_max_results(&mut self, max_results: usize) -> Result<()> {
        if max_results != self.collector.capacity() {
            self.collector = TopKCollector::new(max_results)?;
            self.reset();
        }
        Ok(())
    }

    /// Scan lexicon entries until `time_budget` elapses or the lexicon is
    /// exhausted.
    ///
    /// The clock is checked only after whole candidates, so the call may
    /// overrun the budget by at most one distance computation. Calling this
    /// after the scan has finished is a no-op.
    pub fn advance(&mut self, time_budget: Duration) {
        if self.finished {
            return;
        }

        let start = Instant::now();
        loop {
            let word = &self.lexicon[self.cursor];
            let distance = self.calculator.distance(&self.query, word);
            if self.collector.offer(word, distance, self.cursor) {
                self.projection.mark_stale();
            }
            self.cursor += 1;

            if self.cursor == self.lexicon.len() {
                self.finished = true;
                log::trace!(
                    "scan finished: {} candidates in {:?}",
                    self.cursor,
                    start.elapsed()
                );
                break;
            }
            if start.elapsed() >= time_budget {
                break;
            }
        }
    }

    /// [`advance`](Self::advance) with [`DEFAULT_TIME_BUDGET`].
    pub fn tick(&mut self) {
        self.advance(DEFAULT_TIME_BUDGET);
    }

    /// Whether the scan has covered the whole lexicon.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Fraction of the lexicon scanned so far, in `[0, 1]`.
    ///
    /// An empty lexicon reports 1.0 (it is finished the moment it is set).
    pub fn progress(&self) -> f64 {
        if self.lexicon.is_empty() {
            1.0
        } else {
            self.cursor as f64 / self.lexicon.len() as f64
        }
    }

    /// Get the current query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the result capacity.
    pub fn max_results(&self) -> usize {
        self.collector.capacity()
    }

    /// Get the number of lexicon entries.
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Snapshot of all result slots, including unfilled ones; always exactly
    /// `max_results` entries.
    pub fn result_list(&self) -> Vec<ScoredWord> {
        self.collector.results()
    }

    /// The words of the filled result slots, best first.
    ///
    /// The list is a cached projection: it is rebuilt lazily while the scan
    /// is running and frozen once the scan finishes.
    pub fn words(&mut self) -> &[String] {
        self.projection.words(&self.collector, self.finished)
    }

    /// Get progress statistics for the current pass.
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            scanned: self.cursor,
            lexicon_len: self.lexicon.len(),
            finished: self.finished,
        }
    }

    /// Restart the scan from the beginning of the lexicon.
    fn reset(&mut self) {
        self.cursor = 0;
        self.finished = self.lexicon.is_empty();
        self.collector.reset();
        self.projection.reset();
        log::debug!(
            "search reset: query={:?} lexicon_len={} max_results={}",
            self.query,
            self.lexicon.len(),
            self.collector.capacity()
        );
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

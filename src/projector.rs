//! Cached projection of the collector's filled slots into a plain word list.

use crate::collector::TopKCollector;

/// Cache lifecycle for the projected word list.
///
/// `Stale` means a slot mutation invalidated the cache; `Live` means the
/// cache matches the slots but may still be invalidated by further offers;
/// `Frozen` means the scan finished and the cache is final until the next
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CacheState {
    Stale,
    Live,
    Frozen,
}

/// Lazily recomputed list of the words currently held by a [`TopKCollector`],
/// in slot order, with unfilled slots omitted.
#[derive(Debug)]
pub struct WordProjection {
    words: Vec<String>,
    state: CacheState,
}

impl WordProjection {
    /// Create an empty, stale projection.
    pub fn new() -> Self {
        WordProjection {
            words: Vec::new(),
            state: CacheState::Stale,
        }
    }

    /// Invalidate the cache after a slot mutation.
    pub fn mark_stale(&mut self) {
        self.state = CacheState::Stale;
    }

    /// Clear the cache for a new search pass.
    pub fn reset(&mut self) {
        self.words.clear();
        self.state = CacheState::Stale;
    }

    /// Get the projected word list, rebuilding it if stale.
    ///
    /// While the scan is unfinished the cache goes back to `Live` after a
    /// rebuild and will be invalidated by the next accepted offer. Once
    /// `finished` is observed during a read, the cache freezes and is never
    /// rebuilt again until [`reset`](Self::reset).
    pub fn words(&mut self, collector: &TopKCollector, finished: bool) -> &[String] {
        match self.state {
            CacheState::Frozen => {}
            CacheState::Live => {
                if finished {
                    self.state = CacheState::Frozen;
                }
            }
            CacheState::Stale => {
                self.words.clear();
                self.words
                    .extend(collector.filled_words().map(str::to_owned));
                self.state = if finished {
                    CacheState::Frozen
                } else {
                    CacheState::Live
                };
            }
        }

        &self.words
    }
}

impl Default for WordProjection {
    fn default() -> Self {
        Self::new()
    }
}

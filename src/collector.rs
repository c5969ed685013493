//! Fixed-capacity top-K collection of scored candidates.

use serde::{Deserialize, Serialize};

use crate::error::{LexiscanError, Result};

/// A candidate word with its edit distance, as exposed to callers.
///
/// `distance` is `None` for a slot that has never been filled (the infinity
/// sentinel); such slots carry an empty word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredWord {
    /// The candidate word (empty for unfilled slots).
    pub word: String,
    /// Edit distance from the query, or `None` for an unfilled slot.
    pub distance: Option<usize>,
}

/// A filled slot. Ordering is by the composite key (distance, ordinal), so
/// equal distances resolve to the earlier lexicon position.
#[derive(Debug, Clone)]
struct Slot {
    word: String,
    distance: usize,
    ordinal: usize,
}

impl Slot {
    fn key(&self) -> (usize, usize) {
        (self.distance, self.ordinal)
    }
}

/// A collector that keeps the K best candidates seen so far, sorted ascending
/// by (distance, lexicon ordinal).
///
/// The collector always holds exactly K slots; slots that have not been
/// filled yet sort after every filled slot. `offer` performs a bounded
/// in-place insertion into this fixed arena rather than allocating per
/// candidate.
#[derive(Debug)]
pub struct TopKCollector {
    /// Slots sorted ascending by key; `None` is the infinity sentinel.
    slots: Vec<Option<Slot>>,
}

impl TopKCollector {
    /// Create a new collector with `capacity` slots.
    ///
    /// Returns an error if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(LexiscanError::invalid_argument(
                "max_results must be greater than zero",
            ));
        }

        Ok(TopKCollector {
            slots: vec![None; capacity],
        })
    }

    /// Get the number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Offer a scored candidate, keeping the K smallest (distance, ordinal)
    /// keys in ascending order.
    ///
    /// Returns whether the slots changed, so the caller can invalidate any
    /// projection derived from them.
    pub fn offer(&mut self, word: &str, distance: usize, ordinal: usize) -> bool {
        let key = (distance, ordinal);
        let idx = self
            .slots
            .partition_point(|slot| slot.as_ref().is_some_and(|s| s.key() <= key));

        if idx == self.slots.len() {
            return false;
        }

        // Shift the tail down one slot, dropping the worst entry.
        self.slots.pop();
        self.slots.insert(
            idx,
            Some(Slot {
                word: word.to_string(),
                distance,
                ordinal,
            }),
        );

        true
    }

    /// Get a snapshot of all slots, including unfilled ones.
    pub fn results(&self) -> Vec<ScoredWord> {
        self.slots
            .iter()
            .map(|slot| match slot {
                Some(s) => ScoredWord {
                    word: s.word.clone(),
                    distance: Some(s.distance),
                },
                None => ScoredWord {
                    word: String::new(),
                    distance: None,
                },
            })
            .collect()
    }

    /// Iterate over the words of the filled slots, in slot order.
    pub fn filled_words(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|s| s.word.as_str()))
    }

    /// Clear all slots back to the infinity sentinel.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    #[cfg(test)]
    fn keys(&self) -> Vec<(usize, usize)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(Slot::key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(TopKCollector::new(0).is_err());
    }

    #[test]
    fn test_fills_empty_slots_in_order() {
        let mut collector = TopKCollector::new(3).unwrap();

        assert!(collector.offer("dog", 3, 0));
        assert!(collector.offer("cat", 0, 1));
        assert!(collector.offer("car", 1, 2));

        let results = collector.results();
        assert_eq!(results[0].word, "cat");
        assert_eq!(results[1].word, "car");
        assert_eq!(results[2].word, "dog");
    }

    #[test]
    fn test_worse_candidate_dropped_when_full() {
        let mut collector = TopKCollector::new(2).unwrap();

        collector.offer("aa", 1, 0);
        collector.offer("bb", 2, 1);
        assert!(!collector.offer("cc", 5, 2));

        let words: Vec<_> = collector.filled_words().collect();
        assert_eq!(words, ["aa", "bb"]);
    }

    #[test]
    fn test_better_candidate_evicts_worst() {
        let mut collector = TopKCollector::new(2).unwrap();

        collector.offer("aa", 3, 0);
        collector.offer("bb", 4, 1);
        assert!(collector.offer("cc", 1, 2));

        let words: Vec<_> = collector.filled_words().collect();
        assert_eq!(words, ["cc", "aa"]);
    }

    #[test]
    fn test_ties_resolve_to_earlier_ordinal() {
        let mut collector = TopKCollector::new(2).unwrap();

        // Offered out of lexicon order: the later entry arrives first.
        collector.offer("cart", 1, 2);
        collector.offer("car", 1, 1);
        collector.offer("dog", 3, 3);

        let words: Vec<_> = collector.filled_words().collect();
        assert_eq!(words, ["car", "cart"]);
    }

    #[test]
    fn test_slots_stay_sorted() {
        let mut collector = TopKCollector::new(4).unwrap();
        let offers = [(5, 0), (2, 1), (2, 2), (7, 3), (1, 4), (2, 5)];

        for (distance, ordinal) in offers {
            collector.offer("w", distance, ordinal);
            let keys = collector.keys();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted);
        }

        assert_eq!(collector.keys(), vec![(1, 4), (2, 1), (2, 2), (2, 5)]);
    }

    #[test]
    fn test_unfilled_slots_keep_sentinel() {
        let mut collector = TopKCollector::new(5).unwrap();
        collector.offer("cat", 0, 0);

        let results = collector.results();
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].distance, Some(0));
        for slot in &results[1..] {
            assert_eq!(slot.distance, None);
            assert!(slot.word.is_empty());
        }
    }

    #[test]
    fn test_reset_clears_slots() {
        let mut collector = TopKCollector::new(2).unwrap();
        collector.offer("cat", 0, 0);
        collector.reset();

        assert_eq!(collector.filled_words().count(), 0);
        assert_eq!(collector.capacity(), 2);
    }
}

//! Levenshtein edit distance with a reusable scratch buffer.
//!
//! The calculator runs once per lexicon entry per scan tick, so the dominant
//! cost is not the DP recurrence itself but the allocation of its working
//! memory. [`EditDistance`] therefore keeps a single DP column (plus a char
//! buffer for the left operand) that is grown on demand and reused across
//! calls.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one word into another.
/// Allocates per call; prefer [`EditDistance`] when computing distances in
/// bulk.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    EditDistance::new().distance(s1, s2)
}

/// Edit distance calculator owning its DP scratch state.
///
/// Distance operates over `char` scalar values; grapheme clusters and Unicode
/// normalization are deliberately not handled.
#[derive(Debug, Default)]
pub struct EditDistance {
    /// DP column of length |a|+1, reused across calls.
    column: Vec<usize>,
    /// Chars of the left operand, reused across calls.
    left: Vec<char>,
}

impl EditDistance {
    /// Create a new calculator with empty scratch buffers.
    pub fn new() -> Self {
        EditDistance::default()
    }

    /// Calculate the distance between `a` and `b`.
    ///
    /// Only the scratch buffers are mutated; the buffers are grown to at
    /// least |a|+1 entries and never shrunk, so calls with strings of
    /// different lengths are safe to interleave.
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        self.left.clear();
        self.left.extend(a.chars());
        let len_a = self.left.len();

        if self.column.len() < len_a + 1 {
            self.column.resize(len_a + 1, 0);
        }
        for (y, cell) in self.column[..=len_a].iter_mut().enumerate() {
            *cell = y;
        }

        for (x, ch_b) in b.chars().enumerate() {
            // prev_diag holds column[y-1] from before this iteration's update.
            let mut prev_diag = self.column[0];
            self.column[0] = x + 1;

            for y in 1..=len_a {
                let diag = self.column[y];
                let cost = if self.left[y - 1] == ch_b { 0 } else { 1 };

                self.column[y] = min(
                    min(
                        diag + 1,            // deletion
                        self.column[y - 1] + 1, // insertion
                    ),
                    prev_diag + cost, // substitution
                );

                prev_diag = diag;
            }
        }

        self.column[len_a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2); // transposition
    }

    #[test]
    fn test_scratch_reuse_across_lengths() {
        let mut calc = EditDistance::new();

        assert_eq!(calc.distance("incomprehensible", "incomprehensibly"), 1);
        assert_eq!(calc.distance("cat", "dog"), 3);
        assert_eq!(calc.distance("", "xyz"), 3);
        assert_eq!(calc.distance("xyz", ""), 3);
        // Shorter calls must not see stale cells from longer ones.
        assert_eq!(calc.distance("a", "a"), 0);
    }

    #[test]
    fn test_symmetry_and_identity() {
        let pairs = [
            ("kitten", "sitting"),
            ("flaw", "lawn"),
            ("", "word"),
            ("same", "same"),
            ("a", "zzzzzz"),
        ];

        let mut calc = EditDistance::new();
        for (a, b) in pairs {
            assert_eq!(calc.distance(a, b), calc.distance(b, a), "{a} vs {b}");
            assert_eq!(calc.distance(a, a), 0);
        }
    }

    #[test]
    fn test_distance_bounds() {
        let pairs = [
            ("kitten", "sitting"),
            ("abc", "abcdef"),
            ("", "hello"),
            ("qwerty", "qzerty"),
        ];

        let mut calc = EditDistance::new();
        for (a, b) in pairs {
            let d = calc.distance(a, b);
            let (la, lb) = (a.chars().count(), b.chars().count());
            assert!(d >= la.abs_diff(lb), "lower bound violated for {a}/{b}");
            assert!(d <= la.max(lb), "upper bound violated for {a}/{b}");
        }
    }

    #[test]
    fn test_non_ascii_chars() {
        let mut calc = EditDistance::new();
        // Distances count chars, not bytes.
        assert_eq!(calc.distance("café", "cafe"), 1);
        assert_eq!(calc.distance("über", "uber"), 1);
    }
}

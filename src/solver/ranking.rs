//! Bounded score ranking
//!
//! Guesses are grouped by score into ordered buckets. Only the best `keep` distinct scores are
//! retained; inserting a new score beyond that evicts the worst bucket. Words inside a bucket
//! are sorted, so the reported best guess is the alphabetically first of the best score.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Which end of the score range wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Lowest,
    Highest,
}

/// Top-K guesses produced by a [`super::Guesser`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedGuesses {
    buckets: BTreeMap<u64, BTreeSet<String>>,
    keep: usize,
    preference: Preference,
    opening: Option<String>,
}

impl RankedGuesses {
    /// Empty ranking that keeps at most `keep` distinct scores (at least one)
    #[must_use]
    pub fn new(keep: usize, preference: Preference) -> Self {
        Self {
            buckets: BTreeMap::new(),
            keep: keep.max(1),
            preference,
            opening: None,
        }
    }

    /// Unscored ranking whose best guess is a fixed opening word
    #[must_use]
    pub fn opening(word: impl Into<String>, keep: usize) -> Self {
        Self {
            opening: Some(word.into()),
            ..Self::new(keep, Preference::Lowest)
        }
    }

    /// Add a scored guess, evicting the worst bucket when too many scores are held
    pub fn insert(&mut self, score: u64, word: impl Into<String>) {
        self.buckets.entry(score).or_default().insert(word.into());
        if self.buckets.len() > self.keep {
            match self.preference {
                Preference::Lowest => self.buckets.pop_last(),
                Preference::Highest => self.buckets.pop_first(),
            };
        }
    }

    /// Best word: alphabetically first in the best bucket, else the opening word
    ///
    /// `None` means no guess is available.
    #[must_use]
    pub fn best_guess(&self) -> Option<&str> {
        self.best_bucket()
            .and_then(|(_, words)| words.first())
            .or(self.opening.as_ref())
            .map(String::as_str)
    }

    #[must_use]
    pub fn best_score(&self) -> Option<u64> {
        self.best_bucket().map(|(score, _)| score)
    }

    fn best_bucket(&self) -> Option<(u64, &BTreeSet<String>)> {
        let bucket = match self.preference {
            Preference::Lowest => self.buckets.first_key_value(),
            Preference::Highest => self.buckets.last_key_value(),
        };
        bucket.map(|(&score, words)| (score, words))
    }

    /// Buckets from best to worst
    pub fn iter(&self) -> Box<dyn Iterator<Item = (u64, &BTreeSet<String>)> + '_> {
        let buckets = self.buckets.iter().map(|(&score, words)| (score, words));
        match self.preference {
            Preference::Lowest => Box::new(buckets),
            Preference::Highest => Box::new(buckets.rev()),
        }
    }

    /// True when no score was recorded (an opening-word ranking is empty)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of distinct scores held
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when the best guess comes from the opening-word shortcut
    #[must_use]
    pub fn is_opening(&self) -> bool {
        self.buckets.is_empty() && self.opening.is_some()
    }

    #[must_use]
    pub const fn preference(&self) -> Preference {
        self.preference
    }
}

impl fmt::Display for RankedGuesses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(opening) = self.opening.as_ref().filter(|_| self.buckets.is_empty()) {
            return write!(f, "{{opening: {opening}}}");
        }
        let entries: Vec<String> = self
            .iter()
            .map(|(score, words)| {
                let words: Vec<&str> = words.iter().map(String::as_str).collect();
                format!("{score}=[{}]", words.join(", "))
            })
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_score_wins() {
        let mut ranking = RankedGuesses::new(3, Preference::Lowest);
        ranking.insert(12, "crane");
        ranking.insert(7, "slate");
        ranking.insert(9, "irate");

        assert_eq!(ranking.best_guess(), Some("slate"));
        assert_eq!(ranking.best_score(), Some(7));
    }

    #[test]
    fn highest_score_wins() {
        let mut ranking = RankedGuesses::new(3, Preference::Highest);
        ranking.insert(12, "crane");
        ranking.insert(7, "slate");

        assert_eq!(ranking.best_guess(), Some("crane"));
        let order: Vec<u64> = ranking.iter().map(|(score, _)| score).collect();
        assert_eq!(order, vec![12, 7]);
    }

    #[test]
    fn keeps_only_best_scores() {
        let mut ranking = RankedGuesses::new(2, Preference::Lowest);
        for (score, word) in [(5, "a"), (3, "b"), (9, "c"), (1, "d")] {
            ranking.insert(score, word);
        }

        let scores: Vec<u64> = ranking.iter().map(|(score, _)| score).collect();
        assert_eq!(scores, vec![1, 3]);
    }

    #[test]
    fn equal_scores_share_a_bucket_and_tie_break_alphabetically() {
        let mut ranking = RankedGuesses::new(1, Preference::Lowest);
        ranking.insert(4, "trace");
        ranking.insert(4, "crate");
        ranking.insert(4, "react");

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.best_guess(), Some("crate"));
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let entries = [(4, "trace"), (2, "crate"), (4, "react"), (8, "slate")];

        let mut forward = RankedGuesses::new(2, Preference::Lowest);
        let mut backward = RankedGuesses::new(2, Preference::Lowest);
        for (score, word) in entries {
            forward.insert(score, word);
        }
        for (score, word) in entries.iter().rev() {
            backward.insert(*score, *word);
        }
        assert_eq!(forward, backward);
    }

    #[test]
    fn opening_ranking_reports_opening_word() {
        let ranking = RankedGuesses::opening("crave", 5);
        assert!(ranking.is_opening());
        assert!(ranking.is_empty());
        assert_eq!(ranking.best_guess(), Some("crave"));
        assert_eq!(ranking.best_score(), None);
        assert_eq!(ranking.to_string(), "{opening: crave}");
    }

    #[test]
    fn empty_ranking_has_no_guess() {
        let ranking = RankedGuesses::new(5, Preference::Lowest);
        assert_eq!(ranking.best_guess(), None);
        assert!(!ranking.is_opening());
    }

    #[test]
    fn display_lists_buckets_best_first() {
        let mut ranking = RankedGuesses::new(5, Preference::Lowest);
        ranking.insert(3, "b");
        ranking.insert(1, "a");
        ranking.insert(3, "c");
        assert_eq!(ranking.to_string(), "{1=[a], 3=[b, c]}");
    }
}

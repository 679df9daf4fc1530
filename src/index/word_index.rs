//! Indexed word list
//!
//! Built once per word list. Besides the sorted words it keeps three lookup tables, each
//! mapping to a sorted list of word ids:
//! - letter -> words containing it
//! - letter -> words lacking it entirely
//! - (letter, position) -> words with that letter there

use super::cache::{CacheStats, CandidateIds, PartitionCache, WordId};
use crate::core::{ConstraintState, LetterKnowledge, Word};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Immutable, filterable word list
pub struct WordIndex {
    words: Vec<Word>,
    with_letter: FxHashMap<u8, Vec<WordId>>,
    without_letter: FxHashMap<u8, Vec<WordId>>,
    at_position: FxHashMap<(u8, usize), Vec<WordId>>,
    letter_counts: OnceLock<FxHashMap<u8, usize>>,
    cache: PartitionCache,
}

impl WordIndex {
    /// Index `words`, deduplicated and sorted alphabetically
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` words are given.
    #[must_use]
    pub fn build(words: impl IntoIterator<Item = Word>) -> Self {
        Self::with_cache(words, PartitionCache::default())
    }

    /// Like [`WordIndex::build`], with a bounded partition cache of `capacity` entries
    #[must_use]
    pub fn with_cache_capacity(words: impl IntoIterator<Item = Word>, capacity: usize) -> Self {
        Self::with_cache(words, PartitionCache::new(capacity))
    }

    fn with_cache(words: impl IntoIterator<Item = Word>, cache: PartitionCache) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        assert!(
            u32::try_from(words.len()).is_ok(),
            "word index holds at most u32::MAX words"
        );

        let mut with_letter: FxHashMap<u8, Vec<WordId>> = FxHashMap::default();
        let mut without_letter: FxHashMap<u8, Vec<WordId>> = FxHashMap::default();
        let mut at_position: FxHashMap<(u8, usize), Vec<WordId>> = FxHashMap::default();

        for (id, word) in words.iter().enumerate() {
            let id = id as WordId;
            for letter in b'a'..=b'z' {
                let table = if word.has_letter(letter) {
                    &mut with_letter
                } else {
                    &mut without_letter
                };
                table.entry(letter).or_default().push(id);
            }
            for (position, &letter) in word.bytes().iter().enumerate() {
                at_position.entry((letter, position)).or_default().push(id);
            }
        }

        Self {
            words,
            with_letter,
            without_letter,
            at_position,
            letter_counts: OnceLock::new(),
            cache,
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.id_of(word).is_some()
    }

    /// Look up a word by text
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.id_of(word).map(|id| &self.words[id as usize])
    }

    fn id_of(&self, word: &str) -> Option<WordId> {
        self.words
            .binary_search_by(|w| w.text().cmp(word))
            .ok()
            .map(|id| id as WordId)
    }

    /// Ids passing the relaxed check: required positions, required letters, excluded letters
    fn prefilter_ids(&self, knowledge: &LetterKnowledge) -> Vec<WordId> {
        let mut lists: Vec<&[WordId]> = Vec::new();

        for (position, letter) in knowledge.required_positions() {
            match self.at_position.get(&(letter, position)) {
                Some(ids) => lists.push(ids),
                None => return Vec::new(),
            }
        }
        for (letter, _) in knowledge.misplaced_letters() {
            match self.with_letter.get(&letter) {
                Some(ids) => lists.push(ids),
                None => return Vec::new(),
            }
        }
        // No absence entry means every word contains the letter
        for letter in knowledge.excluded_letters() {
            match self.without_letter.get(&letter) {
                Some(ids) => lists.push(ids),
                None => return Vec::new(),
            }
        }

        let mut ids = if lists.is_empty() {
            (0..self.words.len() as WordId).collect()
        } else {
            intersect_sorted(&mut lists)
        };
        ids.retain(|&id| {
            knowledge.is_satisfied_by_ignoring_position_exclusions(&self.words[id as usize])
        });
        ids
    }

    /// Words passing every letter constraint except yellow position exclusions
    ///
    /// Tried words are not removed here.
    #[must_use]
    pub fn prefilter(&self, state: &ConstraintState) -> Vec<&Word> {
        self.prefilter_ids(state.knowledge())
            .into_iter()
            .map(|id| &self.words[id as usize])
            .collect()
    }

    fn matching_ids(&self, knowledge: &LetterKnowledge) -> Vec<WordId> {
        let mut ids = self.prefilter_ids(knowledge);
        ids.retain(|&id| knowledge.respects_wrong_spots(&self.words[id as usize]));
        ids
    }

    /// The remaining candidates: every word that still satisfies `state`
    #[must_use]
    pub fn filter_to_valid(&self, state: &ConstraintState) -> Self {
        let words = self
            .prefilter_ids(state.knowledge())
            .into_iter()
            .map(|id| &self.words[id as usize])
            .filter(|word| state.is_satisfied_by(word))
            .cloned();
        Self::with_cache_capacity(words, self.cache.capacity())
    }

    /// Number of live candidates under `state`, memoized on the letter knowledge
    ///
    /// Words already tried are subtracted: they can match every letter constraint but are
    /// no longer possible answers.
    #[must_use]
    pub fn size_after_filtering(&self, state: &ConstraintState) -> usize {
        let knowledge = state.knowledge();
        let ids: CandidateIds = self
            .cache
            .get_or_compute(knowledge, || self.matching_ids(knowledge));

        let tried_live = state
            .tried_words()
            .filter_map(|word| self.id_of(word))
            .filter(|id| ids.binary_search(id).is_ok())
            .count();
        ids.len() - tried_live
    }

    /// Direct scan without the index or cache
    #[must_use]
    pub fn size_after_filtering_uncached(&self, state: &ConstraintState) -> usize {
        self.words
            .iter()
            .filter(|word| state.is_satisfied_by(word))
            .count()
    }

    /// How often each letter occurs across all words, counting repeats
    #[must_use]
    pub fn letter_counts(&self) -> &FxHashMap<u8, usize> {
        self.letter_counts.get_or_init(|| {
            let mut counts = FxHashMap::default();
            for &letter in self.words.iter().flat_map(Word::bytes) {
                *counts.entry(letter).or_insert(0) += 1;
            }
            counts
        })
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl std::fmt::Debug for WordIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordIndex")
            .field("words", &self.words.len())
            .field("cache", &self.cache.stats())
            .finish_non_exhaustive()
    }
}

/// Intersect sorted id lists, starting from the shortest
fn intersect_sorted(lists: &mut [&[WordId]]) -> Vec<WordId> {
    lists.sort_unstable_by_key(|ids| ids.len());
    let Some((shortest, rest)) = lists.split_first() else {
        return Vec::new();
    };

    shortest
        .iter()
        .copied()
        .filter(|id| rest.iter().all(|ids| ids.binary_search(id).is_ok()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, decode_feedback, score_guess};

    fn index(words: &[&str]) -> WordIndex {
        WordIndex::build(words.iter().map(|w| Word::parse(*w).unwrap()))
    }

    fn texts<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<&'a str> {
        words.into_iter().map(Word::text).collect()
    }

    fn play(state: &mut ConstraintState, guess: &str, feedback: &str) {
        let outcomes = decode_feedback(feedback, guess.len()).unwrap();
        state
            .record_round(&Word::parse(guess).unwrap(), &outcomes)
            .unwrap();
    }

    const WORDS: &[&str] = &[
        "aloft", "arise", "fatli", "crane", "slate", "irate", "crate", "grate", "trace", "toxic",
        "motif", "frame", "grame", "frogs",
    ];

    #[test]
    fn build_sorts_and_dedupes() {
        let idx = index(&["slate", "crane", "slate"]);
        assert_eq!(texts(idx.words()), ["crane", "slate"]);
        assert!(idx.contains("crane"));
        assert!(!idx.contains("irate"));
        assert_eq!(idx.get("slate").map(Word::text), Some("slate"));
    }

    #[test]
    fn tables_cover_presence_absence_and_position() {
        let idx = index(&["aloft", "arise", "fatli"]);
        // ids are alphabetical: aloft=0, arise=1, fatli=2
        assert_eq!(idx.with_letter[&b't'], vec![0, 2]);
        assert_eq!(idx.without_letter[&b'r'], vec![0, 2]);
        assert_eq!(idx.at_position[&(b'a', 0)], vec![0, 1]);
        assert!(!idx.without_letter.contains_key(&b'a'));
        assert!(!idx.with_letter.contains_key(&b'z'));
    }

    #[test]
    fn prefilter_and_exact_filter_on_short_round() {
        let idx = index(&["aloft", "arise", "fatli"]);
        let mut state = ConstraintState::new(5).unwrap();
        state
            .record_round(
                &Word::parse("art").unwrap(),
                &[Outcome::Correct, Outcome::NotInWord, Outcome::WrongSpot],
            )
            .unwrap();

        assert_eq!(texts(idx.prefilter(&state)), ["aloft"]);
        let filtered = idx.filter_to_valid(&state);
        assert_eq!(texts(filtered.words()), ["aloft"]);

        play(&mut state, "o", "B");
        assert!(idx.prefilter(&state).is_empty());
    }

    #[test]
    fn prefilter_skips_wrong_spot_positions() {
        let idx = index(&["toxic", "motif"]);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "tares", "YBBBB");

        assert_eq!(texts(idx.prefilter(&state)), ["motif", "toxic"]);
        assert_eq!(texts(idx.filter_to_valid(&state).words()), ["motif"]);
    }

    #[test]
    fn empty_state_keeps_everything() {
        let idx = index(WORDS);
        let state = ConstraintState::new(5).unwrap();
        assert_eq!(idx.prefilter(&state).len(), idx.len());
        assert_eq!(idx.filter_to_valid(&state).len(), idx.len());
    }

    #[test]
    fn excluded_letter_in_every_word_empties_the_result() {
        let idx = index(&["crane", "slate"]);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "eeeee", "BBBBB");
        assert!(idx.prefilter(&state).is_empty());
    }

    #[test]
    fn unknown_required_position_empties_the_result() {
        let idx = index(&["crane", "slate"]);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "zzzzz", "GBBBB");
        assert!(idx.prefilter(&state).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let idx = index(WORDS);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "crane", "BGGBG");

        let once = idx.filter_to_valid(&state);
        let twice = once.filter_to_valid(&state);
        assert_eq!(texts(once.words()), texts(twice.words()));
        assert!(!once.is_empty());
    }

    #[test]
    fn filtering_is_monotonic() {
        let idx = index(WORDS);
        let answer = Word::parse("grate").unwrap();
        let mut state = ConstraintState::new(5).unwrap();
        let mut previous = idx.filter_to_valid(&state).len();

        for guess in ["slate", "crane", "trace", "irate"] {
            let guess = Word::parse(guess).unwrap();
            let outcomes = score_guess(&answer, &guess).unwrap();
            state.record_round(&guess, &outcomes).unwrap();

            let remaining = idx.filter_to_valid(&state).len();
            assert!(remaining <= previous);
            assert!(idx.filter_to_valid(&state).contains("grate"));
            previous = remaining;
        }
    }

    #[test]
    fn cached_size_matches_direct_scan() {
        let idx = index(WORDS);
        let guesses = ["crane", "frogs", "toxic", "aloft"];

        for answer in WORDS {
            let answer = Word::parse(*answer).unwrap();
            let mut state = ConstraintState::new(5).unwrap();
            for guess in guesses {
                let guess = Word::parse(guess).unwrap();
                let outcomes = score_guess(&answer, &guess).unwrap();
                state.record_round(&guess, &outcomes).unwrap();

                assert_eq!(
                    idx.size_after_filtering(&state),
                    idx.size_after_filtering_uncached(&state),
                    "answer {answer}, state {state}"
                );
            }
        }
        assert!(idx.cache_stats().hits > 0);
    }

    #[test]
    fn size_after_filtering_subtracts_tried_words() {
        let idx = index(WORDS);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "crate", "GGGGG");

        assert_eq!(idx.size_after_filtering(&state), 0);
        assert_eq!(idx.size_after_filtering_uncached(&state), 0);
    }

    #[test]
    fn frames_example() {
        let idx = index(&["frame", "arame", "grame", "frogs"]);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "lares", "BYYYB");
        play(&mut state, "trade", "BGGBG");
        play(&mut state, "crumb", "BGBGB");

        assert_eq!(
            texts(idx.filter_to_valid(&state).words()),
            ["arame", "frame", "grame"]
        );
        assert_eq!(idx.size_after_filtering(&state), 3);
    }

    #[test]
    fn letter_counts_include_repeats() {
        let idx = index(&["speed", "erase"]);
        let counts = idx.letter_counts();
        assert_eq!(counts[&b'e'], 4);
        assert_eq!(counts[&b's'], 2);
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn intersect_sorted_handles_edges() {
        let a: &[WordId] = &[1, 3, 5, 7];
        let b: &[WordId] = &[3, 4, 5];
        assert_eq!(intersect_sorted(&mut [a, b]), vec![3, 5]);
        assert!(intersect_sorted(&mut []).is_empty());
    }
}

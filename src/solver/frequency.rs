//! Letter frequency heuristic
//!
//! Cheap alternative to the partition search. Each remaining candidate scores the sum of the
//! occurrence counts of its distinct letters across all remaining candidates, so words built
//! from common letters rank first.

use super::guesser::Guesser;
use super::ranking::{Preference, RankedGuesses};
use crate::config::GuesserConfig;
use crate::core::{ConstraintState, Word};
use crate::error::GuessError;
use crate::index::WordIndex;
use log::debug;
use rustc_hash::FxHashMap;

pub struct FrequencyGuesser {
    config: GuesserConfig,
}

impl FrequencyGuesser {
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GuesserConfig) -> Result<Self, GuessError> {
        config.validate()?;
        Ok(Self { config })
    }
}

fn letter_score(counts: &FxHashMap<u8, usize>, word: &Word) -> u64 {
    word.distinct_letters()
        .map(|letter| counts.get(&letter).copied().unwrap_or(0) as u64)
        .sum()
}

impl Guesser for FrequencyGuesser {
    fn process(
        &self,
        index: &WordIndex,
        state: &ConstraintState,
    ) -> Result<RankedGuesses, GuessError> {
        let candidates = index.filter_to_valid(state);
        let counts = candidates.letter_counts();

        let mut ranking = RankedGuesses::new(self.config.guesses_to_keep, Preference::Highest);
        for word in candidates.words() {
            ranking.insert(letter_score(counts, word), word.text());
        }
        debug!(
            "frequency ranking over {} candidates: {ranking}",
            candidates.len()
        );
        Ok(ranking)
    }

    fn determine_first_words(&self, index: &WordIndex) -> Result<RankedGuesses, GuessError> {
        let empty = ConstraintState::new(self.config.word_length)?;
        self.process(index, &empty)
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}

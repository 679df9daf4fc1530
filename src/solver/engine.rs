//! Game session driver

use super::guesser::Guesser;
use super::ranking::RankedGuesses;
use crate::core::{ConstraintState, Outcome, Word, decode_feedback};
use crate::error::GuessError;
use crate::index::WordIndex;
use log::debug;
use std::time::Instant;

/// One game in progress
///
/// Owns the dictionary and the accumulated knowledge, and asks a [`Guesser`] for the next
/// guess after each round.
pub struct Solver<G: Guesser> {
    guesser: G,
    index: WordIndex,
    state: ConstraintState,
    history: Vec<(Word, Vec<Outcome>)>,
}

impl<G: Guesser> Solver<G> {
    /// Start a session over `index` for words of `word_length` letters
    ///
    /// # Errors
    /// Returns `GuessError::InvalidInput` if the word length is unsupported.
    pub fn new(guesser: G, index: WordIndex, word_length: usize) -> Result<Self, GuessError> {
        Ok(Self {
            guesser,
            index,
            state: ConstraintState::new(word_length)?,
            history: Vec::new(),
        })
    }

    /// Rank the next guesses for the current state
    ///
    /// # Errors
    /// Propagates guesser failures.
    pub fn suggest(&self) -> Result<RankedGuesses, GuessError> {
        let started = Instant::now();
        let ranking = self.guesser.process(&self.index, &self.state)?;
        debug!(
            "turn {} ({}): {} words, best {:?} in {:.2?}",
            self.turn(),
            self.guesser.name(),
            self.index.len(),
            ranking.best_guess(),
            started.elapsed()
        );
        Ok(ranking)
    }

    /// Record a played guess and its feedback
    ///
    /// # Errors
    /// Returns an error if the guess is not a valid word or the outcomes do not fit it. The
    /// session is unchanged on error.
    pub fn record(&mut self, guess: &str, outcomes: &[Outcome]) -> Result<(), GuessError> {
        let word = Word::parse(guess)?;
        self.state.record_round(&word, outcomes)?;
        self.history.push((word, outcomes.to_vec()));
        Ok(())
    }

    /// Record a guess with `B`/`Y`/`G` feedback
    ///
    /// # Errors
    /// Returns an error if the feedback cannot be decoded or does not fit the guess.
    pub fn record_feedback(&mut self, guess: &str, feedback: &str) -> Result<(), GuessError> {
        let outcomes = decode_feedback(feedback, self.state.word_length())?;
        self.record(guess, &outcomes)
    }

    /// Words that are still possible answers, in alphabetical order
    #[must_use]
    pub fn remaining(&self) -> Vec<&Word> {
        self.index
            .prefilter(&self.state)
            .into_iter()
            .filter(|word| self.state.is_satisfied_by(word))
            .collect()
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.index.size_after_filtering_uncached(&self.state)
    }

    /// Drop the last round, returning whether there was one
    ///
    /// # Errors
    /// Returns an error if replaying the remaining rounds fails.
    pub fn undo(&mut self) -> Result<bool, GuessError> {
        if self.history.pop().is_none() {
            return Ok(false);
        }
        let mut state = ConstraintState::new(self.state.word_length())?;
        for (word, outcomes) in &self.history {
            state.record_round(word, outcomes)?;
        }
        self.state = state;
        Ok(true)
    }

    /// Forget every round and start a new game
    ///
    /// # Errors
    /// Returns an error if the word length became invalid, which cannot happen after `new`.
    pub fn reset(&mut self) -> Result<(), GuessError> {
        self.state = ConstraintState::new(self.state.word_length())?;
        self.history.clear();
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Vec<Outcome>)] {
        &self.history
    }

    /// 1-based number of the round about to be played
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub const fn index(&self) -> &WordIndex {
        &self.index
    }

    #[must_use]
    pub const fn guesser(&self) -> &G {
        &self.guesser
    }
}

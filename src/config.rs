//! Guesser configuration
//!
//! Every tunable of the search lives here and is passed into constructors. The CLI fills it
//! from flags and `WORDLE_*` environment variables.

use crate::core::{MAX_WORD_LENGTH, ScoringRule, Word};
use crate::error::GuessError;
use crate::index::DEFAULT_CACHE_CAPACITY;
use std::num::NonZeroUsize;

/// Opening guess used when the search is skipped on an empty state
pub const DEFAULT_OPENING_WORD: &str = "crave";

/// Number of distinct scores retained by default
pub const DEFAULT_GUESSES_TO_KEEP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuesserConfig {
    /// Letters per word for the session (default: 5)
    pub word_length: usize,

    /// Distinct scores kept in the ranking (default: 5)
    pub guesses_to_keep: usize,

    /// Scoring threads; 1 runs single-threaded (default: available parallelism)
    pub worker_count: usize,

    /// Run the full search even on an empty state (default: false)
    pub force_full_search: bool,

    /// Guess returned for an empty state when the search is skipped (default: `crave`)
    pub opening_word: String,

    /// Bound on partition cache entries per round (default: 1,000,000)
    pub cache_capacity: usize,

    /// How feedback is simulated for hypothetical answers (default: presence)
    pub scoring_rule: ScoringRule,
}

impl Default for GuesserConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            guesses_to_keep: DEFAULT_GUESSES_TO_KEEP,
            worker_count: available_workers(),
            force_full_search: false,
            opening_word: DEFAULT_OPENING_WORD.to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            scoring_rule: ScoringRule::default(),
        }
    }
}

impl GuesserConfig {
    /// Single-threaded configuration for reproducible runs
    #[must_use]
    pub fn deterministic() -> Self {
        Self {
            worker_count: 1,
            ..Self::default()
        }
    }

    /// Check the values and return the opening word as a [`Word`]
    ///
    /// # Errors
    /// Returns `GuessError::InvalidInput` for a zero or oversized word length, zero guesses to
    /// keep, or zero workers, and `GuessError::InvalidWord` if the opening word does not have
    /// `word_length` letters.
    pub fn validate(&self) -> Result<Word, GuessError> {
        if self.word_length == 0 || self.word_length > MAX_WORD_LENGTH {
            return Err(GuessError::InvalidInput(format!(
                "word length must be between 1 and {MAX_WORD_LENGTH}, got {}",
                self.word_length
            )));
        }
        if self.guesses_to_keep == 0 {
            return Err(GuessError::InvalidInput(
                "guesses to keep must be at least 1".to_string(),
            ));
        }
        if self.worker_count == 0 {
            return Err(GuessError::InvalidInput(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(Word::new(self.opening_word.as_str(), self.word_length)?)
    }
}

/// Number of threads the machine can run in parallel, at least 1
#[must_use]
pub fn available_workers() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

//! Guess selection
//!
//! Defines the Guesser trait and the enum used to pick an implementation at runtime.

use super::brute::BruteGuesser;
use super::frequency::FrequencyGuesser;
use super::ranking::RankedGuesses;
use crate::config::GuesserConfig;
use crate::core::ConstraintState;
use crate::error::GuessError;
use crate::index::WordIndex;

/// Ranks candidate guesses for a game state
pub trait Guesser {
    /// Rank guesses from `index` for the given state
    ///
    /// The state is only read. An empty ranking (no best guess) means no candidate remains.
    ///
    /// # Errors
    /// Returns an error if a guess cannot be scored.
    fn process(&self, index: &WordIndex, state: &ConstraintState)
    -> Result<RankedGuesses, GuessError>;

    /// Rank opening guesses, always running the full computation on an empty state
    ///
    /// # Errors
    /// Returns an error if a guess cannot be scored.
    fn determine_first_words(&self, index: &WordIndex) -> Result<RankedGuesses, GuessError>;

    /// Short name used in output
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection while keeping static dispatch.
pub enum GuesserKind {
    /// Partition-size search (default)
    Brute(BruteGuesser),
    /// Letter frequency heuristic
    Frequency(FrequencyGuesser),
}

impl GuesserKind {
    /// Build the guesser named `name`
    ///
    /// Supported names: "brute" and "frequency" (alias "simple").
    ///
    /// # Errors
    /// Returns `GuessError::InvalidInput` for an unknown name, or any error from validating
    /// `config`.
    pub fn from_name(name: &str, config: GuesserConfig) -> Result<Self, GuessError> {
        match name.to_ascii_lowercase().as_str() {
            "brute" => Ok(Self::Brute(BruteGuesser::new(config)?)),
            "frequency" | "simple" => Ok(Self::Frequency(FrequencyGuesser::new(config)?)),
            other => Err(GuessError::InvalidInput(format!(
                "unknown guesser '{other}', expected brute or frequency"
            ))),
        }
    }
}

impl Guesser for GuesserKind {
    fn process(
        &self,
        index: &WordIndex,
        state: &ConstraintState,
    ) -> Result<RankedGuesses, GuessError> {
        match self {
            Self::Brute(g) => g.process(index, state),
            Self::Frequency(g) => g.process(index, state),
        }
    }

    fn determine_first_words(&self, index: &WordIndex) -> Result<RankedGuesses, GuessError> {
        match self {
            Self::Brute(g) => g.determine_first_words(index),
            Self::Frequency(g) => g.determine_first_words(index),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Brute(g) => g.name(),
            Self::Frequency(g) => g.name(),
        }
    }
}

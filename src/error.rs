//! Error taxonomy for the guessing engine
//!
//! Caller-input problems (`InvalidInput`, `InvalidEncoding`, `LengthMismatch`, `InvalidWord`)
//! are reported immediately. `WorkerFailure` and `WorkerPool` are internal and fatal for the
//! call that produced them. An exhausted search is not an error: it surfaces as `None`.

use crate::core::WordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuessError {
    /// Mismatched lengths between two words, or a bad configuration value
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Feedback string holds a character outside `B`, `Y`, `G`
    #[error("invalid feedback character '{character}' at position {position}, expected B, Y or G")]
    InvalidEncoding { character: char, position: usize },

    /// Feedback length differs from the guessed word
    #[error("word '{word}' has {letters} letters but {outcomes} outcomes were given")]
    LengthMismatch {
        word: String,
        letters: usize,
        outcomes: usize,
    },

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    /// A scoring task failed; the whole search is aborted
    #[error("scoring guess '{guess}' failed: {source}")]
    WorkerFailure {
        guess: String,
        #[source]
        source: Box<GuessError>,
    },

    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl GuessError {
    /// True for errors caused by what the caller passed in
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::InvalidEncoding { .. }
                | Self::LengthMismatch { .. }
                | Self::InvalidWord(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_errors_are_distinguished_from_fatal_ones() {
        assert!(GuessError::InvalidInput("x".into()).is_caller_error());
        assert!(
            GuessError::InvalidEncoding {
                character: 'x',
                position: 0
            }
            .is_caller_error()
        );

        let fatal = GuessError::WorkerFailure {
            guess: "crane".into(),
            source: Box::new(GuessError::InvalidInput("boom".into())),
        };
        assert!(!fatal.is_caller_error());
    }

    #[test]
    fn worker_failure_names_the_guess() {
        let err = GuessError::WorkerFailure {
            guess: "crane".into(),
            source: Box::new(GuessError::InvalidInput("boom".into())),
        };
        assert_eq!(
            err.to_string(),
            "scoring guess 'crane' failed: invalid input: boom"
        );
    }
}

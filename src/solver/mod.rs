//! Guess search
//!
//! Guessers rank the next guess for a [`crate::core::ConstraintState`]; the session driver
//! plays rounds with one of them.

mod brute;
mod engine;
mod frequency;
mod guesser;
mod ranking;

pub use brute::BruteGuesser;
pub use engine::Solver;
pub use frequency::FrequencyGuesser;
pub use guesser::{Guesser, GuesserKind};
pub use ranking::{Preference, RankedGuesses};

//! Core domain types
//!
//! Words, per-letter feedback, and the constraint state accumulated across rounds.
//! Everything here is pure and single-threaded; the index and search build on top.

mod outcome;
mod state;
mod word;

pub use outcome::{
    Outcome, ScoringRule, decode_feedback, encode_feedback, is_solved, score_guess,
    score_guess_standard,
};
pub use state::{ConstraintState, LetterKnowledge};
pub use word::{ALPHABET_SIZE, MAX_WORD_LENGTH, Word, WordError, letter_bit, letter_index};

//! Per-letter feedback and how it is produced
//!
//! Feedback is a sequence of [`Outcome`]s, one per letter position. The textual encoding uses
//! one character per position:
//! - `B` = black (letter not in word)
//! - `Y` = yellow (letter in word, wrong position)
//! - `G` = green (letter in correct position)

use super::word::{ALPHABET_SIZE, Word, letter_index};
use crate::error::GuessError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// Black: letter not in word
    NotInWord,
    /// Yellow: letter in word, wrong position
    WrongSpot,
    /// Green: letter in correct position
    Correct,
}

impl Outcome {
    /// Decode a single feedback character, only uppercase `B`, `Y` or `G`
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'B' => Some(Self::NotInWord),
            'Y' => Some(Self::WrongSpot),
            'G' => Some(Self::Correct),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::NotInWord => 'B',
            Self::WrongSpot => 'Y',
            Self::Correct => 'G',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::NotInWord => '⬜',
            Self::WrongSpot => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Rule used to turn a (secret, guess) pair into feedback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScoringRule {
    /// Any non-green letter present anywhere in the secret is yellow, however often it repeats
    #[default]
    Presence,
    /// Official rule: greens consume letters first, yellows consume what is left, left to right
    Standard,
}

impl ScoringRule {
    /// Score `guess` against `secret` under this rule
    ///
    /// # Errors
    /// Returns `GuessError::InvalidInput` if the words differ in length.
    pub fn score(self, secret: &Word, guess: &Word) -> Result<Vec<Outcome>, GuessError> {
        match self {
            Self::Presence => score_guess(secret, guess),
            Self::Standard => score_guess_standard(secret, guess),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Presence => "presence",
            Self::Standard => "standard",
        }
    }
}

impl FromStr for ScoringRule {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "presence" | "simple" => Ok(Self::Presence),
            "standard" | "official" => Ok(Self::Standard),
            other => Err(GuessError::InvalidInput(format!(
                "unknown scoring rule '{other}', expected presence or standard"
            ))),
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_lengths(secret: &Word, guess: &Word) -> Result<(), GuessError> {
    if secret.len() != guess.len() || secret.is_empty() {
        return Err(GuessError::InvalidInput(format!(
            "cannot score '{guess}' ({} letters) against '{secret}' ({} letters)",
            guess.len(),
            secret.len()
        )));
    }
    Ok(())
}

/// Calculate the feedback when `guess` is played and `secret` is the answer
///
/// Green when the letters match, yellow when the guessed letter occurs anywhere in the
/// secret, black otherwise. Repeated letters are not counted: every mismatching copy of a
/// present letter is yellow.
///
/// # Errors
/// Returns `GuessError::InvalidInput` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_guesser::core::{Outcome, Word, score_guess};
///
/// let secret = Word::new("aloet", 5).unwrap();
/// let guess = Word::new("arose", 5).unwrap();
///
/// assert_eq!(
///     score_guess(&secret, &guess).unwrap(),
///     vec![
///         Outcome::Correct,
///         Outcome::NotInWord,
///         Outcome::Correct,
///         Outcome::NotInWord,
///         Outcome::WrongSpot,
///     ]
/// );
/// ```
pub fn score_guess(secret: &Word, guess: &Word) -> Result<Vec<Outcome>, GuessError> {
    check_lengths(secret, guess)?;

    Ok(guess
        .bytes()
        .iter()
        .zip(secret.bytes())
        .map(|(&g, &s)| {
            if g == s {
                Outcome::Correct
            } else if secret.has_letter(g) {
                Outcome::WrongSpot
            } else {
                Outcome::NotInWord
            }
        })
        .collect())
}

/// Calculate feedback with the official duplicate-letter accounting
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass: mark yellows from the remaining pool, left to right
///
/// # Errors
/// Returns `GuessError::InvalidInput` if the words differ in length.
pub fn score_guess_standard(secret: &Word, guess: &Word) -> Result<Vec<Outcome>, GuessError> {
    check_lengths(secret, guess)?;

    let mut result = vec![Outcome::NotInWord; guess.len()];
    let mut available = [0u8; ALPHABET_SIZE];

    for (i, (&g, &s)) in guess.bytes().iter().zip(secret.bytes()).enumerate() {
        if g == s {
            result[i] = Outcome::Correct;
        } else {
            available[letter_index(s)] += 1;
        }
    }

    for (i, &g) in guess.bytes().iter().enumerate() {
        if result[i] == Outcome::Correct {
            continue;
        }
        let count = &mut available[letter_index(g)];
        if *count > 0 {
            result[i] = Outcome::WrongSpot;
            *count -= 1;
        }
    }

    Ok(result)
}

/// Parse a feedback string like `"GYBBG"` into outcomes
///
/// # Errors
/// Returns `GuessError::InvalidEncoding` for characters other than `B`/`Y`/`G` (lowercase
/// included), and
/// `GuessError::InvalidInput` if the string does not have `length` characters.
///
/// # Examples
/// ```
/// use wordle_guesser::core::{Outcome, decode_feedback};
///
/// let outcomes = decode_feedback("GYB", 3).unwrap();
/// assert_eq!(outcomes, vec![Outcome::Correct, Outcome::WrongSpot, Outcome::NotInWord]);
/// assert!(decode_feedback("GXB", 3).is_err());
/// ```
pub fn decode_feedback(encoded: &str, length: usize) -> Result<Vec<Outcome>, GuessError> {
    let outcomes = encoded
        .chars()
        .enumerate()
        .map(|(position, character)| {
            Outcome::from_code(character)
                .ok_or(GuessError::InvalidEncoding { character, position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if outcomes.len() != length {
        return Err(GuessError::InvalidInput(format!(
            "feedback '{encoded}' has {} characters, expected {length}",
            outcomes.len()
        )));
    }
    Ok(outcomes)
}

/// Encode outcomes as a `B`/`Y`/`G` string
#[must_use]
pub fn encode_feedback(outcomes: &[Outcome]) -> String {
    outcomes.iter().map(|o| o.code()).collect()
}

/// True when every position is green
#[must_use]
pub fn is_solved(outcomes: &[Outcome]) -> bool {
    !outcomes.is_empty() && outcomes.iter().all(|&o| o == Outcome::Correct)
}

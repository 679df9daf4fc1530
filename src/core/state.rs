//! Accumulated knowledge from played rounds
//!
//! [`LetterKnowledge`] holds what feedback has revealed about letters and positions.
//! [`ConstraintState`] adds the words already guessed. Both compare and hash by content,
//! so a snapshot can key the partition cache.

use super::outcome::Outcome;
use super::word::{ALPHABET_SIZE, MAX_WORD_LENGTH, Word, letter_bit, letter_index};
use crate::error::GuessError;
use std::collections::BTreeSet;
use std::fmt;

/// Letter and position constraints learned from feedback
///
/// Masks are indexed by letter (bit 0 = `a`) or by position (bit 0 = first letter).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterKnowledge {
    required: Box<[Option<u8>]>,
    misplaced: [u32; ALPHABET_SIZE],
    excluded: u32,
}

impl LetterKnowledge {
    /// Knowledge for words of `length` letters with nothing learned yet
    ///
    /// # Errors
    /// Returns `GuessError::InvalidInput` if `length` is zero or above `MAX_WORD_LENGTH`.
    pub fn new(length: usize) -> Result<Self, GuessError> {
        if length == 0 || length > MAX_WORD_LENGTH {
            return Err(GuessError::InvalidInput(format!(
                "word length must be between 1 and {MAX_WORD_LENGTH}, got {length}"
            )));
        }
        Ok(Self {
            required: vec![None; length].into_boxed_slice(),
            misplaced: [0; ALPHABET_SIZE],
            excluded: 0,
        })
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.required.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.iter().all(Option::is_none)
            && self.misplaced.iter().all(|&mask| mask == 0)
            && self.excluded == 0
    }

    /// Letters known to be in the word from green or yellow feedback
    #[must_use]
    pub fn known_present(&self) -> u32 {
        self.required
            .iter()
            .flatten()
            .fold(self.misplaced_mask(), |mask, &letter| mask | letter_bit(letter))
    }

    /// Letters that must appear, each with at least one forbidden position
    #[must_use]
    pub fn misplaced_mask(&self) -> u32 {
        self.misplaced
            .iter()
            .enumerate()
            .filter(|&(_, &positions)| positions != 0)
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    /// Required letter per position, for positions that have one
    pub fn required_positions(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.required
            .iter()
            .enumerate()
            .filter_map(|(i, letter)| letter.map(|l| (i, l)))
    }

    /// Misplaced letters with the positions they are known not to occupy
    pub fn misplaced_letters(&self) -> impl Iterator<Item = (u8, Vec<usize>)> + '_ {
        (b'a'..=b'z').filter_map(|letter| {
            let positions = self.misplaced[letter_index(letter)];
            (positions != 0).then(|| {
                (0..self.word_length())
                    .filter(|&i| positions & (1 << i) != 0)
                    .collect::<Vec<usize>>()
            })
            .map(|positions| (letter, positions))
        })
    }

    /// Letters confirmed absent from the answer
    pub fn excluded_letters(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(|&letter| self.excluded & letter_bit(letter) != 0)
    }

    /// Fold one round of feedback into the knowledge
    ///
    /// `NotInWord` never overrides green or yellow evidence for the same letter, from this
    /// round or an earlier one.
    fn apply(&mut self, word: &Word, outcomes: &[Outcome]) -> Result<(), GuessError> {
        for (i, (&letter, &outcome)) in word.bytes().iter().zip(outcomes).enumerate() {
            if outcome == Outcome::Correct
                && let Some(existing) = self.required[i]
                && existing != letter
            {
                return Err(GuessError::InvalidInput(format!(
                    "position {i} is already known to be '{}', feedback says '{}'",
                    existing as char, letter as char
                )));
            }
        }

        let mut positive = 0u32;
        for (i, (&letter, &outcome)) in word.bytes().iter().zip(outcomes).enumerate() {
            match outcome {
                Outcome::Correct => {
                    self.required[i] = Some(letter);
                    positive |= letter_bit(letter);
                }
                Outcome::WrongSpot => {
                    self.misplaced[letter_index(letter)] |= 1 << i;
                    positive |= letter_bit(letter);
                }
                Outcome::NotInWord => {}
            }
        }

        self.excluded &= !positive;
        let known = self.known_present();
        for (&letter, &outcome) in word.bytes().iter().zip(outcomes) {
            if outcome == Outcome::NotInWord && known & letter_bit(letter) == 0 {
                self.excluded |= letter_bit(letter);
            }
        }
        Ok(())
    }

    fn has_required_letters(&self, word: &Word) -> bool {
        word.len() == self.word_length()
            && self
                .required_positions()
                .all(|(i, letter)| word.char_at(i) == letter)
    }

    /// Required positions, required letters and excluded letters, but not the positions a
    /// yellow letter is known not to occupy
    #[must_use]
    pub fn is_satisfied_by_ignoring_position_exclusions(&self, word: &Word) -> bool {
        let mask = word.letter_mask();
        self.has_required_letters(word)
            && mask & self.misplaced_mask() == self.misplaced_mask()
            && mask & self.excluded == 0
    }

    /// Every letter constraint, including yellow position exclusions
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        self.is_satisfied_by_ignoring_position_exclusions(word) && self.respects_wrong_spots(word)
    }

    /// True when no yellow letter sits at a position it was reported yellow in
    #[must_use]
    pub fn respects_wrong_spots(&self, word: &Word) -> bool {
        word.bytes()
            .iter()
            .enumerate()
            .all(|(i, &letter)| self.misplaced[letter_index(letter)] & (1 << i) == 0)
    }
}

/// Everything learned so far in one session
///
/// Cloning is deep: the search extends clones with hypothetical rounds without touching the
/// caller's state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintState {
    knowledge: LetterKnowledge,
    tried: BTreeSet<String>,
}

impl ConstraintState {
    /// Empty state for words of `length` letters
    ///
    /// # Errors
    /// Returns `GuessError::InvalidInput` if `length` is zero or above `MAX_WORD_LENGTH`.
    pub fn new(length: usize) -> Result<Self, GuessError> {
        Ok(Self {
            knowledge: LetterKnowledge::new(length)?,
            tried: BTreeSet::new(),
        })
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.knowledge.word_length()
    }

    #[must_use]
    pub fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    /// Words already guessed, in alphabetical order
    pub fn tried_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.tried.iter().map(String::as_str)
    }

    #[must_use]
    pub fn was_tried(&self, word: &str) -> bool {
        self.tried.contains(word)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.knowledge.is_empty() && self.tried.is_empty()
    }

    /// Record one round: the guessed word and the feedback it received
    ///
    /// # Errors
    /// - `GuessError::LengthMismatch` if `outcomes` and `word` differ in length, or the word is
    ///   longer than the state's word length
    /// - `GuessError::InvalidInput` if a green contradicts an earlier green at that position
    ///
    /// The state is left untouched when an error is returned.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{ConstraintState, Word, decode_feedback};
    ///
    /// let mut state = ConstraintState::new(5).unwrap();
    /// let guess = Word::new("house", 5).unwrap();
    /// state.record_round(&guess, &decode_feedback("BYBBB", 5).unwrap()).unwrap();
    ///
    /// assert!(state.is_satisfied_by(&Word::new("aloft", 5).unwrap()));
    /// assert!(!state.is_satisfied_by(&Word::new("haver", 5).unwrap()));
    /// ```
    pub fn record_round(&mut self, word: &Word, outcomes: &[Outcome]) -> Result<(), GuessError> {
        if outcomes.len() != word.len() || word.len() > self.word_length() {
            return Err(GuessError::LengthMismatch {
                word: word.text().to_string(),
                letters: word.len(),
                outcomes: outcomes.len(),
            });
        }
        self.knowledge.apply(word, outcomes)?;
        self.tried.insert(word.text().to_string());
        Ok(())
    }

    /// Whether `word` is still a possible answer
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        !self.tried.contains(word.text()) && self.knowledge.is_satisfied_by(word)
    }

    /// Relaxed check used to build a cheap superset of the candidates
    #[must_use]
    pub fn is_satisfied_by_ignoring_position_exclusions(&self, word: &Word) -> bool {
        self.knowledge.is_satisfied_by_ignoring_position_exclusions(word)
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern: String = self
            .knowledge
            .required
            .iter()
            .map(|letter| letter.map_or('_', char::from))
            .collect();
        write!(f, "known: {pattern}")?;

        let misplaced: Vec<String> = self
            .knowledge
            .misplaced_letters()
            .map(|(letter, positions)| format!("{}{positions:?}", letter as char))
            .collect();
        if !misplaced.is_empty() {
            write!(f, ", misplaced: {}", misplaced.join(" "))?;
        }

        let excluded: String = self.knowledge.excluded_letters().map(char::from).collect();
        if !excluded.is_empty() {
            write!(f, ", excluded: {excluded}")?;
        }

        if !self.tried.is_empty() {
            let tried: Vec<&str> = self.tried_words().collect();
            write!(f, ", tried: {}", tried.join(" "))?;
        }
        Ok(())
    }
}

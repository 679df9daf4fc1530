//! Word representation
//!
//! A Word stores a lowercase ASCII word along with a bitmask of the letters it contains.

use std::fmt;
use thiserror::Error;

/// Number of letters in the supported alphabet (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;

/// Longest word the constraint bitmasks can describe
pub const MAX_WORD_LENGTH: usize = 32;

/// A validated word with letter presence tracking
///
/// Ordering is lexicographic on the text, which the search relies on for tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word must be between 1 and {MAX_WORD_LENGTH} letters, got {0}")]
    OutOfRange(usize),
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
}

/// Index of a lowercase ASCII letter in the alphabet
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Bit for a lowercase ASCII letter inside a letter mask
#[inline]
#[must_use]
pub const fn letter_bit(letter: u8) -> u32 {
    1 << letter_index(letter)
}

impl Word {
    /// Create a word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError` if the length differs or the text holds anything but ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Word;
    ///
    /// let word = Word::new("CRANE", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("crane", 6).is_err());
    /// assert!(Word::new("cr4ne", 5).is_err());
    /// ```
    pub fn new(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::parse(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Create a word of any supported length
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, too long, or holds anything but ASCII letters.
    pub fn parse(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_lowercase();

        if text.is_empty() || text.len() > MAX_WORD_LENGTH {
            return Err(WordError::OutOfRange(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.bytes().fold(0, |mask, b| mask | letter_bit(b));
        Ok(Self { text, letters })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.letters & letter_bit(letter) != 0
    }

    /// Bitmask of the distinct letters in the word, bit 0 = `a`
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.letters
    }

    /// Iterate the distinct letters of the word in alphabetical order
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(|&letter| self.has_letter(letter))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

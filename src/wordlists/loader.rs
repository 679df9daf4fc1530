//! Word list loading utilities
//!
//! Only entries made of exactly `length` lowercase ASCII letters are kept. Capitalized names,
//! possessives and words of other lengths are skipped, and duplicates keep their first
//! occurrence.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Dictionary read when no word list is given
pub const DEFAULT_WORDS_PATH: &str = "/usr/share/dict/words";

/// Load words of `length` letters from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_guesser::wordlists::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = filter_words(content.lines(), length);
    debug!(
        "loaded {} words of length {length} from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// Apply the same filter to an in-memory list
///
/// # Examples
/// ```
/// use wordle_guesser::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["crane", "Crane", "it's", "slate", "crane"], 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    filter_words(slice.iter().copied(), length)
}

fn filter_words<'a>(lines: impl Iterator<Item = &'a str>, length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    lines
        .map(str::trim)
        .filter(|line| line.len() == length && line.bytes().all(|b| b.is_ascii_lowercase()))
        .filter(|line| seen.insert(*line))
        .filter_map(|line| Word::new(line, length).ok())
        .collect()
}

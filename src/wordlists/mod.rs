//! Word lists
//!
//! Dictionaries are plain newline-separated files such as `/usr/share/dict/words`.

pub mod loader;

pub use loader::{DEFAULT_WORDS_PATH, load_from_file, words_from_slice};

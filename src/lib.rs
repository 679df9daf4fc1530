//! Wordle Guesser
//!
//! Suggests Wordle guesses by brute force: every dictionary word is tried against every
//! remaining candidate answer, and the guess that leaves the fewest candidates in total wins.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_guesser::config::GuesserConfig;
//! use wordle_guesser::core::{ConstraintState, Word, decode_feedback};
//! use wordle_guesser::index::WordIndex;
//! use wordle_guesser::solver::{BruteGuesser, Guesser};
//! use wordle_guesser::wordlists::load_from_file;
//!
//! let index = WordIndex::build(load_from_file("/usr/share/dict/words", 5).unwrap());
//! let guesser = BruteGuesser::new(GuesserConfig::default()).unwrap();
//!
//! // The game answered CRANE with black, green, green, black, green
//! let mut state = ConstraintState::new(5).unwrap();
//! let crane = Word::new("crane", 5).unwrap();
//! state.record_round(&crane, &decode_feedback("BGGBG", 5).unwrap()).unwrap();
//!
//! let ranking = guesser.process(&index, &state).unwrap();
//! println!("Next guess: {:?}", ranking.best_guess());
//! ```

// Core domain types
pub mod core;

// Search configuration
pub mod config;

// Library error type
pub mod error;

// Dictionary index and partition cache
pub mod index;

// Guessers and the game session
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

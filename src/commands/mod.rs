//! Command implementations

pub mod benchmark;
pub mod first_word;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, progress_bar, run_benchmark, select_targets};
pub use first_word::determine_first_words;
pub use play::{PlayInput, print_history, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};

//! Benchmark command
//!
//! Plays many answers and collects the distribution of guess counts.

use super::solve::{SolveConfig, solve_word};
use crate::core::{ScoringRule, Word};
use crate::error::GuessError;
use crate::solver::{Guesser, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved answers
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the answers to play
///
/// `count` of `None` (or at least the dictionary size) takes every word in order; otherwise a
/// sample is drawn, reproducible when `seed` is given.
#[must_use]
pub fn select_targets(words: &[Word], count: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    match count {
        Some(count) if count < words.len() => {
            let mut rng = seed.map_or_else(
                || StdRng::from_rng(&mut rand::rng()),
                StdRng::seed_from_u64,
            );
            let mut targets: Vec<Word> = words.choose_multiple(&mut rng, count).cloned().collect();
            targets.sort();
            targets
        }
        _ => words.to_vec(),
    }
}

/// Solve every target in turn
///
/// # Errors
///
/// Returns the first guesser failure; a target outside the dictionary is also an error.
pub fn run_benchmark<G: Guesser>(
    solver: &mut Solver<G>,
    targets: &[Word],
    max_guesses: usize,
    scoring_rule: ScoringRule,
    progress: &ProgressBar,
) -> Result<BenchmarkResult, GuessError> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    progress.set_length(targets.len() as u64);
    for (done, target) in targets.iter().enumerate() {
        let config = SolveConfig {
            max_guesses,
            scoring_rule,
            ..SolveConfig::new(target.text().to_string())
        };
        let result = solve_word(config, solver)?;
        let guesses = result.guesses.len();

        if result.success {
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_seen = max_seen.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(result.target);
        }

        if (done + 1) % 100 == 0 {
            info!(
                "played {}/{} answers in {:.0?}",
                done + 1,
                targets.len(),
                start.elapsed()
            );
        }
        let solved = done + 1 - failures.len();
        if solved > 0 {
            progress.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        progress.inc(1);
    }
    progress.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();
    let solved = total_words - failures.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses: max_seen,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Progress bar used for long benchmark runs
#[must_use]
pub fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

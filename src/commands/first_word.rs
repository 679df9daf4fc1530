//! Opening word search
//!
//! Runs the full computation on an empty state, which the session normally skips.

use crate::error::GuessError;
use crate::solver::{Guesser, RankedGuesses, Solver};
use log::info;
use std::time::{Duration, Instant};

/// Rank opening words over the session's dictionary
///
/// # Errors
///
/// Returns an error if the guesser fails.
pub fn determine_first_words<G: Guesser>(
    solver: &Solver<G>,
) -> Result<(RankedGuesses, Duration), GuessError> {
    let started = Instant::now();
    info!(
        "ranking opening words over {} words with {}",
        solver.index().len(),
        solver.guesser().name()
    );
    let ranking = solver.guesser().determine_first_words(solver.index())?;
    Ok((ranking, started.elapsed()))
}

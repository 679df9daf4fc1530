//! Word solving command
//!
//! Plays a game against a known answer and returns the solution path.

use crate::core::{Outcome, ScoringRule, Word, is_solved};
use crate::error::GuessError;
use crate::solver::{Guesser, Solver};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
    pub scoring_rule: ScoringRule,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
            scoring_rule: ScoringRule::default(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub outcomes: Vec<Outcome>,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Partition score of the guess, `None` for the unscored opening word
    pub score: Option<u64>,
    /// The kept ranking as printed by the session
    pub ranking: String,
}

/// Play `solver` against `config.target` from a fresh game
///
/// The game stops when the answer is guessed, when no guess remains, or after
/// `config.max_guesses` rounds.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a word of the session's length
/// - The target is not in the dictionary
/// - The guesser fails
pub fn solve_word<G: Guesser>(
    config: SolveConfig,
    solver: &mut Solver<G>,
) -> Result<SolveResult, GuessError> {
    let target = Word::new(config.target.as_str(), solver.state().word_length())?;
    if !solver.index().contains(target.text()) {
        return Err(GuessError::InvalidInput(format!(
            "'{target}' is not in the dictionary"
        )));
    }
    solver.reset()?;

    let mut guesses = Vec::new();
    for _ in 0..config.max_guesses {
        let candidates_before = solver.remaining_count();
        let ranking = solver.suggest()?;
        let Some(guess) = ranking.best_guess() else {
            break;
        };
        let guess = Word::parse(guess)?;

        let outcomes = config.scoring_rule.score(&target, &guess)?;
        solver.record(guess.text(), &outcomes)?;
        let solved = is_solved(&outcomes);

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            outcomes,
            candidates_before,
            candidates_after: solver.remaining_count(),
            score: ranking.best_score(),
            ranking: ranking.to_string(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}

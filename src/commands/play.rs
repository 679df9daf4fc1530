//! Interactive console mode
//!
//! Suggests a guess each turn and reads the feedback the game gave for it.

use crate::core::is_solved;
use crate::output::formatters::outcomes_to_emoji;
use crate::solver::{Guesser, RankedGuesses, Solver};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Remaining words are listed when fewer than this many are left
const LIST_REMAINING_BELOW: usize = 100;

/// One line of user input
#[derive(Debug, PartialEq, Eq)]
pub enum PlayInput {
    Quit,
    New,
    Undo,
    Win,
    /// Feedback for the suggested guess, or for `word` when one was typed
    Feedback {
        word: Option<String>,
        feedback: String,
    },
    Empty,
}

impl PlayInput {
    /// Parse `BYGBB`, `crane BYGBB`, `win` or a command
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            "undo" | "u" => Self::Undo,
            "win" | "win!" | "solved" => Self::Win,
            _ => match line.split_once(char::is_whitespace) {
                Some((word, feedback)) => Self::Feedback {
                    word: Some(word.to_string()),
                    feedback: feedback.trim().to_string(),
                },
                None => Self::Feedback {
                    word: None,
                    feedback: line.to_string(),
                },
            },
        }
    }
}

/// What the player sees at the start of a turn
struct TurnView {
    remaining: Vec<String>,
    ranking: RankedGuesses,
}

impl TurnView {
    fn compute<G: Guesser>(solver: &Solver<G>) -> Result<Self> {
        Ok(Self {
            remaining: solver
                .remaining()
                .iter()
                .map(|w| w.text().to_string())
                .collect(),
            ranking: solver.suggest()?,
        })
    }
}

/// Run the interactive loop until the game is won, the user quits, or input ends
///
/// The search only runs again after the game changes: accepted feedback, a successful undo
/// or a new game.
///
/// # Errors
///
/// Returns an error on I/O failure or if the guesser fails. Bad feedback is reported and the
/// turn is asked again.
pub fn run_play<G: Guesser, R: BufRead, W: Write>(
    solver: &mut Solver<G>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    print_instructions(out, solver.state().word_length())?;

    let mut view: Option<TurnView> = None;
    loop {
        let current = match view.take() {
            Some(current) => current,
            None => TurnView::compute(solver)?,
        };
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Turn {}: {} candidates remaining",
            solver.turn(),
            current.remaining.len().to_string().bright_cyan()
        )?;
        if !current.remaining.is_empty() && current.remaining.len() < LIST_REMAINING_BELOW {
            writeln!(out, "Remaining words: {}", current.remaining.join(", "))?;
        }

        let suggestion = current.ranking.best_guess().map(str::to_string);
        match &suggestion {
            Some(guess) => {
                writeln!(out, "Best guesses: {}", current.ranking)?;
                writeln!(
                    out,
                    "Suggested guess: {}",
                    guess.to_uppercase().bright_yellow().bold()
                )?;
            }
            None => writeln!(
                out,
                "{}",
                "No guess remains. Your feedback may be incorrect; try 'undo' or 'new'.".red()
            )?,
        }

        let Some(line) = prompt(input, out, "Feedback")? else {
            return Ok(());
        };
        match PlayInput::parse(&line) {
            PlayInput::Quit => {
                writeln!(out, "Thanks for playing!")?;
                return Ok(());
            }
            PlayInput::New => {
                solver.reset()?;
                writeln!(out, "New game started!")?;
            }
            PlayInput::Undo => {
                if solver.undo()? {
                    writeln!(out, "Undone! Back to turn {}", solver.turn())?;
                } else {
                    writeln!(out, "Nothing to undo!")?;
                    view = Some(current);
                }
            }
            PlayInput::Win => {
                print_victory(out, solver.turn())?;
                print_history(solver, out)?;
                return Ok(());
            }
            PlayInput::Empty => view = Some(current),
            PlayInput::Feedback { word, feedback } => {
                let Some(guess) = word.or(suggestion) else {
                    writeln!(out, "No suggested guess; enter '<word> <feedback>'")?;
                    view = Some(current);
                    continue;
                };
                match solver.record_feedback(&guess, &feedback.to_ascii_uppercase()) {
                    Ok(()) => {
                        if solver.history().last().is_some_and(|(_, o)| is_solved(o)) {
                            print_victory(out, solver.history().len())?;
                            print_history(solver, out)?;
                            return Ok(());
                        }
                    }
                    Err(e) if e.is_caller_error() => {
                        writeln!(out, "{} {e}", "Invalid input:".red())?;
                        view = Some(current);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }
}

fn print_instructions<W: Write>(out: &mut W, length: usize) -> Result<()> {
    writeln!(out, "{}", "Wordle guesser - interactive mode".bold())?;
    writeln!(out, "I'll suggest a guess each turn. Encode the result as {length} letters:")?;
    writeln!(out, "  B = black, not in word")?;
    writeln!(out, "  Y = yellow, wrong location")?;
    writeln!(out, "  G = green, correct location")?;
    writeln!(out, "Type '<word> <feedback>' if you played a different word.")?;
    writeln!(out, "Enter 'win' when done. Commands: 'undo', 'new', 'quit'.")?;
    Ok(())
}

fn print_victory<W: Write>(out: &mut W, guesses: usize) -> Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "Solved in {guesses} {}!",
            if guesses == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold()
    )?;
    Ok(())
}

/// Print the played rounds as emoji rows
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn print_history<G: Guesser, W: Write>(solver: &Solver<G>, out: &mut W) -> Result<()> {
    for (i, (word, outcomes)) in solver.history().iter().enumerate() {
        writeln!(
            out,
            "  {}. {} {}",
            i + 1,
            word.text().to_uppercase(),
            outcomes_to_emoji(outcomes)
        )?;
    }
    Ok(())
}

/// Read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

//! Wordle Guesser - CLI
//!
//! Suggests guesses interactively, auto-plays known answers, and benchmarks the search.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_guesser::{
    commands::{
        SolveConfig, determine_first_words, progress_bar, run_benchmark, run_play, select_targets,
        solve_word,
    },
    config::{DEFAULT_GUESSES_TO_KEEP, DEFAULT_OPENING_WORD, GuesserConfig, available_workers},
    core::ScoringRule,
    index::{DEFAULT_CACHE_CAPACITY, WordIndex},
    output::{print_benchmark_result, print_first_words, print_solve_result},
    solver::{GuesserKind, Solver},
    wordlists::{DEFAULT_WORDS_PATH, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_guesser",
    about = "Wordle guesser that picks the guess leaving the fewest candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-separated dictionary file
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDS", default_value = DEFAULT_WORDS_PATH)]
    words: PathBuf,

    /// Letters per word
    #[arg(short = 'l', long, global = true, env = "WORDLE_WORD_LENGTH", default_value_t = 5)]
    word_length: usize,

    /// Distinct scores kept in the ranking
    #[arg(short, long, global = true, env = "WORDLE_GUESSES_TO_KEEP", default_value_t = DEFAULT_GUESSES_TO_KEEP)]
    keep: usize,

    /// Scoring threads (default: available parallelism)
    #[arg(short = 'j', long, global = true, env = "WORDLE_WORKERS")]
    workers: Option<usize>,

    /// Search on an empty state instead of using the opening word
    #[arg(long, global = true, env = "WORDLE_FORCE_FULL_SEARCH")]
    force_full_search: bool,

    /// Guess used for an empty state
    #[arg(short, long, global = true, env = "WORDLE_OPENING_WORD", default_value = DEFAULT_OPENING_WORD)]
    opening: String,

    /// Maximum partition cache entries per round (0 disables caching)
    #[arg(long, global = true, env = "WORDLE_CACHE_CAPACITY", default_value_t = DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    /// Feedback rule for simulated answers: presence (default) or standard
    #[arg(short, long, global = true, env = "WORDLE_RULE", default_value = "presence")]
    rule: ScoringRule,

    /// Guesser: brute (default) or frequency
    #[arg(short, long, global = true, env = "WORDLE_GUESSER", default_value = "brute")]
    guesser: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console mode (default)
    Play,

    /// Auto-play against a known answer
    Solve {
        /// The answer to play against
        word: String,

        /// Show candidate counts and rankings for each turn
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = 6)]
        max_guesses: usize,
    },

    /// Run the full search on an empty state to rank opening words
    FirstWord,

    /// Play many answers and report the guess count distribution
    Benchmark {
        /// Number of answers to sample (default: every word)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for the sample
        #[arg(short, long)]
        seed: Option<u64>,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = 10)]
        max_guesses: usize,
    },
}

impl Cli {
    fn guesser_config(&self) -> GuesserConfig {
        GuesserConfig {
            word_length: self.word_length,
            guesses_to_keep: self.keep,
            worker_count: self.workers.unwrap_or_else(available_workers),
            force_full_search: self.force_full_search,
            opening_word: self.opening.clone(),
            cache_capacity: self.cache_capacity,
            scoring_rule: self.rule,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = cli.guesser_config();
    let words = load_from_file(&cli.words, config.word_length)
        .with_context(|| format!("failed to read word list {}", cli.words.display()))?;
    if words.is_empty() {
        bail!(
            "no {}-letter words found in {}",
            config.word_length,
            cli.words.display()
        );
    }
    let index = WordIndex::with_cache_capacity(words, config.cache_capacity);

    let scoring_rule = config.scoring_rule;
    let word_length = config.word_length;
    let guesser = GuesserKind::from_name(&cli.guesser, config).context("invalid configuration")?;
    let mut solver = Solver::new(guesser, index, word_length)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&mut solver, &mut io::stdin().lock(), &mut io::stdout()),
        Commands::Solve {
            word,
            verbose,
            max_guesses,
        } => {
            let config = SolveConfig {
                max_guesses,
                scoring_rule,
                ..SolveConfig::new(word)
            };
            let result = solve_word(config, &mut solver)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::FirstWord => {
            let (ranking, elapsed) = determine_first_words(&solver)?;
            print_first_words(&ranking, elapsed);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            max_guesses,
        } => {
            let targets = select_targets(solver.index().words(), count, seed);
            println!("Running benchmark on {} words...", targets.len());
            let result = run_benchmark(
                &mut solver,
                &targets,
                max_guesses,
                scoring_rule,
                &progress_bar(),
            )?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn every_global_option_reads_the_environment() {
        let command = Cli::command();
        for id in [
            "words",
            "word_length",
            "keep",
            "workers",
            "force_full_search",
            "opening",
            "cache_capacity",
            "rule",
            "guesser",
        ] {
            let arg = command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .unwrap();
            assert!(arg.get_env().is_some(), "{id} has no environment variable");
        }
    }
}

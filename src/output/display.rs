//! Display functions for command results

use super::formatters::{create_progress_bar, outcomes_to_emoji};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::RankedGuesses;
use colored::Colorize;
use std::time::Duration;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            outcomes_to_emoji(&step.outcomes)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            match step.score {
                Some(score) => println!("  Score:      {score}"),
                None => println!("  Score:      opening word"),
            }
            println!("  Ranking:    {}", step.ranking);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the ranking of opening words
pub fn print_first_words(ranking: &RankedGuesses, elapsed: Duration) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (score, words) in ranking.iter() {
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        println!("   {score:>10}: {}", words.join(", "));
    }
    match ranking.best_guess() {
        Some(best) => println!(
            "\nBest first word: {}",
            best.to_uppercase().bright_yellow().bold()
        ),
        None => println!("\n{}", "No words to rank".red()),
    }
    println!("Took {:.2}s", elapsed.as_secs_f64());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!(
            "\n{} {}",
            "Not solved:".red().bold(),
            result.failures.join(", ")
        );
    }
}

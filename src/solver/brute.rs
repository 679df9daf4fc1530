//! Brute-force partition search
//!
//! For every word in the dictionary, simulate the feedback each remaining candidate would give
//! and add up how many candidates would survive. The guess with the smallest total leaves the
//! fewest candidates on average.

use super::guesser::Guesser;
use super::ranking::{Preference, RankedGuesses};
use crate::config::GuesserConfig;
use crate::core::{ConstraintState, Word};
use crate::error::GuessError;
use crate::index::WordIndex;
use log::{debug, info};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Runs longer than this report progress
const PROGRESS_AFTER: Duration = Duration::from_secs(20);
const PROGRESS_EVERY: usize = 100;

/// Partition-size guesser backed by a fixed-size worker pool
pub struct BruteGuesser {
    config: GuesserConfig,
    opening: Word,
    pool: rayon::ThreadPool,
}

impl BruteGuesser {
    /// Create a guesser with its own pool of `config.worker_count` threads
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the pool cannot be started.
    pub fn new(config: GuesserConfig) -> Result<Self, GuessError> {
        let opening = config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_count)
            .thread_name(|i| format!("guess-worker-{i}"))
            .build()?;
        Ok(Self {
            config,
            opening,
            pool,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GuesserConfig {
        &self.config
    }

    fn search(
        &self,
        index: &WordIndex,
        state: &ConstraintState,
        force: bool,
    ) -> Result<RankedGuesses, GuessError> {
        let keep = self.config.guesses_to_keep;
        if state.is_empty() && !force && !self.config.force_full_search {
            debug!("empty state, using opening word {}", self.opening);
            return Ok(RankedGuesses::opening(self.opening.text(), keep));
        }

        let mut ranking = RankedGuesses::new(keep, Preference::Lowest);
        let candidates = index.filter_to_valid(state);
        if index.is_empty() || candidates.is_empty() {
            debug!(
                "nothing to score: {} guesses, {} candidates",
                index.len(),
                candidates.len()
            );
            return Ok(ranking);
        }

        let started = Instant::now();
        let done = AtomicUsize::new(0);
        let scores = self.pool.install(|| {
            index
                .words()
                .par_iter()
                .map(|guess| {
                    let score = self
                        .aggregate_score(state, &candidates, guess)
                        .map_err(|source| GuessError::WorkerFailure {
                            guess: guess.text().to_string(),
                            source: Box::new(source),
                        })?;
                    report_progress(&done, index.len(), started);
                    Ok((score, guess))
                })
                .collect::<Result<Vec<_>, GuessError>>()
        })?;

        for (score, guess) in scores {
            ranking.insert(score, guess.text());
        }

        let stats = candidates.cache_stats();
        debug!(
            "scored {} guesses against {} candidates in {:.2?}; cache {} entries, {:.1}% hits",
            index.len(),
            candidates.len(),
            started.elapsed(),
            stats.entries,
            stats.hit_rate() * 100.0
        );
        Ok(ranking)
    }

    /// Sum of candidates left over every plausible answer if `guess` were played
    fn aggregate_score(
        &self,
        state: &ConstraintState,
        candidates: &WordIndex,
        guess: &Word,
    ) -> Result<u64, GuessError> {
        candidates.words().iter().try_fold(0u64, |total, answer| {
            let outcomes = self.config.scoring_rule.score(answer, guess)?;
            let mut hypothetical = state.clone();
            hypothetical.record_round(guess, &outcomes)?;
            Ok(total + candidates.size_after_filtering(&hypothetical) as u64)
        })
    }
}

fn report_progress(done: &AtomicUsize, total: usize, started: Instant) {
    let done = done.fetch_add(1, Ordering::Relaxed) + 1;
    if should_report(done, started.elapsed()) {
        info!(
            "scored {done}/{total} guesses in {:.0?}",
            started.elapsed()
        );
    }
}

/// Every hundredth scored guess, once the search has run for a while
fn should_report(done: usize, elapsed: Duration) -> bool {
    done > 0 && done % PROGRESS_EVERY == 0 && elapsed > PROGRESS_AFTER
}

impl Guesser for BruteGuesser {
    fn process(
        &self,
        index: &WordIndex,
        state: &ConstraintState,
    ) -> Result<RankedGuesses, GuessError> {
        self.search(index, state, false)
    }

    fn determine_first_words(&self, index: &WordIndex) -> Result<RankedGuesses, GuessError> {
        let empty = ConstraintState::new(self.config.word_length)?;
        self.search(index, &empty, true)
    }

    fn name(&self) -> &'static str {
        "brute"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScoringRule, decode_feedback, score_guess};

    fn index(words: &[&str]) -> WordIndex {
        WordIndex::build(words.iter().map(|w| Word::parse(*w).unwrap()))
    }

    fn guesser() -> BruteGuesser {
        BruteGuesser::new(GuesserConfig::deterministic()).unwrap()
    }

    fn play(state: &mut ConstraintState, guess: &str, feedback: &str) {
        let outcomes = decode_feedback(feedback, guess.len()).unwrap();
        state
            .record_round(&Word::parse(guess).unwrap(), &outcomes)
            .unwrap();
    }

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "frame", "grame", "arame", "frogs",
    ];

    /// Score computed straight from the definition, without index or cache
    fn naive_score(words: &[&str], state: &ConstraintState, guess: &str) -> u64 {
        let guess = Word::parse(guess).unwrap();
        let all: Vec<Word> = words.iter().map(|w| Word::parse(*w).unwrap()).collect();
        all.iter()
            .filter(|answer| state.is_satisfied_by(answer))
            .map(|answer| {
                let mut hypothetical = state.clone();
                hypothetical
                    .record_round(&guess, &score_guess(answer, &guess).unwrap())
                    .unwrap();
                all.iter()
                    .filter(|w| hypothetical.is_satisfied_by(w))
                    .count() as u64
            })
            .sum()
    }

    #[test]
    fn empty_state_returns_opening_word_without_scoring() {
        let idx = index(&["crane", "slate"]);
        let state = ConstraintState::new(5).unwrap();

        let ranking = guesser().process(&idx, &state).unwrap();
        assert!(ranking.is_opening());
        assert_eq!(ranking.best_guess(), Some("crave"));
    }

    #[test]
    fn opening_word_override() {
        let config = GuesserConfig {
            opening_word: "salet".to_string(),
            ..GuesserConfig::deterministic()
        };
        let idx = index(WORDS);
        let state = ConstraintState::new(5).unwrap();

        let ranking = BruteGuesser::new(config).unwrap().process(&idx, &state).unwrap();
        assert_eq!(ranking.best_guess(), Some("salet"));
    }

    #[test]
    fn scores_match_the_definition() {
        let idx = index(WORDS);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "frogs", "BGBBB");

        let config = GuesserConfig {
            guesses_to_keep: 100,
            ..GuesserConfig::deterministic()
        };
        let ranking = BruteGuesser::new(config).unwrap().process(&idx, &state).unwrap();

        for (score, words) in ranking.iter() {
            for word in words {
                assert_eq!(score, naive_score(WORDS, &state, word), "score of {word}");
            }
        }
        let total: usize = ranking.iter().map(|(_, words)| words.len()).sum();
        assert_eq!(total, WORDS.len());
    }

    #[test]
    fn non_candidate_guess_can_win() {
        let idx = index(&["frame", "arame", "grame", "frogs"]);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "lares", "BYYYB");
        play(&mut state, "trade", "BGGBG");
        play(&mut state, "crumb", "BGBGB");

        // Candidates are arame, frame and grame. Any of them as a guess leaves the other two
        // together (0 + 2 + 2), while frogs splits all three apart (1 + 1 + 1).
        let ranking = guesser().process(&idx, &state).unwrap();
        assert_eq!(ranking.best_score(), Some(3));
        assert_eq!(ranking.best_guess(), Some("frogs"));
    }

    #[test]
    fn forced_first_word_search_scores_everything() {
        let idx = index(WORDS);
        let ranking = guesser().determine_first_words(&idx).unwrap();

        assert!(!ranking.is_opening());
        let best = ranking.best_guess().unwrap();
        let state = ConstraintState::new(5).unwrap();
        assert_eq!(ranking.best_score(), Some(naive_score(WORDS, &state, best)));
    }

    #[test]
    fn force_flag_in_config_scores_empty_state() {
        let config = GuesserConfig {
            force_full_search: true,
            ..GuesserConfig::deterministic()
        };
        let idx = index(WORDS);
        let state = ConstraintState::new(5).unwrap();

        let ranking = BruteGuesser::new(config).unwrap().process(&idx, &state).unwrap();
        assert!(!ranking.is_opening());
        assert!(ranking.best_score().is_some());
    }

    #[test]
    fn no_candidates_means_no_guess() {
        let idx = index(WORDS);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "zzzzz", "GBBBB");

        let ranking = guesser().process(&idx, &state).unwrap();
        assert_eq!(ranking.best_guess(), None);
    }

    #[test]
    fn empty_dictionary_means_no_guess() {
        let idx = WordIndex::build(Vec::new());
        let ranking = guesser().determine_first_words(&idx).unwrap();
        assert_eq!(ranking.best_guess(), None);
    }

    #[test]
    fn parallel_and_single_threaded_agree() {
        let idx = index(WORDS);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "frogs", "BGBBB");

        let parallel = GuesserConfig {
            worker_count: 4,
            ..GuesserConfig::default()
        };
        let single = guesser().process(&idx, &state).unwrap();
        let multi = BruteGuesser::new(parallel)
            .unwrap()
            .process(&idx, &state)
            .unwrap();
        assert_eq!(single, multi);
    }

    #[test]
    fn scoring_failure_aborts_the_search() {
        // A shorter guess in the dictionary cannot be scored against the candidates
        let words = ["crane", "slate", "art"];
        let idx = index(&words);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "crane", "BBGBG");

        let err = guesser().process(&idx, &state).unwrap_err();
        assert!(matches!(err, GuessError::WorkerFailure { ref guess, .. } if guess == "art"));
        assert!(!err.is_caller_error());
    }

    #[test]
    fn caller_state_is_not_mutated() {
        let idx = index(WORDS);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "frogs", "BGBBB");
        let before = state.clone();

        guesser().process(&idx, &state).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn standard_rule_is_honored() {
        let config = GuesserConfig {
            scoring_rule: ScoringRule::Standard,
            ..GuesserConfig::deterministic()
        };
        let idx = index(WORDS);
        let mut state = ConstraintState::new(5).unwrap();
        play(&mut state, "frogs", "BGBBB");

        let ranking = BruteGuesser::new(config).unwrap().process(&idx, &state).unwrap();
        let best = ranking.best_guess().unwrap();
        let guess = Word::parse(best).unwrap();
        let expected: u64 = idx
            .filter_to_valid(&state)
            .words()
            .iter()
            .map(|answer| {
                let mut hypothetical = state.clone();
                let outcomes = ScoringRule::Standard.score(answer, &guess).unwrap();
                hypothetical.record_round(&guess, &outcomes).unwrap();
                idx.size_after_filtering_uncached(&hypothetical) as u64
            })
            .sum();
        assert_eq!(ranking.best_score(), Some(expected));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GuesserConfig {
            guesses_to_keep: 0,
            ..GuesserConfig::deterministic()
        };
        assert!(matches!(
            BruteGuesser::new(config),
            Err(GuessError::InvalidInput(_))
        ));
    }

    #[test]
    fn progress_reported_every_hundred_guesses_after_twenty_seconds() {
        let late = Duration::from_secs(21);
        assert!(should_report(100, late));
        assert!(should_report(300, late));
        assert!(!should_report(150, late));
        assert!(!should_report(0, late));
        assert!(!should_report(100, Duration::from_secs(5)));
    }
}

//! Formatting utilities for terminal output

use crate::core::Outcome;

/// Format feedback as an emoji row
#[must_use]
pub fn outcomes_to_emoji(outcomes: &[Outcome]) -> String {
    outcomes.iter().map(|o| o.emoji()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_to_emoji_mixed() {
        let outcomes = [
            Outcome::NotInWord,
            Outcome::WrongSpot,
            Outcome::Correct,
            Outcome::NotInWord,
            Outcome::Correct,
        ];
        assert_eq!(outcomes_to_emoji(&outcomes), "⬜🟨🟩⬜🟩");
    }

    #[test]
    fn outcomes_to_emoji_any_length() {
        assert_eq!(outcomes_to_emoji(&[Outcome::Correct; 3]), "🟩🟩🟩");
        assert_eq!(outcomes_to_emoji(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}

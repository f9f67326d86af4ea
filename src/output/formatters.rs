//! Formatting utilities for terminal output

use crate::core::ValidationOutcome;
use colored::{ColoredString, Colorize};

/// Letter-count badge shown next to an accepted word, e.g. "(5)"
#[must_use]
pub fn length_badge(word: &str) -> String {
    format!("({})", word.chars().count())
}

/// Color an outcome's title: green for accepted, red for rejections
#[must_use]
pub fn colored_title(outcome: &ValidationOutcome) -> ColoredString {
    match outcome {
        ValidationOutcome::Accepted(word) => format!("✓ {}", word.to_uppercase()).green().bold(),
        ValidationOutcome::NoOp => "".normal(),
        rejected => format!("✗ {}", rejected.title()).red().bold(),
    }
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

/// Spell the root word with spaced capitals, e.g. "S I L K"
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

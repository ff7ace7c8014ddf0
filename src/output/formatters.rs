//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState};
use colored::Colorize;

/// Render feedback as colored letter tiles
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|mark| {
            let tile = format!(" {} ", mark.letter.to_uppercase());
            match mark.state {
                LetterState::Green => tile.black().on_green().bold().to_string(),
                LetterState::Yellow => tile.black().on_yellow().bold().to_string(),
                LetterState::Black => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
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

/// Format a fraction in `[0, 1]` as a percentage
#[must_use]
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

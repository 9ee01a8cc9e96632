//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};

/// Describe feedback in words, e.g. "2 exact, 1 present"
#[must_use]
pub fn feedback_summary(feedback: &Feedback) -> String {
    if feedback.is_win() {
        return "all exact".to_string();
    }

    let exact = feedback.count(Mark::Exact);
    let present = feedback.count(Mark::Present);
    match (exact, present) {
        (0, 0) => "nothing matches".to_string(),
        (e, 0) => format!("{e} exact"),
        (0, p) => format!("{p} present"),
        (e, p) => format!("{e} exact, {p} present"),
    }
}

/// "1 guess" / "4 guesses"
#[must_use]
pub fn guess_count_label(count: u32) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Formatting utilities for terminal output

use crate::core::{GuessRow, Mark};
use colored::{ColoredString, Colorize};
use std::time::Duration;

/// Format remaining time as `m:ss`, rounding partial seconds up
#[must_use]
pub fn format_clock(remaining: Duration) -> String {
    let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Paint one letter tile according to its mark
#[must_use]
pub fn letter_tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Some(Mark::Correct) => tile.black().on_green().bold(),
        Some(Mark::Present) => tile.black().on_yellow().bold(),
        Some(Mark::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Render a row as colored tiles; unsubmitted rows are left uncolored
#[must_use]
pub fn row_tiles(row: &GuessRow) -> String {
    row.letters()
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let mark = row.feedback().map(|f| f.mark_at(i));
            letter_tile(char::from(b), mark).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

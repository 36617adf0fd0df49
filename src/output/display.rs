//! Display functions for command results

use super::formatters::{letter_tile, row_tiles};
use crate::core::{Feedback, Grid, Word};
use crate::game::Tally;
use colored::Colorize;

/// Print every row of the grid, submitted or not
pub fn print_board(grid: &Grid) {
    println!();
    for (i, row) in grid.rows().iter().enumerate() {
        let tiles = if row.cursor() == 0 {
            " · ".repeat(crate::core::WORD_LENGTH).bright_black().to_string()
        } else {
            row_tiles(row)
        };
        println!("  {} {tiles}", (i + 1).to_string().bright_black());
    }
    println!();
}

/// Print the feedback for a single guess
pub fn print_check_result(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    let tiles: Vec<String> = guess
        .text()
        .chars()
        .zip(feedback.marks())
        .map(|(c, &mark)| letter_tile(c, Some(mark)).to_string())
        .collect();
    println!("  {}   {}", tiles.join(" "), feedback.to_emoji());
    println!("{}", "─".repeat(40).cyan());

    println!(
        "  Correct: {}  Present: {}",
        feedback.count_correct().to_string().green().bold(),
        feedback.count_present().to_string().yellow().bold()
    );

    if feedback.is_exact_match() {
        println!("\n{}", "✅ Exact match!".green().bold());
    } else {
        println!(
            "\n{}",
            format!("❌ {} is not {}", guess.text().to_uppercase(), secret.text().to_uppercase())
                .red()
        );
    }
}

/// Print the final tally of a time trial
pub fn print_session_summary(tally: &Tally) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!("{}", "    ⏰  Time's Up! Game Over!  ⏰".red().bold());
    println!("{}", "═".repeat(40).bright_cyan());
    println!(
        "\n  Total Wins:   {}",
        tally.wins.to_string().green().bold()
    );
    println!("  Total Losses: {}", tally.losses.to_string().red().bold());
    println!("  Rounds Played: {}", tally.rounds().to_string().bold());
    println!();
}

//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line typed is one guess.

use crate::config::GameConfig;
use crate::core::WORD_LENGTH;
use crate::game::{GameMode, Outcome, Phase, RoundController, SessionStatus, SubmitResult, Tally};
use crate::output::formatters::{create_progress_bar, format_clock};
use crate::output::{print_board, print_session_summary};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// Returns the wins and losses of every round finished before the player left.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: WordSource + ?Sized>(
    words: &S,
    mode: GameMode,
    config: &GameConfig,
) -> Result<Tally, String> {
    let stdin = io::stdin();
    run_simple_with(words, mode, config, &mut stdin.lock())
}

/// Run the simple mode against any line source
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn run_simple_with<S: WordSource + ?Sized, R: BufRead>(
    words: &S,
    mode: GameMode,
    config: &GameConfig,
    input: &mut R,
) -> Result<Tally, String> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║{:^42}║", format!("Wordle - {mode} Mode"));
    println!("╚══════════════════════════════════════════╝\n");
    println!("Type a {WORD_LENGTH}-letter word and press Enter.");
    println!("  🟩 right letter, right spot");
    println!("  🟨 letter is somewhere else in the word");
    println!("  ⬜ letter is not in the word");
    println!("Commands: 'quit' to exit\n");

    // No frames between lines, so finished rounds roll over on the next update
    let config = GameConfig {
        pause_frames: 0,
        ..config.clone()
    };
    let mut controller = RoundController::new(words, mode.policy(&config), &config);
    let mut last_tick = Instant::now();
    let mut played = Tally::default();

    loop {
        if let SessionStatus::Finished(tally) = controller.tick(last_tick.elapsed()) {
            print_session_summary(&tally);
            return Ok(tally);
        }
        last_tick = Instant::now();

        let mut prompt = format!("Guess {}", controller.grid().current_row() + 1);
        if let Some(remaining) = controller.time_remaining() {
            let bar = create_progress_bar(
                remaining.as_secs_f64(),
                config.time_limit.as_secs_f64(),
                20,
            );
            prompt = format!("[{bar} {}] {prompt}", format_clock(remaining));
        }

        let Some(line) = read_line(&prompt, input)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(played);
        };
        let line = line.to_lowercase();

        if matches!(line.as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(played);
        }

        if line.chars().count() != WORD_LENGTH || !line.chars().all(|c| c.is_ascii_alphabetic()) {
            println!("❌ Word must be exactly {WORD_LENGTH} letters!\n");
            continue;
        }

        // Time spent typing counts against the clock
        if let SessionStatus::Finished(tally) = controller.tick(last_tick.elapsed()) {
            println!("⏰ Too late!");
            print_session_summary(&tally);
            return Ok(tally);
        }
        last_tick = Instant::now();

        while controller.apply_backspace() {}
        for c in line.chars() {
            controller.apply_character(c);
        }

        let result = controller.apply_submit();
        print_board(controller.grid());

        match result {
            SubmitResult::Won => {
                played.record(Outcome::Won);
                println!("{}\n", "🎉 You Win!".green().bold());
            }
            SubmitResult::Lost => {
                played.record(Outcome::Lost);
                println!(
                    "{}\n",
                    format!(
                        "Game Over! The word was: {}",
                        controller.secret().text().to_uppercase()
                    )
                    .red()
                    .bold()
                );
            }
            SubmitResult::NotInWordList => println!("❌ Not in word list!\n"),
            SubmitResult::Continue | SubmitResult::Ignored => {}
        }

        if matches!(controller.phase(), Phase::RoundEnded(_)) {
            if mode == GameMode::Classic {
                let again = read_line("Play again? (yes/no)", input)?.unwrap_or_default();
                if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                    controller.restart();
                    println!("\n🔄 New round started!\n");
                } else {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(played);
                }
            } else {
                controller.update(last_tick.elapsed());
                last_tick = Instant::now();
                if controller.policy().time_limit().is_some() {
                    let tally = controller.tally();
                    println!("Wins: {}  Losses: {}", tally.wins, tally.losses);
                }
                if controller.phase() == Phase::AwaitingInput {
                    println!("🔄 Next round!\n");
                }
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` on end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn words() -> WordList {
        WordList::new(words_from_slice(&["slate", "crane"])).unwrap()
    }

    fn one_guess() -> GameConfig {
        GameConfig {
            max_guesses: 1,
            ..GameConfig::default()
        }
    }

    #[test]
    fn classic_win_then_quit() {
        let words = WordList::new(words_from_slice(&["slate"])).unwrap();
        let mut input = Cursor::new("slate\nno\n");

        let tally = run_simple_with(&words, GameMode::Classic, &GameConfig::default(), &mut input);
        assert_eq!(tally, Ok(Tally { wins: 1, losses: 0 }));
    }

    #[test]
    fn classic_play_again_starts_new_round() {
        let words = WordList::new(words_from_slice(&["slate"])).unwrap();
        let mut input = Cursor::new("slate\nyes\ncrane\nno\n");

        let tally = run_simple_with(&words, GameMode::Classic, &one_guess(), &mut input);
        assert_eq!(tally, Ok(Tally { wins: 1, losses: 1 }));
    }

    #[test]
    fn invalid_lines_use_no_row() {
        // With a single row, any consumed guess would lose the round
        let words = WordList::new(words_from_slice(&["slate"])).unwrap();
        let mut input = Cursor::new("abc\n12345\nslates\nslate\nno\n");

        let tally = run_simple_with(&words, GameMode::Classic, &one_guess(), &mut input);
        assert_eq!(tally, Ok(Tally { wins: 1, losses: 0 }));
    }

    #[test]
    fn quit_before_any_round_ends() {
        let mut input = Cursor::new("crane\nquit\n");

        let tally = run_simple_with(&words(), GameMode::Endless, &GameConfig::default(), &mut input);
        assert_eq!(tally, Ok(Tally::default()));
    }

    #[test]
    fn endless_rolls_over_to_next_round() {
        let words = WordList::new(words_from_slice(&["slate"])).unwrap();
        let mut input = Cursor::new("crane\nslate\ncrane\nquit\n");

        let tally = run_simple_with(&words, GameMode::Endless, &one_guess(), &mut input);
        assert_eq!(tally, Ok(Tally { wins: 1, losses: 2 }));
    }

    #[test]
    fn timed_rolls_over_until_input_ends() {
        let words = WordList::new(words_from_slice(&["slate"])).unwrap();
        let mut input = Cursor::new("slate\nslate\nslate\n");

        let tally = run_simple_with(&words, GameMode::Timed, &GameConfig::default(), &mut input);
        assert_eq!(tally, Ok(Tally { wins: 3, losses: 0 }));
    }
}

//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{
    GameMode, InputEvent, Outcome, Phase, RoundController, SessionStatus, SubmitResult, Tally,
};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Which screen is showing
pub enum Screen<'a> {
    Menu,
    Playing {
        mode: GameMode,
        controller: RoundController<'a, WordList>,
    },
    TimeUp {
        tally: Tally,
    },
}

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub config: GameConfig,
    pub screen: Screen<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Rounds played since the program started, across all modes
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, won: bool, guesses: usize) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        }
    }

    /// `(guesses, wins)` for every guess count up to the longest win
    pub fn distribution(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.guess_distribution.iter().copied().enumerate().skip(1)
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a WordList, config: GameConfig) -> Self {
        Self {
            words,
            config,
            screen: Screen::Menu,
            messages: vec![Message {
                text: format!("Loaded {} words. Pick a mode to start.", words.len()),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Enter a mode with a fresh session
    pub fn start_mode(&mut self, mode: GameMode) {
        let controller = RoundController::new(self.words, mode.policy(&self.config), &self.config);
        info!(%mode, "entered mode");
        self.screen = Screen::Playing { mode, controller };
        self.messages.clear();
        self.add_message(
            &format!("{mode} mode: type a word and press Enter"),
            MessageStyle::Info,
        );
    }

    pub fn back_to_menu(&mut self) {
        info!("returned to menu");
        self.screen = Screen::Menu;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match &mut self.screen {
            Screen::Menu => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    let c = c.to_ascii_lowercase();
                    if let Some(mode) = GameMode::ALL.into_iter().find(|m| m.hotkey() == c) {
                        self.start_mode(mode);
                    }
                }
                _ => {}
            },
            Screen::TimeUp { .. } => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.back_to_menu();
                }
            }
            Screen::Playing { controller, .. } => {
                let Some(input) = input_event(key) else {
                    return;
                };

                if input == InputEvent::Exit {
                    self.back_to_menu();
                    return;
                }

                // Enter on a finished classic round starts another one
                if input == InputEvent::Submit
                    && matches!(controller.phase(), Phase::RoundEnded(_))
                    && controller.restart()
                {
                    self.messages.clear();
                    self.add_message("New round started!", MessageStyle::Info);
                    return;
                }

                let result = controller.apply(input);
                let guesses = controller.grid().submitted().count();
                let secret = controller.secret().text().to_uppercase();
                self.report(result, guesses, &secret);
            }
        }
    }

    fn report(&mut self, result: Option<SubmitResult>, guesses: usize, secret: &str) {
        match result {
            Some(SubmitResult::Won) => {
                self.stats.record(true, guesses);
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! 🌟",
                    2 => "🔥 MAGNIFICENT! 🔥",
                    3 => "✨ SPLENDID! ✨",
                    4 => "👏 GREAT JOB! 👏",
                    5 => "🎉 NICE WORK! 🎉",
                    _ => "😅 PHEW! 😅",
                };
                self.add_message(&format!("You win! {celebration}"), MessageStyle::Success);
            }
            Some(SubmitResult::Lost) => {
                self.stats.record(false, guesses);
                self.add_message(
                    &format!("Game over! The word was: {secret}"),
                    MessageStyle::Error,
                );
            }
            Some(SubmitResult::NotInWordList) => {
                self.add_message("Not in word list!", MessageStyle::Error);
            }
            Some(SubmitResult::Continue | SubmitResult::Ignored) | None => {}
        }
    }

    /// Handle a key that arrived `elapsed` after the clock was last advanced
    ///
    /// The time trial clock runs first, so a key landing after the limit is dropped
    /// instead of finishing a round that should already be over.
    pub fn on_key(&mut self, key: KeyEvent, elapsed: Duration) {
        if let Screen::Playing { controller, .. } = &mut self.screen
            && let SessionStatus::Finished(tally) = controller.tick(elapsed)
        {
            self.time_up(tally);
            return;
        }
        self.handle_key(key);
    }

    /// Advance timers by one frame
    pub fn on_frame(&mut self, elapsed: Duration) {
        let Screen::Playing { controller, .. } = &mut self.screen else {
            return;
        };

        let was_ended = controller.outcome() != Outcome::InProgress;
        let round = controller.round();
        let status = controller.update(elapsed);

        if let SessionStatus::Finished(tally) = status {
            self.time_up(tally);
        } else if was_ended && controller.round() != round {
            self.messages.clear();
            self.add_message("Next round!", MessageStyle::Info);
        }
    }

    fn time_up(&mut self, tally: Tally) {
        self.screen = Screen::TimeUp { tally };
        self.add_message("Time's up!", MessageStyle::Error);
    }
}

/// Map a key press to a game input
#[must_use]
pub fn input_event(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(InputEvent::CharacterTyped(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Esc => Some(InputEvent::Exit),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let frame = app.config.frame_duration();
    let mut last_frame = Instant::now();
    // Last time the game clock was advanced, by a frame or by a key
    let mut last_tick = last_frame;

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(frame.saturating_sub(last_frame.elapsed()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let now = Instant::now();
            app.on_key(key, now.duration_since(last_tick));
            last_tick = now;
        }

        if last_frame.elapsed() >= frame {
            let now = Instant::now();
            app.on_frame(now.duration_since(last_tick));
            last_frame = now;
            last_tick = now;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> WordList {
        WordList::new(words_from_slice(&["slate"])).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn menu_hotkeys_start_modes() {
        let words = words();
        let mut app = App::new(&words, GameConfig::default());

        press(&mut app, KeyCode::Char('x'));
        assert!(matches!(app.screen, Screen::Menu));

        press(&mut app, KeyCode::Char('T'));
        assert!(matches!(
            app.screen,
            Screen::Playing {
                mode: GameMode::Timed,
                ..
            }
        ));

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.screen, Screen::Menu));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let words = words();
        let mut app = App::new(&words, GameConfig::default());
        app.start_mode(GameMode::Endless);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn winning_classic_round_records_stats_and_restarts() {
        let words = words();
        let mut app = App::new(&words, GameConfig::default());
        app.start_mode(GameMode::Classic);

        type_word(&mut app, "slate");
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        press(&mut app, KeyCode::Enter);
        let Screen::Playing { controller, .. } = &app.screen else {
            panic!("expected playing screen");
        };
        assert_eq!(controller.phase(), Phase::AwaitingInput);
        assert_eq!(controller.round(), 2);
    }

    #[test]
    fn losing_round_reports_secret() {
        let words = words();
        let config = GameConfig {
            max_guesses: 1,
            ..GameConfig::default()
        };
        let mut app = App::new(&words, config);
        app.start_mode(GameMode::Classic);

        type_word(&mut app, "crane");
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("SLATE")));
    }

    #[test]
    fn timed_session_ends_on_time_up_screen() {
        let words = words();
        let config = GameConfig {
            time_limit: Duration::from_secs(1),
            ..GameConfig::default()
        };
        let mut app = App::new(&words, config);
        app.start_mode(GameMode::Timed);

        type_word(&mut app, "slate");
        app.on_frame(Duration::from_secs(2));

        let Screen::TimeUp { tally } = app.screen else {
            panic!("expected time up screen");
        };
        assert_eq!(tally, Tally { wins: 1, losses: 0 });

        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.screen, Screen::Menu));
    }

    #[test]
    fn key_after_time_limit_does_not_win() {
        let words = words();
        let config = GameConfig {
            time_limit: Duration::from_secs(1),
            ..GameConfig::default()
        };
        let mut app = App::new(&words, config);
        app.start_mode(GameMode::Timed);

        for c in "slate".chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), Duration::ZERO);
        }
        app.on_key(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            Duration::from_secs(2),
        );

        let Screen::TimeUp { tally } = app.screen else {
            panic!("expected time up screen");
        };
        assert_eq!(tally, Tally::default());
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn key_within_time_limit_still_counts() {
        let words = words();
        let config = GameConfig {
            time_limit: Duration::from_secs(1),
            ..GameConfig::default()
        };
        let mut app = App::new(&words, config);
        app.start_mode(GameMode::Timed);

        for c in "slate".chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), Duration::ZERO);
        }
        app.on_key(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            Duration::from_millis(500),
        );
        assert_eq!(app.stats.games_won, 1);

        app.on_frame(Duration::from_millis(600));
        let Screen::TimeUp { tally } = app.screen else {
            panic!("expected time up screen");
        };
        assert_eq!(tally, Tally { wins: 1, losses: 0 });
    }

    #[test]
    fn distribution_skips_zero_guess_slot() {
        let mut stats = Statistics::default();
        stats.record(true, 3);
        stats.record(true, 1);
        stats.record(false, 6);

        let dist: Vec<(usize, usize)> = stats.distribution().collect();
        assert_eq!(dist, vec![(1, 1), (2, 0), (3, 1)]);
        assert_eq!(stats.total_games, 3);
    }

    #[test]
    fn endless_moves_to_next_round_after_pause() {
        let words = words();
        let config = GameConfig {
            pause_frames: 2,
            ..GameConfig::default()
        };
        let mut app = App::new(&words, config);
        app.start_mode(GameMode::Endless);

        type_word(&mut app, "slate");
        app.on_frame(Duration::from_millis(16));
        app.on_frame(Duration::from_millis(16));

        let Screen::Playing { controller, .. } = &app.screen else {
            panic!("expected playing screen");
        };
        assert_eq!(controller.round(), 2);
        assert_eq!(controller.phase(), Phase::AwaitingInput);
        assert!(app.messages.iter().any(|m| m.text == "Next round!"));
    }

    #[test]
    fn input_event_mapping() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            input_event(key(KeyCode::Char('a'))),
            Some(InputEvent::CharacterTyped('a'))
        );
        assert_eq!(input_event(key(KeyCode::Char('1'))), None);
        assert_eq!(input_event(key(KeyCode::Enter)), Some(InputEvent::Submit));
        assert_eq!(
            input_event(key(KeyCode::Backspace)),
            Some(InputEvent::Backspace)
        );
        assert_eq!(input_event(key(KeyCode::Esc)), Some(InputEvent::Exit));
        assert_eq!(input_event(key(KeyCode::Tab)), None);
    }
}

//! TUI rendering with ratatui
//!
//! Reads controller state and draws it; nothing here mutates the game.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Grid, Mark, WORD_LENGTH};
use crate::game::{GameMode, Outcome, Phase, RoundController, Tally};
use crate::output::formatters::format_clock;
use crate::wordlists::WordList;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let title = match &app.screen {
        Screen::Menu => "🟩 WORDLE".to_string(),
        Screen::Playing { mode, .. } => format!("🟩 WORDLE - {mode} Mode (Esc: back to menu)"),
        Screen::TimeUp { .. } => "🟩 WORDLE - Time Trial".to_string(),
    };
    render_header(f, &title, chunks[0]);

    match &app.screen {
        Screen::Menu => render_menu(f, app, chunks[1]),
        Screen::Playing { mode, controller } => {
            render_game(f, *mode, controller, app.config.frames_per_second, chunks[1]);
        }
        Screen::TimeUp { tally } => render_time_up(f, *tally, chunks[1]),
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, title: &str, area: Rect) {
    let header = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Choose a mode",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for mode in GameMode::ALL {
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                mode.hotkey().to_ascii_uppercase().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" for {mode} Mode")),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Q to quit",
        Style::default().fg(Color::DarkGray),
    )));

    if app.stats.games_won > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Wins by guesses",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (guesses, count) in app.stats.distribution() {
            lines.push(Line::from(vec![
                Span::raw(format!("{guesses} ")),
                Span::styled("█".repeat(count.min(30)), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ]));
        }
    }

    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_game(
    f: &mut Frame,
    mode: GameMode,
    controller: &RoundController<'_, WordList>,
    fps: u32,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Round info
        ])
        .split(area);

    render_board(f, controller.grid(), chunks[0]);
    render_round_info(f, mode, controller, fps, chunks[1]);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Correct => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    }
}

fn render_board(f: &mut Frame, grid: &Grid, area: Rect) {
    let mut lines = Vec::with_capacity(grid.max_guesses() * 2);

    for (index, row) in grid.rows().iter().enumerate() {
        let active = index == grid.current_row();
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        for column in 0..WORD_LENGTH {
            let letter = row
                .letter_at(column)
                .map_or('·', |c| c.to_ascii_uppercase());

            let style = match row.feedback() {
                Some(feedback) => Style::default()
                    .fg(Color::Black)
                    .bg(mark_color(feedback.mark_at(column)))
                    .add_modifier(Modifier::BOLD),
                None if active => Style::default()
                    .fg(Color::White)
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
                None => Style::default().fg(Color::Black).bg(Color::Gray),
            };

            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_round_info(
    f: &mut Frame,
    mode: GameMode,
    controller: &RoundController<'_, WordList>,
    fps: u32,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Timer
            Constraint::Min(5),    // Round state
        ])
        .split(area);

    if let (Some(remaining), Some(limit)) = (
        controller.time_remaining(),
        controller.policy().time_limit(),
    ) {
        let ratio = if limit.is_zero() {
            0.0
        } else {
            (remaining.as_secs_f64() / limit.as_secs_f64()).clamp(0.0, 1.0)
        };
        let color = if ratio < 0.2 { Color::Red } else { Color::Cyan };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(" Time Left ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .gauge_style(Style::default().fg(color))
            .ratio(ratio)
            .label(format_clock(remaining));
        f.render_widget(gauge, chunks[0]);
    } else {
        let round = Paragraph::new(format!("Round {}", controller.round()))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(round, chunks[0]);
    }

    let mut lines = Vec::new();
    if mode == GameMode::Timed {
        let tally = controller.tally();
        lines.push(Line::from(vec![
            Span::raw("Wins: "),
            Span::styled(tally.wins.to_string(), Style::default().fg(Color::Green)),
            Span::raw("  Losses: "),
            Span::styled(tally.losses.to_string(), Style::default().fg(Color::Red)),
        ]));
        lines.push(Line::from(""));
    }

    match controller.phase() {
        Phase::AwaitingInput => {
            let used = controller.grid().current_row();
            lines.push(Line::from(format!(
                "Guess {} of {}",
                used + 1,
                controller.grid().max_guesses()
            )));
        }
        Phase::RoundEnded(Outcome::Won) => {
            lines.push(Line::from(Span::styled(
                "You Win!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Phase::RoundEnded(_) | Phase::SessionOver => {
            lines.push(Line::from(Span::styled(
                "Game Over!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!(
                "Word: {}",
                controller.secret().text().to_uppercase()
            )));
        }
    }

    if matches!(controller.phase(), Phase::RoundEnded(_)) {
        let hint = if mode == GameMode::Classic {
            "Enter: play again".to_string()
        } else {
            let secs = f64::from(controller.pause_remaining()) / f64::from(fps.max(1));
            format!("Next round in {secs:.1}s")
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let info = Paragraph::new(lines).block(
        Block::default()
            .title(" Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(info, chunks[1]);
}

fn render_time_up(f: &mut Frame, tally: Tally, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Time's Up! Game Over!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Total Wins: {}", tally.wins),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("Total Losses: {}", tally.losses),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to return to the menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Results ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.screen {
        Screen::Menu => "C/E/T: Pick mode | Q: Quit",
        Screen::Playing { .. } => "A-Z: Type | Backspace: Erase | Enter: Submit | Esc: Menu",
        Screen::TimeUp { .. } => "Enter: Menu | Ctrl-C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn menu_lists_modes() {
        let words = WordList::new(words_from_slice(&["slate"])).unwrap();
        let app = App::new(&words, GameConfig::default());

        let text = screen_text(&app);
        assert!(text.contains("Classic Mode"));
        assert!(text.contains("Endless Mode"));
        assert!(text.contains("Time Trial Mode"));
    }

    #[test]
    fn timed_game_shows_tally_and_clock() {
        let words = WordList::new(words_from_slice(&["slate"])).unwrap();
        let mut app = App::new(&words, GameConfig::default());
        app.start_mode(GameMode::Timed);

        let text = screen_text(&app);
        assert!(text.contains("Wins: 0"));
        assert!(text.contains("1:00"));
    }

    #[test]
    fn time_up_shows_totals() {
        let words = WordList::new(words_from_slice(&["slate"])).unwrap();
        let mut app = App::new(&words, GameConfig::default());
        app.screen = Screen::TimeUp {
            tally: Tally { wins: 3, losses: 2 },
        };

        let text = screen_text(&app);
        assert!(text.contains("Total Wins: 3"));
        assert!(text.contains("Total Losses: 2"));
    }

    #[test]
    fn menu_shows_wins_by_guesses() {
        let words = WordList::new(words_from_slice(&["slate"])).unwrap();
        let mut app = App::new(&words, GameConfig::default());
        assert!(!screen_text(&app).contains("Wins by guesses"));

        app.stats.games_won = 3;
        app.stats.guess_distribution = vec![0, 0, 1, 2];

        let text = screen_text(&app);
        assert!(text.contains("Wins by guesses"));
        assert!(text.contains("2 █ 1"));
        assert!(text.contains("3 ██ 2"));
    }

    #[test]
    fn finished_endless_round_counts_down_to_next() {
        let words = WordList::new(words_from_slice(&["slate"])).unwrap();
        let mut app = App::new(&words, GameConfig::default());
        app.start_mode(GameMode::Endless);
        if let Screen::Playing { controller, .. } = &mut app.screen {
            for c in "slate".chars() {
                controller.apply_character(c);
            }
            controller.apply_submit();
        }

        let text = screen_text(&app);
        assert!(text.contains("You Win!"));
        assert!(text.contains("Next round in 1.0s"));
    }
}

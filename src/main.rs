//! Wordle Arcade - CLI
//!
//! Play Wordle in the terminal: Classic, Endless or Time Trial, in a TUI or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{Level, info};
use wordle_arcade::{
    commands::{check_guess, run_simple},
    config::{FRAMES_PER_SECOND, GameConfig, PAUSE_FRAMES, TIME_TRIAL_LIMIT_SECS},
    core::MAX_GUESSES,
    game::GameMode,
    output::print_check_result,
    wordlists::{WordList, WordSource, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_arcade",
    about = "Wordle in the terminal: classic, endless and time trial modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (whitespace-separated words); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Guesses allowed per round
    #[arg(long, global = true, default_value_t = MAX_GUESSES)]
    max_guesses: usize,

    /// Time trial length in seconds
    #[arg(long, global = true, default_value_t = TIME_TRIAL_LIMIT_SECS)]
    time_limit: u64,

    /// Frames to show a finished round before the next one starts
    #[arg(long, global = true, default_value_t = PAUSE_FRAMES)]
    pause_frames: u32,

    /// Frames per second of the interactive loop
    #[arg(long, global = true, default_value_t = FRAMES_PER_SECOND)]
    fps: u32,

    /// Only accept guesses that are in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log debug events (including secret words)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Skip the menu and start this mode
        #[arg(short, long)]
        mode: Option<ModeArg>,
    },

    /// Simple CLI mode (line-based, no TUI)
    Simple {
        #[arg(short, long, default_value = "classic")]
        mode: ModeArg,
    },

    /// Show the feedback for one guess against a secret word
    Check {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Classic,
    Endless,
    #[value(alias = "time-trial")]
    Timed,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Classic => Self::Classic,
            ModeArg::Endless => Self::Endless,
            ModeArg::Timed => Self::Timed,
        }
    }
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            max_guesses: self.max_guesses,
            pause_frames: self.pause_frames,
            time_limit: Duration::from_secs(self.time_limit),
            frames_per_second: self.fps,
            strict: self.strict,
        }
        .normalized()
    }
}

/// Install a file logger; the TUI owns the terminal so logs never go to stdout
fn init_logging(log_file: Option<&Path>, verbose: bool) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Could not create log file {}", path.display()))?;
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

/// Load the word list from `--words` or the embedded default
fn load_words(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("Could not open {}", path.display()))?;
            WordList::new(words).with_context(|| format!("Unusable word list {}", path.display()))
        }
        None => WordList::embedded().context("Embedded word list is empty"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.verbose)?;

    let words = load_words(cli.words.as_deref())?;
    let config = cli.game_config();
    info!(words = words.len(), ?config, "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { mode: None });

    match command {
        Commands::Play { mode } => run_play_command(&words, config, mode.map(GameMode::from)),
        Commands::Simple { mode } => {
            let tally = run_simple(&words, mode.into(), &config).map_err(|e| anyhow::anyhow!(e))?;
            info!(wins = tally.wins, losses = tally.losses, "simple session ended");
            Ok(())
        }
        Commands::Check { guess, secret } => {
            let dictionary = config.strict.then_some(&words as &dyn WordSource);
            run_check_command(&guess, &secret, dictionary)
        }
    }
}

fn run_check_command(guess: &str, secret: &str, dictionary: Option<&dyn WordSource>) -> Result<()> {
    let result = check_guess(guess, secret, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result.guess, &result.secret, &result.feedback);
    Ok(())
}

fn run_play_command(words: &WordList, config: GameConfig, mode: Option<GameMode>) -> Result<()> {
    use wordle_arcade::interactive::{App, run_tui};

    let mut app = App::new(words, config);
    if let Some(mode) = mode {
        app.start_mode(mode);
    }
    run_tui(app)
}

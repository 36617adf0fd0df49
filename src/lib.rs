//! Wordle Arcade
//!
//! A word-guessing game with Classic, Endless and Time Trial modes.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_arcade::core::{Mark, Word, evaluate};
//!
//! let guess = Word::new("crane").unwrap();
//! let secret = Word::new("slate").unwrap();
//!
//! let (feedback, exact) = evaluate(&guess, &secret);
//! assert!(!exact);
//! assert_eq!(feedback.mark_at(2), Mark::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Round state machine shared by all modes
pub mod game;

// Tunables
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

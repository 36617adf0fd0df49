//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure, deterministic and unit-tested.

mod feedback;
mod grid;
mod word;

pub use feedback::{Feedback, Mark, evaluate};
pub use grid::{Grid, GuessRow};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Default number of rows in a round
pub const MAX_GUESSES: usize = 6;

//! Guess grid
//!
//! A grid is an ordered list of rows. Each row holds a fixed letter buffer, an explicit
//! cursor counting the letters entered, and the feedback once the row has been submitted.

use super::{Feedback, WORD_LENGTH, Word};

/// One attempt: typed letters plus feedback after submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessRow {
    letters: [u8; WORD_LENGTH],
    len: usize,
    feedback: Option<Feedback>,
}

impl GuessRow {
    /// Number of letters entered so far
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == WORD_LENGTH
    }

    #[inline]
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.feedback.is_some()
    }

    /// Letters entered so far
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters[..self.len]
    }

    /// Letter at a column, if one has been typed there
    #[must_use]
    pub fn letter_at(&self, column: usize) -> Option<char> {
        self.letters().get(column).map(|&b| char::from(b))
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Append a letter; returns false if the row is full or already submitted
    pub fn push(&mut self, letter: u8) -> bool {
        if self.is_full() || self.is_submitted() {
            return false;
        }
        self.letters[self.len] = letter;
        self.len += 1;
        true
    }

    /// Remove the last letter; returns false if the row is empty or already submitted
    pub fn pop(&mut self) -> bool {
        if self.len == 0 || self.is_submitted() {
            return false;
        }
        self.len -= 1;
        self.letters[self.len] = 0;
        true
    }

    /// The typed word, once every column is filled
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        if self.is_full() {
            Word::from_letters(self.letters).ok()
        } else {
            None
        }
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
    }
}

/// The rows of a round plus the index of the active row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<GuessRow>,
    current_row: usize,
}

impl Grid {
    /// Create an empty grid with `max_guesses` rows
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            rows: vec![GuessRow::default(); max_guesses.max(1)],
            current_row: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.rows.len()
    }

    /// Index of the row being typed; equals `max_guesses` once all rows are used
    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    /// The row accepting input, if any remain
    #[must_use]
    pub fn active(&self) -> Option<&GuessRow> {
        self.rows.get(self.current_row)
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut GuessRow> {
        self.rows.get_mut(self.current_row)
    }

    /// Store feedback on the active row
    pub(crate) fn record(&mut self, feedback: Feedback) {
        if let Some(row) = self.active_mut() {
            row.set_feedback(feedback);
        }
    }

    /// Move to the next row; never past `max_guesses`
    pub(crate) fn advance(&mut self) {
        self.current_row = (self.current_row + 1).min(self.rows.len());
    }

    /// Submitted rows in order
    pub fn submitted(&self) -> impl Iterator<Item = &GuessRow> {
        self.rows.iter().filter(|row| row.is_submitted())
    }

    pub(crate) fn clear(&mut self) {
        self.rows.fill(GuessRow::default());
        self.current_row = 0;
    }
}

//! Guess feedback calculation and representation
//!
//! Every position of a guess gets one mark:
//! - Correct: same letter at the same position in the secret
//! - Present: the letter appears somewhere else in the secret
//! - Absent: the letter does not appear in the secret
//!
//! Present marks are not limited by how many copies of a letter the secret holds.
//! Guessing "aabbb" against "abxxx" marks every `b` Present even though the secret has one.

use super::{WORD_LENGTH, Word};

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    /// Emoji square used in terminal output
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback row for a submitted guess, aligned index-for-index with the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Compare `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_arcade::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Absent, Mark::Absent, Mark::Correct, Mark::Absent, Mark::Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];

        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            marks[i] = if g == s {
                Mark::Correct
            } else if secret.has_letter(g) {
                Mark::Present
            } else {
                Mark::Absent
            };
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_exact_match(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Correct).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

/// Evaluate a guess, returning the feedback row and whether it is an exact match
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word) -> (Feedback, bool) {
    let feedback = Feedback::calculate(guess, secret);
    let exact = feedback.is_exact_match();
    (feedback, exact)
}

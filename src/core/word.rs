//! Word representation
//!
//! A Word stores a fixed-length lowercase word along with the set of letters it contains,
//! so membership checks during feedback evaluation are constant time.

use super::WORD_LENGTH;
use rustc_hash::FxHashSet;
use std::fmt;

/// A fixed-length lowercase word
///
/// Immutable once built. Equality is by text only.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letters: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `WORD_LENGTH`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_arcade::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Build a word from a filled letter buffer
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not a lowercase ASCII letter.
    pub fn from_letters(letters: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        let text = String::from_utf8(letters.to_vec()).map_err(|_| WordError::NonAscii)?;
        Self::new(text)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for Word {}

impl std::hash::Hash for Word {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.chars.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

//! Word sources
//!
//! The round controller only needs two things from its dictionary: a random secret and a
//! membership check. `WordSource` captures that, and `WordList` is the in-memory
//! implementation backed by either the embedded list or a loaded file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Supplies secret words and validates guesses
pub trait WordSource {
    /// Pick a secret word for a new round
    fn pick_random(&self) -> &Word;

    /// Check whether a guess is a known word
    fn contains(&self, candidate: &Word) -> bool;
}

/// Error type for unusable word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {}

/// Non-empty, de-duplicated list of words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no words are supplied.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| index.insert(w.clone()))
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if the embedded list has no valid words.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(loader::words_from_slice(WORDS))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

}

impl WordSource for WordList {
    fn pick_random(&self) -> &Word {
        // Never empty: `new` rejects empty lists
        self.words
            .choose(&mut rand::rng())
            .unwrap_or(&self.words[0])
    }

    fn contains(&self, candidate: &Word) -> bool {
        self.index.contains(candidate)
    }
}

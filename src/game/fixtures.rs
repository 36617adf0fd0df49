//! Deterministic word source for tests

use crate::core::Word;
use crate::wordlists::WordSource;
use std::cell::Cell;

/// Hands out secrets in order, wrapping around
pub struct SequenceSource {
    words: Vec<Word>,
    next: Cell<usize>,
}

impl SequenceSource {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| Word::new(*w).unwrap()).collect(),
            next: Cell::new(0),
        }
    }
}

impl WordSource for SequenceSource {
    fn pick_random(&self) -> &Word {
        let i = self.next.get();
        self.next.set((i + 1) % self.words.len());
        &self.words[i]
    }

    fn contains(&self, candidate: &Word) -> bool {
        self.words.contains(candidate)
    }
}

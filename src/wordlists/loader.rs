//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from the embedded constant.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file
///
/// Words are separated by any whitespace. Tokens that are not valid words are skipped
/// and counted in a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_arcade::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_text(&content);

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse whitespace-separated words, skipping invalid tokens
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .split_whitespace()
        .filter_map(|token| {
            Word::new(token)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        warn!(skipped, "ignored invalid entries in word list");
    }

    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_arcade::wordlists::loader::words_from_slice;
/// use wordle_arcade::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_text_splits_on_whitespace() {
        let words = words_from_text("crane slate\n\n  Irate\tb4ker\nhouse\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate", "house"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let result = load_from_file("definitely/not/a/real/words.txt");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wordle_arcade_{}.txt", std::process::id()));
        fs::write(&path, "ghost\nplant\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "plant");
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}

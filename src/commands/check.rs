//! Feedback check command
//!
//! Evaluates a single guess against a given secret word.

use crate::core::{Feedback, Word, evaluate};
use crate::wordlists::WordSource;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret`
///
/// When `dictionary` is given, the guess must be one of its words.
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid (wrong length or contains non-letters)
/// - A dictionary is given and the guess is not in it
pub fn check_guess(
    guess: &str,
    secret: &str,
    dictionary: Option<&dyn WordSource>,
) -> Result<CheckResult, String> {
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret_word = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    if let Some(dictionary) = dictionary
        && !dictionary.contains(&guess_word)
    {
        return Err(format!("Word '{guess}' not in word list"));
    }

    let (feedback, _) = evaluate(&guess_word, &secret_word);

    Ok(CheckResult {
        guess: guess_word,
        secret: secret_word,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn check_valid_pair() {
        let result = check_guess("CRANE", "slate", None).unwrap();

        assert_eq!(result.guess.text(), "crane");
        assert!(!result.feedback.is_exact_match());
        assert_eq!(result.feedback.mark_at(2), Mark::Correct);
        assert_eq!(result.feedback.count_correct(), 2);
    }

    #[test]
    fn check_exact_match() {
        let result = check_guess("slate", "slate", None).unwrap();
        assert!(result.feedback.is_exact_match());
        assert_eq!(result.feedback, Feedback::PERFECT);
    }

    #[test]
    fn check_invalid_words() {
        assert!(check_guess("cr4ne", "slate", None).is_err());
        assert!(check_guess("crane", "slates", None).is_err());
    }

    #[test]
    fn check_respects_dictionary() {
        let list = WordList::new(words_from_slice(&["crane", "slate"])).unwrap();

        assert!(check_guess("crane", "slate", Some(&list)).is_ok());
        let err = check_guess("zzzzz", "slate", Some(&list)).err().unwrap();
        assert!(err.contains("not in word list"));
    }
}

//! One-shot guess scoring
//!
//! Scores a single guess against a given secret without playing a round.

use crate::core::{Evaluation, Word, WordError};
use crate::wordlists::WordSource;
use std::fmt;

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub evaluation: Evaluation,
    /// Whether a round would have accepted the guess
    pub in_dictionary: bool,
}

/// Error type for the check command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    Secret(WordError),
    Guess(WordError),
    LengthMismatch { secret: usize, guess: usize },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secret(e) => write!(f, "Invalid secret: {e}"),
            Self::Guess(e) => write!(f, "Invalid guess: {e}"),
            Self::LengthMismatch { secret, guess } => write!(
                f,
                "Guess has {guess} letters but the secret has {secret}"
            ),
        }
    }
}

impl std::error::Error for CheckError {}

/// Score `guess` against `secret`
///
/// Dictionary membership is reported, not enforced.
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
///
/// # Examples
/// ```
/// use minigames::commands::check_guess;
/// use minigames::wordlists::Lexicon;
///
/// let result = check_guess("allot", "lolly", &Lexicon::embedded()).unwrap();
/// assert_eq!(result.evaluation.to_string(), "🟨🟨🟩⬜⬜");
/// ```
pub fn check_guess<S: WordSource + ?Sized>(
    secret: &str,
    guess: &str,
    words: &S,
) -> Result<CheckResult, CheckError> {
    let secret = Word::new(secret).map_err(CheckError::Secret)?;
    let guess = Word::new(guess).map_err(CheckError::Guess)?;

    if secret.len() != guess.len() {
        return Err(CheckError::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let evaluation = Evaluation::calculate(&guess, &secret);
    let in_dictionary = words.is_valid(guess.text());

    Ok(CheckResult {
        secret,
        guess,
        evaluation,
        in_dictionary,
    })
}

//! Guess validation
//!
//! Rules are checked in a fixed order and stop at the first failure:
//! repeat, then length, then characters.

use super::{Word, WordError};
use thiserror::Error;

/// Why a guess was rejected
///
/// All variants are turn-local: the player is asked again and no attempt is used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("You've already guessed {0}")]
    Duplicate(String),

    #[error("Your guess must be {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Invalid letter: '{0}'. Please use English letters")]
    InvalidCharacter(char),

    #[error("The game is already over")]
    GameOver,
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength { expected, actual } => Self::WrongLength { expected, actual },
            WordError::InvalidCharacter(c) => Self::InvalidCharacter(c),
        }
    }
}

/// Validate a raw guess against the previous guesses of the same game
///
/// Surrounding whitespace is ignored and the guess is normalized to uppercase
/// before any rule runs.
///
/// # Errors
///
/// - `Duplicate` if the normalized guess was already made
/// - `WrongLength` if it is not `length` characters long
/// - `InvalidCharacter` with the first character that is not an ASCII letter
///
/// # Examples
/// ```
/// use wordle_game::core::{GuessError, validate_guess};
///
/// let prior = ["CRANE"];
/// assert_eq!(validate_guess("slate", &prior, 5).unwrap().text(), "SLATE");
/// assert!(matches!(validate_guess("crane", &prior, 5), Err(GuessError::Duplicate(_))));
/// ```
pub fn validate_guess<S: AsRef<str>>(
    candidate: &str,
    prior_guesses: &[S],
    length: usize,
) -> Result<Word, GuessError> {
    let normalized = candidate.trim().to_ascii_uppercase();

    if prior_guesses.iter().any(|p| p.as_ref() == normalized) {
        return Err(GuessError::Duplicate(normalized));
    }

    Ok(Word::new(normalized, length)?)
}

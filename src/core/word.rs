//! Wordle word representation
//!
//! A Word stores a fixed-length, uppercase ASCII word. The same candidate
//! predicate is shared by the word-list loader, the guess validator and the
//! word-list builder.

use std::fmt;
use thiserror::Error;

/// Default number of letters in a word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// A validated Wordle word
///
/// Always uppercase ASCII letters, with the length it was validated against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid letter: '{0}'. Please use English letters")]
    InvalidCharacter(char),
}

/// Check whether `text` is a usable candidate of `length` letters
///
/// Length is counted in characters and every character must be an ASCII letter.
/// Case is ignored.
///
/// # Examples
/// ```
/// use wordle_game::core::is_candidate;
///
/// assert!(is_candidate("Crane", 5));
/// assert!(!is_candidate("cran3", 5));
/// assert!(!is_candidate("cranes", 5));
/// ```
#[must_use]
pub fn is_candidate(text: &str, length: usize) -> bool {
    text.chars().count() == length && text.chars().all(|c| c.is_ascii_alphabetic())
}

impl Word {
    /// Create a new Word of `length` letters from a string
    ///
    /// The input is normalized to uppercase before it is checked.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `length` characters
    /// - Contains a character that is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane", 5).unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let text = text.as_ref().to_ascii_uppercase();

        let actual = text.chars().count();
        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word of non-zero length
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Check if the word contains a specific uppercase letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

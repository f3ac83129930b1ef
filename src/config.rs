//! Game configuration

use crate::core::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH};
use crate::error::{Error, Result};

/// Most guesses a game may allow
pub const MAX_ATTEMPTS_LIMIT: usize = 20;

/// Longest word a game may use
pub const MAX_WORD_LENGTH: usize = 15;

/// Dimensions of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
        }
    }

    /// Check that a game can be played with these dimensions
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if either value is zero or above its
    /// limit ([`MAX_WORD_LENGTH`], [`MAX_ATTEMPTS_LIMIT`]).
    pub fn validate(self) -> Result<Self> {
        if !(1..=MAX_WORD_LENGTH).contains(&self.word_length) {
            return Err(Error::invalid_config(format!(
                "word length must be between 1 and {MAX_WORD_LENGTH}, got {}",
                self.word_length
            )));
        }
        if !(1..=MAX_ATTEMPTS_LIMIT).contains(&self.max_attempts) {
            return Err(Error::invalid_config(format!(
                "max attempts must be between 1 and {MAX_ATTEMPTS_LIMIT}, got {}",
                self.max_attempts
            )));
        }
        Ok(self)
    }
}

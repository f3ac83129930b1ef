//! Error types for the Wordle game.
//!
//! Guess validation failures live in [`crate::core::GuessError`]; they are
//! turn-local and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for wordle-game operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a word list from disk.
    #[error("failed to read word list '{path}': {source}")]
    WordListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a word list to disk.
    #[error("failed to write word list '{path}': {source}")]
    WordListWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No candidate of the requested length survived filtering.
    #[error("no valid {length}-letter words found in the word list")]
    EmptyWordList { length: usize },

    /// A secret word given on the command line is unusable.
    #[error("'{word}' is not a valid {length}-letter secret word")]
    InvalidSecret { word: String, length: usize },

    /// Configuration error.
    #[error("configuration error: {message}")]
    InvalidConfig { message: String },

    /// Terminal input or output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new `InvalidConfig` error with the given message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// A specialized `Result` type for wordle-game operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = Error::EmptyWordList { length: 5 };
        assert_eq!(err.to_string(), "no valid 5-letter words found in the word list");

        let err = Error::InvalidSecret {
            word: "ab".to_string(),
            length: 5,
        };
        assert!(err.to_string().contains("'ab'"));

        let err = Error::invalid_config("max attempts must be at least 1");
        assert!(err.to_string().contains("max attempts"));

        let err = Error::WordListRead {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("missing.txt"));
    }
}

//! Word lists for Wordle
//!
//! Provides the embedded default list, file loading, secret word selection and
//! the word-list builder.

pub mod builder;
mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{WordListSource, choose_secret_word, filter_candidates, select_secret_word};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_candidate;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(is_candidate(word, 5), "Word '{word}' is not a 5-letter word");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_sorted_and_unique() {
        assert!(WORDS.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

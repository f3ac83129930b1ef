//! Word list loading and secret word selection
//!
//! Raw entries come from the embedded list or a file, are filtered down to
//! valid candidates of the configured length, and one is drawn at random.

use super::WORDS;
use crate::core::{Word, is_candidate};
use crate::error::{Error, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where secret word candidates come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    /// The list compiled into the binary
    Embedded,
    /// A plain-text file with one word per line
    File(PathBuf),
}

impl WordListSource {
    /// Parse the `--wordlist` argument: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Read the raw, unfiltered entries of this source
    ///
    /// # Errors
    ///
    /// Returns `Error::WordListRead` if the file cannot be read.
    pub fn load(&self) -> Result<Vec<String>> {
        match self {
            Self::Embedded => Ok(WORDS.iter().map(|&w| w.to_string()).collect()),
            Self::File(path) => load_from_file(path),
        }
    }
}

/// Load raw entries from a file, one per line
///
/// Lines are trimmed and blank lines dropped; nothing else is checked here.
///
/// # Errors
///
/// Returns `Error::WordListRead` if the file cannot be read as UTF-8 text.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::WordListRead {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!(path = %path.display(), entries = entries.len(), "word list read");
    Ok(entries)
}

/// Keep the candidates that are `length` ASCII letters, as uppercase Words
pub fn filter_candidates<S: AsRef<str>>(candidates: &[S], length: usize) -> Vec<Word> {
    let words: Vec<Word> = candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| is_candidate(c, length))
        .filter_map(|c| Word::new(c, length).ok())
        .collect();

    let skipped = candidates.len() - words.len();
    if skipped > 0 {
        warn!(skipped, length, "word list entries skipped");
    }

    words
}

/// Pick a secret word uniformly at random from the valid candidates
///
/// # Errors
///
/// Returns `Error::EmptyWordList` if no candidate has `length` ASCII letters.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::wordlists::select_secret_word;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let word = select_secret_word(&["toolong", "crane", "cr4ne"], 5, &mut rng).unwrap();
/// assert_eq!(word.text(), "CRANE");
/// ```
pub fn select_secret_word<S, R>(candidates: &[S], length: usize, rng: &mut R) -> Result<Word>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    filter_candidates(candidates, length)
        .choose(rng)
        .cloned()
        .ok_or(Error::EmptyWordList { length })
}

/// Pick a secret word using the thread-local random generator
///
/// # Errors
///
/// Returns `Error::EmptyWordList` if no candidate has `length` ASCII letters.
pub fn choose_secret_word<S: AsRef<str>>(candidates: &[S], length: usize) -> Result<Word> {
    select_secret_word(candidates, length, &mut rand::rng())
}

/// Turn a word given on the command line into the secret
///
/// # Errors
///
/// Returns `Error::InvalidSecret` if it is not `length` ASCII letters.
pub fn secret_from_arg(word: &str, length: usize) -> Result<Word> {
    Word::new(word.trim(), length).map_err(|_| Error::InvalidSecret {
        word: word.to_string(),
        length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn filter_keeps_valid_words_only() {
        let input = ["crane", "toolong", "abc", "Slate", "sl8te", "", "  "];
        let words = filter_candidates(&input, 5);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE"]);
    }

    #[test]
    fn filter_respects_length() {
        let input = ["wolf", "bear", "crane"];
        assert_eq!(filter_candidates(&input, 4).len(), 2);
        assert_eq!(filter_candidates(&input, 5).len(), 1);
    }

    #[test]
    fn selection_never_returns_invalid_words() {
        let input = ["crane", "toolong", "abc", "slate", "sl8te", "ÄPFEL", "grape"];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let word = select_secret_word(&input, 5, &mut rng).unwrap();
            assert_eq!(word.len(), 5);
            assert!(word.letters().iter().all(u8::is_ascii_uppercase));
            assert!(["CRANE", "SLATE", "GRAPE"].contains(&word.text()));
        }
    }

    #[test]
    fn single_candidate_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(1);
        let word = select_secret_word(&["12345", "black"], 5, &mut rng).unwrap();
        assert_eq!(word.text(), "BLACK");
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let input = ["crane", "slate", "grape", "black", "snake"];
        let first = select_secret_word(&input, 5, &mut StdRng::seed_from_u64(9)).unwrap();
        let second = select_secret_word(&input, 5, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_list_is_an_error() {
        let input = ["toolong", "abc", "sl8te"];
        let err = choose_secret_word(&input, 5).unwrap_err();
        assert!(matches!(err, Error::EmptyWordList { length: 5 }));

        let none: [&str; 0] = [];
        assert!(choose_secret_word(&none, 5).is_err());
    }

    #[test]
    fn embedded_source_has_candidates() {
        let entries = WordListSource::Embedded.load().unwrap();
        assert_eq!(entries.len(), WORDS.len());
        assert!(choose_secret_word(&entries, 5).is_ok());
    }

    #[test]
    fn source_from_arg() {
        assert_eq!(WordListSource::from_arg("embedded"), WordListSource::Embedded);
        assert_eq!(
            WordListSource::from_arg("words.txt"),
            WordListSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn load_from_file_trims_lines() {
        let path = std::env::temp_dir().join(format!("wordle_loader_{}.txt", std::process::id()));
        fs::write(&path, "crane\n  slate \n\nbanana\n").unwrap();

        let entries = load_from_file(&path).unwrap();
        assert_eq!(entries, ["crane", "slate", "banana"]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = load_from_file("/definitely/not/here/words.txt").unwrap_err();
        assert!(matches!(err, Error::WordListRead { .. }));
    }

    #[test]
    fn secret_from_arg_validates() {
        assert_eq!(secret_from_arg("snake", 5).unwrap().text(), "SNAKE");
        assert!(matches!(
            secret_from_arg("snakes", 5),
            Err(Error::InvalidSecret { length: 5, .. })
        ));
    }
}

//! Word list builder
//!
//! Turns arbitrary text into a candidate list: whitespace-separated tokens of
//! exactly `length` ASCII letters, lower-cased, deduplicated and sorted.

use crate::core::is_candidate;
use crate::error::{Error, Result};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Counts from one builder run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// Whitespace-separated tokens in the input
    pub tokens: usize,
    /// Distinct words written
    pub words: usize,
}

/// Extract the sorted, distinct candidate words from `text`
///
/// # Examples
/// ```
/// use wordle_game::wordlists::builder::build_word_list;
///
/// let words = build_word_list("apple apple Apple banana12 grape", 5);
/// assert_eq!(words, ["apple", "grape"]);
/// ```
#[must_use]
pub fn build_word_list(text: &str, length: usize) -> Vec<String> {
    let distinct: FxHashSet<String> = text
        .par_split_whitespace()
        .filter(|token| is_candidate(token, length))
        .map(str::to_lowercase)
        .collect();

    let mut words: Vec<String> = distinct.into_iter().collect();
    words.par_sort_unstable_by(|a, b| (a.len(), a).cmp(&(b.len(), b)));
    words
}

/// Build a word list from the file at `input` and write it to `output`
///
/// Words are written one per line, separated by newlines.
///
/// # Errors
///
/// Returns `Error::WordListRead` if `input` cannot be read and
/// `Error::WordListWrite` if `output` cannot be written.
pub fn build_word_list_file(input: &Path, output: &Path, length: usize) -> Result<BuildSummary> {
    let text = fs::read_to_string(input).map_err(|source| Error::WordListRead {
        path: input.to_path_buf(),
        source,
    })?;

    let words = build_word_list(&text, length);
    fs::write(output, words.join("\n")).map_err(|source| Error::WordListWrite {
        path: output.to_path_buf(),
        source,
    })?;

    let summary = BuildSummary {
        tokens: text.split_whitespace().count(),
        words: words.len(),
    };
    info!(
        input = %input.display(),
        output = %output.display(),
        tokens = summary.tokens,
        words = summary.words,
        "word list built"
    );

    Ok(summary)
}

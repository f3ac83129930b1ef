//! Word list builder command
//!
//! Builds a candidate list from a text file with a spinner while it runs.

use crate::error::Result;
use crate::wordlists::builder::{BuildSummary, build_word_list_file};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Build `output` from the words in `input` and print what was written
///
/// # Errors
///
/// Returns an error if `input` cannot be read or `output` cannot be written.
pub fn run_build_wordlist(input: &Path, output: &Path, length: usize) -> Result<BuildSummary> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Reading {}", input.display()));
    pb.enable_steady_tick(Duration::from_millis(80));

    let result = build_word_list_file(input, output, length);
    pb.finish_and_clear();
    let summary = result?;

    println!(
        "{} Wrote {} {length}-letter words to {} ({} tokens read)",
        "✓".green().bold(),
        summary.words.to_string().bright_yellow().bold(),
        output.display(),
        summary.tokens
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn builds_list_from_file() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("wordle_cmd_{}_in.txt", std::process::id()));
        let output = dir.join(format!("wordle_cmd_{}_out.txt", std::process::id()));
        fs::write(&input, "Grape apple APPLE banana12 grape").unwrap();

        let summary = run_build_wordlist(&input, &output, 5).unwrap();
        assert_eq!(summary.words, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "apple\ngrape");

        fs::remove_file(&input).ok();
        fs::remove_file(&output).ok();
    }

    #[test]
    fn unreadable_input_fails() {
        let output = std::env::temp_dir().join("wordle_cmd_unused.txt");
        assert!(run_build_wordlist(Path::new("/no/such/input.txt"), &output, 5).is_err());
    }
}

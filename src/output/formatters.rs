//! Formatting utilities for terminal output

use crate::core::{
    GameState, GameStatus, GuessRecord, KEYBOARD_ROWS, LetterOutcome, LetterSets, LetterStatus,
    LetterStatusBoard,
};
use colored::{ColoredString, Colorize};

/// Color one letter tile by its outcome
#[must_use]
pub fn outcome_tile(letter: char, outcome: LetterOutcome) -> ColoredString {
    let tile = format!(" {letter} ");
    match outcome {
        LetterOutcome::Exact => tile.black().on_green().bold(),
        LetterOutcome::Present => tile.black().on_yellow().bold(),
        LetterOutcome::Absent => tile.white().on_bright_black(),
    }
}

/// Color one keyboard key by its best known status
#[must_use]
pub fn status_key(letter: char, status: LetterStatus) -> ColoredString {
    let key = letter.to_string();
    match status {
        LetterStatus::Exact => key.green().bold(),
        LetterStatus::Present => key.yellow().bold(),
        LetterStatus::Absent => key.bright_black().strikethrough(),
        LetterStatus::Unknown => key.normal(),
    }
}

/// Format a recorded guess as a row of colored tiles
#[must_use]
pub fn guess_row(record: &GuessRecord) -> String {
    record
        .letters()
        .map(|(letter, outcome)| outcome_tile(letter, outcome).to_string())
        .collect()
}

/// Placeholder row for a guess not made yet
#[must_use]
pub fn empty_row(length: usize) -> String {
    " _ ".repeat(length).dimmed().to_string()
}

/// Format the board as three indented QWERTY rows
#[must_use]
pub fn keyboard_lines(board: &LetterStatusBoard) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|c| status_key(c, board.status(c)).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Join a sorted letter set as "A, E"
#[must_use]
pub fn join_letters<'a>(letters: impl IntoIterator<Item = &'a char>) -> String {
    letters
        .into_iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The "Correct / Misplaced / Incorrect letters" summary of one guess
#[must_use]
pub fn letter_set_lines(sets: &LetterSets) -> [String; 3] {
    [
        format!("Correct letters: {}", join_letters(&sets.exact)),
        format!("Misplaced letters: {}", join_letters(&sets.present)),
        format!("Incorrect letters: {}", join_letters(&sets.absent)),
    ]
}

/// Shareable result grid, e.g. "Wordle 3/6" followed by emoji rows
#[must_use]
pub fn share_grid(game: &GameState) -> String {
    let score = match game.status() {
        GameStatus::Won => game.records().len().to_string(),
        _ => "X".to_string(),
    };

    let mut grid = format!("Wordle {score}/{}", game.max_attempts());
    for record in game.records() {
        grid.push('\n');
        grid.push_str(&record.to_emoji());
    }
    grid
}

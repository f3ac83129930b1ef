//! Keyboard letter status tracking
//!
//! Keeps the best outcome seen for every letter across all guesses of a game.
//! Statuses only ever move up: Unknown < Absent < Present < Exact.

use super::{GuessRecord, LetterOutcome};

/// Best known status of one alphabet letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Absent,
    Present,
    Exact,
}

impl From<LetterOutcome> for LetterStatus {
    fn from(outcome: LetterOutcome) -> Self {
        match outcome {
            LetterOutcome::Absent => Self::Absent,
            LetterOutcome::Present => Self::Present,
            LetterOutcome::Exact => Self::Exact,
        }
    }
}

/// QWERTY rows used when drawing the board as a keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best status per letter, A through Z
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatusBoard {
    statuses: [LetterStatus; 26],
}

impl LetterStatusBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(letter: char) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| (letter.to_ascii_uppercase() as u8 - b'A') as usize)
    }

    /// Status of a letter; anything that is not an ASCII letter is Unknown
    #[must_use]
    pub fn status(&self, letter: char) -> LetterStatus {
        Self::slot(letter).map_or(LetterStatus::Unknown, |i| self.statuses[i])
    }

    /// Merge the outcomes of one guess into the board
    ///
    /// Non-letter placeholders are skipped; a status is only overwritten by a
    /// higher-ranked one.
    pub fn update(&mut self, letters: impl IntoIterator<Item = (char, LetterOutcome)>) {
        for (letter, outcome) in letters {
            let Some(i) = Self::slot(letter) else {
                continue;
            };
            self.statuses[i] = self.statuses[i].max(outcome.into());
        }
    }

    /// Merge a recorded guess into the board
    pub fn record(&mut self, record: &GuessRecord) {
        self.update(record.letters());
    }

    /// Iterate over (letter, status) for A through Z
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        (b'A'..=b'Z').map(char::from).zip(self.statuses.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use LetterOutcome::{Absent, Exact, Present};

    fn record(guess: &str, secret: &str) -> GuessRecord {
        GuessRecord::new(Word::new(guess, 5).unwrap(), &Word::new(secret, 5).unwrap())
    }

    #[test]
    fn new_board_is_unknown() {
        let board = LetterStatusBoard::new();
        assert!(board.iter().all(|(_, s)| s == LetterStatus::Unknown));
        assert_eq!(board.iter().count(), 26);
    }

    #[test]
    fn update_records_guess() {
        let mut board = LetterStatusBoard::new();
        board.record(&record("crane", "snake"));

        assert_eq!(board.status('C'), LetterStatus::Absent);
        assert_eq!(board.status('R'), LetterStatus::Absent);
        assert_eq!(board.status('A'), LetterStatus::Exact);
        assert_eq!(board.status('N'), LetterStatus::Present);
        assert_eq!(board.status('E'), LetterStatus::Exact);
        assert_eq!(board.status('Z'), LetterStatus::Unknown);
    }

    #[test]
    fn exact_is_never_downgraded() {
        let mut board = LetterStatusBoard::new();
        board.update([('A', Exact)]);
        board.update([('A', Present)]);
        board.update([('A', Absent)]);
        assert_eq!(board.status('A'), LetterStatus::Exact);

        // Later guesses that see A elsewhere keep it exact
        board.record(&record("adapt", "snake"));
        assert_eq!(board.status('A'), LetterStatus::Exact);
    }

    #[test]
    fn present_upgrades_to_exact() {
        let mut board = LetterStatusBoard::new();
        board.update([('N', Present)]);
        assert_eq!(board.status('N'), LetterStatus::Present);
        board.update([('N', Exact)]);
        assert_eq!(board.status('N'), LetterStatus::Exact);
    }

    #[test]
    fn distinct_letter_mixed_outcomes_keep_the_best() {
        // EERIE vs SNAKE marks E absent at 0, 1 and 3 but exact at 4
        let mut board = LetterStatusBoard::new();
        board.record(&record("eerie", "snake"));
        assert_eq!(board.status('E'), LetterStatus::Exact);
    }

    #[test]
    fn placeholders_are_skipped() {
        let mut board = LetterStatusBoard::new();
        board.update([('_', Exact), (' ', Present), ('b', Present)]);
        assert_eq!(board.status('B'), LetterStatus::Present);
        assert_eq!(board.status('_'), LetterStatus::Unknown);
        assert_eq!(board.iter().filter(|(_, s)| *s != LetterStatus::Unknown).count(), 1);
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('A'..='Z').collect();
        assert_eq!(letters, alphabet);
    }
}

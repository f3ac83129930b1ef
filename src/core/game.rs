//! Game state machine
//!
//! `InProgress { attempt }` moves to `Won` when a guess matches the secret,
//! to `Lost` when the last attempt misses, and to `Aborted` when the player
//! cancels. All three are terminal.

use super::{GuessError, GuessRecord, LetterStatusBoard, Word, validate_guess};
use tracing::{debug, info};

/// Default number of guesses per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for guess number `attempt + 1`
    InProgress { attempt: usize },
    Won,
    /// Every attempt was used without finding the word
    Lost,
    /// The player cancelled before the game finished
    Aborted,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }

    /// Lost and aborted games share the same game-over screen
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Lost | Self::Aborted)
    }
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    max_attempts: usize,
    records: Vec<GuessRecord>,
    board: LetterStatusBoard,
    status: GameStatus,
}

impl GameState {
    /// Start a game for `secret` with `max_attempts` guesses
    ///
    /// # Panics
    /// Panics in debug mode if `max_attempts` is zero
    #[must_use]
    pub fn new(secret: Word, max_attempts: usize) -> Self {
        debug_assert!(max_attempts > 0, "a game needs at least one attempt");
        info!(length = secret.len(), max_attempts, "new game started");

        Self {
            secret,
            max_attempts,
            records: Vec::new(),
            board: LetterStatusBoard::new(),
            status: GameStatus::InProgress { attempt: 0 },
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    #[must_use]
    pub const fn board(&self) -> &LetterStatusBoard {
        &self.board
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// 1-based number of the guess being asked for
    #[must_use]
    pub fn guess_number(&self) -> usize {
        self.records.len() + 1
    }

    /// Validate, score and record a raw guess, then advance the state
    ///
    /// # Errors
    ///
    /// Returns `GuessError::GameOver` if the game is finished, otherwise any
    /// validation error from [`validate_guess`]. A rejected guess changes nothing.
    pub fn submit(&mut self, input: &str) -> Result<&GuessRecord, GuessError> {
        let GameStatus::InProgress { attempt } = self.status else {
            return Err(GuessError::GameOver);
        };

        let prior: Vec<&str> = self.records.iter().map(|r| r.guess.text()).collect();
        let guess = validate_guess(input, &prior, self.word_length())?;

        let record = GuessRecord::new(guess, &self.secret);
        self.board.record(&record);

        self.status = if record.is_perfect() {
            GameStatus::Won
        } else if attempt + 1 >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress {
                attempt: attempt + 1,
            }
        };

        debug!(
            guess = %record.guess,
            feedback = %record.to_emoji(),
            status = ?self.status,
            "guess recorded"
        );

        let index = self.records.len();
        self.records.push(record);
        if self.status.is_terminal() {
            info!(status = ?self.status, guesses = self.records.len(), "game finished");
        }

        Ok(&self.records[index])
    }

    /// Cancel a game that is still in progress
    ///
    /// Finished games keep their status.
    pub fn abort(&mut self) {
        if !self.status.is_terminal() {
            info!(guesses = self.records.len(), "game aborted");
            self.status = GameStatus::Aborted;
        }
    }
}

//! Core domain types for Wordle
//!
//! Words, guess evaluation, validation, the keyboard status board and the
//! game state machine. Nothing here touches the terminal.

mod board;
mod feedback;
mod game;
mod validate;
mod word;

pub use board::{KEYBOARD_ROWS, LetterStatus, LetterStatusBoard};
pub use feedback::{GuessRecord, LetterOutcome, LetterSets, evaluate};
pub use game::{DEFAULT_MAX_ATTEMPTS, GameState, GameStatus};
pub use validate::{GuessError, validate_guess};
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError, is_candidate};

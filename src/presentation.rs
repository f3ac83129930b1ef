//! Presentation seam between the game loop and a terminal front-end

use crate::core::{GameState, GuessError};
use std::io;

/// What the player answered at a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A raw line of input, not yet validated
    Guess(String),
    /// The player asked to stop (Ctrl+C, end of input, ...)
    Cancelled,
}

/// A front-end the game loop can drive
///
/// Implementations own any terminal state they need and must release it when
/// dropped, however the loop exits.
pub trait Presentation {
    /// Clear whatever was shown for the previous turn
    ///
    /// # Errors
    /// Returns any terminal I/O error.
    fn clear(&mut self) -> io::Result<()>;

    /// Show the guesses and keyboard status of `game`
    ///
    /// # Errors
    /// Returns any terminal I/O error.
    fn render(&mut self, game: &GameState) -> io::Result<()>;

    /// Ask for guess number `guess_number` (1-based)
    ///
    /// # Errors
    /// Returns any terminal I/O error.
    fn prompt(&mut self, guess_number: usize) -> io::Result<Reply>;

    /// Tell the player why their last input was refused
    ///
    /// # Errors
    /// Returns any terminal I/O error.
    fn reject(&mut self, error: &GuessError) -> io::Result<()>;

    /// Show the game-over summary
    ///
    /// # Errors
    /// Returns any terminal I/O error.
    fn finish(&mut self, game: &GameState) -> io::Result<()>;
}

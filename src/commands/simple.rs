//! Simple interactive CLI mode
//!
//! Line-oriented game without the full-screen TUI.

use super::play::run_game;
use crate::core::{GameState, GameStatus};
use crate::error::Result;
use crate::output::{ConsolePresenter, ReaderInput};
use std::io::{self, IsTerminal};

/// Play one game on stdin/stdout
///
/// On a terminal, input is read key by key so Ctrl+C ends the game gracefully;
/// piped input is read line by line and ends the game at end of input.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple(game: &mut GameState) -> Result<GameStatus> {
    if io::stdin().is_terminal() {
        run_game(game, &mut ConsolePresenter::terminal())
    } else {
        let stdin = io::stdin();
        let mut presenter = ConsolePresenter::new(ReaderInput(stdin.lock()), io::stdout());
        run_game(game, &mut presenter)
    }
}

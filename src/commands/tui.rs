//! Full-screen TUI mode

use super::play::run_game;
use crate::core::{GameState, GameStatus};
use crate::error::Result;
use crate::interactive::TuiPresenter;
use crate::output::{ConsolePresenter, ReaderInput};
use crate::presentation::Presentation;
use std::io;

/// Play one game in the TUI, then print the result on the normal screen
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(game: &mut GameState) -> Result<GameStatus> {
    let status = {
        let mut presenter = TuiPresenter::new(game.word_length(), game.max_attempts())?;
        run_game(game, &mut presenter)?
    };

    // The alternate screen is gone now; leave the summary in the scrollback
    ConsolePresenter::new(ReaderInput(io::empty()), io::stdout()).finish(game)?;
    Ok(status)
}

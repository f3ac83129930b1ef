//! Game loop
//!
//! Drives one game through a [`Presentation`]: prompt, validate, score, render,
//! until the game is won, lost or cancelled.

use crate::core::{GameState, GameStatus};
use crate::error::Result;
use crate::presentation::{Presentation, Reply};
use tracing::debug;

/// Play `game` to the end using `presenter`
///
/// Invalid input is reported and asked for again without using an attempt.
/// Cancellation ends the game as [`GameStatus::Aborted`]; the game-over
/// summary is shown in every case.
///
/// # Errors
///
/// Returns an error if the presenter fails to read or write the terminal.
pub fn run_game<P: Presentation>(game: &mut GameState, presenter: &mut P) -> Result<GameStatus> {
    presenter.clear()?;
    presenter.render(game)?;

    while !game.status().is_terminal() {
        match presenter.prompt(game.guess_number())? {
            Reply::Cancelled => game.abort(),
            Reply::Guess(input) => match game.submit(&input) {
                Ok(_) => {
                    presenter.clear()?;
                    presenter.render(game)?;
                }
                Err(err) => {
                    debug!(input = %input.trim(), %err, "guess rejected");
                    presenter.reject(&err)?;
                }
            },
        }
    }

    presenter.finish(game)?;
    Ok(game.status())
}

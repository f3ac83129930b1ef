//! Terminal output formatting
//!
//! Colored console rendering and the line-oriented presenter.

pub mod console;
pub mod formatters;

pub use console::{ConsolePresenter, LineInput, ReaderInput, TerminalInput};

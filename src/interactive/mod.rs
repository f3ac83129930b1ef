//! Interactive TUI interface
//!
//! Full-screen game using ratatui and crossterm.

pub mod app;
pub mod rendering;

pub use app::{App, TuiPresenter};

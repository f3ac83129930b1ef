//! Terminal Wordle
//!
//! A Wordle game for the terminal with a line-oriented console mode, a
//! full-screen TUI mode and a tool that builds candidate word lists.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GameState, GameStatus, Word};
//!
//! let mut game = GameState::new(Word::new("snake", 5).unwrap(), 6);
//! let record = game.submit("crane").unwrap();
//! println!("{}", record.to_emoji());
//!
//! game.submit("snake").unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game dimensions
pub mod config;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Front-end seam used by the game loop
pub mod presentation;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use config::GameConfig;
pub use error::{Error, Result};

//! Command implementations

pub mod build_list;
pub mod play;
pub mod simple;
pub mod tui;

pub use build_list::run_build_wordlist;
pub use play::run_game;
pub use simple::run_simple;
pub use tui::run_tui;

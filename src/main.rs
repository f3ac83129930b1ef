//! Terminal Wordle - CLI
//!
//! Play Wordle in a full-screen TUI or a simple line mode, or build a
//! candidate word list from any text file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    GameConfig,
    commands::{run_build_wordlist, run_simple, run_tui},
    core::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameState},
    wordlists::{WordListSource, choose_secret_word, loader::secret_from_arg},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle for the terminal, with a word-list builder",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of letters per word
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Number of guesses allowed
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Play with this secret word instead of a random one
    #[arg(long, global = true)]
    word: Option<String>,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line by line, no full-screen UI)
    Simple,

    /// Build a word list from the words in a text file
    BuildWordlist {
        /// Text file to read words from
        input: PathBuf,

        /// File to write the word list to, one word per line
        output: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Pick the secret word and set up a fresh game
fn new_game(wordlist: &str, word: Option<&str>, config: GameConfig) -> Result<GameState> {
    let secret = if let Some(word) = word {
        secret_from_arg(word, config.word_length)?
    } else {
        let candidates = WordListSource::from_arg(wordlist)
            .load()
            .context("could not load the word list")?;
        choose_secret_word(&candidates, config.word_length)?
    };

    Ok(GameState::new(secret, config.max_attempts))
}

fn main() -> Result<()> {
    let Cli {
        command,
        wordlist,
        length,
        max_attempts,
        word,
        verbose,
    } = Cli::parse();

    init_tracing(verbose);
    let config = GameConfig::new(length, max_attempts).validate()?;

    // Default to Play mode if no command given
    match command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut game = new_game(&wordlist, word.as_deref(), config)?;
            run_tui(&mut game)?;
        }
        Commands::Simple => {
            let mut game = new_game(&wordlist, word.as_deref(), config)?;
            run_simple(&mut game)?;
        }
        Commands::BuildWordlist { input, output } => {
            run_build_wordlist(&input, &output, config.word_length)
                .context("could not build the word list")?;
        }
    }

    Ok(())
}

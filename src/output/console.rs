//! Line-oriented console front-end
//!
//! Prints colored rows after every turn and reads one guess per line. On a
//! terminal the line is read in raw mode so Ctrl+C arrives as a key press and
//! ends the game cleanly instead of killing the process.

use super::formatters::{empty_row, guess_row, keyboard_lines, letter_set_lines, share_grid};
use crate::core::{GameState, GameStatus, GuessError, LetterSets};
use crate::presentation::{Presentation, Reply};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, BufRead, Stdout, Write};

/// Typed at the prompt to give up
const QUIT_COMMANDS: [&str; 2] = [":q", ":quit"];

/// Source of input lines; `None` means the player cancelled
pub trait LineInput {
    /// Read one line without its trailing newline
    ///
    /// # Errors
    /// Returns any I/O error from the underlying input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Lines from any buffered reader; end of input cancels
#[derive(Debug)]
pub struct ReaderInput<R>(pub R);

impl<R: BufRead> LineInput for ReaderInput<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Printable character of a key press
///
/// Keys held with Ctrl or Alt are shortcuts, not text.
pub(crate) fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// Raw mode for as long as the guard lives
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Nothing sensible to do if the terminal refuses
        let _ = terminal::disable_raw_mode();
    }
}

/// Minimal line editor on the real terminal
///
/// Ctrl+C and Ctrl+D cancel; Enter submits; Backspace erases.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl LineInput for TerminalInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let _raw = RawModeGuard::enable()?;
        let mut stdout = io::stdout();
        let mut line = String::new();

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(None);
                }
                KeyCode::Enter => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(Some(line));
                }
                KeyCode::Backspace => {
                    if line.pop().is_some() {
                        write!(stdout, "\u{8} \u{8}")?;
                    }
                }
                _ => {
                    if let Some(c) = typed_char(&key) {
                        line.push(c);
                        write!(stdout, "{c}")?;
                    }
                }
            }
            stdout.flush()?;
        }
    }
}

/// Console presenter writing colored text to `out`
pub struct ConsolePresenter<I, W> {
    input: I,
    out: W,
    clear_screen: bool,
}

impl ConsolePresenter<TerminalInput, Stdout> {
    /// Presenter on the real terminal, clearing the screen between turns
    #[must_use]
    pub fn terminal() -> Self {
        Self::new(TerminalInput, io::stdout()).with_clear_screen(true)
    }
}

impl<I: LineInput, W: Write> ConsolePresenter<I, W> {
    #[must_use]
    pub const fn new(input: I, out: W) -> Self {
        Self {
            input,
            out,
            clear_screen: false,
        }
    }

    #[must_use]
    pub const fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Give back the output, e.g. to inspect it in tests
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<I: LineInput, W: Write> Presentation for ConsolePresenter<I, W> {
    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn render(&mut self, game: &GameState) -> io::Result<()> {
        writeln!(self.out, "{}", "W O R D L E".bright_cyan().bold())?;
        writeln!(
            self.out,
            "{}",
            format!(
                "Guess the {}-letter word in {} tries. Type :q or press Ctrl+C to give up.",
                game.word_length(),
                game.max_attempts()
            )
            .dimmed()
        )?;
        writeln!(self.out)?;

        for record in game.records() {
            writeln!(self.out, "  {}", guess_row(record))?;
        }
        for _ in game.records().len()..game.max_attempts() {
            writeln!(self.out, "  {}", empty_row(game.word_length()))?;
        }
        writeln!(self.out)?;

        if let Some(last) = game.records().last() {
            for line in letter_set_lines(&LetterSets::compute(&last.guess, game.secret())) {
                writeln!(self.out, "{line}")?;
            }
            writeln!(self.out)?;
        }

        for line in keyboard_lines(game.board()) {
            writeln!(self.out, "  {line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn prompt(&mut self, guess_number: usize) -> io::Result<Reply> {
        write!(self.out, "Guess {guess_number}: ")?;
        self.out.flush()?;

        Ok(match self.input.read_line()? {
            Some(line) if QUIT_COMMANDS.contains(&line.trim()) => Reply::Cancelled,
            Some(line) => Reply::Guess(line),
            None => Reply::Cancelled,
        })
    }

    fn reject(&mut self, error: &GuessError) -> io::Result<()> {
        writeln!(self.out, "{}", error.to_string().red())?;
        self.out.flush()
    }

    fn finish(&mut self, game: &GameState) -> io::Result<()> {
        let secret = game.secret().text();

        writeln!(self.out, "{}", "═".repeat(40).bright_cyan())?;
        match game.status() {
            GameStatus::Won => {
                writeln!(
                    self.out,
                    "{}",
                    format!("Correct, the word was {secret}").green().bold()
                )?;
            }
            status @ (GameStatus::Lost | GameStatus::Aborted) => {
                if status == GameStatus::Aborted {
                    writeln!(self.out, "{}", "Game cancelled.".yellow())?;
                }
                writeln!(
                    self.out,
                    "{}",
                    format!("Sorry, the word was {secret}").red().bold()
                )?;
            }
            GameStatus::InProgress { .. } => {}
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", share_grid(game))?;
        writeln!(self.out, "{}", "═".repeat(40).bright_cyan())?;
        self.out.flush()
    }
}

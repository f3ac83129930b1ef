//! TUI application state and terminal presenter

use crate::core::{GameState, GameStatus, GuessError, GuessRecord, LetterStatusBoard};
use crate::output::console::typed_char;
use crate::output::formatters::share_grid;
use crate::presentation::{Presentation, Reply};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

/// Application state
#[derive(Debug, Clone)]
pub struct App {
    pub word_length: usize,
    pub max_attempts: usize,
    pub records: Vec<GuessRecord>,
    pub board: LetterStatusBoard,
    pub status: GameStatus,
    pub guess_number: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Secret and share grid, filled in once the game is over
    pub reveal: Option<Reveal>,
}

#[derive(Debug, Clone)]
pub struct Reveal {
    pub secret: String,
    pub share: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
            records: Vec::new(),
            board: LetterStatusBoard::new(),
            status: GameStatus::InProgress { attempt: 0 },
            guess_number: 1,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Guess the {word_length}-letter word in {max_attempts} tries."),
                style: MessageStyle::Info,
            }],
            reveal: None,
        }
    }

    /// Copy what the screen needs from the game
    pub fn sync(&mut self, game: &GameState) {
        self.records = game.records().to_vec();
        self.board = game.board().clone();
        self.status = game.status();
        self.guess_number = game.guess_number();

        if game.status().is_terminal() {
            self.reveal = Some(Reveal {
                secret: game.secret().text().to_string(),
                share: share_grid(game),
            });
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press while a guess is being typed
    ///
    /// Returns the reply once the guess is submitted or the game is cancelled.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Reply> {
        match key.code {
            KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Reply::Cancelled)
            }
            KeyCode::Esc => Some(Reply::Cancelled),
            KeyCode::Enter => Some(Reply::Guess(std::mem::take(&mut self.input_buffer))),
            KeyCode::Backspace => {
                self.input_buffer.pop();
                None
            }
            _ => {
                if let Some(c) = typed_char(&key) {
                    if self.input_buffer.chars().count() < self.word_length {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                None
            }
        }
    }

    fn celebrate(&mut self) {
        let (text, style) = match self.status {
            GameStatus::Won => {
                let text = match self.records.len() {
                    1 => "HOLE IN ONE! Extraordinary!",
                    2 => "MAGNIFICENT! Two guesses!",
                    3 => "SPLENDID! Three guesses!",
                    4 => "GREAT JOB! Four guesses!",
                    5 => "NICE WORK! Five guesses!",
                    _ => "PHEW! Got it!",
                };
                (text, MessageStyle::Success)
            }
            GameStatus::Aborted => ("Game cancelled.", MessageStyle::Error),
            _ => ("Out of guesses.", MessageStyle::Error),
        };
        self.add_message(text, style);
        self.add_message("Press any key to exit.", MessageStyle::Info);
    }
}

/// Alternate screen and raw mode for as long as the guard lives
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Construct before the second call so a failure still restores raw mode
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Nothing sensible to do if the terminal refuses
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

/// Full-screen presenter drawing [`App`] with ratatui
pub struct TuiPresenter {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
    _guard: TerminalGuard,
}

impl TuiPresenter {
    /// Take over the terminal
    ///
    /// The terminal is restored when the presenter is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched to raw mode or the
    /// alternate screen.
    pub fn new(word_length: usize, max_attempts: usize) -> io::Result<Self> {
        let guard = TerminalGuard::enter()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        Ok(Self {
            terminal,
            app: App::new(word_length, max_attempts),
            _guard: guard,
        })
    }

    fn draw(&mut self) -> io::Result<()> {
        let app = &self.app;
        self.terminal
            .draw(|f| super::rendering::ui(f, app))
            .map(|_| ())
    }

    fn next_key() -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

impl Presentation for TuiPresenter {
    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }

    fn render(&mut self, game: &GameState) -> io::Result<()> {
        self.app.sync(game);
        self.draw()
    }

    fn prompt(&mut self, guess_number: usize) -> io::Result<Reply> {
        self.app.guess_number = guess_number;
        loop {
            self.draw()?;
            if let Some(reply) = self.app.handle_key(Self::next_key()?) {
                return Ok(reply);
            }
        }
    }

    fn reject(&mut self, error: &GuessError) -> io::Result<()> {
        self.app.add_message(&error.to_string(), MessageStyle::Error);
        self.draw()
    }

    fn finish(&mut self, game: &GameState) -> io::Result<()> {
        self.app.sync(game);
        self.app.celebrate();
        self.draw()?;
        Self::next_key().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_builds_uppercase_guess() {
        let mut app = App::new(5, 6);
        for c in "crane".chars() {
            assert_eq!(app.handle_key(key(KeyCode::Char(c))), None);
        }
        assert_eq!(app.input_buffer, "CRANE");

        let reply = app.handle_key(key(KeyCode::Enter));
        assert_eq!(reply, Some(Reply::Guess("CRANE".to_string())));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn input_is_capped_at_word_length() {
        let mut app = App::new(5, 6);
        for c in "cranes".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.input_buffer, "CRANE");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input_buffer, "CRAN");
    }

    #[test]
    fn non_letters_reach_the_validator() {
        let mut app = App::new(5, 6);
        for c in "cr4ne".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Some(Reply::Guess("CR4NE".to_string()))
        );
    }

    #[test]
    fn ctrl_c_and_esc_cancel() {
        let mut app = App::new(5, 6);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Some(Reply::Cancelled));
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Some(Reply::Cancelled));
        // Plain 'c' is just a letter
        assert_eq!(app.handle_key(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn shortcut_keys_do_not_type() {
        let mut app = App::new(5, 6);
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        let alt_b = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT);

        assert_eq!(app.handle_key(ctrl_a), None);
        assert_eq!(app.handle_key(alt_b), None);
        assert!(app.input_buffer.is_empty());

        app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        assert_eq!(app.input_buffer, "C");
    }

    #[test]
    fn sync_reveals_secret_when_over() {
        let mut game = GameState::new(Word::new("snake", 5).unwrap(), 6);
        let mut app = App::new(5, 6);

        game.submit("crane").unwrap();
        app.sync(&game);
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.guess_number, 2);
        assert!(app.reveal.is_none());

        game.submit("snake").unwrap();
        app.sync(&game);
        let reveal = app.reveal.as_ref().unwrap();
        assert_eq!(reveal.secret, "SNAKE");
        assert!(reveal.share.starts_with("Wordle 2/6"));
    }

    #[test]
    fn messages_are_bounded() {
        let mut app = App::new(5, 6);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }

    #[test]
    fn celebration_depends_on_outcome() {
        let mut game = GameState::new(Word::new("snake", 5).unwrap(), 6);
        game.abort();
        let mut app = App::new(5, 6);
        app.sync(&game);
        app.celebrate();
        assert!(app.messages.iter().any(|m| m.text == "Game cancelled."));
    }
}

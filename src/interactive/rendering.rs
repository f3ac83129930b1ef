//! TUI rendering with ratatui
//!
//! Guess grid, keyboard status and messages for the game screen.

use super::app::{App, MessageStyle};
use crate::core::{GameStatus, KEYBOARD_ROWS, LetterOutcome, LetterStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let grid_height = u16::try_from(app.max_attempts).unwrap_or(u16::MAX).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(grid_height), // Guess grid
            Constraint::Length(5),           // Keyboard
            Constraint::Length(3),           // Input area
            Constraint::Min(3),              // Messages
            Constraint::Length(1),           // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn outcome_style(outcome: LetterOutcome) -> Style {
    match outcome {
        LetterOutcome::Exact => Style::new()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterOutcome::Present => Style::new()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterOutcome::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

const fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Exact => Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::new()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        LetterStatus::Unknown => Style::new().fg(Color::White),
    }
}

/// Row being typed: entered letters, then blanks
fn input_row(app: &App) -> Line<'static> {
    let typed = app.input_buffer.chars().map(|c| {
        Span::styled(
            format!(" {c} "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });
    let blanks = (app.input_buffer.chars().count()..app.word_length)
        .map(|_| Span::styled(" _ ", Style::default().fg(Color::Yellow)));

    Line::from(typed.chain(blanks).collect::<Vec<_>>())
}

fn empty_row(word_length: usize) -> Line<'static> {
    Line::from(Span::styled(
        " _ ".repeat(word_length),
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .records
        .iter()
        .map(|record| {
            Line::from(
                record
                    .letters()
                    .map(|(letter, outcome)| {
                        Span::styled(format!(" {letter} "), outcome_style(outcome))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    for row in app.records.len()..app.max_attempts {
        if row == app.records.len() && !app.status.is_terminal() {
            lines.push(input_row(app));
        } else {
            lines.push(empty_row(app.word_length));
        }
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|c| Span::styled(format!(" {c} "), status_style(app.board.status(c))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (&app.reveal, app.status) {
        (Some(reveal), GameStatus::Won) => (
            " CONGRATULATIONS! | Press any key to exit ".to_string(),
            format!("Correct, the word was {}", reveal.secret),
            Color::Green,
        ),
        (Some(reveal), status) if status.is_failure() => (
            " GAME OVER | Press any key to exit ".to_string(),
            format!("Sorry, the word was {}", reveal.secret),
            Color::Red,
        ),
        _ => (
            format!(
                " Guess {} of {} | Enter: Submit | Esc: Give up ",
                app.guess_number, app.max_attempts
            ),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.status {
        GameStatus::InProgress { attempt } => {
            format!("Attempt {}/{}", attempt + 1, app.max_attempts)
        }
        GameStatus::Won => format!("Won in {}/{}", app.records.len(), app.max_attempts),
        GameStatus::Lost => format!("Lost X/{}", app.max_attempts),
        GameStatus::Aborted => "Cancelled".to_string(),
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Word};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_guesses_and_input() {
        let mut game = GameState::new(Word::new("snake", 5).unwrap(), 6);
        game.submit("crane").unwrap();

        let mut app = App::new(5, 6);
        app.sync(&game);
        app.input_buffer = "SL".to_string();

        let screen = screen(&app);
        assert!(screen.contains("W O R D L E"));
        assert!(screen.contains(" C  R  A  N  E "));
        assert!(screen.contains(" S  L  _  _  _ "));
        assert!(screen.contains("Guess 2 of 6"));
        assert!(screen.contains("Attempt 2/6"));
    }

    #[test]
    fn draws_reveal_after_loss() {
        let mut game = GameState::new(Word::new("grape", 5).unwrap(), 1);
        game.submit("crane").unwrap();

        let mut app = App::new(5, 1);
        app.sync(&game);

        let screen = screen(&app);
        assert!(screen.contains("Sorry, the word was GRAPE"));
        assert!(screen.contains("Lost X/1"));
    }
}

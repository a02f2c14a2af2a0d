//! TUI application state and logic

use crate::core::{ListEvent, ListView, Rows, Session};
use crate::dictionary::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session<'a, dyn Dictionary + 'a>,
    pub list: UsedList,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Looking at the word list
    Browsing,
    /// The answer prompt is open
    Answer,
    /// A rejection dialog is showing
    Alert { title: String, message: String },
}

/// View state of the used-word list
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UsedList {
    pub rows: usize,
    /// Row to highlight, set when a word is inserted
    pub selected: Option<usize>,
}

impl ListView for UsedList {
    fn refresh(&mut self, event: ListEvent, rows: &dyn Rows) -> io::Result<()> {
        self.rows = rows.row_count();
        self.selected = match event {
            ListEvent::Reload => None,
            ListEvent::Inserted(index) => Some(index),
        };
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    /// Finished games (the running one is not counted)
    pub games_played: usize,
    pub words_found: usize,
    pub best_score: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a, dyn Dictionary + 'a>, rng: StdRng) -> Self {
        Self {
            session,
            list: UsedList::default(),
            input_mode: InputMode::Browsing,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Make words from the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Press 'a' or Enter to type an answer.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    /// Finish the running game and start a new one
    ///
    /// # Errors
    ///
    /// Returns an error if the word list view fails to refresh.
    pub fn new_game(&mut self) -> io::Result<()> {
        let score = self.session.score();
        self.stats.games_played += 1;
        self.stats.words_found += score;
        self.stats.best_score = self.stats.best_score.max(score);

        let event = self.session.start_game(&mut self.rng);
        self.list.refresh(event, &self.session)?;

        self.input_mode = InputMode::Browsing;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message(
            &format!(
                "New game started! Root word: {}",
                self.session.root_word().to_uppercase()
            ),
            MessageStyle::Info,
        );
        Ok(())
    }

    pub fn open_prompt(&mut self) {
        self.input_mode = InputMode::Answer;
        self.input_buffer.clear();
    }

    pub fn cancel_prompt(&mut self) {
        self.input_mode = InputMode::Browsing;
        self.input_buffer.clear();
    }

    /// Submit the typed answer
    ///
    /// The prompt closes first; a rejection then opens an alert.
    ///
    /// # Errors
    ///
    /// Returns an error if the word list view fails to refresh.
    pub fn submit_answer(&mut self) -> io::Result<()> {
        let answer = std::mem::take(&mut self.input_buffer);
        self.input_mode = InputMode::Browsing;

        match self.session.submit(&answer) {
            Ok(event) => {
                self.list.refresh(event, &self.session)?;
                self.add_message(&format!("✓ {answer}"), MessageStyle::Success);
            }
            Err(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
                self.input_mode = InputMode::Alert {
                    title: rejection.title().to_string(),
                    message: rejection.message(),
                };
            }
        }

        Ok(())
    }

    pub fn dismiss_alert(&mut self) {
        self.input_mode = InputMode::Browsing;
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

    /// React to a key press
    ///
    /// # Errors
    ///
    /// Returns an error if the word list view fails to refresh.
    pub fn handle_key(&mut self, key: KeyEvent) -> io::Result<()> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::Browsing => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                KeyCode::Char('a') | KeyCode::Enter => self.open_prompt(),
                _ => {}
            },
            InputMode::Answer => match key.code {
                KeyCode::Esc => self.cancel_prompt(),
                KeyCode::Enter => self.submit_answer()?,
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
            InputMode::Alert { .. } => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
        }

        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key)?;
        }
    }

    Ok(())
}

//! Simple interactive CLI mode
//!
//! Line-based game over stdin/stdout without the TUI

use crate::core::{Dialogs, ListEvent, ListView, Rows, Session, new_game, play_round};
use crate::dictionary::Dictionary;
use crate::output::formatters::{spaced_letters, word_count};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Prefix that marks a console line as a command rather than an answer
pub const COMMAND_PREFIX: char = ':';

/// Console commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    NewGame,
    Quit,
}

/// Read a command from a trimmed input line; plain words are answers
fn parse_command(line: &str) -> Option<Command> {
    match line.strip_prefix(COMMAND_PREFIX)?.trim().to_lowercase().as_str() {
        "new" | "n" => Some(Command::NewGame),
        "quit" | "q" => Some(Command::Quit),
        _ => None,
    }
}

/// Console front-end reading answers line by line
pub struct Console<I, W> {
    input: I,
    output: W,
    restart: bool,
}

impl<I: BufRead, W: Write> Console<I, W> {
    #[must_use]
    pub const fn new(input: I, output: W) -> Self {
        Self {
            input,
            output,
            restart: false,
        }
    }

    /// Consume the console, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Whether the last round ended because the player asked for a new game
    fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart)
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\n╔══════════════════════════════════════════════════════════════╗"
        )?;
        writeln!(
            self.output,
            "║                    Word Scramble - Simple Mode               ║"
        )?;
        writeln!(
            self.output,
            "╚══════════════════════════════════════════════════════════════╝\n"
        )?;
        writeln!(
            self.output,
            "Make as many words as you can from the letters of the root word."
        )?;
        writeln!(
            self.output,
            "Each letter can be used as often as it appears in the root.\n"
        )?;
        writeln!(self.output, "Commands: ':new' for a new word, ':quit' to exit\n")
    }

    fn print_root(&mut self, root: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "────────────────────────────────────────────────────────────"
        )?;
        writeln!(
            self.output,
            "Root word: {}",
            spaced_letters(root).bright_yellow().bold()
        )?;
        writeln!(
            self.output,
            "────────────────────────────────────────────────────────────"
        )
    }

    fn print_farewell(&mut self, score: usize) -> io::Result<()> {
        writeln!(
            self.output,
            "\n👋 Thanks for playing! Last round: {}\n",
            word_count(score)
        )
    }
}

impl<I: BufRead, W: Write> ListView for Console<I, W> {
    fn refresh(&mut self, event: ListEvent, rows: &dyn Rows) -> io::Result<()> {
        match event {
            ListEvent::Reload => {
                writeln!(self.output, "\n🔄 New game started!\n")?;
            }
            ListEvent::Inserted(index) => {
                if let Some(word) = rows.row_at(index) {
                    writeln!(self.output, "{} {}", "✓".green(), word.green().bold())?;
                }

                writeln!(self.output, "Your words ({}):", rows.row_count())?;
                for word in (0..rows.row_count()).filter_map(|i| rows.row_at(i)) {
                    writeln!(self.output, "  • {word}")?;
                }
                writeln!(self.output)?;
            }
        }

        Ok(())
    }
}

impl<I: BufRead, W: Write> Dialogs for Console<I, W> {
    fn prompt(&mut self, title: &str) -> io::Result<Option<String>> {
        write!(self.output, "{title}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // End of input
            return Ok(None);
        }

        let answer = line.trim();
        match parse_command(answer) {
            Some(Command::Quit) => Ok(None),
            Some(Command::NewGame) => {
                self.restart = true;
                Ok(None)
            }
            None => Ok(Some(answer.to_string())),
        }
    }

    fn show_message(&mut self, title: &str, message: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "{} {} {}\n",
            "❌".red(),
            format!("{title}:").red().bold(),
            message
        )
    }
}

/// Play games on the given console until the player quits
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn play<D, R, I, W>(
    session: &mut Session<'_, D>,
    console: &mut Console<I, W>,
    rng: &mut R,
) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    console.print_banner()?;

    loop {
        new_game(session, console, rng)?;
        console.print_root(session.root_word())?;
        play_round(session, console)?;

        if !console.take_restart() {
            return console.print_farewell(session.score());
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<D, R>(session: &mut Session<'_, D>, rng: &mut R) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    R: Rng + ?Sized,
{
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    play(session, &mut console, rng)
}

//! Capabilities a front-end offers to the game
//!
//! A front-end renders the used-word list and talks to the player. The
//! session only ever tells it what changed ([`ListEvent`]) and lets it read
//! the rows back ([`Rows`]).

use super::session::Session;
use crate::dictionary::Dictionary;
use rand::Rng;
use std::io;

/// Title of the answer prompt
pub const PROMPT_TITLE: &str = "Enter Answer";

/// What changed in the used-word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// Everything changed; redraw from scratch
    Reload,
    /// One row was inserted at the given index
    Inserted(usize),
}

/// Read access to the rows of the used-word list
pub trait Rows {
    /// Number of rows in the list
    fn row_count(&self) -> usize;

    /// Row content, index 0 being the most recent word
    fn row_at(&self, index: usize) -> Option<&str>;
}

/// Something that displays the used-word list
pub trait ListView {
    /// React to a change in the list
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the list cannot be redrawn.
    fn refresh(&mut self, event: ListEvent, rows: &dyn Rows) -> io::Result<()>;
}

/// Modal conversations with the player
pub trait Dialogs {
    /// Ask the player for a line of text; `None` means the player is done
    ///
    /// # Errors
    ///
    /// Returns an I/O error if input cannot be read.
    fn prompt(&mut self, title: &str) -> io::Result<Option<String>>;

    /// Show a titled message
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the message cannot be shown.
    fn show_message(&mut self, title: &str, message: &str) -> io::Result<()>;
}

/// A complete front-end
pub trait Frontend: ListView + Dialogs {}

impl<T: ListView + Dialogs + ?Sized> Frontend for T {}

/// Start a new game and let the front-end redraw
///
/// # Errors
///
/// Returns an I/O error if the front-end fails to redraw.
pub fn new_game<D, F, R>(
    session: &mut Session<'_, D>,
    frontend: &mut F,
    rng: &mut R,
) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    F: Frontend + ?Sized,
    R: Rng + ?Sized,
{
    let event = session.start_game(rng);
    frontend.refresh(event, &*session)
}

/// Prompt for answers and submit them until the prompt yields nothing
///
/// Accepted words are announced as row inserts; rejections are shown as
/// messages.
///
/// # Errors
///
/// Returns an I/O error if the front-end fails to read input or to show
/// the outcome of a submission.
pub fn play_round<D, F>(session: &mut Session<'_, D>, frontend: &mut F) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    F: Frontend + ?Sized,
{
    while let Some(answer) = frontend.prompt(PROMPT_TITLE)? {
        match session.submit(&answer) {
            Ok(event) => frontend.refresh(event, &*session)?,
            Err(rejection) => frontend.show_message(rejection.title(), &rejection.message())?,
        }
    }

    Ok(())
}

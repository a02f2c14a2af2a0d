//! Core game types
//!
//! The session state, the three validation checks and the interfaces a
//! front-end implements to show the game.

pub mod frontend;
mod letters;
mod rejection;
mod session;

pub use frontend::{Dialogs, Frontend, ListEvent, ListView, Rows, new_game, play_round};
pub use letters::is_possible;
pub use rejection::Rejection;
pub use session::Session;

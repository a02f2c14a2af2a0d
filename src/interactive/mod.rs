//! Interactive TUI interface
//!
//! Full-screen ratatui front-end: the used-word list, an answer prompt and
//! modal alerts for rejected answers.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, UsedList, run_tui};
pub use rendering::ui;

//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a root word.
//! Every answer must be spellable from the root's letters, must not repeat an
//! earlier answer and must be a real word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Rejection, Session};
//! use word_scramble::dictionary::WordSet;
//! use word_scramble::wordlists::WordList;
//!
//! let words = WordList::embedded();
//! let dictionary = WordSet::english();
//! let mut session = Session::with_root(&words, &dictionary, "silkworm");
//!
//! assert!(session.submit("silk").is_ok());
//! assert_eq!(session.submit("silk"), Err(Rejection::AlreadyUsed));
//! ```

// Core game types
pub mod core;

// Dictionary lookup
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log subscriber setup
pub mod logging;

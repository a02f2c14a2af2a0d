//! Word lists for the game
//!
//! Provides the bundled start words and dictionary compiled into the binary,
//! plus the loader that turns a word resource into a playable [`WordList`].

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::{DEFAULT_WORD, WordList};

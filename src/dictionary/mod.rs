//! Dictionary lookup for the realness check
//!
//! The game treats the dictionary as an external spell-checking service: it
//! hands over a piece of text and learns where, if anywhere, the first
//! misspelling is.

mod word_set;

pub use word_set::{DictionaryError, WordSet};

use std::ops::Range;

/// Language tag used by the bundled dictionary
pub const ENGLISH: &str = "en";

/// A spell-checking collaborator
pub trait Dictionary {
    /// Language tag of the words this dictionary knows
    fn language(&self) -> &str;

    /// Check a single lowercase token
    fn contains(&self, word: &str) -> bool;

    /// Byte range of the first misspelled token in `text`, if any
    ///
    /// Tokens are runs of alphabetic characters, optionally joined by an
    /// apostrophe ("don't"). Text with no tokens has no misspelling.
    fn misspelled_range(&self, text: &str) -> Option<Range<usize>> {
        tokens(text).find(|range| !self.contains(&text[range.clone()].to_lowercase()))
    }

    /// A word is real when the checker reports no misspelled range
    fn is_real(&self, text: &str) -> bool {
        self.misspelled_range(text).is_none()
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn language(&self) -> &str {
        (**self).language()
    }

    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Iterate over the byte ranges of word tokens in `text`
fn tokens(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut chars = text.char_indices().peekable();

    std::iter::from_fn(move || {
        // Skip to the start of the next token
        let (start, _) = chars.find(|&(_, c)| c.is_alphabetic())?;
        let mut end = text.len();

        while let Some(&(i, c)) = chars.peek() {
            if c.is_alphabetic() {
                chars.next();
            } else if c == '\'' && text[i + 1..].starts_with(char::is_alphabetic) {
                chars.next();
            } else {
                end = i;
                break;
            }
        }

        Some(start..end)
    })
}

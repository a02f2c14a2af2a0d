//! Word list loading utilities
//!
//! Turns a newline-delimited word resource into a [`WordList`]. A missing,
//! unreadable or empty resource is never an error: the list falls back to
//! [`DEFAULT_WORD`].

use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Root word used when no word resource is available
pub const DEFAULT_WORD: &str = "silkworm";

/// Ordered, non-empty list of candidate root words
///
/// Loaded once at startup and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list from raw entries, falling back to [`DEFAULT_WORD`] when
    /// no usable entry remains
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::WordList;
    ///
    /// let list = WordList::from_entries(["Silkworm", "", "  airplane "]);
    /// assert_eq!(list.words(), ["silkworm", "airplane"]);
    ///
    /// let empty = WordList::from_entries(Vec::<String>::new());
    /// assert_eq!(empty.words(), ["silkworm"]);
    /// ```
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| {
                let trimmed = entry.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            })
            .collect();

        if words.is_empty() {
            warn!(fallback = DEFAULT_WORD, "word list is empty; using default word");
            return Self::fallback();
        }

        Self { words }
    }

    /// The single-word list used when nothing else is available
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            words: vec![DEFAULT_WORD.to_string()],
        }
    }

    /// The bundled start words
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(super::START_WORDS)
    }

    /// All candidate root words, in resource order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of candidate root words (never zero)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; present for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick one entry uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.words.choose(rng).map_or(DEFAULT_WORD, String::as_str)
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Load the word list from a file
///
/// Any read error is treated as "resource unavailable" and yields the
/// single-word fallback list.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("does/not/exist.txt");
/// assert_eq!(words.words(), ["silkworm"]);
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> WordList {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(content) => {
            let list = WordList::from_entries(content.split('\n'));
            debug!(path = %path.display(), count = list.len(), "loaded word list");
            list
        }
        Err(error) => {
            warn!(path = %path.display(), %error, fallback = DEFAULT_WORD, "word list unavailable");
            WordList::fallback()
        }
    }
}

/// Load the word list from `path` if given, otherwise use the bundled one
pub fn load(path: Option<&Path>) -> WordList {
    path.map_or_else(WordList::embedded, load_from_file)
}

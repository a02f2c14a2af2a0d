//! Hash-set backed dictionary

use super::{Dictionary, ENGLISH};
use crate::wordlists::DICTIONARY_WORDS;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Error type for dictionaries that cannot be loaded
#[derive(Debug)]
pub enum DictionaryError {
    Unreadable { path: PathBuf, source: io::Error },
    Empty { path: PathBuf },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "Cannot read dictionary {}: {source}", path.display())
            }
            Self::Empty { path } => write!(f, "Dictionary {} contains no words", path.display()),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Dictionary holding every known word in a hash set
#[derive(Debug, Clone)]
pub struct WordSet {
    language: String,
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a dictionary from a list of words
    ///
    /// Words are trimmed and lowercased; blank entries are ignored.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordSet};
    ///
    /// let dictionary = WordSet::from_words("en", ["Silk", "worm"]);
    /// assert!(dictionary.is_real("silk"));
    /// assert!(!dictionary.is_real("slik"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.to_string(),
            words,
        }
    }

    /// The bundled English dictionary
    #[must_use]
    pub fn english() -> Self {
        Self::from_words(ENGLISH, DICTIONARY_WORDS)
    }

    /// Load a newline-delimited English dictionary from a file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if the file cannot be read or holds no words.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_words(ENGLISH, content.lines());
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordSet {
    fn default() -> Self {
        Self::english()
    }
}

impl Dictionary for WordSet {
    fn language(&self) -> &str {
        &self.language
    }

    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_knows_common_words() {
        let dictionary = WordSet::english();
        for word in ["ski", "silk", "worm", "cat", "silkworm"] {
            assert!(dictionary.is_real(word), "'{word}' should be real");
        }
    }

    #[test]
    fn english_rejects_nonsense() {
        let dictionary = WordSet::english();
        assert!(!dictionary.is_real("mrowklis"));
        assert!(!dictionary.is_real("qzx"));
    }

    #[test]
    fn english_language_tag() {
        assert_eq!(WordSet::english().language(), "en");
    }

    #[test]
    fn duplicates_collapse() {
        let dictionary = WordSet::from_words("en", ["cat", "CAT", " cat "]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn blank_entries_ignored() {
        let dictionary = WordSet::from_words("en", ["", "  ", "dog"]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = WordSet::load_from_file("/definitely/not/here/words");
        assert!(matches!(result, Err(DictionaryError::Unreadable { .. })));
    }

    #[test]
    fn empty_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{}_empty_dictionary.txt",
            std::process::id()
        ));
        fs::write(&path, "\n \n").unwrap();
        let result = WordSet::load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DictionaryError::Empty { .. })));
    }

    #[test]
    fn file_dictionary_is_used() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{}_small_dictionary.txt",
            std::process::id()
        ));
        fs::write(&path, "Zebra\nquokka\n").unwrap();
        let dictionary = WordSet::load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(dictionary.is_real("zebra"));
        assert!(dictionary.is_real("quokka"));
        assert!(!dictionary.is_real("cat"));
    }

    #[test]
    fn error_display_names_path() {
        let error = DictionaryError::Empty {
            path: PathBuf::from("words.txt"),
        };
        assert_eq!(error.to_string(), "Dictionary words.txt contains no words");
    }
}

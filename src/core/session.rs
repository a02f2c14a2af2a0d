//! Game session: the root word, the accepted words and the validation rules

use super::frontend::{ListEvent, Rows};
use super::letters;
use super::rejection::Rejection;
use crate::dictionary::Dictionary;
use crate::wordlists::WordList;
use rand::Rng;
use std::collections::VecDeque;
use tracing::{debug, info};

/// One player's game
///
/// Owns the current root word and the words accepted so far, most recent
/// first. Every accepted word passed the possibility, originality and
/// realness checks against the state at the time it was submitted.
pub struct Session<'a, D: Dictionary + ?Sized> {
    words: &'a WordList,
    dictionary: &'a D,
    root: String,
    used: VecDeque<String>,
}

impl<'a, D: Dictionary + ?Sized> Session<'a, D> {
    /// Create a session and start its first game with a random root word
    pub fn new<R: Rng + ?Sized>(words: &'a WordList, dictionary: &'a D, rng: &mut R) -> Self {
        let mut session = Self::with_root(words, dictionary, "");
        session.start_game(rng);
        session
    }

    /// Create a session playing a fixed root word
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Session;
    /// use word_scramble::dictionary::WordSet;
    /// use word_scramble::wordlists::WordList;
    ///
    /// let words = WordList::embedded();
    /// let dictionary = WordSet::english();
    /// let mut session = Session::with_root(&words, &dictionary, "silkworm");
    ///
    /// assert!(session.submit("ski").is_ok());
    /// assert_eq!(session.used_words().collect::<Vec<_>>(), ["ski"]);
    /// ```
    #[must_use]
    pub fn with_root(words: &'a WordList, dictionary: &'a D, root: &str) -> Self {
        Self {
            words,
            dictionary,
            root: root.to_lowercase(),
            used: VecDeque::new(),
        }
    }

    /// Start a new game: pick a random root word and forget all used words
    pub fn start_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ListEvent {
        self.root = self.words.choose(rng).to_lowercase();
        self.used.clear();
        info!(root = %self.root, "new game");
        ListEvent::Reload
    }

    /// Submit a candidate word
    ///
    /// The candidate is lowercased and checked for possibility, originality
    /// and realness, in that order; the first failing check decides the
    /// rejection. Accepted words are stored as typed at the front of the list.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` of the first failing check.
    pub fn submit(&mut self, answer: &str) -> Result<ListEvent, Rejection> {
        let lower = answer.to_lowercase();

        let outcome = if !self.is_possible(&lower) {
            Err(Rejection::NotPossible {
                root: self.root.clone(),
            })
        } else if !self.is_original(&lower) {
            Err(Rejection::AlreadyUsed)
        } else if !self.is_real(&lower) {
            Err(Rejection::NotRecognized)
        } else {
            self.used.push_front(answer.to_string());
            Ok(ListEvent::Inserted(0))
        };

        match &outcome {
            Ok(_) => debug!(word = answer, root = %self.root, "accepted"),
            Err(rejection) => debug!(word = answer, root = %self.root, reason = rejection.title(), "rejected"),
        }

        outcome
    }

    /// Can `word` be spelled from the root word's letters?
    #[must_use]
    pub fn is_possible(&self, word: &str) -> bool {
        letters::is_possible(word, &self.root)
    }

    /// Has `word` not been accepted yet this game? Case is ignored.
    #[must_use]
    pub fn is_original(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        !self.used.iter().any(|used| used.to_lowercase() == lower)
    }

    /// Does the dictionary know `word`?
    #[must_use]
    pub fn is_real(&self, word: &str) -> bool {
        self.dictionary.is_real(word)
    }

    /// The word players build from
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first
    pub fn used_words(&self) -> impl ExactSizeIterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }

    /// Number of words accepted this game
    #[must_use]
    pub fn score(&self) -> usize {
        self.used.len()
    }

    /// Language of the dictionary backing the realness check
    #[must_use]
    pub fn language(&self) -> &str {
        self.dictionary.language()
    }
}

impl<D: Dictionary + ?Sized> Rows for Session<'_, D> {
    fn row_count(&self) -> usize {
        self.used.len()
    }

    fn row_at(&self, index: usize) -> Option<&str> {
        self.used.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> WordSet {
        WordSet::from_words(
            "en",
            ["ski", "silk", "worm", "milk", "slim", "cat", "act", "silkworm", "a"],
        )
    }

    fn used<'s>(session: &'s Session<'_, WordSet>) -> Vec<&'s str> {
        session.used_words().collect()
    }

    #[test]
    fn accepts_word_from_root_letters() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "silkworm");

        assert_eq!(session.submit("ski"), Ok(ListEvent::Inserted(0)));
        assert_eq!(used(&session), ["ski"]);
    }

    #[test]
    fn repeated_word_is_already_used() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "silkworm");

        assert!(session.submit("silk").is_ok());
        assert_eq!(session.submit("silk"), Err(Rejection::AlreadyUsed));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn originality_ignores_case() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "cat");

        assert!(session.submit("cat").is_ok());
        assert_eq!(session.submit("Cat"), Err(Rejection::AlreadyUsed));
    }

    #[test]
    fn originality_ignores_case_of_stored_word() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "cat");

        assert!(session.submit("Cat").is_ok());
        assert_eq!(session.submit("cat"), Err(Rejection::AlreadyUsed));
    }

    #[test]
    fn accepted_word_keeps_typed_casing() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "silkworm");

        assert!(session.submit("SiLk").is_ok());
        assert_eq!(session.row_at(0), Some("SiLk"));
    }

    #[test]
    fn too_many_of_a_letter_is_not_possible() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "cat");

        assert_eq!(
            session.submit("catt"),
            Err(Rejection::NotPossible {
                root: "cat".to_string()
            })
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn unknown_word_is_not_recognized() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "silkworm");

        assert_eq!(session.submit("mrow"), Err(Rejection::NotRecognized));
    }

    #[test]
    fn possibility_is_checked_before_originality() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "silkworm");

        // Not possible and not real: possibility wins
        assert!(matches!(
            session.submit("zebra"),
            Err(Rejection::NotPossible { .. })
        ));
    }

    #[test]
    fn originality_is_checked_before_realness() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "silkworm");

        assert!(session.submit("silk").is_ok());
        assert_eq!(session.submit("SILK"), Err(Rejection::AlreadyUsed));
    }

    #[test]
    fn most_recent_word_first() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "silkworm");

        for word in ["ski", "silk", "worm", "milk"] {
            assert_eq!(session.submit(word), Ok(ListEvent::Inserted(0)));
        }

        assert_eq!(used(&session), ["milk", "worm", "silk", "ski"]);
        assert_eq!(session.row_count(), 4);
    }

    #[test]
    fn rejections_do_not_change_list() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "silkworm");

        assert!(session.submit("ski").is_ok());
        assert!(session.submit("zzz").is_err());
        assert!(session.submit("ski").is_err());
        assert!(session.submit("mrow").is_err());

        assert_eq!(used(&session), ["ski"]);
    }

    #[test]
    fn root_word_itself_is_accepted() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "silkworm");

        assert!(session.submit("silkworm").is_ok());
    }

    #[test]
    fn empty_submission_is_accepted() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "silkworm");

        assert!(session.submit("").is_ok());
        assert_eq!(session.submit(""), Err(Rejection::AlreadyUsed));
    }

    #[test]
    fn root_is_lowercased() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut session = Session::with_root(&words, &dictionary, "SilkWorm");

        assert_eq!(session.root_word(), "silkworm");
        assert!(session.submit("SKI").is_ok());
    }

    #[test]
    fn start_game_picks_from_word_list() {
        let words = WordList::from_entries(["cat", "silkworm"]);
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = Session::new(&words, &dictionary, &mut rng);

        for _ in 0..10 {
            assert_eq!(session.start_game(&mut rng), ListEvent::Reload);
            assert!(words.words().iter().any(|w| w == session.root_word()));
        }
    }

    #[test]
    fn fallback_list_always_plays_silkworm() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(9);
        let session = Session::new(&words, &dictionary, &mut rng);

        assert_eq!(session.root_word(), "silkworm");
    }

    #[test]
    fn start_game_twice_leaves_empty_list() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = Session::new(&words, &dictionary, &mut rng);

        assert!(session.submit("ski").is_ok());
        session.start_game(&mut rng);
        session.start_game(&mut rng);

        assert_eq!(session.row_count(), 0);
        assert_eq!(session.row_at(0), None);
    }

    #[test]
    fn words_can_be_reused_after_new_game() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = Session::new(&words, &dictionary, &mut rng);

        assert!(session.submit("ski").is_ok());
        session.start_game(&mut rng);
        assert!(session.submit("ski").is_ok());
    }

    #[test]
    fn score_counts_successes_since_start() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = Session::new(&words, &dictionary, &mut rng);

        let attempts = ["ski", "ski", "silk", "zzz", "worm", "mrow", "slim"];
        let accepted = attempts
            .iter()
            .filter(|word| session.submit(word).is_ok())
            .count();

        assert_eq!(accepted, 4);
        assert_eq!(session.score(), accepted);
    }

    #[test]
    fn predicates_are_exposed() {
        let words = WordList::fallback();
        let dictionary = dictionary();
        let session = Session::with_root(&words, &dictionary, "silkworm");

        assert!(session.is_possible("worm"));
        assert!(session.is_possible("worms"));
        assert!(!session.is_possible("wormss"));
        assert!(!session.is_possible("wormm"));
        assert!(session.is_original("worm"));
        assert!(session.is_real("worm"));
        assert!(!session.is_real("wrom"));
        assert_eq!(session.language(), "en");
    }
}

//! Batch check command
//!
//! Plays a list of answers against a fixed root word without any interaction.

use crate::core::{Rejection, Session};
use crate::dictionary::Dictionary;
use crate::wordlists::WordList;

/// Configuration for a batch check
pub struct CheckConfig {
    pub root: String,
    pub answers: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(root: String, answers: Vec<String>) -> Self {
        Self { root, answers }
    }
}

/// Outcome of a single submitted answer
pub struct Verdict {
    pub answer: String,
    pub outcome: Result<(), Rejection>,
}

impl Verdict {
    #[must_use]
    pub const fn accepted(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Result of a batch check
pub struct CheckResult {
    pub root: String,
    pub verdicts: Vec<Verdict>,
    /// Accepted words, most recent first
    pub used_words: Vec<String>,
}

impl CheckResult {
    /// Number of accepted answers
    #[must_use]
    pub fn score(&self) -> usize {
        self.used_words.len()
    }
}

/// Submit every answer in order against the configured root word
///
/// # Examples
/// ```
/// use word_scramble::commands::{CheckConfig, run_check};
/// use word_scramble::dictionary::WordSet;
/// use word_scramble::wordlists::WordList;
///
/// let config = CheckConfig::new("silkworm".into(), vec!["silk".into(), "silk".into()]);
/// let result = run_check(&config, &WordList::embedded(), &WordSet::english());
///
/// assert!(result.verdicts[0].accepted());
/// assert!(!result.verdicts[1].accepted());
/// ```
pub fn run_check<D: Dictionary + ?Sized>(
    config: &CheckConfig,
    words: &WordList,
    dictionary: &D,
) -> CheckResult {
    let mut session = Session::with_root(words, dictionary, &config.root);

    let verdicts = config
        .answers
        .iter()
        .map(|answer| Verdict {
            answer: answer.clone(),
            outcome: session.submit(answer).map(|_| ()),
        })
        .collect();

    CheckResult {
        root: session.root_word().to_string(),
        verdicts,
        used_words: session.used_words().map(ToString::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;

    fn check(root: &str, answers: &[&str]) -> CheckResult {
        let config = CheckConfig::new(
            root.to_string(),
            answers.iter().map(ToString::to_string).collect(),
        );
        run_check(&config, &WordList::fallback(), &WordSet::english())
    }

    #[test]
    fn one_verdict_per_answer() {
        let result = check("silkworm", &["ski", "silk", "zoo"]);
        assert_eq!(result.verdicts.len(), 3);
        assert_eq!(result.verdicts[2].answer, "zoo");
    }

    #[test]
    fn silkworm_scenario() {
        let result = check("silkworm", &["ski"]);
        assert!(result.verdicts[0].accepted());
        assert_eq!(result.used_words, ["ski"]);
    }

    #[test]
    fn repeated_answer_rejected() {
        let result = check("silkworm", &["silk", "silk"]);
        assert_eq!(result.verdicts[1].outcome, Err(Rejection::AlreadyUsed));
        assert_eq!(result.score(), 1);
    }

    #[test]
    fn impossible_answer_rejected() {
        let result = check("cat", &["catt"]);
        assert!(matches!(
            result.verdicts[0].outcome,
            Err(Rejection::NotPossible { .. })
        ));
    }

    #[test]
    fn used_words_most_recent_first() {
        let result = check("silkworm", &["ski", "worm", "milk"]);
        assert_eq!(result.used_words, ["milk", "worm", "ski"]);
    }

    #[test]
    fn root_reported_lowercase() {
        let result = check("SILKWORM", &[]);
        assert_eq!(result.root, "silkworm");
        assert_eq!(result.score(), 0);
    }
}

//! Reasons a submission can be turned down

use std::fmt;

/// A recoverable validation failure, shown to the player as a titled message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The candidate cannot be spelled from the root word's letters
    NotPossible { root: String },
    /// The candidate was already accepted this round
    AlreadyUsed,
    /// The dictionary does not know the candidate
    NotRecognized,
}

impl Rejection {
    /// Dialog title for this rejection
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::NotPossible { .. } => "Word not possible",
            Self::AlreadyUsed => "Word used already",
            Self::NotRecognized => "Word not recognised",
        }
    }

    /// Dialog body for this rejection
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NotPossible { root } => format!("You can't spell that word from {root}"),
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotRecognized => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_possible_names_root() {
        let rejection = Rejection::NotPossible {
            root: "silkworm".to_string(),
        };
        assert_eq!(rejection.title(), "Word not possible");
        assert_eq!(
            rejection.message(),
            "You can't spell that word from silkworm"
        );
    }

    #[test]
    fn already_used_texts() {
        assert_eq!(Rejection::AlreadyUsed.title(), "Word used already");
        assert_eq!(Rejection::AlreadyUsed.message(), "Be more original!");
    }

    #[test]
    fn not_recognized_texts() {
        assert_eq!(Rejection::NotRecognized.title(), "Word not recognised");
        assert_eq!(
            Rejection::NotRecognized.message(),
            "You can't just make them up, you know!"
        );
    }

    #[test]
    fn display_joins_title_and_message() {
        assert_eq!(
            Rejection::AlreadyUsed.to_string(),
            "Word used already: Be more original!"
        );
    }
}

//! Result of submitting a candidate word

use std::fmt;

/// What happened to a submitted word
///
/// Rejections are ordinary game events, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationOutcome {
    /// Word was added to the round
    Accepted(String),
    /// Input was blank after trimming; nothing to report
    NoOp,
    RejectedEqualsRoot,
    RejectedTooShort,
    RejectedDuplicate,
    RejectedNotSubsequence,
    RejectedNotAWord,
}

impl ValidationOutcome {
    /// True for `Accepted`
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// True for any `Rejected*` variant
    ///
    /// `NoOp` is neither accepted nor rejected.
    #[inline]
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        !matches!(self, Self::Accepted(_) | Self::NoOp)
    }

    /// Short headline for the outcome
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::ValidationOutcome;
    ///
    /// assert_eq!(ValidationOutcome::RejectedDuplicate.title(), "Word used already");
    /// ```
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Accepted(_) => "Word accepted",
            Self::NoOp => "",
            Self::RejectedEqualsRoot => "Word is equal",
            Self::RejectedTooShort => "Word is shorter than three",
            Self::RejectedDuplicate => "Word used already",
            Self::RejectedNotSubsequence => "Word not possible",
            Self::RejectedNotAWord => "Word not recognized",
        }
    }

    /// Longer explanation shown under the title
    #[must_use]
    pub fn message(&self, root_word: &str) -> String {
        match self {
            Self::Accepted(word) => format!("'{word}' is worth {}", super::word_points(word)),
            Self::NoOp => String::new(),
            Self::RejectedEqualsRoot => "You can't put the initial word".to_string(),
            Self::RejectedTooShort => "Put the greater word".to_string(),
            Self::RejectedDuplicate => "Be more original!".to_string(),
            Self::RejectedNotSubsequence => {
                format!("You can't spell that word from '{root_word}'!")
            }
            Self::RejectedNotAWord => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted(word) => write!(f, "Accepted: {word}"),
            Self::NoOp => write!(f, "Ignored"),
            other => write!(f, "{}", other.title()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_match_presentation_table() {
        assert_eq!(ValidationOutcome::RejectedEqualsRoot.title(), "Word is equal");
        assert_eq!(
            ValidationOutcome::RejectedTooShort.title(),
            "Word is shorter than three"
        );
        assert_eq!(ValidationOutcome::RejectedDuplicate.title(), "Word used already");
        assert_eq!(
            ValidationOutcome::RejectedNotSubsequence.title(),
            "Word not possible"
        );
        assert_eq!(
            ValidationOutcome::RejectedNotAWord.title(),
            "Word not recognized"
        );
    }

    #[test]
    fn not_possible_message_names_root() {
        let msg = ValidationOutcome::RejectedNotSubsequence.message("silkworm");
        assert_eq!(msg, "You can't spell that word from 'silkworm'!");
    }

    #[test]
    fn accepted_message_reports_points() {
        let msg = ValidationOutcome::Accepted("worms".to_string()).message("silkworm");
        assert_eq!(msg, "'worms' is worth 2");
    }

    #[test]
    fn classification() {
        assert!(ValidationOutcome::Accepted("silk".to_string()).is_accepted());
        assert!(!ValidationOutcome::Accepted("silk".to_string()).is_rejection());
        assert!(!ValidationOutcome::NoOp.is_accepted());
        assert!(!ValidationOutcome::NoOp.is_rejection());
        assert!(ValidationOutcome::RejectedNotAWord.is_rejection());
    }

    #[test]
    fn display_uses_title_for_rejections() {
        assert_eq!(
            ValidationOutcome::RejectedDuplicate.to_string(),
            "Word used already"
        );
        assert_eq!(
            ValidationOutcome::Accepted("silk".to_string()).to_string(),
            "Accepted: silk"
        );
    }
}

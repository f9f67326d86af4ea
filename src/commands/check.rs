//! Batch check command
//!
//! Plays a list of words against one root word and reports each outcome.

use crate::core::ValidationOutcome;
use crate::dictionary::SpellChecker;
use crate::game::{GameError, WordGame};

/// Outcome of every submitted word, in submission order
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub root_word: String,
    pub outcomes: Vec<(String, ValidationOutcome)>,
    pub score: u32,
}

impl CheckReport {
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_accepted()).count()
    }

    #[must_use]
    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_rejection()).count()
    }
}

/// Submit `words` one after another in a fresh round on `root_word`
///
/// Earlier acceptances count: submitting the same word twice reports a
/// duplicate the second time.
///
/// # Errors
///
/// Returns an error if the root word is blank or holds anything but letters.
pub fn check_words<C: SpellChecker>(
    game: &mut WordGame<C>,
    root_word: &str,
    words: &[String],
) -> Result<CheckReport, GameError> {
    let root_word = game.start_round(root_word)?.root_word().to_string();

    let mut outcomes = Vec::with_capacity(words.len());
    for word in words {
        let outcome = game.submit(word)?;
        outcomes.push((word.clone(), outcome));
    }

    let score = game.round().map_or(0, crate::core::Round::score);

    Ok(CheckReport {
        root_word,
        outcomes,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::StaticDictionary;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&s| s.to_string()).collect()
    }

    #[test]
    fn reports_each_outcome_in_order() {
        let mut game = WordGame::new(StaticDictionary::new("en", ["silk", "worms"]));
        let report = check_words(
            &mut game,
            "silkworm",
            &words(&["silk", "silk", "worms", "silkk", "ilk", "wilk"]),
        )
        .unwrap();

        let outcomes: Vec<_> = report.outcomes.iter().map(|(_, o)| o.clone()).collect();
        assert_eq!(
            outcomes,
            vec![
                ValidationOutcome::Accepted("silk".to_string()),
                ValidationOutcome::RejectedDuplicate,
                ValidationOutcome::Accepted("worms".to_string()),
                ValidationOutcome::RejectedNotSubsequence,
                ValidationOutcome::RejectedTooShort,
                ValidationOutcome::RejectedNotAWord,
            ]
        );
        assert_eq!(report.score, 3);
        assert_eq!(report.accepted(), 2);
        assert_eq!(report.rejected(), 4);
    }

    #[test]
    fn blank_words_are_neither_accepted_nor_rejected() {
        let mut game = WordGame::new(StaticDictionary::new("en", ["silk"]));
        let report = check_words(&mut game, "silkworm", &words(&["", "  "])).unwrap();
        assert_eq!(report.accepted(), 0);
        assert_eq!(report.rejected(), 0);
    }

    #[test]
    fn blank_root_is_an_error() {
        let mut game = WordGame::new(StaticDictionary::new("en", ["silk"]));
        let result = check_words(&mut game, "", &words(&["silk"]));
        assert!(matches!(result, Err(GameError::EmptyRootWord)));
    }

    #[test]
    fn non_letter_root_is_an_error() {
        let mut game = WordGame::new(StaticDictionary::new("en", ["silk"]));
        let result = check_words(&mut game, "silk worm", &words(&["silk"]));
        assert!(matches!(result, Err(GameError::NonAlphabeticRootWord(_))));
    }
}

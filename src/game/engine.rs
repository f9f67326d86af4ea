//! Round state machine
//!
//! `WordGame` is either uninitialized (no round yet) or holds one active
//! `Round`. Submissions are checked against the rules in a fixed order so the
//! reported reason is deterministic.

use super::GameError;
use crate::core::{MIN_WORD_LENGTH, Round, ValidationOutcome, normalize};
use crate::dictionary::{DEFAULT_LOCALE, SpellChecker};

/// Normalize a root word and check it can carry a round
///
/// Every entry point that takes a root word goes through here, so the game,
/// the batch check and the analysis agree on what a usable root is.
///
/// # Errors
///
/// Returns `GameError::EmptyRootWord` for a blank root and
/// `GameError::NonAlphabeticRootWord` if anything but letters remains after
/// trimming.
pub fn validate_root_word(root_word: &str) -> Result<String, GameError> {
    let root_word = normalize(root_word);
    if root_word.is_empty() {
        return Err(GameError::EmptyRootWord);
    }
    if !root_word.chars().all(char::is_alphabetic) {
        return Err(GameError::NonAlphabeticRootWord(root_word));
    }
    Ok(root_word)
}

/// Owner of the current round and the dictionary used to judge words
pub struct WordGame<C: SpellChecker> {
    checker: C,
    locale: String,
    round: Option<Round>,
}

impl<C: SpellChecker> WordGame<C> {
    /// Create a game using the default `"en"` locale
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::ValidationOutcome;
    /// use word_scramble::game::WordGame;
    ///
    /// let mut game = WordGame::new(|word: &str, _: &str| word == "silk");
    /// game.start_round("silkworm").unwrap();
    ///
    /// let outcome = game.submit("Silk ").unwrap();
    /// assert_eq!(outcome, ValidationOutcome::Accepted("silk".to_string()));
    /// assert_eq!(game.round().unwrap().score(), 1);
    /// ```
    pub fn new(checker: C) -> Self {
        Self::with_locale(checker, DEFAULT_LOCALE)
    }

    /// Create a game that asks the checker about `locale`
    pub fn with_locale(checker: C, locale: impl Into<String>) -> Self {
        Self {
            checker,
            locale: locale.into(),
            round: None,
        }
    }

    /// Replace any current round with a fresh one for `root_word`
    ///
    /// # Errors
    ///
    /// Returns an error if the root word is blank or holds anything but
    /// letters; see [`validate_root_word`]. The current round is kept then.
    pub fn start_round(&mut self, root_word: &str) -> Result<&Round, GameError> {
        let root_word = validate_root_word(root_word)?;

        tracing::info!(root_word = %root_word, "starting round");
        Ok(&*self.round.insert(Round::new(root_word)))
    }

    /// Validate a candidate and, if it passes every rule, add it to the round
    ///
    /// Rules, in order:
    /// 1. blank input is ignored (`NoOp`)
    /// 2. the root word itself
    /// 3. three letters or fewer
    /// 4. already accepted
    /// 5. not spellable from the root's letters
    /// 6. unknown to the dictionary
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidState` if no round has been started.
    pub fn submit(&mut self, candidate: &str) -> Result<ValidationOutcome, GameError> {
        let round = self.round.as_mut().ok_or(GameError::InvalidState)?;
        let word = normalize(candidate);

        let outcome = Self::judge(round, &self.checker, &self.locale, &word);

        match &outcome {
            ValidationOutcome::Accepted(_) => {
                round.accept(word.clone());
                tracing::debug!(word = %word, score = round.score(), "word accepted");
            }
            ValidationOutcome::NoOp => {}
            rejected => {
                tracing::debug!(word = %word, reason = %rejected, "word rejected");
            }
        }

        Ok(outcome)
    }

    fn judge(round: &Round, checker: &C, locale: &str, word: &str) -> ValidationOutcome {
        if word.is_empty() {
            return ValidationOutcome::NoOp;
        }
        if word == round.root_word() {
            return ValidationOutcome::RejectedEqualsRoot;
        }
        if word.chars().count() <= MIN_WORD_LENGTH {
            return ValidationOutcome::RejectedTooShort;
        }
        if round.contains(word) {
            return ValidationOutcome::RejectedDuplicate;
        }
        if !round.pool().can_spell(word) {
            return ValidationOutcome::RejectedNotSubsequence;
        }
        if !checker.is_known_word(word, locale) {
            return ValidationOutcome::RejectedNotAWord;
        }
        ValidationOutcome::Accepted(word.to_string())
    }

    /// Current round, if one has been started
    #[inline]
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.round.is_some()
    }

    #[inline]
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[inline]
    #[must_use]
    pub const fn checker(&self) -> &C {
        &self.checker
    }
}

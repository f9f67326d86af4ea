//! Root word providers
//!
//! Choosing a root word is the caller's business; the game only needs one
//! lowercase word per round.

use crate::game::GameError;
use rand::prelude::IndexedRandom;

/// Root word used when a list loads but no word can be drawn from it
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Something that can hand out root words
pub trait RootWordSource {
    /// Next root word, or `None` if the source has nothing to offer
    fn next_root_word(&self) -> Option<String>;
}

/// Random pick from a word list
#[derive(Debug, Clone)]
pub struct RandomRootWords {
    words: Vec<String>,
    fallback: Option<String>,
}

impl RandomRootWords {
    /// Random picks from `words`; an empty list yields nothing
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let words = words.into_iter().filter(|w| !w.trim().is_empty()).collect();
        Self {
            words,
            fallback: None,
        }
    }

    /// Random picks from `words`, falling back to [`FALLBACK_ROOT_WORD`]
    #[must_use]
    pub fn with_fallback(words: Vec<String>) -> Self {
        Self {
            fallback: Some(FALLBACK_ROOT_WORD.to_string()),
            ..Self::new(words)
        }
    }

    /// Random picks from the embedded start list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(super::loader::words_from_slice(super::START_WORDS))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl RootWordSource for RandomRootWords {
    fn next_root_word(&self) -> Option<String> {
        match self.words.choose(&mut rand::rng()) {
            Some(word) => Some(word.clone()),
            None => {
                if let Some(fallback) = &self.fallback {
                    tracing::warn!(fallback = %fallback, "word list is empty, using fallback root word");
                }
                self.fallback.clone()
            }
        }
    }
}

/// Always the same root word
#[derive(Debug, Clone)]
pub struct FixedRootWord(pub String);

impl RootWordSource for FixedRootWord {
    fn next_root_word(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Draw a root word, treating an exhausted source as fatal
///
/// # Errors
///
/// Returns `GameError::NoRootWord` if the source yields nothing or only
/// whitespace.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::{FixedRootWord, pick_root_word};
///
/// let root = pick_root_word(&FixedRootWord(" Silkworm ".to_string())).unwrap();
/// assert_eq!(root, "silkworm");
/// ```
pub fn pick_root_word<S: RootWordSource + ?Sized>(source: &S) -> Result<String, GameError> {
    source
        .next_root_word()
        .map(|w| crate::core::normalize(&w))
        .filter(|w| !w.is_empty())
        .ok_or(GameError::NoRootWord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pick_comes_from_list() {
        let words = vec!["silkworm".to_string(), "backpack".to_string()];
        let source = RandomRootWords::new(words.clone());
        for _ in 0..20 {
            let pick = source.next_root_word().unwrap();
            assert!(words.contains(&pick));
        }
    }

    #[test]
    fn empty_list_yields_nothing() {
        let source = RandomRootWords::new(Vec::new());
        assert!(source.is_empty());
        assert_eq!(source.next_root_word(), None);
        assert!(matches!(
            pick_root_word(&source),
            Err(GameError::NoRootWord)
        ));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let source = RandomRootWords::new(vec![String::new(), "  ".to_string()]);
        assert!(source.is_empty());
    }

    #[test]
    fn fallback_used_for_empty_list() {
        let source = RandomRootWords::with_fallback(Vec::new());
        assert_eq!(pick_root_word(&source).unwrap(), FALLBACK_ROOT_WORD);
    }

    #[test]
    fn embedded_source_has_words() {
        let source = RandomRootWords::embedded();
        assert_eq!(source.len(), super::super::START_WORDS_COUNT);
        assert!(pick_root_word(&source).is_ok());
    }

    #[test]
    fn blank_fixed_word_is_fatal() {
        let source = FixedRootWord("   ".to_string());
        assert!(matches!(
            pick_root_word(&source),
            Err(GameError::NoRootWord)
        ));
    }
}

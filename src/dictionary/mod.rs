//! Dictionary lookups
//!
//! The game never talks to a spell-checker directly. It asks a `SpellChecker`,
//! which a host can back with a platform service, a static word set, or a
//! closure in tests.

mod static_dictionary;

pub use static_dictionary::StaticDictionary;

/// Default locale tag for lookups
pub const DEFAULT_LOCALE: &str = "en";

/// Capability that decides whether a word is a real word
pub trait SpellChecker {
    /// Whether `word` (lowercase) is a recognized word in `locale`
    ///
    /// Answers are exact: no partial or fuzzy matches.
    fn is_known_word(&self, word: &str, locale: &str) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_known_word(&self, word: &str, locale: &str) -> bool {
        self(word, locale)
    }
}

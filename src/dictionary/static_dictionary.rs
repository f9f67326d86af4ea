//! In-memory word set bound to one locale

use super::SpellChecker;
use crate::wordlists::{WordListError, loader};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A fixed set of known words for a single locale
///
/// Lookups in any other locale answer `false`.
#[derive(Debug, Clone)]
pub struct StaticDictionary {
    locale: String,
    words: FxHashSet<String>,
}

impl StaticDictionary {
    /// Build a dictionary from any iterator of words
    ///
    /// Words are trimmed and lowercased; blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{SpellChecker, StaticDictionary};
    ///
    /// let dict = StaticDictionary::new("en", ["Silk", "worm"]);
    /// assert!(dict.is_known_word("silk", "en"));
    /// assert!(!dict.is_known_word("silk", "fr"));
    /// ```
    pub fn new<I, S>(locale: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            locale: locale.into(),
            words,
        }
    }

    /// The English word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(super::DEFAULT_LOCALE, crate::wordlists::DICTIONARY)
    }

    /// Load a newline-delimited word list for `locale`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(
        locale: impl Into<String>,
        path: P,
    ) -> Result<Self, WordListError> {
        let words = loader::load_from_file(path)?;
        let dict = Self::new(locale, words);
        tracing::info!(
            locale = dict.locale(),
            words = dict.len(),
            "loaded dictionary from file"
        );
        Ok(dict)
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every known word (unordered)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl SpellChecker for StaticDictionary {
    fn is_known_word(&self, word: &str, locale: &str) -> bool {
        locale.eq_ignore_ascii_case(&self.locale) && self.words.contains(word)
    }
}

//! Game configuration
//!
//! Resolved from command-line flags (or their environment fallbacks) in the
//! binary, then used to build the dictionary and root word source.

use crate::dictionary::{DEFAULT_LOCALE, StaticDictionary};
use crate::wordlists::{
    FixedRootWord, RandomRootWords, RootWordSource, WordListError, loader,
};
use std::path::PathBuf;

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    /// Compiled into the binary
    Embedded,
    File(PathBuf),
}

impl ListSource {
    /// `"embedded"` selects the built-in list; anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub wordlist: ListSource,
    pub dictionary: ListSource,
    pub locale: String,
    /// Play every round on this root instead of drawing from the list
    pub root_word: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: ListSource::Embedded,
            dictionary: ListSource::Embedded,
            locale: DEFAULT_LOCALE.to_string(),
            root_word: None,
        }
    }
}

impl GameConfig {
    /// Build the dictionary for the configured locale
    ///
    /// # Errors
    ///
    /// Returns an error if a dictionary file cannot be read or holds no words.
    pub fn load_dictionary(&self) -> Result<StaticDictionary, WordListError> {
        match &self.dictionary {
            ListSource::Embedded => {
                if self.locale != DEFAULT_LOCALE {
                    tracing::warn!(
                        locale = %self.locale,
                        "embedded dictionary is English only; every word will be unknown"
                    );
                }
                Ok(StaticDictionary::embedded())
            }
            ListSource::File(path) => {
                let dict = StaticDictionary::from_file(&self.locale, path)?;
                if dict.is_empty() {
                    return Err(WordListError::Empty { path: path.clone() });
                }
                Ok(dict)
            }
        }
    }

    /// Load all configured root words
    ///
    /// # Errors
    ///
    /// Returns an error if the word list file cannot be read.
    pub fn load_root_words(&self) -> Result<Vec<String>, WordListError> {
        match &self.wordlist {
            ListSource::Embedded => Ok(loader::words_from_slice(crate::wordlists::START_WORDS)),
            ListSource::File(path) => loader::load_from_file(path),
        }
    }

    /// Root word provider: the fixed root if one was given, else random picks
    ///
    /// An empty list is not an error here; drawing from it is.
    ///
    /// # Errors
    ///
    /// Returns an error if the word list file cannot be read.
    pub fn root_source(&self) -> Result<Box<dyn RootWordSource>, WordListError> {
        if let Some(root) = &self.root_word {
            return Ok(Box::new(FixedRootWord(root.clone())));
        }
        Ok(Box::new(RandomRootWords::new(self.load_root_words()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::SpellChecker;
    use crate::wordlists::pick_root_word;

    #[test]
    fn list_source_from_arg() {
        assert_eq!(ListSource::from_arg("embedded"), ListSource::Embedded);
        assert_eq!(
            ListSource::from_arg("words.txt"),
            ListSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn default_config_uses_embedded_lists() {
        let config = GameConfig::default();
        let dict = config.load_dictionary().unwrap();
        assert!(dict.is_known_word("silk", "en"));

        let roots = config.load_root_words().unwrap();
        assert_eq!(roots.len(), crate::wordlists::START_WORDS_COUNT);
    }

    #[test]
    fn fixed_root_overrides_list() {
        let config = GameConfig {
            root_word: Some("silkworm".to_string()),
            ..GameConfig::default()
        };
        let source = config.root_source().unwrap();
        assert_eq!(pick_root_word(&*source).unwrap(), "silkworm");
    }

    #[test]
    fn empty_dictionary_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{}_empty_dictionary_file.txt",
            std::process::id()
        ));
        std::fs::write(&path, "\n\n").unwrap();

        let config = GameConfig {
            dictionary: ListSource::File(path.clone()),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.load_dictionary(),
            Err(WordListError::Empty { .. })
        ));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_wordlist_file_is_an_error() {
        let config = GameConfig {
            wordlist: ListSource::File(PathBuf::from("/no/such/start.txt")),
            ..GameConfig::default()
        };
        assert!(config.root_source().is_err());
    }
}

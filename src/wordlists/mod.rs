//! Word lists for the scramble game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! file loading, and root word providers.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use source::{
    FALLBACK_ROOT_WORD, FixedRootWord, RandomRootWords, RootWordSource, pick_root_word,
};

use std::io;
use std::path::PathBuf;

/// Failure to obtain a word list
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no words", .path.display())]
    Empty { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_letters() {
        for &word in START_WORDS {
            assert!(word.len() > 3, "Root word '{word}' is too short");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_include_silkworm() {
        assert!(START_WORDS.contains(&FALLBACK_ROOT_WORD));
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let known: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for &root in &START_WORDS[..10] {
            // Check first 10 for speed
            assert!(known.contains(&root), "Root '{root}' not in dictionary");
        }
    }
}

//! Round analysis
//!
//! Works out every word a player could get accepted for a root word, and the
//! best score a round on that root can reach.

use crate::core::{LetterPool, MIN_WORD_LENGTH, normalize, word_points};
use crate::dictionary::{SpellChecker, StaticDictionary};
use rayon::prelude::*;
use std::cmp::Reverse;

/// Everything a round on one root word can yield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundAnalysis {
    pub root_word: String,
    /// Longest first, then alphabetical
    pub possible_words: Vec<String>,
    pub max_score: u32,
}

impl RoundAnalysis {
    /// Fraction of the maximum score reached by `score`
    #[must_use]
    pub fn completion(&self, score: u32) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        (f64::from(score) / f64::from(self.max_score)).min(1.0)
    }
}

/// Dictionary words that a round on `root_word` played in `locale` would accept
///
/// # Examples
/// ```
/// use word_scramble::analysis::possible_words;
/// use word_scramble::dictionary::StaticDictionary;
///
/// let dict = StaticDictionary::new("en", ["silk", "worms", "silkk", "ilk", "zebra"]);
/// assert_eq!(possible_words("silkworm", &dict, "en"), vec!["worms", "silk"]);
/// assert!(possible_words("silkworm", &dict, "fr").is_empty());
/// ```
#[must_use]
pub fn possible_words(
    root_word: &str,
    dictionary: &StaticDictionary,
    locale: &str,
) -> Vec<String> {
    let root_word = normalize(root_word);
    let pool = LetterPool::new(&root_word);
    let candidates: Vec<&str> = dictionary.words().collect();

    let mut words: Vec<String> = candidates
        .par_iter()
        .filter(|&&word| {
            word != root_word
                && word.chars().count() > MIN_WORD_LENGTH
                && pool.can_spell(word)
                && dictionary.is_known_word(word, locale)
        })
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        (Reverse(a.chars().count()), a.as_str()).cmp(&(Reverse(b.chars().count()), b.as_str()))
    });
    words
}

/// Best score reachable on `root_word`
#[must_use]
pub fn max_score(root_word: &str, dictionary: &StaticDictionary, locale: &str) -> u32 {
    possible_words(root_word, dictionary, locale)
        .iter()
        .map(|w| word_points(w))
        .sum()
}

/// Full analysis of one root word
#[must_use]
pub fn analyze_round(
    root_word: &str,
    dictionary: &StaticDictionary,
    locale: &str,
) -> RoundAnalysis {
    let possible_words = possible_words(root_word, dictionary, locale);
    let max_score = possible_words.iter().map(|w| word_points(w)).sum();

    RoundAnalysis {
        root_word: normalize(root_word),
        possible_words,
        max_score,
    }
}

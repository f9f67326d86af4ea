//! State of one play-through bound to a single root word

use super::LetterPool;

/// Words shorter than or equal to this are rejected
pub const MIN_WORD_LENGTH: usize = 3;

/// Words at least this long score the bonus
pub const BONUS_WORD_LENGTH: usize = 5;

/// Points earned for an accepted word
///
/// # Examples
/// ```
/// use word_scramble::core::word_points;
///
/// assert_eq!(word_points("silk"), 1);
/// assert_eq!(word_points("worms"), 2);
/// ```
#[inline]
#[must_use]
pub fn word_points(word: &str) -> u32 {
    if word.chars().count() >= BONUS_WORD_LENGTH {
        2
    } else {
        1
    }
}

/// One round: root word, accepted words (most recent first) and score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    root_word: String,
    pool: LetterPool,
    accepted_words: Vec<String>,
    score: u32,
}

impl Round {
    /// Fresh round with no accepted words
    pub(crate) fn new(root_word: String) -> Self {
        let pool = LetterPool::new(&root_word);
        Self {
            root_word,
            pool,
            accepted_words: Vec::new(),
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Letter pool of the root word
    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &LetterPool {
        &self.pool
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.accepted_words.iter().any(|w| w == word)
    }

    pub(crate) fn accept(&mut self, word: String) {
        self.score += word_points(&word);
        self.accepted_words.insert(0, word);
    }
}

//! Letter multiset for derivability checks
//!
//! A `LetterPool` counts every letter of a root word. A candidate can be
//! spelled from the root when each of its letter occurrences can be taken
//! from the pool without exceeding the available count.

use rustc_hash::FxHashMap;

/// Letter counts of a root word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
}

impl LetterPool {
    /// Build a pool from every character of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert_eq!(pool.count('k'), 1);
    /// assert_eq!(pool.count('z'), 0);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many of `letter` the pool holds
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters left in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().map(|&c| c as usize).sum()
    }

    /// True if no letters remain
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&c| c == 0)
    }

    /// Check whether `candidate` can be spelled from this pool
    ///
    /// Repeated letters must be backed by repeated letters in the pool:
    /// "silkk" cannot be spelled from "silkworm".
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("silk"));
    /// assert!(pool.can_spell("worms"));
    /// assert!(!pool.can_spell("silkk"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        self.remaining_after(candidate).is_some()
    }

    /// The pool left over after spelling `candidate`
    ///
    /// Returns `None` as soon as a letter is missing or exhausted.
    #[must_use]
    pub fn remaining_after(&self, candidate: &str) -> Option<Self> {
        let mut remaining = self.clone();
        for ch in candidate.chars() {
            let slot = remaining.counts.get_mut(&ch)?;
            if *slot == 0 {
                return None;
            }
            *slot -= 1;
        }
        Some(remaining)
    }
}

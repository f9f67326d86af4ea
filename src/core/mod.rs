//! Core domain types for the word scramble game
//!
//! Pure types with no I/O: letter pools, round state and submission outcomes.

mod letters;
mod outcome;
mod round;

pub use letters::LetterPool;
pub use outcome::ValidationOutcome;
pub use round::{BONUS_WORD_LENGTH, MIN_WORD_LENGTH, Round, word_points};

/// Lowercase and trim a raw word the way submissions are normalized
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  SiLK \n"), "silk");
        assert_eq!(normalize("\t"), "");
    }
}

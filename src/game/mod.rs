//! Word scramble game engine
//!
//! Holds the round state machine and the errors a caller can hit while
//! driving it. Rule violations are not errors; they come back as
//! [`ValidationOutcome`](crate::core::ValidationOutcome) values.

mod engine;

pub use engine::{WordGame, validate_root_word};

/// Misuse of the game or missing setup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// `submit` was called before any round was started
    #[error("no round in progress; start a round first")]
    InvalidState,
    #[error("root word must not be empty")]
    EmptyRootWord,
    #[error("root word '{0}' must contain only letters")]
    NonAlphabeticRootWord(String),
    /// The word-list provider had nothing to offer
    #[error("could not obtain a root word from the word list")]
    NoRootWord,
}

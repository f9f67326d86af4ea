//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a root word.
//! Words must be longer than three letters, differ from the root, be spellable
//! from the root's letters, and be known to the dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::ValidationOutcome;
//! use word_scramble::dictionary::StaticDictionary;
//! use word_scramble::game::WordGame;
//!
//! let mut game = WordGame::new(StaticDictionary::embedded());
//! game.start_round("silkworm").unwrap();
//!
//! assert!(game.submit("worms").unwrap().is_accepted());
//! assert_eq!(game.submit("silkk").unwrap(), ValidationOutcome::RejectedNotSubsequence);
//! assert_eq!(game.round().unwrap().score(), 2);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Spell-check capability
pub mod dictionary;

// Word lists
pub mod wordlists;

// Root word analysis
pub mod analysis;

// Resolved settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

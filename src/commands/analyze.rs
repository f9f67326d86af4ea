//! Root word analysis command
//!
//! Lists every word a round on a given root accepts and its best score.

use crate::analysis::{RoundAnalysis, analyze_round};
use crate::dictionary::StaticDictionary;
use crate::game::{GameError, validate_root_word};

/// Analyze a root word against the dictionary for rounds played in `locale`
///
/// # Errors
///
/// Returns an error if:
/// - The root word is blank
/// - The root word contains characters other than letters
pub fn analyze_root(
    root_word: &str,
    dictionary: &StaticDictionary,
    locale: &str,
) -> Result<RoundAnalysis, GameError> {
    let root_word = validate_root_word(root_word)?;
    Ok(analyze_round(&root_word, dictionary, locale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordGame;

    #[test]
    fn analyze_valid_root() {
        let dict = StaticDictionary::new("en", ["silk", "worms", "zebra"]);
        let result = analyze_root("Silkworm", &dict, "en").unwrap();

        assert_eq!(result.root_word, "silkworm");
        assert_eq!(result.possible_words, vec!["worms", "silk"]);
        assert_eq!(result.max_score, 3);
    }

    #[test]
    fn analyze_blank_root() {
        let dict = StaticDictionary::new("en", ["silk"]);
        assert_eq!(
            analyze_root("   ", &dict, "en"),
            Err(GameError::EmptyRootWord)
        );
    }

    #[test]
    fn analyze_and_play_refuse_the_same_roots() {
        let dict = StaticDictionary::new("en", ["silk"]);
        let mut game = WordGame::new(dict.clone());

        for root in ["silk worm", "silk3"] {
            let analyzed = analyze_root(root, &dict, "en").unwrap_err();
            let played = game.start_round(root).unwrap_err();
            assert_eq!(analyzed, played, "'{root}'");
        }
    }

    #[test]
    fn analyze_in_unknown_locale_finds_nothing() {
        let dict = StaticDictionary::new("en", ["silk", "worms"]);
        let result = analyze_root("silkworm", &dict, "fr").unwrap();
        assert!(result.possible_words.is_empty());
        assert_eq!(result.max_score, 0);
    }

    #[test]
    fn embedded_silkworm_has_words() {
        let dict = StaticDictionary::embedded();
        let result = analyze_root("silkworm", &dict, "en").unwrap();

        assert!(result.possible_words.contains(&"silk".to_string()));
        assert!(result.possible_words.contains(&"worms".to_string()));
        assert!(result.max_score >= 3);
    }
}

//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::SpellChecker;
use crate::game::WordGame;
use crate::output::{print_outcome, print_round};
use crate::wordlists::{RootWordSource, pick_root_word};
use std::io::{self, BufRead, Write};

/// What the player typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    Show,
    Word(String),
}

impl Command {
    /// Interpret one line of input; anything that is not a command is a word
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            ":q" | ":quit" | ":exit" => Self::Quit,
            ":n" | ":new" | ":restart" => Self::Restart,
            ":s" | ":show" => Self::Show,
            word => Self::Word(word.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no root
/// word can be drawn from the source.
pub fn run_simple<C, S>(game: &mut WordGame<C>, source: &S) -> Result<(), String>
where
    C: SpellChecker,
    S: RootWordSource + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Word Scramble - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make words out of the letters of the root word.");
    println!("Words need at least four letters; five or more score double.\n");
    println!("Commands: ':new' for a new root word, ':show' to list your words, ':quit' to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    play(game, source, || {
        print!("Word: ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        lines.next().transpose().map_err(|e| e.to_string())
    })
}

/// Drive a game from any line source until it runs dry or the player quits
///
/// # Errors
///
/// Returns an error if reading a line fails or if no root word is available.
pub fn play<C, S, R>(game: &mut WordGame<C>, source: &S, mut read_line: R) -> Result<(), String>
where
    C: SpellChecker,
    S: RootWordSource + ?Sized,
    R: FnMut() -> Result<Option<String>, String>,
{
    start(game, source)?;

    while let Some(line) = read_line()? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Restart => start(game, source)?,
            Command::Show => {
                if let Some(round) = game.round() {
                    print_round(round);
                }
            }
            Command::Word(word) => {
                let outcome = game.submit(&word).map_err(|e| e.to_string())?;
                if let Some(round) = game.round() {
                    print_outcome(&outcome, round.root_word());
                    if outcome.is_accepted() {
                        println!("  Score: {}\n", round.score());
                    }
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn start<C, S>(game: &mut WordGame<C>, source: &S) -> Result<(), String>
where
    C: SpellChecker,
    S: RootWordSource + ?Sized,
{
    let root = pick_root_word(source).map_err(|e| e.to_string())?;
    let round = game.start_round(&root).map_err(|e| e.to_string())?;
    print_round(round);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::StaticDictionary;
    use crate::wordlists::{FixedRootWord, RandomRootWords};

    fn scripted(lines: &[&str]) -> impl FnMut() -> Result<Option<String>, String> {
        let mut queue: std::collections::VecDeque<String> =
            lines.iter().map(|&s| s.to_string()).collect();
        move || Ok(queue.pop_front())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(" :new "), Command::Restart);
        assert_eq!(Command::parse(":show"), Command::Show);
        assert_eq!(Command::parse("silk"), Command::Word("silk".to_string()));
        assert_eq!(Command::parse("quit"), Command::Word("quit".to_string()));
    }

    #[test]
    fn plays_until_quit() {
        let mut game = WordGame::new(StaticDictionary::new("en", ["silk", "worms"]));
        let source = FixedRootWord("silkworm".to_string());

        play(
            &mut game,
            &source,
            scripted(&["silk", "worms", ":q", "milk"]),
        )
        .unwrap();

        let round = game.round().unwrap();
        assert_eq!(round.accepted_words(), &["worms", "silk"]);
        assert_eq!(round.score(), 3);
    }

    #[test]
    fn restart_resets_round() {
        let mut game = WordGame::new(StaticDictionary::new("en", ["silk"]));
        let source = FixedRootWord("silkworm".to_string());

        play(&mut game, &source, scripted(&["silk", ":new"])).unwrap();

        assert_eq!(game.round().unwrap().score(), 0);
    }

    #[test]
    fn empty_source_is_fatal() {
        let mut game = WordGame::new(StaticDictionary::new("en", ["silk"]));
        let source = RandomRootWords::new(Vec::new());

        let result = play(&mut game, &source, scripted(&["silk"]));
        assert!(result.is_err());
        assert!(!game.is_active());
    }
}

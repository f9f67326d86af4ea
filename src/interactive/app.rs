//! TUI application state and logic

use crate::analysis::{RoundAnalysis, analyze_round};
use crate::core::{Round, ValidationOutcome};
use crate::dictionary::StaticDictionary;
use crate::game::{GameError, WordGame};
use crate::wordlists::{RootWordSource, pick_root_word};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest word the input box accepts
const MAX_INPUT_LEN: usize = 24;

/// Application state
pub struct App<'a> {
    pub game: WordGame<StaticDictionary>,
    pub source: &'a dyn RootWordSource,
    pub analysis: Option<RoundAnalysis>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Totals across rounds in this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_found: usize,
    pub best_score: u32,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: WordGame<StaticDictionary>, source: &'a dyn RootWordSource) -> Self {
        Self {
            game,
            source,
            analysis: None,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Build words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.game.round()
    }

    /// Start a round on a fresh root word from the source
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRootWord` if the source is exhausted.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        if let Some(round) = self.game.round() {
            self.stats.best_score = self.stats.best_score.max(round.score());
        }

        let root = pick_root_word(self.source)?;
        self.game.start_round(&root)?;
        self.analysis = Some(analyze_round(
            &root,
            self.game.checker(),
            self.game.locale(),
        ));
        self.stats.rounds_played += 1;
        self.input_buffer.clear();

        self.add_message(
            &format!("New root word: {}", root.to_uppercase()),
            MessageStyle::Info,
        );
        Ok(())
    }

    /// Submit whatever is in the input box
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let outcome = match self.game.submit(&input) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let root = self
            .game
            .round()
            .map(|r| r.root_word().to_string())
            .unwrap_or_default();

        match &outcome {
            ValidationOutcome::NoOp => {}
            ValidationOutcome::Accepted(_) => {
                self.stats.words_found += 1;
                self.add_message(&outcome.message(&root), MessageStyle::Success);
            }
            rejected => {
                self.add_message(
                    &format!("{}: {}", rejected.title(), rejected.message(&root)),
                    MessageStyle::Error,
                );
                // Keep the rejected word so the player can fix it
                self.input_buffer = input;
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < MAX_INPUT_LEN && c.is_alphabetic() {
            self.input_buffer.extend(c.to_lowercase());
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<()> {
    // The first round is set up before the terminal switches modes so a
    // missing word list is reported on a normal screen
    app.new_round()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_round()?;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit_input(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{FixedRootWord, RandomRootWords};

    fn app(source: &dyn RootWordSource) -> App<'_> {
        let game = WordGame::new(StaticDictionary::new("en", ["silk", "worms", "milk"]));
        App::new(game, source)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn new_round_sets_analysis() {
        let source = FixedRootWord("silkworm".to_string());
        let mut app = app(&source);
        app.new_round().unwrap();

        assert_eq!(app.round().unwrap().root_word(), "silkworm");
        assert_eq!(app.analysis.as_ref().unwrap().max_score, 4);
        assert_eq!(app.stats.rounds_played, 1);
    }

    #[test]
    fn analysis_uses_the_game_locale() {
        let source = FixedRootWord("silkworm".to_string());
        let game = WordGame::with_locale(
            StaticDictionary::new("en", ["silk", "worms", "milk"]),
            "fr",
        );
        let mut app = App::new(game, &source);
        app.new_round().unwrap();

        let analysis = app.analysis.as_ref().unwrap();
        assert!(analysis.possible_words.is_empty());
        assert_eq!(analysis.max_score, 0);
    }

    #[test]
    fn typing_and_submitting_accepts_word() {
        let source = FixedRootWord("silkworm".to_string());
        let mut app = app(&source);
        app.new_round().unwrap();

        type_word(&mut app, "Worms");
        assert_eq!(app.input_buffer, "worms");
        app.submit_input();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.round().unwrap().score(), 2);
        assert_eq!(app.stats.words_found, 1);
    }

    #[test]
    fn rejected_word_stays_in_input() {
        let source = FixedRootWord("silkworm".to_string());
        let mut app = app(&source);
        app.new_round().unwrap();

        type_word(&mut app, "silkk");
        app.submit_input();

        assert_eq!(app.input_buffer, "silkk");
        let last = app.messages.last().unwrap();
        assert!(last.text.starts_with("Word not possible"));
        assert!(matches!(last.style, MessageStyle::Error));
    }

    #[test]
    fn non_letters_are_ignored() {
        let source = FixedRootWord("silkworm".to_string());
        let mut app = app(&source);
        type_word(&mut app, "si1 lk!");
        assert_eq!(app.input_buffer, "silk");
    }

    #[test]
    fn submit_without_round_reports_error() {
        let source = FixedRootWord("silkworm".to_string());
        let mut app = app(&source);
        type_word(&mut app, "silk");
        app.submit_input();

        assert!(matches!(
            app.messages.last().unwrap().style,
            MessageStyle::Error
        ));
    }

    #[test]
    fn restart_records_best_score() {
        let source = FixedRootWord("silkworm".to_string());
        let mut app = app(&source);
        app.new_round().unwrap();
        type_word(&mut app, "worms");
        app.submit_input();

        app.new_round().unwrap();
        assert_eq!(app.stats.best_score, 2);
        assert_eq!(app.round().unwrap().score(), 0);
        assert_eq!(app.stats.rounds_played, 2);
    }

    #[test]
    fn empty_source_cannot_start() {
        let source = RandomRootWords::new(Vec::new());
        let mut app = app(&source);
        assert!(matches!(app.new_round(), Err(GameError::NoRootWord)));
    }

    #[test]
    fn messages_are_capped() {
        let source = FixedRootWord("silkworm".to_string());
        let mut app = app(&source);
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "msg 9");
    }
}

//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: build words from the letters of a root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{analyze_root, check_words, run_simple, run_survey},
    config::{GameConfig, ListSource},
    game::WordGame,
    interactive::{App, run_tui},
    output::{print_analysis_result, print_check_report, print_survey_statistics},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make words from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORD_SCRAMBLE_WORDLIST",
        default_value = "embedded"
    )]
    wordlist: String,

    /// Dictionary: 'embedded' (default, English) or path to a newline-delimited file
    #[arg(
        short,
        long,
        global = true,
        env = "WORD_SCRAMBLE_DICTIONARY",
        default_value = "embedded"
    )]
    dictionary: String,

    /// Locale tag passed to the dictionary
    #[arg(
        short,
        long,
        global = true,
        env = "WORD_SCRAMBLE_LOCALE",
        default_value = "en"
    )]
    locale: String,

    /// Always play on this root word instead of a random one
    #[arg(short, long, global = true)]
    root: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based prompt without TUI)
    Simple,

    /// Check words against a root word and report each outcome
    Check {
        /// The root word
        #[arg(value_name = "ROOT")]
        root_word: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every word a root word allows and its best score
    Analyze {
        /// Root word to analyze
        #[arg(value_name = "ROOT")]
        root_word: String,
    },

    /// Rank all root words in the list by their best score
    Survey {
        /// Limit number of root words to analyze
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            wordlist: ListSource::from_arg(&self.wordlist),
            dictionary: ListSource::from_arg(&self.dictionary),
            locale: self.locale.clone(),
            root_word: self.root.clone(),
        }
    }
}

fn init_tracing() {
    // Logs go to stderr so they never mix with the game on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.game_config();
    tracing::debug!(?config, "resolved configuration");

    let dictionary = config
        .load_dictionary()
        .context("could not load dictionary")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let source = config
                .root_source()
                .context("could not load root word list")?;
            let game = WordGame::with_locale(dictionary, &config.locale);
            run_tui(App::new(game, &*source)).context("interactive session failed")
        }
        Commands::Simple => {
            let source = config
                .root_source()
                .context("could not load root word list")?;
            let mut game = WordGame::with_locale(dictionary, &config.locale);
            run_simple(&mut game, &*source).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { root_word, words } => {
            let mut game = WordGame::with_locale(dictionary, &config.locale);
            let report = check_words(&mut game, &root_word, &words)?;
            print_check_report(&report);
            Ok(())
        }
        Commands::Analyze { root_word } => {
            let analysis = analyze_root(&root_word, &dictionary, &config.locale)?;
            print_analysis_result(&analysis);
            Ok(())
        }
        Commands::Survey { limit } => {
            let roots = config
                .load_root_words()
                .context("could not load root word list")?;
            let stats = run_survey(&roots, &dictionary, &config.locale, limit);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

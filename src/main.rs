//! Glitch Wordle - CLI
//!
//! Play in the TUI (default) or line mode, or check a single guess.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use glitch_wordle::{
    commands::{check_guess, run_simple},
    core::Word,
    game::{Game, GameConfig, Phase, WordSet},
    interactive::{App, run_tui},
    logging,
    output::print_check_result,
    settings::Settings,
    wordlists::loader::{embedded_dictionary, load_from_file},
};
use rand::seq::IteratorRandom;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "glitch_wordle",
    about = "Guess the hidden word before the system fails",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word to guess (default: GLITCH, or the settings file)
    #[arg(short, long, global = true, conflicts_with = "random")]
    target: Option<String>,

    /// Pick the target at random from the dictionary
    #[arg(short, long, global = true)]
    random: bool,

    /// Guesses allowed before the game is lost
    #[arg(short, long, global = true)]
    max_guesses: Option<usize>,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Settings file (default: <config dir>/glitch-wordle/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode: one guess per line on stdin
    Simple,

    /// Evaluate a single guess against the target
    Check {
        /// The guess to evaluate
        guess: String,
    },
}

impl Cli {
    /// Command-line flags override the settings file
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(target) = &self.target {
            settings.target.clone_from(target);
        }
        if let Some(max_guesses) = self.max_guesses {
            settings.max_guesses = max_guesses;
        }
        if let Some(wordlist) = &self.wordlist {
            settings.wordlist = Some(wordlist.clone());
        }
    }
}

/// Load the dictionary for words of `word_len` letters
fn load_dictionary(settings: &Settings, word_len: usize) -> Result<WordSet> {
    match &settings.wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to load wordlist {}", path.display()))?;
            Ok(WordSet::new(word_len, words))
        }
        None => Ok(embedded_dictionary(word_len)),
    }
}

/// Build a fresh game from settings
fn new_game(settings: &Settings, random: bool) -> Result<Game<WordSet>> {
    let configured = Word::new(&settings.target)
        .with_context(|| format!("invalid target '{}'", settings.target))?;
    let dictionary = load_dictionary(settings, configured.len())?;

    let target = if random {
        let Some(word) = dictionary.iter().choose(&mut rand::rng()) else {
            bail!("dictionary has no {}-letter words", dictionary.word_len());
        };
        Word::new(word).context("dictionary holds an invalid word")?
    } else {
        configured
    };

    let config = GameConfig::new(target, settings.max_guesses)?;
    Game::new(config, dictionary).context("failed to start game")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut settings);
    settings.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&settings, cli.random),
        Commands::Simple => run_simple_command(&settings, cli.random),
        Commands::Check { guess } => run_check_command(&settings, cli.random, guess),
    }
}

fn run_play_command(settings: &Settings, random: bool) -> Result<()> {
    let game = new_game(settings, random)?;
    let app = App::new(game, settings.notice_duration(), settings.tick_rate());
    run_tui(app)
}

fn run_simple_command(settings: &Settings, random: bool) -> Result<()> {
    let mut game = new_game(settings, random)?;
    let phase = run_simple(&mut game)?;
    if phase == Phase::Playing {
        info!("line-mode game abandoned");
    }
    Ok(())
}

fn run_check_command(settings: &Settings, random: bool, guess: &str) -> Result<()> {
    let game = new_game(settings, random)?;
    let result = check_guess(guess, game.target(), game.dictionary())
        .with_context(|| format!("cannot check '{guess}'"))?;
    print_check_result(&result);
    Ok(())
}

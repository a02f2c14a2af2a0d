//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: build words from the letters of a root word.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::info;
use word_scramble::{
    commands::{CheckConfig, run_check, run_simple},
    core::Session,
    dictionary::{Dictionary, WordSet},
    logging,
    output::print_check_result,
    wordlists::{WordList, loader},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start-word list: newline-separated file (default: bundled list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Dictionary: newline-separated file (default: bundled English dictionary)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for choosing root words (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log verbosity: -v info, -vv debug, -vvv trace
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check answers against a fixed root word without playing
    Check {
        /// The root word to build answers from
        #[arg(short, long)]
        root: String,

        /// Answers to submit, in order
        answers: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    logging::init(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    let words = loader::load(cli.words.as_deref());
    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    info!(
        root_words = words.len(),
        dictionary_words = dictionary.len(),
        "word lists ready"
    );

    let rng = cli
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    match command {
        Commands::Play => run_play_command(&words, &dictionary, rng),
        Commands::Simple => run_simple_command(&words, &dictionary, rng),
        Commands::Check { root, answers } => {
            run_check_command(root, answers, &words, &dictionary);
            Ok(())
        }
    }
}

/// Load the dictionary from `path` if given, otherwise use the bundled one
fn load_dictionary(path: Option<&Path>) -> Result<WordSet> {
    match path {
        Some(path) => Ok(WordSet::load_from_file(path)?),
        None => Ok(WordSet::english()),
    }
}

fn run_play_command(words: &WordList, dictionary: &WordSet, mut rng: StdRng) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let dictionary: &dyn Dictionary = dictionary;
    let session = Session::new(words, dictionary, &mut rng);
    let app = App::new(session, rng);
    run_tui(app)
}

fn run_simple_command(words: &WordList, dictionary: &WordSet, mut rng: StdRng) -> Result<()> {
    let mut session = Session::new(words, dictionary, &mut rng);
    run_simple(&mut session, &mut rng)?;
    Ok(())
}

fn run_check_command(root: String, answers: Vec<String>, words: &WordList, dictionary: &WordSet) {
    let config = CheckConfig::new(root, answers);
    let result = run_check(&config, words, dictionary);
    print_check_result(&result);
}

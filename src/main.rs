//! Plurdle - CLI
//!
//! Word guessing game with TUI and CLI modes, plus tools for scoring guesses
//! and checking word lists.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use plurdle::{
    commands::{analyze_word, check_guess, run_audit, run_simple},
    dictionary::{Dictionary, loader::load_from_file},
    game::{GameConfig, GameSession, MAX_TRIES},
    output::{print_analysis_result, print_audit_report, print_check_result},
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "plurdle",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word (must match the word lists)
    #[arg(short = 'l', long, global = true, default_value_t = plurdle::core::WORD_LENGTH)]
    word_length: usize,

    /// Answer list file, one word per line (default: built-in list)
    #[arg(short, long, global = true, requires = "valid")]
    answers: Option<PathBuf>,

    /// Valid guess list file, one word per line (default: built-in list)
    #[arg(long, global = true, requires = "answers")]
    valid: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Settings that only matter while playing
#[derive(Args, Clone, Copy)]
struct RoundArgs {
    /// Guesses allowed per round
    #[arg(short = 't', long, default_value_t = MAX_TRIES)]
    max_tries: usize,
}

impl Default for RoundArgs {
    fn default() -> Self {
        Self {
            max_tries: MAX_TRIES,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play(RoundArgs),

    /// Simple CLI mode (line-based game without TUI)
    Simple(RoundArgs),

    /// Score one guess against a chosen target
    Check {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },

    /// Score a guess against every answer word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Check the answer list against the valid guess list
    Audit,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Built-in lists, or both files when `--answers` and `--valid` are given
fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    let (Some(answers_path), Some(valid_path)) = (&cli.answers, &cli.valid) else {
        return Dictionary::builtin().context("built-in word lists are unusable");
    };

    let answers = load_from_file(answers_path, cli.word_length)
        .with_context(|| format!("failed to read {}", answers_path.display()))?;
    let valid = load_from_file(valid_path, cli.word_length)
        .with_context(|| format!("failed to read {}", valid_path.display()))?;

    info!(
        answers = answers.len(),
        valid = valid.len(),
        "loaded word lists from files"
    );
    Dictionary::new(answers, valid).context("word lists are unusable")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli)?;

    // Every command scores words of the requested length
    let config = GameConfig::new(cli.word_length, MAX_TRIES);
    config.check_dictionary(&dictionary)?;

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(RoundArgs::default()));

    match command {
        Commands::Play(round) => run_play_command(
            &dictionary,
            GameConfig {
                max_tries: round.max_tries,
                ..config
            },
        ),
        Commands::Simple(round) => {
            let config = GameConfig {
                max_tries: round.max_tries,
                ..config
            };
            let mut session = GameSession::new(&dictionary, config)?;
            run_simple(&mut session)
        }
        Commands::Check { target, guess } => {
            let result = check_guess(&target, &guess, &dictionary)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Audit => {
            let report = run_audit(&dictionary);
            print_audit_report(&report);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    use plurdle::interactive::{App, run_tui};

    let session = GameSession::new(dictionary, config)?;
    let app = App::new(session)?;
    run_tui(app)
}

//! Absurdle - CLI
//!
//! Adversarial word-guessing game: the engine computes the least-informative
//! feedback for every guess and never commits to a secret word.

use absurdle::{
    commands::{analyze_guess, run_play, run_script},
    core::Word,
    output::{print_analysis_result, print_run_result},
    wordlists::{WORDS, load_from_file, prune_to_length, words_from_slice},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;

#[derive(Parser)]
#[command(
    name = "absurdle",
    about = "Adversarial word-guessing game that never commits to a secret word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file of words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length for this game
    #[arg(short = 'l', long, global = true, default_value = "5")]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Apply a fixed sequence of guesses and print each round
    Run {
        /// Guesses to play, in order
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Show candidate counts per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess would partition the dictionary
    Analyze {
        /// Guess to analyze
        word: String,
    },
}

/// Load the word list named by the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let candidates: BTreeSet<Word> = prune_to_length(&words, cli.length)?;

    anyhow::ensure!(
        !candidates.is_empty(),
        "No words of length {} in the dictionary",
        cli.length
    );

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(candidates).map_err(|e| anyhow::anyhow!(e)),
        Commands::Run { guesses, verbose } => {
            let result = run_script(&guesses, candidates).map_err(|e| anyhow::anyhow!(e))?;
            print_run_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_guess(&word, &candidates).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

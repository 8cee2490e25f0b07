//! Interactive game mode
//!
//! Console loop for playing against the adversarial engine: the player types
//! guesses, the engine replies with the least-informative pattern each round.

use crate::core::{Pattern, Word};
use crate::engine::{Game, GameError};
use crate::output::formatters::pattern_to_emoji;
use colored::Colorize;
use std::collections::BTreeSet;
use std::io::{self, Write};

/// What a line of player input means
///
/// Command tokens only count as commands when their length differs from the
/// game's word length: `new` is a restart in a 5-letter game but a guess in a
/// 3-letter one. Anything of the game's word length is always a guess, so no
/// dictionary word is ever unplayable.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayerInput {
    Quit,
    New,
    Guess(String),
}

fn classify_input(input: &str, word_length: usize) -> PlayerInput {
    let lowered = input.to_lowercase();

    if lowered.len() != word_length {
        match lowered.as_str() {
            "quit" | "q" | "exit" => return PlayerInput::Quit,
            "new" | "n" => return PlayerInput::New,
            _ => {}
        }
    }

    PlayerInput::Guess(lowered)
}

/// Run the interactive game loop
///
/// The pattern history is accumulated here, one entry per round, and printed
/// as the game summary once the engine is forced into the solved state.
///
/// # Errors
///
/// Returns an error if the candidate set is empty or on an I/O failure
/// reading user input.
pub fn run_play(candidates: BTreeSet<Word>) -> Result<(), String> {
    let fresh = candidates.clone();
    let mut game = Game::new(candidates).map_err(|e| e.to_string())?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Welcome to Absurdle                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I never pick a secret word. Every guess, I keep whichever answer");
    println!("pool lets me tell you the least. Corner me if you can.\n");
    println!(
        "Word length: {}  |  Starting candidates: {}",
        game.word_length(),
        game.candidates_remaining()
    );
    println!("Commands: 'quit' to exit, 'new' to restart\n");

    let mut history: Vec<Pattern> = Vec::new();

    loop {
        let input = get_user_input(">")?;

        let guess_text = match classify_input(&input, game.word_length()) {
            PlayerInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            PlayerInput::New => {
                game = Game::new(fresh.clone()).map_err(|e| e.to_string())?;
                history.clear();
                println!("\n🔄 New game started!\n");
                continue;
            }
            PlayerInput::Guess(text) => text,
        };

        let guess = match Word::new(&guess_text) {
            Ok(word) => word,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        let pattern = match game.record_guess(&guess) {
            Ok(pattern) => pattern,
            Err(e @ GameError::LengthMismatch { .. }) => {
                println!("❌ {e}\n");
                continue;
            }
            Err(e) => return Err(e.to_string()),
        };

        history.push(pattern.clone());
        println!(": {}\n", pattern_to_emoji(&pattern));

        if game.is_solved() {
            print_summary(&guess_text, &history);
            return Ok(());
        }
    }
}

/// Print the end-of-game banner and the full pattern history
fn print_summary(winning_guess: &str, history: &[Pattern]) {
    println!("{}", "═".repeat(64).bright_cyan());
    println!(
        "{}",
        format!("  You cornered me, {} it is.", winning_guess.to_uppercase())
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(64).bright_cyan());

    println!(
        "\n{}",
        format!("Absurdle {}/∞", history.len()).bright_white().bold()
    );
    println!();
    for pattern in history {
        println!("{}", pattern_to_emoji(pattern));
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt} ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tokens_of_other_lengths_are_commands() {
        assert_eq!(classify_input("quit", 5), PlayerInput::Quit);
        assert_eq!(classify_input("exit", 5), PlayerInput::Quit);
        assert_eq!(classify_input("q", 5), PlayerInput::Quit);
        assert_eq!(classify_input("new", 5), PlayerInput::New);
        assert_eq!(classify_input("n", 5), PlayerInput::New);
    }

    #[test]
    fn word_length_tokens_are_always_guesses() {
        // Dictionary words that double as command tokens must stay guessable
        assert_eq!(
            classify_input("new", 3),
            PlayerInput::Guess("new".to_string())
        );
        assert_eq!(
            classify_input("quit", 4),
            PlayerInput::Guess("quit".to_string())
        );
        assert_eq!(
            classify_input("exit", 4),
            PlayerInput::Guess("exit".to_string())
        );
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(classify_input("QUIT", 5), PlayerInput::Quit);
        assert_eq!(
            classify_input("NEW", 3),
            PlayerInput::Guess("new".to_string())
        );
    }

    #[test]
    fn ordinary_guesses_pass_through() {
        assert_eq!(
            classify_input("crane", 5),
            PlayerInput::Guess("crane".to_string())
        );
    }

    #[test]
    fn command_shaped_word_can_win_the_game() {
        // In a 3-letter game narrowed down to NEW, typing "new" must record
        // the guess and solve the game rather than restart it.
        let candidates: BTreeSet<Word> =
            [Word::new("new").unwrap()].into_iter().collect();
        let mut game = Game::new(candidates).unwrap();

        let PlayerInput::Guess(text) = classify_input("new", game.word_length()) else {
            panic!("word-length token must classify as a guess");
        };

        let pattern = game.record_guess(&Word::new(text).unwrap()).unwrap();
        assert!(pattern.is_solved());
        assert!(game.is_solved());
    }
}

//! Scripted playthrough command
//!
//! Applies a fixed sequence of guesses to a fresh game and records each round.

use crate::core::{Pattern, Word};
use crate::engine::Game;
use std::collections::BTreeSet;

/// Result of a scripted playthrough
pub struct RunResult {
    pub solved: bool,
    pub rounds: Vec<RoundStep>,
}

/// A single round in the playthrough
pub struct RoundStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play the given guesses in order against the candidate set
///
/// Rounds stop early once a guess produces the all-Exact pattern; remaining
/// scripted guesses are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The candidate set is empty
/// - A guess is not a valid word or has the wrong length
pub fn run_script(guesses: &[String], candidates: BTreeSet<Word>) -> Result<RunResult, String> {
    let mut game = Game::new(candidates).map_err(|e| e.to_string())?;
    let mut rounds = Vec::with_capacity(guesses.len());

    for guess_text in guesses {
        let guess = Word::new(guess_text).map_err(|e| format!("Invalid guess: {e}"))?;

        let candidates_before = game.candidates_remaining();
        let pattern = game.record_guess(&guess).map_err(|e| e.to_string())?;
        let candidates_after = game.candidates_remaining();

        rounds.push(RoundStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
        });

        if game.is_solved() {
            break;
        }
    }

    Ok(RunResult {
        solved: game.is_solved(),
        rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(words: &[&str]) -> BTreeSet<Word> {
        words.iter().map(|&s| Word::new(s).unwrap()).collect()
    }

    fn guesses(words: &[&str]) -> Vec<String> {
        words.iter().map(|&s| s.to_string()).collect()
    }

    #[test]
    fn run_script_records_every_round() {
        let result = run_script(
            &guesses(&["abide", "abate"]),
            candidates(&["abate", "abide", "abode"]),
        )
        .unwrap();

        assert!(result.solved);
        assert_eq!(result.rounds.len(), 2);
        assert_eq!(result.rounds[0].candidates_before, 3);
        assert_eq!(result.rounds[0].candidates_after, 1);
        assert!(!result.rounds[0].pattern.is_solved());
        assert!(result.rounds[1].pattern.is_solved());
    }

    #[test]
    fn run_script_candidates_never_increase() {
        let result = run_script(
            &guesses(&["crane", "slate", "irate"]),
            candidates(&["crane", "slate", "irate", "crate", "grate", "trace"]),
        )
        .unwrap();

        for step in &result.rounds {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn run_script_stops_after_solving() {
        // The trailing guess after the winning one is never played
        let result = run_script(
            &guesses(&["abide", "abate", "abode"]),
            candidates(&["abate", "abide", "abode"]),
        )
        .unwrap();

        assert!(result.solved);
        assert_eq!(result.rounds.len(), 2);
    }

    #[test]
    fn run_script_unsolved_when_guesses_run_out() {
        let result = run_script(
            &guesses(&["crane"]),
            candidates(&["slate", "irate", "crate", "grate"]),
        )
        .unwrap();

        assert!(!result.solved);
        assert_eq!(result.rounds.len(), 1);
    }

    #[test]
    fn run_script_empty_dictionary_errors() {
        let result = run_script(&guesses(&["crane"]), BTreeSet::new());
        assert!(result.is_err());
    }

    #[test]
    fn run_script_wrong_length_guess_errors() {
        let result = run_script(&guesses(&["cat"]), candidates(&["crane", "slate"]));
        assert!(result.is_err());
    }
}

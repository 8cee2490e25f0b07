//! Adversarial narrowing
//!
//! The engine never commits to a secret word. Each guess partitions the live
//! candidate set by pattern; the largest group becomes the new candidate set
//! and its pattern is the round's feedback. Keeping the biggest group is the
//! whole point: it is the reply that tells the guesser the least.

use super::partition::{group_by_pattern, largest_group};
use crate::core::{Pattern, Word};
use std::collections::BTreeSet;
use std::fmt;

/// Error type for invalid narrowing arguments
///
/// Both variants are caller errors. The candidate set is never modified on
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The candidate set is empty
    NoCandidates,
    /// The guess length differs from the game's word length
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "No candidate words remain"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "Guess must be {expected} letters, got {found}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Result of one narrowing step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrowed {
    /// The chosen feedback pattern (the least-informative reply)
    pub pattern: Pattern,
    /// The candidates consistent with that pattern
    pub survivors: BTreeSet<Word>,
}

/// Narrow a candidate set against a guess
///
/// Partitions `candidates` by pattern, picks the largest group (ties break
/// toward the smallest pattern), and returns that group's pattern together
/// with its members. The input set is untouched; the caller rebinds.
///
/// # Errors
/// - `GameError::NoCandidates` if `candidates` is empty
/// - `GameError::LengthMismatch` if the guess length differs from the
///   candidates' word length
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::engine::narrow;
/// use std::collections::BTreeSet;
///
/// let candidates: BTreeSet<Word> = ["abate", "abide", "abode"]
///     .iter()
///     .map(|&s| Word::new(s).unwrap())
///     .collect();
///
/// let guess = Word::new("abide").unwrap();
/// let narrowed = narrow(&guess, &candidates).unwrap();
///
/// // The all-Exact reply is discarded along with ABIDE itself
/// assert!(!narrowed.pattern.is_solved());
/// ```
pub fn narrow(guess: &Word, candidates: &BTreeSet<Word>) -> Result<Narrowed, GameError> {
    let Some(first) = candidates.first() else {
        return Err(GameError::NoCandidates);
    };

    if guess.len() != first.len() {
        return Err(GameError::LengthMismatch {
            expected: first.len(),
            found: guess.len(),
        });
    }

    let groups = group_by_pattern(guess, candidates);
    let (pattern, survivors) = largest_group(&groups)
        .map(|(p, members)| (p.clone(), members.clone()))
        .ok_or(GameError::NoCandidates)?;

    Ok(Narrowed { pattern, survivors })
}

/// Whether the game is still accepting meaningful guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The candidate set has not yet collapsed onto the guessed word
    InProgress,
    /// A returned pattern was all-Exact; the game is over
    Solved,
}

/// One adversarial game
///
/// Owns the candidate set across rounds: each recorded guess replaces the set
/// with the survivors of the narrowing step. The caller keeps the pattern
/// history.
#[derive(Debug, Clone)]
pub struct Game {
    candidates: BTreeSet<Word>,
    word_length: usize,
    state: GameState,
}

impl Game {
    /// Start a game over the given candidate words
    ///
    /// All candidates share one length (length pruning guarantees this);
    /// that length becomes the game's word length.
    ///
    /// # Errors
    /// Returns `GameError::NoCandidates` if the set is empty; an empty
    /// dictionary never produces a playable game.
    pub fn new(candidates: BTreeSet<Word>) -> Result<Self, GameError> {
        let Some(first) = candidates.first() else {
            return Err(GameError::NoCandidates);
        };
        let word_length = first.len();

        Ok(Self {
            candidates,
            word_length,
            state: GameState::InProgress,
        })
    }

    /// Record a guess: narrow the candidate set and return the round's pattern
    ///
    /// On success the owned candidate set is replaced with the winning
    /// group's members. An all-Exact pattern flips the game to `Solved`;
    /// recording the same guess again on the now-singleton set returns the
    /// identical pattern.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` for a wrong-length guess; the
    /// candidate set is unmodified on failure.
    pub fn record_guess(&mut self, guess: &Word) -> Result<Pattern, GameError> {
        if guess.len() != self.word_length {
            return Err(GameError::LengthMismatch {
                expected: self.word_length,
                found: guess.len(),
            });
        }

        let narrowed = narrow(guess, &self.candidates)?;
        self.candidates = narrowed.survivors;

        if narrowed.pattern.is_solved() {
            self.state = GameState::Solved;
        }

        Ok(narrowed.pattern)
    }

    /// Current game state
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// True once a recorded guess produced an all-Exact pattern
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == GameState::Solved
    }

    /// The words still consistent with every pattern returned so far
    #[must_use]
    pub const fn candidates(&self) -> &BTreeSet<Word> {
        &self.candidates
    }

    /// Number of surviving candidates
    #[must_use]
    pub fn candidates_remaining(&self) -> usize {
        self.candidates.len()
    }

    /// The fixed word length for this game
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}

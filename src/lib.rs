//! Absurdle
//!
//! An adversarial word-guessing engine. Unlike a cooperative puzzle with a
//! fixed secret word, this engine keeps the space of possible answers open as
//! long as it can: every guess, it replies with the feedback pattern
//! consistent with the *most* remaining candidates, and discards the rest.
//! It commits to a pattern, never to a word, until the candidate set
//! collapses to a single outcome.
//!
//! # Quick Start
//!
//! ```rust
//! use absurdle::core::Word;
//! use absurdle::engine::Game;
//! use std::collections::BTreeSet;
//!
//! let candidates: BTreeSet<Word> = ["abate", "abide", "abode"]
//!     .iter()
//!     .map(|&s| Word::new(s).unwrap())
//!     .collect();
//!
//! let mut game = Game::new(candidates).unwrap();
//! let pattern = game.record_guess(&Word::new("abide").unwrap()).unwrap();
//!
//! // The engine refuses the winning pattern while it can
//! assert!(!pattern.is_solved());
//! ```

// Core domain types
pub mod core;

// Adversarial narrowing engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

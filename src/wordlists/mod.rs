//! Word lists
//!
//! Provides the embedded default dictionary plus file loading and length
//! pruning. The dictionary mixes word lengths; games prune to one length.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{PruneError, load_from_file, prune_to_length, words_from_slice};

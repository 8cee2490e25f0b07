//! Adversarial game engine
//!
//! Partitioning of candidate sets by feedback pattern, and the narrowing step
//! that always adopts the largest group as the round's "truth".

mod narrower;
mod partition;

pub use narrower::{Game, GameError, GameState, Narrowed, narrow};
pub use partition::{PatternGroups, group_by_pattern, largest_group};

//! Guess analysis command
//!
//! Shows how a guess would partition the current candidate set, and which
//! pattern the adversary would adopt.

use crate::core::{Pattern, Word};
use crate::engine::{group_by_pattern, largest_group};
use std::collections::BTreeSet;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub word: String,
    pub total_candidates: usize,
    /// Group sizes in ascending pattern order
    pub groups: Vec<(Pattern, usize)>,
    /// The pattern the adversary would reply with
    pub winner: Pattern,
    pub winner_size: usize,
}

/// Analyze the partition a guess induces on a candidate set
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not a valid word or has the wrong length
/// - The candidate set is empty
pub fn analyze_guess(word: &str, candidates: &BTreeSet<Word>) -> Result<AnalysisResult, String> {
    let guess = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    let Some(first) = candidates.first() else {
        return Err("No candidate words remain".to_string());
    };
    if guess.len() != first.len() {
        return Err(format!(
            "Guess must be {} letters, got {}",
            first.len(),
            guess.len()
        ));
    }

    let groups = group_by_pattern(&guess, candidates);
    let (winner, members) =
        largest_group(&groups).ok_or_else(|| "No candidate words remain".to_string())?;

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        total_candidates: candidates.len(),
        winner: winner.clone(),
        winner_size: members.len(),
        groups: groups
            .iter()
            .map(|(p, members)| (p.clone(), members.len()))
            .collect(),
    })
}

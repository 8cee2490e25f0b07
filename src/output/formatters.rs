//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern};

/// Format a pattern as emoji string
///
/// Green = exact, yellow = present, white = absent, the conventional
/// share-your-result glyphs.
#[must_use]
pub fn pattern_to_emoji(pattern: &Pattern) -> String {
    let mut result = String::with_capacity(pattern.len() * 4);

    for &symbol in pattern.symbols() {
        result.push(match symbol {
            Feedback::Absent => '⬜',
            Feedback::Present => '🟨',
            Feedback::Exact => '🟩',
        });
    }

    result
}

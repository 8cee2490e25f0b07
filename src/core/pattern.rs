//! Feedback pattern calculation and representation
//!
//! A pattern is one feedback symbol per guess position:
//! - `Absent` (gray): letter not available in the candidate
//! - `Present` (yellow): letter in the candidate, wrong position
//! - `Exact` (green): letter in the correct position
//!
//! Patterns are totally ordered: symbols compare as
//! `Absent < Present < Exact`, and pattern sequences compare
//! lexicographically. That order is what makes tie-breaking between
//! equal-sized pattern groups deterministic.

use super::Word;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// Letter not available in the candidate word
    Absent,
    /// Letter appears elsewhere in the candidate word
    Present,
    /// Letter in the correct position
    Exact,
}

impl Feedback {
    /// Single-letter display form: `-`, `Y`, or `G`
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'Y',
            Self::Exact => 'G',
        }
    }
}

/// Feedback pattern for a guess against a candidate word
///
/// Length always equals the guess length. Equal-length patterns compare
/// lexicographically by symbol.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Vec<Feedback>);

impl Pattern {
    /// The all-Exact pattern of the given length
    #[must_use]
    pub fn solved(len: usize) -> Self {
        Self(vec![Feedback::Exact; len])
    }

    /// Number of positions in the pattern
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for the zero-length pattern, which no game produces
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The per-position feedback symbols
    #[must_use]
    pub fn symbols(&self) -> &[Feedback] {
        &self.0
    }

    /// Check whether this pattern ends the game (every position Exact)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&f| f == Feedback::Exact)
    }

    /// Calculate the pattern when `guess` is scored against `candidate`
    ///
    /// Implements the standard duplicate-letter-aware scoring rule: exact
    /// matches consume a letter's budget before present-elsewhere matches
    /// are considered, so the total Exact+Present markers for a letter never
    /// exceed its occurrence count in the candidate.
    ///
    /// Both passes run in position order. The guess and candidate must have
    /// the same length; a mismatch is a bug in the caller.
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let candidate = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &candidate);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(pattern.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, candidate: &Word) -> Self {
        debug_assert_eq!(
            guess.len(),
            candidate.len(),
            "guess and candidate must have equal length"
        );

        let mut result = vec![Feedback::Absent; guess.len()];
        let mut available = candidate.char_counts();

        // First pass: exact matches consume the letter budget
        for (i, (&g, &c)) in guess.bytes().iter().zip(candidate.bytes()).enumerate() {
            if g == c {
                result[i] = Feedback::Exact;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-elsewhere from whatever budget remains
        for (i, &g) in guess.bytes().iter().enumerate() {
            if result[i] == Feedback::Absent
                && let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of Exact positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Exact).count()
    }

    /// Count the number of Present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Present).count()
    }
}

impl std::fmt::Display for Pattern {
    /// Renders one letter per position: `G` exact, `Y` present, `-` absent
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &symbol in &self.0 {
            write!(f, "{}", symbol.letter())?;
        }
        Ok(())
    }
}

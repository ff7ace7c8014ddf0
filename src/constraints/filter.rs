//! Candidate filtering
//!
//! A full scan of the word list against the current constraints. Nothing is
//! cached between calls.

use super::ConstraintTracker;

/// Narrows a word list to the words consistent with a tracker's constraints
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'a> {
    constraints: &'a ConstraintTracker,
}

impl<'a> CandidateFilter<'a> {
    #[must_use]
    pub const fn new(constraints: &'a ConstraintTracker) -> Self {
        Self { constraints }
    }

    /// Words still consistent with every constraint, in input order
    ///
    /// # Examples
    /// ```
    /// use wordle_bench::constraints::{CandidateFilter, ConstraintTracker};
    /// use wordle_bench::core::{FeedbackRules, Word, compare};
    ///
    /// let rules = FeedbackRules::Positional;
    /// let mut tracker = ConstraintTracker::new(rules);
    /// tracker.apply(&compare(&Word::new("cause"), &Word::new("coals"), rules));
    ///
    /// let words = ["coals", "cause", "clasp", "chaos"].map(String::from);
    /// assert_eq!(CandidateFilter::new(&tracker).candidates(&words), ["coals", "chaos"]);
    /// ```
    #[must_use]
    pub fn candidates<'w, S: AsRef<str>>(&self, words: &'w [S]) -> Vec<&'w str> {
        words
            .iter()
            .map(AsRef::as_ref)
            .filter(|word| self.allows(word))
            .collect()
    }

    /// Check a single word against the constraints
    #[must_use]
    pub fn allows(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        let tracker = self.constraints;

        let blacks = tracker.blacks();
        if letters.iter().any(|letter| blacks.contains(letter)) {
            return false;
        }

        let greens_hold = tracker
            .greens()
            .iter()
            .all(|&(letter, position)| letters.get(position) == Some(&letter));
        if !greens_hold {
            return false;
        }

        let yellows_hold = tracker.yellows().iter().all(|&(letter, position)| {
            letters.contains(&letter) && letters.get(position) != Some(&letter)
        });
        if !yellows_hold {
            return false;
        }

        let exclusions_hold = tracker
            .excluded()
            .iter()
            .all(|&(letter, position)| letters.get(position) != Some(&letter));
        if !exclusions_hold {
            return false;
        }

        let count = |letter: char| letters.iter().filter(|&&c| c == letter).count();
        let min_hold = tracker
            .min_counts()
            .iter()
            .all(|(&letter, &min)| count(letter) >= min);
        let max_hold = tracker
            .max_counts()
            .iter()
            .all(|(&letter, &max)| count(letter) <= max);
        min_hold && max_hold
    }
}

impl ConstraintTracker {
    /// Filter view over these constraints
    #[must_use]
    pub const fn filter(&self) -> CandidateFilter<'_> {
        CandidateFilter::new(self)
    }
}

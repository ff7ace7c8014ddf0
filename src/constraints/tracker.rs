//! Constraint accumulation from feedback

use crate::core::{Feedback, FeedbackRules, LetterState};
use rustc_hash::{FxHashMap, FxHashSet};

/// Constraints learned so far in a game
///
/// Sets only ever grow: nothing is removed once learned.
///
/// Under [`FeedbackRules::Standard`] a black mark on a letter that is also
/// green or yellow elsewhere in the same guess only caps that letter's count,
/// so it is recorded as a count bound and a per-position exclusion rather than
/// a global black. Those extra sets stay empty under positional rules.
#[derive(Debug, Clone, Default)]
pub struct ConstraintTracker {
    rules: FeedbackRules,
    greens: FxHashSet<(char, usize)>,
    yellows: FxHashSet<(char, usize)>,
    blacks: FxHashSet<char>,
    excluded: FxHashSet<(char, usize)>,
    min_counts: FxHashMap<char, usize>,
    max_counts: FxHashMap<char, usize>,
}

impl ConstraintTracker {
    #[must_use]
    pub fn new(rules: FeedbackRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn rules(&self) -> FeedbackRules {
        self.rules
    }

    /// Fold one feedback sequence into the constraint sets
    pub fn apply(&mut self, feedback: &Feedback) {
        for (position, mark) in feedback.iter().enumerate() {
            match mark.state {
                LetterState::Green => {
                    self.greens.insert((mark.letter, position));
                }
                LetterState::Yellow => {
                    self.yellows.insert((mark.letter, position));
                }
                LetterState::Black => {
                    let marked = feedback.marked_count(mark.letter) > 0;
                    if self.rules == FeedbackRules::Standard && marked {
                        self.excluded.insert((mark.letter, position));
                    } else {
                        self.blacks.insert(mark.letter);
                    }
                }
            }
        }

        if self.rules == FeedbackRules::Standard {
            self.apply_counts(feedback);
        }
    }

    fn apply_counts(&mut self, feedback: &Feedback) {
        for mark in feedback {
            let marked = feedback.marked_count(mark.letter);
            if marked == 0 {
                continue;
            }

            let min = self.min_counts.entry(mark.letter).or_insert(0);
            *min = (*min).max(marked);

            // A black next to marks means the target holds exactly `marked`
            if mark.state == LetterState::Black {
                let max = self.max_counts.entry(mark.letter).or_insert(marked);
                *max = (*max).min(marked);
            }
        }
    }

    /// Confirmed (letter, position) pairs
    #[must_use]
    pub const fn greens(&self) -> &FxHashSet<(char, usize)> {
        &self.greens
    }

    /// Letters present but not at the recorded position
    #[must_use]
    pub const fn yellows(&self) -> &FxHashSet<(char, usize)> {
        &self.yellows
    }

    /// Letters known to be absent
    #[must_use]
    pub const fn blacks(&self) -> &FxHashSet<char> {
        &self.blacks
    }

    /// Letters known not to be at a position (standard rules only)
    #[must_use]
    pub const fn excluded(&self) -> &FxHashSet<(char, usize)> {
        &self.excluded
    }

    /// Lower bound on occurrences of a letter (standard rules only)
    #[must_use]
    pub fn min_count(&self, letter: char) -> Option<usize> {
        self.min_counts.get(&letter).copied()
    }

    /// Upper bound on occurrences of a letter (standard rules only)
    #[must_use]
    pub fn max_count(&self, letter: char) -> Option<usize> {
        self.max_counts.get(&letter).copied()
    }

    pub(crate) const fn min_counts(&self) -> &FxHashMap<char, usize> {
        &self.min_counts
    }

    pub(crate) const fn max_counts(&self) -> &FxHashMap<char, usize> {
        &self.max_counts
    }

    /// True before any feedback has been applied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.greens.is_empty()
            && self.yellows.is_empty()
            && self.blacks.is_empty()
            && self.excluded.is_empty()
    }
}

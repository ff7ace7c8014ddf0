//! Per-letter feedback and the comparator
//!
//! Comparing a guess against a target yields one `MatchState` per guess
//! position, in order:
//! - Green: the letter is at this exact position in the target
//! - Yellow: the letter occurs in the target, at another position
//! - Black: the letter is absent (or, under standard rules, its budget is spent)

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Outcome for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Green,
    Yellow,
    Black,
}

impl LetterState {
    /// Emoji square used in terminal output
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Black => '⬛',
        }
    }
}

/// A guessed letter paired with its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchState {
    pub letter: char,
    pub state: LetterState,
}

impl MatchState {
    #[must_use]
    pub const fn new(letter: char, state: LetterState) -> Self {
        Self { letter, state }
    }
}

impl From<(char, LetterState)> for MatchState {
    fn from((letter, state): (char, LetterState)) -> Self {
        Self::new(letter, state)
    }
}

/// Ordered feedback for one guess, one entry per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<MatchState>);

impl Feedback {
    #[must_use]
    pub const fn new(states: Vec<MatchState>) -> Self {
        Self(states)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[MatchState] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchState> {
        self.0.iter()
    }

    /// The guessed word this feedback was produced for
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|m| m.letter).collect()
    }

    /// True when every position is green
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|m| m.state == LetterState::Green)
    }

    /// Count positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|m| m.state == state).count()
    }

    /// Number of green or yellow marks received by `letter`
    #[must_use]
    pub fn marked_count(&self, letter: char) -> usize {
        self.0
            .iter()
            .filter(|m| m.letter == letter && m.state != LetterState::Black)
            .count()
    }

    /// Render as a row of emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.state.symbol()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a MatchState;
    type IntoIter = std::slice::Iter<'a, MatchState>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// How repeated letters are marked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FeedbackRules {
    /// Each position is judged on its own: a letter present anywhere in the
    /// target is yellow wherever it is not green, however often it repeats.
    #[default]
    Positional,
    /// Letter budget as in the real game: greens consume target letters first,
    /// then yellows are handed out left to right until the budget runs out.
    Standard,
}

impl FeedbackRules {
    /// Parse a rules name: "positional" or "standard"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "positional" | "classic" => Some(Self::Positional),
            "standard" | "budgeted" => Some(Self::Standard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Standard => "standard",
        }
    }
}

/// Compare `guess` against `target`
///
/// Both words must have the same length; callers validate first.
///
/// # Examples
/// ```
/// use wordle_bench::core::{FeedbackRules, LetterState, MatchState, Word, compare};
///
/// let feedback = compare(&Word::new("cause"), &Word::new("coals"), FeedbackRules::Positional);
/// assert_eq!(
///     feedback.as_slice(),
///     &[
///         MatchState::new('c', LetterState::Green),
///         MatchState::new('a', LetterState::Yellow),
///         MatchState::new('u', LetterState::Black),
///         MatchState::new('s', LetterState::Yellow),
///         MatchState::new('e', LetterState::Black),
///     ]
/// );
/// ```
#[must_use]
pub fn compare(guess: &Word, target: &Word, rules: FeedbackRules) -> Feedback {
    debug_assert_eq!(
        guess.len(),
        target.len(),
        "guess and target must have equal length"
    );

    match rules {
        FeedbackRules::Positional => compare_positional(guess, target),
        FeedbackRules::Standard => compare_standard(guess, target),
    }
}

fn compare_positional(guess: &Word, target: &Word) -> Feedback {
    let states = guess
        .iter()
        .zip(target.iter())
        .map(|(letter, expected)| {
            let state = if letter == expected {
                LetterState::Green
            } else if target.contains(letter) {
                LetterState::Yellow
            } else {
                LetterState::Black
            };
            MatchState::new(letter, state)
        })
        .collect();

    Feedback(states)
}

fn compare_standard(guess: &Word, target: &Word) -> Feedback {
    let mut states: Vec<MatchState> = guess
        .iter()
        .map(|letter| MatchState::new(letter, LetterState::Black))
        .collect();

    // First pass: greens, and the budget of target letters they leave over
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for (slot, expected) in states.iter_mut().zip(target.iter()) {
        if slot.letter == expected {
            slot.state = LetterState::Green;
        } else {
            *available.entry(expected).or_insert(0) += 1;
        }
    }

    // Second pass: yellows from the remaining budget, left to right
    for slot in states.iter_mut().take(target.len()) {
        if slot.state == LetterState::Green {
            continue;
        }
        if let Some(count) = available.get_mut(&slot.letter)
            && *count > 0
        {
            slot.state = LetterState::Yellow;
            *count -= 1;
        }
    }

    states.truncate(target.len());
    Feedback(states)
}

#[cfg(test)]
mod tests {
    use super::LetterState::{Black, Green, Yellow};
    use super::*;

    fn states(feedback: &Feedback) -> Vec<LetterState> {
        feedback.iter().map(|m| m.state).collect()
    }

    fn both_rules() -> [FeedbackRules; 2] {
        [FeedbackRules::Positional, FeedbackRules::Standard]
    }

    #[test]
    fn compare_known_case() {
        let feedback = compare(
            &Word::new("cause"),
            &Word::new("coals"),
            FeedbackRules::Positional,
        );
        let expected: Vec<MatchState> = vec![
            ('c', Green).into(),
            ('a', Yellow).into(),
            ('u', Black).into(),
            ('s', Yellow).into(),
            ('e', Black).into(),
        ];
        assert_eq!(feedback.as_slice(), expected.as_slice());
    }

    #[test]
    fn compare_length_matches_target() {
        for rules in both_rules() {
            for (guess, target) in [("cause", "coals"), ("ab", "ba"), ("speeds", "erased")] {
                let feedback = compare(&Word::new(guess), &Word::new(target), rules);
                assert_eq!(feedback.len(), target.chars().count());
            }
        }
    }

    #[test]
    fn compare_self_is_all_green() {
        for rules in both_rules() {
            for text in ["crane", "speed", "aaaaa", "zz", "bookkeeper"] {
                let word = Word::new(text);
                let feedback = compare(&word, &word, rules);
                assert!(feedback.is_win(), "{text} against itself");
                assert_eq!(feedback.count(Green), word.len());
            }
        }
    }

    #[test]
    fn compare_disjoint_is_all_black() {
        for rules in both_rules() {
            let feedback = compare(&Word::new("abcde"), &Word::new("fghij"), rules);
            assert_eq!(feedback.count(Black), 5);
            assert!(!feedback.is_win());
        }
    }

    #[test]
    fn positional_rules_over_report_repeated_letters() {
        // Second O is yellow although COALS has a single O, already green
        let feedback = compare(
            &Word::new("pools"),
            &Word::new("coals"),
            FeedbackRules::Positional,
        );
        assert_eq!(states(&feedback), vec![Black, Green, Yellow, Green, Green]);
    }

    #[test]
    fn standard_rules_budget_repeated_letters() {
        let feedback = compare(
            &Word::new("pools"),
            &Word::new("coals"),
            FeedbackRules::Standard,
        );
        assert_eq!(states(&feedback), vec![Black, Green, Black, Green, Green]);
    }

    #[test]
    fn standard_rules_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let feedback = compare(
            &Word::new("robot"),
            &Word::new("floor"),
            FeedbackRules::Standard,
        );
        assert_eq!(states(&feedback), vec![Yellow, Yellow, Black, Green, Black]);
    }

    #[test]
    fn standard_rules_yellows_left_to_right() {
        // THERE has two E's; the final one is green, leaving one for the first E
        let feedback = compare(
            &Word::new("eerie"),
            &Word::new("there"),
            FeedbackRules::Standard,
        );
        assert_eq!(states(&feedback), vec![Yellow, Black, Yellow, Black, Green]);

        let positional = compare(
            &Word::new("eerie"),
            &Word::new("there"),
            FeedbackRules::Positional,
        );
        assert_eq!(
            states(&positional),
            vec![Yellow, Yellow, Yellow, Black, Green]
        );
    }

    #[test]
    fn rules_agree_without_repeated_letters() {
        for (guess, target) in [("crane", "slate"), ("cause", "coals"), ("brick", "trick")] {
            let guess = Word::new(guess);
            let target = Word::new(target);
            assert_eq!(
                compare(&guess, &target, FeedbackRules::Positional),
                compare(&guess, &target, FeedbackRules::Standard)
            );
        }
    }

    #[test]
    fn feedback_word_and_emoji() {
        let feedback = compare(
            &Word::new("cause"),
            &Word::new("coals"),
            FeedbackRules::Positional,
        );
        assert_eq!(feedback.word(), "cause");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬛🟨⬛");
        assert_eq!(feedback.to_string(), feedback.to_emoji());
    }

    #[test]
    fn feedback_marked_count() {
        let feedback = compare(
            &Word::new("pools"),
            &Word::new("coals"),
            FeedbackRules::Standard,
        );
        assert_eq!(feedback.marked_count('o'), 1);
        assert_eq!(feedback.marked_count('p'), 0);
    }

    #[test]
    fn empty_feedback_is_not_a_win() {
        assert!(!Feedback::new(Vec::new()).is_win());
    }

    #[test]
    fn rules_from_name() {
        assert_eq!(
            FeedbackRules::from_name("positional"),
            Some(FeedbackRules::Positional)
        );
        assert_eq!(
            FeedbackRules::from_name("Standard"),
            Some(FeedbackRules::Standard)
        );
        assert_eq!(FeedbackRules::from_name("nope"), None);
        assert_eq!(FeedbackRules::default(), FeedbackRules::Positional);
    }
}

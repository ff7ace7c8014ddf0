//! Word representation
//!
//! A `Word` is an immutable, lowercase-normalised letter sequence. Construction
//! never fails: length and alphabet rules are checked where a word is used.

use std::fmt;
use std::ops::Deref;

/// A lowercase letter sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    /// Create a new word, normalising it to lowercase
    ///
    /// # Examples
    /// ```
    /// use wordle_bench::core::Word;
    ///
    /// let word = Word::new("CoAlS");
    /// assert_eq!(word.text(), "coals");
    /// assert_eq!(word.len(), 5);
    /// assert!(word.contains('a'));
    /// ```
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = text.as_ref().to_lowercase();
        let letters = text.chars().collect();
        Self { text, letters }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Iterate over the letters in order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// Check that every letter is alphabetic
    ///
    /// An empty word is not alphabetic.
    #[must_use]
    pub fn is_alphabetic(&self) -> bool {
        !self.letters.is_empty() && self.letters.iter().all(|c| c.is_alphabetic())
    }

    /// Check the word is alphabetic and exactly `word_length` letters long
    #[must_use]
    pub fn is_valid(&self, word_length: usize) -> bool {
        self.is_alphabetic() && self.len() == word_length
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = char;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter().copied()
    }
}

/// The hidden answer of a game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetWord(Word);

impl TargetWord {
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(Word::new(text))
    }
}

impl Deref for TargetWord {
    type Target = Word;

    fn deref(&self) -> &Word {
        &self.0
    }
}

/// A word submitted as an attempt
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessWord(Word);

impl GuessWord {
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(Word::new(text))
    }

    /// Compare this guess against a target of the same length
    ///
    /// # Examples
    /// ```
    /// use wordle_bench::core::{FeedbackRules, GuessWord, TargetWord};
    ///
    /// let feedback = GuessWord::new("cause")
    ///     .compare_to(&TargetWord::new("coals"), FeedbackRules::Positional);
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬛🟨⬛");
    /// ```
    #[must_use]
    pub fn compare_to(&self, target: &TargetWord, rules: super::FeedbackRules) -> super::Feedback {
        super::compare(self, target, rules)
    }
}

impl Deref for GuessWord {
    type Target = Word;

    fn deref(&self) -> &Word {
        &self.0
    }
}

//! In-memory dictionary

use super::{Dictionary, DictionaryError, WORDS, loader};
use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::debug;

/// A dictionary held in memory
///
/// Words are lowercased, filtered to alphabetic words of the configured
/// length, and de-duplicated keeping the first occurrence.
#[derive(Debug, Clone)]
pub struct WordList {
    word_length: usize,
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a dictionary from any sequence of words
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no word survives filtering.
    ///
    /// # Examples
    /// ```
    /// use wordle_bench::dictionary::{Dictionary, WordList};
    ///
    /// let dictionary = WordList::from_words(["Crane", "slate", "toolong", "cr4ne"], 5).unwrap();
    /// assert_eq!(dictionary.words(), ["crane", "slate"]);
    /// assert!(dictionary.contains("crane"));
    /// ```
    pub fn from_words<I, S>(words: I, word_length: usize) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = FxHashSet::default();
        let mut kept = Vec::new();

        for raw in words {
            let word = Word::new(raw.as_ref().trim());
            if word.is_valid(word_length) && index.insert(word.text().to_string()) {
                kept.push(word.text().to_string());
            }
        }

        if kept.is_empty() {
            return Err(DictionaryError::Empty { word_length });
        }

        debug!(word_length, words = kept.len(), "built word list");

        Ok(Self {
            word_length,
            words: kept,
            index,
        })
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if it holds no word of `word_length`.
    pub fn embedded(word_length: usize) -> Result<Self, DictionaryError> {
        Self::from_words(WORDS, word_length)
    }

    /// Load a word list file (plain text, or JSON by extension)
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds no
    /// word of `word_length`.
    pub fn load<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Self, DictionaryError> {
        Self::from_words(loader::read_words(path)?, word_length)
    }

    /// Shuffle the word order with a seeded generator
    ///
    /// The same seed always yields the same order.
    #[must_use]
    pub fn shuffled(mut self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        self.words.shuffle(&mut rng);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn word_length(&self) -> usize {
        self.word_length
    }

    fn words(&self) -> &[String] {
        &self.words
    }

    fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }
}

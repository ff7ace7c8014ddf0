//! Dictionaries the game is played against
//!
//! A dictionary has a fixed word length, an ordered word list and a
//! membership test. It is built once and shared read-only by every game.

mod embedded;
pub mod loader;
mod word_list;

pub use embedded::{WORDS, WORDS_COUNT};
pub use word_list::WordList;

use std::path::PathBuf;
use thiserror::Error;

/// Word universe consumed by the game engine
///
/// Implementations must not change their word order or contents once built.
pub trait Dictionary: Sync {
    /// Length shared by every word
    fn word_length(&self) -> usize;

    /// All words, already filtered to `word_length`
    fn words(&self) -> &[String];

    /// Membership test on a lowercase word
    fn contains(&self, word: &str) -> bool;
}

/// Failure to build a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON word list {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON word list {} is not an object or array", path.display())]
    UnsupportedJson { path: PathBuf },

    #[error("no words of length {word_length} in word list")]
    Empty { word_length: usize },
}

//! Game error types

use super::GameState;
use thiserror::Error;

/// Why a guess was refused
///
/// Recoverable: the game is left untouched and the caller may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalGuess {
    #[error("guess must be {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("guess must contain only letters")]
    NonAlphabetic,

    #[error("\"{0}\" is not in the dictionary")]
    NotInDictionary(String),
}

/// Misuse of the game engine
///
/// These signal a defect in the driver and are not meant to be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("target \"{target}\" is not a {word_length}-letter alphabetic word")]
    InvalidTarget { target: String, word_length: usize },

    #[error("game cannot be started: it is already {0}")]
    AlreadyStarted(GameState),

    #[error("game has not been started")]
    NotStarted,

    #[error("game is already finished")]
    AlreadyFinished,
}

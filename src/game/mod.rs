//! Turn-based game engine
//!
//! A [`Game`] owns one target word and borrows a shared [`Dictionary`].
//! The driver calls [`Game::start`] once, then [`Game::submit_guess`] once per
//! turn until the game reports that it has ended.
//!
//! [`Dictionary`]: crate::dictionary::Dictionary

mod config;
mod engine;
mod error;

pub use config::GameConfig;
pub use engine::{Game, GameState, Outcome, Submission};
pub use error::{GameError, IllegalGuess};

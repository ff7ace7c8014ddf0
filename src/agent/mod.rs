//! Automated players
//!
//! An agent looks at a game through its read-only query surface and returns
//! the next guess. The target stays hidden until the game is over.

mod candidate;
pub mod entropy;
mod kind;
mod random;

pub use candidate::CandidateAgent;
pub use entropy::EntropyAgent;
pub use kind::AgentKind;
pub use random::RandomAgent;

use crate::core::Feedback;
use crate::game::Game;

/// A guess-producing strategy
pub trait Agent {
    /// Short name used in logs and reports
    fn name(&self) -> &str;

    /// Produce the next guess for a started game
    fn play(&mut self, game: &Game<'_>) -> String;

    /// Called by the benchmark before the game at `index` of a run
    ///
    /// Seeded agents derive their per-game state from the index, so a run
    /// replays identically whether its games are played in order or spread
    /// over threads.
    fn begin_game(&mut self, _index: usize) {}
}

/// Guess used when no candidate remains
///
/// This only happens when the target is not a dictionary word. Picks the first
/// dictionary word not yet played so the game still runs to its attempt limit.
pub(crate) fn fallback_guess(game: &Game<'_>) -> String {
    let played: Vec<String> = game.history().iter().map(Feedback::word).collect();
    let words = game.dictionary().words();

    words
        .iter()
        .find(|word| !played.contains(word))
        .or_else(|| words.first())
        .cloned()
        .unwrap_or_default()
}

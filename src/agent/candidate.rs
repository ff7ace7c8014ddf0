//! Opener-then-first-candidate agent

use super::{Agent, fallback_guess};
use crate::game::Game;

/// Default opening word
pub const DEFAULT_OPENER: &str = "crane";

/// Plays a fixed opener, then the first word still consistent with feedback
///
/// Dictionary order decides between candidates, so a frequency-sorted word
/// list makes this the "most common remaining word" player.
#[derive(Debug, Clone)]
pub struct CandidateAgent {
    opener: String,
}

impl CandidateAgent {
    #[must_use]
    pub fn new(opener: impl AsRef<str>) -> Self {
        Self {
            opener: opener.as_ref().to_lowercase(),
        }
    }

    #[must_use]
    pub fn opener(&self) -> &str {
        &self.opener
    }
}

impl Default for CandidateAgent {
    fn default() -> Self {
        Self::new(DEFAULT_OPENER)
    }
}

impl Agent for CandidateAgent {
    fn name(&self) -> &str {
        "candidate"
    }

    fn play(&mut self, game: &Game<'_>) -> String {
        if game.guess_count() == 0 && game.dictionary().contains(&self.opener) {
            return self.opener.clone();
        }

        game.candidate_words()
            .first()
            .map_or_else(|| fallback_guess(game), |word| (*word).to_string())
    }
}

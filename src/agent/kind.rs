//! Runtime agent selection

use super::{Agent, CandidateAgent, EntropyAgent, RandomAgent};
use crate::game::Game;

/// Enum wrapper for all agent types
///
/// Allows runtime selection of an agent while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum AgentKind {
    /// Opener, then first remaining candidate (default)
    Candidate(CandidateAgent),
    /// Seeded random remaining candidate
    Random(RandomAgent),
    /// Highest-entropy remaining candidate
    Entropy(EntropyAgent),
}

impl AgentKind {
    /// Names accepted by [`AgentKind::from_name`]
    pub const NAMES: [&'static str; 3] = ["candidate", "random", "entropy"];

    /// Create an agent from its name
    ///
    /// `opener` overrides the first guess where the agent uses one; `seed`
    /// drives the random agent.
    #[must_use]
    pub fn from_name(name: &str, opener: Option<&str>, seed: u64) -> Option<Self> {
        let agent = match name.to_ascii_lowercase().as_str() {
            "candidate" | "sample" | "simple" => {
                let candidate = opener.map_or_else(CandidateAgent::default, CandidateAgent::new);
                Self::Candidate(candidate)
            }
            "random" => Self::Random(RandomAgent::new(seed)),
            "entropy" => {
                let entropy = opener.map_or_else(EntropyAgent::new, EntropyAgent::with_opener);
                Self::Entropy(entropy)
            }
            _ => return None,
        };
        Some(agent)
    }
}

impl Default for AgentKind {
    fn default() -> Self {
        Self::Candidate(CandidateAgent::default())
    }
}

impl Agent for AgentKind {
    fn name(&self) -> &str {
        match self {
            Self::Candidate(a) => a.name(),
            Self::Random(a) => a.name(),
            Self::Entropy(a) => a.name(),
        }
    }

    fn play(&mut self, game: &Game<'_>) -> String {
        match self {
            Self::Candidate(a) => a.play(game),
            Self::Random(a) => a.play(game),
            Self::Entropy(a) => a.play(game),
        }
    }

    fn begin_game(&mut self, index: usize) {
        match self {
            Self::Candidate(a) => a.begin_game(index),
            Self::Random(a) => a.begin_game(index),
            Self::Entropy(a) => a.begin_game(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;
    use crate::game::GameConfig;

    #[test]
    fn from_name_known_agents() {
        for name in AgentKind::NAMES {
            let agent = AgentKind::from_name(name, None, 42).unwrap();
            assert_eq!(agent.name(), name);
        }
    }

    #[test]
    fn from_name_unknown() {
        assert!(AgentKind::from_name("oracle", None, 42).is_none());
    }

    #[test]
    fn from_name_with_opener() {
        let agent = AgentKind::from_name("candidate", Some("Slate"), 0).unwrap();
        assert!(matches!(agent, AgentKind::Candidate(ref a) if a.opener() == "slate"));
    }

    #[test]
    fn begin_game_reaches_random_agent() {
        let mut agent = AgentKind::from_name("random", None, 8).unwrap();
        agent.begin_game(2);

        let mut direct = RandomAgent::new(8);
        direct.begin_game(2);

        let dict = WordList::embedded(5).unwrap();
        let mut game = Game::new("coals", &dict, GameConfig::default()).unwrap();
        game.start().unwrap();
        assert_eq!(agent.play(&game), direct.play(&game));
    }

    #[test]
    fn default_is_candidate() {
        assert_eq!(AgentKind::default().name(), "candidate");
    }
}

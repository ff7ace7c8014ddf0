//! Uniform random choice among remaining candidates

use super::{Agent, fallback_guess};
use crate::game::Game;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Odd constant spreading game indices over the seed space
const GAME_SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Picks a random remaining candidate each turn
///
/// Seeded, so a given seed replays the same games. Each benchmark game gets
/// its own stream derived from the seed and the game index.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    seed: u64,
    rng: StdRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn play(&mut self, game: &Game<'_>) -> String {
        game.candidate_words()
            .choose(&mut self.rng)
            .map_or_else(|| fallback_guess(game), |word| (*word).to_string())
    }

    fn begin_game(&mut self, index: usize) {
        let offset = (index as u64).wrapping_mul(GAME_SEED_STEP);
        self.rng = StdRng::seed_from_u64(self.seed ^ offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;
    use crate::game::GameConfig;

    #[test]
    fn picks_a_candidate() {
        let dict = WordList::from_words(["crane", "slate", "coals"], 5).unwrap();
        let mut game = Game::new("coals", &dict, GameConfig::default()).unwrap();
        game.start().unwrap();

        let guess = RandomAgent::new(1).play(&game);
        assert!(game.candidate_words().contains(&guess.as_str()));
    }

    #[test]
    fn same_seed_same_guesses() {
        let dict = WordList::embedded(5).unwrap();
        let mut game = Game::new("coals", &dict, GameConfig::default()).unwrap();
        game.start().unwrap();

        let mut first = RandomAgent::new(42);
        let mut second = RandomAgent::new(42);
        for _ in 0..5 {
            assert_eq!(first.play(&game), second.play(&game));
        }
    }

    #[test]
    fn begin_game_resets_stream() {
        let dict = WordList::embedded(5).unwrap();
        let mut game = Game::new("coals", &dict, GameConfig::default()).unwrap();
        game.start().unwrap();

        let mut agent = RandomAgent::new(42);
        agent.begin_game(3);
        let first = agent.play(&game);
        agent.play(&game);
        agent.begin_game(3);

        assert_eq!(agent.play(&game), first);
    }

    #[test]
    fn first_game_keeps_the_seed_stream() {
        let dict = WordList::embedded(5).unwrap();
        let mut game = Game::new("coals", &dict, GameConfig::default()).unwrap();
        game.start().unwrap();

        let mut fresh = RandomAgent::new(11);
        let mut reseeded = RandomAgent::new(11);
        reseeded.begin_game(0);

        assert_eq!(fresh.play(&game), reseeded.play(&game));
    }

    #[test]
    fn always_finishes() {
        let dict = WordList::embedded(5).unwrap();
        let mut game = Game::new("crane", &dict, GameConfig::default()).unwrap();
        game.start().unwrap();
        let mut agent = RandomAgent::new(7);

        while !game.is_finished() {
            let guess = agent.play(&game);
            let _ = game.submit_guess(&guess).unwrap();
        }
        assert!(game.guess_count() >= 1);
    }
}

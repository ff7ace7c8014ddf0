//! Game state machine
//!
//! `Unstarted -> Started -> Finished`, linear and one-way. Each accepted guess
//! is compared against the target, recorded, and folded into the constraint
//! tracker before the termination check runs.

use super::{GameConfig, GameError, IllegalGuess};
use crate::constraints::ConstraintTracker;
use crate::core::{Feedback, FeedbackRules, GuessWord, TargetWord};
use crate::dictionary::Dictionary;
use std::fmt;
use tracing::{debug, info};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Unstarted,
    Started,
    Finished(Outcome),
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unstarted => f.write_str("unstarted"),
            Self::Started => f.write_str("started"),
            Self::Finished(Outcome::Success) => f.write_str("finished (success)"),
            Self::Finished(Outcome::Failure) => f.write_str("finished (failure)"),
        }
    }
}

/// Result of submitting a guess to a started game
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Submission {
    /// The guess counted; `ended` tells whether this turn finished the game
    Accepted { feedback: Feedback, ended: bool },
    /// The guess was refused and nothing changed
    Rejected(IllegalGuess),
}

impl Submission {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Whether the game ended on this submission
    #[must_use]
    pub const fn ended(&self) -> bool {
        matches!(self, Self::Accepted { ended: true, .. })
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        match self {
            Self::Accepted { feedback, .. } => Some(feedback),
            Self::Rejected(_) => None,
        }
    }
}

/// One game against a hidden target
///
/// # Examples
/// ```
/// use wordle_bench::dictionary::WordList;
/// use wordle_bench::game::{Game, GameConfig, GameState, Outcome, Submission};
///
/// let dictionary = WordList::from_words(["coals", "cause", "crane"], 5).unwrap();
/// let mut game = Game::new("coals", &dictionary, GameConfig::default()).unwrap();
/// game.start().unwrap();
///
/// let submission = game.submit_guess("cause").unwrap();
/// assert!(matches!(submission, Submission::Accepted { ended: false, .. }));
/// assert_eq!(game.candidate_words(), ["coals"]);
///
/// assert!(game.submit_guess("coals").unwrap().ended());
/// assert_eq!(game.state(), GameState::Finished(Outcome::Success));
/// ```
pub struct Game<'d> {
    target: TargetWord,
    dictionary: &'d dyn Dictionary,
    config: GameConfig,
    history: Vec<Feedback>,
    constraints: ConstraintTracker,
    state: GameState,
}

impl<'d> Game<'d> {
    /// Create an unstarted game
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidTarget` if the target is not an alphabetic
    /// word of the dictionary's word length. The target need not be a
    /// dictionary member.
    pub fn new(
        target: impl AsRef<str>,
        dictionary: &'d dyn Dictionary,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let target = TargetWord::new(target);
        let word_length = dictionary.word_length();

        if !target.is_valid(word_length) {
            return Err(GameError::InvalidTarget {
                target: target.text().to_string(),
                word_length,
            });
        }

        Ok(Self {
            target,
            dictionary,
            config,
            history: Vec::new(),
            constraints: ConstraintTracker::new(config.rules),
            state: GameState::Unstarted,
        })
    }

    /// Move from `Unstarted` to `Started`
    ///
    /// # Errors
    ///
    /// Returns `GameError::AlreadyStarted` if called more than once.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state != GameState::Unstarted {
            return Err(GameError::AlreadyStarted(self.state));
        }

        self.state = GameState::Started;
        info!(
            word_length = self.word_length(),
            max_attempts = self.config.max_attempts(),
            rules = self.config.rules.name(),
            "game started"
        );
        Ok(())
    }

    /// Play one turn
    ///
    /// An illegal guess comes back as [`Submission::Rejected`] and leaves the
    /// game exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotStarted` or `GameError::AlreadyFinished` when
    /// the game is not accepting guesses.
    pub fn submit_guess(&mut self, text: &str) -> Result<Submission, GameError> {
        match self.state {
            GameState::Unstarted => return Err(GameError::NotStarted),
            GameState::Finished(_) => return Err(GameError::AlreadyFinished),
            GameState::Started => {}
        }

        let guess = match self.validate_guess(text) {
            Ok(guess) => guess,
            Err(reason) => {
                debug!(guess = text, %reason, "guess rejected");
                return Ok(Submission::Rejected(reason));
            }
        };

        let feedback = guess.compare_to(&self.target, self.config.rules);
        self.history.push(feedback.clone());
        self.constraints.apply(&feedback);

        // Failure only once the count exceeds the bound: max_attempts + 1 guesses
        if feedback.is_win() {
            self.finish(Outcome::Success);
        } else if self.history.len() > self.config.max_attempts() {
            self.finish(Outcome::Failure);
        }

        debug!(
            guess = guess.text(),
            feedback = %feedback,
            guess_count = self.history.len(),
            "guess accepted"
        );

        Ok(Submission::Accepted {
            feedback,
            ended: self.is_finished(),
        })
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = GameState::Finished(outcome);
        info!(
            answer = self.target.text(),
            guesses = self.history.len(),
            ?outcome,
            "game finished"
        );
    }

    /// Check a guess without playing it
    ///
    /// # Errors
    ///
    /// Returns the reason the guess would be refused.
    pub fn validate_guess(&self, text: &str) -> Result<GuessWord, IllegalGuess> {
        let guess = GuessWord::new(text);
        let expected = self.word_length();

        if guess.len() != expected {
            return Err(IllegalGuess::WrongLength {
                expected,
                actual: guess.len(),
            });
        }
        if !guess.is_alphabetic() {
            return Err(IllegalGuess::NonAlphabetic);
        }
        if !self.dictionary.contains(guess.text()) {
            return Err(IllegalGuess::NotInDictionary(guess.text().to_string()));
        }

        Ok(guess)
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    /// Feedback for the most recent accepted guess
    #[must_use]
    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.history.last()
    }

    /// True when the last accepted guess was all green
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.last_feedback().is_some_and(Feedback::is_win)
    }

    /// Dictionary words still consistent with every feedback so far
    #[must_use]
    pub fn candidate_words(&self) -> Vec<&'d str> {
        self.constraints
            .filter()
            .candidates(self.dictionary.words())
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// All accepted feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    /// Everything learned from feedback so far
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintTracker {
        &self.constraints
    }

    #[must_use]
    pub const fn rules(&self) -> FeedbackRules {
        self.config.rules
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.dictionary.word_length()
    }

    #[must_use]
    pub fn dictionary(&self) -> &'d dyn Dictionary {
        self.dictionary
    }

    /// The target, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&str> {
        self.is_finished().then(|| self.target.text())
    }
}

impl fmt::Debug for Game<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("guess_count", &self.history.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::dictionary::WordList;

    fn dictionary() -> WordList {
        let words = "coals cause crane slate chaos pools clasp trace";
        WordList::from_words(words.split_whitespace(), 5).unwrap()
    }

    fn started<'d>(dictionary: &'d WordList, target: &str, config: GameConfig) -> Game<'d> {
        let mut game = Game::new(target, dictionary, config).unwrap();
        game.start().unwrap();
        game
    }

    #[test]
    fn new_rejects_invalid_target() {
        let dict = dictionary();
        let expected = GameError::InvalidTarget {
            target: "coal".to_string(),
            word_length: 5,
        };
        assert_eq!(
            Game::new("coal", &dict, GameConfig::default()).err(),
            Some(expected)
        );
        assert!(Game::new("co4ls", &dict, GameConfig::default()).is_err());
    }

    #[test]
    fn target_need_not_be_in_dictionary() {
        let dict = dictionary();
        let game = Game::new("zebra", &dict, GameConfig::default()).unwrap();
        assert!(!game.candidate_words().contains(&"zebra"));
    }

    #[test]
    fn start_twice_is_an_error() {
        let dict = dictionary();
        let mut game = started(&dict, "coals", GameConfig::default());

        assert_eq!(
            game.start(),
            Err(GameError::AlreadyStarted(GameState::Started))
        );
        assert_eq!(game.state(), GameState::Started);
    }

    #[test]
    fn start_after_finish_is_an_error() {
        let dict = dictionary();
        let mut game = started(&dict, "coals", GameConfig::default());
        let _ = game.submit_guess("coals").unwrap();

        let finished = GameState::Finished(Outcome::Success);
        assert_eq!(game.start(), Err(GameError::AlreadyStarted(finished)));
    }

    #[test]
    fn submit_before_start_is_an_error() {
        let dict = dictionary();
        let mut game = Game::new("coals", &dict, GameConfig::default()).unwrap();

        assert_eq!(game.submit_guess("cause"), Err(GameError::NotStarted));
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn wrong_length_is_rejected_without_mutation() {
        let dict = dictionary();
        let mut game = started(&dict, "coals", GameConfig::default());
        let before = game.candidate_words();

        let submission = game.submit_guess("coal").unwrap();
        let too_short = IllegalGuess::WrongLength {
            expected: 5,
            actual: 4,
        };
        assert_eq!(submission, Submission::Rejected(too_short));
        assert_eq!(game.guess_count(), 0);
        assert!(game.last_feedback().is_none());
        assert_eq!(game.candidate_words(), before);
        assert_eq!(game.state(), GameState::Started);
    }

    #[test]
    fn non_alphabetic_is_rejected() {
        let dict = dictionary();
        let mut game = started(&dict, "coals", GameConfig::default());

        assert_eq!(
            game.submit_guess("co4ls").unwrap(),
            Submission::Rejected(IllegalGuess::NonAlphabetic)
        );
        assert_eq!(
            game.submit_guess("coal ").unwrap(),
            Submission::Rejected(IllegalGuess::NonAlphabetic)
        );
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn unknown_word_is_rejected_without_mutation() {
        let dict = dictionary();
        let mut game = started(&dict, "coals", GameConfig::default());
        let _ = game.submit_guess("cause").unwrap();
        let last = game.last_feedback().cloned();
        let candidates = game.candidate_words();

        assert_eq!(
            game.submit_guess("zebra").unwrap(),
            Submission::Rejected(IllegalGuess::NotInDictionary("zebra".to_string()))
        );
        assert_eq!(game.guess_count(), 1);
        assert_eq!(game.last_feedback().cloned(), last);
        assert_eq!(game.candidate_words(), candidates);
    }

    #[test]
    fn uppercase_guess_is_normalized() {
        let dict = dictionary();
        let mut game = started(&dict, "coals", GameConfig::default());

        let submission = game.submit_guess("CAUSE").unwrap();
        assert!(submission.is_accepted());
        assert_eq!(game.last_feedback().unwrap().word(), "cause");
    }

    #[test]
    fn accepted_guess_reports_feedback() {
        let dict = dictionary();
        let mut game = started(&dict, "coals", GameConfig::default());

        let submission = game.submit_guess("cause").unwrap();
        let feedback = submission.feedback().unwrap();
        let states: Vec<LetterState> = feedback.iter().map(|m| m.state).collect();

        assert_eq!(
            states,
            [
                LetterState::Green,
                LetterState::Yellow,
                LetterState::Black,
                LetterState::Yellow,
                LetterState::Black,
            ]
        );
        assert!(!submission.ended());
        assert_eq!(game.last_feedback(), Some(feedback));
        assert_eq!(game.guess_count(), 1);
        assert!(!game.is_success());
    }

    #[test]
    fn winning_guess_finishes_game() {
        let dict = dictionary();
        let mut game = started(&dict, "coals", GameConfig::default());

        assert!(game.revealed_target().is_none());
        let submission = game.submit_guess("coals").unwrap();

        assert!(submission.ended());
        assert!(game.is_success());
        assert_eq!(game.outcome(), Some(Outcome::Success));
        assert_eq!(game.revealed_target(), Some("coals"));
        assert_eq!(game.submit_guess("cause"), Err(GameError::AlreadyFinished));
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn failure_after_one_more_than_max_attempts() {
        let dict = dictionary();
        let config = GameConfig::with_max_attempts(2).unwrap();
        let mut game = started(&dict, "coals", config);

        assert!(!game.submit_guess("crane").unwrap().ended());
        assert!(!game.submit_guess("slate").unwrap().ended());
        assert_eq!(game.state(), GameState::Started);

        assert!(game.submit_guess("trace").unwrap().ended());
        assert_eq!(game.state(), GameState::Finished(Outcome::Failure));
        assert_eq!(game.guess_count(), 3);
        assert!(!game.is_success());
    }

    #[test]
    fn win_on_final_extra_attempt_is_success() {
        let dict = dictionary();
        let config = GameConfig::with_max_attempts(1).unwrap();
        let mut game = started(&dict, "coals", config);

        let _ = game.submit_guess("crane").unwrap();
        assert!(game.submit_guess("coals").unwrap().ended());
        assert_eq!(game.outcome(), Some(Outcome::Success));
    }

    #[test]
    fn is_success_tracks_last_feedback() {
        let dict = dictionary();
        let mut game = started(&dict, "coals", GameConfig::default());
        assert!(!game.is_success());

        let _ = game.submit_guess("cause").unwrap();
        assert_eq!(
            game.is_success(),
            game.last_feedback().is_some_and(Feedback::is_win)
        );
        assert!(!game.is_success());
    }

    #[test]
    fn target_in_dictionary_is_initial_candidate() {
        let dict = dictionary();
        let game = Game::new("coals", &dict, GameConfig::default()).unwrap();
        assert!(game.candidate_words().contains(&"coals"));
        assert_eq!(game.candidate_words().len(), dict.len());
    }

    #[test]
    fn candidates_narrow_after_each_guess() {
        let dict = dictionary();
        for rules in [FeedbackRules::Positional, FeedbackRules::Standard] {
            let mut game = started(&dict, "coals", GameConfig::default().with_rules(rules));
            let mut previous = game.candidate_words().len();

            for guess in ["trace", "pools", "chaos"] {
                let _ = game.submit_guess(guess).unwrap();
                let remaining = game.candidate_words();
                assert!(remaining.len() <= previous);
                assert!(remaining.contains(&"coals"));
                previous = remaining.len();
            }
        }
    }

    #[test]
    fn history_records_each_accepted_guess() {
        let dict = dictionary();
        let mut game = started(&dict, "coals", GameConfig::default());

        let _ = game.submit_guess("crane").unwrap();
        let _ = game.submit_guess("xxxxx").unwrap();
        let _ = game.submit_guess("slate").unwrap();

        let words: Vec<String> = game.history().iter().map(Feedback::word).collect();
        assert_eq!(words, ["crane", "slate"]);
    }
}

//! Per-game configuration

use crate::core::FeedbackRules;

/// Default number of attempts, as in the real game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Settings shared by every game built from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: usize,
    pub rules: FeedbackRules,
}

impl GameConfig {
    /// Config with a custom attempt bound
    ///
    /// Returns `None` for zero.
    #[must_use]
    pub const fn with_max_attempts(max_attempts: usize) -> Option<Self> {
        if max_attempts == 0 {
            return None;
        }
        Some(Self {
            max_attempts,
            rules: FeedbackRules::Positional,
        })
    }

    #[must_use]
    pub const fn with_rules(mut self, rules: FeedbackRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            rules: FeedbackRules::default(),
        }
    }
}

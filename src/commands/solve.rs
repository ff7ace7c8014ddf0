//! Word solving command
//!
//! Plays one agent game against a chosen target and records the solution path.

use crate::agent::Agent;
use crate::agent::entropy::calculate_metrics;
use crate::core::{Feedback, Word};
use crate::dictionary::Dictionary;
use crate::game::{Game, GameConfig, IllegalGuess, Submission};
use anyhow::{Result, bail};
use tracing::warn;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub agent: String,
    pub success: bool,
    pub steps: Vec<GuessStep>,
    /// Guesses the game refused, in order
    pub rejected: Vec<(String, IllegalGuess)>,
}

/// A single accepted guess in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `target` with `agent`
///
/// # Errors
///
/// Returns an error if the target is invalid for the dictionary or the agent
/// produces `max_rejections` illegal guesses in a row.
pub fn solve_word<A: Agent + ?Sized>(
    agent: &mut A,
    dictionary: &dyn Dictionary,
    target: &str,
    config: GameConfig,
    max_rejections: usize,
) -> Result<SolveResult> {
    let mut game = Game::new(target, dictionary, config)?;
    game.start()?;

    let rules = game.rules();
    let mut steps = Vec::new();
    let mut rejected = Vec::new();
    let mut streak = 0;

    while !game.is_finished() {
        let candidates: Vec<Word> = game.candidate_words().into_iter().map(Word::new).collect();
        let candidates_before = candidates.len();

        let guess = agent.play(&game);

        // Metrics only mean something when there is a choice left
        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(&Word::new(&guess), &candidates, rules);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        match game.submit_guess(&guess)? {
            Submission::Rejected(reason) => {
                warn!(guess = %guess, %reason, "Agent guess rejected");
                rejected.push((guess, reason));
                streak += 1;
                if streak >= max_rejections {
                    bail!(
                        "agent '{}' made {streak} illegal guesses in a row",
                        agent.name()
                    );
                }
            }
            Submission::Accepted { feedback, .. } => {
                streak = 0;
                steps.push(GuessStep {
                    word: guess,
                    feedback,
                    candidates_before,
                    candidates_after: game.candidate_words().len(),
                    entropy,
                    expected_remaining,
                });
            }
        }
    }

    Ok(SolveResult {
        target: target.to_lowercase(),
        agent: agent.name().to_string(),
        success: game.is_success(),
        steps,
        rejected,
    })
}

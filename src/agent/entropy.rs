//! Entropy-maximising agent
//!
//! Each remaining candidate is scored by the Shannon entropy of the feedback
//! partition it would induce over all remaining candidates:
//!
//! H(X) = -Σ p(x) * log₂(p(x))
//!
//! where p(x) is the share of candidates producing feedback x.

use super::{Agent, fallback_guess};
use crate::core::{Feedback, FeedbackRules, Word, compare};
use crate::game::Game;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Group candidates by the feedback they produce for `guess`
fn group_by_feedback(
    guess: &Word,
    candidates: &[Word],
    rules: FeedbackRules,
) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        *counts.entry(compare(guess, candidate, rules)).or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a partition given by its part sizes
///
/// 0.0 for a single part or an empty partition.
#[must_use]
pub fn shannon_entropy<K, S: BuildHasher>(counts: &HashMap<K, usize, S>) -> f64 {
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of the feedback distribution for `guess` over `candidates`
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word], rules: FeedbackRules) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_feedback(guess, candidates, rules))
}

/// Entropy, expected remaining candidates and worst-case partition
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word], rules: FeedbackRules) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let groups = group_by_feedback(guess, candidates, rules);
    let total = candidates.len() as f64;

    let expected_remaining = groups
        .values()
        .map(|&size| size as f64 * size as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().copied().max().unwrap_or(0),
    }
}

/// Pick the guess from `pool` with the highest entropy over `candidates`
///
/// Returns `None` if the pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    pool: &'a [Word],
    candidates: &[Word],
    rules: FeedbackRules,
) -> Option<(&'a Word, f64)> {
    pool.par_iter()
        .map(|guess| (guess, calculate_entropy(guess, candidates, rules)))
        .max_by(|(_, e1), (_, e2)| e1.total_cmp(e2))
}

/// Plays the remaining candidate that splits the others most evenly
#[derive(Debug, Clone, Default)]
pub struct EntropyAgent {
    opener: Option<String>,
}

impl EntropyAgent {
    /// Agent that always computes its guess, including the first one
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Agent that plays `opener` on the first turn
    ///
    /// Scoring the first turn scans the whole dictionary against itself, so a
    /// fixed opener saves most of the work in long benchmarks.
    #[must_use]
    pub fn with_opener(opener: impl AsRef<str>) -> Self {
        Self {
            opener: Some(opener.as_ref().to_lowercase()),
        }
    }
}

impl Agent for EntropyAgent {
    fn name(&self) -> &str {
        "entropy"
    }

    fn play(&mut self, game: &Game<'_>) -> String {
        if game.guess_count() == 0
            && let Some(opener) = &self.opener
            && game.dictionary().contains(opener)
        {
            return opener.clone();
        }

        let remaining = game.candidate_words();
        let candidates: Vec<Word> = remaining.into_iter().map(Word::new).collect();

        match candidates.len() {
            0 => fallback_guess(game),
            // With two left, guessing either is as good as any split
            1 | 2 => candidates[0].text().to_string(),
            _ => match select_best_guess(&candidates, &candidates, game.rules()) {
                Some((best, _)) => best.text().to_string(),
                None => fallback_guess(game),
            },
        }
    }
}

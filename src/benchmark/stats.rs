//! Aggregate statistics over benchmark games

use super::GameRecord;
use std::collections::BTreeMap;
use std::time::Duration;

/// Summary of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub agent: String,
    pub games: usize,
    pub successes: usize,
    /// Games given up after too many rejected guesses (counted as failures)
    pub abandoned: usize,
    /// Mean accepted guesses per game, over all games
    pub average_turns: f64,
    /// Mean seconds per accepted turn
    pub average_turn_time: f64,
    /// Fraction of games won, in `[0, 1]`
    pub success_rate: f64,
    /// Population standard deviation of turn time, in seconds
    pub std_turn_time: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Guess count -> number of games won in that many guesses
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub records: Vec<GameRecord>,
}

impl BenchmarkResult {
    /// Aggregate per-game records
    ///
    /// An empty record list gives an all-zero result.
    #[must_use]
    pub fn from_records(agent: &str, records: Vec<GameRecord>, duration: Duration) -> Self {
        let games = records.len();
        let successes = records.iter().filter(|r| r.success).count();
        let abandoned = records.iter().filter(|r| r.abandoned).count();

        let turns: Vec<f64> = records.iter().map(|r| r.turns as f64).collect();
        let turn_times: Vec<f64> = records
            .iter()
            .flat_map(|r| r.turn_times.iter().map(Duration::as_secs_f64))
            .collect();

        let mut distribution = BTreeMap::new();
        for record in records.iter().filter(|r| r.success) {
            *distribution.entry(record.turns).or_insert(0) += 1;
        }

        Self {
            agent: agent.to_string(),
            games,
            successes,
            abandoned,
            average_turns: mean(&turns),
            average_turn_time: mean(&turn_times),
            success_rate: if games == 0 {
                0.0
            } else {
                successes as f64 / games as f64
            },
            std_turn_time: std_dev(&turn_times),
            min_turns: records.iter().map(|r| r.turns).min().unwrap_or(0),
            max_turns: records.iter().map(|r| r.turns).max().unwrap_or(0),
            distribution,
            duration,
            records,
        }
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.games - self.successes
    }

    /// Games per second of wall time
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.games as f64 / secs
        } else {
            0.0
        }
    }
}

/// Arithmetic mean, 0.0 for no values
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation, 0.0 for no values
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    let variance = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

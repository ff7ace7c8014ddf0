//! Benchmark command
//!
//! Tests agent performance across multiple target words.

use crate::agent::{Agent, AgentKind};
use crate::benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
use crate::dictionary::Dictionary;
use anyhow::{Context, Result};
use tracing::info;

/// Choose benchmark targets
///
/// Explicit targets win; otherwise the first `count` dictionary words are used,
/// so a shuffled dictionary gives a seeded sample.
#[must_use]
pub fn benchmark_targets(
    dictionary: &dyn Dictionary,
    explicit: &[String],
    count: usize,
) -> Vec<String> {
    if explicit.is_empty() {
        dictionary.words().iter().take(count).cloned().collect()
    } else {
        explicit.iter().map(|t| t.trim().to_lowercase()).collect()
    }
}

/// Benchmark `agent` over `targets`
///
/// # Errors
///
/// Returns an error if the game engine reports an invariant violation.
pub fn run_benchmark_command(
    agent: &AgentKind,
    dictionary: &dyn Dictionary,
    targets: &[String],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult> {
    info!(
        agent = agent.name(),
        games = targets.len(),
        parallel = config.parallel,
        "Starting benchmark"
    );

    run_benchmark(agent, dictionary, targets, config)
        .with_context(|| format!("benchmark of agent '{}' aborted", agent.name()))
}

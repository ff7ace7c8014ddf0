//! Benchmark harness
//!
//! Drives one game per target word with an agent and aggregates turn counts,
//! success rate and per-turn latency.

mod harness;
mod stats;

pub use harness::{BenchmarkConfig, DEFAULT_MAX_REJECTIONS, GameRecord, play_game, run_benchmark};
pub use stats::{BenchmarkResult, mean, std_dev};

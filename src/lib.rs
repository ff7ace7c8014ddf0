//! Wordle Bench
//!
//! A word-guessing game engine with pluggable agents and a benchmark harness
//! that measures how well and how fast they play.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_bench::agent::CandidateAgent;
//! use wordle_bench::benchmark::{BenchmarkConfig, run_benchmark};
//! use wordle_bench::dictionary::WordList;
//!
//! let dictionary = WordList::embedded(5).unwrap();
//! let targets = ["coals", "slate", "pools"];
//!
//! let result = run_benchmark(
//!     &CandidateAgent::default(),
//!     &dictionary,
//!     &targets,
//!     &BenchmarkConfig::default(),
//! )
//! .unwrap();
//!
//! println!("success rate: {:.1}%", result.success_rate * 100.0);
//! ```

// Words and feedback
pub mod core;

// Knowledge accumulated from feedback
pub mod constraints;

// Game state machine
pub mod game;

// Word lists
pub mod dictionary;

// Guessing agents
pub mod agent;

// Multi-game runs and statistics
pub mod benchmark;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

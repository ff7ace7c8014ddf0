//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{benchmark_targets, run_benchmark_command};
pub use play::{SessionEnd, pick_target, play_session, run_play};
pub use solve::{GuessStep, SolveResult, solve_word};

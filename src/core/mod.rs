//! Core domain types for the game engine
//!
//! Words, per-letter feedback and the comparator that produces it.
//! Everything here is pure and has no knowledge of dictionaries or game state.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackRules, LetterState, MatchState, compare};
pub use word::{GuessWord, TargetWord, Word};

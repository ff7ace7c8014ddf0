//! Accumulated knowledge about the target
//!
//! The tracker folds each feedback sequence into constraint sets; the filter
//! scans a word list for the words still consistent with them.

mod filter;
mod tracker;

pub use filter::CandidateFilter;
pub use tracker::ConstraintTracker;

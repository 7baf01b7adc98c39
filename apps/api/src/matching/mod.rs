// Career matching engine
// Implements: sub-scoring, skill gaps, learning paths, reasoning, ranking.
// Pure functions over the profile and the shared catalog; no I/O.

pub mod handlers;
pub mod learning_path;
pub mod matcher;
pub mod reasoning;
pub mod scoring;

pub use matcher::{CareerMatcher, MatchResult, RuleBasedMatcher};

//! Team matching pipeline.
//!
//! Ties the stages together: role census and team template, seeded random
//! assignment, scoring, and annealing over role-preserving swaps. The
//! result carries the best partition, its score breakdown, per-team
//! summaries and every non-fatal warning raised along the way.

mod config;
mod problem;
mod report;
mod runner;

pub use config::MatchConfig;
pub use problem::TeamProblem;
pub use report::{summarize_team, CategoryTally, TeamSummary};
pub use runner::{AnnealingStats, MatchOutcome, TeamMatcher};

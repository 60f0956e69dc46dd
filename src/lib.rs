//! Quota-constrained team formation.
//!
//! Splits a roster of participants into a fixed number of teams so that
//! every team meets its minimum role quotas, members share preferences
//! (team vibe, active hours, meeting mode), and mutual interest between
//! members is high and evenly spread across teams.
//!
//! - **Models**: participants, roles and quotas, preference categories,
//!   the directed interest graph, and partitions.
//! - **Assignment**: per-team role templates, seeded random assignment,
//!   and same-role swap neighbors.
//! - **Scoring**: frequency-weighted category similarity, pairwise
//!   affinity, optional trait balance, and the combined cost.
//! - **SA**: a generic Simulated Annealing runner with pluggable cooling.
//! - **Matcher**: the end-to-end pipeline plus multi-seed sweeps.
//!
//! # Example
//!
//! ```
//! use u_teaming::matcher::{MatchConfig, TeamMatcher};
//! use u_teaming::models::{AffinityEdge, Participant, Role};
//!
//! let roster: Vec<_> = (0..10)
//!     .map(|i| {
//!         let role = match i {
//!             0 | 1 => Role::Design,
//!             2..=5 => Role::Frontend,
//!             _ => Role::Backend,
//!         };
//!         Participant::new(i, role)
//!     })
//!     .collect();
//! let edges = [AffinityEdge::new(0, 2), AffinityEdge::new(2, 0)];
//!
//! let outcome = TeamMatcher::new(MatchConfig::default().with_team_count(2).with_seed(7))
//!     .run(&roster, &edges)
//!     .unwrap();
//! assert_eq!(outcome.partition.member_count(), 10);
//! ```

pub mod assignment;
pub mod error;
pub mod matcher;
pub mod models;
pub mod random;
pub mod sa;
pub mod scoring;

pub use error::{MatchWarning, Result, TeamingError};
pub use matcher::{MatchConfig, MatchOutcome, TeamMatcher};

//! Team scoring and partition evaluation.
//!
//! - [`CategoryScorer`]: rarity-weighted agreement on categorical
//!   preferences, one score per team.
//! - [`team_affinity`] / [`member_affinity`]: interest-graph aggregates per
//!   team and per member.
//! - [`trait_penalty`]: optional personality balance term.
//! - [`Evaluator`]: combines the above into a single cost to minimize.

mod affinity;
mod category;
mod config;
mod evaluator;
mod stats;
mod traits;

pub use affinity::{member_affinity, team_affinities, team_affinity, MemberAffinity, TeamAffinity};
pub use category::{dominant_choices, CategoryScorer, CategoryWeights, DominantChoice};
pub use config::{CategoryScoring, CostWeights, TraitBalanceConfig, WeightingScheme};
pub use evaluator::{Evaluation, Evaluator};
pub use stats::{mean, population_variance};
pub use traits::{trait_penalty, trait_profile, TeamTraitProfile};

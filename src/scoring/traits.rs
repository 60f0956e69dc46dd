//! Personality balance penalty.
//!
//! Looks at Big Five scores only; members answering the MBTI questionnaire
//! do not contribute. Three components, each weighted by
//! [`TraitBalanceConfig`]:
//!
//! - variance across teams of mean neuroticism (teams should carry similar
//!   emotional load),
//! - mean over teams of the within-team extraversion standard deviation
//!   (members of a team should have similar energy),
//! - share of teams with no member above the conscientiousness threshold.

use super::config::TraitBalanceConfig;
use super::stats::{mean, population_variance};
use crate::models::Team;

/// Big Five aggregates of one team.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamTraitProfile {
    /// Members with Big Five scores.
    pub scored_members: usize,
    pub mean_neuroticism: f64,
    pub extraversion_std: f64,
    pub high_conscientiousness: usize,
}

/// Aggregates `team`, or `None` if no member has Big Five scores.
pub fn trait_profile(team: &Team, config: &TraitBalanceConfig) -> Option<TeamTraitProfile> {
    let scored: Vec<_> = team
        .members
        .iter()
        .filter_map(|m| m.traits.big_five())
        .collect();
    if scored.is_empty() {
        return None;
    }

    let neuroticism: Vec<f64> = scored.iter().map(|b| b.neuroticism).collect();
    let extraversion: Vec<f64> = scored.iter().map(|b| b.extraversion).collect();
    let high_conscientiousness = scored
        .iter()
        .filter(|b| b.conscientiousness > config.high_conscientiousness)
        .count();

    Some(TeamTraitProfile {
        scored_members: scored.len(),
        mean_neuroticism: mean(&neuroticism),
        extraversion_std: population_variance(&extraversion).sqrt(),
        high_conscientiousness,
    })
}

/// Weighted balance penalty over all teams; 0 when nobody has Big Five
/// scores.
pub fn trait_penalty(teams: &[Team], config: &TraitBalanceConfig) -> f64 {
    let profiles: Vec<TeamTraitProfile> = teams
        .iter()
        .filter_map(|t| trait_profile(t, config))
        .collect();
    if profiles.is_empty() {
        return 0.0;
    }

    let n_means: Vec<f64> = profiles.iter().map(|p| p.mean_neuroticism).collect();
    let e_stds: Vec<f64> = profiles.iter().map(|p| p.extraversion_std).collect();
    let lacking = profiles
        .iter()
        .filter(|p| p.high_conscientiousness == 0)
        .count();

    config.neuroticism_variance * population_variance(&n_means)
        + config.extraversion_spread * mean(&e_stds)
        + config.conscientiousness_gap * lacking as f64 / profiles.len() as f64
}

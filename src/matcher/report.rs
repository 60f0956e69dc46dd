//! Per-team summaries handed to reporting consumers.

use crate::models::{BigFive, Category, Choice, RoleCounts, RoleQuotas, Team};
use crate::scoring::{
    dominant_choices, member_affinity, team_affinity, Evaluator, MemberAffinity, TeamAffinity,
};

/// How a team answered one category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryTally {
    pub category: Category,
    /// Members per value, in domain order.
    pub counts: [usize; 2],
    pub dominant: Choice,
    pub rate: f64,
}

impl CategoryTally {
    /// Label of the dominant value.
    pub fn dominant_label(&self) -> &'static str {
        self.category.label(self.dominant)
    }
}

/// Plain-data digest of one team.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamSummary {
    pub index: usize,
    pub size: usize,
    pub roles: RoleCounts,
    pub categories: Vec<CategoryTally>,
    pub category_score: f64,
    pub affinity: TeamAffinity,
    pub members: Vec<MemberAffinity>,
    /// Mean Big Five profile; `None` if no member answered Big Five.
    pub mean_traits: Option<BigFive>,
}

/// Summarizes `team` as the `index`-th team of a partition.
pub fn summarize_team(
    index: usize,
    team: &Team,
    evaluator: &Evaluator,
    quotas: &RoleQuotas,
) -> TeamSummary {
    let categories = dominant_choices(team)
        .into_iter()
        .map(|d| {
            let mut counts = [0usize; 2];
            for m in &team.members {
                counts[m.preferences.choice(d.category).index()] += 1;
            }
            CategoryTally {
                category: d.category,
                counts,
                dominant: d.choice,
                rate: d.rate,
            }
        })
        .collect();

    TeamSummary {
        index,
        size: team.len(),
        roles: team.role_counts(quotas),
        categories,
        category_score: evaluator.category_scorer().team_score(team),
        affinity: team_affinity(evaluator.graph(), team),
        members: member_affinity(evaluator.graph(), team),
        mean_traits: mean_big_five(team),
    }
}

fn mean_big_five(team: &Team) -> Option<BigFive> {
    let scored: Vec<&BigFive> = team
        .members
        .iter()
        .filter_map(|m| m.traits.big_five())
        .collect();
    if scored.is_empty() {
        return None;
    }
    let n = scored.len() as f64;
    let avg = |f: fn(&BigFive) -> f64| scored.iter().map(|&b| f(b)).sum::<f64>() / n;
    Some(BigFive {
        openness: avg(|b| b.openness),
        conscientiousness: avg(|b| b.conscientiousness),
        extraversion: avg(|b| b.extraversion),
        agreeableness: avg(|b| b.agreeableness),
        neuroticism: avg(|b| b.neuroticism),
    })
}

//! Category similarity scoring.
//!
//! A team scores well on a category when most of its members agree on it,
//! and better still when the value they agree on is globally rare.
//!
//! For each category the team's dominant value `v` (ties go to the first
//! value of the domain) and its in-team rate `r` give `r * weight[v]`. The
//! team score is the mean over categories, optionally rescaled to
//! `[0, 100]` by the largest weight.

use super::config::{CategoryScoring, WeightingScheme};
use crate::models::{Category, Choice, Participant, Team};

/// Global rarity weight of every category value.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeights {
    weights: [[f64; 2]; Category::COUNT],
    max_weight: f64,
}

impl CategoryWeights {
    /// Computes weights from the global value frequencies of `participants`.
    ///
    /// A value nobody chose gets weight 0; it can never be a team's
    /// dominant value.
    pub fn from_participants<'a, I>(participants: I, scheme: WeightingScheme) -> Self
    where
        I: IntoIterator<Item = &'a Participant>,
    {
        let mut counts = [[0usize; 2]; Category::COUNT];
        let mut total = 0usize;
        for p in participants {
            total += 1;
            for (c, category) in Category::ALL.iter().enumerate() {
                counts[c][p.preferences.choice(*category).index()] += 1;
            }
        }

        let mut weights = [[0.0; 2]; Category::COUNT];
        for (c, pair) in counts.iter().enumerate() {
            for (v, &count) in pair.iter().enumerate() {
                weights[c][v] = value_weight(count, total, scheme);
            }
        }

        let max_weight = weights
            .iter()
            .flatten()
            .copied()
            .fold(0.0_f64, f64::max);

        Self {
            weights,
            max_weight,
        }
    }

    /// Weight of `choice` within `category`.
    pub fn weight(&self, category: Category, choice: Choice) -> f64 {
        self.weights[category as usize][choice.index()]
    }

    /// Largest weight over every category value.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }
}

fn value_weight(count: usize, total: usize, scheme: WeightingScheme) -> f64 {
    if count == 0 || total == 0 {
        return 0.0;
    }
    let frequency = count as f64 / total as f64;
    match scheme {
        WeightingScheme::Linear => 1.0 - frequency,
        WeightingScheme::Logarithmic => {
            if count == total {
                1.0
            } else {
                -frequency.ln()
            }
        }
    }
}

/// The dominant value of one category inside a team.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DominantChoice {
    pub category: Category,
    pub choice: Choice,
    /// Share of members holding `choice`, in `[0, 1]`.
    pub rate: f64,
}

/// Dominant value and rate of every category for `team`.
///
/// Empty for an empty team.
pub fn dominant_choices(team: &Team) -> Vec<DominantChoice> {
    if team.is_empty() {
        return Vec::new();
    }
    let size = team.len() as f64;
    Category::ALL
        .iter()
        .map(|&category| {
            let mut counts = [0usize; 2];
            for m in &team.members {
                counts[m.preferences.choice(category).index()] += 1;
            }
            let choice = if counts[0] >= counts[1] {
                Choice::First
            } else {
                Choice::Second
            };
            DominantChoice {
                category,
                choice,
                rate: counts[choice.index()] as f64 / size,
            }
        })
        .collect()
}

/// Scores teams against fixed global weights.
#[derive(Debug, Clone)]
pub struct CategoryScorer {
    weights: CategoryWeights,
    rescale: bool,
}

impl CategoryScorer {
    pub fn new(weights: CategoryWeights, rescale: bool) -> Self {
        Self { weights, rescale }
    }

    /// Derives weights from `participants` using `scoring`.
    pub fn from_participants<'a, I>(participants: I, scoring: &CategoryScoring) -> Self
    where
        I: IntoIterator<Item = &'a Participant>,
    {
        Self::new(
            CategoryWeights::from_participants(participants, scoring.scheme),
            scoring.rescale,
        )
    }

    pub fn weights(&self) -> &CategoryWeights {
        &self.weights
    }

    /// Score of one team. An empty team scores 0.
    pub fn team_score(&self, team: &Team) -> f64 {
        let dominant = dominant_choices(team);
        if dominant.is_empty() {
            return 0.0;
        }
        let sum: f64 = dominant
            .iter()
            .map(|d| d.rate * self.weights.weight(d.category, d.choice))
            .sum();
        let mean = sum / dominant.len() as f64;

        if !self.rescale {
            return mean;
        }
        if self.weights.max_weight() <= 0.0 {
            return 0.0;
        }
        // Rounding can push a unanimous team a hair past the bound.
        (mean / self.weights.max_weight() * 100.0).min(100.0)
    }

    /// Score of every team, in order.
    pub fn team_scores(&self, teams: &[Team]) -> Vec<f64> {
        teams.iter().map(|t| self.team_score(t)).collect()
    }
}

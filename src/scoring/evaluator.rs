//! Partition cost evaluation.

use super::affinity::{team_affinities, TeamAffinity};
use super::category::CategoryScorer;
use super::config::{CategoryScoring, CostWeights, TraitBalanceConfig};
use super::stats::{mean, population_variance};
use super::traits::trait_penalty;
use crate::error::MatchWarning;
use crate::models::{InterestGraph, Participant, Partition};

/// Full breakdown of a partition's cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Scalar objective. Lower is better.
    pub cost: f64,
    pub category_scores: Vec<f64>,
    pub affinity: Vec<TeamAffinity>,
    pub category_mean: f64,
    pub category_variance: f64,
    pub affinity_mean: f64,
    pub affinity_variance: f64,
    /// Unweighted personality balance penalty (0 when disabled).
    pub trait_penalty: f64,
}

impl Evaluation {
    /// Affinity score of each team.
    pub fn affinity_scores(&self) -> Vec<f64> {
        self.affinity.iter().map(|a| a.score).collect()
    }

    /// Indices of teams with fewer than two members.
    pub fn degenerate_teams(&self) -> Vec<usize> {
        self.affinity
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_degenerate())
            .map(|(i, _)| i)
            .collect()
    }

    /// A [`MatchWarning::DegenerateTeam`] for every degenerate team.
    pub fn warnings(&self, partition: &Partition) -> Vec<MatchWarning> {
        self.degenerate_teams()
            .into_iter()
            .map(|team| MatchWarning::DegenerateTeam {
                team,
                size: partition.teams.get(team).map_or(0, |t| t.len()),
            })
            .collect()
    }
}

/// Scores partitions of one fixed roster.
///
/// Category weights are computed once from the roster; a role-preserving
/// swap never changes the global value frequencies, so they stay valid for
/// every partition the search visits.
///
/// # Examples
///
/// ```
/// use u_teaming::models::{InterestGraph, Participant, Partition, Role, Team};
/// use u_teaming::scoring::{CategoryScoring, CostWeights, Evaluator};
///
/// let roster = vec![Participant::new(1, Role::Pm), Participant::new(2, Role::Pm)];
/// let evaluator = Evaluator::new(
///     &roster,
///     InterestGraph::default(),
///     &CategoryScoring::default(),
///     CostWeights::default(),
/// );
/// let partition = Partition::new(vec![Team::new(roster.clone())]);
/// let eval = evaluator.evaluate(&partition);
/// assert_eq!(eval.affinity_mean, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    category: CategoryScorer,
    graph: InterestGraph,
    weights: CostWeights,
    trait_balance: TraitBalanceConfig,
}

impl Evaluator {
    pub fn new<'a, I>(
        roster: I,
        graph: InterestGraph,
        scoring: &CategoryScoring,
        weights: CostWeights,
    ) -> Self
    where
        I: IntoIterator<Item = &'a Participant>,
    {
        Self {
            category: CategoryScorer::from_participants(roster, scoring),
            graph,
            weights,
            trait_balance: TraitBalanceConfig::default(),
        }
    }

    /// Uses the members of `partition` as the roster.
    pub fn for_partition(
        partition: &Partition,
        graph: InterestGraph,
        scoring: &CategoryScoring,
        weights: CostWeights,
    ) -> Self {
        Self::new(partition.members(), graph, scoring, weights)
    }

    pub fn with_trait_balance(mut self, config: TraitBalanceConfig) -> Self {
        self.trait_balance = config;
        self
    }

    pub fn graph(&self) -> &InterestGraph {
        &self.graph
    }

    pub fn category_scorer(&self) -> &CategoryScorer {
        &self.category
    }

    pub fn weights(&self) -> &CostWeights {
        &self.weights
    }

    /// Scores `partition` and combines the statistics into a cost.
    pub fn evaluate(&self, partition: &Partition) -> Evaluation {
        let category_scores = self.category.team_scores(&partition.teams);
        let category_mean = mean(&category_scores);
        let category_variance = population_variance(&category_scores);

        let affinity = team_affinities(&self.graph, &partition.teams);
        let (affinity_mean, affinity_variance) = if self.graph.is_empty() {
            (0.0, 0.0)
        } else {
            let scores: Vec<f64> = affinity.iter().map(|a| a.score).collect();
            (mean(&scores), population_variance(&scores))
        };

        let trait_penalty = if self.weights.trait_balance > 0.0 {
            trait_penalty(&partition.teams, &self.trait_balance)
        } else {
            0.0
        };

        let w = &self.weights;
        let cost = -w.category_mean * category_mean + w.category_variance * category_variance
            - w.affinity_mean * affinity_mean
            + w.affinity_variance * affinity_variance
            + w.trait_balance * trait_penalty;

        Evaluation {
            cost,
            category_scores,
            affinity,
            category_mean,
            category_variance,
            affinity_mean,
            affinity_variance,
            trait_penalty,
        }
    }

    /// Shortcut for `evaluate(partition).cost`.
    pub fn cost(&self, partition: &Partition) -> f64 {
        self.evaluate(partition).cost
    }
}

//! End-to-end match pipeline.
//!
//! template → random assignment → baseline evaluation → annealing, all
//! driven by one seeded RNG so a fixed seed reproduces the whole run.

use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::config::MatchConfig;
use super::problem::TeamProblem;
use super::report::{summarize_team, TeamSummary};
use crate::assignment::{random_assignment, RoleCensus, TeamTemplate};
use crate::error::{MatchWarning, Result, TeamingError};
use crate::models::{AffinityEdge, InterestGraph, Participant, Partition};
use crate::random::rng_from;
use crate::sa::{SaRunner, StopReason};
use crate::scoring::{Evaluation, Evaluator};

/// Bookkeeping of the annealing stage.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingStats {
    pub iterations: usize,
    pub best_iteration: usize,
    pub accepted_moves: usize,
    pub improving_moves: usize,
    pub final_temperature: f64,
    pub stop_reason: StopReason,
    /// Best cost sampled during the run; non-increasing.
    pub cost_history: Vec<f64>,
}

/// Everything a match run produces.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchOutcome {
    pub template: TeamTemplate,
    pub initial_partition: Partition,
    pub initial_cost: f64,
    /// Best partition found.
    pub partition: Partition,
    /// Breakdown of `partition`'s cost.
    pub evaluation: Evaluation,
    pub summaries: Vec<TeamSummary>,
    pub annealing: AnnealingStats,
    pub warnings: Vec<MatchWarning>,
}

impl MatchOutcome {
    /// Cost of the final partition. Lower is better.
    pub fn cost(&self) -> f64 {
        self.evaluation.cost
    }

    pub fn category_scores(&self) -> &[f64] {
        &self.evaluation.category_scores
    }

    pub fn affinity_scores(&self) -> Vec<f64> {
        self.evaluation.affinity_scores()
    }
}

/// Runs the match pipeline under a fixed [`MatchConfig`].
///
/// # Examples
///
/// ```
/// use u_teaming::matcher::{MatchConfig, TeamMatcher};
/// use u_teaming::models::{Participant, Role};
///
/// let roster: Vec<_> = (0..12)
///     .map(|i| {
///         let role = match i % 3 {
///             0 => Role::Design,
///             1 => Role::Frontend,
///             _ => Role::Backend,
///         };
///         Participant::new(i, role)
///     })
///     .collect();
///
/// let matcher = TeamMatcher::new(MatchConfig::default().with_team_count(2).with_seed(1));
/// let outcome = matcher.run(&roster, &[]).unwrap();
/// assert_eq!(outcome.partition.len(), 2);
/// assert!(outcome.cost() <= outcome.initial_cost);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TeamMatcher {
    config: MatchConfig,
}

impl TeamMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Forms teams from `participants` and `edges`.
    pub fn run(&self, participants: &[Participant], edges: &[AffinityEdge]) -> Result<MatchOutcome> {
        self.run_with_cancel(participants, edges, None)
    }

    /// Like [`run`](Self::run); the annealing loop polls `cancel` once per
    /// iteration and returns the best partition found so far when raised.
    #[instrument(skip_all, name = "team_match", fields(participants = participants.len(), edges = edges.len()))]
    pub fn run_with_cancel(
        &self,
        participants: &[Participant],
        edges: &[AffinityEdge],
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<MatchOutcome> {
        let config = &self.config;
        config.validate()?;
        validate_roster(participants)?;

        let census = RoleCensus::tally(participants, &config.quotas);
        if census.totals.total() == 0 {
            return Err(TeamingError::EmptyRoster);
        }
        let mut warnings = census.warnings();

        let (graph, edge_warnings) = InterestGraph::from_edges_checked(edges, Some(participants));
        warnings.extend(edge_warnings);

        let template = TeamTemplate::from_census(&census, &config.quotas, config.team_count)?;

        let mut rng = rng_from(config.annealing.seed);
        let initial_partition = random_assignment(participants, &template, &mut rng)?;

        let evaluator = Evaluator::for_partition(
            &initial_partition,
            graph,
            &config.category,
            config.weights,
        )
        .with_trait_balance(config.trait_balance);
        let problem = TeamProblem::new(evaluator, config.swap_attempts);

        let result = SaRunner::run_with_rng(
            &problem,
            initial_partition.clone(),
            &config.annealing,
            &mut rng,
            cancel,
        )?;

        let evaluator = problem.evaluator();
        let evaluation = evaluator.evaluate(&result.best);
        let degenerate = evaluation.warnings(&result.best);
        if !degenerate.is_empty() {
            warn!(teams = degenerate.len(), "teams too small for pairwise affinity");
        }
        warnings.extend(degenerate);

        let summaries = result
            .best
            .teams
            .iter()
            .enumerate()
            .map(|(i, team)| summarize_team(i, team, evaluator, &config.quotas))
            .collect();

        info!(
            teams = result.best.len(),
            initial_cost = result.initial_cost,
            cost = evaluation.cost,
            iterations = result.iterations,
            warnings = warnings.len(),
            "team match complete"
        );

        Ok(MatchOutcome {
            template,
            initial_partition,
            initial_cost: result.initial_cost,
            partition: result.best,
            evaluation,
            summaries,
            annealing: AnnealingStats {
                iterations: result.iterations,
                best_iteration: result.best_iteration,
                accepted_moves: result.accepted_moves,
                improving_moves: result.improving_moves,
                final_temperature: result.final_temperature,
                stop_reason: result.stop_reason,
                cost_history: result.cost_history,
            },
            warnings,
        })
    }

    /// Runs one independent optimization per seed.
    ///
    /// With the `parallel` feature the runs execute on the rayon pool;
    /// results are returned in seed order either way.
    pub fn sweep(
        &self,
        participants: &[Participant],
        edges: &[AffinityEdge],
        seeds: &[u64],
    ) -> Vec<Result<MatchOutcome>> {
        let run_seed = |&seed: &u64| {
            let config = self.config.clone().with_seed(seed);
            TeamMatcher::new(config).run(participants, edges)
        };

        #[cfg(feature = "parallel")]
        let outcomes = {
            use rayon::prelude::*;
            seeds.par_iter().map(run_seed).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let outcomes = seeds.iter().map(run_seed).collect();

        outcomes
    }

    /// Lowest-cost outcome of a [`sweep`](Self::sweep).
    ///
    /// # Errors
    ///
    /// [`TeamingError::InvalidConfig`] for an empty seed list; otherwise the
    /// first run's error if every run failed.
    pub fn best_of(
        &self,
        participants: &[Participant],
        edges: &[AffinityEdge],
        seeds: &[u64],
    ) -> Result<MatchOutcome> {
        if seeds.is_empty() {
            return Err(TeamingError::InvalidConfig(
                "best_of needs at least one seed".into(),
            ));
        }

        let mut best: Option<MatchOutcome> = None;
        let mut first_err = None;
        for result in self.sweep(participants, edges, seeds) {
            match result {
                Ok(outcome) => {
                    if best.as_ref().is_none_or(|b| outcome.cost() < b.cost()) {
                        best = Some(outcome);
                    }
                }
                Err(e) => {
                    first_err.get_or_insert(e);
                }
            }
        }

        match (best, first_err) {
            (Some(outcome), _) => Ok(outcome),
            (None, Some(e)) => Err(e),
            (None, None) => Err(TeamingError::EmptyRoster),
        }
    }
}

fn validate_roster(participants: &[Participant]) -> Result<()> {
    let mut seen = HashSet::with_capacity(participants.len());
    for p in participants {
        p.validate()?;
        if !seen.insert(p.id) {
            return Err(TeamingError::InvalidParticipant {
                participant: p.id,
                reason: "duplicate participant id".into(),
            });
        }
    }
    Ok(())
}

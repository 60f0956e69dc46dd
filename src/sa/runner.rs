//! SA execution loop.
//!
//! # Algorithm
//!
//! Each iteration draws one neighbor of the current solution and computes
//! `delta = cost(neighbor) - cost(current)`. Improvements are always
//! accepted; worsening moves are accepted with probability
//! `exp(-delta / T)` (Metropolis). After the acceptance step the best-known
//! solution is updated if the current one beats it, and the temperature is
//! cooled once.
//!
//! The returned solution is the best one ever visited, which need not be
//! the final current state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, instrument, trace};

use super::config::{CoolingSchedule, SaConfig};
use super::types::SaProblem;
use crate::error::Result;
use crate::random::rng_from;

/// Why the annealing loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// Temperature reached `min_temperature`.
    Frozen,
    /// `max_iterations` was exhausted.
    IterationLimit,
    /// The wall-clock limit elapsed.
    TimeLimit,
    /// The cancel flag was raised.
    Cancelled,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the starting solution.
    pub initial_cost: f64,

    /// Iteration (1-based) at which `best` was found; 0 if never improved.
    pub best_iteration: usize,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Which stopping condition ended the loop.
    pub stop_reason: StopReason,

    /// Best cost at the start and every `history_interval` iterations.
    /// Non-increasing.
    pub cost_history: Vec<f64>,
}

impl<S: Clone> SaResult<S> {
    /// Whether the run ended because the cancel flag was raised.
    pub fn cancelled(&self) -> bool {
        self.stop_reason == StopReason::Cancelled
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `initial`, seeding the RNG from `config.seed`.
    pub fn run<P: SaProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>> {
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(problem, initial, config, &mut rng, None)
    }

    /// Runs SA with a caller-supplied RNG and an optional cancellation flag.
    ///
    /// `config.seed` is ignored here; the caller's RNG is the single source
    /// of randomness, which keeps a whole pipeline reproducible.
    #[instrument(skip_all, name = "annealing", fields(max_iterations = config.max_iterations))]
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;

        let started = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);

        let initial_cost = problem.cost(&initial);
        let mut current = initial;
        let mut current_cost = initial_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let mut best_iteration = 0usize;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history = vec![best_cost];

        let stop_reason = loop {
            if temperature <= config.min_temperature {
                break StopReason::Frozen;
            }
            if iterations >= config.max_iterations {
                break StopReason::IterationLimit;
            }
            if cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
            {
                break StopReason::Cancelled;
            }
            if time_limit.is_some_and(|limit| started.elapsed() >= limit) {
                break StopReason::TimeLimit;
            }

            let neighbor = problem.neighbor(&current, rng);
            let neighbor_cost = problem.cost(&neighbor);
            let delta = neighbor_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else if temperature > f64::MIN_POSITIVE {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
            }

            iterations += 1;

            if current_cost < best_cost {
                best = current.clone();
                best_cost = current_cost;
                best_iteration = iterations;
                trace!(iteration = iterations, best_cost, "new best");
            }

            if iterations % config.history_interval == 0 {
                cost_history.push(best_cost);
            }

            temperature = cool(temperature, config, iterations);
        };

        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        debug!(
            iterations,
            accepted_moves,
            improving_moves,
            initial_cost,
            best_cost,
            ?stop_reason,
            "annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            best_iteration,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            stop_reason,
            cost_history,
        })
    }
}

/// Temperature after `step` completed iterations.
fn cool(temperature: f64, config: &SaConfig, step: usize) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,

        CoolingSchedule::Linear => {
            let t = config.initial_temperature
                - step as f64 * (config.initial_temperature - config.min_temperature)
                    / config.max_iterations as f64;
            t.max(config.min_temperature)
        }

        CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::sa::{CoolingSchedule, SaConfig};
    use rand::seq::SliceRandom;

    // ---- Quadratic minimization: f(x) = x^2, minimum at 0 ----

    struct QuadraticProblem;

    impl SaProblem for QuadraticProblem {
        type Solution = f64;

        fn cost(&self, x: &f64) -> f64 {
            x * x
        }

        fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
            x + rng.random_range(-1.0..1.0)
        }
    }

    #[test]
    fn test_sa_quadratic_geometric() {
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.001)
            .with_cooling_rate(0.999)
            .with_max_iterations(20_000)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, 8.0, &config).unwrap();

        assert!(
            result.best_cost < 1.0,
            "expected near-zero cost, got {}",
            result.best_cost
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves > result.improving_moves);
    }

    #[test]
    fn test_sa_quadratic_linear() {
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.001)
            .with_cooling(CoolingSchedule::Linear)
            .with_max_iterations(20_000)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, -8.0, &config).unwrap();
        assert!(result.best_cost < 1.0, "got {}", result.best_cost);
    }

    #[test]
    fn test_sa_quadratic_lundy_mees() {
        let t0 = 100.0;
        let t_min = 0.001;
        let max_iter = 20_000;
        let beta = (t0 - t_min) / (max_iter as f64 * t0 * t_min);

        let config = SaConfig::default()
            .with_initial_temperature(t0)
            .with_min_temperature(t_min)
            .with_cooling(CoolingSchedule::LundyMees { beta })
            .with_max_iterations(max_iter)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, 5.0, &config).unwrap();
        assert!(result.best_cost < 1.0, "got {}", result.best_cost);
    }

    #[test]
    fn test_sa_max_iterations_limit() {
        let config = SaConfig::default()
            .with_initial_temperature(1e10)
            .with_min_temperature(1e-15)
            .with_max_iterations(100)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, 3.0, &config).unwrap();
        assert_eq!(result.iterations, 100);
        assert_eq!(result.stop_reason, StopReason::IterationLimit);
    }

    #[test]
    fn test_sa_stops_when_frozen() {
        // 1.0 * 0.5^k <= 0.1 after 4 coolings.
        let config = SaConfig::default()
            .with_initial_temperature(1.0)
            .with_min_temperature(0.1)
            .with_cooling_rate(0.5)
            .with_seed(1);

        let result = SaRunner::run(&QuadraticProblem, 3.0, &config).unwrap();
        assert_eq!(result.iterations, 4);
        assert_eq!(result.stop_reason, StopReason::Frozen);
        assert!(result.final_temperature <= 0.1);
    }

    #[test]
    fn test_sa_cancellation() {
        let config = SaConfig::default().with_seed(42);

        // Raised before running so the outcome does not depend on timing.
        let cancel = Arc::new(AtomicBool::new(true));

        let result = SaRunner::run_with_rng(
            &QuadraticProblem,
            2.0,
            &config,
            &mut create_rng(0),
            Some(cancel),
        )
        .unwrap();
        assert!(result.cancelled());
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best, 2.0);
    }

    #[test]
    fn test_sa_invalid_config_is_error() {
        let config = SaConfig::default().with_cooling_rate(1.5);
        assert!(SaRunner::run(&QuadraticProblem, 0.0, &config).is_err());
    }

    #[test]
    fn test_sa_zero_time_limit_rejected() {
        let config = SaConfig::default().with_time_limit_ms(0).with_seed(1);
        assert!(
            SaRunner::run(&QuadraticProblem, 0.0, &config).is_err(),
            "a zero budget would stop before the first move"
        );
    }

    #[test]
    fn test_sa_cost_history_non_increasing() {
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_min_temperature(0.01)
            .with_cooling_rate(0.99)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, 9.0, &config).unwrap();

        assert_eq!(result.cost_history[0], result.initial_cost);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0] + 1e-10,
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(*result.cost_history.last().unwrap(), result.best_cost);
        assert!(result.best_cost <= result.initial_cost);
    }

    #[test]
    fn test_sa_same_seed_same_result() {
        let config = SaConfig::default().with_seed(99);
        let a = SaRunner::run(&QuadraticProblem, 4.0, &config).unwrap();
        let b = SaRunner::run(&QuadraticProblem, 4.0, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.cost_history, b.cost_history);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    // ---- Discrete: permutation sorting ----

    struct PermSortProblem {
        n: usize,
    }

    impl SaProblem for PermSortProblem {
        type Solution = Vec<usize>;

        fn cost(&self, perm: &Vec<usize>) -> f64 {
            perm.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64
        }

        fn neighbor<R: Rng>(&self, perm: &Vec<usize>, rng: &mut R) -> Vec<usize> {
            let mut new = perm.clone();
            let i = rng.random_range(0..self.n);
            let j = rng.random_range(0..self.n);
            new.swap(i, j);
            new
        }
    }

    #[test]
    fn test_sa_permutation_sort() {
        let problem = PermSortProblem { n: 10 };
        let mut rng = create_rng(42);
        let mut start: Vec<usize> = (0..10).collect();
        start.shuffle(&mut rng);

        let config = SaConfig::default()
            .with_initial_temperature(5.0)
            .with_min_temperature(0.01)
            .with_cooling_rate(0.999)
            .with_max_iterations(20_000);

        let result = SaRunner::run_with_rng(&problem, start, &config, &mut rng, None).unwrap();

        assert!(
            result.best_cost <= 4.0,
            "expected near-sorted permutation, got cost {}",
            result.best_cost
        );
    }

    #[test]
    fn test_sa_metropolis_accepts_uphill() {
        // At very high temperature, almost all moves should be accepted
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_cooling_rate(0.9999)
            .with_max_iterations(1000)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, 0.0, &config).unwrap();

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.8,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
    }
}

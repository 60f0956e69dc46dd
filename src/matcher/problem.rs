//! Team formation as an annealing problem.

use rand::Rng;

use crate::assignment::neighbor;
use crate::models::Partition;
use crate::sa::SaProblem;
use crate::scoring::Evaluator;

/// Partitions of a fixed roster, moved by role-preserving swaps and
/// scored by an [`Evaluator`].
#[derive(Debug, Clone)]
pub struct TeamProblem {
    evaluator: Evaluator,
    swap_attempts: usize,
}

impl TeamProblem {
    pub fn new(evaluator: Evaluator, swap_attempts: usize) -> Self {
        Self {
            evaluator,
            swap_attempts,
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

impl SaProblem for TeamProblem {
    type Solution = Partition;

    fn cost(&self, partition: &Partition) -> f64 {
        self.evaluator.cost(partition)
    }

    fn neighbor<R: Rng>(&self, partition: &Partition, rng: &mut R) -> Partition {
        neighbor(partition, self.swap_attempts, rng)
    }
}

//! Budgeted min-cycle problem: use as few tours as possible.

use std::fmt;
use std::sync::Arc;

use super::{MtspProblem, ProblemBase, ProblemKind};
use crate::graph::Graph;
use crate::models::Solution;

/// Minimizes the number of tours while the summed cycle cost of all tours
/// stays within a budget `B`.
///
/// The budget is checked against the grand total, not per tour. Use
/// [`max_cost`](MinCycleProblem::max_cost) to report the worst single tour.
///
/// # Examples
///
/// ```
/// use u_mtsp::graph::Graph;
/// use u_mtsp::models::Solution;
/// use u_mtsp::problem::{MinCycleProblem, MtspProblem};
///
/// let g = Graph::symmetric(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
/// let problem = MinCycleProblem::new(g, 6.0);
/// let sol = Solution::from(vec![vec![0, 1, 2]]);
/// assert_eq!(problem.objective(&sol), 1.0);
/// assert!(problem.feasible(&sol));
/// assert_eq!(problem.max_cost(&sol), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MinCycleProblem {
    base: ProblemBase,
}

impl MinCycleProblem {
    /// Creates a min-cycle problem with total cost budget `budget`.
    pub fn new(graph: impl Into<Arc<Graph>>, budget: f64) -> Self {
        Self {
            base: ProblemBase::with_budget(graph, budget),
        }
    }

    /// Sum of the cycle costs of all tours.
    pub fn total_cost(&self, solution: &Solution) -> f64 {
        solution
            .used_tours()
            .map(|t| t.closed_cost(self.graph()))
            .sum()
    }

    /// Largest cycle cost of a single tour, 0 if no tour is used.
    pub fn max_cost(&self, solution: &Solution) -> f64 {
        solution
            .used_tours()
            .map(|t| t.closed_cost(self.graph()))
            .fold(0.0, f64::max)
    }
}

impl MtspProblem for MinCycleProblem {
    fn base(&self) -> &ProblemBase {
        &self.base
    }

    fn kind(&self) -> ProblemKind {
        ProblemKind::MinCycle
    }

    /// Number of tours, empty ones included.
    fn objective(&self, solution: &Solution) -> f64 {
        solution.num_tours() as f64
    }

    fn feasible(&self, solution: &Solution) -> bool {
        solution.used_tours().all(|t| t.within(self.graph()))
            && self.total_cost(solution) <= self.base.budget()
    }
}

impl fmt::Display for MinCycleProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

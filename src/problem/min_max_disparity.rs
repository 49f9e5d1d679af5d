//! Min-max mTSP with a load-balancing penalty.

use std::fmt;
use std::sync::Arc;

use super::{MtspProblem, ProblemBase, ProblemKind};
use crate::graph::Graph;
use crate::models::Solution;

/// Minimizes the longest cycle plus the average gap between each tour and
/// the longest one.
///
/// With `mx` the largest cycle cost and `c_i` the cost of each non-empty
/// tour, the objective is `mx + Σ(mx - c_i) / k`. A `k` of zero is left to
/// the caller: the division follows IEEE rules.
///
/// # Examples
///
/// ```
/// use u_mtsp::graph::Graph;
/// use u_mtsp::models::Solution;
/// use u_mtsp::problem::{MinMaxDisparityProblem, MtspProblem};
///
/// let g = Graph::symmetric(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
/// let problem = MinMaxDisparityProblem::new(g, 2);
/// // cycles: [0, 1] = 2, [2] = 0  →  2 + (0 + 2) / 2
/// let sol = Solution::from(vec![vec![0, 1], vec![2]]);
/// assert_eq!(problem.objective(&sol), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxDisparityProblem {
    base: ProblemBase,
}

impl MinMaxDisparityProblem {
    /// Creates a disparity problem allowing at most `k` tours.
    pub fn new(graph: impl Into<Arc<Graph>>, k: usize) -> Self {
        Self {
            base: ProblemBase::with_tour_limit(graph, k),
        }
    }
}

impl MtspProblem for MinMaxDisparityProblem {
    fn base(&self) -> &ProblemBase {
        &self.base
    }

    fn kind(&self) -> ProblemKind {
        ProblemKind::MinMaxDisparity
    }

    fn objective(&self, solution: &Solution) -> f64 {
        let costs: Vec<f64> = solution
            .used_tours()
            .map(|t| t.closed_cost(self.graph()))
            .collect();
        let mx = costs.iter().copied().fold(0.0, f64::max);
        // an unreachable edge would turn the deficit into inf - inf
        if mx.is_infinite() {
            return f64::INFINITY;
        }
        let deficit: f64 = costs.iter().map(|c| mx - c).sum();
        mx + deficit / self.base.k() as f64
    }

    fn feasible(&self, solution: &Solution) -> bool {
        self.base.within_tour_limit(solution)
    }
}

impl fmt::Display for MinMaxDisparityProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

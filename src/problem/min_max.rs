//! Min-max mTSP: minimize the longest tour.

use std::fmt;
use std::sync::Arc;

use super::{MtspProblem, ProblemBase, ProblemKind};
use crate::graph::Graph;
use crate::models::Solution;

/// Minimizes the cost of the most expensive tour, using at most `k` tours.
///
/// Tour cost here is the open path: consecutive edges only, without the
/// closing edge back to the first vertex. The other variants score closed
/// cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxProblem {
    base: ProblemBase,
}

impl MinMaxProblem {
    /// Creates a min-max problem allowing at most `k` tours.
    pub fn new(graph: impl Into<Arc<Graph>>, k: usize) -> Self {
        Self {
            base: ProblemBase::with_tour_limit(graph, k),
        }
    }
}

impl MtspProblem for MinMaxProblem {
    fn base(&self) -> &ProblemBase {
        &self.base
    }

    fn kind(&self) -> ProblemKind {
        ProblemKind::MinMax
    }

    fn objective(&self, solution: &Solution) -> f64 {
        // open paths: the closing edge is not counted
        solution
            .used_tours()
            .map(|t| t.path_cost(self.graph()))
            .fold(0.0, f64::max)
    }

    fn feasible(&self, solution: &Solution) -> bool {
        self.base.within_tour_limit(solution)
    }
}

impl fmt::Display for MinMaxProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Graph {
        Graph::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)])
    }

    #[test]
    fn test_objective_is_longest_path() {
        let p = MinMaxProblem::new(line(), 2);
        let sol = Solution::from(vec![vec![0, 1], vec![1, 2, 3]]);
        assert!((p.objective(&sol) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_objective_omits_closing_edge() {
        let p = MinMaxProblem::new(line(), 1);
        let sol = Solution::from(vec![vec![0, 3]]);
        assert!((p.objective(&sol) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_vertex_and_empty_tours_cost_zero() {
        let mut g = line();
        g.set(1, 1, 9.0);
        let p = MinMaxProblem::new(g, 3);
        assert_eq!(p.objective(&Solution::from(vec![vec![1], vec![]])), 0.0);
        assert_eq!(p.objective(&Solution::new()), 0.0);
    }

    #[test]
    fn test_feasible_same_rule_as_min_sum() {
        let p = MinMaxProblem::new(line(), 1);
        assert!(p.feasible(&Solution::from(vec![vec![0, 1, 2, 3]])));
        assert!(!p.feasible(&Solution::from(vec![vec![0, 1], vec![2, 3]])));
        assert!(!p.feasible(&Solution::from(vec![vec![0, 10]])));
    }

    #[test]
    fn test_kind() {
        assert_eq!(MinMaxProblem::new(line(), 1).kind(), ProblemKind::MinMax);
    }
}

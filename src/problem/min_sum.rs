//! Min-sum mTSP: minimize the total length of all tours.

use std::fmt;
use std::sync::Arc;

use super::{MtspProblem, ProblemBase, ProblemKind};
use crate::graph::Graph;
use crate::models::Solution;

/// Minimizes the summed cycle cost of all tours, using at most `k` tours.
///
/// # Examples
///
/// ```
/// use u_mtsp::graph::Graph;
/// use u_mtsp::models::Solution;
/// use u_mtsp::problem::{MinSumProblem, MtspProblem};
///
/// let g = Graph::symmetric(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
/// let problem = MinSumProblem::new(g, 1);
/// let sol = Solution::from(vec![vec![0, 1, 2]]);
/// assert_eq!(problem.objective(&sol), 6.0);
/// assert!(problem.feasible(&sol));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MinSumProblem {
    base: ProblemBase,
}

impl MinSumProblem {
    /// Creates a min-sum problem allowing at most `k` tours.
    pub fn new(graph: impl Into<Arc<Graph>>, k: usize) -> Self {
        Self {
            base: ProblemBase::with_tour_limit(graph, k),
        }
    }
}

impl MtspProblem for MinSumProblem {
    fn base(&self) -> &ProblemBase {
        &self.base
    }

    fn kind(&self) -> ProblemKind {
        ProblemKind::MinSum
    }

    fn objective(&self, solution: &Solution) -> f64 {
        solution
            .used_tours()
            .map(|t| t.closed_cost(self.graph()))
            .sum()
    }

    fn feasible(&self, solution: &Solution) -> bool {
        self.base.within_tour_limit(solution)
    }
}

impl fmt::Display for MinSumProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph {
        // 0 - 1
        // |   |
        // 3 - 2   sides 1, diagonals 5
        Graph::symmetric(
            4,
            &[
                (0, 1, 1.0),
                (1, 2, 1.0),
                (2, 3, 1.0),
                (3, 0, 1.0),
                (0, 2, 5.0),
                (1, 3, 5.0),
            ],
        )
    }

    #[test]
    fn test_objective_sums_all_tours() {
        let p = MinSumProblem::new(square(), 2);
        let sol = Solution::from(vec![vec![0, 1], vec![2, 3]]);
        // (1 + 1) + (1 + 1)
        assert_eq!(p.objective(&sol), 4.0);
    }

    #[test]
    fn test_objective_single_cycle() {
        let p = MinSumProblem::new(square(), 1);
        assert_eq!(p.objective(&Solution::from(vec![vec![0, 1, 2, 3]])), 4.0);
        assert_eq!(p.objective(&Solution::from(vec![vec![0, 2, 1, 3]])), 5.0 + 1.0 + 5.0 + 1.0);
    }

    #[test]
    fn test_objective_skips_empty_tours() {
        let p = MinSumProblem::new(square(), 3);
        let sol = Solution::from(vec![vec![], vec![0, 1], vec![]]);
        assert_eq!(p.objective(&sol), 2.0);
        assert_eq!(p.objective(&Solution::from(vec![vec![], vec![]])), 0.0);
    }

    #[test]
    fn test_objective_single_vertex_adds_self_loop_once() {
        let mut g = square();
        g.set(2, 2, 0.5);
        let p = MinSumProblem::new(g, 1);
        assert_eq!(p.objective(&Solution::from(vec![vec![2]])), 0.5);
    }

    #[test]
    fn test_feasible_tour_limit() {
        let p = MinSumProblem::new(square(), 2);
        assert!(p.feasible(&Solution::from(vec![vec![0, 1], vec![2, 3]])));
        assert!(!p.feasible(&Solution::from(vec![vec![0], vec![1], vec![2, 3]])));
        assert!(p.feasible(&Solution::new()));
    }

    #[test]
    fn test_feasible_ignores_coverage_and_duplicates() {
        let p = MinSumProblem::new(square(), 2);
        assert!(p.feasible(&Solution::from(vec![vec![0, 0], vec![0]])));
    }

    #[test]
    fn test_out_of_range_vertex() {
        let p = MinSumProblem::new(square(), 2);
        let sol = Solution::from(vec![vec![0, 4]]);
        assert!(!p.feasible(&sol));
        assert_eq!(p.objective(&sol), f64::INFINITY);
    }

    #[test]
    fn test_accessors_and_display() {
        let p = MinSumProblem::new(Graph::new(1), 3);
        assert_eq!(p.capacity_k(), 3);
        assert_eq!(p.capacity_b(), 0.0);
        assert_eq!(p.kind(), ProblemKind::MinSum);
        assert_eq!(p.to_string(), "3 0 1 0");
    }
}

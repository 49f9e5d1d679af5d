//! State shared by every problem variant.

use std::fmt;
use std::sync::Arc;

use crate::graph::Graph;
use crate::models::Solution;

/// Graph handle plus the two capacity parameters.
///
/// Exactly one capacity is meaningful for a given variant; the other stays
/// zero. The graph sits behind an `Arc` so problems built from the same
/// graph share it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemBase {
    graph: Arc<Graph>,
    k: usize,
    budget: f64,
}

impl ProblemBase {
    /// State for a variant limited to at most `k` tours.
    pub fn with_tour_limit(graph: impl Into<Arc<Graph>>, k: usize) -> Self {
        Self {
            graph: graph.into(),
            k,
            budget: 0.0,
        }
    }

    /// State for a variant limited by a total cost budget.
    pub fn with_budget(graph: impl Into<Arc<Graph>>, budget: f64) -> Self {
        Self {
            graph: graph.into(),
            k: 0,
            budget,
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// A shared handle to the underlying graph.
    pub fn graph_handle(&self) -> Arc<Graph> {
        Arc::clone(&self.graph)
    }

    /// Maximum number of tours.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Cost budget.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Tour-count and vertex-range check used by the tour-limited variants.
    ///
    /// Coverage and duplicate visits are not checked.
    pub fn within_tour_limit(&self, solution: &Solution) -> bool {
        solution.num_tours() <= self.k && solution.used_tours().all(|t| t.within(&self.graph))
    }
}

/// `k B graph` on a single line.
impl fmt::Display for ProblemBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.k, self.budget, self.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_limit_base() {
        let base = ProblemBase::with_tour_limit(Graph::new(3), 2);
        assert_eq!(base.k(), 2);
        assert_eq!(base.budget(), 0.0);
        assert_eq!(base.graph().size(), 3);
    }

    #[test]
    fn test_budget_base() {
        let base = ProblemBase::with_budget(Graph::new(2), 7.5);
        assert_eq!(base.k(), 0);
        assert_eq!(base.budget(), 7.5);
    }

    #[test]
    fn test_shared_graph() {
        let graph = Arc::new(Graph::new(4));
        let a = ProblemBase::with_tour_limit(Arc::clone(&graph), 1);
        let b = ProblemBase::with_budget(Arc::clone(&graph), 1.0);
        assert!(Arc::ptr_eq(&a.graph_handle(), &b.graph_handle()));
        assert_eq!(Arc::strong_count(&graph), 3);
    }

    #[test]
    fn test_within_tour_limit() {
        let base = ProblemBase::with_tour_limit(Graph::new(3), 2);
        assert!(base.within_tour_limit(&Solution::from(vec![vec![0, 1], vec![2]])));
        assert!(!base.within_tour_limit(&Solution::from(vec![vec![0], vec![1], vec![2]])));
        assert!(!base.within_tour_limit(&Solution::from(vec![vec![0, 3]])));
        // empty tours still count toward k
        assert!(!base.within_tour_limit(&Solution::from(vec![vec![], vec![], vec![]])));
    }

    #[test]
    fn test_display() {
        let g = Graph::from_data(1, vec![0.0]).expect("valid");
        assert_eq!(ProblemBase::with_tour_limit(g.clone(), 2).to_string(), "2 0 1 0");
        assert_eq!(ProblemBase::with_budget(g, 2.5).to_string(), "0 2.5 1 0");
    }
}

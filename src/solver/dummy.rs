//! Baseline solver: nearest-neighbor giant tour cut into equal chunks.
//!
//! Starting from vertex 0, greedily visit the cheapest unvisited vertex
//! until every vertex is on one giant tour. Tour-limited problems then cut
//! the giant tour into `min(k, n)` contiguous chunks of near-equal length;
//! budgeted problems keep it as a single tour.
//!
//! # Complexity
//!
//! O(n²) where n = number of vertices.

use super::telemetry::{log_info, InfoLogger};
use super::Solver;
use crate::config::{Args, DummyConfig, SolverKind};
use crate::graph::Graph;
use crate::models::{Solution, Tour};
use crate::problem::MtspProblem;

/// Fast, deterministic baseline solver.
///
/// # Examples
///
/// ```
/// use u_mtsp::graph::Graph;
/// use u_mtsp::problem::{MinSumProblem, MtspProblem};
/// use u_mtsp::solver::{DummySolver, Solver};
///
/// let g = Graph::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
/// let problem = MinSumProblem::new(g, 2);
/// let solution = DummySolver::default().solve(&problem);
/// assert_eq!(solution.num_tours(), 2);
/// assert_eq!(solution.num_visits(), 4);
/// assert!(problem.feasible(&solution));
/// ```
#[derive(Clone, Default)]
pub struct DummySolver {
    config: DummyConfig,
    logger: Option<InfoLogger>,
}

impl DummySolver {
    /// Creates a dummy solver.
    pub fn new(config: DummyConfig) -> Self {
        Self {
            config,
            logger: None,
        }
    }

    /// Creates a dummy solver from parsed arguments.
    pub fn from_args(args: &Args, logger: Option<InfoLogger>) -> Self {
        Self {
            config: DummyConfig::from_args(args),
            logger,
        }
    }

    /// Sets logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// This solver's options.
    pub fn config(&self) -> &DummyConfig {
        &self.config
    }
}

impl Solver for DummySolver {
    fn kind(&self) -> SolverKind {
        SolverKind::Dummy
    }

    fn solve(&self, problem: &dyn MtspProblem) -> Solution {
        let graph = problem.graph();
        let n = graph.size();
        let tours = if problem.kind().is_budgeted() {
            1
        } else {
            problem.capacity_k().min(n)
        };

        if n == 0 || tours == 0 {
            log_info(self.logger.as_ref(), || {
                format!("dummy: nothing to route (n={n}, tours={tours})")
            });
            return Solution::new();
        }

        let order = nearest_neighbor_order(graph);
        let solution = split_even(&order, tours);
        log_info(self.logger.as_ref(), || {
            format!(
                "dummy: {} tours over {n} vertices, objective={}",
                solution.num_tours(),
                problem.objective(&solution)
            )
        });
        solution
    }
}

/// Visits every vertex once, starting at 0 and always moving to the
/// cheapest unvisited successor.
pub(crate) fn nearest_neighbor_order(graph: &Graph) -> Vec<usize> {
    let n = graph.size();
    if n == 0 {
        return Vec::new();
    }

    let mut unvisited: Vec<usize> = (1..n).collect();
    let mut order = Vec::with_capacity(n);
    let mut current = 0;
    order.push(current);

    while let Some(next) = graph.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&v| v != next);
        order.push(next);
        current = next;
    }
    order
}

/// Cuts `order` into `parts` contiguous tours whose lengths differ by at
/// most one.
pub(crate) fn split_even(order: &[usize], parts: usize) -> Solution {
    let n = order.len();
    let (base, extra) = (n / parts, n % parts);
    let mut start = 0;
    (0..parts)
        .map(|i| {
            let len = base + usize::from(i < extra);
            let tour = Tour::new(order[start..start + len].to_vec());
            start += len;
            tour
        })
        .collect()
}

//! Problem selection by name.

use std::sync::Arc;

use crate::graph::Graph;
use crate::problem::{
    Capacity, MinCycleProblem, MinMaxDisparityProblem, MinMaxProblem, MinSumProblem, Problem,
    ProblemKind,
};

/// Builds problem formulations.
///
/// # Examples
///
/// ```
/// use u_mtsp::factory::ProblemFactory;
/// use u_mtsp::graph::Graph;
/// use u_mtsp::problem::{MtspProblem, ProblemKind};
///
/// let g = Graph::new(3);
/// assert_eq!(ProblemFactory::produce("min-max", g.clone(), 2).kind(), ProblemKind::MinMax);
/// assert_eq!(ProblemFactory::produce("anything", g, 2).kind(), ProblemKind::MinSum);
/// ```
pub struct ProblemFactory;

impl ProblemFactory {
    /// Builds a tour-limited formulation by name.
    ///
    /// `"min-sum"` and `"min-max"` are recognized; any other name, including
    /// the other formulations' names, gives min-sum.
    pub fn produce(name: &str, graph: impl Into<Arc<Graph>>, k: usize) -> Problem {
        match name {
            "min-max" => MinMaxProblem::new(graph, k).into(),
            _ => MinSumProblem::new(graph, k).into(),
        }
    }

    /// Builds a min-cycle formulation with total cost budget `budget`.
    pub fn produce_budgeted(graph: impl Into<Arc<Graph>>, budget: f64) -> Problem {
        MinCycleProblem::new(graph, budget).into()
    }

    /// Builds any formulation.
    ///
    /// The capacity is read as a tour count for tour-limited kinds and as a
    /// budget for min-cycle, whichever variant of [`Capacity`] was given.
    pub fn produce_kind(kind: ProblemKind, graph: impl Into<Arc<Graph>>, capacity: Capacity) -> Problem {
        match kind {
            ProblemKind::MinSum => MinSumProblem::new(graph, capacity.as_tours()).into(),
            ProblemKind::MinMax => MinMaxProblem::new(graph, capacity.as_tours()).into(),
            ProblemKind::MinMaxDisparity => {
                MinMaxDisparityProblem::new(graph, capacity.as_tours()).into()
            }
            ProblemKind::MinCycle => MinCycleProblem::new(graph, capacity.as_budget()).into(),
        }
    }
}

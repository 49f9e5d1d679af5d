//! Problem formulations: what "better" and "valid" mean for a solution.
//!
//! Every formulation implements [`MtspProblem`]:
//!
//! - [`MinSumProblem`] — total cycle cost, at most `k` tours
//! - [`MinMaxProblem`] — longest open path, at most `k` tours
//! - [`MinMaxDisparityProblem`] — longest cycle plus a balancing penalty
//! - [`MinCycleProblem`] — number of tours under a total cost budget
//!
//! [`Problem`] is the closed set of these variants, as produced by
//! [`ProblemFactory`](crate::factory::ProblemFactory).

mod base;
mod min_cycle;
mod min_max;
mod min_max_disparity;
mod min_sum;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::models::Solution;

pub use base::ProblemBase;
pub use min_cycle::MinCycleProblem;
pub use min_max::MinMaxProblem;
pub use min_max_disparity::MinMaxDisparityProblem;
pub use min_sum::MinSumProblem;

/// Objective and feasibility of a multi-vehicle routing formulation.
///
/// Both evaluations are pure: the same problem and solution always give the
/// same answer, and neither panics on vertex indices outside the graph.
/// Implementations are `Send + Sync` so one problem can be shared by
/// concurrent solvers.
///
/// # Examples
///
/// ```
/// use u_mtsp::graph::Graph;
/// use u_mtsp::models::Solution;
/// use u_mtsp::problem::{MinMaxProblem, MtspProblem};
///
/// let g = Graph::symmetric(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
/// let problem = MinMaxProblem::new(g, 2);
/// let sol = Solution::from(vec![vec![0, 1, 2]]);
/// assert_eq!(problem.objective(&sol), 3.0);
/// assert_eq!(problem.capacity_k(), 2);
/// ```
pub trait MtspProblem: Send + Sync {
    /// Shared graph and capacity state.
    fn base(&self) -> &ProblemBase;

    /// Which formulation this is.
    fn kind(&self) -> ProblemKind;

    /// Scores a solution. Lower is better.
    fn objective(&self, solution: &Solution) -> f64;

    /// Returns `true` if the solution satisfies this formulation's
    /// constraints.
    fn feasible(&self, solution: &Solution) -> bool;

    /// The graph this problem is defined over.
    fn graph(&self) -> &Graph {
        self.base().graph()
    }

    /// A shared handle to the graph.
    fn graph_handle(&self) -> Arc<Graph> {
        self.base().graph_handle()
    }

    /// Maximum number of tours (0 for budgeted formulations).
    fn capacity_k(&self) -> usize {
        self.base().k()
    }

    /// Cost budget (0 for tour-limited formulations).
    fn capacity_b(&self) -> f64 {
        self.base().budget()
    }
}

/// Identifies a problem formulation by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemKind {
    /// `"min-sum"`
    MinSum,
    /// `"min-max"`
    MinMax,
    /// `"min-max-disparity"`
    MinMaxDisparity,
    /// `"min-cycle"`
    MinCycle,
}

impl ProblemKind {
    /// All formulations.
    pub const ALL: [ProblemKind; 4] = [
        ProblemKind::MinSum,
        ProblemKind::MinMax,
        ProblemKind::MinMaxDisparity,
        ProblemKind::MinCycle,
    ];

    /// Looks a formulation up by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// The formulation's name.
    pub fn name(self) -> &'static str {
        match self {
            ProblemKind::MinSum => "min-sum",
            ProblemKind::MinMax => "min-max",
            ProblemKind::MinMaxDisparity => "min-max-disparity",
            ProblemKind::MinCycle => "min-cycle",
        }
    }

    /// Returns `true` if this formulation is bounded by a cost budget rather
    /// than a tour count.
    pub fn is_budgeted(self) -> bool {
        self == ProblemKind::MinCycle
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The single capacity parameter a problem is built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Capacity {
    /// Maximum number of tours `k`.
    Tours(usize),
    /// Total cost budget `B`.
    Budget(f64),
}

impl Capacity {
    /// The capacity read as a tour count.
    ///
    /// A budget is truncated toward zero and saturates: negative and NaN
    /// budgets give 0, an infinite budget gives `usize::MAX`.
    pub fn as_tours(self) -> usize {
        match self {
            Capacity::Tours(k) => k,
            Capacity::Budget(b) => b.max(0.0) as usize,
        }
    }

    /// The capacity read as a cost budget.
    pub fn as_budget(self) -> f64 {
        match self {
            Capacity::Tours(k) => k as f64,
            Capacity::Budget(b) => b,
        }
    }
}

/// One of the supported formulations.
#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    /// See [`MinSumProblem`].
    MinSum(MinSumProblem),
    /// See [`MinMaxProblem`].
    MinMax(MinMaxProblem),
    /// See [`MinMaxDisparityProblem`].
    MinMaxDisparity(MinMaxDisparityProblem),
    /// See [`MinCycleProblem`].
    MinCycle(MinCycleProblem),
}

impl Problem {
    fn inner(&self) -> &dyn MtspProblem {
        match self {
            Problem::MinSum(p) => p,
            Problem::MinMax(p) => p,
            Problem::MinMaxDisparity(p) => p,
            Problem::MinCycle(p) => p,
        }
    }

    /// Returns the min-cycle formulation, if this is one.
    pub fn as_min_cycle(&self) -> Option<&MinCycleProblem> {
        match self {
            Problem::MinCycle(p) => Some(p),
            _ => None,
        }
    }
}

impl MtspProblem for Problem {
    fn base(&self) -> &ProblemBase {
        self.inner().base()
    }

    fn kind(&self) -> ProblemKind {
        self.inner().kind()
    }

    fn objective(&self, solution: &Solution) -> f64 {
        self.inner().objective(solution)
    }

    fn feasible(&self, solution: &Solution) -> bool {
        self.inner().feasible(solution)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.base(), f)
    }
}

impl From<MinSumProblem> for Problem {
    fn from(p: MinSumProblem) -> Self {
        Problem::MinSum(p)
    }
}

impl From<MinMaxProblem> for Problem {
    fn from(p: MinMaxProblem) -> Self {
        Problem::MinMax(p)
    }
}

impl From<MinMaxDisparityProblem> for Problem {
    fn from(p: MinMaxDisparityProblem) -> Self {
        Problem::MinMaxDisparity(p)
    }
}

impl From<MinCycleProblem> for Problem {
    fn from(p: MinCycleProblem) -> Self {
        Problem::MinCycle(p)
    }
}

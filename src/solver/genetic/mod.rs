//! Genetic algorithm solver.
//!
//! - [`CutTour`] — vertex permutation plus cut points
//! - [`MtspGaProblem`] — [`GaProblem`](u_metaheur::ga::GaProblem) bridge for any formulation
//! - [`GeneticSolver`] — runs [`GaRunner`] with a [`GeneticConfig`]

mod chromosome;
mod problem;

pub use chromosome::CutTour;
pub use problem::{MtspGaProblem, INFEASIBLE_PENALTY};

use u_metaheur::ga::GaRunner;

use super::telemetry::{log_info, InfoLogger};
use super::Solver;
use crate::config::{Args, GeneticConfig, SolverKind};
use crate::models::Solution;
use crate::problem::MtspProblem;

/// Searches for a solution with a genetic algorithm.
///
/// # Examples
///
/// ```
/// use u_mtsp::config::GeneticConfig;
/// use u_mtsp::graph::Graph;
/// use u_mtsp::problem::{MinSumProblem, MtspProblem};
/// use u_mtsp::solver::{GeneticSolver, Solver};
///
/// let g = Graph::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let problem = MinSumProblem::new(g, 1);
/// let config = GeneticConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
/// let solution = GeneticSolver::new(config).solve(&problem);
/// assert!(problem.feasible(&solution));
/// assert!((problem.objective(&solution) - 4.0).abs() < 1e-10);
/// ```
#[derive(Clone, Default)]
pub struct GeneticSolver {
    config: GeneticConfig,
    logger: Option<InfoLogger>,
}

impl GeneticSolver {
    /// Creates a GA solver.
    pub fn new(config: GeneticConfig) -> Self {
        Self {
            config,
            logger: None,
        }
    }

    /// Creates a GA solver from parsed arguments.
    ///
    /// Malformed options keep their defaults and are reported to `logger`.
    pub fn from_args(args: &Args, logger: Option<InfoLogger>) -> Self {
        let (config, warnings) = GeneticConfig::from_args(args);
        for warning in &warnings {
            log_info(logger.as_ref(), || format!("ga: {warning}, using default"));
        }
        Self { config, logger }
    }

    /// Sets logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// This solver's options.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }
}

impl Solver for GeneticSolver {
    fn kind(&self) -> SolverKind {
        SolverKind::Genetic
    }

    fn solve(&self, problem: &dyn MtspProblem) -> Solution {
        let n = problem.graph().size();
        if n == 0 || (!problem.kind().is_budgeted() && problem.capacity_k() == 0) {
            log_info(self.logger.as_ref(), || {
                format!("ga: nothing to route (n={n}, k={})", problem.capacity_k())
            });
            return Solution::new();
        }

        let ga_problem = MtspGaProblem::new(problem).with_logger(self.logger.as_ref());
        let result = GaRunner::run(&ga_problem, &self.config.to_ga_config());
        let solution = result.best.decode();

        log_info(self.logger.as_ref(), || {
            format!(
                "ga: finished after {} generations{}, objective={}, feasible={}",
                result.generations,
                if result.stagnated { " (stagnated)" } else { "" },
                problem.objective(&solution),
                problem.feasible(&solution)
            )
        });
        solution
    }
}

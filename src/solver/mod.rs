//! Solvers that search for solutions of a problem formulation.
//!
//! - [`DummySolver`] — nearest-neighbor baseline
//! - [`GeneticSolver`] — genetic algorithm on top of `u-metaheur`
//!
//! [`AnySolver`] is the closed set of solvers, as produced by
//! [`SolverFactory`](crate::factory::SolverFactory).

mod dummy;
pub mod genetic;
pub(crate) mod telemetry;

pub use dummy::DummySolver;
pub use genetic::GeneticSolver;
pub use telemetry::InfoLogger;

use crate::config::{SolverConfig, SolverKind};
use crate::models::Solution;
use crate::problem::MtspProblem;

/// Produces a solution for a problem formulation.
///
/// Solvers only read the problem; the returned solution is not guaranteed
/// to be feasible, so callers check it with
/// [`MtspProblem::feasible`].
pub trait Solver {
    /// Which solver this is.
    fn kind(&self) -> SolverKind;

    /// Searches for a good solution of `problem`.
    fn solve(&self, problem: &dyn MtspProblem) -> Solution;
}

/// One of the available solvers.
#[derive(Clone)]
pub enum AnySolver {
    /// See [`DummySolver`].
    Dummy(DummySolver),
    /// See [`GeneticSolver`].
    Genetic(GeneticSolver),
}

impl AnySolver {
    /// The typed options this solver was built with.
    pub fn config(&self) -> SolverConfig {
        match self {
            AnySolver::Dummy(s) => SolverConfig::Dummy(s.config().clone()),
            AnySolver::Genetic(s) => SolverConfig::Genetic(s.config().clone()),
        }
    }

    /// Sets logger.
    pub fn with_logger(self, logger: InfoLogger) -> Self {
        match self {
            AnySolver::Dummy(s) => AnySolver::Dummy(s.with_logger(logger)),
            AnySolver::Genetic(s) => AnySolver::Genetic(s.with_logger(logger)),
        }
    }
}

impl Solver for AnySolver {
    fn kind(&self) -> SolverKind {
        match self {
            AnySolver::Dummy(s) => s.kind(),
            AnySolver::Genetic(s) => s.kind(),
        }
    }

    fn solve(&self, problem: &dyn MtspProblem) -> Solution {
        match self {
            AnySolver::Dummy(s) => s.solve(problem),
            AnySolver::Genetic(s) => s.solve(problem),
        }
    }
}

impl std::fmt::Debug for AnySolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AnySolver").field(&self.config()).finish()
    }
}

impl From<DummySolver> for AnySolver {
    fn from(s: DummySolver) -> Self {
        AnySolver::Dummy(s)
    }
}

impl From<GeneticSolver> for AnySolver {
    fn from(s: GeneticSolver) -> Self {
        AnySolver::Genetic(s)
    }
}

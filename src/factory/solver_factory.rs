//! Solver selection from a configuration string.

use crate::config::{Args, SolverKind};
use crate::solver::telemetry::log_info;
use crate::solver::{AnySolver, DummySolver, GeneticSolver, InfoLogger};

/// Builds solvers from flat configuration strings.
///
/// The `name` key picks the solver (`"dummy"` or `"ga"`, default
/// `"dummy"`); unknown names give the dummy solver. All arguments, `name`
/// included, are handed to the chosen solver's constructor.
///
/// # Examples
///
/// ```
/// use u_mtsp::config::SolverKind;
/// use u_mtsp::factory::SolverFactory;
/// use u_mtsp::solver::Solver;
///
/// assert_eq!(SolverFactory::produce("").kind(), SolverKind::Dummy);
/// assert_eq!(SolverFactory::produce("name:ga seed:1").kind(), SolverKind::Genetic);
/// ```
pub struct SolverFactory;

impl SolverFactory {
    /// Builds a solver. Never fails.
    pub fn produce(config: &str) -> AnySolver {
        Self::build(config, None)
    }

    /// Builds a solver that reports to `logger`.
    pub fn produce_with_logger(config: &str, logger: InfoLogger) -> AnySolver {
        Self::build(config, Some(logger))
    }

    fn build(config: &str, logger: Option<InfoLogger>) -> AnySolver {
        let args = Args::parse(config);
        let name = args.get_or("name", SolverKind::Dummy.name());
        let kind = SolverKind::from_name(name);
        if kind.name() != name {
            log_info(logger.as_ref(), || {
                format!("unknown solver '{name}', using {}", kind.name())
            });
        }

        match kind {
            SolverKind::Dummy => DummySolver::from_args(&args, logger).into(),
            SolverKind::Genetic => GeneticSolver::from_args(&args, logger).into(),
        }
    }
}

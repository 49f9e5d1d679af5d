//! Runtime selection of problems and solvers by name.
//!
//! Both factories are total: unknown names fall back to a documented
//! default (min-sum, dummy) instead of failing.

mod problem_factory;
mod solver_factory;

pub use problem_factory::ProblemFactory;
pub use solver_factory::SolverFactory;

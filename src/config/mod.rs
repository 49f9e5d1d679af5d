//! Solver configuration.
//!
//! A flat string like `"name:ga population:80 seed:7"` is parsed once into
//! [`Args`] and then into a typed [`SolverConfig`]. Unrecognized solver
//! names resolve to the dummy solver; unknown keys are ignored.

mod args;
mod solver;

pub use args::Args;
pub use solver::{DummyConfig, GeneticConfig, SolverConfig, SolverKind};

//! # u-mtsp
//!
//! Multiple traveling-salesman problem formulations: objective and
//! feasibility evaluators for solutions made of closed tours, factories that
//! select formulations and solvers by name, and two simple solvers.
//!
//! ## Modules
//!
//! - [`graph`] — Dense weighted graph
//! - [`models`] — Tour and Solution types with their textual form
//! - [`problem`] — Formulations (min-sum, min-max, disparity, budgeted min-cycle)
//! - [`config`] — Flat configuration strings and typed solver options
//! - [`solver`] — Nearest-neighbor baseline and genetic algorithm
//! - [`factory`] — Name-based selection of problems and solvers
//!
//! ## Example
//!
//! ```
//! use u_mtsp::factory::{ProblemFactory, SolverFactory};
//! use u_mtsp::graph::Graph;
//! use u_mtsp::problem::MtspProblem;
//! use u_mtsp::solver::Solver;
//!
//! let graph = Graph::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//! let problem = ProblemFactory::produce("min-max", graph, 2);
//! let solver = SolverFactory::produce("name:dummy");
//!
//! let solution = solver.solve(&problem);
//! assert!(problem.feasible(&solution));
//! println!("{}", solution);
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod graph;
pub mod models;
pub mod problem;
pub mod solver;

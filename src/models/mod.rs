//! Domain model types for multi-vehicle routing.
//!
//! A [`Tour`] is the closed route of one vehicle and a [`Solution`] is the
//! list of tours handed to a problem for scoring.

mod solution;
mod tour;

pub use solution::Solution;
pub use tour::Tour;

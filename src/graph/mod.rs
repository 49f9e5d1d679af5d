//! Weighted graph the routing problems are defined over.
//!
//! Provides a dense cost matrix. Problems hold it behind an `Arc` so any
//! number of problem instances can share one graph.

mod matrix;

pub use matrix::Graph;

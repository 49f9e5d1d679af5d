//! Dense weighted graph.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

/// A complete directed graph over vertices `0..n` with a dense n×n cost
/// matrix stored in row-major order.
///
/// Costs need not be symmetric. Lookups outside the vertex range never
/// panic: [`cost`](Graph::cost) reports such an edge as unreachable
/// (`f64::INFINITY`).
///
/// # Examples
///
/// ```
/// use u_mtsp::graph::Graph;
///
/// let g = Graph::from_points(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
/// assert!((g.cost(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(g.size(), 3);
/// assert_eq!(g.cost(0, 7), f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    costs: Vec<f64>,
    size: usize,
}

impl Graph {
    /// Creates a graph with `size` vertices and every edge cost set to zero.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    pub fn new(size: usize) -> Self {
        let Some(len) = size.checked_mul(size) else {
            panic!("graph of size {size} does not fit in memory");
        };
        Self {
            costs: vec![0.0; len],
            size,
        }
    }

    /// Builds a Euclidean graph from planar vertex coordinates.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut g = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                let d = (dx * dx + dy * dy).sqrt();
                g.set(i, j, d);
                g.set(j, i, d);
            }
        }
        g
    }

    /// Creates a graph from an explicit row-major n×n cost grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`, or
    /// if that product overflows.
    pub fn from_data(size: usize, costs: Vec<f64>) -> Option<Self> {
        if size.checked_mul(size) != Some(costs.len()) {
            return None;
        }
        Some(Self { costs, size })
    }

    /// Builds a symmetric graph from `(i, j, cost)` triples; unlisted pairs
    /// cost zero.
    ///
    /// Triples naming a vertex outside `0..size` are skipped.
    pub fn symmetric(size: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut g = Self::new(size);
        for &(i, j, c) in edges {
            if g.contains(i) && g.contains(j) {
                g.set(i, j, c);
                g.set(j, i, c);
            }
        }
        g
    }

    /// Returns the cost of edge `from → to`, or `f64::INFINITY` when either
    /// vertex is outside the graph.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.try_cost(from, to).unwrap_or(f64::INFINITY)
    }

    /// Returns the cost of edge `from → to` if both vertices exist.
    pub fn try_cost(&self, from: usize, to: usize) -> Option<f64> {
        if self.contains(from) && self.contains(to) {
            Some(self.costs[from * self.size + to])
        } else {
            None
        }
    }

    /// Sets the cost of edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.costs[from * self.size + to] = cost;
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `vertex` is a valid index of this graph.
    pub fn contains(&self, vertex: usize) -> bool {
        vertex < self.size
    }

    /// Returns `true` if the cost matrix is symmetric within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.cost(i, j) - self.cost(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the cheapest successor of `from` among `candidates`.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates.iter().copied().min_by(|&a, &b| {
            self.cost(from, a)
                .partial_cmp(&self.cost(from, b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

/// Single-line form: the vertex count followed by all costs, row by row.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size)?;
        for c in &self.costs {
            write!(f, " {c}")?;
        }
        Ok(())
    }
}

impl FromStr for Graph {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        let mut tokens = s.split_whitespace();
        let size_token = tokens.next().ok_or(ParseError::UnexpectedEnd {
            expected: "vertex count",
        })?;
        let size: usize = size_token.parse().map_err(|_| ParseError::InvalidNumber {
            token: size_token.to_string(),
        })?;

        let costs = tokens
            .map(|t| {
                t.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    token: t.to_string(),
                })
            })
            .collect::<ParseResult<Vec<f64>>>()?;

        let found = costs.len();
        Self::from_data(size, costs).ok_or(ParseError::CostCount { size, found })
    }
}

//! Tour type.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// An ordered sequence of vertices travelled by one vehicle.
///
/// A tour is a closed cycle: after the last vertex the vehicle returns to
/// the first one (the *closing edge*). An empty tour marks an unused
/// vehicle slot and costs nothing.
///
/// # Examples
///
/// ```
/// use u_mtsp::graph::Graph;
/// use u_mtsp::models::Tour;
///
/// let g = Graph::symmetric(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]);
/// let tour = Tour::new(vec![0, 1, 2]);
/// assert_eq!(tour.path_cost(&g), 3.0);
/// assert_eq!(tour.closed_cost(&g), 6.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    vertices: Vec<usize>,
}

impl Tour {
    /// Creates a tour visiting `vertices` in order.
    pub fn new(vertices: Vec<usize>) -> Self {
        Self { vertices }
    }

    /// Creates an empty tour (an unused vehicle).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a vertex to the end of this tour.
    pub fn push(&mut self, vertex: usize) {
        self.vertices.push(vertex);
    }

    /// Returns the vertices in visit order.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of vertices on this tour.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if this tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex, if any.
    pub fn first(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    /// Last vertex, if any.
    pub fn last(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Returns the same cycle traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.vertices.iter().rev().copied().collect())
    }

    /// Returns `true` if every vertex exists in `graph`.
    pub fn within(&self, graph: &Graph) -> bool {
        self.vertices.iter().all(|&v| graph.contains(v))
    }

    /// Sum of consecutive edge costs, without returning to the start.
    pub fn path_cost(&self, graph: &Graph) -> f64 {
        self.vertices
            .windows(2)
            .map(|w| graph.cost(w[0], w[1]))
            .sum()
    }

    /// Cost of the full cycle: consecutive edges plus the closing edge
    /// `last → first`.
    ///
    /// A single-vertex tour costs its self-loop `cost(v, v)`; an empty tour
    /// costs 0.
    pub fn closed_cost(&self, graph: &Graph) -> f64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => self.path_cost(graph) + graph.cost(last, first),
            _ => 0.0,
        }
    }
}

impl From<Vec<usize>> for Tour {
    fn from(vertices: Vec<usize>) -> Self {
        Self::new(vertices)
    }
}

//! Giant tour with cut points.
//!
//! A permutation of all vertices plus a sorted set of cut positions. Cutting
//! the permutation at those positions yields the tours of a solution, so a
//! chromosome with `c` cuts decodes into `c + 1` tours.

use u_metaheur::ga::Individual;

use crate::models::{Solution, Tour};

/// A vertex permutation split into tours at `cuts`.
///
/// Cut positions lie strictly inside the permutation (`1..len`), are sorted
/// and distinct.
///
/// # Examples
///
/// ```
/// use u_mtsp::solver::genetic::CutTour;
/// use u_metaheur::ga::Individual;
///
/// let chromosome = CutTour::new(vec![3, 1, 0, 2], vec![1, 3]);
/// assert_eq!(chromosome.decode().num_tours(), 3);
/// assert_eq!(chromosome.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone)]
pub struct CutTour {
    order: Vec<usize>,
    cuts: Vec<usize>,
    fitness: f64,
}

impl CutTour {
    /// Creates a chromosome; cuts are sorted, deduplicated and restricted to
    /// interior positions.
    pub fn new(order: Vec<usize>, mut cuts: Vec<usize>) -> Self {
        let n = order.len();
        cuts.retain(|&c| c > 0 && c < n);
        cuts.sort_unstable();
        cuts.dedup();
        Self {
            order,
            cuts,
            fitness: f64::INFINITY,
        }
    }

    /// Returns the vertex permutation.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns a mutable reference to the vertex permutation.
    pub fn order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.order
    }

    /// Returns the cut positions.
    pub fn cuts(&self) -> &[usize] {
        &self.cuts
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the permutation is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Toggles a cut at `position`: removes it if present, otherwise adds
    /// it when fewer than `max_cuts` exist or moves the cut at `replace`
    /// there.
    pub fn toggle_cut(&mut self, position: usize, max_cuts: usize, replace: usize) {
        if position == 0 || position >= self.order.len() {
            return;
        }
        match self.cuts.binary_search(&position) {
            Ok(i) => {
                self.cuts.remove(i);
            }
            Err(i) if self.cuts.len() < max_cuts => self.cuts.insert(i, position),
            Err(_) if !self.cuts.is_empty() => {
                let idx = replace % self.cuts.len();
                self.cuts[idx] = position;
                self.cuts.sort_unstable();
            }
            Err(_) => {}
        }
    }

    /// Cuts the permutation into tours.
    pub fn decode(&self) -> Solution {
        let mut bounds = Vec::with_capacity(self.cuts.len() + 2);
        bounds.push(0);
        bounds.extend_from_slice(&self.cuts);
        bounds.push(self.order.len());
        bounds
            .windows(2)
            .map(|w| Tour::new(self.order[w[0]..w[1]].to_vec()))
            .collect()
    }
}

impl Individual for CutTour {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

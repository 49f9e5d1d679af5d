//! GA problem definition for mTSP formulations.
//!
//! Implements the [`GaProblem`](u_metaheur::ga::GaProblem) trait over
//! [`CutTour`] chromosomes for any [`MtspProblem`].
//!
//! # Operators
//!
//! - **Crossover**: Order crossover (OX) on the permutation; each child
//!   keeps the cuts of the parent it inherits position order from
//! - **Mutation**: swap, invert (2-opt), or toggle one cut, with equal
//!   probability
//! - **Evaluation**: decode → objective, plus a flat penalty when the
//!   decoded solution is infeasible

use rand::seq::index::sample;
use rand::Rng;
use u_metaheur::ga::operators::{invert_mutation, order_crossover, swap_mutation};
use u_metaheur::ga::GaProblem;

use super::chromosome::CutTour;
use crate::problem::MtspProblem;
use crate::solver::telemetry::{log_info, InfoLogger};

/// Added to the objective of infeasible solutions so any feasible solution
/// ranks ahead of them.
pub const INFEASIBLE_PENALTY: f64 = 1e9;

/// Generations between two progress log lines.
const LOG_EVERY: usize = 25;

/// Bridges an [`MtspProblem`] to the generic GA engine.
///
/// Chromosomes permute all `n` vertices of the problem's graph. Tour-limited
/// formulations allow at most `k - 1` cuts (`k` tours); budgeted ones allow
/// up to `n - 1`.
pub struct MtspGaProblem<'a> {
    problem: &'a dyn MtspProblem,
    max_cuts: usize,
    logger: Option<&'a InfoLogger>,
}

impl<'a> MtspGaProblem<'a> {
    /// Wraps `problem` for the GA engine.
    pub fn new(problem: &'a dyn MtspProblem) -> Self {
        let n = problem.graph().size();
        let max_tours = if problem.kind().is_budgeted() {
            n
        } else {
            problem.capacity_k().min(n)
        };
        Self {
            problem,
            max_cuts: max_tours.saturating_sub(1),
            logger: None,
        }
    }

    /// Reports progress to `logger`.
    pub fn with_logger(mut self, logger: Option<&'a InfoLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Most cuts a chromosome may carry.
    pub fn max_cuts(&self) -> usize {
        self.max_cuts
    }

    fn num_vertices(&self) -> usize {
        self.problem.graph().size()
    }
}

impl GaProblem for MtspGaProblem<'_> {
    type Individual = CutTour;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> CutTour {
        let n = self.num_vertices();
        let mut perm: Vec<usize> = (0..n).collect();

        // Fisher-Yates shuffle
        for i in (1..perm.len()).rev() {
            let j = rng.random_range(0..=i as u64) as usize;
            perm.swap(i, j);
        }

        let count = rng.random_range(0..=self.max_cuts as u64) as usize;
        let cuts = if n < 2 || count == 0 {
            Vec::new()
        } else {
            sample(rng, n - 1, count.min(n - 1))
                .into_iter()
                .map(|c| c + 1)
                .collect()
        };

        CutTour::new(perm, cuts)
    }

    fn evaluate(&self, individual: &CutTour) -> f64 {
        let solution = individual.decode();
        let objective = self.problem.objective(&solution);
        if objective.is_nan() {
            return f64::INFINITY;
        }
        if self.problem.feasible(&solution) {
            objective
        } else {
            INFEASIBLE_PENALTY + objective
        }
    }

    fn crossover<R: Rng>(&self, parent1: &CutTour, parent2: &CutTour, rng: &mut R) -> Vec<CutTour> {
        if parent1.len() < 2 {
            return vec![parent1.clone(), parent2.clone()];
        }
        let (c1, c2) = order_crossover(parent1.order(), parent2.order(), rng);
        vec![
            CutTour::new(c1, parent1.cuts().to_vec()),
            CutTour::new(c2, parent2.cuts().to_vec()),
        ]
    }

    fn mutate<R: Rng>(&self, individual: &mut CutTour, rng: &mut R) {
        let n = individual.len();
        if n < 2 {
            return;
        }
        match rng.random_range(0..3u64) {
            0 => swap_mutation(individual.order_mut(), rng),
            1 => invert_mutation(individual.order_mut(), rng),
            _ => {
                let position = rng.random_range(1..n as u64) as usize;
                let replace = rng.random_range(0..n as u64) as usize;
                individual.toggle_cut(position, self.max_cuts, replace);
            }
        }
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        if generation % LOG_EVERY == 0 {
            log_info(self.logger, || {
                format!("ga: generation {generation}, best fitness {best_fitness:.4}")
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::problem::{MinCycleProblem, MinMaxProblem, MinSumProblem};
    use u_metaheur::ga::Individual;

    fn line() -> Graph {
        Graph::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)])
    }

    #[test]
    fn test_max_cuts() {
        let g = line();
        assert_eq!(MtspGaProblem::new(&MinSumProblem::new(g.clone(), 3)).max_cuts(), 2);
        assert_eq!(MtspGaProblem::new(&MinSumProblem::new(g.clone(), 9)).max_cuts(), 3);
        assert_eq!(MtspGaProblem::new(&MinSumProblem::new(g.clone(), 0)).max_cuts(), 0);
        assert_eq!(MtspGaProblem::new(&MinCycleProblem::new(g, 5.0)).max_cuts(), 3);
    }

    #[test]
    fn test_create_individual() {
        let p = MinSumProblem::new(line(), 2);
        let ga = MtspGaProblem::new(&p);
        let mut rng = u_numflow::random::create_rng(42);
        for _ in 0..20 {
            let ind = ga.create_individual(&mut rng);
            let mut sorted = ind.order().to_vec();
            sorted.sort();
            assert_eq!(sorted, vec![0, 1, 2, 3]);
            assert!(ind.cuts().len() <= 1);
            assert_eq!(ind.fitness(), f64::INFINITY);
        }
    }

    #[test]
    fn test_evaluate_feasible() {
        let p = MinSumProblem::new(line(), 2);
        let ga = MtspGaProblem::new(&p);
        let ind = CutTour::new(vec![0, 1, 2, 3], vec![2]);
        // [0, 1] = 2, [2, 3] = 2
        assert!((ga.evaluate(&ind) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_evaluate_penalizes_infeasible() {
        let p = MinCycleProblem::new(line(), 5.0);
        let ga = MtspGaProblem::new(&p);
        // one tour costs 6 > 5
        let ind = CutTour::new(vec![0, 1, 2, 3], vec![]);
        assert_eq!(ga.evaluate(&ind), INFEASIBLE_PENALTY + 1.0);
        // [0, 1] = 2, [2, 3] = 2: total 4 fits
        let ind = CutTour::new(vec![0, 1, 2, 3], vec![2]);
        assert_eq!(ga.evaluate(&ind), 2.0);
    }

    #[test]
    fn test_crossover_preserves_genes() {
        let p = MinMaxProblem::new(line(), 2);
        let ga = MtspGaProblem::new(&p);
        let p1 = CutTour::new(vec![0, 1, 2, 3], vec![1]);
        let p2 = CutTour::new(vec![3, 1, 0, 2], vec![2]);
        let mut rng = u_numflow::random::create_rng(42);
        let children = ga.crossover(&p1, &p2, &mut rng);
        assert_eq!(children.len(), 2);
        for child in &children {
            let mut sorted = child.order().to_vec();
            sorted.sort();
            assert_eq!(sorted, vec![0, 1, 2, 3]);
        }
        assert_eq!(children[0].cuts(), &[1]);
        assert_eq!(children[1].cuts(), &[2]);
    }

    #[test]
    fn test_mutate_preserves_genes_and_cut_limit() {
        let p = MinSumProblem::new(line(), 2);
        let ga = MtspGaProblem::new(&p);
        let mut ind = CutTour::new(vec![0, 1, 2, 3], vec![2]);
        let mut rng = u_numflow::random::create_rng(7);
        for _ in 0..50 {
            ga.mutate(&mut ind, &mut rng);
            let mut sorted = ind.order().to_vec();
            sorted.sort();
            assert_eq!(sorted, vec![0, 1, 2, 3]);
            assert!(ind.cuts().len() <= 1);
        }
    }
}

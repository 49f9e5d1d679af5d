use proptest::prelude::*;
use u_mtsp::factory::{ProblemFactory, SolverFactory};
use u_mtsp::graph::Graph;
use u_mtsp::models::{Solution, Tour};
use u_mtsp::problem::{
    MinCycleProblem, MinMaxDisparityProblem, MinMaxProblem, MinSumProblem, MtspProblem,
};
use u_mtsp::solver::Solver;

prop_compose! {
    /// Symmetric graph with small integer costs, so sums are exact.
    fn symmetric_graph(max_size: usize)
    (n in 1..=max_size)
    (costs in prop::collection::vec(0u32..20, n * n), n in Just(n)) -> Graph {
        let mut g = Graph::new(n);
        for i in 0..n {
            for j in i..n {
                let c = costs[i * n + j] as f64;
                g.set(i, j, c);
                g.set(j, i, c);
            }
        }
        g
    }
}

prop_compose! {
    fn graph_and_solution()
    (g in symmetric_graph(8))
    (tours in prop::collection::vec(prop::collection::vec(0..g.size(), 0..6), 0..5), g in Just(g))
    -> (Graph, Solution) {
        (g, Solution::from(tours))
    }
}

prop_compose! {
    fn graph_and_tour()
    (g in symmetric_graph(8))
    (tour in prop::collection::vec(0..g.size(), 2..8), g in Just(g)) -> (Graph, Vec<usize>) {
        (g, tour)
    }
}

proptest! {
    #[test]
    fn min_sum_is_invariant_under_tour_reversal((g, tour) in graph_and_tour()) {
        let p = MinSumProblem::new(g, 1);
        let forward = Solution::from(vec![tour.clone()]);
        let backward = Solution::from_tours(vec![Tour::new(tour).reversed()]);
        prop_assert_eq!(p.objective(&forward), p.objective(&backward));
    }

    #[test]
    fn min_sum_exceeds_min_max_by_the_closing_edge((g, tour) in graph_and_tour()) {
        let closing = g.cost(tour[tour.len() - 1], tour[0]);
        let sol = Solution::from(vec![tour]);
        let min_sum = MinSumProblem::new(g.clone(), 1);
        let min_max = MinMaxProblem::new(g, 1);
        prop_assert_eq!(min_sum.objective(&sol) - min_max.objective(&sol), closing);
    }

    #[test]
    fn empty_tours_score_zero_except_min_cycle(g in symmetric_graph(6), m in 0usize..6) {
        let sol = Solution::from(vec![Vec::<usize>::new(); m]);
        prop_assert_eq!(MinSumProblem::new(g.clone(), m).objective(&sol), 0.0);
        prop_assert_eq!(MinMaxProblem::new(g.clone(), m).objective(&sol), 0.0);
        prop_assert_eq!(MinMaxDisparityProblem::new(g.clone(), m.max(1)).objective(&sol), 0.0);
        prop_assert_eq!(MinCycleProblem::new(g, 0.0).objective(&sol), m as f64);
    }

    #[test]
    fn disparity_of_equal_tours_is_their_cost(c in 0u32..50, m in 1usize..5, k in 1usize..6) {
        // every vertex has a self-loop of cost c, so each single-vertex tour costs c
        let mut g = Graph::new(m);
        for v in 0..m {
            g.set(v, v, c as f64);
        }
        let sol = Solution::from((0..m).map(|v| vec![v]).collect::<Vec<_>>());
        prop_assert_eq!(MinMaxDisparityProblem::new(g, k).objective(&sol), c as f64);
    }

    #[test]
    fn min_cycle_budget_is_inclusive((g, sol) in graph_and_solution(), excess in 1u32..10) {
        let total = MinCycleProblem::new(g.clone(), 0.0).total_cost(&sol);
        prop_assert!(MinCycleProblem::new(g.clone(), total).feasible(&sol));
        prop_assert!(!MinCycleProblem::new(g, total - excess as f64).feasible(&sol));
    }

    #[test]
    fn out_of_range_vertices_are_infeasible_not_panics(
        (g, sol) in graph_and_solution(),
        offset in 0usize..5,
        k in 0usize..6,
    ) {
        let mut tours: Vec<Tour> = sol.tours().to_vec();
        tours.push(Tour::new(vec![g.size() + offset]));
        let bad = Solution::from_tours(tours);
        let k = k.max(bad.num_tours());

        let min_sum = MinSumProblem::new(g.clone(), k);
        let min_max = MinMaxProblem::new(g.clone(), k);
        let disparity = MinMaxDisparityProblem::new(g.clone(), k);
        let min_cycle = MinCycleProblem::new(g, 1e12);
        prop_assert!(!min_sum.feasible(&bad));
        prop_assert!(!min_max.feasible(&bad));
        prop_assert!(!disparity.feasible(&bad));
        prop_assert!(!min_cycle.feasible(&bad));
        prop_assert!(!disparity.objective(&bad).is_nan());
        let _ = (min_sum.objective(&bad), min_max.objective(&bad), min_cycle.max_cost(&bad));
    }

    #[test]
    fn unknown_problem_name_behaves_like_min_sum(
        (g, sol) in graph_and_solution(),
        name in "[a-z-]{0,12}",
        k in 0usize..6,
    ) {
        prop_assume!(name != "min-max");
        let unknown = ProblemFactory::produce(&name, g.clone(), k);
        let min_sum = ProblemFactory::produce("min-sum", g, k);
        prop_assert_eq!(unknown.objective(&sol), min_sum.objective(&sol));
        prop_assert_eq!(unknown.feasible(&sol), min_sum.feasible(&sol));
    }

    #[test]
    fn evaluation_is_deterministic((g, sol) in graph_and_solution(), k in 1usize..6) {
        let p = ProblemFactory::produce("min-max", g, k);
        prop_assert_eq!(p.objective(&sol), p.objective(&sol));
        prop_assert_eq!(p.feasible(&sol), p.feasible(&sol));
    }

    #[test]
    fn solution_text_round_trips((_, sol) in graph_and_solution()) {
        let parsed: Solution = sol.to_string().parse().expect("own textual form");
        prop_assert_eq!(parsed, sol);
    }

    #[test]
    fn dummy_solver_output_is_feasible(g in symmetric_graph(8), k in 1usize..5) {
        let p = ProblemFactory::produce("min-sum", g, k);
        let sol = SolverFactory::produce("").solve(&p);
        prop_assert!(p.feasible(&sol));
        prop_assert_eq!(sol.num_visits(), p.graph().size());
    }
}

//! Exact TSP by depth-first branch-and-bound.
//!
//! # Algorithm
//!
//! 1. Snapshot the graph into a dense distance matrix (+inf where no edge).
//! 2. Seed the incumbent with the nearest-neighbor tour from vertex 0.
//! 3. Expand frames depth-first, children in ascending vertex order. A
//!    terminal child replaces the incumbent if its closed cost is strictly
//!    lower; a non-terminal child is expanded only if its lower bound does
//!    not exceed the incumbent cost.
//!
//! # Complexity
//!
//! Exponential in the worst case; intended for small instances (≲ 15
//! vertices). Memory is O(n²) per recursion level.

use log::{debug, info};

use super::frame::SearchFrame;
use super::greedy::nearest_neighbor_tour;
use crate::config::ExactConfig;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::models::{Tour, TspSolver};

/// Search counters from the last run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frames whose children were generated.
    pub expanded: usize,
    /// Children discarded by the lower bound.
    pub pruned: usize,
    /// Times a terminal frame improved the incumbent.
    pub improvements: usize,
}

struct Search<'a> {
    distances: &'a DistanceMatrix,
    best_cost: f64,
    best_path: Vec<usize>,
    stats: SearchStats,
}

impl Search<'_> {
    fn traverse(&mut self, frame: &SearchFrame) {
        self.stats.expanded += 1;
        for pos in 0..frame.active.len() {
            let child = frame.child(pos, self.distances);
            if child.is_terminal() {
                let cost = child.tour_cost(self.distances);
                if cost < self.best_cost {
                    self.best_cost = cost;
                    self.best_path = child.path;
                    self.stats.improvements += 1;
                }
            } else if child.lower_bound(self.distances) <= self.best_cost {
                self.traverse(&child);
            } else {
                self.stats.pruned += 1;
            }
        }
    }
}

/// Runs branch-and-bound over a distance matrix.
///
/// Returns the optimal visiting order (starting at 0) and its closed cost.
/// The cost is +inf if no finite tour exists.
///
/// # Examples
///
/// ```
/// use metric_tsp::distance::DistanceMatrix;
/// use metric_tsp::exact::branch_and_bound;
///
/// // Nearest-neighbor from 0 goes 0→1→2→3 (cost 1+1+5+6 = 13);
/// // 0→1→3→2 costs 1+2+5+2 = 10.
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 2.0, 6.0,
///     1.0, 0.0, 1.0, 2.0,
///     2.0, 1.0, 0.0, 5.0,
///     6.0, 2.0, 5.0, 0.0,
/// ]).unwrap();
///
/// let (order, cost, _) = branch_and_bound(&dm);
/// assert_eq!(cost, 10.0);
/// assert_eq!(order, vec![0, 1, 3, 2]);
/// ```
pub fn branch_and_bound(distances: &DistanceMatrix) -> (Vec<usize>, f64, SearchStats) {
    let n = distances.size();
    if n == 0 {
        return (Vec::new(), 0.0, SearchStats::default());
    }

    let (seed_path, seed_cost) = nearest_neighbor_tour(distances, 0);
    debug!("branch-and-bound: n={n} greedy seed cost={seed_cost}");

    let mut search = Search {
        distances,
        best_cost: seed_cost,
        best_path: seed_path,
        stats: SearchStats::default(),
    };
    let root = SearchFrame::root(n);
    if !root.is_terminal() {
        search.traverse(&root);
    }

    debug!(
        "branch-and-bound: expanded={} pruned={} improvements={}",
        search.stats.expanded, search.stats.pruned, search.stats.improvements
    );
    (search.best_path, search.best_cost, search.stats)
}

/// Exact solver over a [`Graph`].
///
/// Vertex indices follow the graph's insertion order; the tour starts at
/// the first vertex.
#[derive(Debug, Clone, Default)]
pub struct BranchAndBound {
    config: ExactConfig,
    last: Option<Tour>,
    stats: SearchStats,
}

impl BranchAndBound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExactConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Counters from the last [`calculate_optimum`](TspSolver::calculate_optimum).
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl TspSolver for BranchAndBound {
    fn calculate_optimum(&mut self, graph: &Graph) -> Result<Tour> {
        let n = graph.num_vertices();
        if n == 0 {
            return Err(Error::invalid_input("graph has no vertices"));
        }
        if let Some(max) = self.config.max_vertices {
            if n > max {
                return Err(Error::TooManyVertices { found: n, max });
            }
        }

        let distances = DistanceMatrix::from_graph(graph);
        let (order, cost, stats) = branch_and_bound(&distances);
        self.stats = stats;
        if !cost.is_finite() {
            return Err(Error::NoHamiltonianCycle);
        }

        let path = order
            .into_iter()
            .map(|i| graph.vertex_at(i).id().clone())
            .collect();
        let tour = Tour::from_path(graph, path)?;
        info!("exact: {tour}");
        self.last = Some(tour.clone());
        Ok(tour)
    }

    fn last_tour(&self) -> Option<&Tour> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VertexId;

    fn build(n: usize, edges: &[(usize, usize, f64)]) -> Graph {
        let mut g = Graph::with_vertices(n);
        for &(a, b, w) in edges {
            g.connect(&VertexId::sequential(a), &VertexId::sequential(b), w)
                .expect("vertices exist");
        }
        g
    }

    fn complete(n: usize, weight: impl Fn(usize, usize) -> f64) -> Graph {
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((i, j, weight(i, j)));
            }
        }
        build(n, &edges)
    }

    /// Exhaustive minimum over all tours starting at 0.
    fn brute_force(dm: &DistanceMatrix) -> f64 {
        fn permute(dm: &DistanceMatrix, order: &mut Vec<usize>, rest: &mut Vec<usize>, best: &mut f64) {
            if rest.is_empty() {
                *best = best.min(dm.tour_cost(order));
                return;
            }
            for i in 0..rest.len() {
                let v = rest.remove(i);
                order.push(v);
                permute(dm, order, rest, best);
                order.pop();
                rest.insert(i, v);
            }
        }
        let mut best = f64::INFINITY;
        let mut rest: Vec<usize> = (1..dm.size()).collect();
        permute(dm, &mut vec![0], &mut rest, &mut best);
        best
    }

    #[test]
    fn test_four_vertex_metric() {
        let g = build(
            4,
            &[
                (0, 1, 4.3),
                (0, 2, 1.2),
                (0, 3, 2.3),
                (1, 2, 3.1),
                (1, 3, 2.0),
                (2, 3, 1.1),
            ],
        );
        let mut solver = BranchAndBound::new();
        let tour = solver.calculate_optimum(&g).expect("complete graph");
        // cycles: 0-1-2-3 = 10.8, 0-1-3-2 = 8.6, 0-2-1-3 = 8.6
        assert!((tour.cost() - 8.6).abs() < 1e-9);
        assert!(tour.is_hamiltonian_cycle(&g));
        assert_eq!(tour.vertices()[0], VertexId::from("V0"));
        assert_eq!(solver.last_optimal_path().map(<[crate::models::Edge]>::len), Some(4));
    }

    #[test]
    fn test_matches_brute_force() {
        // Deterministic pseudo-random weights.
        let g = complete(7, |i, j| ((i * 37 + j * 11) % 17) as f64 + 1.0);
        let dm = DistanceMatrix::from_graph(&g);
        let (order, cost, stats) = branch_and_bound(&dm);
        assert!((cost - brute_force(&dm)).abs() < 1e-9);
        assert!((dm.tour_cost(&order) - cost).abs() < 1e-9);
        assert!(stats.expanded > 0);
    }

    #[test]
    fn test_greedy_seed_already_optimal() {
        // Points on a line: nearest-neighbor from 0 is optimal.
        let g = complete(5, |i, j| (j - i) as f64);
        let mut solver = BranchAndBound::new();
        let tour = solver.calculate_optimum(&g).expect("complete graph");
        assert!((tour.cost() - 8.0).abs() < 1e-9);
        assert_eq!(tour.len(), 5);
        assert!(tour.is_hamiltonian_cycle(&g));
        assert_eq!(solver.stats().improvements, 0);
    }

    #[test]
    fn test_single_vertex() {
        let g = Graph::with_vertices(1);
        let tour = BranchAndBound::new().calculate_optimum(&g).expect("trivial");
        assert_eq!(tour.cost(), 0.0);
        assert_eq!(tour.path_as_string(), "V0");
    }

    #[test]
    fn test_empty_graph() {
        assert!(matches!(
            BranchAndBound::new().calculate_optimum(&Graph::new()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_incomplete_graph_uses_existing_edges() {
        // 4-cycle without diagonals: the only tour is the cycle itself.
        let g = build(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)]);
        let tour = BranchAndBound::new().calculate_optimum(&g).expect("cycle exists");
        assert!((tour.cost() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_hamiltonian_cycle() {
        // Star: centre 0 with three leaves.
        let g = build(4, &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)]);
        assert_eq!(
            BranchAndBound::new().calculate_optimum(&g),
            Err(Error::NoHamiltonianCycle)
        );
    }

    #[test]
    fn test_vertex_cap() {
        let g = complete(6, |_, _| 1.0);
        let mut solver = BranchAndBound::with_config(ExactConfig::default().with_max_vertices(5));
        assert_eq!(
            solver.calculate_optimum(&g),
            Err(Error::TooManyVertices { found: 6, max: 5 })
        );
        assert!(solver.last_tour().is_none());
    }
}

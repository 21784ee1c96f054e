//! Solver trait.

use super::{Edge, Tour};
use crate::error::Result;
use crate::graph::Graph;

/// Common interface of the exact and approximation TSP solvers.
///
/// A solver keeps the last tour it computed so callers can inspect the
/// realized path after [`calculate_optimum`](TspSolver::calculate_optimum).
///
/// # Examples
///
/// ```
/// use metric_tsp::graph::Graph;
/// use metric_tsp::models::TspSolver;
/// use metric_tsp::exact::BranchAndBound;
///
/// let mut g = Graph::with_vertices(3);
/// g.connect(&"V0".into(), &"V1".into(), 1.0).unwrap();
/// g.connect(&"V1".into(), &"V2".into(), 1.0).unwrap();
/// g.connect(&"V2".into(), &"V0".into(), 1.0).unwrap();
///
/// let mut solver = BranchAndBound::new();
/// let tour = solver.calculate_optimum(&g).unwrap();
/// assert_eq!(tour.cost(), 3.0);
/// assert_eq!(solver.last_optimal_path().map(|p| p.len()), Some(3));
/// ```
pub trait TspSolver {
    /// Computes a tour over every vertex of `graph` and remembers it.
    fn calculate_optimum(&mut self, graph: &Graph) -> Result<Tour>;

    /// The last tour computed, if any.
    fn last_tour(&self) -> Option<&Tour>;

    /// Edge sequence of the last computed tour.
    fn last_optimal_path(&self) -> Option<&[Edge]> {
        self.last_tour().map(Tour::edges)
    }

    /// Human-readable vertex order of the last computed tour.
    ///
    /// Empty if nothing has been computed yet.
    fn path_as_string(&self) -> String {
        self.last_tour()
            .map(Tour::path_as_string)
            .unwrap_or_default()
    }
}

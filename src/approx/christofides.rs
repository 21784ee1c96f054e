//! MST + matching 1.5-approximation.
//!
//! # Algorithm
//!
//! 1. Kruskal minimum spanning tree.
//! 2. Subgraph induced by the odd-degree tree vertices.
//! 3. Greedy matching over that subgraph (leftovers optionally paired).
//! 4. Eulerian circuit over tree ∪ matching, from the first vertex.
//! 5. Shortcut repeated vertices and realize the order with the graph's
//!    direct edges.
//!
//! On a metric graph the tour costs at most 1.5× the optimum when the
//! matching is minimum; the greedy matching trades that guarantee for
//! simplicity.
//!
//! # Reference
//!
//! Christofides, N. (1976). "Worst-case analysis of a new heuristic for the
//! travelling salesman problem", Report 388, GSIA, Carnegie-Mellon University.

use log::{debug, info, warn};

use super::eulerian::{shortcut, Multigraph};
use super::matching::{greedy_matching, pair_unmatched};
use super::odd_vertices::odd_degree_subgraph;
use super::spanning_tree::minimum_spanning_tree;
use crate::config::ApproximationConfig;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::models::{Tour, TspSolver};

/// Approximate solver over a [`Graph`].
///
/// # Examples
///
/// ```
/// use metric_tsp::approx::Christofides;
/// use metric_tsp::graph::Graph;
/// use metric_tsp::models::TspSolver;
///
/// let mut g = Graph::with_vertices(3);
/// g.connect(&"V0".into(), &"V1".into(), 1.0).unwrap();
/// g.connect(&"V1".into(), &"V2".into(), 1.0).unwrap();
/// g.connect(&"V0".into(), &"V2".into(), 2.0).unwrap();
///
/// let tour = Christofides::new().calculate_optimum(&g).unwrap();
/// assert_eq!(tour.cost(), 4.0);
/// assert!(tour.is_hamiltonian_cycle(&g));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Christofides {
    config: ApproximationConfig,
    last: Option<Tour>,
}

impl Christofides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ApproximationConfig) -> Self {
        Self { config, last: None }
    }

    /// Visiting order as indices into `graph`'s vertex order.
    fn order(&self, graph: &Graph) -> Result<Vec<usize>> {
        let n = graph.num_vertices();
        let mst = minimum_spanning_tree(graph)?;
        if mst.num_edges() + 1 < n {
            return Err(Error::Disconnected {
                found: mst.num_edges(),
                expected: n - 1,
            });
        }

        let odd = odd_degree_subgraph(&mst, graph)?;
        let mut matching = greedy_matching(&odd)?;
        if !matching.is_perfect() && self.config.pair_unmatched {
            warn!(
                "pairing {} leftover odd vertices outside the matching",
                matching.unmatched.len()
            );
            pair_unmatched(&mut matching, graph)?;
        }
        debug!(
            "matching: {} edges over {} odd vertices",
            matching.graph.num_edges(),
            odd.num_vertices()
        );

        let multigraph = Multigraph::from_parts(graph, &mst, &matching.graph)?;
        let trail = multigraph
            .eulerian_circuit(0)
            .ok_or(Error::NotEulerian)?;
        debug!("eulerian circuit: {} links", trail.len());

        Ok(shortcut(&multigraph.walk(0, &trail)))
    }
}

impl TspSolver for Christofides {
    fn calculate_optimum(&mut self, graph: &Graph) -> Result<Tour> {
        if graph.num_vertices() <= 1 {
            return Err(Error::invalid_input(
                "a tour needs at least two vertices",
            ));
        }

        let path = self
            .order(graph)?
            .into_iter()
            .map(|i| graph.vertex_at(i).id().clone())
            .collect();
        let tour = Tour::from_path(graph, path)?;
        info!("approximation: {tour}");
        self.last = Some(tour.clone());
        Ok(tour)
    }

    fn last_tour(&self) -> Option<&Tour> {
        self.last.as_ref()
    }
}

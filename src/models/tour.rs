//! Tour produced by a solver.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Edge, VertexId};
use crate::error::{Error, Result};
use crate::graph::Graph;

/// A closed tour: an ordered vertex sequence, the edges realizing it, and
/// its total weight.
///
/// The closing edge back to the first vertex is included in `edges` but the
/// first vertex is not repeated in `vertices`.
///
/// # Examples
///
/// ```
/// use metric_tsp::graph::Graph;
/// use metric_tsp::models::Tour;
///
/// let mut g = Graph::with_vertices(3);
/// let (a, b, c) = ("V0".into(), "V1".into(), "V2".into());
/// g.connect(&a, &b, 1.0).unwrap();
/// g.connect(&b, &c, 2.0).unwrap();
/// g.connect(&c, &a, 3.0).unwrap();
///
/// let tour = Tour::from_path(&g, vec![a, b, c]).unwrap();
/// assert_eq!(tour.cost(), 6.0);
/// assert_eq!(tour.edges().len(), 3);
/// assert_eq!(tour.path_as_string(), "V0 V1 V2");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    vertices: Vec<VertexId>,
    edges: Vec<Edge>,
    cost: f64,
}

impl Tour {
    /// Realizes `path` as a cycle using direct edges of `graph`.
    ///
    /// Fails with [`Error::NoDirectEdge`] if two consecutive vertices (or the
    /// last and first) are not adjacent.
    pub fn from_path(graph: &Graph, path: Vec<VertexId>) -> Result<Self> {
        let mut edges = Vec::with_capacity(path.len());
        if path.len() > 1 {
            for (i, from) in path.iter().enumerate() {
                let to = &path[(i + 1) % path.len()];
                edges.push(graph.edge(from, to)?.clone());
            }
        }
        let cost = path_length(&edges)?;
        Ok(Self {
            vertices: path,
            edges,
            cost,
        })
    }

    /// Vertices in visiting order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Edges in traversal order, closing edge last.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Total tour weight.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of vertices visited.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the tour visits no vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Space-separated vertex ids in visiting order.
    pub fn path_as_string(&self) -> String {
        self.vertices
            .iter()
            .map(VertexId::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns `true` if this tour visits every vertex of `graph` exactly
    /// once and each step (including the return) follows a direct edge.
    pub fn is_hamiltonian_cycle(&self, graph: &Graph) -> bool {
        if self.vertices.len() != graph.num_vertices() {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.vertices.len());
        if !self
            .vertices
            .iter()
            .all(|v| graph.has_vertex(v) && seen.insert(v))
        {
            return false;
        }
        let n = self.vertices.len();
        n <= 1
            || (0..n).all(|i| graph.has_direct_edge(&self.vertices[i], &self.vertices[(i + 1) % n]))
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cost {}: {}", self.cost, self.path_as_string())
    }
}

/// Sums edge weights along a path.
///
/// Fails with [`Error::UnsupportedWeightType`] if a weight is NaN.
pub fn path_length(edges: &[Edge]) -> Result<f64> {
    edges.iter().try_fold(0.0, |acc, e| {
        if e.weight().is_nan() {
            Err(Error::UnsupportedWeightType(format!(
                "NaN weight on edge {}-{}",
                e.v1(),
                e.v2()
            )))
        } else {
            Ok(acc + e.weight())
        }
    })
}

//! Undirected weighted edge.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::VertexId;

/// An unordered pair of vertex identities with a weight.
///
/// Edges order by weight first (via [`f64::total_cmp`]), then by the
/// canonical `(min, max)` endpoint pair, so an edge and its reversed twin
/// compare equal. This is the order Kruskal's algorithm walks.
///
/// # Examples
///
/// ```
/// use metric_tsp::graph::Graph;
///
/// let mut g = Graph::with_vertices(3);
/// let a = g.connect(&"V0".into(), &"V1".into(), 2.0).unwrap();
/// let c = g.connect(&"V0".into(), &"V2".into(), 1.0).unwrap();
/// let b = g.edge(&"V1".into(), &"V0".into()).unwrap();
/// assert_eq!(&a, b);
/// assert!(c < a);
/// assert_eq!(a.other(&"V1".into()).map(|v| v.as_str()), Some("V0"));
/// ```
///
/// Edges only come from [`Graph::connect`](crate::graph::Graph::connect):
///
/// ```compile_fail
/// use metric_tsp::models::{Edge, VertexId};
///
/// let e = Edge::new(VertexId::from("V0"), VertexId::from("V1"), 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    v1: VertexId,
    v2: VertexId,
    weight: f64,
}

impl Edge {
    pub(crate) fn new(v1: VertexId, v2: VertexId, weight: f64) -> Self {
        Self { v1, v2, weight }
    }

    pub fn v1(&self) -> &VertexId {
        &self.v1
    }

    pub fn v2(&self) -> &VertexId {
        &self.v2
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    pub fn other(&self, v: &VertexId) -> Option<&VertexId> {
        if &self.v1 == v {
            Some(&self.v2)
        } else if &self.v2 == v {
            Some(&self.v1)
        } else {
            None
        }
    }

    /// Returns `true` if `v` is one of the endpoints.
    pub fn touches(&self, v: &VertexId) -> bool {
        &self.v1 == v || &self.v2 == v
    }

    /// Endpoints as `(min, max)`.
    pub fn canonical(&self) -> (&VertexId, &VertexId) {
        if self.v1 <= self.v2 {
            (&self.v1, &self.v2)
        } else {
            (&self.v2, &self.v1)
        }
    }

    /// Overwrites the weight. Used by metric closure only.
    pub(crate) fn update_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.canonical().cmp(&other.canonical()))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} ({})", self.v1, self.v2, self.weight)
    }
}
